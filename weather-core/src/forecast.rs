//! Reduce 3-hourly forecast samples to per-day summaries.

use chrono::{DateTime, Datelike, NaiveDate, Weekday};

use crate::{
    error::WeatherError,
    mapping::{classify_condition, translate},
    model::{DailyForecastSummary, round_half_up},
};

/// Number of days kept in a forecast.
pub const MAX_FORECAST_DAYS: usize = 5;

/// One 3-hourly forecast sample as returned upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    /// Unix timestamp, seconds.
    pub timestamp: i64,
    pub temperature: f64,
    pub description: String,
    pub main: String,
    pub code: i64,
}

/// Samples sharing one UTC calendar date.
#[derive(Debug, Clone)]
struct DayBucket<'a> {
    date: NaiveDate,
    samples: Vec<&'a ForecastSample>,
}

impl DayBucket<'_> {
    fn summarize(&self) -> Option<DailyForecastSummary> {
        let first = self.samples.first()?;
        let (high, low) = self.samples.iter().fold(
            (f64::NEG_INFINITY, f64::INFINITY),
            |(high, low), s| (high.max(s.temperature), low.min(s.temperature)),
        );

        Some(DailyForecastSummary {
            date: short_date(self.date),
            day_name: weekday_name(self.date.weekday()).to_string(),
            high: round_half_up(high),
            low: round_half_up(low),
            description: translate(&first.description),
            condition: classify_condition(&first.main, first.code),
        })
    }
}

/// Group samples by UTC date in first-seen order and summarize the first
/// [`MAX_FORECAST_DAYS`] groups.
pub fn summarize_forecast(
    samples: &[ForecastSample],
) -> Result<Vec<DailyForecastSummary>, WeatherError> {
    let mut buckets: Vec<DayBucket<'_>> = Vec::new();

    for sample in samples {
        let date = utc_date(sample.timestamp)?;
        match buckets.iter_mut().find(|b| b.date == date) {
            Some(bucket) => bucket.samples.push(sample),
            None => buckets.push(DayBucket { date, samples: vec![sample] }),
        }
    }

    Ok(buckets
        .iter()
        .take(MAX_FORECAST_DAYS)
        .filter_map(DayBucket::summarize)
        .collect())
}

fn utc_date(timestamp: i64) -> Result<NaiveDate, WeatherError> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.date_naive())
        .ok_or_else(|| WeatherError::upstream(format!("invalid forecast timestamp {timestamp}")))
}

/// `dd/MM`, as the vi-VN locale prints a day and month.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

/// Long Vietnamese weekday name.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Thứ Hai",
        Weekday::Tue => "Thứ Ba",
        Weekday::Wed => "Thứ Tư",
        Weekday::Thu => "Thứ Năm",
        Weekday::Fri => "Thứ Sáu",
        Weekday::Sat => "Thứ Bảy",
        Weekday::Sun => "Chủ Nhật",
    }
}
