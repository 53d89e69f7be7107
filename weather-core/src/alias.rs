//! Preferred display names for well-known Vietnamese cities.
//!
//! Reverse geocoding returns names such as "Thanh Pho Ha Noi"; coordinate
//! lookups near one of these cities are re-labelled with the canonical name.

use crate::mapping::search_key;

/// Maximum distance, in degrees on each axis, for a coordinate match.
pub const PROXIMITY_DEGREES: f64 = 0.15;

#[derive(Debug, Clone, Copy)]
pub struct CityAlias {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub aliases: &'static [&'static str],
}

impl CityAlias {
    fn matches(&self, provider_name: &str, lat: f64, lon: f64) -> bool {
        let wanted = search_key(provider_name);
        self.aliases.iter().any(|alias| search_key(alias) == wanted)
            || ((self.lat - lat).abs() < PROXIMITY_DEGREES
                && (self.lon - lon).abs() < PROXIMITY_DEGREES)
    }
}

pub static CITY_ALIASES: &[CityAlias] = &[
    CityAlias {
        name: "Đà Nẵng",
        lat: 16.0471,
        lon: 108.2068,
        aliases: &[
            "Thanh Pho GJa Nang",
            "Da Nang",
            "Danang",
            "Thanh Pho Da Nang",
            "THANH PHO GJA NANG",
        ],
    },
    CityAlias {
        name: "Hồ Chí Minh",
        lat: 10.7769,
        lon: 106.7009,
        aliases: &[
            "Thanh Pho Ho Chi Minh",
            "Ho Chi Minh City",
            "Ho Chi Minh",
            "TP Ho Chi Minh",
            "THANH PHO HO CHI MINH",
        ],
    },
    CityAlias {
        name: "Hà Nội",
        lat: 21.0285,
        lon: 105.8542,
        aliases: &["Ha Noi", "Hanoi", "Thanh Pho Ha Noi", "THANH PHO HA NOI"],
    },
];

/// First alias entry matching either the provider name or the query coordinates.
pub fn find_alias(provider_name: &str, lat: f64, lon: f64) -> Option<&'static CityAlias> {
    CITY_ALIASES
        .iter()
        .find(|city| city.matches(provider_name, lat, lon))
}

/// Display name for a coordinate lookup: canonical when known, else verbatim.
pub fn resolve_display_name(provider_name: &str, lat: f64, lon: f64) -> String {
    find_alias(provider_name, lat, lon)
        .map(|city| city.name.to_string())
        .unwrap_or_else(|| provider_name.to_string())
}
