//! Bundled country -> city reference data for the cascading selector.
//!
//! This is static application data, not an API resource; it ships inside
//! the WASM bundle and is parsed once on first access.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GeoIndex {
    countries: Vec<String>,
    #[serde(rename = "citiesByCountry")]
    cities_by_country: HashMap<String, Vec<String>>,
}

impl GeoIndex {
    /// Ordered list of selectable countries.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Cities offered for `country`; empty for a country the mapping does
    /// not know.
    pub fn cities_for(&self, country: &str) -> &[String] {
        self.cities_by_country
            .get(country)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

static INDEX: Lazy<GeoIndex> = Lazy::new(|| {
    serde_json::from_str(include_str!("countries.json"))
        .expect("bundled countries.json is well-formed")
});

pub fn index() -> &'static GeoIndex {
    &INDEX
}

/// The cascading rule: city options for the newly selected country, plus
/// whether the current city selection is still among them. A selection that
/// does not survive must be cleared by the caller.
pub fn refilter(index: &GeoIndex, country: &str, current_city: &str) -> (Vec<String>, bool) {
    let options = index.cities_for(country).to_vec();
    let keep = !current_city.is_empty() && options.iter().any(|city| city == current_city);
    (options, keep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_country_lists_its_cities() {
        let (options, _) = refilter(index(), "USA", "");
        assert!(options.iter().any(|c| c == "Austin"));
    }

    #[test]
    fn unknown_country_yields_empty_options_and_drops_the_city() {
        let (options, keep) = refilter(index(), "Atlantis", "Austin");
        assert!(options.is_empty());
        assert!(!keep);
    }

    #[test]
    fn surviving_city_is_kept() {
        // Edit-mode entry: stored country + city must remain visible.
        let (options, keep) = refilter(index(), "USA", "Austin");
        assert!(keep);
        assert!(options.contains(&"Austin".to_string()));
    }

    #[test]
    fn city_from_another_country_is_dropped() {
        let (_, keep) = refilter(index(), "Germany", "Austin");
        assert!(!keep);
    }

    #[test]
    fn empty_city_never_counts_as_kept() {
        let (_, keep) = refilter(index(), "USA", "");
        assert!(!keep);
    }
}
