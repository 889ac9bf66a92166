use serde::{Deserialize, Serialize};

/// One region and the city names that place a location inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionEntry {
    pub region: String,
    pub cities: Vec<String>,
}

/// Resolves free-text locations to a region by case-insensitive city
/// substring. Entries are checked in table order; the first hit wins.
#[derive(Debug, Clone, Default)]
pub struct RegionResolver {
    entries: Vec<(String, Vec<String>)>,
}

impl RegionResolver {
    pub fn new(entries: Vec<RegionEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| {
                let cities = entry
                    .cities
                    .iter()
                    .map(|c| c.trim().to_lowercase())
                    .filter(|c| !c.is_empty())
                    .collect();
                (entry.region, cities)
            })
            .collect();
        Self { entries }
    }

    /// Unrecognized locations come back unchanged, so two of them only share
    /// a region when they are textually identical.
    pub fn region_of(&self, location: &str) -> String {
        let lower = location.to_lowercase();
        self.entries
            .iter()
            .find(|(_, cities)| cities.iter().any(|city| lower.contains(city.as_str())))
            .map(|(region, _)| region.clone())
            .unwrap_or_else(|| location.to_string())
    }
}
