//! Static lookup data for the matcher. Built-in defaults can be replaced by a
//! JSON file named in `MATCHING_TABLES_PATH`.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::matching::categories::Category;
use crate::matching::region::RegionEntry;
use crate::models::job::CategoryId;

const DEFAULT_REGIONS: &[(&str, &[&str])] = &[
    ("British Columbia", &["vancouver", "victoria", "surrey", "richmond"]),
    ("Ontario", &["toronto", "ottawa", "mississauga"]),
];

const DEFAULT_RELATED: &[(&str, &[&str])] = &[
    (
        "computer_science",
        &["information_technology", "software_development", "data_science"],
    ),
    (
        "information_technology",
        &["computer_science", "cybersecurity", "network_administration"],
    ),
    ("accounting", &["finance", "banking", "business_administration"]),
    (
        "business_administration",
        &["human_resources", "operations", "accounting"],
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingTables {
    #[serde(default)]
    pub regions: Vec<RegionEntry>,
    #[serde(default)]
    pub related_categories: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Default for MatchingTables {
    fn default() -> Self {
        let regions = DEFAULT_REGIONS
            .iter()
            .map(|(region, cities)| RegionEntry {
                region: region.to_string(),
                cities: cities.iter().map(|c| c.to_string()).collect(),
            })
            .collect();

        let related_categories: BTreeMap<String, Vec<String>> = DEFAULT_RELATED
            .iter()
            .map(|(slug, related)| {
                (
                    slug.to_string(),
                    related.iter().map(|r| r.to_string()).collect(),
                )
            })
            .collect();

        let categories = categories_from_slugs(&related_categories);

        Self {
            regions,
            related_categories,
            categories,
        }
    }
}

impl MatchingTables {
    /// Reads tables from a JSON file. A file without `categories` gets one
    /// category per slug, as the built-in tables do.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read matching tables from {}", path.display()))?;
        let mut tables: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed matching tables in {}", path.display()))?;
        if tables.categories.is_empty() {
            tables.categories = categories_from_slugs(&tables.related_categories);
        }
        Ok(tables)
    }
}

/// Every slug mentioned anywhere becomes a category whose id is the slug.
fn categories_from_slugs(related_categories: &BTreeMap<String, Vec<String>>) -> Vec<Category> {
    let mut slugs: Vec<&String> = related_categories
        .iter()
        .flat_map(|(slug, related)| std::iter::once(slug).chain(related.iter()))
        .collect();
    slugs.sort();
    slugs.dedup();

    slugs
        .into_iter()
        .map(|slug| Category {
            id: CategoryId::new(slug.clone()),
            name: title_case(slug),
        })
        .collect()
}

/// "computer_science" → "Computer Science".
fn title_case(slug: &str) -> String {
    slug.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_cover_every_related_slug() {
        let tables = MatchingTables::default();
        assert_eq!(tables.regions.len(), 2);
        assert_eq!(tables.related_categories.len(), 4);
        for related in tables.related_categories.values().flatten() {
            assert!(
                tables.categories.iter().any(|c| c.id.as_str() == related),
                "missing category for {related}"
            );
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("computer_science"), "Computer Science");
        assert_eq!(title_case("finance"), "Finance");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "regions": [{{"region": "Alberta", "cities": ["calgary", "edmonton"]}}],
                "related_categories": {{"nursing": ["healthcare"]}},
                "categories": [{{"id": 7, "name": "Nursing"}}]
            }}"#
        )
        .unwrap();

        let tables = MatchingTables::load(file.path()).unwrap();
        assert_eq!(tables.regions[0].region, "Alberta");
        assert_eq!(tables.related_categories["nursing"], vec!["healthcare"]);
        assert_eq!(tables.categories[0].id, CategoryId::new("7"));
    }

    #[test]
    fn test_load_without_categories_derives_them_from_slugs() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"related_categories": {{"computer_science": ["data_science"]}}}}"#
        )
        .unwrap();

        let tables = MatchingTables::load(file.path()).unwrap();
        assert!(tables.regions.is_empty());
        assert_eq!(
            tables.categories,
            vec![
                Category {
                    id: CategoryId::new("computer_science"),
                    name: "Computer Science".to_string(),
                },
                Category {
                    id: CategoryId::new("data_science"),
                    name: "Data Science".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_load_reports_path_on_error() {
        let err = MatchingTables::load(Path::new("/nonexistent/tables.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/tables.json"));
    }
}
