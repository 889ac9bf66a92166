use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::job::CategoryId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Category storage as seen by the matcher: id → display name, and the
/// reverse lookup from a name slug back to an id.
pub trait CategoryDirectory: Send + Sync {
    fn category_name(&self, id: &CategoryId) -> Option<String>;
    fn category_by_slug(&self, slug: &str) -> Option<CategoryId>;
}

/// In-memory directory built once from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticCategoryDirectory {
    names: HashMap<CategoryId, String>,
    slugs: HashMap<String, CategoryId>,
}

impl StaticCategoryDirectory {
    pub fn new(categories: Vec<Category>) -> Self {
        let mut names = HashMap::new();
        let mut slugs = HashMap::new();
        for category in categories {
            slugs
                .entry(category_slug(&category.name))
                .or_insert_with(|| category.id.clone());
            names.insert(category.id, category.name);
        }
        Self { names, slugs }
    }
}

impl CategoryDirectory for StaticCategoryDirectory {
    fn category_name(&self, id: &CategoryId) -> Option<String> {
        self.names.get(id).cloned()
    }

    fn category_by_slug(&self, slug: &str) -> Option<CategoryId> {
        self.slugs.get(slug).cloned()
    }
}

/// "Computer Science" → "computer_science".
pub fn category_slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Looks up categories considered close enough to earn partial credit.
#[derive(Clone)]
pub struct RelatedCategoryResolver {
    related: BTreeMap<String, Vec<String>>,
    directory: Arc<dyn CategoryDirectory>,
}

impl RelatedCategoryResolver {
    pub fn new(related: BTreeMap<String, Vec<String>>, directory: Arc<dyn CategoryDirectory>) -> Self {
        Self { related, directory }
    }

    /// Related ids for `category`. Empty when the directory cannot name the
    /// category or the table has no entry for it. Related slugs the directory
    /// does not know are returned as slug-shaped ids.
    pub fn related_categories_of(&self, category: &CategoryId) -> BTreeSet<CategoryId> {
        let Some(name) = self.directory.category_name(category) else {
            debug!(category = %category, "category has no name, no related categories");
            return BTreeSet::new();
        };

        let Some(related) = self.related.get(&category_slug(&name)) else {
            return BTreeSet::new();
        };

        related
            .iter()
            .map(|slug| {
                self.directory
                    .category_by_slug(slug)
                    .unwrap_or_else(|| CategoryId::new(slug.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::tables::MatchingTables;

    fn make_directory(entries: &[(&str, &str)]) -> Arc<dyn CategoryDirectory> {
        Arc::new(StaticCategoryDirectory::new(
            entries
                .iter()
                .map(|(id, name)| Category {
                    id: CategoryId::new(*id),
                    name: name.to_string(),
                })
                .collect(),
        ))
    }

    #[test]
    fn test_slug_normalization() {
        assert_eq!(category_slug("Computer Science"), "computer_science");
        assert_eq!(category_slug("  Business   Administration "), "business_administration");
    }

    #[test]
    fn test_numeric_ids_resolve_through_directory() {
        let directory = make_directory(&[
            ("1", "Computer Science"),
            ("2", "Information Technology"),
            ("3", "Data Science"),
        ]);
        let resolver =
            RelatedCategoryResolver::new(MatchingTables::default().related_categories, directory);

        let related = resolver.related_categories_of(&CategoryId::new("1"));
        assert!(related.contains(&CategoryId::new("2")));
        assert!(related.contains(&CategoryId::new("3")));
        // not in the directory, falls back to the slug
        assert!(related.contains(&CategoryId::new("software_development")));
        assert_eq!(related.len(), 3);
    }

    #[test]
    fn test_unknown_or_unmapped_category_is_empty() {
        let directory = make_directory(&[("9", "Nursing")]);
        let resolver =
            RelatedCategoryResolver::new(MatchingTables::default().related_categories, directory);
        assert!(resolver.related_categories_of(&CategoryId::new("9")).is_empty());
        assert!(resolver.related_categories_of(&CategoryId::new("404")).is_empty());
    }
}
