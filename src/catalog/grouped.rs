use std::collections::HashMap;

use crate::catalog::item::MenuItem;

/// Items grouped by category, built once when the menu is loaded.
///
/// Keeps the full item list in source order, the category display order
/// and, per category, the indices of its items.
#[derive(Debug, Clone, Default)]
pub struct GroupedCatalog {
    items: Vec<MenuItem>,
    categories: Vec<String>,
    discovered: Vec<String>,
    groups: HashMap<String, Vec<usize>>,
}

impl GroupedCatalog {
    /// Groups `items` by category.
    ///
    /// The display order is `explicit_categories` when it is non-empty,
    /// otherwise the categories in the order they first appear in `items`.
    pub fn build(items: Vec<MenuItem>, explicit_categories: Vec<String>) -> Self {
        let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
        let mut discovered = Vec::new();

        for (idx, item) in items.iter().enumerate() {
            let group = groups.entry(item.category.clone()).or_insert_with(|| {
                discovered.push(item.category.clone());
                Vec::new()
            });
            group.push(idx);
        }

        let categories = if explicit_categories.is_empty() {
            discovered.clone()
        } else {
            explicit_categories
        };

        Self {
            items,
            categories,
            discovered,
            groups,
        }
    }

    /// All items in source order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Categories in display order, one pill each.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The category shown when the menu opens.
    pub fn initial_category(&self) -> Option<&str> {
        self.categories
            .first()
            .or_else(|| self.discovered.first())
            .map(String::as_str)
    }

    /// Items of `category` in source order. Unknown categories are empty.
    pub fn items_in(&self, category: &str) -> Vec<&MenuItem> {
        self.groups
            .get(category)
            .map(|indices| indices.iter().map(|&i| &self.items[i]).collect())
            .unwrap_or_default()
    }

    pub fn count_in(&self, category: &str) -> usize {
        self.groups.get(category).map_or(0, Vec::len)
    }

    /// Categories that have items but no pill in the display order.
    ///
    /// Their items can only be reached through search.
    pub fn hidden_categories(&self) -> Vec<&str> {
        self.discovered
            .iter()
            .filter(|c| !self.categories.contains(c))
            .map(String::as_str)
            .collect()
    }
}
