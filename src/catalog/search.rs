use crate::catalog::item::MenuItem;

/// Turns raw search box text into the term used for matching.
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Filters the whole item list by a case-insensitive substring match on
/// name, description and category, keeping source order.
///
/// `term` must already be normalized with [`normalize_term`]. Callers decide
/// what an empty term means; here it matches every item.
pub fn search<'a>(items: &'a [MenuItem], term: &str) -> Vec<&'a MenuItem> {
    items.iter().filter(|item| item.matches(term)).collect()
}
