//! # Page Filtering
//!
//! Linear, case-insensitive substring search over category, title and
//! description. Order always follows the source collection.

use crate::core::catalog::Page;

/// Filter pages by a raw query.
///
/// An empty query returns every page. The query is not trimmed, so a
/// whitespace-only query only matches pages containing that whitespace.
pub fn filter_pages<'a>(pages: &'a [Page], query: &str) -> Vec<&'a Page> {
    if query.is_empty() {
        return pages.iter().collect();
    }

    let query = query.to_lowercase();
    pages.iter().filter(|page| matches(page, &query)).collect()
}

/// `query` must already be lower-cased.
fn matches(page: &Page, query: &str) -> bool {
    page.category.to_lowercase().contains(query)
        || page.title.to_lowercase().contains(query)
        || page.description.to_lowercase().contains(query)
}

/// Pages from `pages` that belong to `category`, in order.
pub fn pages_in_category<'a>(pages: &[&'a Page], category: &str) -> Vec<&'a Page> {
    pages
        .iter()
        .copied()
        .filter(|page| page.category == category)
        .collect()
}
