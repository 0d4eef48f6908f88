//! # Finder View Model
//!
//! Turns props and the query into exactly what should be on screen. Pure:
//! the TUI renders a `FinderView` without making further decisions.
//!
//! ```text
//! pages empty?            → Loading
//! nothing matches query?  → NoResults
//! otherwise               → Categories (empty groups omitted)
//! ```

use crate::core::catalog::{Catalog, Page};
use crate::core::filter::{filter_pages, pages_in_category};
use crate::core::link::{Route, VersionTag};

pub const LOADING_TEXT: &str = "Loading...";
pub const NO_RESULTS_TEXT: &str = "Your search didn't match any results.";

#[derive(Debug, Clone, PartialEq)]
pub enum FinderView<'a> {
    Loading,
    NoResults,
    Categories(Vec<CategorySection<'a>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySection<'a> {
    pub name: &'a str,
    pub entries: Vec<DocEntry<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocEntry<'a> {
    pub page: &'a Page,
    pub route: Route,
    pub is_current: bool,
}

impl<'a> FinderView<'a> {
    /// Build the view for the given props and query.
    pub fn build(
        docs: &'a Catalog,
        query: &str,
        current_id: Option<&str>,
        version_tag: Option<&VersionTag>,
    ) -> Self {
        if docs.is_loading() {
            return FinderView::Loading;
        }

        let pages = filter_pages(&docs.pages, query);
        if pages.is_empty() {
            return FinderView::NoResults;
        }

        let sections = docs
            .categories
            .iter()
            .filter_map(|category| {
                let category_pages = pages_in_category(&pages, category);
                if category_pages.is_empty() {
                    return None;
                }
                let entries = category_pages
                    .into_iter()
                    .map(|page| DocEntry {
                        page,
                        route: Route::Doc {
                            doc_id: page.url_id.clone(),
                            version_tag: version_tag.cloned(),
                        },
                        is_current: current_id == Some(page.url_id.as_str()),
                    })
                    .collect();
                Some(CategorySection {
                    name: category.as_str(),
                    entries,
                })
            })
            .collect();

        FinderView::Categories(sections)
    }

    /// All visible entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = &DocEntry<'a>> {
        let sections: &[CategorySection<'a>] = match self {
            FinderView::Categories(sections) => sections,
            _ => &[],
        };
        sections.iter().flat_map(|section| section.entries.iter())
    }

    pub fn entry_count(&self) -> usize {
        self.entries().count()
    }

    /// Message for the empty states, `None` when there is a list to show.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            FinderView::Loading => Some(LOADING_TEXT),
            FinderView::NoResults => Some(NO_RESULTS_TEXT),
            FinderView::Categories(_) => None,
        }
    }
}
