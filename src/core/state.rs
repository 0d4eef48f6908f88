//! # Application State
//!
//! Core finder state. Domain only, no TUI types. Selection and scroll live in
//! the `tui` module.
//!
//! ```text
//! App
//! ├── docs: Catalog                          // props: the catalog (empty until loaded)
//! ├── current_id: Option<String>             // props: page being viewed
//! ├── selected_version_tag: Option<VersionTag> // props: forwarded into links
//! ├── query: String                          // local state: the search text
//! ├── status_message: String                 // status line text
//! ├── error: Option<String>                  // last load error
//! ├── tracker: Arc<dyn ActionTracker>        // analytics collaborator
//! └── navigator: Arc<dyn Navigator>          // link collaborator
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::link::{Navigator, PathNavigator, Route, VersionTag};
use crate::core::tracking::ActionTracker;
use crate::core::view::FinderView;

pub const DEFAULT_BASE_PATH: &str = "/docs";

pub struct App {
    pub docs: Catalog,
    pub current_id: Option<String>,
    pub selected_version_tag: Option<VersionTag>,
    pub query: String,
    pub status_message: String,
    pub error: Option<String>,
    pub tracker: Arc<dyn ActionTracker>,
    pub navigator: Arc<dyn Navigator>,
}

impl App {
    pub fn new(docs: Catalog, tracker: Arc<dyn ActionTracker>) -> Self {
        Self {
            docs,
            current_id: None,
            selected_version_tag: None,
            query: String::new(),
            status_message: String::new(),
            error: None,
            tracker,
            navigator: Arc::new(PathNavigator::new(DEFAULT_BASE_PATH)),
        }
    }

    /// Start with an empty catalog; the real one arrives via `Action::CatalogLoaded`.
    pub fn from_config(config: &ResolvedConfig, tracker: Arc<dyn ActionTracker>) -> Self {
        Self {
            current_id: config.current_id.clone(),
            selected_version_tag: config.version_tag.clone().map(VersionTag),
            navigator: Arc::new(PathNavigator::new(config.base_path.clone())),
            ..Self::new(Catalog::default(), tracker)
        }
    }

    pub fn view(&self) -> FinderView<'_> {
        FinderView::build(
            &self.docs,
            &self.query,
            self.current_id.as_deref(),
            self.selected_version_tag.as_ref(),
        )
    }

    /// The logo link.
    pub fn home_route(&self) -> Route {
        Route::Home {
            version_tag: self.selected_version_tag.clone(),
        }
    }

    pub fn href(&self, route: &Route) -> String {
        self.navigator.href(route)
    }

    /// The cancel affordance is only shown for a non-empty query.
    pub fn can_clear(&self) -> bool {
        !self.query.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let (app, _) = test_app();
        assert!(app.query.is_empty());
        assert!(app.current_id.is_none());
        assert!(!app.can_clear());
        assert_eq!(app.href(&app.home_route()), "/docs");
    }

    #[test]
    fn test_from_config_starts_loading() {
        let config = ResolvedConfig {
            current_id: Some("api".to_string()),
            version_tag: Some("v3".to_string()),
            base_path: "/manual".to_string(),
            ..ResolvedConfig::default()
        };
        let (_, recorder) = test_app();
        let app = App::from_config(&config, recorder);
        assert_eq!(app.view(), FinderView::Loading);
        assert_eq!(app.current_id.as_deref(), Some("api"));
        assert_eq!(app.href(&app.home_route()), "/manual/v3");
    }
}
