//! # Actions
//!
//! Everything that can happen in the finder becomes an `Action`.
//! User types? That's `Action::QueryChanged(query)`.
//! Catalog arrives from disk? That's `Action::CatalogLoaded(catalog)`.
//!
//! `update()` mutates state synchronously and returns an `Effect` describing
//! the side effect the caller should run. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::catalog::Catalog;
use crate::core::link::Route;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Search field now holds this text.
    QueryChanged(String),
    /// Cancel affordance activated.
    ClearQuery,
    /// Follow the link of the page with this id.
    OpenDoc(String),
    /// Follow the logo link.
    OpenHome,
    CatalogLoaded(Catalog),
    CatalogFailed(String),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Report this query once input pauses.
    TrackSearch(String),
    /// Report the clear right away.
    TrackSearchCleared,
    Navigate(Route),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::QueryChanged(query) => {
            debug!("Query changed: {query:?}");
            app.query = query.clone();
            Effect::TrackSearch(query)
        }
        Action::ClearQuery => {
            if !app.can_clear() {
                return Effect::None;
            }
            app.query.clear();
            Effect::TrackSearchCleared
        }
        Action::OpenDoc(doc_id) => {
            let route = Route::Doc {
                doc_id: doc_id.clone(),
                version_tag: app.selected_version_tag.clone(),
            };
            app.status_message = format!("→ {}", app.href(&route));
            app.current_id = Some(doc_id);
            Effect::Navigate(route)
        }
        Action::OpenHome => {
            let route = app.home_route();
            app.status_message = format!("→ {}", app.href(&route));
            Effect::Navigate(route)
        }
        Action::CatalogLoaded(catalog) => {
            info!(
                "Catalog loaded: {} categories, {} pages",
                catalog.categories.len(),
                catalog.pages.len()
            );
            app.status_message = format!("{} pages", catalog.pages.len());
            app.error = None;
            app.docs = catalog;
            Effect::None
        }
        Action::CatalogFailed(error) => {
            warn!("Catalog failed to load: {error}");
            app.status_message = format!("Catalog error: {error}");
            app.error = Some(error);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::link::VersionTag;
    use crate::core::view::FinderView;
    use crate::test_support::test_app;

    #[test]
    fn test_query_changed_updates_synchronously() {
        let (mut app, _) = test_app();
        let effect = update(&mut app, Action::QueryChanged("api".to_string()));
        assert_eq!(app.query, "api");
        assert_eq!(effect, Effect::TrackSearch("api".to_string()));
        assert_eq!(app.view().entry_count(), 1);
    }

    #[test]
    fn test_clear_resets_query() {
        let (mut app, _) = test_app();
        update(&mut app, Action::QueryChanged("xyz".to_string()));
        assert_eq!(app.view(), FinderView::NoResults);

        let effect = update(&mut app, Action::ClearQuery);
        assert_eq!(effect, Effect::TrackSearchCleared);
        assert!(app.query.is_empty());
        assert_eq!(app.view().entry_count(), 5);
    }

    #[test]
    fn test_clear_with_empty_query_is_noop() {
        let (mut app, _) = test_app();
        assert_eq!(update(&mut app, Action::ClearQuery), Effect::None);
    }

    #[test]
    fn test_open_doc_marks_current() {
        let (mut app, _) = test_app();
        app.selected_version_tag = Some(VersionTag("v2".to_string()));

        let effect = update(&mut app, Action::OpenDoc("api".to_string()));

        assert_eq!(app.current_id.as_deref(), Some("api"));
        assert_eq!(app.status_message, "→ /docs/v2/api");
        assert_eq!(
            effect,
            Effect::Navigate(Route::Doc {
                doc_id: "api".to_string(),
                version_tag: Some(VersionTag("v2".to_string())),
            })
        );
    }

    #[test]
    fn test_open_home() {
        let (mut app, _) = test_app();
        let effect = update(&mut app, Action::OpenHome);
        assert_eq!(effect, Effect::Navigate(Route::Home { version_tag: None }));
        assert_eq!(app.status_message, "→ /docs");
    }

    #[test]
    fn test_catalog_loaded_replaces_docs() {
        let (mut app, _) = test_app();
        app.docs = Catalog::default();
        assert_eq!(app.view(), FinderView::Loading);

        update(&mut app, Action::CatalogLoaded(crate::test_support::sample_catalog()));

        assert_eq!(app.view().entry_count(), 5);
        assert_eq!(app.status_message, "5 pages");
    }

    #[test]
    fn test_catalog_failed_keeps_loading() {
        let (mut app, _) = test_app();
        app.docs = Catalog::default();

        update(&mut app, Action::CatalogFailed("boom".to_string()));

        assert_eq!(app.error.as_deref(), Some("boom"));
        assert_eq!(app.view(), FinderView::Loading);
    }

    #[test]
    fn test_quit() {
        let (mut app, _) = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
