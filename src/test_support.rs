//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use serde_json::Value;
use std::sync::{Arc, Mutex};

use crate::core::catalog::{Catalog, Page};
use crate::core::tracking::{ActionTracker, SEARCH_EVENT, TrackedEvent};

/// Build a page without the struct literal noise.
pub fn page(url_id: &str, category: &str, title: &str, description: &str, kind: &str) -> Page {
    Page {
        url_id: url_id.to_string(),
        category: category.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        kind: kind.to_string(),
    }
}

/// Three categories, pages interleaved across them in source order.
pub fn sample_catalog() -> Catalog {
    Catalog::new(
        vec![
            "Guides".to_string(),
            "Reference".to_string(),
            "Tutorials".to_string(),
        ],
        vec![
            page("getting-started", "Guides", "Getting Started", "intro to the platform", "guide"),
            page("api", "Reference", "API", "Every endpoint", "reference"),
            page("deploying", "Guides", "Deploying", "Ship to production", "guide"),
            page("config", "Reference", "Configuration", "All settings", "reference"),
            page("first-app", "Tutorials", "Your First App", "Build a todo list", "tutorial"),
        ],
    )
}

/// Collects tracked events in memory.
#[derive(Default)]
pub struct RecordingTracker {
    events: Mutex<Vec<TrackedEvent>>,
}

impl RecordingTracker {
    pub fn events(&self) -> Vec<TrackedEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Queries reported by `"Search"` events, in order.
    pub fn queries(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.name == SEARCH_EVENT)
            .filter_map(|e| e.metadata?.get("query")?.as_str().map(str::to_string))
            .collect()
    }
}

impl ActionTracker for RecordingTracker {
    fn track(&self, event: &str, metadata: Option<Value>) {
        self.events
            .lock()
            .unwrap()
            .push(TrackedEvent::new(event, metadata));
    }
}

/// Creates a test App with a recording tracker.
pub fn test_app() -> (crate::core::state::App, Arc<RecordingTracker>) {
    let recorder = Arc::new(RecordingTracker::default());
    let app = crate::core::state::App::new(sample_catalog(), recorder.clone());
    (app, recorder)
}
