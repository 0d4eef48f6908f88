//! # Action Tracking
//!
//! Fire-and-forget analytics. The finder never depends on a concrete
//! transport: it is handed an `ActionTracker` and calls `track()`.
//!
//! `SearchTracker` wraps a tracker with the finder's reporting rules:
//! - `"Search"` is debounced, so only the query the user settled on is sent.
//! - `"Search Cleared"` is sent immediately.

use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

use crate::core::debounce::Debouncer;

pub const SEARCH_EVENT: &str = "Search";
pub const SEARCH_CLEARED_EVENT: &str = "Search Cleared";

/// Records a named event with optional metadata.
pub trait ActionTracker: Send + Sync {
    fn track(&self, event: &str, metadata: Option<Value>);
}

/// A tracked event, timestamped when recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackedEvent {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    pub at: DateTime<Utc>,
}

impl TrackedEvent {
    pub fn new(name: &str, metadata: Option<Value>) -> Self {
        Self {
            name: name.to_string(),
            metadata,
            at: Utc::now(),
        }
    }
}

/// Writes each event to the log as a line of JSON.
#[derive(Debug, Default)]
pub struct LogTracker;

impl ActionTracker for LogTracker {
    fn track(&self, event: &str, metadata: Option<Value>) {
        let event = TrackedEvent::new(event, metadata);
        match serde_json::to_string(&event) {
            Ok(line) => info!("track {line}"),
            Err(e) => info!("track {} (unserializable: {e})", event.name),
        }
    }
}

/// Applies the finder's search reporting rules on top of a tracker.
pub struct SearchTracker {
    tracker: Arc<dyn ActionTracker>,
    debouncer: Debouncer,
}

impl SearchTracker {
    pub fn new(tracker: Arc<dyn ActionTracker>, delay: Duration) -> Self {
        Self {
            tracker,
            debouncer: Debouncer::new(delay),
        }
    }

    /// Report `query` once input pauses. Replaces any pending report.
    pub fn search(&mut self, query: String) {
        let tracker = self.tracker.clone();
        self.debouncer.schedule(move || {
            tracker.track(SEARCH_EVENT, Some(json!({ "query": query })));
        });
    }

    /// Report a clear immediately. A pending search report is left alone.
    pub fn cleared(&self) {
        self.tracker.track(SEARCH_CLEARED_EVENT, None);
    }

    /// Cancel any pending search report.
    pub fn teardown(&mut self) {
        self.debouncer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingTracker;
    use tokio::time::sleep;

    fn search_tracker() -> (Arc<RecordingTracker>, SearchTracker) {
        let recorder = Arc::new(RecordingTracker::default());
        let tracker = SearchTracker::new(recorder.clone(), Duration::from_millis(500));
        (recorder, tracker)
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_within_window_tracks_once() {
        let (recorder, mut tracker) = search_tracker();

        tracker.search("a".to_string());
        sleep(Duration::from_millis(200)).await;
        tracker.search("ab".to_string());
        sleep(Duration::from_millis(600)).await;

        assert_eq!(recorder.queries(), vec!["ab"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_after_pause_tracks_twice() {
        let (recorder, mut tracker) = search_tracker();

        tracker.search("a".to_string());
        sleep(Duration::from_millis(600)).await;
        tracker.search("ab".to_string());
        sleep(Duration::from_millis(600)).await;

        assert_eq!(recorder.queries(), vec!["a", "ab"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleared_is_immediate() {
        let (recorder, tracker) = search_tracker();

        tracker.cleared();

        let events = recorder.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, SEARCH_CLEARED_EVENT);
        assert_eq!(events[0].metadata, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_does_not_cancel_pending_search() {
        let (recorder, mut tracker) = search_tracker();

        tracker.search("rust".to_string());
        tracker.cleared();
        sleep(Duration::from_millis(600)).await;

        let names: Vec<String> = recorder.events().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec![SEARCH_CLEARED_EVENT, SEARCH_EVENT]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_pending_search() {
        let (recorder, mut tracker) = search_tracker();

        tracker.search("rust".to_string());
        tracker.teardown();
        sleep(Duration::from_millis(600)).await;

        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_tracked_event_serialization() {
        let event = TrackedEvent::new(SEARCH_EVENT, Some(json!({ "query": "x" })));
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["name"], "Search");
        assert_eq!(value["metadata"]["query"], "x");

        let bare = serde_json::to_value(TrackedEvent::new(SEARCH_CLEARED_EVENT, None)).unwrap();
        assert!(bare.get("metadata").is_none());
    }
}
