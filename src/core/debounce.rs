//! # Debouncer
//!
//! Trailing-edge debounce on top of tokio tasks. Each `schedule()` aborts the
//! pending call (if any) and spawns a new task that sleeps for the quiet
//! period before running. Only the last call in a burst fires.
//!
//! ```text
//! schedule(a) ──100ms── schedule(ab) ──500ms── ab fires
//!      └── aborted ──────────┘
//! ```
//!
//! Dropping the debouncer cancels any pending call, so nothing fires after
//! the owning component is torn down.
//!
//! Must be used from within a tokio runtime.

use std::time::Duration;
use tokio::task::AbortHandle;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<AbortHandle>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Run `f` once `delay` passes without another `schedule()` call.
    pub fn schedule<F>(&mut self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            f();
        });
        self.pending = Some(handle.abort_handle());
    }

    /// Drop the pending call without running it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::time::sleep;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce() + Send>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let make = move |label: &'static str| {
            let sink = sink.clone();
            Box::new(move || sink.lock().unwrap().push(label)) as Box<dyn FnOnce() + Send>
        };
        (calls, make)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_fires_once_with_last_value() {
        let (calls, make) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        debouncer.schedule(make("a"));
        sleep(Duration::from_millis(100)).await;
        debouncer.schedule(make("ab"));
        sleep(Duration::from_millis(600)).await;

        assert_eq!(*calls.lock().unwrap(), vec!["ab"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_fires_each_call() {
        let (calls, make) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        debouncer.schedule(make("a"));
        sleep(Duration::from_millis(600)).await;
        debouncer.schedule(make("ab"));
        sleep(Duration::from_millis(600)).await;

        assert_eq!(*calls.lock().unwrap(), vec!["a", "ab"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_fires_before_quiet_period() {
        let (calls, make) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        debouncer.schedule(make("a"));
        sleep(Duration::from_millis(499)).await;
        assert!(calls.lock().unwrap().is_empty());
        assert!(debouncer.is_pending());

        sleep(Duration::from_millis(2)).await;
        assert_eq!(*calls.lock().unwrap(), vec!["a"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending() {
        let (calls, make) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        debouncer.schedule(make("a"));
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        sleep(Duration::from_millis(600)).await;

        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending() {
        let (calls, make) = recorder();
        {
            let mut debouncer = Debouncer::default();
            debouncer.schedule(make("a"));
        }
        sleep(Duration::from_millis(600)).await;

        assert!(calls.lock().unwrap().is_empty());
    }
}
