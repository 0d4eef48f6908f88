//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the finder,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! The search field always has focus, so printable keys edit the query.
//! Up/Down/Enter drive the result list. Esc clears a non-empty query and
//! quits otherwise; Ctrl+C always quits.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after terminal events or
//! background actions (catalog load). It polls with a short timeout so
//! background actions are picked up promptly.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{info, warn};
use std::io::stdout;
use std::path::PathBuf;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::load_catalog;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::tracking::{ActionTracker, LogTracker, SearchTracker};
use crate::tui::component::EventHandler;
use crate::tui::components::{CategoryListEvent, CategoryListState, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// TUI-specific presentation state (not part of core finder logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub category_list: CategoryListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Cursor marks the end of the query
            SetCursorStyle::SteadyBlock, // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let tracker: Arc<dyn ActionTracker> = Arc::new(LogTracker);
    let mut app = App::from_config(&config, tracker.clone());
    let mut search_tracker = SearchTracker::new(tracker, config.debounce);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    match config.catalog_path.clone() {
        Some(path) => spawn_catalog_load(path, tx.clone()),
        None => {
            warn!("No catalog path configured");
            app.status_message = "No catalog configured (use --catalog)".to_string();
        }
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_TIMEOUT);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(&event, &app, &mut tui) {
                let effect = update(&mut app, action);
                if apply_effect(effect, &mut search_tracker) {
                    should_quit = true;
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (catalog load)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            let effect = update(&mut app, action);
            if apply_effect(effect, &mut search_tracker) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    // No pending search report may fire after the finder is gone
    search_tracker.teardown();

    ratatui::restore();
    Ok(())
}

/// Translate a terminal event into a core action, updating TUI-local state.
fn route_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Resize => None,
        TuiEvent::OpenHome => Some(Action::OpenHome),
        TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::Submit => {
            let view = app.view();
            tui.category_list.sync(view.entry_count());
            match tui.category_list.handle_event(event)? {
                CategoryListEvent::Open(index) => view
                    .entries()
                    .nth(index)
                    .map(|entry| Action::OpenDoc(entry.page.url_id.clone())),
            }
        }
        _ => match SearchBox::new(&app.query).handle_event(event) {
            Some(SearchEvent::Changed(query)) => {
                tui.category_list.selected = 0;
                Some(Action::QueryChanged(query))
            }
            Some(SearchEvent::Cleared) => {
                tui.category_list.selected = 0;
                Some(Action::ClearQuery)
            }
            None if matches!(event, TuiEvent::Escape) => Some(Action::Quit),
            None => None,
        },
    }
}

/// Run an effect. Returns true when the loop should exit.
fn apply_effect(effect: Effect, search_tracker: &mut SearchTracker) -> bool {
    match effect {
        Effect::None => false,
        Effect::TrackSearch(query) => {
            search_tracker.search(query);
            false
        }
        Effect::TrackSearchCleared => {
            search_tracker.cleared();
            false
        }
        Effect::Navigate(route) => {
            info!("Navigate: {} {:?}", route.name(), route);
            false
        }
        Effect::Quit => true,
    }
}

fn spawn_catalog_load(path: PathBuf, tx: mpsc::Sender<Action>) {
    info!("Loading catalog from {}", path.display());
    tokio::spawn(async move {
        let action = match tokio::task::spawn_blocking(move || load_catalog(&path)).await {
            Ok(Ok(catalog)) => Action::CatalogLoaded(catalog),
            Ok(Err(e)) => Action::CatalogFailed(e.to_string()),
            Err(e) => Action::CatalogFailed(format!("catalog loader task failed: {e}")),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send catalog action: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tracking::{SEARCH_CLEARED_EVENT, SEARCH_EVENT};
    use crate::test_support::test_app;

    #[test]
    fn test_typing_routes_to_query_change() {
        let (mut app, _) = test_app();
        app.query = "ap".to_string();
        let mut tui = TuiState::new();

        let action = route_event(&TuiEvent::InputChar('i'), &app, &mut tui);

        assert_eq!(action, Some(Action::QueryChanged("api".to_string())));
    }

    #[test]
    fn test_escape_clears_then_quits() {
        let (mut app, _) = test_app();
        let mut tui = TuiState::new();

        app.query = "x".to_string();
        assert_eq!(
            route_event(&TuiEvent::Escape, &app, &mut tui),
            Some(Action::ClearQuery)
        );

        app.query.clear();
        assert_eq!(
            route_event(&TuiEvent::Escape, &app, &mut tui),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_enter_opens_selected_entry() {
        let (app, _) = test_app();
        let mut tui = TuiState::new();

        route_event(&TuiEvent::CursorDown, &app, &mut tui);
        route_event(&TuiEvent::CursorDown, &app, &mut tui);
        let action = route_event(&TuiEvent::Submit, &app, &mut tui);

        assert_eq!(action, Some(Action::OpenDoc("api".to_string())));
    }

    #[test]
    fn test_enter_with_no_results_does_nothing() {
        let (mut app, _) = test_app();
        app.query = "xyz".to_string();
        let mut tui = TuiState::new();

        assert_eq!(route_event(&TuiEvent::Submit, &app, &mut tui), None);
    }

    #[test]
    fn test_query_change_resets_selection() {
        let (app, _) = test_app();
        let mut tui = TuiState::new();
        route_event(&TuiEvent::CursorDown, &app, &mut tui);
        assert_eq!(tui.category_list.selected, 1);

        route_event(&TuiEvent::InputChar('a'), &app, &mut tui);
        assert_eq!(tui.category_list.selected, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_effects_reach_tracker() {
        let (mut app, recorder) = test_app();
        let mut search_tracker = SearchTracker::new(recorder.clone(), Duration::from_millis(500));

        for query in ["r", "re"] {
            let effect = update(&mut app, Action::QueryChanged(query.to_string()));
            assert!(!apply_effect(effect, &mut search_tracker));
        }
        let effect = update(&mut app, Action::ClearQuery);
        assert!(!apply_effect(effect, &mut search_tracker));

        tokio::time::sleep(Duration::from_millis(600)).await;

        let names: Vec<String> = recorder.events().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec![SEARCH_CLEARED_EVENT, SEARCH_EVENT]);
        assert_eq!(recorder.queries(), vec!["re"]);
    }

    #[test]
    fn test_quit_effect_stops_loop() {
        let (_, recorder) = test_app();
        let mut search_tracker = SearchTracker::new(recorder, Duration::from_millis(500));
        assert!(apply_effect(Effect::Quit, &mut search_tracker));
    }
}
