//! # Core Finder Logic
//!
//! Everything the finder decides, with no knowledge of any UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (App)          │
//!                    │  • Action / update()    │
//!                    │  • filter + view model  │
//!                    │                         │
//!                    │  No UI. No rendering.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Tracker   │      │ Navigator  │
//!     │  Adapter   │      │ (injected) │      │ (injected) │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `Catalog` and `Page`, loading and validation
//! - [`filter`]: the substring filter
//! - [`view`]: `FinderView`, what ends up on screen
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`tracking`]: `ActionTracker` and the debounced `SearchTracker`
//! - [`debounce`]: the timer-based `Debouncer`
//! - [`link`]: `Route`, `VersionTag`, `Navigator`
//! - [`config`]: settings resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod filter;
pub mod link;
pub mod state;
pub mod tracking;
pub mod view;
