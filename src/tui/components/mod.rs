//! # TUI Components
//!
//! All UI components for the finder screen.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `Header`: logo link, title and status message
//! - `SearchBox`: the filter field over a borrowed query
//!
//! ### Stateful Components
//!
//! - `CategoryList`: the grouped results, with selection kept in
//!   `CategoryListState` across frames
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into `App`.
//! The query lives in `App`; `SearchBox` only reports what it should become.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! SearchBox::new(&app.query).render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! SearchBox::default().render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── header.rs         (Top bar)
//! ├── search_box.rs     (Filter field)
//! └── category_list.rs  (Grouped results / empty states)
//! ```

pub mod category_list;
pub mod header;
pub mod search_box;

pub use category_list::{CategoryList, CategoryListEvent, CategoryListState};
pub use header::Header;
pub use search_box::{SearchBox, SearchEvent};
