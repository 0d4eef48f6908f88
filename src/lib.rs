//! Docs Finder: a searchable, categorized documentation list for the terminal.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
