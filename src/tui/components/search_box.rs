//! # SearchBox Component
//!
//! The filter field. The query itself lives in `App`, so the box is a
//! transient wrapper over a borrowed `&str`: it renders the current query and
//! turns key presses into the query the field *should* now hold.
//!
//! - Typing / pasting / backspace emit `SearchEvent::Changed(new_query)`.
//! - Esc on a non-empty query emits `SearchEvent::Cleared`, the cancel
//!   affordance. The `✕` marker is only drawn while there is something to
//!   clear.
//!
//! Editing is append-only at the end of the query; there is no cursor
//! movement inside the field.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const PLACEHOLDER: &str = "Search";
pub const CANCEL_MARKER: &str = " ✕ Esc ";

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The field now holds this text
    Changed(String),
    /// Cancel affordance activated
    Cleared,
}

pub struct SearchBox<'a> {
    query: &'a str,
}

impl<'a> SearchBox<'a> {
    pub fn new(query: &'a str) -> Self {
        Self { query }
    }

    /// Fixed height: one line of text plus borders.
    pub const HEIGHT: u16 = 3;
}

impl Component for SearchBox<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        if !self.query.is_empty() {
            block = block.title(
                Line::from(CANCEL_MARKER)
                    .right_aligned()
                    .style(Style::default().fg(Color::Red)),
            );
        }

        let field = if self.query.is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(self.query).style(Style::default().fg(Color::Green))
        };

        frame.render_widget(field.block(block), area);

        // Cursor sits after the query, clamped inside the border
        let max_x = area.x + area.width.saturating_sub(2);
        let width = u16::try_from(self.query.width()).unwrap_or(u16::MAX);
        let cursor_x = (area.x + 1).saturating_add(width).min(max_x);
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

impl EventHandler for SearchBox<'_> {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut query = self.query.to_string();
                query.push(*c);
                Some(SearchEvent::Changed(query))
            }
            TuiEvent::Paste(text) => {
                // Single-line field: newlines become spaces
                let pasted: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                if pasted.is_empty() {
                    return None;
                }
                Some(SearchEvent::Changed(format!("{}{}", self.query, pasted)))
            }
            TuiEvent::Backspace => {
                let mut query = self.query.to_string();
                query.pop()?;
                Some(SearchEvent::Changed(query))
            }
            TuiEvent::Escape if !self.query.is_empty() => Some(SearchEvent::Cleared),
            _ => None,
        }
    }
}
