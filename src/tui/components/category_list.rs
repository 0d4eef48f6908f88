//! # Category List Component
//!
//! Renders a `FinderView`: either one of the empty-state messages, or each
//! non-empty category as a header followed by its entries.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CategoryListState` lives in `TuiState` (selection survives redraws)
//! - `CategoryList` is created each frame with the borrowed view and state
//!
//! Selection counts entries only. Headers occupy list rows but are never
//! selectable, so the selected entry is mapped to its row when rendering.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::view::{DocEntry, FinderView};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const CURRENT_MARKER: &str = "▸ ";
const DESCRIPTION_INDENT: &str = "    ";

/// Persistent state for the category list.
#[derive(Debug, Default)]
pub struct CategoryListState {
    pub selected: usize,
    pub list_state: ListState,
    entry_count: usize,
}

impl CategoryListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp the selection after the number of visible entries changed.
    pub fn sync(&mut self, entry_count: usize) {
        self.entry_count = entry_count;
        self.selected = self.selected.min(entry_count.saturating_sub(1));
    }
}

/// Events emitted by the category list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryListEvent {
    /// Follow the link of the entry at this display index.
    Open(usize),
}

impl EventHandler for CategoryListState {
    type Event = CategoryListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.entry_count == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(self.entry_count - 1);
                None
            }
            TuiEvent::Submit => Some(CategoryListEvent::Open(self.selected)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the category list.
pub struct CategoryList<'a, 'v> {
    view: &'a FinderView<'v>,
    state: &'a mut CategoryListState,
}

impl<'a, 'v> CategoryList<'a, 'v> {
    pub fn new(view: &'a FinderView<'v>, state: &'a mut CategoryListState) -> Self {
        Self { view, state }
    }
}

impl Component for CategoryList<'_, '_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        let view = self.view;
        let sections = match view {
            FinderView::Categories(sections) => sections,
            FinderView::Loading | FinderView::NoResults => {
                let message = view.message().unwrap_or_default();
                let empty = Paragraph::new(message)
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center)
                    .block(block);
                frame.render_widget(empty, area);
                self.state.list_state.select(None);
                return;
            }
        };

        // borders + padding + description indent
        let wrap_width = (area.width as usize)
            .saturating_sub(2 + DESCRIPTION_INDENT.len())
            .max(1);

        let mut items = Vec::new();
        let mut selected_row = None;
        let mut entry_index = 0;
        for section in sections {
            items.push(ListItem::new(Line::from(Span::styled(
                section.name.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ))));
            for entry in &section.entries {
                if entry_index == self.state.selected {
                    selected_row = Some(items.len());
                }
                items.push(entry_item(entry, wrap_width));
                entry_index += 1;
            }
        }

        self.state.list_state.select(selected_row);

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Title line plus wrapped description, colored by page type.
fn entry_item(entry: &DocEntry<'_>, wrap_width: usize) -> ListItem<'static> {
    let page = entry.page;
    let mut title_style = Style::default().fg(kind_color(&page.kind));
    let marker = if entry.is_current {
        title_style = title_style.add_modifier(Modifier::BOLD);
        CURRENT_MARKER
    } else {
        "  "
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker, title_style),
        Span::styled(page.title.clone(), title_style),
    ])];
    // textwrap yields one empty line for "", which would leave a blank row
    let description = if page.description.is_empty() {
        Vec::new()
    } else {
        textwrap::wrap(&page.description, wrap_width)
    };
    for wrapped in description {
        lines.push(Line::from(Span::styled(
            format!("{DESCRIPTION_INDENT}{wrapped}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    ListItem::new(Text::from(lines))
}

fn kind_color(kind: &str) -> Color {
    match kind {
        "guide" => Color::Cyan,
        "reference" | "api" => Color::Blue,
        "tutorial" => Color::Green,
        _ => Color::Gray,
    }
}
