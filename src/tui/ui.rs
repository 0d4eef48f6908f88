use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CategoryList, Header, SearchBox};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

const HELP_TEXT: &str = " ↑↓ Select  Enter Open  Ctrl+L Home  Esc Clear/Quit ";

/// Draw the whole finder: header, search field, results, help line.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [header_area, search_area, list_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(SearchBox::HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    Header::new(app.href(&app.home_route()), app.status_message.clone())
        .with_error(app.error.is_some())
        .render(frame, header_area);

    SearchBox::new(&app.query).render(frame, search_area);

    let view = app.view();
    tui.category_list.sync(view.entry_count());
    CategoryList::new(&view, &mut tui.category_list).render(frame, list_area);

    frame.render_widget(
        Paragraph::new(Line::from(HELP_TEXT).centered()).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}
