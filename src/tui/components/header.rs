//! # Header Component
//!
//! Top line of the finder: the logo (a link home), the "Docs" title, and the
//! status message on the right.
//!
//! ## Stateless Component
//!
//! Header is purely presentational. It receives all data as props and has no
//! internal state:
//!
//! ```rust,ignore
//! let mut header = Header::new(app.href(&app.home_route()), app.status_message.clone())
//!     .with_error(app.error.is_some());
//! header.render(frame, header_area);
//! ```
//!
//! The home href is shown dimmed next to the title so the logo link's target
//! is visible; Ctrl+L follows it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const LOGO: &str = "◆";
pub const TITLE: &str = "Docs";

/// Top bar component.
///
/// # Props
///
/// - `home_href`: Where the logo link points
/// - `status_message`: Transient status (load progress, last followed link, errors)
/// - `is_error`: Status describes a failure; drawn in red
pub struct Header {
    pub home_href: String,
    pub status_message: String,
    pub is_error: bool,
}

impl Header {
    pub fn new(home_href: String, status_message: String) -> Self {
        Self {
            home_href,
            status_message,
            is_error: false,
        }
    }

    pub fn with_error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

        let title = Line::from(vec![
            Span::styled(LOGO, Style::default().fg(Color::Magenta)),
            Span::raw(" "),
            Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                self.home_href.clone(),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), left);

        if !self.status_message.is_empty() {
            let color = if self.is_error { Color::Red } else { Color::Gray };
            let status = Paragraph::new(self.status_message.clone())
                .style(Style::default().fg(color))
                .alignment(Alignment::Right);
            frame.render_widget(status, right);
        }
    }
}
