//! # TitleBar Component
//!
//! Top status bar showing the friend count and the latest status message.
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational—it receives all data as props and has no
//! internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.friends.len(), app.status_message.clone());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Billsplit (3 friends) | Added Kim"`
//! 2. **Default**: `"Billsplit (3 friends)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component.
///
/// # Props
///
/// - `friend_count`: number of friends in the store
/// - `status_message`: transient status (e.g., "Added Kim")
pub struct TitleBar {
    pub friend_count: usize,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(friend_count: usize, status_message: String) -> Self {
        Self {
            friend_count,
            status_message,
        }
    }

    fn friends_label(&self) -> String {
        match self.friend_count {
            1 => "1 friend".to_string(),
            n => format!("{n} friends"),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Billsplit", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" ({})", self.friends_label())),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(4, "Added Kim".to_string());
        let text = render_text(&mut title_bar);

        assert!(text.contains("Billsplit"));
        assert!(text.contains("4 friends"));
        assert!(text.contains("| Added Kim"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new(1, String::new());
        let text = render_text(&mut title_bar);

        assert!(text.contains("(1 friend)"));
        assert!(!text.contains('|'));
    }
}
