//! # Form Controls
//!
//! Small building blocks shared by the panels: a text button and a
//! single-line labelled input field.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

/// Width reserved for field labels, including the trailing gap.
pub const LABEL_WIDTH: u16 = 16;

/// A button rendered as `[ label ]`, highlighted when `active`.
pub fn button(label: &str, active: bool) -> Span<'static> {
    let style = if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    Span::styled(format!("[ {label} ]"), style)
}

/// One labelled input row. Disabled fields are read-only and dimmed.
pub struct Field<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    pub disabled: bool,
}

impl<'a> Field<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            disabled: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Render into a one-line `area`. Places the terminal cursor after the
    /// value when focused.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let label_style = if self.focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let value_style = if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else if self.focused {
            Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };

        let label = format!("{:<width$}", self.label, width = LABEL_WIDTH as usize);
        let line = Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(self.value.to_string(), value_style),
        ]);
        frame.render_widget(Paragraph::new(line), area);

        if self.focused && !self.disabled {
            let value_width = self.value.width() as u16;
            let x = (area.x + LABEL_WIDTH + value_width).min(area.right().saturating_sub(1));
            frame.set_cursor_position((x, area.y));
        }
    }
}
