//! # SplitBillPanel Component
//!
//! Main-pane form for splitting a bill with the selected friend.
//!
//! ```text
//! ╭ Split a bill with Sarah ──────────╮
//! │ Bill value      100               │
//! │ Your expense    40                │
//! │ Sarah's expense 60                │  (read-only)
//! │ Who is paying   < You >           │
//! │                                   │
//! │                    [ Split bill ] │
//! ╰───────────────────────────────────╯
//! ```
//!
//! Values are props from `core::forms::SplitBillForm`. Numeric fields only
//! accept digits; the form clamps and derives the friend's share itself.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType};

use crate::core::forms::{Payer, SplitBillForm, format_amount};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::controls::{Field, button};
use crate::tui::event::TuiEvent;

pub const PANEL_HEIGHT: u16 = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitField {
    #[default]
    BillTotal,
    UserShare,
    Payer,
}

impl SplitField {
    fn next(self) -> Self {
        match self {
            SplitField::BillTotal => SplitField::UserShare,
            SplitField::UserShare => SplitField::Payer,
            SplitField::Payer => SplitField::BillTotal,
        }
    }

    fn prev(self) -> Self {
        match self {
            SplitField::BillTotal => SplitField::Payer,
            SplitField::UserShare => SplitField::BillTotal,
            SplitField::Payer => SplitField::UserShare,
        }
    }
}

#[derive(Debug, Default)]
pub struct SplitBillPanelState {
    pub field: SplitField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitBillEvent {
    BillChanged(String),
    ShareChanged(String),
    PayerChanged(Payer),
    Submit,
    Dismiss,
}

pub struct SplitBillPanel<'a> {
    form: &'a SplitBillForm,
    friend_name: &'a str,
    state: &'a mut SplitBillPanelState,
    focused: bool,
}

impl<'a> SplitBillPanel<'a> {
    pub fn new(
        form: &'a SplitBillForm,
        friend_name: &'a str,
        state: &'a mut SplitBillPanelState,
        focused: bool,
    ) -> Self {
        Self {
            form,
            friend_name,
            state,
            focused,
        }
    }

    /// Apply `edit` to the focused numeric field's text.
    fn edited(&self, edit: impl FnOnce(&mut String)) -> Option<SplitBillEvent> {
        match self.state.field {
            SplitField::BillTotal => {
                let mut text = format_amount(self.form.bill_total());
                edit(&mut text);
                Some(SplitBillEvent::BillChanged(text))
            }
            SplitField::UserShare => {
                let mut text = format_amount(self.form.user_share());
                edit(&mut text);
                Some(SplitBillEvent::ShareChanged(text))
            }
            SplitField::Payer => None,
        }
    }

    fn toggled_payer(&self) -> Option<SplitBillEvent> {
        (self.state.field == SplitField::Payer)
            .then(|| SplitBillEvent::PayerChanged(self.form.payer().toggled()))
    }
}

impl Component for SplitBillPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" Split a bill with {} ", self.friend_name));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [bill_area, share_area, friend_area, payer_area, _, button_area] =
            Layout::vertical([Constraint::Length(1); 6]).areas(inner);

        let field = self.state.field;
        let bill = format_amount(self.form.bill_total());
        let share = format_amount(self.form.user_share());
        let friend_share = format_amount(self.form.friend_share());
        let friend_label = format!("{}'s expense", self.friend_name);
        let payer = format!("< {} >", self.form.payer().label(self.friend_name));

        Field::new("Bill value", &bill)
            .focused(self.focused && field == SplitField::BillTotal)
            .render(frame, bill_area);
        Field::new("Your expense", &share)
            .focused(self.focused && field == SplitField::UserShare)
            .render(frame, share_area);
        Field::new(&friend_label, &friend_share)
            .disabled()
            .render(frame, friend_area);
        Field::new("Who is paying", &payer)
            .focused(self.focused && field == SplitField::Payer)
            .render(frame, payer_area);

        frame.render_widget(
            Line::from(button("Split bill", false)).right_aligned(),
            button_area,
        );
    }
}

impl EventHandler for SplitBillPanel<'_> {
    type Event = SplitBillEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(' ') => self.toggled_payer(),
            TuiEvent::InputChar(c) if c.is_ascii_digit() => self.edited(|text| text.push(*c)),
            TuiEvent::Paste(pasted) => {
                let digits: String = pasted.chars().filter(|c| c.is_ascii_digit()).collect();
                self.edited(|text| text.push_str(&digits))
            }
            TuiEvent::Backspace => self.edited(|text| {
                text.pop();
            }),
            TuiEvent::CursorLeft | TuiEvent::CursorRight => self.toggled_payer(),
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.state.field = self.state.field.next();
                None
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.state.field = self.state.field.prev();
                None
            }
            TuiEvent::Submit => Some(SplitBillEvent::Submit),
            TuiEvent::Escape => Some(SplitBillEvent::Dismiss),
            _ => None,
        }
    }
}
