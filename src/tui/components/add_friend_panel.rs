//! # AddFriendPanel Component
//!
//! The add-friend form in the sidebar: a name field, an image URL field and
//! an Add button. Field values are props (owned by `core::forms::AddFriendForm`);
//! only the focused field is local state.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType};

use crate::core::forms::AddFriendForm;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::controls::{Field, button};
use crate::tui::event::TuiEvent;

/// Height of the panel including borders.
pub const PANEL_HEIGHT: u16 = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AddFriendField {
    #[default]
    Name,
    ImageUrl,
}

impl AddFriendField {
    fn next(self) -> Self {
        match self {
            AddFriendField::Name => AddFriendField::ImageUrl,
            AddFriendField::ImageUrl => AddFriendField::Name,
        }
    }
}

#[derive(Debug, Default)]
pub struct AddFriendPanelState {
    pub field: AddFriendField,
}

/// Events emitted by the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddFriendEvent {
    NameChanged(String),
    ImageChanged(String),
    Submit,
    Dismiss,
}

pub struct AddFriendPanel<'a> {
    form: &'a AddFriendForm,
    state: &'a mut AddFriendPanelState,
    focused: bool,
}

impl<'a> AddFriendPanel<'a> {
    pub fn new(form: &'a AddFriendForm, state: &'a mut AddFriendPanelState, focused: bool) -> Self {
        Self {
            form,
            state,
            focused,
        }
    }

    fn edited(&self, edit: impl FnOnce(&mut String)) -> AddFriendEvent {
        match self.state.field {
            AddFriendField::Name => {
                let mut name = self.form.name.clone();
                edit(&mut name);
                AddFriendEvent::NameChanged(name)
            }
            AddFriendField::ImageUrl => {
                let mut image_url = self.form.image_url.clone();
                edit(&mut image_url);
                AddFriendEvent::ImageChanged(image_url)
            }
        }
    }
}

impl Component for AddFriendPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Add friend ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [name_area, image_area, _, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let field = self.state.field;
        Field::new("Friend name", &self.form.name)
            .focused(self.focused && field == AddFriendField::Name)
            .render(frame, name_area);
        Field::new("Image URL", &self.form.image_url)
            .focused(self.focused && field == AddFriendField::ImageUrl)
            .render(frame, image_area);

        frame.render_widget(Line::from(button("Add", false)).right_aligned(), button_area);
    }
}

impl EventHandler for AddFriendPanel<'_> {
    type Event = AddFriendEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => Some(self.edited(|value| value.push(*c))),
            TuiEvent::Paste(text) => {
                let text: String = text.chars().filter(|c| !c.is_control()).collect();
                Some(self.edited(|value| value.push_str(&text)))
            }
            TuiEvent::Backspace => Some(self.edited(|value| {
                value.pop();
            })),
            TuiEvent::NextField
            | TuiEvent::PrevField
            | TuiEvent::CursorUp
            | TuiEvent::CursorDown => {
                self.state.field = self.state.field.next();
                None
            }
            TuiEvent::Submit => Some(AddFriendEvent::Submit),
            TuiEvent::Escape => Some(AddFriendEvent::Dismiss),
            _ => None,
        }
    }
}
