//! # FriendList Component
//!
//! Sidebar list of friends with their balance messages and a Select/Close
//! button per row.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FriendListState` lives in `TuiState` (keyboard cursor)
//! - `FriendList` is created each frame / event with borrowed props

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::friend::{Friend, FriendId, Standing};
use crate::core::selection::{Selection, is_selected};
use crate::core::store::FriendStore;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::controls::button;
use crate::tui::event::TuiEvent;

/// Keyboard cursor over the list. Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct FriendListState {
    pub cursor: usize,
    pub list_state: ListState,
}

impl FriendListState {
    /// Keep the cursor on an existing row after the list changes size.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

/// Events emitted by the friend list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FriendListEvent {
    Select(FriendId),
    ToggleAddFriend,
    FocusForms,
    Quit,
}

pub struct FriendList<'a> {
    friends: &'a FriendStore,
    selection: &'a Selection,
    state: &'a mut FriendListState,
    focused: bool,
}

impl<'a> FriendList<'a> {
    pub fn new(
        friends: &'a FriendStore,
        selection: &'a Selection,
        state: &'a mut FriendListState,
        focused: bool,
    ) -> Self {
        Self {
            friends,
            selection,
            state,
            focused,
        }
    }

    fn item(&self, friend: &Friend, width: u16) -> ListItem<'static> {
        let selected = is_selected(friend, self.selection);
        let name_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let balance_style = match friend.standing() {
            Standing::YouOwe(_) => Style::default().fg(Color::Red),
            Standing::OwesYou(_) => Style::default().fg(Color::Green),
            Standing::Even => Style::default(),
        };
        let marker = if selected { "▶ " } else { "  " };
        let label = if selected { "Close" } else { "Select" };

        // "▶ " + name + gap + "[ Select ]"
        let button_width = label.len() + 4;
        let name_width = (width as usize).saturating_sub(2 + 1 + button_width);
        let name = truncate_to_width(&friend.name, name_width);
        let padding = name_width.saturating_sub(name.width());

        ListItem::new(vec![
            Line::from(vec![
                Span::styled(marker, name_style),
                Span::styled(name, name_style),
                Span::raw(" ".repeat(padding + 1)),
                button(label, selected),
            ]),
            Line::from(Span::styled(format!("  {}", friend.balance_message()), balance_style)),
            Line::from(Span::styled(
                format!("  {}", truncate_to_width(&friend.image, (width as usize).saturating_sub(2))),
                Style::default().fg(Color::DarkGray),
            )),
        ])
    }
}

impl Component for FriendList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Friends ");

        if self.friends.is_empty() {
            let empty = Paragraph::new("No friends yet. Press a to add one.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.clamp(self.friends.len());
        let inner_width = area.width.saturating_sub(2);
        let items: Vec<ListItem> = self
            .friends
            .iter()
            .map(|friend| self.item(friend, inner_width))
            .collect();

        let highlight = if self.focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        let list = List::new(items).block(block).highlight_style(highlight);

        self.state.list_state.select(Some(self.state.cursor));
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

impl EventHandler for FriendList<'_> {
    type Event = FriendListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let len = self.friends.len();
        match event {
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                self.state.cursor = self.state.cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                if len > 0 {
                    self.state.cursor = (self.state.cursor + 1).min(len - 1);
                }
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => self
                .friends
                .get_index(self.state.cursor)
                .map(|friend| FriendListEvent::Select(friend.id.clone())),
            TuiEvent::InputChar('a') => Some(FriendListEvent::ToggleAddFriend),
            TuiEvent::NextField => Some(FriendListEvent::FocusForms),
            TuiEvent::InputChar('q') | TuiEvent::Escape => Some(FriendListEvent::Quit),
            _ => None,
        }
    }
}

/// Cut `s` to at most `max_width` terminal columns, ending in "…" when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::friend::demo_friends;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(store: &FriendStore, selection: &Selection, width: u16, height: u16) -> String {
        let mut state = FriendListState::default();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| FriendList::new(store, selection, &mut state, true).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_seed_balance_messages() {
        let store = FriendStore::new(demo_friends());
        let text = render_text(&store, &Selection::default(), 50, 12);

        assert!(text.contains("You owe Clark 7$"));
        assert!(text.contains("Sarah owes you 20$"));
        assert!(text.contains("You and Anthony are even"));
        assert!(text.contains("[ Select ]"));
        assert!(!text.contains("[ Close ]"));
    }

    #[test]
    fn test_selected_friend_shows_close() {
        let store = FriendStore::new(demo_friends());
        let mut selection = Selection::default();
        selection.select(&FriendId::from("933372"));
        let text = render_text(&store, &selection, 50, 12);

        assert!(text.contains("[ Close ]"));
        assert!(text.contains("▶ Sarah"));
    }

    #[test]
    fn test_empty_list_hint() {
        let text = render_text(&FriendStore::default(), &Selection::default(), 50, 5);
        assert!(text.contains("No friends yet"));
    }

    #[test]
    fn test_cursor_moves_and_selects() {
        let store = FriendStore::new(demo_friends());
        let selection = Selection::default();
        let mut state = FriendListState::default();
        let mut list = FriendList::new(&store, &selection, &mut state, true);

        assert_eq!(list.handle_event(&TuiEvent::CursorUp), None);
        list.handle_event(&TuiEvent::CursorDown);
        list.handle_event(&TuiEvent::CursorDown);
        list.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            list.handle_event(&TuiEvent::Submit),
            Some(FriendListEvent::Select(FriendId::from("499476")))
        );
    }

    #[test]
    fn test_shortcuts() {
        let store = FriendStore::default();
        let selection = Selection::default();
        let mut state = FriendListState::default();
        let mut list = FriendList::new(&store, &selection, &mut state, true);

        assert_eq!(list.handle_event(&TuiEvent::Submit), None);
        assert_eq!(
            list.handle_event(&TuiEvent::InputChar('a')),
            Some(FriendListEvent::ToggleAddFriend)
        );
        assert_eq!(list.handle_event(&TuiEvent::Escape), Some(FriendListEvent::Quit));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Anthony", 10), "Anthony");
        assert_eq!(truncate_to_width("Anthony", 4), "Ant…");
        assert_eq!(truncate_to_width("Anthony", 0), "");
    }
}
