//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Focus
//!
//! Exactly one region receives key events: the friend list, the add-friend
//! panel or the split-bill panel. Focus follows the forms: opening a form
//! focuses it, and a form that closes hands focus back to the list.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms in `poll` and only
//! redraws after events (including terminal resize).

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    AddFriendEvent, AddFriendPanel, AddFriendPanelState, FriendList, FriendListEvent,
    FriendListState, SplitBillEvent, SplitBillPanel, SplitBillPanelState,
};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

pub use crate::tui::event::TuiEvent;

/// Which region receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    FriendList,
    AddFriend,
    SplitBill,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub(crate) friend_list: FriendListState,
    pub(crate) add_friend: AddFriendPanelState,
    pub(crate) split_bill: SplitBillPanelState,
    /// The form that most recently had focus, so Tab alternates when both are open.
    last_form: Option<Focus>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::FriendList,
            friend_list: FriendListState::default(),
            add_friend: AddFriendPanelState::default(),
            split_bill: SplitBillPanelState::default(),
            last_form: None,
        }
    }

    fn focus_add_friend(&mut self) {
        self.focus = Focus::AddFriend;
        self.add_friend = AddFriendPanelState::default();
    }

    fn focus_split_bill(&mut self) {
        self.focus = Focus::SplitBill;
        self.split_bill = SplitBillPanelState::default();
    }

    /// Hand focus back to the list if the focused form has closed.
    fn sync_focus(&mut self, app: &App) {
        let form_open = match self.focus {
            Focus::FriendList => true,
            Focus::AddFriend => app.add_form.is_visible(),
            Focus::SplitBill => app.split_form.is_some(),
        };
        if !form_open {
            self.focus = Focus::FriendList;
        }
        if self.focus != Focus::FriendList {
            self.last_form = Some(self.focus);
        }
    }

    /// Pick the open form Tab should move to from the list.
    fn next_form(&self, app: &App) -> Option<Focus> {
        let split_open = app.split_form.is_some();
        let add_open = app.add_form.is_visible();
        match (split_open, add_open) {
            (true, true) if self.last_form == Some(Focus::SplitBill) => Some(Focus::AddFriend),
            (true, _) => Some(Focus::SplitBill),
            (false, true) => Some(Focus::AddFriend),
            (false, false) => None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste, SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

/// Route one terminal event to the focused region and apply the resulting action.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let effect = match event {
        TuiEvent::Resize => Effect::None,
        TuiEvent::ForceQuit => update(app, Action::Quit),
        event => match tui.focus {
            Focus::FriendList => handle_friend_list(app, tui, &event),
            Focus::AddFriend => handle_add_friend(app, tui, &event),
            Focus::SplitBill => handle_split_bill(app, tui, &event),
        },
    };
    tui.sync_focus(app);
    effect
}

fn handle_friend_list(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    let list_event =
        FriendList::new(&app.friends, &app.selection, &mut tui.friend_list, true).handle_event(event);

    match list_event {
        Some(FriendListEvent::Select(id)) => {
            let effect = update(app, Action::SelectFriend(id));
            if app.split_form.is_some() {
                tui.focus_split_bill();
            }
            effect
        }
        Some(FriendListEvent::ToggleAddFriend) => {
            let effect = update(app, Action::ToggleAddFriend);
            if app.add_form.is_visible() {
                tui.focus_add_friend();
            }
            effect
        }
        Some(FriendListEvent::FocusForms) => {
            if let Some(form) = tui.next_form(app) {
                tui.focus = form;
            }
            Effect::None
        }
        Some(FriendListEvent::Quit) => update(app, Action::Quit),
        None => Effect::None,
    }
}

fn handle_add_friend(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    let panel_event = AddFriendPanel::new(&app.add_form, &mut tui.add_friend, true).handle_event(event);

    match panel_event {
        Some(AddFriendEvent::NameChanged(name)) => update(app, Action::EditFriendName(name)),
        Some(AddFriendEvent::ImageChanged(url)) => update(app, Action::EditFriendImage(url)),
        Some(AddFriendEvent::Submit) => {
            let effect = update(app, Action::SubmitAddFriend);
            if !app.add_form.is_visible() {
                // Put the cursor on the friend just added
                tui.friend_list.cursor = app.friends.len().saturating_sub(1);
            }
            effect
        }
        Some(AddFriendEvent::Dismiss) => {
            tui.focus = Focus::FriendList;
            Effect::None
        }
        None => Effect::None,
    }
}

fn handle_split_bill(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    let Some(form) = app.split_form.as_ref() else {
        return Effect::None;
    };
    let friend_name = app
        .friends
        .get(form.friend_id())
        .map(|f| f.name.as_str())
        .unwrap_or_default();
    let panel_event = SplitBillPanel::new(form, friend_name, &mut tui.split_bill, true).handle_event(event);

    match panel_event {
        Some(SplitBillEvent::BillChanged(text)) => update(app, Action::EditBillTotal(text)),
        Some(SplitBillEvent::ShareChanged(text)) => update(app, Action::EditUserShare(text)),
        Some(SplitBillEvent::PayerChanged(payer)) => update(app, Action::SetPayer(payer)),
        Some(SplitBillEvent::Submit) => update(app, Action::SubmitSplit),
        Some(SplitBillEvent::Dismiss) => {
            tui.focus = Focus::FriendList;
            Effect::None
        }
        None => Effect::None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = match poll_event_timeout(Duration::from_millis(250)) {
            Ok(event) => event,
            Err(e) => break Err(e),
        };

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        let mut pending = first_event;
        while let Some(event) = pending {
            needs_redraw = true;
            if handle_event(&mut app, &mut tui, event) == Effect::Quit {
                should_quit = true;
                break;
            }
            pending = match poll_event_immediate() {
                Ok(event) => event,
                Err(e) => {
                    log::warn!("Failed to read terminal event: {}", e);
                    None
                }
            };
        }

        if should_quit {
            info!("Quitting with {} friends", app.friends.len());
            break Ok(());
        }
    };

    ratatui::restore();
    result
}
