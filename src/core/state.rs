//! # Application State
//!
//! Core business state for Billsplit. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── friends: FriendStore                 // ordered friends + balances
//! ├── selection: Selection                 // friend picked for splitting
//! ├── add_form: AddFriendForm              // name / image + visibility
//! ├── split_form: Option<SplitBillForm>    // present iff a friend is selected
//! └── status_message: String               // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::config::ResolvedConfig;
use crate::core::forms::{AddFriendForm, SplitBillForm};
use crate::core::friend::Friend;
use crate::core::selection::Selection;
use crate::core::store::FriendStore;

pub struct App {
    pub friends: FriendStore,
    pub selection: Selection,
    pub add_form: AddFriendForm,
    /// Keyed to the selected friend; replaced whenever the selection changes.
    pub split_form: Option<SplitBillForm>,
    pub status_message: String,
}

impl App {
    pub fn new(friends: Vec<Friend>, default_image_url: impl Into<String>) -> Self {
        Self {
            friends: FriendStore::new(friends),
            selection: Selection::default(),
            add_form: AddFriendForm::new(default_image_url),
            split_form: None,
            status_message: String::from("Welcome to Billsplit!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.friends.clone(), config.default_image_url.clone())
    }

    /// The selected friend's current record, if any.
    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selection.selected().and_then(|id| self.friends.get(id))
    }
}
