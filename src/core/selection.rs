//! # Selection
//!
//! Tracks which friend, if any, is selected for splitting a bill.
//! Selecting the selected friend again clears the selection.

use crate::core::friend::{Friend, FriendId};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    selected: Option<FriendId>,
}

impl Selection {
    /// Toggle `id`: clears when it is already selected, selects it otherwise.
    ///
    /// Returns `true` if a friend is selected afterwards.
    pub fn select(&mut self, id: &FriendId) -> bool {
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
            false
        } else {
            self.selected = Some(id.clone());
            true
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&FriendId> {
        self.selected.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }
}

/// Whether `friend` is the selected one. Drives the row highlight and
/// the Select/Close label.
pub fn is_selected(friend: &Friend, selection: &Selection) -> bool {
    selection.selected() == Some(&friend.id)
}
