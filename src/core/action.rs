//! # Actions
//!
//! Everything that can happen in Billsplit becomes an `Action`.
//! User presses `a`? That's `Action::ToggleAddFriend`.
//! User hits Enter on the split form? That's `Action::SubmitSplit`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! ## Screen States
//!
//! ```text
//!            toggleAdd                      selectFriend
//!   Idle ─────────────► AddFriendOpen ───────────────────► FriendSelected
//!    ▲  ◄───────────────      │                             │    ▲   │
//!    │  toggleAdd/submitAdd   └───── selectFriend ──────────┘    │   │
//!    │                                                           │   │
//!    └──────────── selectSameFriend / submitSplit ───────────────┘   │
//!                                     selectDifferentFriend ─────────┘
//! ```

use log::{debug, info};

use crate::core::forms::{Payer, SplitBillForm, parse_amount};
use crate::core::friend::FriendId;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show or hide the add-friend form.
    ToggleAddFriend,
    EditFriendName(String),
    EditFriendImage(String),
    SubmitAddFriend,
    /// Select a friend, or close them if already selected.
    SelectFriend(FriendId),
    /// Raw text of the bill field.
    EditBillTotal(String),
    /// Raw text of the user's share field.
    EditUserShare(String),
    SetPayer(Payer),
    SubmitSplit,
    Quit,
}

/// What the caller should do after `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::ToggleAddFriend => {
            app.add_form.toggle();
        }
        Action::EditFriendName(name) => {
            app.add_form.name = name;
        }
        Action::EditFriendImage(image_url) => {
            app.add_form.image_url = image_url;
        }
        Action::SubmitAddFriend => {
            let id = app.friends.fresh_id();
            match app.add_form.submit(id) {
                Some(friend) => {
                    info!("Added friend {} ({})", friend.name, friend.id);
                    app.status_message = format!("Added {}", friend.name);
                    app.friends.add(friend);
                }
                None => debug!("Add friend form incomplete, ignoring submit"),
            }
        }
        Action::SelectFriend(id) => {
            if !app.friends.contains(&id) {
                debug!("SelectFriend: unknown id {}", id);
                return Effect::None;
            }
            app.add_form.close();
            app.split_form = if app.selection.select(&id) {
                Some(SplitBillForm::new(id))
            } else {
                None
            };
        }
        Action::EditBillTotal(text) => {
            if let Some(form) = app.split_form.as_mut() {
                match parse_amount(&text) {
                    Ok(bill) => form.set_bill_total(bill),
                    Err(e) => debug!("Rejected bill input: {}", e),
                }
            }
        }
        Action::EditUserShare(text) => {
            if let Some(form) = app.split_form.as_mut() {
                match parse_amount(&text) {
                    Ok(share) => form.set_user_share(share),
                    Err(e) => debug!("Rejected share input: {}", e),
                }
            }
        }
        Action::SetPayer(payer) => {
            if let Some(form) = app.split_form.as_mut() {
                form.set_payer(payer);
            }
        }
        Action::SubmitSplit => submit_split(app),
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}

fn submit_split(app: &mut App) {
    let Some(form) = app.split_form.as_ref() else {
        return;
    };
    let Some(delta) = form.submit() else {
        debug!("Split form incomplete, ignoring submit");
        return;
    };

    let id = form.friend_id().clone();
    let bill = form.bill_total().unwrap_or_default();
    if app.friends.apply_delta(&id, delta) {
        let name = app
            .friends
            .get(&id)
            .map(|f| f.name.clone())
            .unwrap_or_default();
        info!("Split {}$ with {} (delta {:+})", bill, name, delta);
        app.status_message = format!("Split {}$ with {}", bill, name);
    }

    app.selection.clear();
    app.split_form = None;
}
