//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar with friend count and status message
//! - `controls`: `Field` rows and buttons shared by the panels
//!
//! ### Stateful Components (Event-Driven)
//!
//! Transient wrappers created per frame / event around persistent state
//! kept in `TuiState`:
//! - `FriendList`: sidebar list, keyboard cursor in `FriendListState`
//! - `AddFriendPanel`: add-friend form, focused field in `AddFriendPanelState`
//! - `SplitBillPanel`: split form, focused field in `SplitBillPanelState`
//!
//! ### Props-Based Data Flow
//!
//! Form values live in `core`; components receive them as props and emit
//! events carrying the edited text. The parent turns those into
//! `core::action::Action`s. Components never mutate `App` directly.
//!
//! ```text
//! components/
//! ├── mod.rs               (this file)
//! ├── controls.rs          (Field, button)
//! ├── title_bar.rs         (Top status bar)
//! ├── friend_list.rs       (Sidebar friend list)
//! ├── add_friend_panel.rs  (Add friend form)
//! └── split_bill_panel.rs  (Split bill form)
//! ```

pub mod add_friend_panel;
pub mod controls;
pub mod friend_list;
pub mod split_bill_panel;
mod title_bar;

pub use add_friend_panel::{AddFriendEvent, AddFriendPanel, AddFriendPanelState};
pub use friend_list::{FriendList, FriendListEvent, FriendListState};
pub use split_bill_panel::{SplitBillEvent, SplitBillPanel, SplitBillPanelState};
pub use title_bar::TitleBar;
