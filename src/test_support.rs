//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::forms::DEFAULT_IMAGE_URL;
use crate::core::friend::{Friend, FriendId, demo_friends};
use crate::core::state::App;

/// A friend with a placeholder avatar.
pub fn friend(id: &str, name: &str, balance: i64) -> Friend {
    Friend::new(
        FriendId::from(id),
        name,
        format!("{DEFAULT_IMAGE_URL}?u={id}"),
        balance,
    )
}

/// Creates a test App seeded with Clark (-7), Sarah (+20) and Anthony (0).
pub fn test_app() -> App {
    App::new(demo_friends(), DEFAULT_IMAGE_URL)
}
