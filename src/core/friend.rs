//! # Friends
//!
//! The one domain record in Billsplit: a friend and the running balance
//! between you and them.
//!
//! ## Sign Convention
//!
//! ```text
//! balance < 0   you owe the friend        "You owe Clark 7$"
//! balance > 0   the friend owes you       "Sarah owes you 20$"
//! balance = 0   settled                   "You and Anthony are even"
//! ```

use std::fmt;

/// Opaque friend identifier. Unique within a `FriendStore`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FriendId(String);

impl FriendId {
    /// Generate a new random (UUID v4) id.
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FriendId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FriendId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    /// Avatar URL. Terminals can't show it, but it is kept and displayed.
    pub image: String,
    /// Whole currency units, see the module docs for the sign convention.
    pub balance: i64,
}

/// Where you stand with a friend, derived from the balance sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    /// You owe the friend this (positive) amount.
    YouOwe(u64),
    /// The friend owes you this (positive) amount.
    OwesYou(u64),
    Even,
}

impl Friend {
    pub fn new(id: FriendId, name: impl Into<String>, image: impl Into<String>, balance: i64) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            balance,
        }
    }

    pub fn standing(&self) -> Standing {
        match self.balance {
            b if b < 0 => Standing::YouOwe(b.unsigned_abs()),
            b if b > 0 => Standing::OwesYou(b.unsigned_abs()),
            _ => Standing::Even,
        }
    }

    /// The sentence shown under the friend's name in the list.
    pub fn balance_message(&self) -> String {
        match self.standing() {
            Standing::YouOwe(amount) => format!("You owe {} {}$", self.name, amount),
            Standing::OwesYou(amount) => format!("{} owes you {}$", self.name, amount),
            Standing::Even => format!("You and {} are even", self.name),
        }
    }
}

pub const DEMO_AVATAR_BASE: &str = "https://i.pravatar.cc/48";

/// The three friends a fresh session starts with when no friends are configured.
pub fn demo_friends() -> Vec<Friend> {
    [("118836", "Clark", -7), ("933372", "Sarah", 20), ("499476", "Anthony", 0)]
        .into_iter()
        .map(|(id, name, balance)| {
            Friend::new(
                FriendId::from(id),
                name,
                format!("{DEMO_AVATAR_BASE}?u={id}"),
                balance,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_friend_messages() {
        let messages: Vec<String> = demo_friends().iter().map(Friend::balance_message).collect();
        assert_eq!(
            messages,
            vec![
                "You owe Clark 7$",
                "Sarah owes you 20$",
                "You and Anthony are even",
            ]
        );
    }

    #[test]
    fn test_standing_follows_sign() {
        let mut friend = Friend::new(FriendId::from("1"), "Kim", "img", -12);
        assert_eq!(friend.standing(), Standing::YouOwe(12));
        friend.balance = 3;
        assert_eq!(friend.standing(), Standing::OwesYou(3));
        friend.balance = 0;
        assert_eq!(friend.standing(), Standing::Even);
    }

    #[test]
    fn test_standing_handles_min_balance() {
        let friend = Friend::new(FriendId::from("1"), "Kim", "img", i64::MIN);
        assert_eq!(friend.standing(), Standing::YouOwe(9_223_372_036_854_775_808));
        assert_eq!(friend.balance_message(), "You owe Kim 9223372036854775808$");
    }

    #[test]
    fn test_random_ids_differ() {
        assert_ne!(FriendId::random(), FriendId::random());
    }

    #[test]
    fn test_demo_images_are_keyed_by_id() {
        let friends = demo_friends();
        assert_eq!(friends[0].image, "https://i.pravatar.cc/48?u=118836");
        assert_eq!(friends[1].id.as_str(), "933372");
    }
}
