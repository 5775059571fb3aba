//! # Friend Store
//!
//! Ordered collection of friends. Insertion order is display order.
//! Friends are only ever appended or have their balance adjusted.

use log::debug;

use crate::core::friend::{Friend, FriendId};

#[derive(Debug, Default, Clone)]
pub struct FriendStore {
    friends: Vec<Friend>,
}

impl FriendStore {
    pub fn new(friends: Vec<Friend>) -> Self {
        Self { friends }
    }

    /// Append a friend. Id collisions are not checked here; use `fresh_id()`.
    pub fn add(&mut self, friend: Friend) {
        self.friends.push(friend);
    }

    /// Add `delta` to the balance of the friend with `id`.
    ///
    /// Returns `false` (and changes nothing) when no friend matches.
    pub fn apply_delta(&mut self, id: &FriendId, delta: i64) -> bool {
        match self.friends.iter_mut().find(|f| &f.id == id) {
            Some(friend) => {
                friend.balance = friend.balance.saturating_add(delta);
                true
            }
            None => {
                debug!("apply_delta: no friend with id {}", id);
                false
            }
        }
    }

    /// A UUID v4 id not used by any stored friend.
    pub fn fresh_id(&self) -> FriendId {
        loop {
            let id = FriendId::random();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    pub fn get(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| &f.id == id)
    }

    pub fn get_index(&self, index: usize) -> Option<&Friend> {
        self.friends.get(index)
    }

    pub fn contains(&self, id: &FriendId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Friend> {
        self.friends.iter()
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}
