//! # Forms
//!
//! Controlled-input state for the two forms. The TUI renders these values
//! and sends edits back through `Action`s; nothing here knows about keys.
//!
//! Both forms reject incomplete input silently: `submit` returns `None`
//! and leaves the fields as they are.

use std::fmt;

use crate::core::friend::{Friend, FriendId};

pub const DEFAULT_IMAGE_URL: &str = "https://i.pravatar.cc/48";

// ============================================================================
// Add Friend
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFriendForm {
    pub name: String,
    pub image_url: String,
    default_image_url: String,
    visible: bool,
}

impl AddFriendForm {
    pub fn new(default_image_url: impl Into<String>) -> Self {
        let default_image_url = default_image_url.into();
        Self {
            name: String::new(),
            image_url: default_image_url.clone(),
            default_image_url,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.image_url = self.default_image_url.clone();
    }

    /// Build a friend with the given id from the current fields.
    ///
    /// On success the fields are reset and the form closes. The image URL
    /// gets the id appended so every new friend has a distinct avatar URL.
    pub fn submit(&mut self, id: FriendId) -> Option<Friend> {
        let name = self.name.trim();
        let image_url = self.image_url.trim();
        if name.is_empty() || image_url.is_empty() {
            return None;
        }

        let image = format!("{image_url}?={id}");
        let friend = Friend::new(id, name, image, 0);
        self.reset();
        self.close();
        Some(friend)
    }
}

// ============================================================================
// Split Bill
// ============================================================================

/// Who covered the bill upfront.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Payer {
    #[default]
    User,
    Friend,
}

impl Payer {
    pub fn toggled(self) -> Self {
        match self {
            Payer::User => Payer::Friend,
            Payer::Friend => Payer::User,
        }
    }

    /// Option label in the payer selector.
    pub fn label(self, friend_name: &str) -> &str {
        match self {
            Payer::User => "You",
            Payer::Friend => friend_name,
        }
    }
}

/// Split form scoped to one selected friend. A new selection gets a new form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitBillForm {
    friend_id: FriendId,
    bill_total: Option<i64>,
    user_share: Option<i64>,
    payer: Payer,
}

impl SplitBillForm {
    pub fn new(friend_id: FriendId) -> Self {
        Self {
            friend_id,
            bill_total: None,
            user_share: None,
            payer: Payer::default(),
        }
    }

    pub fn friend_id(&self) -> &FriendId {
        &self.friend_id
    }

    pub fn bill_total(&self) -> Option<i64> {
        self.bill_total
    }

    pub fn user_share(&self) -> Option<i64> {
        self.user_share
    }

    pub fn payer(&self) -> Payer {
        self.payer
    }

    /// Stores the bill only. A share typed earlier is kept as entered and
    /// capped at read time, so editing the bill digit by digit loses nothing.
    pub fn set_bill_total(&mut self, bill_total: Option<i64>) {
        self.bill_total = bill_total;
    }

    /// Stores the share capped at the bill total. Without a bill there is
    /// nothing to take a share of, so the share is cleared.
    pub fn set_user_share(&mut self, user_share: Option<i64>) {
        self.user_share = self.clamp_share(user_share);
    }

    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = payer;
    }

    fn clamp_share(&self, share: Option<i64>) -> Option<i64> {
        match (share, self.bill_total) {
            (Some(share), Some(bill)) => Some(share.min(bill)),
            _ => None,
        }
    }

    /// The user's share capped at the current bill.
    fn effective_share(&self, bill: i64) -> Option<i64> {
        self.user_share.map(|share| share.min(bill))
    }

    /// The friend's part of the bill, blank (`None`) until a bill is entered.
    pub fn friend_share(&self) -> Option<i64> {
        self.bill_total
            .map(|bill| bill - self.effective_share(bill).unwrap_or(0))
    }

    /// The balance delta for the selected friend, or `None` if the form is
    /// incomplete. A zero bill is rejected; a zero user share is accepted.
    pub fn submit(&self) -> Option<i64> {
        let bill = self.bill_total.filter(|bill| *bill > 0)?;
        let user_share = self.effective_share(bill)?;
        match self.payer {
            Payer::Friend => Some(-user_share),
            Payer::User => Some(bill - user_share),
        }
    }
}

// ============================================================================
// Amount Parsing
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    Invalid(String),
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Invalid(input) => write!(f, "not a whole amount: {input:?}"),
        }
    }
}

impl std::error::Error for AmountError {}

/// Parse numeric field text. Empty means "not entered".
pub fn parse_amount(input: &str) -> Result<Option<i64>, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(AmountError::Invalid(input.to_string()));
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| AmountError::Invalid(input.to_string()))
}

/// Inverse of `parse_amount` for display in a text field.
pub fn format_amount(amount: Option<i64>) -> String {
    amount.map(|a| a.to_string()).unwrap_or_default()
}
