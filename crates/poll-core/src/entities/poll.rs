//! Poll entity - a question with a set of choices users vote on

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Poll entity
///
/// `created_by` is `None` when the creating account has since been removed.
/// `is_active` is display metadata; only `expires_at` gates voting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poll {
    pub id: Snowflake,
    pub question: String,
    pub created_by: Option<Snowflake>,
    pub pub_date: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub allow_multiple: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Poll {
    /// Create a new Poll owned by the given user, published now
    pub fn new(id: Snowflake, question: String, created_by: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            id,
            question,
            created_by: Some(created_by),
            pub_date: now,
            expires_at: None,
            allow_multiple: false,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set an expiry timestamp
    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Allow voters to select more than one choice
    pub fn with_allow_multiple(mut self, allow_multiple: bool) -> Self {
        self.allow_multiple = allow_multiple;
        self
    }

    /// Check if the poll is past its expiry. A poll without an expiry
    /// never expires.
    pub fn is_expired(&self) -> bool {
        if let Some(expires_at) = self.expires_at {
            Utc::now() > expires_at
        } else {
            false
        }
    }

    /// Whole days until expiry, floored at zero. `None` when the poll
    /// has no expiry.
    pub fn days_remaining(&self) -> Option<i64> {
        self.expires_at
            .map(|expires_at| (expires_at - Utc::now()).num_days().max(0))
    }

    /// Check if the requesting user owns this poll
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.created_by == Some(user_id)
    }

    /// Mark the poll inactive
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}
