//! User entity - a registered account that can create polls and vote

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, first_name: String, last_name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            first_name,
            last_name,
            email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full display name; just the first name when there is no last name
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    /// Split a free-form full name into (first, last) at the first space.
    /// A name without a space becomes the first name with an empty last name.
    pub fn split_full_name(full_name: &str) -> (String, String) {
        let trimmed = full_name.trim();
        match trimmed.split_once(' ') {
            Some((first, last)) => (first.to_string(), last.trim_start().to_string()),
            None => (trimmed.to_string(), String::new()),
        }
    }
}
