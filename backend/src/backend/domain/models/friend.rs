//! backend/src/backend/domain/models/friend.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain model representing a friend whose birthday is being tracked.
///
/// Only month and day of `birthday` are meaningful for recurrence; the
/// stored year is whatever the input widget produced and is ignored by
/// the countdown logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: String,
    pub name: String,
    /// `None` when the stored value was missing or unparseable. Such
    /// records have an undefined countdown and sort after everyone else.
    pub birthday: Option<NaiveDate>,
    pub gender: Gender,
    pub interest: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Friend {
    /// Generate a unique ID for a friend
    pub fn generate_id() -> String {
        format!("friend::{}", Uuid::new_v4())
    }
}

/// Gender options from the friend form. Display/cosmetic grouping only,
/// never used in countdown or sorting logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    NonBinary,
    Other,
    PreferNotToSay,
}

impl Gender {
    /// Stable string form used in CSV storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::NonBinary => "Non-binary",
            Gender::Other => "Other",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }

    /// Parse the stored string form. Returns `None` for unrecognized values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Female" => Some(Gender::Female),
            "Male" => Some(Gender::Male),
            "Non-binary" => Some(Gender::NonBinary),
            "Other" => Some(Gender::Other),
            "Prefer not to say" => Some(Gender::PreferNotToSay),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_has_friend_prefix() {
        let id = Friend::generate_id();
        assert!(id.starts_with("friend::"));
        assert!(id.len() > "friend::".len());
    }

    #[test]
    fn test_gender_storage_roundtrip() {
        for gender in [
            Gender::Female,
            Gender::Male,
            Gender::NonBinary,
            Gender::Other,
            Gender::PreferNotToSay,
        ] {
            assert_eq!(Gender::parse(gender.as_str()), Some(gender));
        }
        assert_eq!(Gender::parse("Unknown"), None);
    }
}
