use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A friend whose birthday is being tracked.
///
/// Friend ID in format: "friend::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: String,
    /// Display name (non-empty, max 100 characters)
    pub name: String,
    /// Birthday as an ISO 8601 date string (YYYY-MM-DD). Only month and day
    /// are meaningful for recurrence; the stored year is an artifact of the
    /// input widget. `None` when the stored value could not be parsed.
    pub birthday: Option<String>,
    /// Display-only gender grouping
    pub gender: Gender,
    /// Free-text interests, forwarded verbatim to the gift recommendation API
    pub interest: String,
    /// Record creation timestamp (RFC 3339)
    pub created_at: String,
    /// Last modification timestamp (RFC 3339)
    pub updated_at: String,
}

/// Gender options offered by the friend form. Display/cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    #[serde(rename = "Non-binary")]
    NonBinary,
    Other,
    #[serde(rename = "Prefer not to say")]
    PreferNotToSay,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::NonBinary => "Non-binary",
            Gender::Other => "Other",
            Gender::PreferNotToSay => "Prefer not to say",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Gender {
    type Err = GenderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Female" => Ok(Gender::Female),
            "Male" => Ok(Gender::Male),
            "Non-binary" => Ok(Gender::NonBinary),
            "Other" => Ok(Gender::Other),
            "Prefer not to say" => Ok(Gender::PreferNotToSay),
            _ => Err(GenderParseError),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderParseError;

impl fmt::Display for GenderParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unrecognized gender value")
    }
}

impl std::error::Error for GenderParseError {}

/// Urgency tier derived from days-until-next-birthday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    /// Birthday is today or tomorrow
    Today,
    /// 2-7 days away
    Urgent,
    /// 8-30 days away
    Soon,
    /// More than 30 days away
    Upcoming,
    /// No parseable birthday on record; excluded from countdown displays
    None,
}

/// Display badge for a friend's countdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrgencyBadge {
    pub tier: UrgencyTier,
    /// Badge text, e.g. "TODAY!", "Tomorrow!", "12 days".
    /// Absent for the `None` tier.
    pub label: Option<String>,
}

/// Category filter for the upcoming-birthdays list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyFilter {
    #[default]
    All,
    /// 7 days or fewer (includes today/tomorrow)
    Urgent,
    /// 8-30 days
    Soon,
    /// More than 30 days
    Upcoming,
}

impl FromStr for UrgencyFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(UrgencyFilter::All),
            "urgent" => Ok(UrgencyFilter::Urgent),
            "soon" => Ok(UrgencyFilter::Soon),
            "upcoming" => Ok(UrgencyFilter::Upcoming),
            other => Err(format!(
                "Invalid filter '{}'. Expected one of: all, urgent, soon, upcoming",
                other
            )),
        }
    }
}

/// A friend decorated with countdown information for dashboard rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingFriend {
    pub friend: Friend,
    /// Whole days until the next occurrence of the birthday.
    /// `None` when the friend has no parseable birthday.
    pub days_until: Option<u32>,
    pub badge: UrgencyBadge,
}

/// Request to create a new friend record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateFriendRequest {
    pub name: String,
    /// ISO 8601 date (YYYY-MM-DD); required
    pub birthday: String,
    pub gender: Gender,
    #[serde(default)]
    pub interest: String,
}

/// Request to update an existing friend record; absent fields are unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateFriendRequest {
    pub name: Option<String>,
    pub birthday: Option<String>,
    pub gender: Option<Gender>,
    pub interest: Option<String>,
}

/// Response containing a single friend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendResponse {
    pub friend: Friend,
    pub success_message: String,
}

/// Response after deleting a friend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteFriendResponse {
    pub success_message: String,
}

/// Upcoming-ordered friend list with countdown badges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingFriendsResponse {
    pub friends: Vec<UpcomingFriend>,
    /// Filter that produced this list
    pub filter: UrgencyFilter,
}

/// Request for a gift suggestion for a friend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftSuggestionRequest {
    pub friend_id: String,
    /// Budget hint forwarded to the recommendation API, e.g. "$20"
    pub budget: Option<String>,
}

/// A gift suggestion as returned by the recommendation API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftSuggestion {
    pub gift: String,
    /// The remote API spells this key with a space
    #[serde(rename = "price range")]
    pub price_range: String,
}

/// Response wrapping a gift suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftSuggestionResponse {
    pub friend_id: String,
    pub suggestion: GiftSuggestion,
}

/// Curated interest suggestions offered by the add-friend form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestSuggestionsResponse {
    pub suggestions: Vec<String>,
}

impl Friend {
    /// Generate a friend ID from a UUID string
    pub fn generate_id(uuid: &str) -> String {
        format!("friend::{}", uuid)
    }

    /// Parse a friend ID to extract the UUID portion
    pub fn parse_id(id: &str) -> Result<String, FriendIdError> {
        let parts: Vec<&str> = id.split("::").collect();
        if parts.len() != 2 || parts[0] != "friend" || parts[1].is_empty() {
            return Err(FriendIdError::InvalidFormat);
        }
        Ok(parts[1].to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FriendIdError {
    InvalidFormat,
}

impl fmt::Display for FriendIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FriendIdError::InvalidFormat => write!(f, "Invalid friend ID format"),
        }
    }
}

impl std::error::Error for FriendIdError {}
