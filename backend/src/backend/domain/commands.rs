//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod friends {
    use crate::backend::domain::models::friend::{Friend as DomainFriend, Gender};

    /// Input for creating a new friend record.
    #[derive(Debug, Clone)]
    pub struct CreateFriendCommand {
        pub name: String,
        /// ISO 8601 date string (YYYY-MM-DD); required and must parse
        pub birthday: String,
        pub gender: Gender,
        pub interest: String,
    }

    /// Input for updating an existing friend; `None` fields are unchanged.
    #[derive(Debug, Clone)]
    pub struct UpdateFriendCommand {
        pub friend_id: String,
        pub name: Option<String>,
        pub birthday: Option<String>,
        pub gender: Option<Gender>,
        pub interest: Option<String>,
    }

    /// Input for deleting a friend. Deletion is irreversible; there is no
    /// soft-delete.
    #[derive(Debug, Clone)]
    pub struct DeleteFriendCommand {
        pub friend_id: String,
    }

    /// Result of creating a friend.
    #[derive(Debug, Clone)]
    pub struct CreateFriendResult {
        pub friend: DomainFriend,
    }

    /// Result of updating a friend.
    #[derive(Debug, Clone)]
    pub struct UpdateFriendResult {
        pub friend: DomainFriend,
    }

    /// Result of deleting a friend.
    #[derive(Debug, Clone)]
    pub struct DeleteFriendResult {
        pub success_message: String,
    }
}

pub mod upcoming {
    use crate::backend::domain::models::friend::Friend as DomainFriend;
    use chrono::NaiveDate;
    use shared::{UrgencyBadge, UrgencyFilter};

    /// Query for the upcoming-birthdays list. `today` is injected by the
    /// caller so the countdown is deterministic and testable.
    #[derive(Debug, Clone)]
    pub struct UpcomingBirthdaysQuery {
        pub today: NaiveDate,
        pub filter: UrgencyFilter,
    }

    /// A friend decorated with countdown data, ready for display mapping.
    #[derive(Debug, Clone)]
    pub struct UpcomingEntry {
        pub friend: DomainFriend,
        pub days_until: Option<u32>,
        pub badge: UrgencyBadge,
    }

    /// Result of the upcoming-birthdays query.
    #[derive(Debug, Clone)]
    pub struct UpcomingBirthdaysResult {
        pub entries: Vec<UpcomingEntry>,
        pub filter: UrgencyFilter,
    }
}

pub mod gifts {
    use shared::GiftSuggestion;

    /// Input for requesting a gift suggestion for a friend.
    #[derive(Debug, Clone)]
    pub struct GiftSuggestionCommand {
        pub friend_id: String,
        /// Budget hint, e.g. "$20"; defaults when absent
        pub budget: Option<String>,
    }

    /// Result of a gift suggestion lookup.
    #[derive(Debug, Clone)]
    pub struct GiftSuggestionResult {
        pub friend_id: String,
        pub suggestion: GiftSuggestion,
    }
}
