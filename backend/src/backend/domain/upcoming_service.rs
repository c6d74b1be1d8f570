//! Upcoming-birthdays view logic.
//!
//! Orchestrates the friend repository and the countdown calculator in
//! `urgency`: every friend is decorated with a countdown and badge, the
//! list is stable-sorted by urgency, and an optional category filter is
//! applied. Presentation layers consume the result as-is so none of them
//! carries its own date math.

use anyhow::Result;
use log::debug;
use std::sync::Arc;

use crate::backend::domain::commands::upcoming::{
    UpcomingBirthdaysQuery, UpcomingBirthdaysResult, UpcomingEntry,
};
use crate::backend::domain::urgency;
use crate::backend::storage::csv::{CsvConnection, FriendRepository};
use crate::backend::storage::traits::FriendStorage;

/// Service that produces the urgency-ordered dashboard list
#[derive(Clone)]
pub struct UpcomingService {
    friend_repository: FriendRepository,
}

impl UpcomingService {
    /// Create a new UpcomingService
    pub fn new(csv_conn: Arc<CsvConnection>) -> Self {
        let friend_repository = FriendRepository::new(csv_conn);
        Self { friend_repository }
    }

    /// List friends decorated with countdown data, sorted soonest-first.
    ///
    /// Friends without a parseable birthday sort last and only appear
    /// under the `All` filter. `today` comes from the query, so callers
    /// are responsible for re-querying at a sensible cadence; nothing is
    /// cached here.
    pub fn list_upcoming(&self, query: UpcomingBirthdaysQuery) -> Result<UpcomingBirthdaysResult> {
        let friends = self.friend_repository.list_friends()?;
        debug!(
            "Building upcoming list for {} friends (today={}, filter={:?})",
            friends.len(),
            query.today,
            query.filter
        );

        let mut entries: Vec<UpcomingEntry> = friends
            .into_iter()
            .map(|friend| {
                let days_until = friend
                    .birthday
                    .map(|birthday| urgency::days_until_next_occurrence(birthday, query.today));
                UpcomingEntry {
                    badge: urgency::classify_urgency(days_until),
                    days_until,
                    friend,
                }
            })
            .collect();

        urgency::sort_by_upcoming(&mut entries, |entry| entry.days_until);
        let entries = urgency::filter_by_category(entries, query.filter, |entry| entry.days_until);

        Ok(UpcomingBirthdaysResult {
            entries,
            filter: query.filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::friend::{Friend as DomainFriend, Gender};
    use chrono::{NaiveDate, Utc};
    use shared::{UrgencyFilter, UrgencyTier};
    use tempfile::tempdir;

    fn setup_test() -> (UpcomingService, FriendRepository, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let conn = Arc::new(CsvConnection::new(temp_dir.path()).unwrap());
        let service = UpcomingService::new(conn.clone());
        let repo = FriendRepository::new(conn);
        (service, repo, temp_dir)
    }

    fn store_friend(repo: &FriendRepository, name: &str, birthday: Option<&str>) {
        let now = Utc::now();
        let friend = DomainFriend {
            id: DomainFriend::generate_id(),
            name: name.to_string(),
            birthday: birthday.map(|b| NaiveDate::parse_from_str(b, "%Y-%m-%d").unwrap()),
            gender: Gender::Other,
            interest: String::new(),
            created_at: now,
            updated_at: now,
        };
        repo.store_friend(&friend).unwrap();
    }

    fn query(today: &str, filter: UrgencyFilter) -> UpcomingBirthdaysQuery {
        UpcomingBirthdaysQuery {
            today: NaiveDate::parse_from_str(today, "%Y-%m-%d").unwrap(),
            filter,
        }
    }

    #[test]
    fn test_list_is_sorted_soonest_first() {
        let (service, repo, _dir) = setup_test();
        store_friend(&repo, "Far", Some("1990-09-01"));
        store_friend(&repo, "Today", Some("1988-03-10"));
        store_friend(&repo, "Next Week", Some("1992-03-15"));

        let result = service
            .list_upcoming(query("2024-03-10", UrgencyFilter::All))
            .unwrap();

        let names: Vec<&str> = result
            .entries
            .iter()
            .map(|e| e.friend.name.as_str())
            .collect();
        assert_eq!(names, vec!["Today", "Next Week", "Far"]);
        assert_eq!(result.entries[0].days_until, Some(0));
        assert_eq!(result.entries[0].badge.tier, UrgencyTier::Today);
        assert_eq!(result.entries[1].days_until, Some(5));
    }

    #[test]
    fn test_friends_without_birthday_sort_last_under_all() {
        let (service, repo, _dir) = setup_test();
        store_friend(&repo, "No Birthday", None);
        store_friend(&repo, "Has Birthday", Some("1990-12-25"));

        let result = service
            .list_upcoming(query("2024-03-10", UrgencyFilter::All))
            .unwrap();

        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[0].friend.name, "Has Birthday");
        assert_eq!(result.entries[1].friend.name, "No Birthday");
        assert_eq!(result.entries[1].days_until, None);
        assert_eq!(result.entries[1].badge.tier, UrgencyTier::None);
        assert_eq!(result.entries[1].badge.label, None);
    }

    #[test]
    fn test_urgent_filter_excludes_undefined_and_distant() {
        let (service, repo, _dir) = setup_test();
        store_friend(&repo, "No Birthday", None);
        store_friend(&repo, "This Week", Some("1995-03-14"));
        store_friend(&repo, "Next Month", Some("1995-04-20"));

        let result = service
            .list_upcoming(query("2024-03-10", UrgencyFilter::Urgent))
            .unwrap();

        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].friend.name, "This Week");
        assert_eq!(result.filter, UrgencyFilter::Urgent);
    }

    #[test]
    fn test_soon_and_upcoming_filters() {
        let (service, repo, _dir) = setup_test();
        store_friend(&repo, "Twelve Days", Some("1995-03-22"));
        store_friend(&repo, "Far Away", Some("1995-08-01"));

        let soon = service
            .list_upcoming(query("2024-03-10", UrgencyFilter::Soon))
            .unwrap();
        assert_eq!(soon.entries.len(), 1);
        assert_eq!(soon.entries[0].friend.name, "Twelve Days");
        assert_eq!(soon.entries[0].days_until, Some(12));

        let upcoming = service
            .list_upcoming(query("2024-03-10", UrgencyFilter::Upcoming))
            .unwrap();
        assert_eq!(upcoming.entries.len(), 1);
        assert_eq!(upcoming.entries[0].friend.name, "Far Away");
    }

    #[test]
    fn test_empty_store_gives_empty_list() {
        let (service, _repo, _dir) = setup_test();
        let result = service
            .list_upcoming(query("2024-03-10", UrgencyFilter::All))
            .unwrap();
        assert!(result.entries.is_empty());
    }
}
