//! Birthday countdown logic for the reminder dashboard.
//!
//! This module is the single home for all countdown, urgency, sorting, and
//! filtering rules. Every presentation surface goes through these functions
//! rather than carrying its own date math, so the rules cannot drift between
//! views.
//!
//! The functions are pure: "today" is always an explicit parameter supplied
//! by the caller, never read from an ambient clock, and all arithmetic is
//! done on calendar days (`chrono::NaiveDate`), so daylight-saving
//! transitions can never introduce off-by-one errors.

use chrono::{Datelike, NaiveDate};
use shared::{UrgencyBadge, UrgencyFilter, UrgencyTier};

/// Whole days until the next occurrence of `birthday`'s month/day, counted
/// from `today`. Returns 0 when the birthday is today.
///
/// Only the month and day of `birthday` are read; its year is ignored, so
/// two records that differ only in the stored year always produce the same
/// countdown.
///
/// Feb 29 birthdays are observed on Feb 28 in non-leap years.
///
/// The result is always in `[0, 366)`.
pub fn days_until_next_occurrence(birthday: NaiveDate, today: NaiveDate) -> u32 {
    let mut candidate = occurrence_in_year(birthday.month(), birthday.day(), today.year());

    // Already passed this year: the next occurrence is next year's.
    if candidate < today {
        candidate = occurrence_in_year(birthday.month(), birthday.day(), today.year() + 1);
    }

    (candidate - today).num_days() as u32
}

/// The date `month`/`day` falls on in `year`, with Feb 29 observed on
/// Feb 28 when `year` is not a leap year. `month`/`day` must come from a
/// valid calendar date.
fn occurrence_in_year(month: u32, day: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| {
        // Only reachable for Feb 29 in a non-leap year.
        NaiveDate::from_ymd_opt(year, 2, 28).unwrap()
    })
}

/// Derive the display badge for a countdown. `None` means the record has no
/// parseable birthday; it gets the `None` tier and no label, and is excluded
/// from countdown displays.
pub fn classify_urgency(days_until: Option<u32>) -> UrgencyBadge {
    let days = match days_until {
        Some(days) => days,
        None => {
            return UrgencyBadge {
                tier: UrgencyTier::None,
                label: None,
            }
        }
    };

    let (tier, label) = match days {
        0 => (UrgencyTier::Today, "TODAY!".to_string()),
        1 => (UrgencyTier::Today, "Tomorrow!".to_string()),
        2..=7 => (UrgencyTier::Urgent, format!("{} days", days)),
        8..=30 => (UrgencyTier::Soon, format!("{} days", days)),
        _ => (UrgencyTier::Upcoming, format!("{} days", days)),
    };

    UrgencyBadge {
        tier,
        label: Some(label),
    }
}

/// Stable ascending sort by days-until. Items with an undefined countdown
/// sort last; ties keep their original relative order, so two friends with
/// the same countdown never visibly reorder between renders.
pub fn sort_by_upcoming<T, F>(items: &mut [T], days_of: F)
where
    F: Fn(&T) -> Option<u32>,
{
    // sort_by_key is a stable sort; undefined countdowns map past any
    // real value (which is always < 366).
    items.sort_by_key(|item| days_of(item).unwrap_or(u32::MAX));
}

/// Whether a countdown belongs to the given category. Records with an
/// undefined countdown only appear under `All`.
pub fn matches_filter(days_until: Option<u32>, filter: UrgencyFilter) -> bool {
    match filter {
        UrgencyFilter::All => true,
        UrgencyFilter::Urgent => matches!(days_until, Some(days) if days <= 7),
        UrgencyFilter::Soon => matches!(days_until, Some(days) if (8..=30).contains(&days)),
        UrgencyFilter::Upcoming => matches!(days_until, Some(days) if days > 30),
    }
}

/// Pure category filter over a decorated record list. No mutation of the
/// retained items, no side effects.
pub fn filter_by_category<T, F>(items: Vec<T>, filter: UrgencyFilter, days_of: F) -> Vec<T>
where
    F: Fn(&T) -> Option<u32>,
{
    items
        .into_iter()
        .filter(|item| matches_filter(days_of(item), filter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_birthday_later_this_year() {
        let today = date(2024, 3, 10);
        let birthday = date(1990, 3, 15);
        assert_eq!(days_until_next_occurrence(birthday, today), 5);
    }

    #[test]
    fn test_birthday_already_passed_rolls_to_next_year() {
        // Candidate rolls to 2025-03-05; the span 2024-03-10 -> 2025-03-05
        // contains no Feb 29, so the count is 360.
        let today = date(2024, 3, 10);
        let birthday = date(1990, 3, 5);
        assert_eq!(days_until_next_occurrence(birthday, today), 360);
    }

    #[test]
    fn test_birthday_today_is_zero() {
        let today = date(2025, 6, 13);
        let birthday = date(1993, 6, 13);
        assert_eq!(days_until_next_occurrence(birthday, today), 0);
    }

    #[test]
    fn test_birthday_tomorrow_is_one() {
        let today = date(2025, 6, 13);
        let birthday = date(1993, 6, 14);
        assert_eq!(days_until_next_occurrence(birthday, today), 1);
    }

    #[test]
    fn test_count_crosses_a_leap_day() {
        // Dec 31 2023 -> Feb 29 2024: 31 days of January plus 29 of February.
        let today = date(2023, 12, 31);
        let birthday = date(2000, 2, 29);
        assert_eq!(days_until_next_occurrence(birthday, today), 60);
    }

    #[test]
    fn test_leap_day_observed_on_feb_28_in_non_leap_year() {
        let birthday = date(2000, 2, 29);

        // 2025 is not a leap year: observed on Feb 28.
        assert_eq!(days_until_next_occurrence(birthday, date(2025, 2, 28)), 0);

        // The day after the observed date rolls to next year's Feb 28
        // (2026 is also non-leap): 2025-03-01 -> 2026-02-28.
        assert_eq!(days_until_next_occurrence(birthday, date(2025, 3, 1)), 364);
    }

    #[test]
    fn test_leap_day_in_leap_year_falls_on_feb_29() {
        let birthday = date(2000, 2, 29);
        assert_eq!(days_until_next_occurrence(birthday, date(2024, 2, 29)), 0);
        assert_eq!(days_until_next_occurrence(birthday, date(2024, 2, 1)), 28);
    }

    #[test]
    fn test_result_is_invariant_to_stored_year() {
        let today = date(2024, 3, 10);
        // Same month/day stored under many different years, including a
        // leap year; the countdown must not change.
        for year in [1970, 1988, 1990, 2000, 2016, 2023] {
            let birthday = date(year, 3, 15);
            assert_eq!(days_until_next_occurrence(birthday, today), 5);
        }
    }

    #[test]
    fn test_result_always_within_year_range() {
        // Every possible month/day (taken from leap year 2024 so Feb 29 is
        // included) against several reference dates.
        let todays = [
            date(2024, 1, 1),
            date(2024, 2, 29),
            date(2024, 12, 31),
            date(2025, 2, 28),
            date(2025, 7, 4),
        ];
        let mut birthday = date(2024, 1, 1);
        while birthday.year() == 2024 {
            for today in todays {
                let days = days_until_next_occurrence(birthday, today);
                assert!(days < 366, "{} from {} gave {}", birthday, today, days);
            }
            birthday = birthday.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_same_month_and_day_is_always_zero() {
        let mut today = date(2025, 1, 1);
        while today.year() == 2025 {
            let birthday = date(1991, today.month(), today.day());
            assert_eq!(days_until_next_occurrence(birthday, today), 0);
            today = today.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_classify_urgency_tiers() {
        assert_eq!(classify_urgency(Some(0)).tier, UrgencyTier::Today);
        assert_eq!(classify_urgency(Some(1)).tier, UrgencyTier::Today);
        assert_eq!(classify_urgency(Some(2)).tier, UrgencyTier::Urgent);
        assert_eq!(classify_urgency(Some(7)).tier, UrgencyTier::Urgent);
        assert_eq!(classify_urgency(Some(8)).tier, UrgencyTier::Soon);
        assert_eq!(classify_urgency(Some(30)).tier, UrgencyTier::Soon);
        assert_eq!(classify_urgency(Some(31)).tier, UrgencyTier::Upcoming);
        assert_eq!(classify_urgency(Some(365)).tier, UrgencyTier::Upcoming);
        assert_eq!(classify_urgency(None).tier, UrgencyTier::None);
    }

    #[test]
    fn test_classify_urgency_labels() {
        assert_eq!(classify_urgency(Some(0)).label.unwrap(), "TODAY!");
        assert_eq!(classify_urgency(Some(1)).label.unwrap(), "Tomorrow!");
        assert_eq!(classify_urgency(Some(5)).label.unwrap(), "5 days");
        assert_eq!(classify_urgency(Some(30)).label.unwrap(), "30 days");
        assert_eq!(classify_urgency(Some(120)).label.unwrap(), "120 days");
        assert_eq!(classify_urgency(None).label, None);
    }

    #[test]
    fn test_sort_is_stable_for_equal_countdowns() {
        // [A(5), B(5), C(3)] must come out as [C, A, B]: A stays before B.
        let mut items = vec![("A", Some(5)), ("B", Some(5)), ("C", Some(3))];
        sort_by_upcoming(&mut items, |(_, days)| *days);
        let order: Vec<&str> = items.iter().map(|(name, _)| *name).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_undefined_countdowns_sort_last() {
        let mut items = vec![
            ("no-birthday", None),
            ("far", Some(340)),
            ("near", Some(2)),
            ("also-no-birthday", None),
        ];
        sort_by_upcoming(&mut items, |(_, days)| *days);
        let order: Vec<&str> = items.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            order,
            vec!["near", "far", "no-birthday", "also-no-birthday"]
        );
    }

    #[test]
    fn test_filter_boundaries() {
        assert!(matches_filter(Some(0), UrgencyFilter::Urgent));
        assert!(matches_filter(Some(7), UrgencyFilter::Urgent));
        assert!(!matches_filter(Some(8), UrgencyFilter::Urgent));

        assert!(matches_filter(Some(8), UrgencyFilter::Soon));
        assert!(matches_filter(Some(30), UrgencyFilter::Soon));
        assert!(!matches_filter(Some(31), UrgencyFilter::Soon));

        assert!(matches_filter(Some(31), UrgencyFilter::Upcoming));
        assert!(!matches_filter(Some(30), UrgencyFilter::Upcoming));
    }

    #[test]
    fn test_undefined_countdown_only_matches_all() {
        assert!(matches_filter(None, UrgencyFilter::All));
        assert!(!matches_filter(None, UrgencyFilter::Urgent));
        assert!(!matches_filter(None, UrgencyFilter::Soon));
        assert!(!matches_filter(None, UrgencyFilter::Upcoming));
    }

    #[test]
    fn test_filter_by_category_keeps_order() {
        let items = vec![
            ("today", Some(0)),
            ("soon", Some(12)),
            ("urgent", Some(6)),
            ("none", None),
        ];
        let urgent = filter_by_category(items, UrgencyFilter::Urgent, |(_, days)| *days);
        let order: Vec<&str> = urgent.iter().map(|(name, _)| *name).collect();
        assert_eq!(order, vec!["today", "urgent"]);
    }
}
