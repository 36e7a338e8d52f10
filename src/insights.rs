//! Scalar summaries derived from the bucketed series. All of these degrade
//! to `None` on an empty record set instead of panicking.

use chrono::TimeZone;

use crate::aggregate::{by_day_of_week, by_hour_of_day, by_repository};
use crate::model::CommitRecord;

/// Weekday with the most commits as `(index, count)`, index 0 = Sunday.
/// Ties go to the lowest index.
pub fn busiest_day<Tz: TimeZone>(records: &[CommitRecord], tz: &Tz) -> Option<(usize, u32)> {
    if records.is_empty() {
        return None;
    }
    Some(peak(&by_day_of_week(records, tz)))
}

/// Hour of day with the most commits as `(hour, count)`. Ties go to the
/// lowest hour.
pub fn busiest_hour<Tz: TimeZone>(records: &[CommitRecord], tz: &Tz) -> Option<(usize, u32)> {
    if records.is_empty() {
        return None;
    }
    Some(peak(&by_hour_of_day(records, tz)))
}

/// Repository with the most commits. Ties go to the first-encountered
/// repository.
pub fn busiest_repo(records: &[CommitRecord]) -> Option<(String, u32)> {
    let buckets = by_repository(records);
    let mut best: Option<(String, u32)> = None;
    for (name, count) in buckets {
        match &best {
            Some((_, c)) if count <= *c => {}
            _ => best = Some((name, count)),
        }
    }
    best
}

/// Commits per day over the window, rounded to one decimal place. Zero for
/// an empty record set, never an error.
pub fn average_commits_per_day(total_commits: usize, window_days: u32) -> f64 {
    if window_days == 0 {
        return 0.0;
    }
    (total_commits as f64 / window_days as f64 * 10.0).round() / 10.0
}

// First strict maximum, so the lowest index wins ties.
fn peak(counts: &[u32]) -> (usize, u32) {
    let mut best = (0, counts[0]);
    for (i, &count) in counts.iter().enumerate().skip(1) {
        if count > best.1 {
            best = (i, count);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn record(y: i32, m: u32, d: u32, h: u32, min: u32, repo: &str) -> CommitRecord {
        CommitRecord {
            timestamp: Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap(),
            repo: repo.to_string(),
        }
    }

    fn sample() -> Vec<CommitRecord> {
        vec![
            record(2024, 3, 4, 10, 0, "alpha"),
            record(2024, 3, 4, 10, 30, "alpha"),
            record(2024, 3, 11, 23, 0, "beta"),
        ]
    }

    #[test]
    fn busiest_day_is_monday_for_the_sample() {
        assert_eq!(busiest_day(&sample(), &Utc), Some((1, 3)));
    }

    #[test]
    fn busiest_hour_prefers_the_lowest_hour_on_ties() {
        let records = vec![
            record(2024, 3, 4, 22, 0, "alpha"),
            record(2024, 3, 5, 9, 0, "alpha"),
        ];
        assert_eq!(busiest_hour(&records, &Utc), Some((9, 1)));
    }

    #[test]
    fn busiest_repo_prefers_first_encountered_on_ties() {
        let records = vec![
            record(2024, 3, 4, 10, 0, "alpha"),
            record(2024, 3, 5, 10, 0, "beta"),
        ];
        assert_eq!(busiest_repo(&records), Some(("alpha".to_string(), 1)));
        assert_eq!(busiest_repo(&sample()), Some(("alpha".to_string(), 2)));
    }

    #[test]
    fn empty_records_yield_sentinels_not_panics() {
        assert_eq!(busiest_day(&[], &Utc), None);
        assert_eq!(busiest_hour(&[], &Utc), None);
        assert_eq!(busiest_repo(&[]), None);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        assert_eq!(average_commits_per_day(0, 7), 0.0);
        assert_eq!(average_commits_per_day(3, 7), 0.4);
        assert_eq!(average_commits_per_day(10, 30), 0.3);
        assert_eq!(average_commits_per_day(45, 30), 1.5);
        assert_eq!(average_commits_per_day(5, 0), 0.0);
    }
}
