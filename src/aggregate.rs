//! Pure bucketing of normalized commit records into the fixed-size series
//! the visualizations consume. Every function here is deterministic and
//! side-effect-free; time bucketing is generic over the timezone so callers
//! render in local time while tests stay pinned to UTC.

use chrono::{Datelike, Duration, NaiveDate, TimeZone, Timelike};
use std::collections::HashMap;

use crate::model::{CommitRecord, DateCount};

/// Commits per weekday, index 0 = Sunday through 6 = Saturday.
pub fn by_day_of_week<Tz: TimeZone>(records: &[CommitRecord], tz: &Tz) -> [u32; 7] {
    let mut counts = [0u32; 7];
    for record in records {
        let day = record.timestamp.with_timezone(tz).weekday().num_days_from_sunday();
        counts[day as usize] += 1;
    }
    counts
}

/// Commits per hour of day, index 0..=23.
pub fn by_hour_of_day<Tz: TimeZone>(records: &[CommitRecord], tz: &Tz) -> [u32; 24] {
    let mut counts = [0u32; 24];
    for record in records {
        let hour = record.timestamp.with_timezone(tz).hour();
        counts[hour as usize] += 1;
    }
    counts
}

/// Commits per calendar month, index 0 = January, aggregated across years.
pub fn by_month<Tz: TimeZone>(records: &[CommitRecord], tz: &Tz) -> [u32; 12] {
    let mut counts = [0u32; 12];
    for record in records {
        let month = record.timestamp.with_timezone(tz).month0();
        counts[month as usize] += 1;
    }
    counts
}

/// Commits per repository, keys in first-encountered order.
pub fn by_repository(records: &[CommitRecord]) -> Vec<(String, u32)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u32> = HashMap::new();

    for record in records {
        if !counts.contains_key(&record.repo) {
            order.push(record.repo.clone());
        }
        *counts.entry(record.repo.clone()).or_insert(0) += 1;
    }

    order
        .into_iter()
        .map(|name| {
            let count = counts[&name];
            (name, count)
        })
        .collect()
}

/// Commits per calendar day over `[today - window_days, today]`, one entry
/// per day in chronological order, zero-filled for days with no commits.
pub fn by_calendar_date<Tz: TimeZone>(
    records: &[CommitRecord],
    window_days: u32,
    today: NaiveDate,
    tz: &Tz,
) -> Vec<DateCount> {
    let mut counts: HashMap<NaiveDate, u32> = HashMap::new();
    for record in records {
        let date = record.timestamp.with_timezone(tz).date_naive();
        *counts.entry(date).or_insert(0) += 1;
    }

    let start = today - Duration::days(window_days as i64);
    (0..=window_days as i64)
        .map(|offset| {
            let date = start + Duration::days(offset);
            DateCount {
                date,
                count: counts.get(&date).copied().unwrap_or(0),
            }
        })
        .collect()
}

/// Presentation tier for a heatmap cell: `floor(4 * count / max)` clamped to
/// `[0, 4]`, with 0 whenever the count or the series maximum is zero.
pub fn heatmap_level(count: u32, max: u32) -> u8 {
    ((4 * count) / max.max(1)).min(4) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CommitRecord;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn record(y: i32, m: u32, d: u32, h: u32, min: u32, repo: &str) -> CommitRecord {
        CommitRecord {
            timestamp: Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap(),
            repo: repo.to_string(),
        }
    }

    // Three commits across two Mondays, two repos (the spec's worked example).
    fn sample() -> Vec<CommitRecord> {
        vec![
            record(2024, 3, 4, 10, 0, "alpha"),
            record(2024, 3, 4, 10, 30, "alpha"),
            record(2024, 3, 11, 23, 0, "beta"),
        ]
    }

    #[test]
    fn day_of_week_buckets_mondays_together() {
        let counts = by_day_of_week(&sample(), &Utc);
        assert_eq!(counts[1], 3); // Monday
        assert_eq!(counts.iter().sum::<u32>(), 3);
    }

    #[test]
    fn hour_of_day_counts_each_local_hour() {
        let counts = by_hour_of_day(&sample(), &Utc);
        assert_eq!(counts[10], 2);
        assert_eq!(counts[23], 1);
        assert_eq!(counts.iter().sum::<u32>(), 3);
    }

    #[test]
    fn months_aggregate_across_years() {
        let records = vec![
            record(2023, 3, 1, 9, 0, "alpha"),
            record(2024, 3, 4, 10, 0, "alpha"),
            record(2024, 12, 25, 8, 0, "beta"),
        ];
        let counts = by_month(&records, &Utc);
        assert_eq!(counts[2], 2); // March, both years
        assert_eq!(counts[11], 1);
        assert_eq!(counts.iter().sum::<u32>(), 3);
    }

    #[test]
    fn repository_counts_keep_first_encountered_order() {
        let buckets = by_repository(&sample());
        assert_eq!(
            buckets,
            vec![("alpha".to_string(), 2), ("beta".to_string(), 1)]
        );
    }

    #[test]
    fn series_sums_equal_record_count() {
        let records = sample();
        let n = records.len() as u32;
        assert_eq!(by_day_of_week(&records, &Utc).iter().sum::<u32>(), n);
        assert_eq!(by_hour_of_day(&records, &Utc).iter().sum::<u32>(), n);
        assert_eq!(by_month(&records, &Utc).iter().sum::<u32>(), n);
        assert_eq!(
            by_repository(&records).iter().map(|(_, c)| c).sum::<u32>(),
            n
        );
    }

    #[test]
    fn calendar_dates_are_gap_free_and_zero_filled() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        let days = by_calendar_date(&sample(), 7, today, &Utc);

        assert_eq!(days.len(), 8);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(days[7].date, today);
        for window in days.windows(2) {
            assert_eq!(window[1].date - window[0].date, Duration::days(1));
        }

        // Only 2024-03-11 falls inside this window
        assert_eq!(days.iter().map(|d| d.count).sum::<u32>(), 1);
        assert_eq!(days[6].count, 1);
    }

    #[test]
    fn empty_window_is_fully_zero_filled() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        let days = by_calendar_date(&[], 7, today, &Utc);
        assert_eq!(days.len(), 8);
        assert!(days.iter().all(|d| d.count == 0));
    }

    #[test]
    fn heatmap_filter_only_sees_matching_repo() {
        let records: Vec<_> = sample()
            .into_iter()
            .filter(|r| r.repo == "beta")
            .collect();
        let today = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        let days = by_calendar_date(&records, 7, today, &Utc);
        assert_eq!(days.iter().map(|d| d.count).sum::<u32>(), 1);

        // The unfiltered day-of-week series is unaffected by the heatmap filter
        assert_eq!(by_day_of_week(&sample(), &Utc)[1], 3);
    }

    #[test]
    fn heatmap_levels_tier_against_the_series_max() {
        assert_eq!(heatmap_level(0, 0), 0);
        assert_eq!(heatmap_level(0, 9), 0);
        assert_eq!(heatmap_level(9, 9), 4);
        assert_eq!(heatmap_level(1, 9), 0);
        assert_eq!(heatmap_level(5, 9), 2);
        assert_eq!(heatmap_level(1, 1), 4);
    }
}
