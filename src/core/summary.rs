//! Pure aggregation over the entry list: day totals, range/category
//! filtering, per-category totals.

use crate::models::entry::TimeEntry;
use crate::models::summary::{CategoryTotal, EntryFilter, Summary};
use crate::utils::date::{local_day, local_midnight};
use chrono::{DateTime, NaiveDate, Utc};

/// Sum of durations of entries starting on local calendar day `day`.
pub fn day_total(entries: &[TimeEntry], day: NaiveDate) -> i64 {
    entries
        .iter()
        .filter(|e| local_day(&e.start) == day)
        .map(|e| e.duration_ms)
        .sum()
}

pub fn today_total(entries: &[TimeEntry], now: DateTime<Utc>) -> i64 {
    day_total(entries, local_day(&now))
}

/// Keep entries with `from <= start < to + 1 day`, both bounds optional.
pub fn filter_by_range(
    entries: &[TimeEntry],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<TimeEntry> {
    let lower = from.map(local_midnight);
    // the day after `to` only overflows at NaiveDate::MAX, which leaves the range open
    let upper = to.and_then(|d| d.succ_opt()).map(local_midnight);

    entries
        .iter()
        .filter(|e| lower.is_none_or(|lo| e.start >= lo))
        .filter(|e| upper.is_none_or(|hi| e.start < hi))
        .cloned()
        .collect()
}

pub fn filter_by_category(entries: &[TimeEntry], category: Option<&str>) -> Vec<TimeEntry> {
    entries
        .iter()
        .filter(|e| category.is_none_or(|c| e.category == c))
        .cloned()
        .collect()
}

/// Apply range and category filters, most recent first.
pub fn filter_entries(entries: &[TimeEntry], filter: &EntryFilter) -> Vec<TimeEntry> {
    let in_range = filter_by_range(entries, filter.from, filter.to);
    let mut out = filter_by_category(&in_range, filter.category.as_deref());
    out.sort_by(|a, b| b.start.cmp(&a.start));
    out
}

/// Group by category and sum, largest total first. Equal totals keep the
/// order in which their categories first appear in `entries`.
pub fn category_totals(entries: &[TimeEntry]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for e in entries {
        match totals.iter_mut().find(|t| t.category == e.category) {
            Some(t) => t.total_ms += e.duration_ms,
            None => totals.push(CategoryTotal {
                category: e.category.clone(),
                total_ms: e.duration_ms,
            }),
        }
    }

    totals.sort_by(|a, b| b.total_ms.cmp(&a.total_ms));
    totals
}

pub fn summarize(entries: &[TimeEntry], filter: &EntryFilter, now: DateTime<Utc>) -> Summary {
    let filtered = filter_entries(entries, filter);
    let categories = category_totals(&filtered);
    let grand_total_ms = categories.iter().map(|c| c.total_ms).sum();

    Summary {
        today_total_ms: today_total(entries, now),
        entries: filtered,
        categories,
        grand_total_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::formatting::ms_to_hm;
    use crate::utils::time::parse_timestamp;

    fn entry(start: &str, end: &str, category: &str) -> TimeEntry {
        let s = parse_timestamp(start).unwrap();
        let e = parse_timestamp(end).unwrap();
        TimeEntry::new(s, (e - s).num_milliseconds(), category, "")
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample() -> Vec<TimeEntry> {
        vec![
            entry("2026-01-05T08:00", "2026-01-05T09:30", "Unterricht"),
            entry("2026-01-05T13:00", "2026-01-05T13:45", "Korrekturen"),
            entry("2026-01-06T00:00", "2026-01-06T01:00", "Korrekturen"),
            entry("2026-01-04T23:59", "2026-01-05T00:30", "Sonstiges"),
            entry("2026-01-07T10:00", "2026-01-07T10:20", "Unterricht"),
        ]
    }

    #[test]
    fn example_single_entry_day() {
        let entries = vec![entry("2026-01-05T08:00", "2026-01-05T09:30", "Unterricht")];
        let now = parse_timestamp("2026-01-05T18:00").unwrap();
        let s = summarize(&entries, &EntryFilter::default(), now);

        assert_eq!(ms_to_hm(s.today_total_ms), "01:30");
        assert_eq!(s.categories.len(), 1);
        assert_eq!(s.categories[0].category, "Unterricht");
        assert_eq!(ms_to_hm(s.categories[0].total_ms), "01:30");
        assert_eq!(s.grand_total_ms, 90 * 60_000);
    }

    #[test]
    fn today_uses_local_start_day() {
        let entries = sample();
        // the 23:59 entry belongs to the 4th even though it ends on the 5th
        assert_eq!(day_total(&entries, d("2026-01-05")), (90 + 45) * 60_000);
        assert_eq!(day_total(&entries, d("2026-01-04")), 31 * 60_000);
        assert_eq!(day_total(&entries, d("2026-01-08")), 0);
    }

    #[test]
    fn to_date_includes_its_whole_day() {
        let entries = sample();
        let f = filter_by_range(&entries, Some(d("2026-01-05")), Some(d("2026-01-05")));
        assert_eq!(f.len(), 2);

        // midnight of the following day is excluded, midnight of `from` included
        let f = filter_by_range(&entries, Some(d("2026-01-06")), Some(d("2026-01-06")));
        assert_eq!(f.len(), 1);
        assert_eq!(f[0].category, "Korrekturen");

        assert_eq!(filter_by_range(&entries, None, None).len(), 5);
        assert_eq!(filter_by_range(&entries, Some(d("2026-01-06")), None).len(), 2);
        assert_eq!(filter_by_range(&entries, None, Some(d("2026-01-04"))).len(), 1);
    }

    #[test]
    fn filters_commute() {
        let entries = sample();
        let (from, to) = (Some(d("2026-01-05")), Some(d("2026-01-06")));

        let a = filter_by_category(&filter_by_range(&entries, from, to), Some("Korrekturen"));
        let b = filter_by_range(&filter_by_category(&entries, Some("Korrekturen")), from, to);
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn filtered_list_is_most_recent_first() {
        let f = filter_entries(&sample(), &EntryFilter::default());
        assert!(f.windows(2).all(|w| w[0].start >= w[1].start));
        assert_eq!(f[0].category, "Unterricht");
        assert_eq!(f[4].category, "Sonstiges");
    }

    #[test]
    fn category_totals_sum_to_grand_total() {
        let entries = sample();
        let filter = EntryFilter {
            from: Some(d("2026-01-05")),
            to: None,
            category: None,
        };
        let now = parse_timestamp("2026-01-05T18:00").unwrap();
        let s = summarize(&entries, &filter, now);

        let listed: i64 = s.entries.iter().map(|e| e.duration_ms).sum();
        assert_eq!(s.grand_total_ms, listed);

        let names: Vec<&str> = s.categories.iter().map(|c| c.category.as_str()).collect();
        // Korrekturen 105 min, Unterricht 110 min
        assert_eq!(names, vec!["Unterricht", "Korrekturen"]);
    }

    #[test]
    fn equal_totals_keep_first_appearance() {
        let entries = vec![
            entry("2026-01-05T10:00", "2026-01-05T10:30", "B"),
            entry("2026-01-05T08:00", "2026-01-05T08:30", "A"),
        ];
        let names: Vec<String> = category_totals(&entries)
            .into_iter()
            .map(|c| c.category)
            .collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn category_filter_is_exact() {
        let entries = sample();
        assert!(filter_by_category(&entries, Some("unterricht")).is_empty());
        assert_eq!(filter_by_category(&entries, None).len(), 5);
    }
}
