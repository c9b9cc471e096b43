//! Aggregation over the employee list
//!
//! Pure functions computing per-department statistics, the rating
//! distribution, the overview tiles, and the trend series. Grouping uses
//! BTreeMap so output order is deterministic (lexicographic by department).
//!
//! There is no real historical data in a session-lifetime store, so
//! `trend_series` synthesizes a plausible placeholder series from the bucket
//! index alone. It is presentation-only and makes no claim of real history.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::employee::Employee;

/// Rating at or above which an employee counts as a top performer
pub const TOP_PERFORMER_THRESHOLD: f64 = 4.5;

/// Per-department aggregate row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStats {
    pub department: String,
    /// Mean rating, rounded to 2 decimals
    pub avg_rating: f64,
    pub count: usize,
    pub bookmarked_count: usize,
    pub top_performer_count: usize,
    /// bookmarked_count / count, as a percentage rounded to 1 decimal
    pub bookmark_rate: f64,
}

/// Overview tile numbers for the analytics header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_employees: usize,
    /// Mean rating across all employees, rounded to 1 decimal; 0.0 when empty
    pub average_rating: f64,
    pub bookmarked_count: usize,
    pub top_performer_count: usize,
}

/// One bucket of the synthesized trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub period: String,
    pub avg_performance: f64,
    pub bookmarks: u32,
    pub new_hires: u32,
}

/// Group employees by department and aggregate each group.
///
/// Rows exist only for departments with at least one member, so the per-row
/// divisions are always well-defined, and the row counts sum to the input
/// length.
pub fn department_stats(
    employees: &[Employee],
    bookmarks: &HashSet<i64>,
) -> Vec<DepartmentStats> {
    #[derive(Default)]
    struct Acc {
        count: usize,
        rating_total: f64,
        bookmarked: usize,
        top_performers: usize,
    }

    let mut groups: BTreeMap<&str, Acc> = BTreeMap::new();
    for employee in employees {
        let acc = groups.entry(employee.department.as_str()).or_default();
        acc.count += 1;
        acc.rating_total += employee.rating;
        if bookmarks.contains(&employee.id) {
            acc.bookmarked += 1;
        }
        if employee.rating >= TOP_PERFORMER_THRESHOLD {
            acc.top_performers += 1;
        }
    }

    groups
        .into_iter()
        .map(|(department, acc)| DepartmentStats {
            department: department.to_string(),
            avg_rating: round2(acc.rating_total / acc.count as f64),
            count: acc.count,
            bookmarked_count: acc.bookmarked,
            top_performer_count: acc.top_performers,
            bookmark_rate: round1(acc.bookmarked as f64 / acc.count as f64 * 100.0),
        })
        .collect()
}

/// Count employees per whole-star rating bucket.
///
/// Buckets are `floor(rating)` clamped into 1..=5; all five buckets are
/// always present, zero-filled.
pub fn rating_distribution(employees: &[Employee]) -> BTreeMap<u8, usize> {
    let mut distribution: BTreeMap<u8, usize> = (1..=5).map(|bucket| (bucket, 0)).collect();
    for employee in employees {
        let bucket = (employee.rating.floor() as i64).clamp(1, 5) as u8;
        *distribution.entry(bucket).or_insert(0) += 1;
    }
    distribution
}

/// Headline numbers across the whole employee list.
pub fn overview(employees: &[Employee], bookmarks: &HashSet<i64>) -> OverviewStats {
    let total = employees.len();
    let average_rating = if total == 0 {
        0.0
    } else {
        round1(employees.iter().map(|e| e.rating).sum::<f64>() / total as f64)
    };

    OverviewStats {
        total_employees: total,
        average_rating,
        bookmarked_count: employees
            .iter()
            .filter(|e| bookmarks.contains(&e.id))
            .count(),
        top_performer_count: employees
            .iter()
            .filter(|e| e.rating >= TOP_PERFORMER_THRESHOLD)
            .count(),
    }
}

/// Synthesized month-bucketed trend series.
///
/// Placeholder data: every value is a fixed function of the bucket index,
/// not a measurement.
pub fn trend_series(months: usize) -> Vec<TrendPoint> {
    const MONTH_LABELS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    (0..months)
        .map(|index| {
            let i = index as f64;
            TrendPoint {
                period: MONTH_LABELS[index % 12].to_string(),
                avg_performance: round2(
                    3.5 + (i * 0.5).sin() * 0.5 + ((index * 13) % 7) as f64 * 0.05,
                ),
                bookmarks: ((index * 3) % 5 + index * 2 + 3) as u32,
                new_hires: ((index * 5) % 3 + 1) as u32,
            }
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::{Address, RawPerson};
    use crate::enrich::enrich_at;
    use chrono::NaiveDate;

    fn enriched(id: i64) -> Employee {
        let raw = RawPerson {
            id,
            first_name: "Robin".to_string(),
            last_name: "Vale".to_string(),
            email: format!("robin.vale{}@example.com", id),
            phone: "+1 555-0101".to_string(),
            age: 29,
            address: Address::default(),
        };
        enrich_at(&raw, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()).unwrap()
    }

    #[test]
    fn department_counts_sum_to_input_length() {
        let employees: Vec<_> = (1..=37).map(enriched).collect();
        let stats = department_stats(&employees, &HashSet::new());
        let total: usize = stats.iter().map(|s| s.count).sum();
        assert_eq!(total, employees.len());
    }

    #[test]
    fn department_rows_are_lexicographically_ordered() {
        let employees: Vec<_> = (1..=20).map(enriched).collect();
        let stats = department_stats(&employees, &HashSet::new());
        for pair in stats.windows(2) {
            assert!(pair[0].department < pair[1].department);
        }
    }

    #[test]
    fn bookmark_rate_uses_group_size() {
        let employees: Vec<_> = (1..=10).map(enriched).collect();
        // Exactly one department member per department with ids 1..=10, so
        // bookmarking id 1 gives its department a 100.0 rate.
        let bookmarks: HashSet<i64> = [1].into_iter().collect();
        let stats = department_stats(&employees, &bookmarks);
        let marketing = stats
            .iter()
            .find(|s| s.department == "Marketing")
            .expect("id 1 lands in Marketing");
        assert_eq!(marketing.bookmarked_count, 1);
        assert_eq!(marketing.bookmark_rate, 100.0);
    }

    #[test]
    fn distribution_always_has_five_buckets() {
        let distribution = rating_distribution(&[]);
        assert_eq!(distribution.len(), 5);
        assert!(distribution.values().all(|&count| count == 0));
    }

    #[test]
    fn distribution_totals_match_input() {
        let employees: Vec<_> = (1..=25).map(enriched).collect();
        let distribution = rating_distribution(&employees);
        let total: usize = distribution.values().sum();
        assert_eq!(total, employees.len());
    }

    #[test]
    fn overview_of_empty_list_is_all_zero() {
        let stats = overview(&[], &HashSet::new());
        assert_eq!(stats.total_employees, 0);
        assert_eq!(stats.average_rating, 0.0);
        assert_eq!(stats.bookmarked_count, 0);
        assert_eq!(stats.top_performer_count, 0);
    }

    #[test]
    fn trend_series_is_deterministic_and_sized() {
        let a = trend_series(6);
        let b = trend_series(6);
        assert_eq!(a, b);
        assert_eq!(a.len(), 6);
        assert_eq!(a[0].period, "Jan");
        for point in &a {
            assert!(point.avg_performance >= 2.0 && point.avg_performance <= 5.0);
        }
    }
}
