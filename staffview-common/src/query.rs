//! Derived employee views
//!
//! Pure functions over an employee slice: text search, department and
//! rating-bucket filters, and the stable sort orders used by the bookmark
//! views. Nothing here mutates its input or holds state between calls, so
//! the view layer can recompute on every state change.

use std::collections::BTreeSet;

use crate::employee::Employee;
use crate::store::AppState;

/// Query parameters applied to the employee list.
///
/// Empty strings mean "no constraint"; all three constraints are ANDed.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    /// Case-insensitive substring matched against first name, last name,
    /// email, department, and job title
    pub search_term: String,
    /// Exact, case-sensitive department name
    pub department: String,
    /// Rating bucket: matches when `floor(rating)` equals the parsed value.
    /// A non-empty value that does not parse as a number matches nothing.
    pub rating: String,
}

impl EmployeeFilter {
    /// Build the filter from the query parameters held in store state.
    pub fn from_state(state: &AppState) -> Self {
        Self {
            search_term: state.search_term.clone(),
            department: state.filter_department.clone(),
            rating: state.filter_rating.clone(),
        }
    }
}

/// Sort orders for bookmark-style listings.
///
/// All sorts are stable: employees that compare equal keep their original
/// list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Last name, then first name, lexicographic
    Name,
    /// Highest rating first
    Rating,
    /// Department name, lexicographic
    Department,
    /// Highest id first, as a proxy for most recently added
    RecentlyAdded,
}

impl SortKey {
    pub fn parse(value: &str) -> Option<SortKey> {
        match value {
            "name" => Some(SortKey::Name),
            "rating" => Some(SortKey::Rating),
            "department" => Some(SortKey::Department),
            "recent" => Some(SortKey::RecentlyAdded),
            _ => None,
        }
    }
}

/// Compute the filtered employee list. Always returns a fresh Vec.
pub fn filter_employees(employees: &[Employee], filter: &EmployeeFilter) -> Vec<Employee> {
    let term = filter.search_term.to_lowercase();

    employees
        .iter()
        .filter(|employee| {
            matches_search(employee, &term)
                && matches_department(employee, &filter.department)
                && matches_rating(employee, &filter.rating)
        })
        .cloned()
        .collect()
}

/// Sort in place with a stable comparator for the given key.
pub fn sort_employees(employees: &mut [Employee], key: SortKey) {
    match key {
        SortKey::Name => employees.sort_by(|a, b| {
            (a.last_name.as_str(), a.first_name.as_str())
                .cmp(&(b.last_name.as_str(), b.first_name.as_str()))
        }),
        SortKey::Rating => employees.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        SortKey::Department => {
            employees.sort_by(|a, b| a.department.as_str().cmp(b.department.as_str()))
        }
        SortKey::RecentlyAdded => employees.sort_by(|a, b| b.id.cmp(&a.id)),
    }
}

/// Sorted unique department names present in the list, for filter dropdowns.
pub fn department_options(employees: &[Employee]) -> Vec<String> {
    employees
        .iter()
        .map(|e| e.department.as_str().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn matches_search(employee: &Employee, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    employee.first_name.to_lowercase().contains(term)
        || employee.last_name.to_lowercase().contains(term)
        || employee.email.to_lowercase().contains(term)
        || employee.department.as_str().to_lowercase().contains(term)
        || employee.job_title.to_lowercase().contains(term)
}

fn matches_department(employee: &Employee, department: &str) -> bool {
    department.is_empty() || employee.department.as_str() == department
}

fn matches_rating(employee: &Employee, rating: &str) -> bool {
    if rating.is_empty() {
        return true;
    }
    match rating.parse::<f64>() {
        Ok(bucket) => employee.rating.floor() == bucket,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::{Address, RawPerson};
    use crate::enrich::enrich_at;
    use chrono::NaiveDate;

    fn employee(id: i64) -> Employee {
        let raw = RawPerson {
            id,
            first_name: "Avery".to_string(),
            last_name: "Stone".to_string(),
            email: format!("avery.stone{}@example.com", id),
            phone: "+1 555-0100".to_string(),
            age: 30,
            address: Address::default(),
        };
        enrich_at(&raw, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()).unwrap()
    }

    #[test]
    fn empty_filter_returns_everything() {
        let employees: Vec<_> = (1..=6).map(employee).collect();
        let filtered = filter_employees(&employees, &EmployeeFilter::default());
        assert_eq!(filtered.len(), employees.len());
    }

    #[test]
    fn department_filter_is_exact() {
        let employees: Vec<_> = (1..=20).map(employee).collect();
        let filter = EmployeeFilter {
            department: "Engineering".to_string(),
            ..EmployeeFilter::default()
        };
        let filtered = filter_employees(&employees, &filter);
        assert!(!filtered.is_empty());
        assert!(filtered
            .iter()
            .all(|e| e.department.as_str() == "Engineering"));
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let employees: Vec<_> = (1..=20).map(employee).collect();
        let filter = EmployeeFilter {
            search_term: "ENGINEER".to_string(),
            ..EmployeeFilter::default()
        };
        // Matches both the Engineering department and *Engineer job titles.
        let filtered = filter_employees(&employees, &filter);
        assert!(!filtered.is_empty());
        for e in &filtered {
            let haystack = format!(
                "{} {} {} {} {}",
                e.first_name, e.last_name, e.email, e.department, e.job_title
            )
            .to_lowercase();
            assert!(haystack.contains("engineer"));
        }
    }

    #[test]
    fn unparsable_rating_filter_matches_nothing() {
        let employees: Vec<_> = (1..=5).map(employee).collect();
        let filter = EmployeeFilter {
            rating: "high".to_string(),
            ..EmployeeFilter::default()
        };
        assert!(filter_employees(&employees, &filter).is_empty());
    }

    #[test]
    fn rating_filter_matches_floor_bucket() {
        let employees: Vec<_> = (1..=30).map(employee).collect();
        let filter = EmployeeFilter {
            rating: "4".to_string(),
            ..EmployeeFilter::default()
        };
        let filtered = filter_employees(&employees, &filter);
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|e| e.rating.floor() == 4.0));
    }

    #[test]
    fn filter_does_not_mutate_input() {
        let employees: Vec<_> = (1..=4).map(employee).collect();
        let before = employees.clone();
        let _ = filter_employees(
            &employees,
            &EmployeeFilter {
                search_term: "x".to_string(),
                ..EmployeeFilter::default()
            },
        );
        assert_eq!(employees, before);
    }

    #[test]
    fn rating_sort_is_descending_and_stable() {
        let mut employees: Vec<_> = (1..=12).map(employee).collect();
        let original_ids: Vec<_> = employees.iter().map(|e| e.id).collect();
        sort_employees(&mut employees, SortKey::Rating);

        for pair in employees.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
        // Equal ratings keep original relative order.
        for pair in employees.windows(2) {
            if pair[0].rating == pair[1].rating {
                let a = original_ids.iter().position(|&id| id == pair[0].id);
                let b = original_ids.iter().position(|&id| id == pair[1].id);
                assert!(a < b);
            }
        }
    }

    #[test]
    fn recently_added_sorts_by_id_descending() {
        let mut employees: Vec<_> = [3, 1, 2].into_iter().map(employee).collect();
        sort_employees(&mut employees, SortKey::RecentlyAdded);
        let ids: Vec<_> = employees.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn department_options_are_sorted_and_unique() {
        let employees: Vec<_> = (1..=20).map(employee).collect();
        let options = department_options(&employees);
        let mut sorted = options.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(options, sorted);
    }

    #[test]
    fn unknown_sort_key_does_not_parse() {
        assert_eq!(SortKey::parse("rating"), Some(SortKey::Rating));
        assert_eq!(SortKey::parse("shoe-size"), None);
    }
}
