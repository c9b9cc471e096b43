//! Deterministic employee enrichment
//!
//! Expands a raw feed record into a fully-populated `Employee` (and the
//! detail-view `EmployeeProfile`). Every derived field is a fixed function
//! of the record id and the enrichment date truncated to the day, so
//! re-enriching the same record always reproduces the same values. That
//! property is load-bearing: consumers re-derive employees on every fetch
//! and must never observe a person changing department or rating between
//! navigations.

use chrono::{Duration, NaiveDate, Utc};

use crate::employee::{
    Address, Department, Employee, EmployeeProfile, EmployeeStatus, FeedbackEntry,
    MonthlyPerformance, ProjectAssignment, ProjectStatus, RawPerson,
};
use crate::error::{Error, Result};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const PROJECT_TYPES: [&str; 5] = [
    "Web Development",
    "Mobile App",
    "Data Analysis",
    "Marketing Campaign",
    "System Integration",
];

const PROJECT_STATUSES: [ProjectStatus; 4] = [
    ProjectStatus::Completed,
    ProjectStatus::InProgress,
    ProjectStatus::Planning,
    ProjectStatus::OnHold,
];

const FEEDBACK_KINDS: [&str; 4] = [
    "Performance Review",
    "Peer Feedback",
    "360 Review",
    "Manager Check-in",
];

const REVIEWERS: [&str; 4] = ["Sarah Johnson", "Mike Chen", "Lisa Wang", "David Brown"];

const FEEDBACK_STRENGTHS: [&str; 3] = ["Problem Solving", "Communication", "Technical Skills"];
const FEEDBACK_IMPROVEMENTS: [&str; 2] = ["Leadership", "Time Management"];

/// Days between a review and the scheduled follow-up
const REVIEW_INTERVAL_DAYS: i64 = 90;

/// Enrich a raw record using today's date.
pub fn enrich(raw: &RawPerson) -> Result<Employee> {
    enrich_at(raw, Utc::now().date_naive())
}

/// Enrich a raw record into a full employee entity.
///
/// `today` is the enrichment-time date; passing it explicitly keeps the
/// date-bearing fields reproducible in tests. Fails with `InvalidInput`
/// when the record id is not a positive integer; no other raw field is
/// required.
pub fn enrich_at(raw: &RawPerson, today: NaiveDate) -> Result<Employee> {
    let id = validate_id(raw.id)?;

    let department = department_for(id);
    let titles = department.titles();
    let years_experience = ((id * 7) % 25) as u32;
    let last_review_date = today - Duration::days(((id % 6) + 1) * 30);

    Ok(Employee {
        id,
        first_name: raw.first_name.clone(),
        last_name: raw.last_name.clone(),
        email: raw.email.clone(),
        phone: raw.phone.clone(),
        age: raw.age,
        address: raw.address.clone(),
        department,
        job_title: titles[(id as usize) % titles.len()].to_string(),
        rating: rating_for(id),
        years_experience,
        salary: 45_000 + i64::from(years_experience) * 1_500 + (id % 10) * 500,
        status: status_for(id),
        hire_date: today - Duration::days(id * 30 + 365),
        last_review_date,
        next_review_date: last_review_date + Duration::days(REVIEW_INTERVAL_DAYS),
        current_projects: ((id * 5) % 4 + 1) as u32,
        completed_projects: ((id * 3) % 20) as u32,
    })
}

/// Enrich a raw record into the detail-view profile variant.
pub fn enrich_profile(raw: &RawPerson) -> Result<EmployeeProfile> {
    enrich_profile_at(raw, Utc::now().date_naive())
}

/// Detail-view enrichment with an explicit enrichment date.
pub fn enrich_profile_at(raw: &RawPerson, today: NaiveDate) -> Result<EmployeeProfile> {
    let employee = enrich_at(raw, today)?;
    Ok(profile_for(&employee, today))
}

/// Expand an already-enriched employee into the profile variant.
///
/// The sub-generators follow the same id-seeded determinism contract as the
/// base fields.
pub fn profile_for(employee: &Employee, today: NaiveDate) -> EmployeeProfile {
    let id = employee.id;
    let department = employee.department;

    EmployeeProfile {
        employee: employee.clone(),
        employee_code: format!("EMP-{:04}", id),
        manager: REVIEWERS[(id % 4) as usize].to_string(),
        team: format!("{} Team Alpha", department),
        location: if employee.address.city.is_empty() {
            "Remote Office".to_string()
        } else {
            format!("{} Office", employee.address.city)
        },
        bio: format!(
            "Experienced {} professional with a passion for innovation and team \
             collaboration. Consistently delivers high-quality results and mentors \
             junior team members.",
            department.as_str().to_lowercase()
        ),
        skills: department.skills().iter().map(|s| s.to_string()).collect(),
        performance_history: performance_history(id),
        projects: project_assignments(id, today),
        feedback: feedback_entries(id, today),
    }
}

/// Performance rating derived from an id: spread across [2.0, 4.9] in 0.1
/// steps, clamped into the contractual [2.0, 5.0] range.
pub fn rating_for(id: i64) -> f64 {
    let raw = 2.0 + ((id * 7) % 30) as f64 / 10.0;
    round1(raw).clamp(2.0, 5.0)
}

fn department_for(id: i64) -> Department {
    Department::ALL[(id as usize) % Department::ALL.len()]
}

fn status_for(id: i64) -> EmployeeStatus {
    match id % 5 {
        3 => EmployeeStatus::Remote,
        4 => EmployeeStatus::OnLeave,
        _ => EmployeeStatus::Active,
    }
}

/// Twelve monthly history entries; each month's completed count never
/// exceeds its goal count.
fn performance_history(id: i64) -> Vec<MonthlyPerformance> {
    MONTHS
        .iter()
        .enumerate()
        .map(|(month, label)| {
            let m = month as i64;
            let goals = ((id + m * 7) % 5 + 3) as u32;
            MonthlyPerformance {
                month: label.to_string(),
                rating: round1((3.0 + ((id + m) as f64 * 0.5).sin() * 1.5).clamp(2.0, 5.0)),
                goals,
                completed: goals - ((id + m) % 3) as u32,
            }
        })
        .collect()
}

fn project_assignments(id: i64, today: NaiveDate) -> Vec<ProjectAssignment> {
    (0..4)
        .map(|index| {
            let i = index as i64;
            ProjectAssignment {
                code: format!("PRJ-{}-{}", id, index + 1),
                name: format!(
                    "{} {}",
                    PROJECT_TYPES[((id + i) % 5) as usize],
                    index + 1
                ),
                status: PROJECT_STATUSES[((id + i) % 4) as usize],
                progress: ((id * 17 + i * 23) % 101) as u8,
                start_date: today - Duration::days((i + 1) * 30),
                end_date: today + Duration::days((4 - i) * 30),
            }
        })
        .collect()
}

fn feedback_entries(id: i64, today: NaiveDate) -> Vec<FeedbackEntry> {
    (0..3)
        .map(|index| {
            let i = index as i64;
            FeedbackEntry {
                kind: FEEDBACK_KINDS[((id + i) % 4) as usize].to_string(),
                reviewer: REVIEWERS[((id + i) % 4) as usize].to_string(),
                date: today - Duration::days((i + 1) * 60),
                rating: round1((4.0 + ((id + i) as f64).sin() * 0.8).clamp(3.0, 5.0)),
                comments: "Excellent performance and strong collaboration skills. Shows \
                           great initiative and consistently delivers quality work. Areas \
                           for growth include leadership development and strategic thinking."
                    .to_string(),
                strengths: FEEDBACK_STRENGTHS.iter().map(|s| s.to_string()).collect(),
                improvements: FEEDBACK_IMPROVEMENTS.iter().map(|s| s.to_string()).collect(),
            }
        })
        .collect()
}

fn validate_id(id: i64) -> Result<i64> {
    if id < 1 {
        return Err(Error::InvalidInput(format!(
            "employee id must be a positive integer, got {}",
            id
        )));
    }
    Ok(id)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
