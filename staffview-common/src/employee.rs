//! Employee domain model
//!
//! Defines the raw feed record shape, the fixed department/title tables, and
//! the enriched `Employee` / `EmployeeProfile` entities. Everything derived
//! from an employee id lives in the `enrich` module; this module only holds
//! the shapes and lookup tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Postal address carried through from the record feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Minimal person record as supplied by the external feed, pre-enrichment.
///
/// Only `id` is load-bearing: every derived field is seeded from it. The
/// remaining fields pass through to the `Employee` unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPerson {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub address: Address,
}

/// Organizational department
///
/// Closed set of exactly ten values. Order in `ALL` matters: department
/// assignment indexes into it by employee id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Operations,
    Design,
    Product,
    Legal,
    Support,
}

impl Department {
    /// All departments in assignment order
    pub const ALL: [Department; 10] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::Hr,
        Department::Finance,
        Department::Operations,
        Department::Design,
        Department::Product,
        Department::Legal,
        Department::Support,
    ];

    /// Display name (also the serialized form)
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Hr => "HR",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
            Department::Design => "Design",
            Department::Product => "Product",
            Department::Legal => "Legal",
            Department::Support => "Support",
        }
    }

    /// Look up a department by its display name
    pub fn from_name(name: &str) -> Option<Department> {
        Department::ALL.iter().copied().find(|d| d.as_str() == name)
    }

    /// Fixed job-title candidate list for this department.
    ///
    /// Title assignment indexes into this list by employee id, so the order
    /// is part of the derivation contract.
    pub fn titles(&self) -> &'static [&'static str] {
        match self {
            Department::Engineering => &[
                "Software Engineer",
                "Senior Developer",
                "Tech Lead",
                "Frontend Developer",
                "Backend Developer",
            ],
            Department::Marketing => &[
                "Marketing Manager",
                "Content Strategist",
                "SEO Specialist",
                "Brand Manager",
                "Digital Marketer",
            ],
            Department::Sales => &[
                "Sales Representative",
                "Account Manager",
                "Sales Director",
                "Business Development Manager",
            ],
            Department::Hr => &[
                "HR Manager",
                "Recruiter",
                "HR Business Partner",
                "Talent Acquisition Specialist",
            ],
            Department::Finance => &[
                "Financial Analyst",
                "Accountant",
                "Finance Manager",
                "Controller",
                "Treasury Analyst",
            ],
            Department::Operations => &[
                "Operations Manager",
                "Process Analyst",
                "Supply Chain Manager",
                "Logistics Coordinator",
            ],
            Department::Design => &[
                "UI/UX Designer",
                "Graphic Designer",
                "Product Designer",
                "Creative Director",
            ],
            Department::Product => &[
                "Product Manager",
                "Product Owner",
                "Senior Product Manager",
                "Product Analyst",
            ],
            Department::Legal => &[
                "Legal Counsel",
                "Compliance Officer",
                "Contract Manager",
                "Legal Assistant",
            ],
            Department::Support => &[
                "Support Specialist",
                "Customer Success Manager",
                "Support Team Lead",
            ],
        }
    }

    /// Representative skill set shown on the profile view.
    ///
    /// Departments without a dedicated list share a generic one.
    pub fn skills(&self) -> &'static [&'static str] {
        match self {
            Department::Engineering => &[
                "JavaScript",
                "React",
                "Node.js",
                "Python",
                "AWS",
                "Docker",
            ],
            Department::Marketing => &[
                "Content Strategy",
                "SEO",
                "Analytics",
                "Social Media",
                "Campaign Management",
            ],
            Department::Sales => &[
                "CRM",
                "Lead Generation",
                "Negotiation",
                "Customer Relations",
                "Market Analysis",
            ],
            Department::Hr => &[
                "Recruitment",
                "Employee Relations",
                "Performance Management",
                "Training",
                "Compliance",
            ],
            Department::Finance => &[
                "Financial Analysis",
                "Budgeting",
                "Excel",
                "SAP",
                "Risk Management",
            ],
            Department::Design => &[
                "Figma",
                "Adobe Creative Suite",
                "UI/UX",
                "Prototyping",
                "User Research",
            ],
            Department::Product => &[
                "Product Strategy",
                "Roadmap Planning",
                "User Stories",
                "Analytics",
                "A/B Testing",
            ],
            _ => &[
                "Communication",
                "Problem Solving",
                "Team Work",
                "Leadership",
            ],
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    Remote,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Remote => "Remote",
            EmployeeStatus::OnLeave => "On Leave",
        }
    }
}

/// Fully-enriched employee entity
///
/// Passthrough fields come verbatim from the feed record; everything else is
/// a fixed function of `id` (see the `enrich` module). Once admitted, the
/// store owns these exclusively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub address: Address,
    pub department: Department,
    pub job_title: String,
    /// Performance rating, always within [2.0, 5.0]
    pub rating: f64,
    pub years_experience: u32,
    /// Annual salary in whole dollars, always >= 20_000
    pub salary: i64,
    pub status: EmployeeStatus,
    pub hire_date: NaiveDate,
    pub last_review_date: NaiveDate,
    /// Always strictly after `last_review_date`
    pub next_review_date: NaiveDate,
    pub current_projects: u32,
    pub completed_projects: u32,
}

impl Employee {
    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Assignment status of a profile project entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Planning,
    #[serde(rename = "On Hold")]
    OnHold,
}

/// One month of performance history on the profile view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPerformance {
    pub month: String,
    /// Within [2.0, 5.0]
    pub rating: f64,
    pub goals: u32,
    /// Never exceeds `goals`
    pub completed: u32,
}

/// Project assignment shown on the profile view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAssignment {
    pub code: String,
    pub name: String,
    pub status: ProjectStatus,
    /// Percent complete, 0-100
    pub progress: u8,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Review entry shown on the profile feedback tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub reviewer: String,
    pub date: NaiveDate,
    /// Within [3.0, 5.0]
    pub rating: f64,
    pub comments: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Detail-view variant of an employee, carrying the derived history,
/// project, and feedback collections in addition to the base entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    #[serde(flatten)]
    pub employee: Employee,
    pub employee_code: String,
    pub manager: String,
    pub team: String,
    pub location: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub performance_history: Vec<MonthlyPerformance>,
    pub projects: Vec<ProjectAssignment>,
    pub feedback: Vec<FeedbackEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_table_has_ten_distinct_entries() {
        assert_eq!(Department::ALL.len(), 10);
        for dept in Department::ALL {
            assert_eq!(Department::from_name(dept.as_str()), Some(dept));
        }
    }

    #[test]
    fn every_department_has_titles_and_skills() {
        for dept in Department::ALL {
            assert!(!dept.titles().is_empty());
            assert!(!dept.skills().is_empty());
        }
    }

    #[test]
    fn status_display_names() {
        assert_eq!(EmployeeStatus::OnLeave.as_str(), "On Leave");
        assert_eq!(EmployeeStatus::Active.as_str(), "Active");
    }
}
