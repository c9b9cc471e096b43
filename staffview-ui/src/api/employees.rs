//! Employee listing, detail, creation, and feed refresh

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use staffview_common::employee::{Address, Department, Employee, EmployeeStatus};
use staffview_common::enrich::{profile_for, rating_for};
use staffview_common::query::{
    department_options, filter_employees, sort_employees, EmployeeFilter, SortKey,
};
use staffview_common::store::Action;

use super::ApiError;
use crate::source::refresh_employees;
use crate::AppState;

/// Query parameters for the employee list
#[derive(Debug, Deserialize)]
pub struct EmployeeListQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub rating: String,
    /// One of name, rating, department, recent
    pub sort: Option<String>,
}

/// Employee list response with list metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeListResponse {
    pub total: usize,
    pub matched: usize,
    pub departments: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub employees: Vec<Employee>,
}

/// GET /api/employees?search=&department=&rating=&sort=
///
/// The three filter parameters land in the store (they are session query
/// state, like the dashboard's search box) and the response is derived from
/// the updated snapshot.
pub async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<EmployeeListQuery>,
) -> Result<Json<EmployeeListResponse>, ApiError> {
    let sort = match query.sort.as_deref() {
        None => None,
        Some(value) => Some(
            SortKey::parse(value)
                .ok_or_else(|| ApiError::BadRequest(format!("unknown sort key: {value}")))?,
        ),
    };

    let mut store = state.store.write().unwrap();
    store.dispatch(Action::SetSearchTerm(query.search));
    store.dispatch(Action::SetFilterDepartment(query.department));
    store.dispatch(Action::SetFilterRating(query.rating));

    let snapshot = store.state();
    let filter = EmployeeFilter::from_state(snapshot);
    let mut employees = filter_employees(&snapshot.employees, &filter);
    if let Some(key) = sort {
        sort_employees(&mut employees, key);
    }

    Ok(Json(EmployeeListResponse {
        total: snapshot.employees.len(),
        matched: employees.len(),
        departments: department_options(&snapshot.employees),
        loading: snapshot.loading,
        error: snapshot.error.clone(),
        employees,
    }))
}

/// GET /api/employees/:id
///
/// Detail-view profile derived on demand from the stored entity.
pub async fn employee_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<staffview_common::employee::EmployeeProfile>, ApiError> {
    let store = state.store.read().unwrap();
    let employee = store
        .employees()
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("no employee with id {id}")))?;

    Ok(Json(profile_for(employee, Utc::now().date_naive())))
}

/// Request body for employee creation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub salary: i64,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub years_experience: u32,
    pub start_date: Option<NaiveDate>,
}

/// POST /api/employees
///
/// Validates the submitted fields, allocates the next id, and fills every
/// field the form does not supply with the standard id-seeded derivations.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let department = Department::from_name(&request.department);

    let mut problems = Vec::new();
    if request.first_name.trim().is_empty() {
        problems.push("first name is required".to_string());
    }
    if request.last_name.trim().is_empty() {
        problems.push("last name is required".to_string());
    }
    if request.email.trim().is_empty() {
        problems.push("email is required".to_string());
    } else if !is_valid_email(&request.email) {
        problems.push("email is invalid".to_string());
    }
    if request.phone.trim().is_empty() {
        problems.push("phone is required".to_string());
    }
    if !(18..=100).contains(&request.age) {
        problems.push("age must be between 18 and 100".to_string());
    }
    match department {
        None => problems.push(format!("unknown department: {:?}", request.department)),
        Some(dept) => {
            if !dept.titles().contains(&request.job_title.as_str()) {
                problems.push(format!(
                    "job title {:?} is not offered in {}",
                    request.job_title, dept
                ));
            }
        }
    }
    if request.salary < 20_000 {
        problems.push("salary must be at least 20000".to_string());
    }
    if request.address.city.trim().is_empty() {
        problems.push("city is required".to_string());
    }
    if request.address.state.trim().is_empty() {
        problems.push("state is required".to_string());
    }

    let mut store = state.store.write().unwrap();
    if store
        .employees()
        .iter()
        .any(|e| e.email.eq_ignore_ascii_case(request.email.trim()))
    {
        problems.push("email already exists".to_string());
    }

    if !problems.is_empty() {
        return Err(ApiError::BadRequest(problems.join("; ")));
    }
    let department = department.expect("validated above");

    let id = store.employees().iter().map(|e| e.id).max().unwrap_or(0) + 1;
    let hire_date = request.start_date.unwrap_or_else(|| Utc::now().date_naive());

    let employee = Employee {
        id,
        first_name: request.first_name.trim().to_string(),
        last_name: request.last_name.trim().to_string(),
        email: request.email.trim().to_string(),
        phone: request.phone.trim().to_string(),
        age: request.age,
        address: request.address,
        department,
        job_title: request.job_title,
        rating: rating_for(id),
        years_experience: request.years_experience,
        salary: request.salary,
        status: EmployeeStatus::Active,
        hire_date,
        last_review_date: hire_date,
        next_review_date: hire_date + Duration::days(90),
        current_projects: ((id * 5) % 4 + 1) as u32,
        completed_projects: 0,
    };

    let mut employees = store.employees().to_vec();
    employees.push(employee.clone());
    store.dispatch(Action::SetEmployees(employees));

    Ok((StatusCode::CREATED, Json(employee)))
}

/// Refresh summary
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub employees: usize,
}

/// POST /api/employees/refresh
///
/// Re-fetches from the record source. On feed failure the store has already
/// fallen back to the local dataset; the 502 here only tells the caller the
/// explicit refresh did not reach the feed.
pub async fn refresh_feed(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, ApiError> {
    refresh_employees(&state).await;

    let store = state.store.read().unwrap();
    let snapshot = store.state();
    match &snapshot.error {
        Some(message) => Err(ApiError::UpstreamFailure(message.clone())),
        None => Ok(Json(RefreshResponse {
            employees: snapshot.employees.len(),
        })),
    }
}

/// Minimal mailbox@domain.tld shape check
fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((mailbox, domain)) => {
            !mailbox.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("jordan.reyes@example.com"));
        assert!(is_valid_email("  padded@example.org  "));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("no-at-sign.example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("spaced user@example.com"));
    }
}
