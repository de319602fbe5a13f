//! Employee identity record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crewdesk_core::{DomainError, PrincipalId};

/// Employment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeType {
    #[serde(rename = "Full-Time")]
    FullTime,
    Contract,
    Intern,
}

impl EmployeeType {
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Full-Time" => Ok(EmployeeType::FullTime),
            "Contract" => Ok(EmployeeType::Contract),
            "Intern" => Ok(EmployeeType::Intern),
            other => Err(DomainError::validation(format!(
                "invalid employee type '{other}': must be one of Full-Time, Contract, Intern"
            ))),
        }
    }
}

/// Soft lifecycle flag. Employees are never hard-deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

/// Employee identity.
///
/// # Invariants
/// - `email` and `employee_code` are unique across the employee collection.
/// - `admin_id` references exactly one owning admin and is immutable after
///   creation; attendance and leave scoping derive from it.
/// - `refresh_token` holds at most one active refresh token (single session
///   per identity, replace-on-rotate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: PrincipalId,
    /// Human-assigned code (badge number); unique, used as a login handle.
    pub employee_code: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub designation: String,
    /// Owning admin. Set at registration, never reassigned.
    pub admin_id: PrincipalId,
    pub employee_type: EmployeeType,
    pub joining_date: NaiveDate,
    pub status: EmployeeStatus,
    /// PHC-format argon2 hash; never a plaintext password.
    pub password_hash: String,
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}
