use chrono::{DateTime, NaiveDate, Utc};
use crewdesk_core::{DomainError, DomainResult, LeaveRequestId, PrincipalId};
use serde::{Deserialize, Serialize};

/// Category of leave being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveType {
    #[serde(rename = "Sick Leave")]
    Sick,
    #[serde(rename = "Casual Leave")]
    Casual,
    #[serde(rename = "Paid Leave")]
    Paid,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sick => "Sick Leave",
            Self::Casual => "Casual Leave",
            Self::Paid => "Paid Leave",
        }
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        match raw {
            "Sick Leave" => Ok(Self::Sick),
            "Casual Leave" => Ok(Self::Casual),
            "Paid Leave" => Ok(Self::Paid),
            other => Err(DomainError::validation(format!(
                "unknown leave type: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a request. `Approved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        };
        f.write_str(s)
    }
}

/// A leave request with an inclusive date span.
///
/// `admin_id` is copied from the employee at application time so decision
/// queries never join through the employee collection. `rejection_reason`
/// is only ever set while the status is `Rejected`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: LeaveRequestId,
    pub admin_id: PrincipalId,
    pub employee_id: PrincipalId,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub rejection_reason: Option<String>,
    pub requested_at: DateTime<Utc>,
}
