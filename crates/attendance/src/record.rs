use chrono::NaiveDate;
use crewdesk_core::{AttendanceRecordId, DomainError, DomainResult, PrincipalId};
use serde::{Deserialize, Serialize};

/// Outcome recorded for an employee on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    #[serde(rename = "Half-Day")]
    HalfDay,
    Leave,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::HalfDay => "Half-Day",
            Self::Leave => "Leave",
        }
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        match raw {
            "Present" => Ok(Self::Present),
            "Absent" => Ok(Self::Absent),
            "Half-Day" => Ok(Self::HalfDay),
            "Leave" => Ok(Self::Leave),
            other => Err(DomainError::validation(format!(
                "unknown attendance status: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One employee-day attendance record.
///
/// `admin_id` is denormalized from the employee at write time so that
/// per-admin queries never have to join through the employee collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: AttendanceRecordId,
    pub admin_id: PrincipalId,
    pub employee_id: PrincipalId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub remarks: String,
}
