//! Admin identity record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crewdesk_core::{DomainError, PrincipalId};

/// Authorization tier attached to an admin identity.
///
/// Ordering is meaningful only through the canonical gates in
/// `crewdesk-auth`; the enum itself carries no hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdminRole {
    #[serde(rename = "HR")]
    Hr,
    Admin,
    SuperAdmin,
}

impl AdminRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Hr => "HR",
            AdminRole::Admin => "Admin",
            AdminRole::SuperAdmin => "SuperAdmin",
        }
    }

    /// Parse a role name as supplied at registration.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "HR" => Ok(AdminRole::Hr),
            "Admin" => Ok(AdminRole::Admin),
            "SuperAdmin" => Ok(AdminRole::SuperAdmin),
            other => Err(DomainError::validation(format!(
                "invalid admin role '{other}': must be one of HR, Admin, SuperAdmin"
            ))),
        }
    }
}

impl core::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Admin identity.
///
/// # Invariants
/// - `email` is unique across the admin collection.
/// - `refresh_token` holds at most one active refresh token; reissuing
///   overwrites it (single session per identity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub id: PrincipalId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: AdminRole,
    /// PHC-format argon2 hash; never a plaintext password.
    pub password_hash: String,
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_accepts_canonical_names() {
        assert_eq!(AdminRole::parse("HR").unwrap(), AdminRole::Hr);
        assert_eq!(AdminRole::parse("Admin").unwrap(), AdminRole::Admin);
        assert_eq!(AdminRole::parse("SuperAdmin").unwrap(), AdminRole::SuperAdmin);
    }

    #[test]
    fn role_parse_rejects_unknown_names() {
        let err = AdminRole::parse("Manager").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn role_serializes_with_wire_names() {
        let json = serde_json::to_string(&AdminRole::Hr).unwrap();
        assert_eq!(json, "\"HR\"");
    }
}
