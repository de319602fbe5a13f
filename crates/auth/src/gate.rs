//! Role-scoped access control.
//!
//! The gate is pure policy: no IO, no storage, no clock. The resolver fixes
//! the principal's role for the request; the gate only compares it against
//! an allow set.

use crewdesk_core::{DomainError, DomainResult};
use crewdesk_identity::AdminRole;

/// Role of a resolved principal for the remainder of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrincipalRole {
    Admin(AdminRole),
    Employee,
}

impl core::fmt::Display for PrincipalRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PrincipalRole::Admin(role) => write!(f, "admin:{role}"),
            PrincipalRole::Employee => f.write_str("employee"),
        }
    }
}

/// An allow set over principal roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGate {
    admin_roles: &'static [AdminRole],
    allow_employee: bool,
}

impl RoleGate {
    /// SuperAdmin only.
    pub const SUPER_ADMIN_ONLY: RoleGate = RoleGate {
        admin_roles: &[AdminRole::SuperAdmin],
        allow_employee: false,
    };

    /// HR and SuperAdmin.
    pub const HR: RoleGate = RoleGate {
        admin_roles: &[AdminRole::Hr, AdminRole::SuperAdmin],
        allow_employee: false,
    };

    /// Any admin tier.
    pub const ANY_ADMIN: RoleGate = RoleGate {
        admin_roles: &[AdminRole::Admin, AdminRole::Hr, AdminRole::SuperAdmin],
        allow_employee: false,
    };

    /// Employee principals only (no admin tier passes).
    pub const EMPLOYEE_ONLY: RoleGate = RoleGate {
        admin_roles: &[],
        allow_employee: true,
    };

    pub const fn admins(roles: &'static [AdminRole]) -> Self {
        Self {
            admin_roles: roles,
            allow_employee: false,
        }
    }

    pub fn check(&self, role: PrincipalRole) -> DomainResult<()> {
        let allowed = match role {
            PrincipalRole::Admin(tier) => self.admin_roles.contains(&tier),
            PrincipalRole::Employee => self.allow_employee,
        };

        if allowed {
            Ok(())
        } else {
            Err(DomainError::forbidden(format!(
                "role '{role}' is not allowed to access this resource"
            )))
        }
    }
}
