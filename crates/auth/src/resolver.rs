//! Identity resolution: bearer token → exactly one identity + role.
//!
//! The access token is verified once, then the decoded id probes the admin
//! collection and the employee collection **in that fixed order**. The first
//! match wins and fixes the role for the remainder of the request. The probe
//! order is safe because all principal ids come from the single UUIDv7 space
//! in `crewdesk-core`: the two classes cannot collide by construction.
//!
//! Every token failure, and a missing identity, surfaces as
//! `Unauthenticated` without detail.

use std::sync::Arc;

use crewdesk_core::{DomainError, DomainResult, PrincipalId};
use crewdesk_identity::{Admin, AdminStore, Employee, EmployeeStore};

use crate::gate::PrincipalRole;
use crate::token::TokenIssuer;

/// The resolved principal, one class or the other, never both.
#[derive(Debug, Clone)]
pub enum ResolvedIdentity {
    Admin(Admin),
    Employee(Employee),
}

/// Per-request authentication context attached after resolution.
///
/// Read-only; resolution performs no store writes.
#[derive(Debug, Clone)]
pub struct AuthContext {
    identity: ResolvedIdentity,
}

impl AuthContext {
    pub fn principal_id(&self) -> PrincipalId {
        match &self.identity {
            ResolvedIdentity::Admin(a) => a.id,
            ResolvedIdentity::Employee(e) => e.id,
        }
    }

    pub fn role(&self) -> PrincipalRole {
        match &self.identity {
            ResolvedIdentity::Admin(a) => PrincipalRole::Admin(a.role),
            ResolvedIdentity::Employee(_) => PrincipalRole::Employee,
        }
    }

    pub fn as_admin(&self) -> Option<&Admin> {
        match &self.identity {
            ResolvedIdentity::Admin(a) => Some(a),
            ResolvedIdentity::Employee(_) => None,
        }
    }

    pub fn as_employee(&self) -> Option<&Employee> {
        match &self.identity {
            ResolvedIdentity::Admin(_) => None,
            ResolvedIdentity::Employee(e) => Some(e),
        }
    }

    pub fn identity(&self) -> &ResolvedIdentity {
        &self.identity
    }
}

/// Extract the token from an `Authorization` header value.
pub fn extract_bearer(header: &str) -> DomainResult<&str> {
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(DomainError::Unauthenticated)?
        .trim();

    if token.is_empty() {
        return Err(DomainError::Unauthenticated);
    }

    Ok(token)
}

/// Session middleware core: maps an inbound access token to an [`AuthContext`].
pub struct IdentityResolver<A, E> {
    issuer: Arc<TokenIssuer>,
    admins: A,
    employees: E,
}

impl<A, E> IdentityResolver<A, E>
where
    A: AdminStore,
    E: EmployeeStore,
{
    pub fn new(issuer: Arc<TokenIssuer>, admins: A, employees: E) -> Self {
        Self {
            issuer,
            admins,
            employees,
        }
    }

    pub async fn resolve(&self, token: &str) -> DomainResult<AuthContext> {
        let claims = self.issuer.verify_access(token).map_err(|e| {
            tracing::debug!(cause = %e, "access token rejected");
            DomainError::Unauthenticated
        })?;

        // Fixed probe order: admins first.
        if let Some(admin) = self.admins.get(claims.sub).await? {
            return Ok(AuthContext {
                identity: ResolvedIdentity::Admin(admin),
            });
        }

        if let Some(employee) = self.employees.get(claims.sub).await? {
            // Soft-deleted employees are not resolvable.
            if employee.is_active() {
                return Ok(AuthContext {
                    identity: ResolvedIdentity::Employee(employee),
                });
            }
        }

        Err(DomainError::Unauthenticated)
    }
}
