//! Persistence contract for identities (the credential store).
//!
//! The backing document store is a collaborator, not part of this system;
//! these traits are the seam it plugs into. `crewdesk-infra` ships an
//! in-memory implementation for tests/dev.
//!
//! ## Contract
//!
//! - `insert` enforces the uniqueness invariants (`email` for admins;
//!   `email` and `employee_code` for employees) and fails with
//!   [`StoreError::Duplicate`] on violation.
//! - `update` replaces the stored record keyed by id; updating an unknown id
//!   is a no-op (callers load-then-update, so a miss means a concurrent
//!   hard-delete, which the lifecycle forbids).
//! - `set_refresh_token` is the single write the session layer performs:
//!   one active refresh token per identity, replace-on-rotate, `None` on
//!   logout.
//! - All calls are non-blocking; every suspension point in the system sits
//!   at one of these boundaries.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crewdesk_core::{PrincipalId, StoreError};

use crate::admin::Admin;
use crate::employee::Employee;

#[async_trait]
pub trait AdminStore: Send + Sync {
    async fn insert(&self, admin: Admin) -> Result<(), StoreError>;

    async fn get(&self, id: PrincipalId) -> Result<Option<Admin>, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, StoreError>;

    async fn update(&self, admin: Admin) -> Result<(), StoreError>;

    async fn set_refresh_token(
        &self,
        id: PrincipalId,
        token: Option<String>,
    ) -> Result<(), StoreError>;
}

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn insert(&self, employee: Employee) -> Result<(), StoreError>;

    async fn get(&self, id: PrincipalId) -> Result<Option<Employee>, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, StoreError>;

    async fn find_by_code(&self, code: &str) -> Result<Option<Employee>, StoreError>;

    /// All employees owned by `admin_id`, active and inactive.
    async fn list_for_admin(&self, admin_id: PrincipalId) -> Result<Vec<Employee>, StoreError>;

    /// Id set of the admin's employees, used as the single pre-fetch that
    /// bulk attendance marking filters against.
    async fn ids_for_admin(
        &self,
        admin_id: PrincipalId,
    ) -> Result<HashSet<PrincipalId>, StoreError>;

    async fn update(&self, employee: Employee) -> Result<(), StoreError>;

    async fn set_refresh_token(
        &self,
        id: PrincipalId,
        token: Option<String>,
    ) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> AdminStore for Arc<S>
where
    S: AdminStore + ?Sized,
{
    async fn insert(&self, admin: Admin) -> Result<(), StoreError> {
        (**self).insert(admin).await
    }

    async fn get(&self, id: PrincipalId) -> Result<Option<Admin>, StoreError> {
        (**self).get(id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, StoreError> {
        (**self).find_by_email(email).await
    }

    async fn update(&self, admin: Admin) -> Result<(), StoreError> {
        (**self).update(admin).await
    }

    async fn set_refresh_token(
        &self,
        id: PrincipalId,
        token: Option<String>,
    ) -> Result<(), StoreError> {
        (**self).set_refresh_token(id, token).await
    }
}

#[async_trait]
impl<S> EmployeeStore for Arc<S>
where
    S: EmployeeStore + ?Sized,
{
    async fn insert(&self, employee: Employee) -> Result<(), StoreError> {
        (**self).insert(employee).await
    }

    async fn get(&self, id: PrincipalId) -> Result<Option<Employee>, StoreError> {
        (**self).get(id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, StoreError> {
        (**self).find_by_email(email).await
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Employee>, StoreError> {
        (**self).find_by_code(code).await
    }

    async fn list_for_admin(&self, admin_id: PrincipalId) -> Result<Vec<Employee>, StoreError> {
        (**self).list_for_admin(admin_id).await
    }

    async fn ids_for_admin(
        &self,
        admin_id: PrincipalId,
    ) -> Result<HashSet<PrincipalId>, StoreError> {
        (**self).ids_for_admin(admin_id).await
    }

    async fn update(&self, employee: Employee) -> Result<(), StoreError> {
        (**self).update(employee).await
    }

    async fn set_refresh_token(
        &self,
        id: PrincipalId,
        token: Option<String>,
    ) -> Result<(), StoreError> {
        (**self).set_refresh_token(id, token).await
    }
}
