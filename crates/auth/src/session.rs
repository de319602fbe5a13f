//! Login, rotation, refresh and logout.
//!
//! A session is implicit in an access/refresh pair. Exactly one refresh
//! token per identity is persisted (replace-on-rotate): a refresh token
//! presented after a later rotation no longer matches the stored value and
//! is rejected, which is what makes replay of a stolen-but-rotated token
//! detectable. Two concurrent rotations are last-writer-wins; the loser's
//! next refresh fails and the client falls back to login.

use std::sync::Arc;

use crewdesk_core::{DomainError, DomainResult, PrincipalId};
use crewdesk_identity::{Admin, AdminStore, Employee, EmployeeStore};

use crate::password;
use crate::token::{TokenIssuer, TokenPair};

pub struct SessionManager<A, E> {
    issuer: Arc<TokenIssuer>,
    admins: A,
    employees: E,
}

impl<A, E> SessionManager<A, E>
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

    /// Admin login by email.
    pub async fn login_admin(&self, email: &str, pass: &str) -> DomainResult<(Admin, TokenPair)> {
        let email = email.trim().to_lowercase();
        let admin = self
            .admins
            .find_by_email(&email)
            .await?
            .ok_or(DomainError::NotFound)?;

        if !password::verify_password(pass, &admin.password_hash) {
            return Err(DomainError::Unauthenticated);
        }

        let pair = self.rotate_admin(&admin).await?;
        tracing::info!(admin_id = %admin.id, "admin logged in");
        Ok((admin, pair))
    }

    /// Employee login by employee code or email.
    pub async fn login_employee(
        &self,
        handle: &str,
        pass: &str,
    ) -> DomainResult<(Employee, TokenPair)> {
        let handle = handle.trim();
        let employee = match self.employees.find_by_code(handle).await? {
            Some(found) => Some(found),
            None => self.employees.find_by_email(&handle.to_lowercase()).await?,
        }
        .ok_or(DomainError::NotFound)?;

        if !employee.is_active() {
            return Err(DomainError::forbidden("employee account is inactive"));
        }

        if !password::verify_password(pass, &employee.password_hash) {
            return Err(DomainError::Unauthenticated);
        }

        let pair = self.rotate_employee(&employee).await?;
        tracing::info!(employee_id = %employee.id, "employee logged in");
        Ok((employee, pair))
    }

    /// Exchange a refresh token for a fresh pair.
    ///
    /// The presented token must verify *and* match the stored value for the
    /// embedded identity; a token consumed by an earlier rotation fails the
    /// second check. This is the only path that consumes a refresh token.
    pub async fn refresh(&self, presented: &str) -> DomainResult<TokenPair> {
        let claims = self.issuer.verify_refresh(presented).map_err(|e| {
            tracing::debug!(cause = %e, "refresh token rejected");
            DomainError::Unauthenticated
        })?;

        if let Some(admin) = self.admins.get(claims.sub).await? {
            if admin.refresh_token.as_deref() != Some(presented) {
                tracing::warn!(admin_id = %admin.id, "stale refresh token presented");
                return Err(DomainError::Unauthenticated);
            }
            return self.rotate_admin(&admin).await;
        }

        if let Some(employee) = self.employees.get(claims.sub).await? {
            if !employee.is_active() {
                return Err(DomainError::Unauthenticated);
            }
            if employee.refresh_token.as_deref() != Some(presented) {
                tracing::warn!(employee_id = %employee.id, "stale refresh token presented");
                return Err(DomainError::Unauthenticated);
            }
            return self.rotate_employee(&employee).await;
        }

        Err(DomainError::Unauthenticated)
    }

    /// Clear the stored refresh token, ending the identity's session.
    pub async fn logout(&self, principal: PrincipalId) -> DomainResult<()> {
        if self.admins.get(principal).await?.is_some() {
            self.admins.set_refresh_token(principal, None).await?;
            tracing::info!(admin_id = %principal, "admin logged out");
            return Ok(());
        }

        if self.employees.get(principal).await?.is_some() {
            self.employees.set_refresh_token(principal, None).await?;
            tracing::info!(employee_id = %principal, "employee logged out");
            return Ok(());
        }

        Err(DomainError::Unauthenticated)
    }

    /// Verify the current password and store a hash of the new one.
    pub async fn change_admin_password(
        &self,
        admin_id: PrincipalId,
        current: &str,
        new: &str,
    ) -> DomainResult<()> {
        let mut admin = self
            .admins
            .get(admin_id)
            .await?
            .ok_or(DomainError::NotFound)?;

        if !password::verify_password(current, &admin.password_hash) {
            return Err(DomainError::Unauthenticated);
        }

        password::validate_strength(new)?;
        admin.password_hash = password::hash_password(new)?;
        // Changing the password ends the current session as well.
        admin.refresh_token = None;
        self.admins.update(admin).await?;

        tracing::info!(admin_id = %admin_id, "admin password changed");
        Ok(())
    }

    async fn rotate_admin(&self, admin: &Admin) -> DomainResult<TokenPair> {
        let pair = self.issuer.issue(admin.id, &admin.email)?;
        self.admins
            .set_refresh_token(admin.id, Some(pair.refresh.clone()))
            .await?;
        Ok(pair)
    }

    async fn rotate_employee(&self, employee: &Employee) -> DomainResult<TokenPair> {
        let pair = self.issuer.issue(employee.id, &employee.email)?;
        self.employees
            .set_refresh_token(employee.id, Some(pair.refresh.clone()))
            .await?;
        Ok(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewdesk_identity::{AdminRole, Directory, EmployeeStatus, EmployeeType, NewAdmin, NewEmployee};
    use crewdesk_infra::memory::{InMemoryAdminStore, InMemoryEmployeeStore};

    use crate::token::TokenConfig;

    struct Fixture {
        sessions: SessionManager<InMemoryAdminStore, InMemoryEmployeeStore>,
        directory: Directory<InMemoryAdminStore, InMemoryEmployeeStore>,
        admins: InMemoryAdminStore,
        employees: InMemoryEmployeeStore,
    }

    fn fixture() -> Fixture {
        let issuer = Arc::new(TokenIssuer::new(TokenConfig::for_tests()));
        let admins = InMemoryAdminStore::new();
        let employees = InMemoryEmployeeStore::new();
        Fixture {
            sessions: SessionManager::new(issuer, admins.clone(), employees.clone()),
            directory: Directory::new(admins.clone(), employees.clone()),
            admins,
            employees,
        }
    }

    async fn registered_admin(fx: &Fixture, email: &str, pass: &str) -> Admin {
        fx.directory
            .register_admin(NewAdmin {
                name: "Priya Nair".into(),
                email: email.into(),
                phone: "5550001111".into(),
                role: AdminRole::Hr,
                password_hash: password::hash_password(pass).unwrap(),
            })
            .await
            .unwrap()
    }

    async fn registered_employee(fx: &Fixture, admin_id: PrincipalId, pass: &str) -> Employee {
        fx.directory
            .register_employee(
                admin_id,
                NewEmployee {
                    employee_code: "E-100".into(),
                    name: "Arun Mehta".into(),
                    email: "arun@example.com".into(),
                    phone: "5550002222".into(),
                    designation: "Engineer".into(),
                    employee_type: EmployeeType::FullTime,
                    joining_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                    password_hash: password::hash_password(pass).unwrap(),
                },
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn login_persists_the_refresh_token() {
        let fx = fixture();
        let admin = registered_admin(&fx, "hr@example.com", "Sup3rSecret").await;

        let (_, pair) = fx.sessions.login_admin("hr@example.com", "Sup3rSecret").await.unwrap();

        let stored = fx.admins.get(admin.id).await.unwrap().unwrap();
        assert_eq!(stored.refresh_token.as_deref(), Some(pair.refresh.as_str()));
    }

    #[tokio::test]
    async fn wrong_password_is_unauthenticated_unknown_email_is_not_found() {
        let fx = fixture();
        registered_admin(&fx, "hr@example.com", "Sup3rSecret").await;

        let err = fx.sessions.login_admin("hr@example.com", "WrongPass1").await.unwrap_err();
        assert_eq!(err, DomainError::Unauthenticated);

        let err = fx.sessions.login_admin("ghost@example.com", "Sup3rSecret").await.unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[tokio::test]
    async fn rotation_invalidates_the_previous_refresh_token() {
        let fx = fixture();
        registered_admin(&fx, "hr@example.com", "Sup3rSecret").await;

        let (_, first) = fx.sessions.login_admin("hr@example.com", "Sup3rSecret").await.unwrap();
        let second = fx.sessions.refresh(&first.refresh).await.unwrap();
        assert_ne!(first.refresh, second.refresh);

        // The consumed token verifies cryptographically but no longer
        // matches the stored value.
        let err = fx.sessions.refresh(&first.refresh).await.unwrap_err();
        assert_eq!(err, DomainError::Unauthenticated);

        // The fresh one still works.
        fx.sessions.refresh(&second.refresh).await.unwrap();
    }

    #[tokio::test]
    async fn employee_login_by_code_and_refresh() {
        let fx = fixture();
        let admin = registered_admin(&fx, "hr@example.com", "Sup3rSecret").await;
        registered_employee(&fx, admin.id, "Empl0yeePass").await;

        let (employee, pair) = fx.sessions.login_employee("E-100", "Empl0yeePass").await.unwrap();
        assert_eq!(employee.employee_code, "E-100");

        fx.sessions.refresh(&pair.refresh).await.unwrap();
    }

    #[tokio::test]
    async fn inactive_employee_cannot_login_or_refresh() {
        let fx = fixture();
        let admin = registered_admin(&fx, "hr@example.com", "Sup3rSecret").await;
        let employee = registered_employee(&fx, admin.id, "Empl0yeePass").await;

        let (_, pair) = fx.sessions.login_employee("E-100", "Empl0yeePass").await.unwrap();

        let mut stored = fx.employees.get(employee.id).await.unwrap().unwrap();
        stored.status = EmployeeStatus::Inactive;
        fx.employees.update(stored).await.unwrap();

        let err = fx.sessions.login_employee("E-100", "Empl0yeePass").await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        let err = fx.sessions.refresh(&pair.refresh).await.unwrap_err();
        assert_eq!(err, DomainError::Unauthenticated);
    }

    #[tokio::test]
    async fn logout_clears_the_stored_refresh_token() {
        let fx = fixture();
        let admin = registered_admin(&fx, "hr@example.com", "Sup3rSecret").await;

        let (_, pair) = fx.sessions.login_admin("hr@example.com", "Sup3rSecret").await.unwrap();
        fx.sessions.logout(admin.id).await.unwrap();

        let stored = fx.admins.get(admin.id).await.unwrap().unwrap();
        assert_eq!(stored.refresh_token, None);

        let err = fx.sessions.refresh(&pair.refresh).await.unwrap_err();
        assert_eq!(err, DomainError::Unauthenticated);
    }

    #[tokio::test]
    async fn change_password_requires_the_current_one() {
        let fx = fixture();
        let admin = registered_admin(&fx, "hr@example.com", "Sup3rSecret").await;

        let err = fx
            .sessions
            .change_admin_password(admin.id, "WrongPass1", "NewSecret1")
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::Unauthenticated);

        fx.sessions
            .change_admin_password(admin.id, "Sup3rSecret", "NewSecret1")
            .await
            .unwrap();

        fx.sessions.login_admin("hr@example.com", "NewSecret1").await.unwrap();
    }

    #[tokio::test]
    async fn weak_new_password_is_rejected() {
        let fx = fixture();
        let admin = registered_admin(&fx, "hr@example.com", "Sup3rSecret").await;

        let err = fx
            .sessions
            .change_admin_password(admin.id, "Sup3rSecret", "weak")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
