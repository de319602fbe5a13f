//! Directory service: registration and record maintenance for both identity
//! classes.
//!
//! Password hashing happens in `crewdesk-auth`; this service receives
//! finished PHC hashes and never sees plaintext.

use chrono::{NaiveDate, Utc};

use crewdesk_core::{DomainError, DomainResult, PrincipalId};

use crate::admin::{Admin, AdminRole};
use crate::employee::{Employee, EmployeeStatus, EmployeeType};
use crate::store::{AdminStore, EmployeeStore};

/// Registration payload for an admin.
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: AdminRole,
    pub password_hash: String,
}

/// Registration payload for an employee.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub employee_code: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub designation: String,
    pub employee_type: EmployeeType,
    pub joining_date: NaiveDate,
    pub password_hash: String,
}

/// Partial update for an employee record.
///
/// The owning admin is deliberately absent: `admin_id` is immutable after
/// creation.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub designation: Option<String>,
    pub employee_type: Option<EmployeeType>,
}

impl EmployeeUpdate {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.designation.is_none()
            && self.employee_type.is_none()
    }
}

/// Directory over the two identity collections.
pub struct Directory<A, E> {
    admins: A,
    employees: E,
}

impl<A, E> Directory<A, E>
where
    A: AdminStore,
    E: EmployeeStore,
{
    pub fn new(admins: A, employees: E) -> Self {
        Self { admins, employees }
    }

    pub async fn register_admin(&self, new: NewAdmin) -> DomainResult<Admin> {
        let email = normalize_email(&new.email)?;
        require_non_empty(&new.name, "name")?;

        if self.admins.find_by_email(&email).await?.is_some() {
            return Err(DomainError::conflict("admin email already registered"));
        }

        let admin = Admin {
            id: PrincipalId::new(),
            name: new.name.trim().to_string(),
            email,
            phone: new.phone.trim().to_string(),
            role: new.role,
            password_hash: new.password_hash,
            refresh_token: None,
            created_at: Utc::now(),
        };

        // The store re-checks uniqueness; a concurrent registration between
        // the probe above and this insert still surfaces as Conflict.
        self.admins.insert(admin.clone()).await?;

        tracing::info!(admin_id = %admin.id, role = %admin.role, "admin registered");
        Ok(admin)
    }

    pub async fn register_employee(
        &self,
        admin_id: PrincipalId,
        new: NewEmployee,
    ) -> DomainResult<Employee> {
        let email = normalize_email(&new.email)?;
        require_non_empty(&new.name, "name")?;
        require_non_empty(&new.employee_code, "employee code")?;
        require_non_empty(&new.designation, "designation")?;

        if self.admins.get(admin_id).await?.is_none() {
            return Err(DomainError::NotFound);
        }

        if self.employees.find_by_email(&email).await?.is_some()
            || self
                .employees
                .find_by_code(new.employee_code.trim())
                .await?
                .is_some()
        {
            return Err(DomainError::conflict(
                "employee with this code or email already exists",
            ));
        }

        let employee = Employee {
            id: PrincipalId::new(),
            employee_code: new.employee_code.trim().to_string(),
            name: new.name.trim().to_string(),
            email,
            phone: new.phone.trim().to_string(),
            designation: new.designation.trim().to_string(),
            admin_id,
            employee_type: new.employee_type,
            joining_date: new.joining_date,
            status: EmployeeStatus::Active,
            password_hash: new.password_hash,
            refresh_token: None,
            created_at: Utc::now(),
        };

        self.employees.insert(employee.clone()).await?;

        tracing::info!(
            employee_id = %employee.id,
            code = %employee.employee_code,
            admin_id = %admin_id,
            "employee registered"
        );
        Ok(employee)
    }

    /// Apply a partial update to an owned employee record.
    pub async fn update_employee(
        &self,
        admin_id: PrincipalId,
        employee_id: PrincipalId,
        update: EmployeeUpdate,
    ) -> DomainResult<Employee> {
        if update.is_empty() {
            return Err(DomainError::validation("no updatable fields provided"));
        }

        let mut employee = self.owned_employee(admin_id, employee_id).await?;

        if let Some(name) = update.name {
            require_non_empty(&name, "name")?;
            employee.name = name.trim().to_string();
        }
        if let Some(phone) = update.phone {
            employee.phone = phone.trim().to_string();
        }
        if let Some(designation) = update.designation {
            require_non_empty(&designation, "designation")?;
            employee.designation = designation.trim().to_string();
        }
        if let Some(employee_type) = update.employee_type {
            employee.employee_type = employee_type;
        }

        self.employees.update(employee.clone()).await?;
        Ok(employee)
    }

    /// Soft-delete: flips status to Inactive. The record stays addressable;
    /// an inactive employee can no longer authenticate or be resolved.
    pub async fn deactivate_employee(
        &self,
        admin_id: PrincipalId,
        employee_id: PrincipalId,
    ) -> DomainResult<()> {
        let mut employee = self.owned_employee(admin_id, employee_id).await?;
        employee.status = EmployeeStatus::Inactive;
        employee.refresh_token = None;
        self.employees.update(employee).await?;

        tracing::info!(employee_id = %employee_id, admin_id = %admin_id, "employee deactivated");
        Ok(())
    }

    pub async fn employees_of(&self, admin_id: PrincipalId) -> DomainResult<Vec<Employee>> {
        Ok(self.employees.list_for_admin(admin_id).await?)
    }

    pub async fn get_employee(
        &self,
        admin_id: PrincipalId,
        employee_id: PrincipalId,
    ) -> DomainResult<Employee> {
        self.owned_employee(admin_id, employee_id).await
    }

    async fn owned_employee(
        &self,
        admin_id: PrincipalId,
        employee_id: PrincipalId,
    ) -> DomainResult<Employee> {
        let employee = self
            .employees
            .get(employee_id)
            .await?
            .ok_or(DomainError::NotFound)?;

        if employee.admin_id != admin_id {
            return Err(DomainError::forbidden(
                "employee belongs to a different admin",
            ));
        }

        Ok(employee)
    }
}

fn normalize_email(raw: &str) -> DomainResult<String> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(DomainError::validation("invalid email format"));
    }
    Ok(email)
}

fn require_non_empty(value: &str, field: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}
