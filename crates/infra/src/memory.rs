//! In-memory store implementations.
//!
//! Intended for tests/dev. Each store is a `HashMap` behind an
//! `Arc<RwLock<_>>`, so clones share the same data. Uniqueness rules are
//! enforced on insert the way a database index would.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::NaiveDate;
use crewdesk_attendance::{AttendanceRecord, AttendanceStore, DateWindow};
use crewdesk_core::{AttendanceRecordId, LeaveRequestId, PrincipalId, StoreError};
use crewdesk_identity::{Admin, AdminStore, Employee, EmployeeStore};
use crewdesk_leave::{LeaveRequest, LeaveStore};

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, StoreError> {
    lock.read()
        .map_err(|_| StoreError::Unavailable("lock poisoned".into()))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, StoreError> {
    lock.write()
        .map_err(|_| StoreError::Unavailable("lock poisoned".into()))
}

// ───────────────────────── admins ─────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InMemoryAdminStore {
    admins: Arc<RwLock<HashMap<PrincipalId, Admin>>>,
}

impl InMemoryAdminStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminStore for InMemoryAdminStore {
    async fn insert(&self, admin: Admin) -> Result<(), StoreError> {
        let mut admins = write(&self.admins)?;
        if admins.values().any(|a| a.email == admin.email) {
            return Err(StoreError::duplicate("email"));
        }
        admins.insert(admin.id, admin);
        Ok(())
    }

    async fn get(&self, id: PrincipalId) -> Result<Option<Admin>, StoreError> {
        Ok(read(&self.admins)?.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, StoreError> {
        Ok(read(&self.admins)?.values().find(|a| a.email == email).cloned())
    }

    async fn update(&self, admin: Admin) -> Result<(), StoreError> {
        let mut admins = write(&self.admins)?;
        if let Some(slot) = admins.get_mut(&admin.id) {
            *slot = admin;
        }
        Ok(())
    }

    async fn set_refresh_token(
        &self,
        id: PrincipalId,
        token: Option<String>,
    ) -> Result<(), StoreError> {
        let mut admins = write(&self.admins)?;
        if let Some(admin) = admins.get_mut(&id) {
            admin.refresh_token = token;
        }
        Ok(())
    }
}

// ──────────────────────── employees ────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeStore {
    employees: Arc<RwLock<HashMap<PrincipalId, Employee>>>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn insert(&self, employee: Employee) -> Result<(), StoreError> {
        let mut employees = write(&self.employees)?;
        if employees.values().any(|e| e.email == employee.email) {
            return Err(StoreError::duplicate("email"));
        }
        if employees
            .values()
            .any(|e| e.employee_code == employee.employee_code)
        {
            return Err(StoreError::duplicate("employee_code"));
        }
        employees.insert(employee.id, employee);
        Ok(())
    }

    async fn get(&self, id: PrincipalId) -> Result<Option<Employee>, StoreError> {
        Ok(read(&self.employees)?.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, StoreError> {
        Ok(read(&self.employees)?
            .values()
            .find(|e| e.email == email)
            .cloned())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Employee>, StoreError> {
        Ok(read(&self.employees)?
            .values()
            .find(|e| e.employee_code == code)
            .cloned())
    }

    async fn list_for_admin(&self, admin_id: PrincipalId) -> Result<Vec<Employee>, StoreError> {
        let mut list: Vec<Employee> = read(&self.employees)?
            .values()
            .filter(|e| e.admin_id == admin_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| a.employee_code.cmp(&b.employee_code));
        Ok(list)
    }

    async fn ids_for_admin(
        &self,
        admin_id: PrincipalId,
    ) -> Result<HashSet<PrincipalId>, StoreError> {
        Ok(read(&self.employees)?
            .values()
            .filter(|e| e.admin_id == admin_id)
            .map(|e| e.id)
            .collect())
    }

    async fn update(&self, employee: Employee) -> Result<(), StoreError> {
        let mut employees = write(&self.employees)?;
        if let Some(slot) = employees.get_mut(&employee.id) {
            *slot = employee;
        }
        Ok(())
    }

    async fn set_refresh_token(
        &self,
        id: PrincipalId,
        token: Option<String>,
    ) -> Result<(), StoreError> {
        let mut employees = write(&self.employees)?;
        if let Some(employee) = employees.get_mut(&id) {
            employee.refresh_token = token;
        }
        Ok(())
    }
}

// ──────────────────────── attendance ────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InMemoryAttendanceStore {
    records: Arc<RwLock<HashMap<AttendanceRecordId, AttendanceRecord>>>,
}

impl InMemoryAttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AttendanceStore for InMemoryAttendanceStore {
    async fn upsert_for_day(
        &self,
        record: AttendanceRecord,
    ) -> Result<AttendanceRecord, StoreError> {
        let mut records = write(&self.records)?;
        // One record per (employee, day): a re-mark keeps the stored id.
        if let Some(existing) = records
            .values_mut()
            .find(|r| r.employee_id == record.employee_id && r.date == record.date)
        {
            existing.status = record.status;
            existing.remarks = record.remarks;
            return Ok(existing.clone());
        }
        records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get(&self, id: AttendanceRecordId) -> Result<Option<AttendanceRecord>, StoreError> {
        Ok(read(&self.records)?.get(&id).cloned())
    }

    async fn update(&self, record: AttendanceRecord) -> Result<(), StoreError> {
        let mut records = write(&self.records)?;
        if let Some(slot) = records.get_mut(&record.id) {
            *slot = record;
        }
        Ok(())
    }

    async fn find_for_day(
        &self,
        admin_id: PrincipalId,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, StoreError> {
        Ok(read(&self.records)?
            .values()
            .filter(|r| r.admin_id == admin_id && r.date == date)
            .cloned()
            .collect())
    }

    async fn find_in_window(
        &self,
        admin_id: PrincipalId,
        window: &DateWindow,
    ) -> Result<Vec<AttendanceRecord>, StoreError> {
        Ok(read(&self.records)?
            .values()
            .filter(|r| r.admin_id == admin_id && window.contains(r.date))
            .cloned()
            .collect())
    }
}

// ────────────────────────── leave ──────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InMemoryLeaveStore {
    requests: Arc<RwLock<HashMap<LeaveRequestId, LeaveRequest>>>,
}

impl InMemoryLeaveStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn newest_first(mut list: Vec<LeaveRequest>) -> Vec<LeaveRequest> {
        list.sort_by(|a, b| b.requested_at.cmp(&a.requested_at));
        list
    }
}

#[async_trait]
impl LeaveStore for InMemoryLeaveStore {
    async fn insert(&self, request: LeaveRequest) -> Result<(), StoreError> {
        write(&self.requests)?.insert(request.id, request);
        Ok(())
    }

    async fn get(&self, id: LeaveRequestId) -> Result<Option<LeaveRequest>, StoreError> {
        Ok(read(&self.requests)?.get(&id).cloned())
    }

    async fn update(&self, request: LeaveRequest) -> Result<(), StoreError> {
        let mut requests = write(&self.requests)?;
        if let Some(slot) = requests.get_mut(&request.id) {
            *slot = request;
        }
        Ok(())
    }

    async fn delete(&self, id: LeaveRequestId) -> Result<(), StoreError> {
        write(&self.requests)?.remove(&id);
        Ok(())
    }

    async fn list_for_admin(
        &self,
        admin_id: PrincipalId,
    ) -> Result<Vec<LeaveRequest>, StoreError> {
        Ok(Self::newest_first(
            read(&self.requests)?
                .values()
                .filter(|r| r.admin_id == admin_id)
                .cloned()
                .collect(),
        ))
    }

    async fn list_for_employee(
        &self,
        employee_id: PrincipalId,
    ) -> Result<Vec<LeaveRequest>, StoreError> {
        Ok(Self::newest_first(
            read(&self.requests)?
                .values()
                .filter(|r| r.employee_id == employee_id)
                .cloned()
                .collect(),
        ))
    }
}
