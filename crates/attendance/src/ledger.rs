//! Attendance operations exposed to admins.

use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use crewdesk_core::{AttendanceRecordId, DomainError, DomainResult, PrincipalId};
use crewdesk_identity::EmployeeStore;

use crate::record::{AttendanceRecord, AttendanceStatus};
use crate::store::AttendanceStore;
use crate::window::DateWindow;

/// One entry of a bulk marking request.
#[derive(Debug, Clone)]
pub struct BulkEntry {
    pub employee_id: PrincipalId,
    pub status: AttendanceStatus,
    pub remarks: String,
}

/// Result of a bulk marking call. Entries naming employees outside the
/// admin's roster are skipped and reported rather than failing the batch.
#[derive(Debug, Clone)]
pub struct BulkOutcome {
    pub recorded: Vec<AttendanceRecord>,
    pub skipped: Vec<PrincipalId>,
}

/// One row of a single-day roster view. `record` is `None` for employees
/// not yet marked on that day.
#[derive(Debug, Clone)]
pub struct DayRow {
    pub employee_id: PrincipalId,
    pub employee_code: String,
    pub name: String,
    pub designation: String,
    pub record: Option<AttendanceRecord>,
}

/// One attendance record joined with employee display fields.
#[derive(Debug, Clone)]
pub struct HistoryRow {
    pub record: AttendanceRecord,
    pub employee_code: String,
    pub name: String,
    pub designation: String,
}

/// All records of one day, newest day first in the surrounding list.
#[derive(Debug, Clone)]
pub struct HistoryDay {
    pub date: NaiveDate,
    pub rows: Vec<HistoryRow>,
}

pub struct AttendanceLedger<S, E> {
    records: S,
    employees: E,
}

impl<S, E> AttendanceLedger<S, E>
where
    S: AttendanceStore,
    E: EmployeeStore,
{
    pub fn new(records: S, employees: E) -> Self {
        Self { records, employees }
    }

    /// Mark several employees for one day in a single call.
    ///
    /// The admin's roster is fetched once up front; entries for employees
    /// outside it are skipped. A batch in which nothing could be recorded
    /// is a validation error.
    pub async fn mark_bulk(
        &self,
        admin_id: PrincipalId,
        date: NaiveDate,
        entries: Vec<BulkEntry>,
    ) -> DomainResult<BulkOutcome> {
        if entries.is_empty() {
            return Err(DomainError::validation("attendance batch is empty"));
        }

        let roster = self.employees.ids_for_admin(admin_id).await?;

        let mut recorded = Vec::new();
        let mut skipped = Vec::new();
        for entry in entries {
            if !roster.contains(&entry.employee_id) {
                skipped.push(entry.employee_id);
                continue;
            }
            let stored = self
                .records
                .upsert_for_day(AttendanceRecord {
                    id: AttendanceRecordId::new(),
                    admin_id,
                    employee_id: entry.employee_id,
                    date,
                    status: entry.status,
                    remarks: entry.remarks,
                })
                .await?;
            recorded.push(stored);
        }

        if recorded.is_empty() {
            return Err(DomainError::validation(
                "no entry in the batch belongs to this admin",
            ));
        }

        if !skipped.is_empty() {
            tracing::warn!(
                admin_id = %admin_id,
                skipped = skipped.len(),
                "attendance batch contained foreign employee ids"
            );
        }
        tracing::info!(admin_id = %admin_id, %date, count = recorded.len(), "attendance marked");
        Ok(BulkOutcome { recorded, skipped })
    }

    /// Roster view for one day: every employee of the admin, joined with
    /// that day's record where one exists.
    pub async fn day_view(
        &self,
        admin_id: PrincipalId,
        date: NaiveDate,
    ) -> DomainResult<Vec<DayRow>> {
        let employees = self.employees.list_for_admin(admin_id).await?;
        let mut by_employee: HashMap<PrincipalId, AttendanceRecord> = self
            .records
            .find_for_day(admin_id, date)
            .await?
            .into_iter()
            .map(|r| (r.employee_id, r))
            .collect();

        Ok(employees
            .into_iter()
            .map(|e| DayRow {
                record: by_employee.remove(&e.id),
                employee_id: e.id,
                employee_code: e.employee_code,
                name: e.name,
                designation: e.designation,
            })
            .collect())
    }

    /// Correct an existing record's status and, optionally, its remarks.
    pub async fn correct(
        &self,
        admin_id: PrincipalId,
        record_id: AttendanceRecordId,
        status: AttendanceStatus,
        remarks: Option<String>,
    ) -> DomainResult<AttendanceRecord> {
        let mut record = self
            .records
            .get(record_id)
            .await?
            .ok_or(DomainError::NotFound)?;

        if record.admin_id != admin_id {
            return Err(DomainError::forbidden(
                "attendance record belongs to another admin",
            ));
        }

        record.status = status;
        if let Some(remarks) = remarks {
            record.remarks = remarks;
        }
        self.records.update(record.clone()).await?;

        tracing::info!(admin_id = %admin_id, record_id = %record_id, "attendance corrected");
        Ok(record)
    }

    /// History of the admin's records, grouped by day, newest day first.
    ///
    /// Without a window the query covers everything up to today.
    pub async fn history(
        &self,
        admin_id: PrincipalId,
        window: Option<DateWindow>,
    ) -> DomainResult<Vec<HistoryDay>> {
        let window = window.unwrap_or_else(|| DateWindow::up_to(Local::now().date_naive()));
        let records = self.records.find_in_window(admin_id, &window).await?;

        let display: HashMap<PrincipalId, (String, String, String)> = self
            .employees
            .list_for_admin(admin_id)
            .await?
            .into_iter()
            .map(|e| (e.id, (e.employee_code, e.name, e.designation)))
            .collect();

        let mut by_date: HashMap<NaiveDate, Vec<HistoryRow>> = HashMap::new();
        for record in records {
            let Some((code, name, designation)) = display.get(&record.employee_id) else {
                // Employee records are soft-deactivated, never removed, so
                // a missing join partner means an inconsistent store.
                return Err(DomainError::internal(format!(
                    "attendance record {} references unknown employee {}",
                    record.id, record.employee_id
                )));
            };
            by_date.entry(record.date).or_default().push(HistoryRow {
                record,
                employee_code: code.clone(),
                name: name.clone(),
                designation: designation.clone(),
            });
        }

        let mut days: Vec<HistoryDay> = by_date
            .into_iter()
            .map(|(date, rows)| HistoryDay { date, rows })
            .collect();
        days.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(days)
    }
}
