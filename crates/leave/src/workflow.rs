//! Application, decision and withdrawal of leave requests.

use chrono::{NaiveDate, Utc};
use crewdesk_core::{DomainError, DomainResult, LeaveRequestId, PrincipalId};
use crewdesk_identity::EmployeeStore;

use crate::request::{LeaveRequest, LeaveStatus, LeaveType};
use crate::store::LeaveStore;

pub struct LeaveWorkflow<L, E> {
    requests: L,
    employees: E,
}

impl<L, E> LeaveWorkflow<L, E>
where
    L: LeaveStore,
    E: EmployeeStore,
{
    pub fn new(requests: L, employees: E) -> Self {
        Self { requests, employees }
    }

    /// File a new request on behalf of an employee.
    ///
    /// `today` is passed in rather than read from the clock so callers
    /// control the backdating cutoff.
    pub async fn apply(
        &self,
        employee_id: PrincipalId,
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: &str,
        today: NaiveDate,
    ) -> DomainResult<LeaveRequest> {
        if start_date > end_date {
            return Err(DomainError::validation(format!(
                "leave starts {start_date} after it ends {end_date}"
            )));
        }
        if start_date < today {
            return Err(DomainError::validation("leave cannot start in the past"));
        }
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(DomainError::validation("leave reason must not be empty"));
        }

        let employee = self
            .employees
            .get(employee_id)
            .await?
            .ok_or(DomainError::NotFound)?;
        if !employee.is_active() {
            return Err(DomainError::forbidden("employee account is inactive"));
        }

        let request = LeaveRequest {
            id: LeaveRequestId::new(),
            admin_id: employee.admin_id,
            employee_id,
            leave_type,
            start_date,
            end_date,
            reason: reason.to_owned(),
            status: LeaveStatus::Pending,
            rejection_reason: None,
            requested_at: Utc::now(),
        };
        self.requests.insert(request.clone()).await?;

        tracing::info!(
            employee_id = %employee_id,
            leave_id = %request.id,
            leave_type = %leave_type,
            "leave requested"
        );
        Ok(request)
    }

    /// Approve or reject a pending request.
    ///
    /// Only the owning admin may decide. Rejection requires a reason;
    /// approval clears any reason passed by mistake. A request that has
    /// already been decided conflicts rather than being overwritten.
    pub async fn decide(
        &self,
        admin_id: PrincipalId,
        leave_id: LeaveRequestId,
        decision: LeaveStatus,
        rejection_reason: Option<String>,
    ) -> DomainResult<LeaveRequest> {
        if decision == LeaveStatus::Pending {
            return Err(DomainError::validation(
                "a decision must be Approved or Rejected",
            ));
        }

        let mut request = self
            .requests
            .get(leave_id)
            .await?
            .ok_or(DomainError::NotFound)?;

        if request.admin_id != admin_id {
            return Err(DomainError::forbidden(
                "leave request belongs to another admin",
            ));
        }
        if request.status.is_terminal() {
            return Err(DomainError::conflict(format!(
                "leave request is already {}",
                request.status
            )));
        }

        request.rejection_reason = match decision {
            LeaveStatus::Rejected => {
                let reason = rejection_reason
                    .as_deref()
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .ok_or_else(|| {
                        DomainError::validation("rejection requires a reason")
                    })?;
                Some(reason.to_owned())
            }
            _ => None,
        };
        request.status = decision;
        self.requests.update(request.clone()).await?;

        tracing::info!(
            admin_id = %admin_id,
            leave_id = %leave_id,
            decision = %decision,
            "leave decided"
        );
        Ok(request)
    }

    /// Delete a request the employee filed, regardless of its state.
    pub async fn withdraw(
        &self,
        employee_id: PrincipalId,
        leave_id: LeaveRequestId,
    ) -> DomainResult<()> {
        let request = self
            .requests
            .get(leave_id)
            .await?
            .ok_or(DomainError::NotFound)?;

        if request.employee_id != employee_id {
            return Err(DomainError::forbidden(
                "leave request belongs to another employee",
            ));
        }

        self.requests.delete(leave_id).await?;
        tracing::info!(employee_id = %employee_id, leave_id = %leave_id, "leave withdrawn");
        Ok(())
    }

    /// All requests routed to the given admin, newest first.
    pub async fn history_for_admin(
        &self,
        admin_id: PrincipalId,
    ) -> DomainResult<Vec<LeaveRequest>> {
        Ok(self.requests.list_for_admin(admin_id).await?)
    }

    /// All requests filed by the given employee, newest first.
    pub async fn history_for_employee(
        &self,
        employee_id: PrincipalId,
    ) -> DomainResult<Vec<LeaveRequest>> {
        Ok(self.requests.list_for_employee(employee_id).await?)
    }
}
