use async_trait::async_trait;
use crewdesk_core::{LeaveRequestId, PrincipalId, StoreError};

use crate::request::LeaveRequest;

/// Persistence contract for leave requests.
#[async_trait]
pub trait LeaveStore: Send + Sync {
    async fn insert(&self, request: LeaveRequest) -> Result<(), StoreError>;

    async fn get(&self, id: LeaveRequestId) -> Result<Option<LeaveRequest>, StoreError>;

    async fn update(&self, request: LeaveRequest) -> Result<(), StoreError>;

    async fn delete(&self, id: LeaveRequestId) -> Result<(), StoreError>;

    /// Requests decided by the given admin, newest first.
    async fn list_for_admin(&self, admin_id: PrincipalId)
        -> Result<Vec<LeaveRequest>, StoreError>;

    /// Requests filed by the given employee, newest first.
    async fn list_for_employee(
        &self,
        employee_id: PrincipalId,
    ) -> Result<Vec<LeaveRequest>, StoreError>;
}

#[async_trait]
impl<S: LeaveStore> LeaveStore for std::sync::Arc<S> {
    async fn insert(&self, request: LeaveRequest) -> Result<(), StoreError> {
        (**self).insert(request).await
    }

    async fn get(&self, id: LeaveRequestId) -> Result<Option<LeaveRequest>, StoreError> {
        (**self).get(id).await
    }

    async fn update(&self, request: LeaveRequest) -> Result<(), StoreError> {
        (**self).update(request).await
    }

    async fn delete(&self, id: LeaveRequestId) -> Result<(), StoreError> {
        (**self).delete(id).await
    }

    async fn list_for_admin(
        &self,
        admin_id: PrincipalId,
    ) -> Result<Vec<LeaveRequest>, StoreError> {
        (**self).list_for_admin(admin_id).await
    }

    async fn list_for_employee(
        &self,
        employee_id: PrincipalId,
    ) -> Result<Vec<LeaveRequest>, StoreError> {
        (**self).list_for_employee(employee_id).await
    }
}
