use async_trait::async_trait;
use chrono::NaiveDate;
use crewdesk_core::{AttendanceRecordId, PrincipalId, StoreError};

use crate::record::AttendanceRecord;
use crate::window::DateWindow;

/// Persistence contract for attendance records.
///
/// `upsert_for_day` enforces the one-record-per-employee-per-day rule: when
/// a record for `(employee_id, date)` already exists the stored record keeps
/// its id and takes the new status and remarks, otherwise the given record
/// is inserted as-is.
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    async fn upsert_for_day(
        &self,
        record: AttendanceRecord,
    ) -> Result<AttendanceRecord, StoreError>;

    async fn get(&self, id: AttendanceRecordId) -> Result<Option<AttendanceRecord>, StoreError>;

    async fn update(&self, record: AttendanceRecord) -> Result<(), StoreError>;

    async fn find_for_day(
        &self,
        admin_id: PrincipalId,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, StoreError>;

    async fn find_in_window(
        &self,
        admin_id: PrincipalId,
        window: &DateWindow,
    ) -> Result<Vec<AttendanceRecord>, StoreError>;
}

#[async_trait]
impl<S: AttendanceStore> AttendanceStore for std::sync::Arc<S> {
    async fn upsert_for_day(
        &self,
        record: AttendanceRecord,
    ) -> Result<AttendanceRecord, StoreError> {
        (**self).upsert_for_day(record).await
    }

    async fn get(&self, id: AttendanceRecordId) -> Result<Option<AttendanceRecord>, StoreError> {
        (**self).get(id).await
    }

    async fn update(&self, record: AttendanceRecord) -> Result<(), StoreError> {
        (**self).update(record).await
    }

    async fn find_for_day(
        &self,
        admin_id: PrincipalId,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, StoreError> {
        (**self).find_for_day(admin_id, date).await
    }

    async fn find_in_window(
        &self,
        admin_id: PrincipalId,
        window: &DateWindow,
    ) -> Result<Vec<AttendanceRecord>, StoreError> {
        (**self).find_in_window(admin_id, window).await
    }
}
