//! Daily attendance marking and history.
//!
//! One record per employee per calendar day. Bulk marking writes through
//! an upsert keyed on `(employee_id, date)`, so re-marking a day corrects
//! the earlier record instead of producing a duplicate.

pub mod ledger;
pub mod record;
pub mod store;
pub mod window;

pub use ledger::{AttendanceLedger, BulkEntry, BulkOutcome, DayRow, HistoryDay, HistoryRow};
pub use record::{AttendanceRecord, AttendanceStatus};
pub use store::AttendanceStore;
pub use window::DateWindow;
