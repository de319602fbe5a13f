//! Leave requests and their approval workflow.
//!
//! An employee applies for leave; the owning admin approves or rejects it.
//! A decision is final: re-deciding a request that already left `Pending`
//! is a conflict, not a silent overwrite.

pub mod request;
pub mod store;
pub mod workflow;

pub use request::{LeaveRequest, LeaveStatus, LeaveType};
pub use store::LeaveStore;
pub use workflow::LeaveWorkflow;
