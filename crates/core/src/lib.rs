//! `crewdesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod response;

pub use error::{DomainError, DomainResult, StoreError};
pub use id::{AttendanceRecordId, LeaveRequestId, PrincipalId};
pub use response::Envelope;
