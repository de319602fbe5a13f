//! `crewdesk-identity` — identity records and the credential store contract.
//!
//! Two identity classes share a shape but are never merged into one record
//! type: [`Admin`] and [`Employee`]. The store traits here are the
//! persistence contract the rest of the system is written against.

pub mod admin;
pub mod directory;
pub mod employee;
pub mod store;

pub use admin::{Admin, AdminRole};
pub use directory::{Directory, EmployeeUpdate, NewAdmin, NewEmployee};
pub use employee::{Employee, EmployeeStatus, EmployeeType};
pub use store::{AdminStore, EmployeeStore};
