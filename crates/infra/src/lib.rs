//! Infrastructure layer: store implementations and wiring.

pub mod memory;


pub use memory::{
    InMemoryAdminStore, InMemoryAttendanceStore, InMemoryEmployeeStore, InMemoryLeaveStore,
};
