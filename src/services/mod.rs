//! Services Layer
//!
//! Business logic between the HTTP handlers and the repositories.
//! Validation, error context and hard-delete ordering live here.

pub mod driver_service;
pub mod relationships;
pub mod vehicle_service;

// Re-export for convenience
pub use driver_service::DriverService;
pub use relationships::HardDeleteMode;
pub use vehicle_service::VehicleService;
