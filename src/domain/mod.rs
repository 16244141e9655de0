//! Domain layer - Business abstractions
//!
//! Trait definitions, records, the driver aggregate and domain error types.
//! No Axum here; SeaORM only appears as the row mapping for joined reads.

pub mod aggregate;
pub mod errors;
pub mod repositories;

pub use aggregate::{DriverVehicleRow, DriverWithVehicles, assemble};
pub use errors::DomainError;
pub use repositories::*;
