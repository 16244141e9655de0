//! Repository implementations using SeaORM

pub mod driver_repository;
mod lifecycle;
pub mod vehicle_repository;

pub use driver_repository::SeaOrmDriverRepository;
pub use vehicle_repository::SeaOrmVehicleRepository;
