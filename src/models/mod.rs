pub mod driver;
pub mod driver_vehicle;
pub mod vehicle;
