//! Application state containing services and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::infrastructure::{SeaOrmDriverRepository, SeaOrmVehicleRepository};
use crate::services::{DriverService, HardDeleteMode, VehicleService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    pub drivers: DriverService,
    pub vehicles: VehicleService,
}

impl AppState {
    /// Wire repositories and services over one connection pool
    pub fn new(db: DatabaseConnection, hard_delete_mode: HardDeleteMode) -> Self {
        let driver_repo = Arc::new(SeaOrmDriverRepository::new(db.clone()));
        let vehicle_repo = Arc::new(SeaOrmVehicleRepository::new(db.clone()));

        Self {
            db,
            drivers: DriverService::new(driver_repo, hard_delete_mode),
            vehicles: VehicleService::new(vehicle_repo, hard_delete_mode),
        }
    }

    /// Connection pool the repositories run on
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
