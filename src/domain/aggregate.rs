//! Driver-with-vehicles aggregate and the fold that builds it from joined rows

use sea_orm::FromQueryResult;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Driver, Vehicle};

/// A driver and the vehicles subscribed to it. Built on read, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DriverWithVehicles {
    #[serde(flatten)]
    pub driver: Driver,
    pub vehicles: Vec<Vehicle>,
}

/// One row of `drivers LEFT JOIN drivers_vehicles LEFT JOIN vehicles`.
///
/// Vehicle columns are all NULL when the driver has no links.
#[derive(Debug, Clone, FromQueryResult)]
pub struct DriverVehicleRow {
    pub driver_id: Uuid,
    pub name: String,
    pub email: String,
    pub tax_id: String,
    pub driver_license: String,
    pub date_of_birth: Option<String>,
    pub deleted_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub vehicle_id: Option<Uuid>,
    pub vehicle_brand: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_year_of_manufacture: Option<i32>,
    pub vehicle_license_plate: Option<String>,
    pub vehicle_color: Option<String>,
    pub vehicle_deleted_at: Option<String>,
    pub vehicle_created_at: Option<String>,
    pub vehicle_updated_at: Option<String>,
}

impl DriverVehicleRow {
    fn take_vehicle(&mut self) -> Option<Vehicle> {
        let id = self.vehicle_id?;
        Some(Vehicle {
            id,
            brand: self.vehicle_brand.take().unwrap_or_default(),
            model: self.vehicle_model.take().unwrap_or_default(),
            year_of_manufacture: self.vehicle_year_of_manufacture.unwrap_or_default(),
            license_plate: self.vehicle_license_plate.take().unwrap_or_default(),
            color: self.vehicle_color.take().unwrap_or_default(),
            deleted_at: self.vehicle_deleted_at.take(),
            created_at: self.vehicle_created_at.take().unwrap_or_default(),
            updated_at: self.vehicle_updated_at.take().unwrap_or_default(),
        })
    }

    fn into_driver(self) -> Driver {
        Driver {
            id: self.driver_id,
            name: self.name,
            email: self.email,
            tax_id: self.tax_id,
            driver_license: self.driver_license,
            date_of_birth: self.date_of_birth,
            deleted_at: self.deleted_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Fold joined rows into a single aggregate.
///
/// Driver columns are read from the first row only. Rows without a vehicle
/// id contribute nothing. Returns `None` for an empty result set.
pub fn assemble(rows: Vec<DriverVehicleRow>) -> Option<DriverWithVehicles> {
    let mut rows = rows.into_iter();
    let mut first = rows.next()?;

    let mut vehicles = Vec::with_capacity(rows.len() + 1);
    vehicles.extend(first.take_vehicle());
    vehicles.extend(rows.filter_map(|mut row| row.take_vehicle()));

    Some(DriverWithVehicles {
        driver: first.into_driver(),
        vehicles,
    })
}
