//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{DomainError, DriverWithVehicles};

/// Driver data for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Driver {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub tax_id: String,
    pub driver_license: String,
    pub date_of_birth: Option<String>,
    /// Set when the driver is soft-deleted
    pub deleted_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields accepted when creating or overwriting a driver
///
/// Missing keys read as empty and are caught by `validate`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct DriverInput {
    pub name: String,
    pub email: String,
    pub tax_id: String,
    pub driver_license: String,
    pub date_of_birth: Option<String>,
}

impl DriverInput {
    /// Name, tax id and email must be present.
    pub fn validate(&self) -> Result<(), DomainError> {
        require("name", &self.name)?;
        require("tax id", &self.tax_id)?;
        require("email", &self.email)
    }
}

/// Vehicle data for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Vehicle {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub year_of_manufacture: i32,
    pub license_plate: String,
    pub color: String,
    /// Set when the vehicle is soft-deleted
    pub deleted_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields accepted when creating or overwriting a vehicle
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct VehicleInput {
    pub brand: String,
    pub model: String,
    pub year_of_manufacture: i32,
    pub license_plate: String,
    pub color: String,
}

impl VehicleInput {
    /// Brand, model and license plate must be present.
    pub fn validate(&self) -> Result<(), DomainError> {
        require("brand", &self.brand)?;
        require("model", &self.model)?;
        require("license plate", &self.license_plate)
    }
}

fn require(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("invalid {}", field)));
    }
    Ok(())
}

/// Deletion lifecycle shared by drivers and vehicles.
///
/// `unrelate` must run before `hard_delete`; the orchestration lives in
/// `services::relationships`.
#[async_trait]
pub trait EntityLifecycle: Send + Sync {
    /// Set the deletion marker to now
    async fn soft_delete(&self, id: Uuid) -> Result<(), DomainError>;

    /// Clear the deletion marker
    async fn undelete(&self, id: Uuid) -> Result<(), DomainError>;

    /// Remove every link row referencing the entity, returning how many were removed
    async fn unrelate(&self, id: Uuid) -> Result<u64, DomainError>;

    /// Physically remove the entity row
    async fn hard_delete(&self, id: Uuid) -> Result<(), DomainError>;

    /// Unrelate and hard delete inside a single storage transaction.
    ///
    /// Failures are classified like the sequential variant:
    /// `RelationCleanup` for the first step, `Delete` for the second.
    async fn purge(&self, id: Uuid) -> Result<(), DomainError>;
}

/// Repository trait for Driver entity
#[async_trait]
pub trait DriverRepository: EntityLifecycle {
    /// Find every driver that is not soft-deleted
    async fn find_all(&self) -> Result<Vec<Driver>, DomainError>;

    /// Find a driver together with its subscribed vehicles
    async fn find_by_id(&self, id: Uuid) -> Result<Option<DriverWithVehicles>, DomainError>;

    /// Insert a driver under a caller-generated id
    async fn create(&self, id: Uuid, input: DriverInput) -> Result<Driver, DomainError>;

    /// Overwrite every field of a driver
    async fn update(&self, id: Uuid, input: DriverInput) -> Result<Driver, DomainError>;

    /// Link a vehicle to a driver. Fails with `Conflict` when already linked.
    async fn subscribe(&self, driver_id: Uuid, vehicle_id: Uuid) -> Result<(), DomainError>;

    /// Remove the link between a driver and a vehicle. Missing links are ignored.
    async fn unsubscribe(&self, driver_id: Uuid, vehicle_id: Uuid) -> Result<(), DomainError>;
}

/// Repository trait for Vehicle entity
#[async_trait]
pub trait VehicleRepository: EntityLifecycle {
    /// Find every vehicle that is not soft-deleted
    async fn find_all(&self) -> Result<Vec<Vehicle>, DomainError>;

    /// Find a vehicle by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, DomainError>;

    /// Insert a vehicle under a caller-generated id
    async fn create(&self, id: Uuid, input: VehicleInput) -> Result<Vehicle, DomainError>;

    /// Overwrite every field of a vehicle
    async fn update(&self, id: Uuid, input: VehicleInput) -> Result<Vehicle, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_input_requires_name_tax_id_and_email() {
        let input = DriverInput {
            name: "Driver 1".to_string(),
            email: "driver1@example.com".to_string(),
            tax_id: "1234567890".to_string(),
            ..Default::default()
        };
        assert!(input.validate().is_ok());

        let blank_tax_id = DriverInput {
            tax_id: "   ".to_string(),
            ..input.clone()
        };
        match blank_tax_id.validate() {
            Err(DomainError::Validation(msg)) => assert_eq!(msg, "invalid tax id"),
            other => panic!("expected validation error, got {:?}", other),
        }

        let no_email = DriverInput {
            email: String::new(),
            ..input
        };
        assert!(matches!(no_email.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn vehicle_input_requires_brand_model_and_plate() {
        let input = VehicleInput {
            brand: "Scania".to_string(),
            model: "R500".to_string(),
            license_plate: "ABC123".to_string(),
            ..Default::default()
        };
        assert!(input.validate().is_ok());

        let no_plate = VehicleInput {
            license_plate: String::new(),
            ..input
        };
        match no_plate.validate() {
            Err(DomainError::Validation(msg)) => assert_eq!(msg, "invalid license plate"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn missing_keys_fail_validation_instead_of_parsing() {
        let driver: DriverInput =
            serde_json::from_str(r#"{"email":"a@b","tax_id":"1"}"#).expect("parse driver");
        match driver.validate() {
            Err(DomainError::Validation(msg)) => assert_eq!(msg, "invalid name"),
            other => panic!("expected validation error, got {:?}", other),
        }

        let vehicle: VehicleInput =
            serde_json::from_str(r#"{"brand":"Scania","license_plate":"ABC123"}"#)
                .expect("parse vehicle");
        match vehicle.validate() {
            Err(DomainError::Validation(msg)) => assert_eq!(msg, "invalid model"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
