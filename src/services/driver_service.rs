//! Driver Service - Business logic without HTTP layer

use std::sync::Arc;
use uuid::Uuid;

use super::relationships::{self, HardDeleteMode};
use crate::domain::{DomainError, Driver, DriverInput, DriverRepository, DriverWithVehicles};

#[derive(Clone)]
pub struct DriverService {
    repo: Arc<dyn DriverRepository>,
    hard_delete_mode: HardDeleteMode,
}

impl DriverService {
    pub fn new(repo: Arc<dyn DriverRepository>, hard_delete_mode: HardDeleteMode) -> Self {
        Self {
            repo,
            hard_delete_mode,
        }
    }

    /// List drivers that are not soft-deleted
    pub async fn list(&self) -> Result<Vec<Driver>, DomainError> {
        self.repo
            .find_all()
            .await
            .map_err(|e| e.context("failed to list drivers"))
    }

    /// Get a driver with its vehicles. `Ok(None)` when no such driver exists.
    pub async fn get(&self, id: Uuid) -> Result<Option<DriverWithVehicles>, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| e.context("failed to get driver"))
    }

    pub async fn create(&self, input: DriverInput) -> Result<Driver, DomainError> {
        input.validate()?;

        let driver = self
            .repo
            .create(Uuid::new_v4(), input)
            .await
            .map_err(|e| e.context("failed to create driver"))?;

        tracing::info!("Created driver {}", driver.id);
        Ok(driver)
    }

    /// Overwrite every field of a driver
    pub async fn update(&self, id: Uuid, input: DriverInput) -> Result<Driver, DomainError> {
        input.validate()?;

        let driver = self
            .repo
            .update(id, input)
            .await
            .map_err(|e| e.context("failed to update driver"))?;

        tracing::info!("Updated driver {}", id);
        Ok(driver)
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo
            .soft_delete(id)
            .await
            .map_err(|e| e.context("failed to delete driver"))?;

        tracing::info!("Soft-deleted driver {}", id);
        Ok(())
    }

    pub async fn undelete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo
            .undelete(id)
            .await
            .map_err(|e| e.context("failed to recover driver"))?;

        tracing::info!("Recovered driver {}", id);
        Ok(())
    }

    /// Remove the driver and every link to its vehicles
    pub async fn hard_delete(&self, id: Uuid) -> Result<(), DomainError> {
        relationships::remove(self.repo.as_ref(), id, self.hard_delete_mode)
            .await
            .map_err(|e| e.context("failed to hard delete driver"))?;

        tracing::info!("Hard-deleted driver {}", id);
        Ok(())
    }

    pub async fn subscribe(&self, driver_id: Uuid, vehicle_id: Uuid) -> Result<(), DomainError> {
        self.repo
            .subscribe(driver_id, vehicle_id)
            .await
            .map_err(|e| e.context("failed to subscribe vehicle"))?;

        tracing::info!("Subscribed vehicle {} to driver {}", vehicle_id, driver_id);
        Ok(())
    }

    pub async fn unsubscribe(&self, driver_id: Uuid, vehicle_id: Uuid) -> Result<(), DomainError> {
        self.repo
            .unsubscribe(driver_id, vehicle_id)
            .await
            .map_err(|e| e.context("failed to unsubscribe vehicle"))?;

        tracing::info!(
            "Unsubscribed vehicle {} from driver {}",
            vehicle_id,
            driver_id
        );
        Ok(())
    }
}
