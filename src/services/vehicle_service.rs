//! Vehicle Service - Business logic without HTTP layer

use std::sync::Arc;
use uuid::Uuid;

use super::relationships::{self, HardDeleteMode};
use crate::domain::{DomainError, Vehicle, VehicleInput, VehicleRepository};

#[derive(Clone)]
pub struct VehicleService {
    repo: Arc<dyn VehicleRepository>,
    hard_delete_mode: HardDeleteMode,
}

impl VehicleService {
    pub fn new(repo: Arc<dyn VehicleRepository>, hard_delete_mode: HardDeleteMode) -> Self {
        Self {
            repo,
            hard_delete_mode,
        }
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, DomainError> {
        self.repo
            .find_all()
            .await
            .map_err(|e| e.context("failed to list vehicles"))
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Vehicle>, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| e.context("failed to get vehicle"))
    }

    pub async fn create(&self, input: VehicleInput) -> Result<Vehicle, DomainError> {
        input.validate()?;

        let vehicle = self
            .repo
            .create(Uuid::new_v4(), input)
            .await
            .map_err(|e| e.context("failed to create vehicle"))?;

        tracing::info!("Created vehicle {}", vehicle.id);
        Ok(vehicle)
    }

    pub async fn update(&self, id: Uuid, input: VehicleInput) -> Result<Vehicle, DomainError> {
        input.validate()?;

        let vehicle = self
            .repo
            .update(id, input)
            .await
            .map_err(|e| e.context("failed to update vehicle"))?;

        tracing::info!("Updated vehicle {}", id);
        Ok(vehicle)
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo
            .soft_delete(id)
            .await
            .map_err(|e| e.context("failed to delete vehicle"))?;

        tracing::info!("Soft-deleted vehicle {}", id);
        Ok(())
    }

    pub async fn undelete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo
            .undelete(id)
            .await
            .map_err(|e| e.context("failed to recover vehicle"))?;

        tracing::info!("Recovered vehicle {}", id);
        Ok(())
    }

    /// Remove the vehicle and every driver link pointing at it
    pub async fn hard_delete(&self, id: Uuid) -> Result<(), DomainError> {
        relationships::remove(self.repo.as_ref(), id, self.hard_delete_mode)
            .await
            .map_err(|e| e.context("failed to hard delete vehicle"))?;

        tracing::info!("Hard-deleted vehicle {}", id);
        Ok(())
    }
}
