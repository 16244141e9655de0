//! SeaORM implementation of VehicleRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::lifecycle;
use crate::domain::{DomainError, EntityLifecycle, Vehicle, VehicleInput, VehicleRepository};
use crate::models::driver_vehicle;
use crate::models::vehicle::{self, ActiveModel, Column, Entity as VehicleEntity};

impl From<vehicle::Model> for Vehicle {
    fn from(model: vehicle::Model) -> Self {
        Self {
            id: model.id,
            brand: model.brand,
            model: model.model_name,
            year_of_manufacture: model.year_of_manufacture,
            license_plate: model.license_plate,
            color: model.color,
            deleted_at: model.deleted_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// SeaORM-based implementation of VehicleRepository
pub struct SeaOrmVehicleRepository {
    db: DatabaseConnection,
}

impl SeaOrmVehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityLifecycle for SeaOrmVehicleRepository {
    async fn soft_delete(&self, id: Uuid) -> Result<(), DomainError> {
        let now = chrono::Utc::now().to_rfc3339();
        let rows = lifecycle::set_deleted_at::<VehicleEntity, _>(
            &self.db,
            Column::Id,
            Column::DeletedAt,
            id,
            Some(now),
        )
        .await?;
        lifecycle::found(rows)
    }

    async fn undelete(&self, id: Uuid) -> Result<(), DomainError> {
        let rows = lifecycle::set_deleted_at::<VehicleEntity, _>(
            &self.db,
            Column::Id,
            Column::DeletedAt,
            id,
            None,
        )
        .await?;
        lifecycle::found(rows)
    }

    async fn unrelate(&self, id: Uuid) -> Result<u64, DomainError> {
        Ok(lifecycle::delete_links(&self.db, driver_vehicle::Column::VehicleId, id).await?)
    }

    async fn hard_delete(&self, id: Uuid) -> Result<(), DomainError> {
        let rows = lifecycle::delete_row::<VehicleEntity, _>(&self.db, Column::Id, id).await?;
        lifecycle::found(rows)
    }

    async fn purge(&self, id: Uuid) -> Result<(), DomainError> {
        lifecycle::purge::<VehicleEntity, _>(
            &self.db,
            driver_vehicle::Column::VehicleId,
            Column::Id,
            id,
        )
        .await
    }
}

#[async_trait]
impl VehicleRepository for SeaOrmVehicleRepository {
    async fn find_all(&self) -> Result<Vec<Vehicle>, DomainError> {
        let vehicles = VehicleEntity::find()
            .filter(Column::DeletedAt.is_null())
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(vehicles.into_iter().map(Vehicle::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, DomainError> {
        let vehicle = VehicleEntity::find_by_id(id).one(&self.db).await?;
        Ok(vehicle.map(Vehicle::from))
    }

    async fn create(&self, id: Uuid, input: VehicleInput) -> Result<Vehicle, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let vehicle = ActiveModel {
            id: Set(id),
            brand: Set(input.brand),
            model_name: Set(input.model),
            year_of_manufacture: Set(input.year_of_manufacture),
            license_plate: Set(input.license_plate),
            color: Set(input.color),
            deleted_at: Set(None),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        let result = vehicle.insert(&self.db).await?;
        Ok(Vehicle::from(result))
    }

    async fn update(&self, id: Uuid, input: VehicleInput) -> Result<Vehicle, DomainError> {
        let existing = VehicleEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active_model: ActiveModel = existing.into();
        active_model.brand = Set(input.brand);
        active_model.model_name = Set(input.model);
        active_model.year_of_manufacture = Set(input.year_of_manufacture);
        active_model.license_plate = Set(input.license_plate);
        active_model.color = Set(input.color);
        active_model.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let model = active_model.update(&self.db).await?;
        Ok(Vehicle::from(model))
    }
}
