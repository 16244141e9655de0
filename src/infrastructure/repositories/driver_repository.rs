//! SeaORM implementation of DriverRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};
use uuid::Uuid;

use super::lifecycle;
use crate::domain::{
    assemble, DomainError, Driver, DriverInput, DriverRepository, DriverVehicleRow,
    DriverWithVehicles, EntityLifecycle,
};
use crate::models::driver::{self, ActiveModel, Column, Entity as DriverEntity};
use crate::models::driver_vehicle::{self, Entity as DriverVehicleEntity};
use crate::models::vehicle;

impl From<driver::Model> for Driver {
    fn from(model: driver::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            tax_id: model.tax_id,
            driver_license: model.driver_license,
            date_of_birth: model.date_of_birth,
            deleted_at: model.deleted_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// SeaORM-based implementation of DriverRepository
pub struct SeaOrmDriverRepository {
    db: DatabaseConnection,
}

impl SeaOrmDriverRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityLifecycle for SeaOrmDriverRepository {
    async fn soft_delete(&self, id: Uuid) -> Result<(), DomainError> {
        let now = chrono::Utc::now().to_rfc3339();
        let rows = lifecycle::set_deleted_at::<DriverEntity, _>(
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
        let rows = lifecycle::set_deleted_at::<DriverEntity, _>(
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
        Ok(lifecycle::delete_links(&self.db, driver_vehicle::Column::DriverId, id).await?)
    }

    async fn hard_delete(&self, id: Uuid) -> Result<(), DomainError> {
        let rows = lifecycle::delete_row::<DriverEntity, _>(&self.db, Column::Id, id).await?;
        lifecycle::found(rows)
    }

    async fn purge(&self, id: Uuid) -> Result<(), DomainError> {
        lifecycle::purge::<DriverEntity, _>(
            &self.db,
            driver_vehicle::Column::DriverId,
            Column::Id,
            id,
        )
        .await
    }
}

#[async_trait]
impl DriverRepository for SeaOrmDriverRepository {
    async fn find_all(&self) -> Result<Vec<Driver>, DomainError> {
        let drivers = DriverEntity::find()
            .filter(Column::DeletedAt.is_null())
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(drivers.into_iter().map(Driver::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<DriverWithVehicles>, DomainError> {
        let rows = DriverEntity::find()
            .select_only()
            .column_as(Column::Id, "driver_id")
            .column(Column::Name)
            .column(Column::Email)
            .column(Column::TaxId)
            .column(Column::DriverLicense)
            .column(Column::DateOfBirth)
            .column(Column::DeletedAt)
            .column(Column::CreatedAt)
            .column(Column::UpdatedAt)
            .column_as(vehicle::Column::Id, "vehicle_id")
            .column_as(vehicle::Column::Brand, "vehicle_brand")
            .column_as(vehicle::Column::ModelName, "vehicle_model")
            .column_as(
                vehicle::Column::YearOfManufacture,
                "vehicle_year_of_manufacture",
            )
            .column_as(vehicle::Column::LicensePlate, "vehicle_license_plate")
            .column_as(vehicle::Column::Color, "vehicle_color")
            .column_as(vehicle::Column::DeletedAt, "vehicle_deleted_at")
            .column_as(vehicle::Column::CreatedAt, "vehicle_created_at")
            .column_as(vehicle::Column::UpdatedAt, "vehicle_updated_at")
            .join(JoinType::LeftJoin, driver::Relation::DriverVehicle.def())
            .join(JoinType::LeftJoin, driver_vehicle::Relation::Vehicle.def())
            .filter(Column::Id.eq(id))
            .into_model::<DriverVehicleRow>()
            .all(&self.db)
            .await?;

        Ok(assemble(rows))
    }

    async fn create(&self, id: Uuid, input: DriverInput) -> Result<Driver, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let driver = ActiveModel {
            id: Set(id),
            name: Set(input.name),
            email: Set(input.email),
            tax_id: Set(input.tax_id),
            driver_license: Set(input.driver_license),
            date_of_birth: Set(input.date_of_birth),
            deleted_at: Set(None),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        let result = driver.insert(&self.db).await?;
        Ok(Driver::from(result))
    }

    async fn update(&self, id: Uuid, input: DriverInput) -> Result<Driver, DomainError> {
        let existing = DriverEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active_model: ActiveModel = existing.into();
        active_model.name = Set(input.name);
        active_model.email = Set(input.email);
        active_model.tax_id = Set(input.tax_id);
        active_model.driver_license = Set(input.driver_license);
        active_model.date_of_birth = Set(input.date_of_birth);
        active_model.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let model = active_model.update(&self.db).await?;
        Ok(Driver::from(model))
    }

    async fn subscribe(&self, driver_id: Uuid, vehicle_id: Uuid) -> Result<(), DomainError> {
        let existing = DriverVehicleEntity::find_by_id((driver_id, vehicle_id))
            .one(&self.db)
            .await?;

        if existing.is_some() {
            return Err(DomainError::Conflict(format!(
                "vehicle {} is already subscribed to driver {}",
                vehicle_id, driver_id
            )));
        }

        let link = driver_vehicle::ActiveModel {
            driver_id: Set(driver_id),
            vehicle_id: Set(vehicle_id),
        };

        // A concurrent insert surfaces as a unique violation, mapped to Conflict
        link.insert(&self.db).await?;
        Ok(())
    }

    async fn unsubscribe(&self, driver_id: Uuid, vehicle_id: Uuid) -> Result<(), DomainError> {
        DriverVehicleEntity::delete_many()
            .filter(driver_vehicle::Column::DriverId.eq(driver_id))
            .filter(driver_vehicle::Column::VehicleId.eq(vehicle_id))
            .exec(&self.db)
            .await?;

        Ok(())
    }
}
