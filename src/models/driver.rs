use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "drivers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub tax_id: String,
    pub driver_license: String,
    pub date_of_birth: Option<String>,
    /// Soft-delete marker (RFC 3339). NULL while the driver is active.
    pub deleted_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::driver_vehicle::Entity")]
    DriverVehicle,
}

impl Related<super::driver_vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DriverVehicle.def()
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        super::driver_vehicle::Relation::Vehicle.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::driver_vehicle::Relation::Driver.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
