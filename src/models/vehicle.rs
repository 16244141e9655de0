use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub brand: String,
    #[sea_orm(column_name = "model")]
    pub model_name: String,
    pub year_of_manufacture: i32,
    pub license_plate: String,
    pub color: String,
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

impl ActiveModelBehavior for ActiveModel {}
