use crate::models::{driver, driver_vehicle, vehicle};
use sea_orm::*;
use uuid::Uuid;

/// Insert one driver, one vehicle and the link between them.
///
/// Existing rows (matched by tax id and license plate) are reused.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let now = chrono::Utc::now().to_rfc3339();

    // 1. Driver
    let driver_id = match driver::Entity::find()
        .filter(driver::Column::TaxId.eq("1234567890"))
        .one(db)
        .await?
    {
        Some(existing) => existing.id,
        None => {
            let demo = driver::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set("Driver 1".to_owned()),
                email: Set("driver1@example.com".to_owned()),
                tax_id: Set("1234567890".to_owned()),
                driver_license: Set("ABC12345".to_owned()),
                date_of_birth: Set(Some("1990-01-01".to_owned())),
                deleted_at: Set(None),
                created_at: Set(now.clone()),
                updated_at: Set(now.clone()),
            };
            demo.insert(db).await?.id
        }
    };

    // 2. Vehicle
    let vehicle_id = match vehicle::Entity::find()
        .filter(vehicle::Column::LicensePlate.eq("ABC123"))
        .one(db)
        .await?
    {
        Some(existing) => existing.id,
        None => {
            let demo = vehicle::ActiveModel {
                id: Set(Uuid::new_v4()),
                brand: Set("Scania".to_owned()),
                model_name: Set("R500".to_owned()),
                year_of_manufacture: Set(2020),
                license_plate: Set("ABC123".to_owned()),
                color: Set("White".to_owned()),
                deleted_at: Set(None),
                created_at: Set(now.clone()),
                updated_at: Set(now),
            };
            demo.insert(db).await?.id
        }
    };

    // 3. Link
    let link = driver_vehicle::ActiveModel {
        driver_id: Set(driver_id),
        vehicle_id: Set(vehicle_id),
    };

    driver_vehicle::Entity::insert(link)
        .on_conflict(
            sea_orm::sea_query::OnConflict::columns([
                driver_vehicle::Column::DriverId,
                driver_vehicle::Column::VehicleId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .do_nothing()
        .exec(db)
        .await?;

    tracing::info!(
        "Seeded demo driver {} with vehicle {}",
        driver_id,
        vehicle_id
    );
    Ok(())
}
