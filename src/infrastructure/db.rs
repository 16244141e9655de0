use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

fn uuid_column(backend: DatabaseBackend) -> &'static str {
    match backend {
        DatabaseBackend::Postgres => "UUID",
        DatabaseBackend::MySql => "BINARY(16)",
        DatabaseBackend::Sqlite => "BLOB",
    }
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let uuid = uuid_column(backend);

    db.execute(Statement::from_string(
        backend,
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS drivers (
                id {uuid} PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                tax_id TEXT NOT NULL,
                driver_license TEXT NOT NULL,
                date_of_birth TEXT,
                deleted_at TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#
        ),
    ))
    .await?;

    db.execute(Statement::from_string(
        backend,
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS vehicles (
                id {uuid} PRIMARY KEY,
                brand TEXT NOT NULL,
                model TEXT NOT NULL,
                year_of_manufacture INTEGER NOT NULL,
                license_plate TEXT NOT NULL,
                color TEXT NOT NULL,
                deleted_at TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#
        ),
    ))
    .await?;

    // No cascade: links must be removed before either side is hard-deleted
    db.execute(Statement::from_string(
        backend,
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS drivers_vehicles (
                driver_id {uuid} NOT NULL,
                vehicle_id {uuid} NOT NULL,
                PRIMARY KEY (driver_id, vehicle_id),
                FOREIGN KEY (driver_id) REFERENCES drivers(id),
                FOREIGN KEY (vehicle_id) REFERENCES vehicles(id)
            )
            "#
        ),
    ))
    .await?;

    db.execute(Statement::from_string(
        backend,
        "CREATE INDEX IF NOT EXISTS idx_drivers_vehicles_vehicle ON drivers_vehicles(vehicle_id)"
            .to_owned(),
    ))
    .await?;

    Ok(())
}
