use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fleet_registry::infrastructure::AppState;
use fleet_registry::{config, db, seed, server};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fleet_registry=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = config::Config::from_env();

    // Initialize database
    let db = db::init_db(&config.database_url)
        .await
        .expect("Failed to initialize database");

    if config.seed_demo {
        tracing::info!("Seeding demo data...");
        if let Err(e) = seed::seed_demo_data(&db).await {
            tracing::error!("Failed to seed data: {}", e);
        }
    }

    tracing::info!("Hard delete mode: {:?}", config.hard_delete_mode);
    let state = AppState::new(db, config.hard_delete_mode);
    let app = server::build_router(state, &config.cors_allowed_origins);

    server::serve(app, config.port)
        .await
        .expect("Failed to start server");
}
