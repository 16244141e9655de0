pub mod drivers;
pub mod error;
pub mod health;
pub mod vehicles;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/healthz", get(health::health_check))
        // Drivers
        .route(
            "/drivers",
            get(drivers::list_drivers).post(drivers::create_driver),
        )
        .route(
            "/drivers/:id",
            get(drivers::get_driver)
                .put(drivers::update_driver)
                .delete(drivers::delete_driver),
        )
        .route("/drivers/:id/undelete", post(drivers::undelete_driver))
        .route("/drivers/:id/hard", delete(drivers::hard_delete_driver))
        .route("/drivers/:id/vehicles", post(drivers::subscribe_vehicle))
        .route(
            "/drivers/:id/vehicles/:vehicle_id",
            delete(drivers::unsubscribe_vehicle),
        )
        // Vehicles
        .route(
            "/vehicles",
            get(vehicles::list_vehicles).post(vehicles::create_vehicle),
        )
        .route(
            "/vehicles/:id",
            get(vehicles::get_vehicle)
                .put(vehicles::update_vehicle)
                .delete(vehicles::delete_vehicle),
        )
        .route("/vehicles/:id/undelete", post(vehicles::undelete_vehicle))
        .route("/vehicles/:id/hard", delete(vehicles::hard_delete_vehicle))
        .with_state(state)
}
