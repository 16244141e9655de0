use crate::api;
use crate::domain::{Driver, DriverInput, DriverWithVehicles, Vehicle, VehicleInput};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::drivers::list_drivers,
        api::drivers::get_driver,
        api::drivers::create_driver,
        api::drivers::update_driver,
        api::drivers::delete_driver,
        api::drivers::undelete_driver,
        api::drivers::hard_delete_driver,
        api::drivers::subscribe_vehicle,
        api::drivers::unsubscribe_vehicle,
        api::vehicles::list_vehicles,
        api::vehicles::get_vehicle,
        api::vehicles::create_vehicle,
        api::vehicles::update_vehicle,
        api::vehicles::delete_vehicle,
        api::vehicles::undelete_vehicle,
        api::vehicles::hard_delete_vehicle,
    ),
    components(
        schemas(
            Driver,
            DriverInput,
            DriverWithVehicles,
            Vehicle,
            VehicleInput,
            api::drivers::SubscribeRequest,
        )
    ),
    tags(
        (name = "fleet-registry", description = "Drivers, vehicles and their subscriptions")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_resource() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/healthz",
            "/drivers",
            "/drivers/{id}",
            "/drivers/{id}/hard",
            "/drivers/{id}/undelete",
            "/drivers/{id}/vehicles",
            "/drivers/{id}/vehicles/{vehicle_id}",
            "/vehicles",
            "/vehicles/{id}",
            "/vehicles/{id}/hard",
            "/vehicles/{id}/undelete",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
    }
}
