use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use fleet_registry::db;
use fleet_registry::infrastructure::AppState;
use fleet_registry::models::driver_vehicle;
use fleet_registry::server;
use fleet_registry::services::HardDeleteMode;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{Value, json};
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a test app state
async fn setup_test_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db, HardDeleteMode::Sequential)
}

fn app(state: &AppState) -> Router {
    server::build_router(state.clone(), &[])
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().uri(uri).method(method);
    let req = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn driver_payload() -> Value {
    json!({
        "name": "Driver 1",
        "email": "driver1@example.com",
        "tax_id": "1234567890",
        "driver_license": "ABC12345"
    })
}

fn vehicle_payload() -> Value {
    json!({
        "brand": "Scania",
        "model": "R500",
        "year_of_manufacture": 2020,
        "license_plate": "ABC123",
        "color": "White"
    })
}

#[tokio::test]
async fn test_healthz_has_no_body() {
    let state = setup_test_state().await;
    let (status, body) = send(&app(&state), "GET", "/healthz", None).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_driver_vehicle_lifecycle_over_http() {
    let state = setup_test_state().await;
    let app = app(&state);

    // Create both sides
    let (status, driver) = send(&app, "POST", "/drivers", Some(driver_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    let driver_id = driver["id"].as_str().unwrap().to_string();
    assert!(driver["deleted_at"].is_null());

    let (status, vehicle) = send(&app, "POST", "/vehicles", Some(vehicle_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    let vehicle_id = vehicle["id"].as_str().unwrap().to_string();

    // Subscribe
    let (status, _) = send(
        &app,
        "POST",
        &format!("/drivers/{}/vehicles", driver_id),
        Some(json!({ "vehicle_id": vehicle_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/drivers/{}/vehicles", driver_id),
        Some(json!({ "vehicle_id": vehicle_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Aggregate read
    let (status, aggregate) = send(&app, "GET", &format!("/drivers/{}", driver_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(aggregate["name"], "Driver 1");
    assert_eq!(aggregate["vehicles"].as_array().unwrap().len(), 1);
    assert_eq!(aggregate["vehicles"][0]["model"], "R500");

    // Hard delete removes the row and its link
    let (status, _) = send(&app, "DELETE", &format!("/drivers/{}/hard", driver_id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", &format!("/drivers/{}", driver_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let links = driver_vehicle::Entity::find()
        .count(state.db())
        .await
        .unwrap();
    assert_eq!(links, 0);
}

#[tokio::test]
async fn test_unsubscribe_over_http() {
    let state = setup_test_state().await;
    let app = app(&state);

    let (_, driver) = send(&app, "POST", "/drivers", Some(driver_payload())).await;
    let (_, vehicle) = send(&app, "POST", "/vehicles", Some(vehicle_payload())).await;
    let driver_id = driver["id"].as_str().unwrap();
    let vehicle_id = vehicle["id"].as_str().unwrap();

    send(
        &app,
        "POST",
        &format!("/drivers/{}/vehicles", driver_id),
        Some(json!({ "vehicle_id": vehicle_id })),
    )
    .await;

    let uri = format!("/drivers/{}/vehicles/{}", driver_id, vehicle_id);
    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    // Second removal is still fine
    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, aggregate) = send(&app, "GET", &format!("/drivers/{}", driver_id), None).await;
    assert!(aggregate["vehicles"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_soft_delete_and_undelete_over_http() {
    let state = setup_test_state().await;
    let app = app(&state);

    let (_, vehicle) = send(&app, "POST", "/vehicles", Some(vehicle_payload())).await;
    let vehicle_id = vehicle["id"].as_str().unwrap();

    let (status, _) = send(&app, "DELETE", &format!("/vehicles/{}", vehicle_id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = send(&app, "GET", "/vehicles", None).await;
    assert!(list.as_array().unwrap().is_empty());

    let (status, fetched) = send(&app, "GET", &format!("/vehicles/{}", vehicle_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(fetched["deleted_at"].is_string());

    let (status, _) = send(
        &app,
        "POST",
        &format!("/vehicles/{}/undelete", vehicle_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = send(&app, "GET", "/vehicles", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_validation_errors_are_bad_requests() {
    let state = setup_test_state().await;
    let app = app(&state);

    let mut payload = driver_payload();
    payload["email"] = json!("");
    let (status, body) = send(&app, "POST", "/drivers", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation error: invalid email");

    let mut payload = vehicle_payload();
    payload["brand"] = json!("  ");
    let (status, _) = send(&app, "POST", "/vehicles", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_required_keys_are_bad_requests() {
    let state = setup_test_state().await;
    let app = app(&state);

    let payload = json!({ "email": "a@b", "tax_id": "1" });
    let (status, body) = send(&app, "POST", "/drivers", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation error: invalid name");

    let payload = json!({ "brand": "Scania", "model": "R500" });
    let (status, body) = send(&app, "POST", "/vehicles", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation error: invalid license plate");

    let (_, list) = send(&app, "GET", "/drivers", None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_entities_are_not_found() {
    let state = setup_test_state().await;
    let app = app(&state);
    let missing = uuid::Uuid::new_v4();

    let (status, _) = send(&app, "GET", &format!("/vehicles/{}", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/drivers/{}", missing),
        Some(driver_payload()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &format!("/vehicles/{}/hard", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_over_http() {
    let state = setup_test_state().await;
    let app = app(&state);

    let (_, driver) = send(&app, "POST", "/drivers", Some(driver_payload())).await;
    let driver_id = driver["id"].as_str().unwrap();

    let mut payload = driver_payload();
    payload["name"] = json!("Driver Renamed");
    payload["date_of_birth"] = json!("1985-05-05");
    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/drivers/{}", driver_id),
        Some(payload),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Driver Renamed");
    assert_eq!(updated["date_of_birth"], "1985-05-05");

    let (_, list) = send(&app, "GET", "/drivers", None).await;
    assert_eq!(list[0]["name"], "Driver Renamed");
}
