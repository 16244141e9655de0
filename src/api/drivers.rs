//! Driver API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use super::error::{error_response, not_found};
use crate::domain::{Driver, DriverInput, DriverWithVehicles};
use crate::infrastructure::AppState;

/// Request body for subscribing a vehicle to a driver
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubscribeRequest {
    pub vehicle_id: Uuid,
}

#[utoipa::path(
    get,
    path = "/drivers",
    responses((status = 200, description = "Active drivers", body = [Driver]))
)]
pub async fn list_drivers(State(state): State<AppState>) -> impl IntoResponse {
    match state.drivers.list().await {
        Ok(drivers) => (StatusCode::OK, Json(drivers)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/drivers/{id}",
    params(("id" = Uuid, Path, description = "Driver id")),
    responses(
        (status = 200, description = "Driver with its vehicles", body = DriverWithVehicles),
        (status = 404, description = "Driver not found")
    )
)]
pub async fn get_driver(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match state.drivers.get(id).await {
        Ok(Some(driver)) => (StatusCode::OK, Json(driver)).into_response(),
        Ok(None) => not_found("Driver"),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/drivers",
    request_body = DriverInput,
    responses(
        (status = 201, description = "Driver created", body = Driver),
        (status = 400, description = "Missing required field")
    )
)]
pub async fn create_driver(
    State(state): State<AppState>,
    Json(payload): Json<DriverInput>,
) -> impl IntoResponse {
    match state.drivers.create(payload).await {
        Ok(driver) => (StatusCode::CREATED, Json(driver)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/drivers/{id}",
    params(("id" = Uuid, Path, description = "Driver id")),
    request_body = DriverInput,
    responses(
        (status = 200, description = "Driver updated", body = Driver),
        (status = 404, description = "Driver not found")
    )
)]
pub async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DriverInput>,
) -> impl IntoResponse {
    match state.drivers.update(id, payload).await {
        Ok(driver) => (StatusCode::OK, Json(driver)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/drivers/{id}",
    params(("id" = Uuid, Path, description = "Driver id")),
    responses((status = 200, description = "Driver soft-deleted"))
)]
pub async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.drivers.soft_delete(id).await {
        Ok(()) => (StatusCode::OK, Json(json!({"message": "Driver deleted"}))).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/drivers/{id}/undelete",
    params(("id" = Uuid, Path, description = "Driver id")),
    responses((status = 200, description = "Driver restored"))
)]
pub async fn undelete_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.drivers.undelete(id).await {
        Ok(()) => (StatusCode::OK, Json(json!({"message": "Driver restored"}))).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/drivers/{id}/hard",
    params(("id" = Uuid, Path, description = "Driver id")),
    responses((status = 200, description = "Driver and its links removed"))
)]
pub async fn hard_delete_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.drivers.hard_delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Driver permanently deleted"})),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/drivers/{id}/vehicles",
    params(("id" = Uuid, Path, description = "Driver id")),
    request_body = SubscribeRequest,
    responses(
        (status = 201, description = "Vehicle subscribed"),
        (status = 409, description = "Vehicle already subscribed")
    )
)]
pub async fn subscribe_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SubscribeRequest>,
) -> impl IntoResponse {
    match state.drivers.subscribe(id, payload.vehicle_id).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({"message": "Vehicle subscribed"})),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/drivers/{id}/vehicles/{vehicle_id}",
    params(
        ("id" = Uuid, Path, description = "Driver id"),
        ("vehicle_id" = Uuid, Path, description = "Vehicle id")
    ),
    responses((status = 200, description = "Vehicle unsubscribed"))
)]
pub async fn unsubscribe_vehicle(
    State(state): State<AppState>,
    Path((id, vehicle_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    match state.drivers.unsubscribe(id, vehicle_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Vehicle unsubscribed"})),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
