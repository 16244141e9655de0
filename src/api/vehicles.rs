//! Vehicle API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use uuid::Uuid;

use super::error::{error_response, not_found};
use crate::domain::{Vehicle, VehicleInput};
use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/vehicles",
    responses((status = 200, description = "Active vehicles", body = [Vehicle]))
)]
pub async fn list_vehicles(State(state): State<AppState>) -> impl IntoResponse {
    match state.vehicles.list().await {
        Ok(vehicles) => (StatusCode::OK, Json(vehicles)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    params(("id" = Uuid, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Vehicle", body = Vehicle),
        (status = 404, description = "Vehicle not found")
    )
)]
pub async fn get_vehicle(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match state.vehicles.get(id).await {
        Ok(Some(vehicle)) => (StatusCode::OK, Json(vehicle)).into_response(),
        Ok(None) => not_found("Vehicle"),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/vehicles",
    request_body = VehicleInput,
    responses(
        (status = 201, description = "Vehicle created", body = Vehicle),
        (status = 400, description = "Missing required field")
    )
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(payload): Json<VehicleInput>,
) -> impl IntoResponse {
    match state.vehicles.create(payload).await {
        Ok(vehicle) => (StatusCode::CREATED, Json(vehicle)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/vehicles/{id}",
    params(("id" = Uuid, Path, description = "Vehicle id")),
    request_body = VehicleInput,
    responses(
        (status = 200, description = "Vehicle updated", body = Vehicle),
        (status = 404, description = "Vehicle not found")
    )
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VehicleInput>,
) -> impl IntoResponse {
    match state.vehicles.update(id, payload).await {
        Ok(vehicle) => (StatusCode::OK, Json(vehicle)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/vehicles/{id}",
    params(("id" = Uuid, Path, description = "Vehicle id")),
    responses((status = 200, description = "Vehicle soft-deleted"))
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.vehicles.soft_delete(id).await {
        Ok(()) => (StatusCode::OK, Json(json!({"message": "Vehicle deleted"}))).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/vehicles/{id}/undelete",
    params(("id" = Uuid, Path, description = "Vehicle id")),
    responses((status = 200, description = "Vehicle restored"))
)]
pub async fn undelete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.vehicles.undelete(id).await {
        Ok(()) => (StatusCode::OK, Json(json!({"message": "Vehicle restored"}))).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/vehicles/{id}/hard",
    params(("id" = Uuid, Path, description = "Vehicle id")),
    responses((status = 200, description = "Vehicle and its links removed"))
)]
pub async fn hard_delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.vehicles.hard_delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Vehicle permanently deleted"})),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
