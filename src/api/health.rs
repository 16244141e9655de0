use axum::http::StatusCode;

#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 204, description = "Service is alive")
    )
)]
pub async fn health_check() -> StatusCode {
    StatusCode::NO_CONTENT
}
