// src/api/handlers/system.rs
use actix_web::HttpResponse;

use crate::api::types::HealthResponse;

/// Service health
///
/// Liveness probe; reports the running version.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        success: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
