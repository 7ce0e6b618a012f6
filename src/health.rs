use actix_web::{get, web, Responder};
use serde::Serialize;

use crate::content::application::content_store::ContentSummary;
use crate::shared::api::ApiResponse;
use crate::AppState;
use tracing::warn;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    content: ContentSummary,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    ApiResponse::success(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Content is validated before the server binds
/// - Fails while the public asset directory is missing
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let public_dir_present = tokio::fs::metadata(&data.public_dir)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);

    if !public_dir_present {
        warn!(dir = %data.public_dir.display(), "readiness: public directory missing");
        return ApiResponse::service_unavailable(
            "PUBLIC_DIR_MISSING",
            "Public asset directory is not available",
        );
    }

    ApiResponse::success(ReadinessResponse {
        status: "ok",
        content: data.content.summary(),
    })
}
