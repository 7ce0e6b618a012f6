// src/shared/api/response.rs
use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use serde::Serialize;

/// JSON envelope used by the operational endpoints (`/health`, `/ready`).
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }

    pub fn service_unavailable(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::SERVICE_UNAVAILABLE, code, message)
    }
}

/// HTML page responses.
pub struct PageResponse;

impl PageResponse {
    pub fn ok(html: String) -> HttpResponse {
        Self::with_status(StatusCode::OK, html)
    }

    pub fn not_found(html: String) -> HttpResponse {
        Self::with_status(StatusCode::NOT_FOUND, html)
    }

    pub fn with_status(status: StatusCode, html: String) -> HttpResponse {
        HttpResponse::build(status)
            .insert_header((header::CONTENT_TYPE, "text/html; charset=utf-8"))
            .body(html)
    }

    /// Static asset body with an explicit content type.
    pub fn asset(
        content_type: &str,
        body: impl actix_web::body::MessageBody + 'static,
    ) -> HttpResponse {
        HttpResponse::Ok()
            .insert_header((header::CONTENT_TYPE, content_type.to_string()))
            .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
            .body(body)
    }

    pub fn redirect(location: &str) -> HttpResponse {
        HttpResponse::PermanentRedirect()
            .insert_header((header::LOCATION, location.to_string()))
            .finish()
    }
}
