use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::{
    shared::api::PageResponse,
    site::{adapter::incoming::web::routes::public_file_handler, application::assets},
    AppState,
};

/// Embedded stylesheet and script; other files under `/assets` come from
/// the public directory.
#[get("/assets/{file}")]
pub async fn get_site_asset_handler(
    req: HttpRequest,
    file: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match assets::find(&format!("assets/{}", file.into_inner())) {
        Some(asset) => PageResponse::asset(asset.content_type, asset.body),
        None => public_file_handler(req, data).await,
    }
}
