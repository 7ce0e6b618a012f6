use std::path::{Component, Path, PathBuf};

use actix_files::NamedFile;
use actix_web::{http::Method, web, HttpRequest, HttpResponse};
use tracing::{debug, warn};

use crate::{shared::api::PageResponse, AppState};

/// Fallback for every unmatched path: a file from the public directory, or
/// the HTML 404 page. `NamedFile` answers range and conditional requests, so
/// demo videos can seek.
pub async fn public_file_handler(req: HttpRequest, data: web::Data<AppState>) -> HttpResponse {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return not_found(&data);
    }

    let path = req.path();
    let relative = path
        .strip_prefix(data.base_path.as_str())
        .unwrap_or(path);

    let Some(file) = resolve(&data.public_dir, relative) else {
        warn!(path = %path, "rejected public file path");
        return not_found(&data);
    };

    let is_file = tokio::fs::metadata(&file)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false);
    if !is_file {
        debug!(path = %path, "public file not found");
        return not_found(&data);
    }

    match NamedFile::open_async(&file).await {
        Ok(named) => named.into_response(&req),
        Err(e) => {
            warn!(path = %path, error = %e, "public file unreadable");
            not_found(&data)
        }
    }
}

fn not_found(data: &AppState) -> HttpResponse {
    PageResponse::not_found(data.render_page_use_case.render_not_found().html)
}

/// Maps a percent-encoded request path onto the public directory. Each
/// segment is decoded on its own and must be a plain file name; `..`, `.`,
/// embedded separators and empty paths yield `None`.
fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let mut file = root.to_path_buf();
    let mut segments = 0;

    for raw in request_path.split('/').filter(|s| !s.is_empty()) {
        let segment = urlencoding::decode(raw).ok()?;
        if segment.contains(['/', '\\']) {
            return None;
        }

        let mut components = Path::new(segment.as_ref()).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) => file.push(part),
            _ => return None,
        }
        segments += 1;
    }

    (segments > 0).then_some(file)
}
