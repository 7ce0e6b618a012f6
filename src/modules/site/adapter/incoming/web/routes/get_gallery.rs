use actix_web::{get, routes, web, Responder};
use tracing::debug;

use crate::{
    shared::api::PageResponse, site::application::use_cases::render_page::GalleryQuery, AppState,
};

#[routes]
#[get("/gallery")]
#[get("/gallery/")]
pub async fn get_gallery_handler(
    query: Result<web::Query<GalleryQuery>, actix_web::Error>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = match query {
        Ok(q) => q.into_inner(),
        Err(e) => {
            debug!("ignoring malformed gallery query: {}", e);
            GalleryQuery::default()
        }
    };

    let page = data.render_page_use_case.render_gallery(&query);
    PageResponse::ok(page.html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::content_fixtures::{sample_content, sample_photo};

    async fn get(uri: &str, state: AppState) -> (StatusCode, String) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_gallery_handler),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn gallery_is_served_with_and_without_trailing_slash() {
        for uri in ["/gallery", "/gallery/"] {
            let (status, body) = get(uri, TestAppStateBuilder::default().build()).await;
            assert_eq!(status, StatusCode::OK);
            assert!(body.contains("data-view=\"gallery\""));
        }
    }

    #[actix_web::test]
    async fn photo_query_opens_modal() {
        let mut content = sample_content();
        content.gallery = vec![sample_photo(1, "Dawn"), sample_photo(2, "Dusk")];
        let state = TestAppStateBuilder::default().with_content(content).build();

        let (_, body) = get("/gallery/?photo=2", state).await;

        assert!(body.contains(r#"<h3 class="modal__title" data-photo-field="title">Dusk</h3>"#));
        assert!(!body.contains(r#"data-photo-modal="" hidden="""#));
    }

    #[actix_web::test]
    async fn empty_gallery_shows_message() {
        let mut content = sample_content();
        content.gallery.clear();
        let state = TestAppStateBuilder::default().with_content(content).build();

        let (_, body) = get("/gallery/", state).await;

        assert!(body.contains("No photos yet. Add your photos to get started."));
        assert!(!body.contains("photo-card"));
    }

    #[actix_web::test]
    async fn malformed_photo_parameter_renders_closed_gallery() {
        let (status, body) = get("/gallery/?photo=dawn", TestAppStateBuilder::default().build()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"data-photo-modal="" hidden="""#));
    }
}
