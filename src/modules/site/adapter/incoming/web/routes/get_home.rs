use actix_web::{get, web, Responder};
use tracing::debug;

use crate::{
    shared::api::PageResponse,
    site::{application::use_cases::render_page::HomeQuery, domain::view_context::View},
    AppState,
};

#[get("/")]
pub async fn get_home_handler(
    query: Result<web::Query<HomeQuery>, actix_web::Error>,
    data: web::Data<AppState>,
) -> impl Responder {
    // Unparseable toggles fall back to the initial state instead of a 400.
    let query = match query {
        Ok(q) => q.into_inner(),
        Err(e) => {
            debug!("ignoring malformed home query: {}", e);
            HomeQuery::default()
        }
    };

    let page = data.render_page_use_case.render_home(&query);
    PageResponse::ok(page.html)
}

/// The bare base path (`/portfolio`) redirects to its trailing-slash form.
pub async fn redirect_to_home_handler(data: web::Data<AppState>) -> impl Responder {
    PageResponse::redirect(&data.base_path.page(View::Home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::content_fixtures::{projects, sample_content};

    async fn body_of(uri: &str, state: AppState) -> (StatusCode, String) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_home_handler),
        )
        .await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn eight_projects() -> AppState {
        let mut content = sample_content();
        content.projects = projects(8);
        TestAppStateBuilder::default().with_content(content).build()
    }

    // ===== Success =====

    #[actix_web::test]
    async fn home_renders_first_six_projects_and_view_all_control() {
        let (status, body) = body_of("/", eight_projects()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("class=\"project-card\"").count(), 8);
        assert_eq!(body.matches("class=\"project-card\" data-overflow=\"\" hidden=\"\"").count(), 2);
        assert!(body.contains(">View All Projects</a>"));
        assert!(body.contains(r#"<script src="/assets/site.js" defer="">"#));
    }

    #[actix_web::test]
    async fn show_all_query_renders_every_project() {
        let (status, body) = body_of("/?show_all=true", eight_projects()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("class=\"project-card\"").count(), 8);
        assert!(!body.contains(r#"data-overflow="" hidden="""#));
        assert!(body.contains(">Show Less</a>"));
    }

    #[actix_web::test]
    async fn contact_links_to_mailto() {
        let mut content = sample_content();
        content.personal.email = "a@b.com".to_string();
        let state = TestAppStateBuilder::default().with_content(content).build();

        let (_, body) = body_of("/", state).await;

        assert!(body.contains(r#"href="mailto:a@b.com""#));
    }

    #[actix_web::test]
    async fn response_is_html() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(TestAppStateBuilder::default().build()))
                .service(get_home_handler),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
    }

    // ===== Malformed input =====

    #[actix_web::test]
    async fn malformed_query_falls_back_to_initial_state() {
        let (status, body) = body_of("/?video=abc&show_all=maybe", eight_projects()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches(r#"data-overflow="" hidden="""#).count(), 2);
    }

    #[actix_web::test]
    async fn bare_base_path_redirects_to_trailing_slash() {
        let state = TestAppStateBuilder::default().with_base_path("/portfolio").build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .route("/portfolio", web::get().to(redirect_to_home_handler)),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/portfolio").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(resp.headers().get("location").unwrap(), "/portfolio/");
    }
}
