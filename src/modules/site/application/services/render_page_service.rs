use tracing::debug;

use crate::content::application::content_store::ContentStore;
use crate::site::application::ports::outgoing::Clock;
use crate::site::application::use_cases::render_page::{
    GalleryQuery, HomeQuery, RenderPageUseCase, RenderedPage,
};
use crate::site::application::views::{gallery, pages, projects};
use crate::site::domain::interaction::HomeState;
use crate::site::domain::view_context::{BasePath, View, ViewContext};

pub struct RenderPageService<C>
where
    C: Clock,
{
    content: ContentStore,
    base_path: BasePath,
    clock: C,
}

impl<C> RenderPageService<C>
where
    C: Clock,
{
    pub fn new(content: ContentStore, base_path: BasePath, clock: C) -> Self {
        Self {
            content,
            base_path,
            clock,
        }
    }

    fn context(&self, view: View) -> ViewContext {
        ViewContext::new(view, self.base_path.clone(), self.clock.current_year())
    }
}

impl<C> RenderPageUseCase for RenderPageService<C>
where
    C: Clock,
{
    fn render_home(&self, query: &HomeQuery) -> RenderedPage {
        let mut ctx = self.context(View::Home);
        ctx.scroll_y = query.y.unwrap_or(0.0);

        if let Some(id) = query.video.filter(|id| self.content.project((*id).into()).is_none()) {
            debug!(project = id, "ignoring video for unknown project");
        }

        let state = HomeState {
            nav: query.nav_state(),
            projects: projects::state_from(
                query.show_all,
                query.video,
                &query.expanded_ids(),
                &self.content.projects,
            ),
        };
        debug!(?state, "rendering home view");

        RenderedPage {
            html: pages::home(&ctx, &self.content, &state),
        }
    }

    fn render_gallery(&self, query: &GalleryQuery) -> RenderedPage {
        let ctx = self.context(View::Gallery);
        if let Some(id) = query.photo.filter(|id| self.content.photo((*id).into()).is_none()) {
            debug!(photo = id, "ignoring unknown photo");
        }
        let state = gallery::state_from(query.photo, &self.content.gallery);
        debug!(?state, "rendering gallery view");

        RenderedPage {
            html: pages::gallery(&ctx, &self.content, &state),
        }
    }

    fn render_not_found(&self) -> RenderedPage {
        RenderedPage {
            html: pages::not_found(&self.context(View::Home), &self.content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::content_fixtures::{projects, sample_content};
    use crate::tests::support::stubs::FixedClock;

    fn service_with_projects(count: usize) -> RenderPageService<FixedClock> {
        let mut content = sample_content();
        content.projects = projects(count);
        RenderPageService::new(ContentStore::new(content), BasePath::root(), FixedClock(2031))
    }

    #[test]
    fn home_default_shows_six_of_eight_projects() {
        let page = service_with_projects(8).render_home(&HomeQuery::default());

        // The initial state is what the static export writes, so the two
        // overflow cards must be present for the script to reveal.
        assert_eq!(page.html.matches("class=\"project-card\"").count(), 8);
        assert_eq!(page.html.matches(r#"data-overflow="" hidden="""#).count(), 2);
        assert!(page.html.contains(r#"data-toggle="show-all""#));
        assert!(page.html.contains("View All Projects"));
        assert!(page.html.contains("© 2031 Ada Lovelace"));
    }

    #[test]
    fn home_query_restores_show_all_and_menu() {
        let query = HomeQuery {
            show_all: true,
            menu: Some("open".to_string()),
            ..HomeQuery::default()
        };

        let page = service_with_projects(8).render_home(&query);

        assert_eq!(page.html.matches("class=\"project-card\"").count(), 8);
        assert!(page.html.contains("Show Less"));
        assert!(page.html.contains(r#"aria-expanded="true""#));
    }

    #[test]
    fn gallery_query_opens_selected_photo() {
        let page = service_with_projects(1).render_gallery(&GalleryQuery { photo: Some(1) });
        assert!(page.html.contains("data-photo-modal"));
        assert!(!page.html.contains(r#"data-photo-modal="" hidden="""#));
    }

    #[test]
    fn not_found_page_is_a_full_document() {
        let page = service_with_projects(1).render_not_found();
        assert!(page.html.starts_with("<!DOCTYPE html>"));
        assert!(page.html.contains("404"));
    }
}
