use crate::content::domain::entities::Project;
use crate::shared::html::{Markup, Tag};
use crate::site::application::views::icons::Icon;
use crate::site::application::views::layout::section_header;
use crate::site::domain::animation::{Entrance, Motion};
use crate::site::domain::interaction::description::{Affordance, DescriptionState};
use crate::site::domain::interaction::projects_state::COLLAPSED_PROJECT_COUNT;
use crate::site::domain::interaction::{HomeState, ProjectsEvent, ProjectsState, VideoSelection};
use crate::site::domain::view_context::ViewContext;

const VISIBLE_TECHNOLOGIES: usize = 4;

/// Projects grid, show-all control and demo video modal.
///
/// Every card is rendered; those past the visible set carry `hidden` so the
/// page script can reveal them without a reload.
pub fn render(m: &mut Markup, ctx: &ViewContext, projects: &[Project], state: &HomeState) {
    let own = &state.projects;

    m.open("section", &[("id", "projects"), ("class", "section section--projects")]);
    m.open("div", &[("class", "container")]);

    m.open_tag(&Entrance::section().decorate(Tag::new("div").attr("class", "section-head")));
    section_header(
        m,
        "Featured",
        "Projects",
        Some("A selection of projects showcasing my expertise in AI, search and full-stack development"),
    );
    m.close("div");

    let shown = own.visible(projects).len();
    m.open("div", &[("class", "project-grid")]);
    for (index, project) in projects.iter().enumerate() {
        card(m, ctx, project, index, index >= shown, projects, state);
    }
    m.close("div");

    if let Some(label) = own.toggle_label(projects.len()) {
        let href = link_after(ctx, state, projects, ProjectsEvent::ToggleShowAll, "projects");
        let other = own
            .after(ProjectsEvent::ToggleShowAll, projects)
            .toggle_label(projects.len());
        m.open("div", &[("class", "project-grid__more")])
            .open_tag(
                &Entrance::in_view(Motion::FadeIn, Entrance::CARD_MARGIN_PX)
                    .decorate(Tag::new("a").attr("class", "button button--secondary").attr("href", href))
                    .attr("data-toggle", "show-all")
                    .attr_opt("data-label-alt", other),
            )
            .text(label)
            .close("a")
            .close("div");
    }

    m.close("div");

    if projects.iter().any(|p| p.video().is_some()) {
        let playing = match own.video() {
            VideoSelection::Playing { video, .. } => Some(video.as_str()),
            VideoSelection::None => None,
        };
        video_modal(m, ctx, playing, projects, state);
    }

    m.close("section");
}

fn card(
    m: &mut Markup,
    ctx: &ViewContext,
    project: &Project,
    index: usize,
    hidden: bool,
    projects: &[Project],
    state: &HomeState,
) {
    let anchor = card_anchor(project);
    m.open_tag(
        &Entrance::card().staggered(index, 100).decorate(
            Tag::new("article")
                .attr("id", anchor.clone())
                .attr("class", "project-card")
                .flag("data-overflow", index >= COLLAPSED_PROJECT_COUNT)
                .flag("hidden", hidden),
        ),
    );

    m.open("div", &[("class", "project-card__head")]);
    m.open("div", &[("class", "project-card__icon")])
        .raw(&Icon::Folder.svg(32))
        .close("div");
    m.open("div", &[("class", "project-card__badges")]);
    if project.featured {
        m.element("span", &[("class", "badge")], "Featured");
    }
    if let Some(video) = project.video() {
        let href = link_after(ctx, state, projects, ProjectsEvent::PlayDemo(project.id), "projects");
        m.open_tag(
            &Tag::new("a")
                .attr("class", "project-card__demo")
                .attr("href", href)
                .attr("aria-label", format!("Watch demo of {}", project.title))
                .attr("data-video", ctx.asset(video)),
        )
        .raw(&Icon::Play.svg(14))
        .text("Demo")
        .close("a");
    }
    m.close("div");
    m.close("div");

    m.element("h3", &[("class", "project-card__title")], &project.title);

    let description = state.projects.description(project.id);
    let view = description.view(&project.description);
    m.open("p", &[("class", "project-card__description")]);
    match view.affordance {
        None => {
            m.text(view.text);
        }
        Some(affordance) => {
            // Both forms are present; the script swaps them in place.
            let short = DescriptionState::Collapsed.view(&project.description);
            m.open_tag(
                &Tag::new("span")
                    .attr("data-description", "short")
                    .flag("hidden", !view.is_truncated()),
            )
            .text(short.text)
            .text("...")
            .close("span");
            m.open_tag(
                &Tag::new("span")
                    .attr("data-description", "full")
                    .flag("hidden", view.is_truncated()),
            )
            .text(&project.description)
            .close("span");

            let href = link_after(
                ctx,
                state,
                projects,
                ProjectsEvent::ToggleDescription(project.id),
                &anchor,
            );
            let other = match affordance {
                Affordance::More => Affordance::Less,
                Affordance::Less => Affordance::More,
            };
            m.text(" ")
                .open_tag(
                    &Tag::new("a")
                        .attr("class", "project-card__toggle")
                        .attr("data-label-alt", other.label())
                        .attr("href", href)
                        .attr("data-toggle", "description"),
                )
                .text(affordance.label())
                .close("a");
        }
    }
    m.close("p");

    m.open("div", &[("class", "tag-list")]);
    for tech in project.technologies.iter().take(VISIBLE_TECHNOLOGIES) {
        m.element("span", &[("class", "tag")], tech);
    }
    if project.technologies.len() > VISIBLE_TECHNOLOGIES {
        let more = format!("+{} more", project.technologies.len() - VISIBLE_TECHNOLOGIES);
        m.element("span", &[("class", "tag tag--muted")], &more);
    }
    m.close("div");

    m.close("article");
}

/// Rendered closed when nothing plays so the script can open it for any demo.
fn video_modal(
    m: &mut Markup,
    ctx: &ViewContext,
    video: Option<&str>,
    projects: &[Project],
    state: &HomeState,
) {
    let close = link_after(ctx, state, projects, ProjectsEvent::CloseVideo, "projects");

    m.open_tag(
        &Entrance::on_mount(Motion::FadeIn).lasting(200).decorate(
            Tag::new("div")
                .attr("class", "modal")
                .attr("role", "dialog")
                .attr("aria-modal", "true")
                .attr("data-video-modal", "")
                .flag("hidden", video.is_none()),
        ),
    );
    m.open_tag(
        &Tag::new("a")
            .attr("class", "modal__backdrop")
            .attr("href", close.clone())
            .attr("aria-label", "Close video")
            .attr("data-modal-close", ""),
    )
    .close("a");
    m.open_tag(
        &Entrance::on_mount(Motion::ScaleIn)
            .lasting(200)
            .decorate(Tag::new("div").attr("class", "modal__panel modal__panel--video")),
    );
    m.open_tag(
        &Tag::new("a")
            .attr("class", "modal__close")
            .attr("href", close)
            .attr("aria-label", "Close")
            .attr("data-modal-close", ""),
    )
    .raw(&Icon::Close.svg(24))
    .close("a");
    m.open_tag(
        &Tag::new("video")
            .attr("class", "modal__video")
            .attr_opt("src", video.map(|v| ctx.asset(v)))
            .flag("controls", true)
            .flag("autoplay", video.is_some()),
    )
    .text("Your browser does not support the video tag.")
    .close("video");
    m.close("div");
    m.close("div");
}

fn card_anchor(project: &Project) -> String {
    format!("project-{}", project.id)
}

/// Link to the home view after one projects event, landing on `anchor`.
fn link_after(
    ctx: &ViewContext,
    state: &HomeState,
    projects: &[Project],
    event: ProjectsEvent,
    anchor: &str,
) -> String {
    let next = HomeState {
        projects: state.projects.after(event, projects),
        ..state.clone()
    };
    next.href_at(&ctx.base_path, anchor)
}

/// Rebuilds projects state from request parameters.
pub fn state_from(
    show_all: bool,
    video: Option<u32>,
    expanded: &[u32],
    projects: &[Project],
) -> ProjectsState {
    let mut state = ProjectsState::default();
    if show_all {
        state.apply(ProjectsEvent::ToggleShowAll, projects);
    }
    if let Some(id) = video {
        state.apply(ProjectsEvent::PlayDemo(id.into()), projects);
    }
    for &id in expanded {
        if !state.description(id.into()).is_expanded() {
            state.apply(ProjectsEvent::ToggleDescription(id.into()), projects);
        }
    }
    state
}
