use crate::content::domain::entities::PortfolioContent;
use crate::shared::html::Markup;
use crate::site::application::views::{
    about, contact, experience, footer, gallery, hero, layout, navbar, projects, skills,
};
use crate::site::domain::interaction::{GalleryState, HomeState};
use crate::site::domain::view_context::{View, ViewContext};

/// Navigation, Hero, About, Experience, Projects, Skills, Contact, Footer.
pub fn home(ctx: &ViewContext, content: &PortfolioContent, state: &HomeState) -> String {
    let mut m = Markup::with_capacity(64 * 1024);

    navbar::render(&mut m, ctx, content, state);
    m.open("main", &[("class", "home")]);
    hero::render(&mut m, ctx, content);
    about::render(&mut m, content);
    experience::render(&mut m, &content.experience);
    projects::render(&mut m, ctx, &content.projects, state);
    skills::render(&mut m, &content.skills);
    contact::render(&mut m, content);
    m.close("main");
    footer::render(&mut m, ctx, content);

    layout::document(ctx, content, None, &m.into_string())
}

pub fn gallery(ctx: &ViewContext, content: &PortfolioContent, state: &GalleryState) -> String {
    let mut m = Markup::with_capacity(16 * 1024);

    gallery::header(&mut m, ctx, content);
    gallery::render(&mut m, ctx, &content.gallery, state);
    footer::render(&mut m, ctx, content);

    layout::document(ctx, content, Some("Gallery"), &m.into_string())
}

pub fn not_found(ctx: &ViewContext, content: &PortfolioContent) -> String {
    let home = ctx.base_path.page(View::Home);
    let mut m = Markup::new();

    m.open("main", &[("class", "not-found")])
        .element("h1", &[], "404")
        .element("p", &[], "This page could not be found.")
        .element("a", &[("class", "button button--primary"), ("href", home.as_str())], "Back to Portfolio")
        .close("main");

    layout::document(ctx, content, Some("Not Found"), &m.into_string())
}
