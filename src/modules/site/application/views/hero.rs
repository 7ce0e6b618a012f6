use crate::content::domain::entities::PortfolioContent;
use crate::content::domain::nav_target::NavTarget;
use crate::shared::html::{Markup, Tag};
use crate::site::application::views::icons::Icon;
use crate::site::domain::animation::{Entrance, Motion};
use crate::site::domain::navigation::resolve_nav;
use crate::site::domain::view_context::ViewContext;

pub fn render(m: &mut Markup, ctx: &ViewContext, content: &PortfolioContent) {
    let personal = &content.personal;

    m.open("section", &[("id", "home"), ("class", "hero")]);
    m.open("div", &[("class", "hero__backdrop")])
        .open("div", &[("class", "hero__orb hero__orb--a")])
        .close("div")
        .open("div", &[("class", "hero__orb hero__orb--b")])
        .close("div")
        .close("div");

    m.open_tag(&Entrance::on_mount(Motion::FadeUp).decorate(Tag::new("div").attr("class", "hero__content")));

    let step = |index: usize| Entrance::on_mount(Motion::FadeUp).delayed(200).staggered(index, 100);

    m.open_tag(&step(0).decorate(Tag::new("p").attr("class", "hero__greeting")))
        .text("Hello, I'm")
        .close("p");
    m.open_tag(&step(1).decorate(Tag::new("h1").attr("class", "hero__name")))
        .text(&personal.name)
        .close("h1");
    m.open_tag(&step(2).decorate(Tag::new("h2").attr("class", "hero__title")))
        .text(&personal.title)
        .close("h2");
    m.open_tag(&step(3).decorate(Tag::new("p").attr("class", "hero__tagline")))
        .text(&personal.tagline)
        .close("p");

    m.open_tag(&step(4).decorate(Tag::new("div").attr("class", "hero__actions")));
    let contact = resolve_nav(&NavTarget::Anchor("contact".to_string()), ctx);
    m.open_tag(
        &Tag::new("a")
            .attr("class", "button button--primary")
            .attr_opt("href", contact.href())
            .attr_opt("data-scroll", contact.scroll_anchor().map(str::to_string)),
    )
    .text("Get In Touch")
    .close("a");
    m.open_tag(
        &Tag::new("a")
            .attr("class", "button button--secondary")
            .attr("href", resume_href(ctx, content))
            .flag("download", true),
    )
    .raw(&Icon::Download.svg(18))
    .text("Download Resume")
    .close("a");
    m.close("div");

    m.open_tag(&step(5).decorate(Tag::new("div").attr("class", "hero__social")));
    let mut links: Vec<(String, String, &str)> = content
        .social
        .links()
        .into_iter()
        .filter(|l| l.platform == "github" || l.platform == "linkedin")
        .map(|l| (l.url.to_string(), l.label, l.platform))
        .collect();
    links.push((format!("mailto:{}", personal.email), "Email".to_string(), "email"));
    for (href, label, platform) in &links {
        let external = href.starts_with("http");
        m.open_tag(
            &Tag::new("a")
                .attr("class", "hero__social-link")
                .attr("href", href.as_str())
                .attr("aria-label", label.as_str())
                .attr_opt("target", external.then_some("_blank"))
                .attr_opt("rel", external.then_some("noopener noreferrer")),
        )
        .raw(&Icon::for_platform(platform).svg(24))
        .close("a");
    }
    m.close("div");
    m.close("div");

    let about = resolve_nav(&NavTarget::Anchor("about".to_string()), ctx);
    m.open_tag(
        &Tag::new("a")
            .attr("class", "hero__scroll-indicator")
            .attr_opt("href", about.href())
            .attr_opt("data-scroll", about.scroll_anchor().map(str::to_string))
            .attr("aria-label", "Scroll to About")
            .attr("data-loop", "bounce"),
    )
    .raw(&Icon::ArrowDown.svg(28))
    .close("a");

    m.close("section");
}

/// Deployment prefix + resume reference.
pub fn resume_href(ctx: &ViewContext, content: &PortfolioContent) -> String {
    ctx.asset(&content.personal.resume_url)
}
