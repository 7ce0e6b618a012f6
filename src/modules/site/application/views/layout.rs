use crate::content::domain::entities::PortfolioContent;
use crate::shared::html::{Markup, Tag};
use crate::site::domain::view_context::{View, ViewContext};

const KEYWORDS: [&str; 4] = ["portfolio", "developer", "software engineer", "web development"];

/// Wraps a rendered body in the HTML document shell with page metadata.
pub fn document(
    ctx: &ViewContext,
    content: &PortfolioContent,
    page_title: Option<&str>,
    body: &str,
) -> String {
    let personal = &content.personal;
    let site_title = format!("{} | {}", personal.name, personal.title);
    let title = match page_title {
        Some(page) => format!("{page} | {}", personal.name),
        None => site_title.clone(),
    };

    let mut keywords: Vec<&str> = KEYWORDS.to_vec();
    keywords.push(&personal.name);
    keywords.push(&personal.title);
    let keywords = keywords.join(", ");

    let mut m = Markup::with_capacity(body.len() + 2048);
    m.raw("<!DOCTYPE html>");
    m.open("html", &[("lang", "en"), ("class", "scroll-smooth")]);
    m.open("head", &[]);
    m.void("meta", &[("charset", "utf-8")]);
    m.void(
        "meta",
        &[("name", "viewport"), ("content", "width=device-width, initial-scale=1")],
    );
    m.element("title", &[], &title);

    let meta = [
        ("description", personal.tagline.as_str()),
        ("keywords", keywords.as_str()),
        ("author", personal.name.as_str()),
        ("creator", personal.name.as_str()),
        ("robots", "index, follow"),
        ("twitter:card", "summary_large_image"),
        ("twitter:title", site_title.as_str()),
        ("twitter:description", personal.tagline.as_str()),
    ];
    for (name, value) in meta {
        m.void("meta", &[("name", name), ("content", value)]);
    }

    let og = [
        ("og:type", "website"),
        ("og:locale", "en_US"),
        ("og:title", site_title.as_str()),
        ("og:description", personal.tagline.as_str()),
        ("og:site_name", personal.name.as_str()),
    ];
    for (property, value) in og {
        m.void("meta", &[("property", property), ("content", value)]);
    }

    m.void(
        "link",
        &[("rel", "stylesheet"), ("href", ctx.asset("/assets/site.css").as_str())],
    );
    m.open_tag(
        &Tag::new("script")
            .attr("src", ctx.asset("/assets/site.js"))
            .flag("defer", true),
    )
    .close("script");
    m.close("head");

    m.open_tag(&Tag::new("body").attr("data-view", view_name(ctx)));
    m.raw(body);
    m.close("body");
    m.close("html");

    m.into_string()
}

fn view_name(ctx: &ViewContext) -> &'static str {
    match ctx.view {
        View::Home => "home",
        View::Gallery => "gallery",
    }
}

/// Centered section heading: "{lead} <accent>", rule, optional subtitle.
pub fn section_header(m: &mut Markup, lead: &str, accent: &str, subtitle: Option<&str>) {
    m.open("h2", &[("class", "section-title")])
        .text(lead)
        .text(" ")
        .element("span", &[("class", "accent")], accent)
        .close("h2");
    m.open("div", &[("class", "section-rule")]).close("div");
    if let Some(subtitle) = subtitle {
        m.element("p", &[("class", "section-subtitle")], subtitle);
    }
}
