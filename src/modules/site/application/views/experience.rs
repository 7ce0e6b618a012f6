use crate::content::domain::entities::ExperienceEntry;
use crate::shared::html::{Markup, Tag};
use crate::site::application::views::icons::Icon;
use crate::site::application::views::layout::section_header;
use crate::site::domain::animation::{Entrance, Motion};

const STAGGER_MS: u32 = 200;

/// Even cards enter from the left, odd ones from the right.
pub fn entrance_for(index: usize) -> Entrance {
    let motion = if index % 2 == 0 {
        Motion::SlideFromLeft
    } else {
        Motion::SlideFromRight
    };
    Entrance::in_view(motion, Entrance::CARD_MARGIN_PX).staggered(index, STAGGER_MS)
}

pub fn render(m: &mut Markup, entries: &[ExperienceEntry]) {
    m.open("section", &[("id", "experience"), ("class", "section section--experience")]);
    m.open("div", &[("class", "container")]);

    m.open_tag(&Entrance::section().decorate(Tag::new("div").attr("class", "section-head")));
    section_header(
        m,
        "Work",
        "Experience",
        Some("My professional journey building production systems"),
    );
    m.close("div");

    m.open("div", &[("class", "timeline")]);
    for (index, entry) in entries.iter().enumerate() {
        card(m, entry, index);
    }
    m.close("div");

    m.close("div");
    m.close("section");
}

fn card(m: &mut Markup, entry: &ExperienceEntry, index: usize) {
    m.open_tag(
        &entrance_for(index).decorate(
            Tag::new("article")
                .attr("class", "experience-card")
                .attr("data-id", entry.id.to_string()),
        ),
    );

    m.open("header", &[("class", "experience-card__head")]);
    m.open("div", &[]);
    m.element("h3", &[("class", "experience-card__role")], &entry.role);
    m.open("p", &[("class", "experience-card__company")])
        .raw(&Icon::Building.svg(16))
        .text(&entry.company)
        .close("p");
    m.close("div");
    m.open("div", &[("class", "experience-card__meta")]);
    m.open("span", &[])
        .raw(&Icon::Calendar.svg(16))
        .text(&entry.duration)
        .close("span");
    m.open("span", &[])
        .raw(&Icon::MapPin.svg(16))
        .text(&entry.location)
        .close("span");
    m.close("div");
    m.close("header");

    m.element("p", &[("class", "experience-card__description")], &entry.description);

    if !entry.highlights.is_empty() {
        m.open("ul", &[("class", "experience-card__highlights")]);
        for highlight in &entry.highlights {
            m.element("li", &[], highlight);
        }
        m.close("ul");
    }

    m.open("div", &[("class", "tag-list")]);
    for tech in &entry.technologies {
        m.element("span", &[("class", "tag")], tech);
    }
    m.close("div");

    m.close("article");
}
