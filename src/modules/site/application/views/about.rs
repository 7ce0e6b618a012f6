use crate::content::domain::entities::PortfolioContent;
use crate::shared::html::{Markup, Tag};
use crate::site::application::views::icons::Icon;
use crate::site::application::views::layout::section_header;
use crate::site::domain::animation::{Entrance, Motion};

pub fn render(m: &mut Markup, content: &PortfolioContent) {
    let personal = &content.personal;

    m.open("section", &[("id", "about"), ("class", "section section--about")]);
    m.open("div", &[("class", "container")]);

    m.open_tag(&Entrance::section().decorate(Tag::new("div").attr("class", "section-head")));
    section_header(m, "About", "Me", None);
    m.close("div");

    m.open("div", &[("class", "about__grid")]);

    m.open_tag(
        &Entrance::in_view(Motion::SlideFromLeft, Entrance::SECTION_MARGIN_PX)
            .delayed(200)
            .decorate(Tag::new("div").attr("class", "about__text")),
    );
    m.element("h3", &[("class", "about__heading")], "Building intelligent systems that matter");
    m.element("p", &[("class", "about__bio")], &personal.bio);
    m.open("div", &[("class", "about__facts")]);
    fact(m, Icon::MapPin, "Location", &personal.location);
    fact(m, Icon::Briefcase, "Role", &personal.title);
    m.close("div");
    m.close("div");

    m.open_tag(
        &Entrance::in_view(Motion::SlideFromRight, Entrance::SECTION_MARGIN_PX)
            .delayed(400)
            .decorate(Tag::new("div").attr("class", "about__stats")),
    );
    for (index, stat) in content.stats.iter().enumerate() {
        m.open_tag(
            &Entrance::in_view(Motion::ScaleIn, Entrance::SECTION_MARGIN_PX)
                .delayed(600)
                .staggered(index, 100)
                .decorate(Tag::new("div").attr("class", "stat-card")),
        )
        .element("div", &[("class", "stat-card__value")], &stat.value)
        .element("div", &[("class", "stat-card__label")], &stat.label)
        .close("div");
    }
    m.close("div");

    m.close("div");
    m.close("div");
    m.close("section");
}

fn fact(m: &mut Markup, icon: Icon, label: &str, value: &str) {
    m.open("div", &[("class", "about__fact")])
        .raw(&icon.svg(20))
        .open("div", &[])
        .element("p", &[("class", "about__fact-label")], label)
        .element("p", &[("class", "about__fact-value")], value)
        .close("div")
        .close("div");
}
