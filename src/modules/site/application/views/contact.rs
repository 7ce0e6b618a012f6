use crate::content::domain::entities::PortfolioContent;
use crate::shared::html::{Markup, Tag};
use crate::site::application::views::icons::Icon;
use crate::site::application::views::layout::section_header;
use crate::site::domain::animation::Entrance;

pub fn mailto(email: &str) -> String {
    format!("mailto:{email}")
}

/// `tel:` URI with spaces removed.
pub fn tel(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}

pub fn render(m: &mut Markup, content: &PortfolioContent) {
    let personal = &content.personal;

    m.open("section", &[("id", "contact"), ("class", "section section--contact")]);
    m.open("div", &[("class", "container container--narrow")]);

    m.open_tag(&Entrance::section().decorate(Tag::new("div").attr("class", "section-head")));
    section_header(
        m,
        "Get In",
        "Touch",
        Some("I'm always open to discussing new projects, ideas, or opportunities."),
    );
    m.close("div");

    m.open_tag(&Entrance::card().delayed(200).decorate(Tag::new("div").attr("class", "contact-card")));

    m.open("div", &[("class", "contact-card__channels")]);
    channel(m, Icon::Mail, "Email", &mailto(&personal.email), &personal.email);
    if !personal.phone.trim().is_empty() {
        channel(m, Icon::Phone, "Phone", &tel(&personal.phone), &personal.phone);
    }
    m.close("div");

    let links = content.social.links();
    if !links.is_empty() {
        m.open("div", &[("class", "contact-card__social")]);
        for link in &links {
            m.open_tag(
                &Tag::new("a")
                    .attr("class", "social-link")
                    .attr("href", link.url)
                    .attr("aria-label", link.label.as_str())
                    .attr("target", "_blank")
                    .attr("rel", "noopener noreferrer"),
            )
            .raw(&Icon::for_platform(link.platform).svg(20))
            .text(&link.label)
            .close("a");
        }
        m.close("div");
    }

    m.close("div");

    m.close("div");
    m.close("section");
}

fn channel(m: &mut Markup, icon: Icon, label: &str, href: &str, value: &str) {
    m.open("a", &[("class", "contact-channel"), ("href", href)])
        .raw(&icon.svg(24))
        .open("div", &[])
        .element("p", &[("class", "contact-channel__label")], label)
        .element("p", &[("class", "contact-channel__value")], value)
        .close("div")
        .close("a");
}
