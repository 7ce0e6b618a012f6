use crate::content::domain::entities::{SkillCategory, Skills};
use crate::shared::html::{Markup, Tag};
use crate::site::application::views::layout::section_header;
use crate::site::domain::animation::Entrance;

pub fn render(m: &mut Markup, skills: &Skills) {
    m.open("section", &[("id", "skills"), ("class", "section section--skills")]);
    m.open("div", &[("class", "container")]);

    m.open_tag(&Entrance::section().decorate(Tag::new("div").attr("class", "section-head")));
    section_header(m, "Technical", "Skills", Some("Technologies and tools I work with"));
    m.close("div");

    m.open("div", &[("class", "skills-grid")]);
    for (index, category) in SkillCategory::ALL.into_iter().enumerate() {
        m.open_tag(
            &Entrance::card().staggered(index, 100).decorate(
                Tag::new("div")
                    .attr("class", "skill-card")
                    .attr("data-category", category.key()),
            ),
        );
        m.element("h3", &[("class", "skill-card__title")], category.title());
        m.open("div", &[("class", "tag-list")]);
        for skill in skills.bucket(category) {
            m.element("span", &[("class", "tag")], skill);
        }
        m.close("div");
        m.close("div");
    }
    m.close("div");

    m.close("div");
    m.close("section");
}
