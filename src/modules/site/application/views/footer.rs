use crate::content::domain::entities::PortfolioContent;
use crate::shared::html::{Markup, Tag};
use crate::site::application::views::contact::mailto;
use crate::site::application::views::icons::Icon;
use crate::site::application::views::navbar::link;
use crate::site::domain::navigation::resolve_footer_link;
use crate::site::domain::view_context::ViewContext;

pub fn render(m: &mut Markup, ctx: &ViewContext, content: &PortfolioContent) {
    let personal = &content.personal;

    m.open("footer", &[("class", "site-footer")]);
    m.open("div", &[("class", "container site-footer__grid")]);

    m.open("div", &[("class", "site-footer__brand")]);
    m.open("p", &[("class", "brand")])
        .text(personal.first_name())
        .element("span", &[("class", "brand__dot")], ".")
        .close("p");
    m.element("p", &[("class", "site-footer__blurb")], &personal.tagline);
    m.close("div");

    m.open("div", &[("class", "site-footer__links")]);
    m.element("h4", &[], "Quick Links");
    m.open("ul", &[]);
    for entry in &content.navigation {
        let Ok(target) = entry.target() else {
            continue;
        };
        let action = resolve_footer_link(&target, ctx);
        m.open("li", &[]);
        link(m, &entry.name, &action, "site-footer__link", None);
        m.close("li");
    }
    m.close("ul");
    m.close("div");

    m.open("div", &[("class", "site-footer__connect")]);
    m.element("h4", &[], "Connect");
    m.open("div", &[("class", "site-footer__social")]);
    for social in content.social.links() {
        m.open_tag(
            &Tag::new("a")
                .attr("href", social.url)
                .attr("aria-label", social.label.as_str())
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer"),
        )
        .raw(&Icon::for_platform(social.platform).svg(20))
        .close("a");
    }
    let mail = mailto(&personal.email);
    m.open("a", &[("href", mail.as_str()), ("aria-label", "Email")])
        .raw(&Icon::Mail.svg(20))
        .close("a");
    m.close("div");
    m.element("p", &[("class", "site-footer__email")], &personal.email);
    m.close("div");

    m.close("div");

    let copyright = format!("© {} {}. All rights reserved.", ctx.current_year, personal.name);
    m.open("div", &[("class", "site-footer__bottom")])
        .element("p", &[], &copyright)
        .open("p", &[("class", "site-footer__made")])
        .text("Built with ")
        .raw(&Icon::Heart.svg(14))
        .text(" and Rust")
        .close("p")
        .close("div");

    m.close("footer");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::domain::view_context::{BasePath, View};
    use crate::tests::support::content_fixtures::sample_content;

    fn render_footer(view: View, year: i32) -> String {
        let ctx = ViewContext::new(view, BasePath::root(), year);
        let mut m = Markup::new();
        render(&mut m, &ctx, &sample_content());
        m.into_string()
    }

    #[test]
    fn copyright_uses_render_time_year() {
        let html = render_footer(View::Home, 2031);
        assert!(html.contains("© 2031 Ada Lovelace. All rights reserved."));
    }

    #[test]
    fn quick_links_scroll_on_home() {
        let html = render_footer(View::Home, 2030);
        assert!(html.contains(r##"class="site-footer__link" href="#about" data-scroll="about""##));
    }

    #[test]
    fn quick_links_to_missing_anchors_are_inert_on_gallery() {
        let html = render_footer(View::Gallery, 2030);

        assert!(html.contains(r#"<a class="site-footer__link" aria-disabled="true" data-nav="noop">About</a>"#));
        assert!(html.contains(r#"class="site-footer__link" href="/gallery" data-nav="page">Gallery</a>"#));
    }

    #[test]
    fn connect_block_has_mail_link() {
        assert!(render_footer(View::Home, 2030).contains(r#"href="mailto:ada@example.com""#));
    }
}
