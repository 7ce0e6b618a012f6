use crate::content::domain::entities::PortfolioContent;
use crate::shared::html::{Markup, Tag};
use crate::site::application::views::icons::Icon;
use crate::site::domain::animation::{Entrance, Motion};
use crate::site::domain::interaction::{HomeState, MenuState, NavEvent};
use crate::site::domain::navigation::{resolve_nav, NavAction};
use crate::site::domain::view_context::{View, ViewContext};

/// Fixed top navigation with desktop links and a collapsible mobile menu.
pub fn render(m: &mut Markup, ctx: &ViewContext, content: &PortfolioContent, state: &HomeState) {
    let nav = &state.nav;
    let class = if nav.is_scrolled() {
        "site-nav site-nav--scrolled"
    } else {
        "site-nav"
    };

    m.open_tag(
        &Entrance::on_mount(Motion::DropIn)
            .decorate(Tag::new("nav").attr("class", class))
            .attr("data-scroll-threshold", "50"),
    );
    m.open("div", &[("class", "site-nav__bar")]);

    let home = ctx.base_path.page(View::Home);
    m.open("a", &[("class", "brand"), ("href", home.as_str())])
        .text(content.personal.first_name())
        .element("span", &[("class", "brand__dot")], ".")
        .close("a");

    m.open("div", &[("class", "site-nav__links")]);
    for (index, entry) in content.navigation.iter().enumerate() {
        let action = match entry.target() {
            Ok(target) => resolve_nav(&target, ctx),
            Err(_) => continue,
        };
        let entrance = Entrance::on_mount(Motion::FadeIn).staggered(index, 100);
        link(m, &entry.name, &action, "site-nav__link", Some(entrance));
    }
    m.close("div");

    let toggled = HomeState {
        nav: nav.after(NavEvent::ToggleMenu),
        ..state.clone()
    };
    let (icon, label) = match nav.menu() {
        MenuState::Open => (Icon::Close, "Close menu"),
        MenuState::Closed => (Icon::Menu, "Toggle menu"),
    };
    m.open_tag(
        &Tag::new("a")
            .attr("class", "site-nav__toggle")
            .attr("href", toggled.href(&ctx.base_path))
            .attr("role", "button")
            .attr("aria-label", label)
            .attr("aria-expanded", if nav.is_menu_open() { "true" } else { "false" })
            .attr("data-menu-toggle", ""),
    )
    .raw(&icon.svg(24))
    .close("a");
    m.close("div");

    m.open_tag(
        &Tag::new("div")
            .attr("class", "site-nav__mobile")
            .attr("data-mobile-menu", "")
            .flag("hidden", !nav.is_menu_open()),
    );
    for entry in &content.navigation {
        let Ok(target) = entry.target() else { continue };
        let action = resolve_nav(&target, ctx);
        match &action {
            // Without script the jump must also drop `menu=open`.
            NavAction::ScrollTo { anchor } if nav.is_menu_open() => {
                let closed = HomeState {
                    nav: nav.after(NavEvent::Activate(action.clone())),
                    ..state.clone()
                };
                m.open_tag(
                    &Tag::new("a")
                        .attr("class", "site-nav__mobile-link")
                        .attr("href", closed.href_at(&ctx.base_path, anchor))
                        .attr("data-scroll", anchor.as_str())
                        .attr("data-nav", "scroll"),
                )
                .text(&entry.name)
                .close("a");
            }
            _ => link(m, &entry.name, &action, "site-nav__mobile-link", None),
        }
    }
    m.close("div");

    m.close("nav");
}

/// Anchor for a resolved navigation action. Scroll targets carry
/// `data-scroll` so the page script can scroll smoothly and close the menu.
pub fn link(m: &mut Markup, name: &str, action: &NavAction, class: &str, entrance: Option<Entrance>) {
    let mut tag = Tag::new("a")
        .attr("class", class)
        .attr_opt("href", action.href())
        .attr_opt("data-scroll", action.scroll_anchor().map(str::to_string));
    tag = match action {
        NavAction::None => tag.attr("aria-disabled", "true").attr("data-nav", "noop"),
        NavAction::Navigate { .. } => tag.attr("data-nav", "page"),
        NavAction::NavigateThenScroll { .. } => tag.attr("data-nav", "page-anchor"),
        NavAction::ScrollTo { .. } => tag.attr("data-nav", "scroll"),
    };
    if let Some(entrance) = entrance {
        tag = entrance.decorate(tag);
    }
    m.open_tag(&tag).text(name).close("a");
}
