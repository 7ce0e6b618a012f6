use crate::content::domain::entities::{GalleryPhoto, PortfolioContent};
use crate::shared::html::{Markup, Tag};
use crate::site::application::views::icons::Icon;
use crate::site::application::views::layout::section_header;
use crate::site::domain::animation::{Entrance, Motion};
use crate::site::domain::interaction::{GalleryEvent, GalleryState};
use crate::site::domain::view_context::{View, ViewContext};

pub const EMPTY_MESSAGE: &str = "No photos yet. Add your photos to get started.";
pub const SINGLE_PHOTO_HINT: &str =
    "Add your photos to /public/images/gallery/ and update the gallery array in portfolio.json";

/// Sticky header of the gallery page.
pub fn header(m: &mut Markup, ctx: &ViewContext, content: &PortfolioContent) {
    let home = ctx.base_path.page(View::Home);
    m.open("header", &[("class", "gallery-header")]);
    m.open("div", &[("class", "container gallery-header__bar")]);
    m.open("a", &[("class", "gallery-header__back"), ("href", home.as_str())])
        .raw(&Icon::ArrowLeft.svg(20))
        .element("span", &[], "Back to Portfolio")
        .close("a");
    m.open("span", &[("class", "brand")])
        .text(content.personal.first_name())
        .element("span", &[("class", "brand__dot")], ".")
        .close("span");
    m.close("div");
    m.close("header");
}

pub fn render(m: &mut Markup, ctx: &ViewContext, photos: &[GalleryPhoto], state: &GalleryState) {
    m.open("main", &[("class", "gallery")]);
    m.open("div", &[("class", "container")]);

    m.open_tag(
        &Entrance::on_mount(Motion::FadeUp).decorate(Tag::new("div").attr("class", "section-head")),
    );
    section_header(m, "Photo", "Gallery", Some("Capturing moments through my lens"));
    m.close("div");

    if photos.is_empty() {
        m.open("div", &[("class", "gallery__empty")])
            .raw(&Icon::Camera.svg(60))
            .element("p", &[], EMPTY_MESSAGE)
            .close("div");
    } else {
        m.open("div", &[("class", "gallery__grid")]);
        for (index, photo) in photos.iter().enumerate() {
            card(m, ctx, photo, index, photos, state);
        }
        m.close("div");
    }

    if photos.len() == 1 {
        m.element("p", &[("class", "gallery__hint")], SINGLE_PHOTO_HINT);
    }

    m.close("div");

    if !photos.is_empty() {
        let close = state.after(GalleryEvent::Close, photos).href(&ctx.base_path);
        modal(m, ctx, state.selected(photos), &close);
    }

    m.close("main");
}

fn card(
    m: &mut Markup,
    ctx: &ViewContext,
    photo: &GalleryPhoto,
    index: usize,
    photos: &[GalleryPhoto],
    state: &GalleryState,
) {
    let href = state.after(GalleryEvent::Select(photo.id), photos).href(&ctx.base_path);
    m.open_tag(
        &Entrance::on_mount(Motion::FadeUp).staggered(index, 50).decorate(
            Tag::new("a")
                .attr("class", "photo-card")
                .attr("href", href)
                .attr("data-photo", photo.id.to_string())
                .attr("data-photo-title", photo.title.as_str())
                .attr("data-photo-description", photo.description.as_str())
                .attr_opt("data-photo-image", photo.image().map(|i| ctx.asset(i)))
                .attr_opt("data-photo-location", photo.location())
                .attr_opt("data-photo-date", photo.date()),
        ),
    );

    image_or_placeholder(m, ctx, photo, "photo-card__image", 40);

    m.open("div", &[("class", "photo-card__overlay")]);
    m.element("h4", &[("class", "photo-card__title")], &photo.title);
    if let Some(location) = photo.location() {
        m.open("p", &[("class", "photo-card__location")])
            .raw(&Icon::MapPin.svg(12))
            .text(location)
            .close("p");
    }
    m.close("div");

    m.close("a");
}

/// Photo details dialog. Present but hidden when nothing is selected; the
/// page script fills its `data-photo-field` slots from the clicked card.
fn modal(m: &mut Markup, ctx: &ViewContext, photo: Option<&GalleryPhoto>, close: &str) {
    let title = photo.map(|p| p.title.as_str()).unwrap_or_default();
    let image = photo.and_then(GalleryPhoto::image);
    let location = photo.and_then(GalleryPhoto::location);
    let date = photo.and_then(GalleryPhoto::date);

    m.open_tag(
        &Entrance::on_mount(Motion::FadeIn).lasting(200).decorate(
            Tag::new("div")
                .attr("class", "modal")
                .attr("role", "dialog")
                .attr("aria-modal", "true")
                .attr("aria-label", title)
                .attr("data-photo-modal", "")
                .flag("hidden", photo.is_none()),
        ),
    );
    m.open_tag(
        &Tag::new("a")
            .attr("class", "modal__backdrop")
            .attr("href", close)
            .attr("aria-label", "Close photo")
            .attr("data-modal-close", ""),
    )
    .close("a");

    m.open_tag(
        &Entrance::on_mount(Motion::ScaleIn)
            .lasting(200)
            .decorate(Tag::new("div").attr("class", "modal__panel")),
    );
    m.open_tag(
        &Tag::new("a")
            .attr("class", "modal__close")
            .attr("href", close)
            .attr("aria-label", "Close")
            .attr("data-modal-close", ""),
    )
    .raw(&Icon::Close.svg(28))
    .close("a");

    m.open("div", &[("class", "modal__media")]);
    m.open_tag(
        &Tag::new("img")
            .attr("class", "modal__image")
            .attr_opt("src", image.map(|i| ctx.asset(i)))
            .attr("alt", title)
            .attr("data-photo-field", "image")
            .flag("hidden", image.is_none()),
    );
    m.open_tag(
        &Tag::new("div")
            .attr("class", "photo-placeholder")
            .attr("data-photo-field", "placeholder")
            .flag("hidden", image.is_some()),
    )
    .raw(&Icon::Camera.svg(80))
    .close("div");
    m.close("div");

    m.open("div", &[("class", "modal__body")]);
    m.element("h3", &[("class", "modal__title"), ("data-photo-field", "title")], title);
    m.element(
        "p",
        &[("class", "modal__description"), ("data-photo-field", "description")],
        photo.map(|p| p.description.as_str()).unwrap_or_default(),
    );
    m.open("div", &[("class", "modal__meta")]);
    meta(m, Icon::MapPin, "location", location);
    meta(m, Icon::Calendar, "date", date);
    m.close("div");
    m.close("div");

    m.close("div");
    m.close("div");
}

fn meta(m: &mut Markup, icon: Icon, field: &str, value: Option<&str>) {
    m.open_tag(&Tag::new("span").attr("data-photo-meta", field).flag("hidden", value.is_none()))
        .raw(&icon.svg(14))
        .element("span", &[("data-photo-field", field)], value.unwrap_or_default())
        .close("span");
}

fn image_or_placeholder(m: &mut Markup, ctx: &ViewContext, photo: &GalleryPhoto, class: &str, glyph: u32) {
    match photo.image() {
        Some(image) => {
            m.open_tag(
                &Tag::new("img")
                    .attr("class", class)
                    .attr("src", ctx.asset(image))
                    .attr("alt", photo.title.as_str())
                    .attr("loading", "lazy"),
            );
        }
        None => {
            m.open("div", &[("class", "photo-placeholder")])
                .raw(&Icon::Camera.svg(glyph))
                .close("div");
        }
    }
}

/// Rebuilds gallery state from the `photo` request parameter.
pub fn state_from(photo: Option<u32>, photos: &[GalleryPhoto]) -> GalleryState {
    let mut state = GalleryState::default();
    if let Some(id) = photo {
        state.apply(GalleryEvent::Select(id.into()), photos);
    }
    state
}
