//! Entrance animations.
//!
//! The animation engine itself lives in the browser; the renderer only
//! declares, per element, which motion to play, how long, after what delay,
//! and whether it starts on mount or the first time the element scrolls into
//! view. In-view entrances play once per page load.

use crate::shared::html::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    FadeIn,
    FadeUp,
    SlideFromLeft,
    SlideFromRight,
    ScaleIn,
    DropIn,
}

impl Motion {
    pub fn name(self) -> &'static str {
        match self {
            Motion::FadeIn => "fade-in",
            Motion::FadeUp => "fade-up",
            Motion::SlideFromLeft => "slide-left",
            Motion::SlideFromRight => "slide-right",
            Motion::ScaleIn => "scale-in",
            Motion::DropIn => "drop-in",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Mount,
    /// Fires the first time the element is within `margin_px` of the viewport.
    /// Negative margins shrink the viewport.
    InView { margin_px: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    pub motion: Motion,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub trigger: Trigger,
}

impl Entrance {
    pub const DEFAULT_DURATION_MS: u32 = 500;
    pub const SECTION_MARGIN_PX: i32 = -100;
    pub const CARD_MARGIN_PX: i32 = -50;

    pub const fn on_mount(motion: Motion) -> Self {
        Self {
            motion,
            duration_ms: Self::DEFAULT_DURATION_MS,
            delay_ms: 0,
            trigger: Trigger::Mount,
        }
    }

    pub const fn in_view(motion: Motion, margin_px: i32) -> Self {
        Self {
            motion,
            duration_ms: Self::DEFAULT_DURATION_MS,
            delay_ms: 0,
            trigger: Trigger::InView { margin_px },
        }
    }

    /// Section header entrance.
    pub const fn section() -> Self {
        Self::in_view(Motion::FadeUp, Self::SECTION_MARGIN_PX)
    }

    /// Card entrance.
    pub const fn card() -> Self {
        Self::in_view(Motion::FadeUp, Self::CARD_MARGIN_PX)
    }

    pub const fn delayed(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub const fn lasting(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Stagger by position in a list.
    pub const fn staggered(self, index: usize, step_ms: u32) -> Self {
        self.delayed(self.delay_ms + step_ms * index as u32)
    }

    pub fn decorate<'a>(&self, tag: Tag<'a>) -> Tag<'a> {
        let tag = tag
            .attr("data-reveal", self.motion.name())
            .attr("data-reveal-duration", self.duration_ms.to_string())
            .attr("data-reveal-delay", self.delay_ms.to_string());
        match self.trigger {
            Trigger::Mount => tag.attr("data-reveal-on", "mount"),
            Trigger::InView { margin_px } => tag
                .attr("data-reveal-on", "view")
                .attr("data-reveal-margin", margin_px.to_string()),
        }
    }
}
