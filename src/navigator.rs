//! Page scroll position and anchor navigation.
//!
//! `scroll_to_section` is the header's nav action: look the anchor up in
//! the laid-out page and glide there. An anchor that is not on the page
//! is ignored.

use std::time::Duration;

use crate::content::SectionId;
use crate::easing::Easing;
use crate::layout::PageLayout;

/// How long a smooth scroll takes from start to finish.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(400);

/// An in-flight smooth scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothScroll {
    pub from: u16,
    pub to: u16,
    pub started: Duration,
    /// Section the glide is heading for, if it was started from an anchor.
    pub section: Option<SectionId>,
}

impl SmoothScroll {
    /// Offset at `now`, and whether the scroll has finished.
    fn sample(&self, now: Duration) -> (u16, bool) {
        let elapsed = now.saturating_sub(self.started);
        if elapsed >= SMOOTH_SCROLL_DURATION {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / SMOOTH_SCROLL_DURATION.as_secs_f32();
        let eased = Easing::EaseInOut.apply(t);
        let from = f32::from(self.from);
        let to = f32::from(self.to);
        ((from + (to - from) * eased).round() as u16, false)
    }
}

/// Vertical scroll position of the page body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: u16,
    animation: Option<SmoothScroll>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn animation(&self) -> Option<SmoothScroll> {
        self.animation
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Where the page will rest once any animation completes.
    pub fn target(&self) -> u16 {
        self.animation.map_or(self.offset, |a| a.to)
    }

    /// Smooth-scroll so the section's first row aligns with the viewport top.
    ///
    /// Unknown anchors are a no-op; returns whether a scroll was started.
    pub fn scroll_to_section(&mut self, layout: &PageLayout, anchor: &str, now: Duration) -> bool {
        let Some(section) = layout.find_anchor(anchor) else {
            log::debug!("scroll_to_section: no element with id {:?}", anchor);
            return false;
        };
        let to = section.top.min(layout.max_scroll());
        log::debug!("scroll_to_section: {} -> row {}", anchor, to);
        self.start_glide(to, Some(section.id), now);
        true
    }

    /// Start a smooth scroll to `to`.
    pub fn glide_to(&mut self, to: u16, now: Duration) {
        self.start_glide(to, None, now);
    }

    fn start_glide(&mut self, to: u16, section: Option<SectionId>, now: Duration) {
        if to == self.offset {
            self.animation = None;
            return;
        }
        self.animation = Some(SmoothScroll {
            from: self.offset,
            to,
            started: now,
            section,
        });
    }

    /// Jump immediately, cancelling any smooth scroll.
    pub fn jump_to(&mut self, offset: u16, layout: &PageLayout) {
        self.animation = None;
        self.offset = offset.min(layout.max_scroll());
    }

    /// Relative manual scroll, clamped to the page.
    pub fn scroll_by(&mut self, delta: i32, layout: &PageLayout) {
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(layout.max_scroll()));
        self.jump_to(next as u16, layout);
    }

    /// Advance the smooth scroll to `now`. Returns whether the offset moved.
    pub fn tick(&mut self, now: Duration) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };
        let (offset, done) = animation.sample(now);
        if done {
            self.animation = None;
        }
        let moved = offset != self.offset;
        self.offset = offset;
        moved
    }

    /// Keep the offset valid after the layout changes (e.g. on resize).
    ///
    /// A glide toward a section is re-aimed at that section's new top, and
    /// both of its ends are clamped so no intermediate offset overshoots.
    pub fn clamp_to(&mut self, layout: &PageLayout) {
        let max = layout.max_scroll();
        self.offset = self.offset.min(max);
        if let Some(animation) = &mut self.animation {
            animation.from = animation.from.min(max);
            animation.to = match animation.section {
                Some(id) => layout.section(id).top,
                None => animation.to,
            }
            .min(max);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
