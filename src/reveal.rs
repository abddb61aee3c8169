//! Section reveal: a one-shot `Hidden → Visible` machine per section.
//!
//! A section starts hidden (transparent, pushed down, tilted back) and
//! animates to its resting state the first time any of its rows enters
//! the viewport. Once visible it stays visible for the rest of the page
//! load, however often it leaves and re-enters the viewport.

use std::time::Duration;

use crate::content::SectionId;
use crate::easing::Easing;
use crate::layout::PageLayout;

/// Length of the entrance transition.
pub const REVEAL_DURATION: Duration = Duration::from_millis(800);

/// Vertical offset of the hidden variant (50px, in rows).
pub const HIDDEN_OFFSET_ROWS: f32 = 3.0;

/// Tilt of the hidden variant around the horizontal axis.
pub const HIDDEN_TILT_DEG: f32 = -10.0;

const REVEAL_EASING: Easing = Easing::Ease;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    /// Entered the viewport at `since` (page clock).
    Visible { since: Duration },
}

/// Interpolated presentation values for one section at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    /// 0.0 = invisible, 1.0 = fully drawn.
    pub opacity: f32,
    /// Rows the content is pushed down by.
    pub offset_rows: f32,
    /// Degrees of backward tilt, negative while entering.
    pub tilt_deg: f32,
}

impl RevealFrame {
    pub const HIDDEN: RevealFrame = RevealFrame {
        opacity: 0.0,
        offset_rows: HIDDEN_OFFSET_ROWS,
        tilt_deg: HIDDEN_TILT_DEG,
    };

    pub const VISIBLE: RevealFrame = RevealFrame {
        opacity: 1.0,
        offset_rows: 0.0,
        tilt_deg: 0.0,
    };

    fn lerp(progress: f32) -> Self {
        let inv = 1.0 - progress;
        RevealFrame {
            opacity: progress,
            offset_rows: HIDDEN_OFFSET_ROWS * inv,
            tilt_deg: HIDDEN_TILT_DEG * inv,
        }
    }

    /// Whether the transition has settled.
    pub fn is_settled(&self) -> bool {
        *self == RevealFrame::VISIBLE
    }
}

/// Reveal state for all six sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealAnimator {
    states: [RevealState; 6],
}

impl RevealAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: SectionId) -> RevealState {
        self.states[id.index()]
    }

    /// Fire the reveal for every hidden section intersecting the viewport.
    ///
    /// Returns the sections revealed by this call.
    pub fn observe(&mut self, layout: &PageLayout, offset: u16, now: Duration) -> Vec<SectionId> {
        let mut fired = Vec::new();
        for id in layout.intersecting(offset) {
            let state = &mut self.states[id.index()];
            if *state == RevealState::Hidden {
                *state = RevealState::Visible { since: now };
                fired.push(id);
            }
        }
        if !fired.is_empty() {
            log::debug!("revealed sections {:?} at offset {}", fired, offset);
        }
        fired
    }

    /// Presentation values for a section at `now`.
    pub fn frame(&self, id: SectionId, now: Duration) -> RevealFrame {
        match self.state(id) {
            RevealState::Hidden => RevealFrame::HIDDEN,
            RevealState::Visible { since } => {
                let elapsed = now.saturating_sub(since);
                if elapsed >= REVEAL_DURATION {
                    RevealFrame::VISIBLE
                } else {
                    let t = elapsed.as_secs_f32() / REVEAL_DURATION.as_secs_f32();
                    RevealFrame::lerp(REVEAL_EASING.apply(t))
                }
            }
        }
    }

    /// True while any revealed section is still mid-transition.
    pub fn is_animating(&self, now: Duration) -> bool {
        self.states.iter().any(|s| match s {
            RevealState::Visible { since } => now.saturating_sub(*since) < REVEAL_DURATION,
            RevealState::Hidden => false,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Viewport;

    fn layout() -> PageLayout {
        PageLayout::compute(Viewport::new(80, 24))
    }

    #[test]
    fn all_sections_start_hidden() {
        let animator = RevealAnimator::new();
        for id in SectionId::ALL {
            assert_eq!(animator.state(id), RevealState::Hidden);
            assert_eq!(animator.frame(id, Duration::ZERO), RevealFrame::HIDDEN);
        }
    }

    #[test]
    fn observe_at_top_reveals_home() {
        let mut animator = RevealAnimator::new();
        let load = Duration::ZERO;
        let fired = animator.observe(&layout(), 0, load);
        assert_eq!(fired, vec![SectionId::Home]);
        assert_eq!(
            animator.state(SectionId::Home),
            RevealState::Visible { since: load }
        );
        assert_eq!(animator.state(SectionId::About), RevealState::Hidden);
    }

    #[test]
    fn reveal_is_one_shot() {
        let layout = layout();
        let mut animator = RevealAnimator::new();
        let first = Duration::from_secs(1);
        animator.observe(&layout, 0, first);

        let about = layout.section(SectionId::About).top;
        animator.observe(&layout, about, Duration::from_secs(2));
        let again = animator.observe(&layout, 0, Duration::from_secs(5));

        assert!(again.is_empty());
        assert_eq!(
            animator.state(SectionId::Home),
            RevealState::Visible { since: first }
        );
    }

    #[test]
    fn frame_interpolates_then_settles() {
        let mut animator = RevealAnimator::new();
        animator.observe(&layout(), 0, Duration::ZERO);

        let start = animator.frame(SectionId::Home, Duration::ZERO);
        assert_eq!(start.opacity, 0.0);

        let mid = animator.frame(SectionId::Home, Duration::from_millis(400));
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.offset_rows > 0.0 && mid.offset_rows < HIDDEN_OFFSET_ROWS);
        assert!(mid.tilt_deg < 0.0 && mid.tilt_deg > HIDDEN_TILT_DEG);

        let end = animator.frame(SectionId::Home, REVEAL_DURATION);
        assert!(end.is_settled());
        assert!(!animator.is_animating(REVEAL_DURATION));
        assert!(animator.is_animating(Duration::from_millis(10)));
    }

    #[test]
    fn frame_before_since_is_start_of_transition() {
        let mut animator = RevealAnimator::new();
        animator.observe(&layout(), 0, Duration::from_secs(3));
        let frame = animator.frame(SectionId::Home, Duration::from_secs(1));
        assert_eq!(frame.opacity, 0.0);
    }
}
