// Render Surface
// Seam between the carousel controller and whatever draws the strip

use std::time::{Duration, Instant};

use super::state::ArrowState;

/// Timing curve applied when the offset changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseInOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Offset changes apply immediately
    None,
    /// Offset changes animate over `duration`
    Animated { duration: Duration, easing: Easing },
}

impl Transition {
    pub fn ease_in_out(duration: Duration) -> Self {
        Self::Animated {
            duration,
            easing: Easing::EaseInOut,
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Animated { .. })
    }
}

/// Presentation target for a carousel.
///
/// Methods mirror what a styled strip exposes: a transition property, a
/// translate offset, per-card sizing, an indicator and two arrows. `now`
/// is passed so animated surfaces can interpolate from where they are.
pub trait RenderSurface {
    fn set_transition(&mut self, transition: Transition);

    fn set_offset(&mut self, offset: f32, now: Instant);

    /// Size every card to `width` with a right margin of `margin`
    fn set_card_size(&mut self, width: f32, margin: f32);

    /// Replace the indicator with `count` dots, marking `active`
    fn rebuild_indicator(&mut self, count: usize, active: usize);

    fn set_active_dot(&mut self, active: usize);

    fn set_arrows(&mut self, previous: ArrowState, next: ArrowState);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// Surface that remembers the last value of every property
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub transition: Option<Transition>,
        pub offset: f32,
        pub offset_writes: usize,
        pub card_size: Option<(f32, f32)>,
        pub dots: usize,
        pub active_dot: usize,
        pub indicator_rebuilds: usize,
        pub arrows: Option<(ArrowState, ArrowState)>,
    }

    impl RenderSurface for RecordingSurface {
        fn set_transition(&mut self, transition: Transition) {
            self.transition = Some(transition);
        }

        fn set_offset(&mut self, offset: f32, _now: Instant) {
            self.offset = offset;
            self.offset_writes += 1;
        }

        fn set_card_size(&mut self, width: f32, margin: f32) {
            self.card_size = Some((width, margin));
        }

        fn rebuild_indicator(&mut self, count: usize, active: usize) {
            self.dots = count;
            self.active_dot = active;
            self.indicator_rebuilds += 1;
        }

        fn set_active_dot(&mut self, active: usize) {
            self.active_dot = active;
        }

        fn set_arrows(&mut self, previous: ArrowState, next: ArrowState) {
            self.arrows = Some((previous, next));
        }
    }
}
