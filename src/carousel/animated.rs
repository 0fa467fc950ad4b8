// Animated Surface
// RenderSurface that keeps strip properties and eases offset changes over time

use std::time::{Duration, Instant};

use super::state::ArrowState;
use super::surface::{Easing, RenderSurface, Transition};
use crate::utilities::{ease_in_out, lerp};

#[derive(Debug, Clone, Copy)]
struct Motion {
    from: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

/// Surface state the terminal renderer draws from.
///
/// An offset change under an animated transition starts a motion from the
/// currently displayed offset; under `Transition::None` it applies at once.
#[derive(Debug, Clone)]
pub struct AnimatedSurface {
    transition: Transition,
    target: f32,
    motion: Option<Motion>,
    card_width: f32,
    card_margin: f32,
    dot_count: usize,
    active_dot: usize,
    previous: ArrowState,
    next: ArrowState,
}

impl Default for AnimatedSurface {
    fn default() -> Self {
        Self {
            transition: Transition::None,
            target: 0.0,
            motion: None,
            card_width: 0.0,
            card_margin: 0.0,
            dot_count: 0,
            active_dot: 0,
            previous: ArrowState::new(false),
            next: ArrowState::new(false),
        }
    }
}

impl AnimatedSurface {
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Offset the strip settles on
    pub fn target_offset(&self) -> f32 {
        self.target
    }

    /// Offset displayed at `now`
    pub fn offset_at(&self, now: Instant) -> f32 {
        let Some(motion) = self.motion else {
            return self.target;
        };
        if motion.duration.is_zero() {
            return self.target;
        }

        let elapsed = now.saturating_duration_since(motion.started_at);
        let t = elapsed.as_secs_f32() / motion.duration.as_secs_f32();
        if t >= 1.0 {
            return self.target;
        }
        let progress = match motion.easing {
            Easing::EaseInOut => ease_in_out(t),
        };
        lerp(motion.from, self.target, progress)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.motion
            .is_some_and(|m| now.saturating_duration_since(m.started_at) < m.duration)
    }

    pub fn card_width(&self) -> f32 {
        self.card_width
    }

    pub fn card_margin(&self) -> f32 {
        self.card_margin
    }

    pub fn dot_count(&self) -> usize {
        self.dot_count
    }

    pub fn active_dot(&self) -> usize {
        self.active_dot
    }

    pub fn arrows(&self) -> (ArrowState, ArrowState) {
        (self.previous, self.next)
    }
}

impl RenderSurface for AnimatedSurface {
    fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
    }

    fn set_offset(&mut self, offset: f32, now: Instant) {
        match self.transition {
            Transition::None => {
                self.motion = None;
            }
            Transition::Animated { duration, easing } => {
                // An unchanged target leaves a running motion alone
                if offset == self.target {
                    return;
                }
                let from = self.offset_at(now);
                self.motion = Some(Motion {
                    from,
                    started_at: now,
                    duration,
                    easing,
                });
            }
        }
        self.target = offset;
    }

    fn set_card_size(&mut self, width: f32, margin: f32) {
        self.card_width = width;
        self.card_margin = margin;
    }

    fn rebuild_indicator(&mut self, count: usize, active: usize) {
        self.dot_count = count;
        self.active_dot = active;
    }

    fn set_active_dot(&mut self, active: usize) {
        self.active_dot = active;
    }

    fn set_arrows(&mut self, previous: ArrowState, next: ArrowState) {
        self.previous = previous;
        self.next = next;
    }
}
