// Likes
// Per-profile like toggles with short-lived floating hearts

use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::debug;

/// A heart shown over a profile after it was liked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingHeart {
    pub profile: usize,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct LikeBoard {
    liked: HashSet<usize>,
    hearts: Vec<FloatingHeart>,
    heart_lifetime: Duration,
}

impl LikeBoard {
    pub fn new(heart_lifetime: Duration) -> Self {
        Self {
            liked: HashSet::new(),
            hearts: Vec::new(),
            heart_lifetime,
        }
    }

    pub fn is_liked(&self, profile: usize) -> bool {
        self.liked.contains(&profile)
    }

    pub fn liked_count(&self) -> usize {
        self.liked.len()
    }

    /// Flip the like state; returns the new state.
    /// Only liking spawns a heart.
    pub fn toggle(&mut self, profile: usize, now: Instant) -> bool {
        if self.liked.remove(&profile) {
            debug!(profile, "profile unliked");
            return false;
        }

        self.liked.insert(profile);
        self.hearts.push(FloatingHeart {
            profile,
            expires_at: now + self.heart_lifetime,
        });
        debug!(profile, "profile liked");
        true
    }

    pub fn has_heart(&self, profile: usize) -> bool {
        self.hearts.iter().any(|h| h.profile == profile)
    }

    /// Drop expired hearts; returns true when any were removed
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.hearts.len();
        self.hearts.retain(|h| h.expires_at > now);
        self.hearts.len() != before
    }
}
