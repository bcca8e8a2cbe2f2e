//! Shared simulation types
//!
//! Field bounds, session phases, screen shake and the events the ball
//! reports back to the session.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Playing field bounds (origin top-left, +y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f64,
    pub height: f64,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start signal
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// All lives lost
    GameOver,
    /// Every brick cleared
    Win,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Start => "START",
            GamePhase::Playing => "PLAYING",
            GamePhase::GameOver => "GAMEOVER",
            GamePhase::Win => "WIN",
        }
    }

    /// Whether a start signal begins a new run from this phase
    pub fn accepts_start(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Decaying screen shake timer
///
/// A new trigger overwrites the current timer and magnitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenShake {
    /// Remaining time (ms)
    pub time: f64,
    /// Maximum offset while active
    pub magnitude: f64,
}

impl ScreenShake {
    pub fn trigger(&mut self, duration: f64, magnitude: f64) {
        self.time = duration;
        self.magnitude = magnitude;
    }

    /// Count the timer down by `dt`, floored at zero
    pub fn decay(&mut self, dt: f64) {
        if self.time > 0.0 {
            self.time = (self.time - dt).max(0.0);
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.time > 0.0
    }
}

/// Something that happened during the ball's update, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the left, right or top wall
    WallBounce,
    /// Ball bounced off the paddle
    PaddleHit { contact: DVec2 },
    /// A brick was deactivated
    BrickBroken { index: usize, center: DVec2 },
    /// The last active brick was broken this frame
    GridCleared,
    /// Ball fell past the bottom of the field
    BallLost,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shake_overwrites() {
        let mut shake = ScreenShake::default();
        shake.trigger(300.0, 10.0);
        shake.trigger(100.0, 5.0);
        assert_eq!(shake.time, 100.0);
        assert_eq!(shake.magnitude, 5.0);
    }

    #[test]
    fn test_shake_decay_floors_at_zero() {
        let mut shake = ScreenShake::default();
        shake.trigger(100.0, 5.0);
        shake.decay(60.0);
        assert!(shake.is_active());
        shake.decay(60.0);
        assert_eq!(shake.time, 0.0);
        assert!(!shake.is_active());
    }

    #[test]
    fn test_phase_accepts_start() {
        assert!(GamePhase::Start.accepts_start());
        assert!(GamePhase::GameOver.accepts_start());
        assert!(GamePhase::Win.accepts_start());
        assert!(!GamePhase::Playing.accepts_start());
    }
}
