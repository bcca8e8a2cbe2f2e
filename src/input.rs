//! Input intent sources
//!
//! The session only sees three signals: move-left, move-right and an
//! edge-triggered start request.

use crate::sim::GameSession;

pub trait InputSource {
    fn move_left(&self) -> bool;
    fn move_right(&self) -> bool;
    /// Returns true once per start press, then clears it
    fn take_start_request(&mut self) -> bool;
}

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
}

/// Held-key state fed by key down/up events
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    left: bool,
    right: bool,
    start_pending: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::ArrowLeft => self.left = true,
            Key::ArrowRight => self.right = true,
            Key::Space => self.start_pending = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::ArrowLeft => self.left = false,
            Key::ArrowRight => self.right = false,
            Key::Space => {}
        }
    }
}

impl InputSource for KeyboardState {
    fn move_left(&self) -> bool {
        self.left
    }

    fn move_right(&self) -> bool {
        self.right
    }

    fn take_start_request(&mut self) -> bool {
        std::mem::take(&mut self.start_pending)
    }
}

/// Demo player that chases the ball and restarts finished runs
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    left: bool,
    right: bool,
    start: bool,
    frames: u64,
}

impl Autopilot {
    /// Ignore offsets smaller than this to avoid jitter
    const DEAD_ZONE: f64 = 6.0;
    /// How far ahead (ms) to lead the ball
    const LOOKAHEAD: f64 = 40.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Decide intents for the next frame
    pub fn observe(&mut self, session: &GameSession) {
        self.frames += 1;
        self.start = session.phase.accepts_start();

        // Oscillating aim offset so the paddle doesn't settle into a perfect loop
        let t = self.frames as f64 * 0.01;
        let offset = (t.sin() * 0.3 + (t * 0.7).sin() * 0.15) * session.paddle.width / 2.0;

        let ball = &session.ball;
        let target = ball.pos.x + ball.vel.x * Self::LOOKAHEAD + offset;
        let delta = target - session.paddle.center_x();

        self.left = delta < -Self::DEAD_ZONE;
        self.right = delta > Self::DEAD_ZONE;
    }
}

impl InputSource for Autopilot {
    fn move_left(&self) -> bool {
        self.left
    }

    fn move_right(&self) -> bool {
        self.right
    }

    fn take_start_request(&mut self) -> bool {
        std::mem::take(&mut self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_keyboard_intents() {
        let mut keys = KeyboardState::new();
        keys.key_down(Key::ArrowLeft);
        assert!(keys.move_left());
        assert!(!keys.move_right());
        keys.key_down(Key::ArrowRight);
        keys.key_up(Key::ArrowLeft);
        assert!(!keys.move_left());
        assert!(keys.move_right());
    }

    #[test]
    fn test_start_request_consumed_once() {
        let mut keys = KeyboardState::new();
        keys.key_down(Key::Space);
        assert!(keys.take_start_request());
        assert!(!keys.take_start_request());
    }

    #[test]
    fn test_autopilot_chases_ball() {
        let mut session = GameSession::new(1);
        session.ball.pos = DVec2::new(50.0, 300.0);
        session.ball.vel = DVec2::ZERO;

        let mut pilot = Autopilot::new();
        pilot.observe(&session);
        assert!(pilot.move_left());
        assert!(!pilot.move_right());

        session.ball.pos = DVec2::new(750.0, 300.0);
        pilot.observe(&session);
        assert!(pilot.move_right());
    }

    #[test]
    fn test_autopilot_requests_start() {
        let session = GameSession::new(1);
        let mut pilot = Autopilot::new();
        pilot.observe(&session);
        assert!(pilot.take_start_request());
        assert!(!pilot.take_start_request());
    }
}
