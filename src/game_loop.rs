//! Frame driver
//!
//! One call per display frame: read input, advance the session, draw.
//! The loop never stops on its own; phases only gate whether `update`
//! has any effect.

use crate::hud::{HudSink, Screen};
use crate::input::InputSource;
use crate::renderer::{RenderSurface, draw_scene};
use crate::settings::Settings;
use crate::sim::{GameSession, Outputs};

/// Turns monotonically increasing timestamps (ms) into per-frame dt
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed time since the previous timestamp (the first frame is measured from 0)
    pub fn tick(&mut self, timestamp: f64) -> f64 {
        let dt = timestamp - self.last_time;
        self.last_time = timestamp;
        dt
    }
}

/// Owns a session and drives it frame by frame
#[derive(Debug, Clone)]
pub struct GameLoop {
    pub session: GameSession,
    pub settings: Settings,
    clock: FrameClock,
    frames: u64,
}

impl GameLoop {
    /// Create the loop and show the start screen
    pub fn new(settings: Settings, hud: &mut dyn HudSink) -> Self {
        let session = GameSession::from_settings(&settings);
        hud.update_stats(session.score, session.lives);
        if let Some(screen) = Screen::for_phase(session.phase) {
            hud.show_screen(screen, session.score);
        }
        log::info!("Session created (seed {})", settings.seed);
        Self {
            session,
            settings,
            clock: FrameClock::new(),
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame at `timestamp` (ms)
    pub fn frame(
        &mut self,
        timestamp: f64,
        input: &mut dyn InputSource,
        out: &mut Outputs<'_>,
        surface: &mut dyn RenderSurface,
    ) {
        // Start presses are consumed every frame; only non-PLAYING phases act on them
        if input.take_start_request() && self.session.phase.accepts_start() {
            self.session.start(out);
        }
        self.session.set_intents(input.move_left(), input.move_right());

        let dt = self.settings.clamp_dt(self.clock.tick(timestamp));
        self.session.update(dt, out);

        let shake = self.session.shake_offset();
        draw_scene(&self.session, shake, surface);

        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::CueLog;
    use crate::hud::HudState;
    use crate::input::{Key, KeyboardState};
    use crate::renderer::DrawList;
    use crate::sim::GamePhase;

    #[test]
    fn test_clock_dt() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(100.0), 100.0);
        assert_eq!(clock.tick(116.0), 16.0);
        // Stalls are not smoothed out
        assert_eq!(clock.tick(5116.0), 5000.0);
    }

    #[test]
    fn test_start_screen_then_play() {
        let mut audio = CueLog::new();
        let mut hud = HudState::default();
        let mut keys = KeyboardState::new();
        let mut list = DrawList::new();
        let mut game = GameLoop::new(Settings::default(), &mut hud);
        assert_eq!(hud.screen, Some((Screen::Start, 0)));

        game.frame(16.0, &mut keys, &mut Outputs::new(&mut audio, &mut hud), &mut list);
        assert_eq!(game.session.phase, GamePhase::Start);
        assert!(!list.commands.is_empty());

        keys.key_down(Key::Space);
        game.frame(32.0, &mut keys, &mut Outputs::new(&mut audio, &mut hud), &mut list);
        assert_eq!(game.session.phase, GamePhase::Playing);
        assert_eq!(hud.screen, None);
        assert!(audio.music_playing);
        assert_eq!(game.frames(), 2);
    }

    #[test]
    fn test_start_ignored_while_playing() {
        let mut audio = CueLog::new();
        let mut hud = HudState::default();
        let mut keys = KeyboardState::new();
        let mut list = DrawList::new();
        let mut game = GameLoop::new(Settings::default(), &mut hud);

        keys.key_down(Key::Space);
        game.frame(16.0, &mut keys, &mut Outputs::new(&mut audio, &mut hud), &mut list);
        game.session.score = 40;

        // A press during play is consumed without restarting
        keys.key_down(Key::Space);
        game.frame(32.0, &mut keys, &mut Outputs::new(&mut audio, &mut hud), &mut list);
        assert_eq!(game.session.score, 40);
        assert!(!keys.take_start_request());
    }

    #[test]
    fn test_intents_reach_paddle() {
        let mut audio = CueLog::new();
        let mut hud = HudState::default();
        let mut keys = KeyboardState::new();
        let mut list = DrawList::new();
        let mut game = GameLoop::new(Settings::default(), &mut hud);

        keys.key_down(Key::Space);
        game.frame(0.0, &mut keys, &mut Outputs::new(&mut audio, &mut hud), &mut list);
        let x = game.session.paddle.pos.x;

        keys.key_down(Key::ArrowLeft);
        game.frame(10.0, &mut keys, &mut Outputs::new(&mut audio, &mut hud), &mut list);
        assert!((game.session.paddle.pos.x - (x - 8.0)).abs() < 1e-9);
    }

    #[test]
    fn test_max_frame_dt_clamps() {
        let mut audio = CueLog::new();
        let mut hud = HudState::default();
        let mut keys = KeyboardState::new();
        let mut list = DrawList::new();
        let settings = Settings {
            max_frame_dt: Some(20.0),
            ..Settings::default()
        };
        let mut game = GameLoop::new(settings, &mut hud);

        keys.key_down(Key::Space);
        game.frame(0.0, &mut keys, &mut Outputs::new(&mut audio, &mut hud), &mut list);
        let y = game.session.ball.pos.y;

        // A 2 second stall moves the ball as if 20 ms passed
        game.frame(2000.0, &mut keys, &mut Outputs::new(&mut audio, &mut hud), &mut list);
        assert!((game.session.ball.pos.y - (y - 0.4 * 20.0)).abs() < 1e-9);
    }
}
