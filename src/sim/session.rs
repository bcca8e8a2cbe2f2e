//! Game session and state machine
//!
//! START -> PLAYING -> GAMEOVER | WIN -> PLAYING ...
//!
//! The session owns every entity and runs the per-frame sequence:
//! paddle, ball (with collisions), event application, particles, shake.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, BallContext};
use super::bricks::{BrickGrid, GridLayout};
use super::paddle::Paddle;
use super::particles::ParticleSystem;
use super::state::{Field, GameEvent, GamePhase, ScreenShake};
use crate::audio::{AudioSink, SoundCue};
use crate::consts::*;
use crate::hud::{HudSink, Screen};
use crate::settings::Settings;

/// Collaborators notified while the session runs
pub struct Outputs<'a> {
    pub audio: &'a mut dyn AudioSink,
    pub hud: &'a mut dyn HudSink,
}

impl<'a> Outputs<'a> {
    pub fn new(audio: &'a mut dyn AudioSink, hud: &'a mut dyn HudSink) -> Self {
        Self { audio, hud }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    pub field: Field,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    /// Visual particles (not gameplay-affecting)
    pub particles: ParticleSystem,
    pub shake: ScreenShake,
    /// Whether shake offsets reach the draw surface
    pub shake_enabled: bool,
    /// Gameplay randomness (ball serves)
    rng: Pcg32,
    /// Cosmetic randomness (shake offsets)
    fx_rng: Pcg32,
    /// Scratch buffer reused every frame
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session in the START phase
    pub fn new(seed: u64) -> Self {
        Self::from_settings(&Settings {
            seed,
            ..Settings::default()
        })
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let seed = settings.seed;
        let field = Field::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::new(field, &mut rng);

        Self {
            seed,
            field,
            phase: GamePhase::Start,
            score: 0,
            lives: STARTING_LIVES,
            paddle: Paddle::new(field),
            ball,
            bricks: BrickGrid::new(GridLayout::default(), field),
            particles: ParticleSystem::new(seed.wrapping_add(1), settings.max_particles()),
            shake: ScreenShake::default(),
            shake_enabled: settings.effective_screen_shake(),
            rng,
            fx_rng: Pcg32::seed_from_u64(seed.wrapping_add(2)),
            events: Vec::with_capacity(8),
        }
    }

    /// Begin a new run: fresh score, lives, bricks, ball and paddle
    pub fn start(&mut self, out: &mut Outputs<'_>) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.bricks.reset(self.field);
        self.ball.reset(self.field, &mut self.rng);
        self.paddle.reset(self.field);

        out.audio.start_music();
        out.hud.update_stats(self.score, self.lives);
        out.hud.hide_screens();

        log::info!("Run started (seed {})", self.seed);
    }

    /// Copy the player's movement intents onto the paddle
    pub fn set_intents(&mut self, move_left: bool, move_right: bool) {
        self.paddle.move_left = move_left;
        self.paddle.move_right = move_right;
    }

    /// Advance one frame. No-op unless PLAYING.
    pub fn update(&mut self, dt: f64, out: &mut Outputs<'_>) {
        if self.phase != GamePhase::Playing {
            return;
        }

        self.paddle.update(dt, self.field);

        let mut events = std::mem::take(&mut self.events);
        events.clear();
        {
            let mut ctx = BallContext {
                field: self.field,
                paddle: &self.paddle,
                bricks: &mut self.bricks,
                particles: &mut self.particles,
                events: &mut events,
            };
            self.ball.update(dt, &mut ctx);
        }
        for event in &events {
            self.apply_event(*event, out);
        }
        self.events = events;

        self.particles.update(dt);
        self.shake.decay(dt);
    }

    fn apply_event(&mut self, event: GameEvent, out: &mut Outputs<'_>) {
        match event {
            GameEvent::WallBounce => out.audio.play(SoundCue::WallBounce),
            GameEvent::PaddleHit { .. } => out.audio.play(SoundCue::PaddleBounce),
            GameEvent::BrickBroken { index, .. } => {
                self.score += BRICK_POINTS;
                out.hud.update_stats(self.score, self.lives);
                self.trigger_shake(BRICK_SHAKE.0, BRICK_SHAKE.1);
                out.audio.play(SoundCue::BrickBreak);
                log::debug!("Brick {} broken, score {}", index, self.score);
            }
            GameEvent::GridCleared => self.win(out),
            GameEvent::BallLost => self.lose_ball(out),
        }
    }

    fn lose_ball(&mut self, out: &mut Outputs<'_>) {
        self.lives = self.lives.saturating_sub(1);
        out.hud.update_stats(self.score, self.lives);
        self.trigger_shake(BALL_LOST_SHAKE.0, BALL_LOST_SHAKE.1);
        out.audio.play(SoundCue::BallLost);
        log::debug!("Ball lost, {} lives left", self.lives);

        if self.lives == 0 {
            self.game_over(out);
        } else {
            // Paddle and bricks persist
            self.ball.reset(self.field, &mut self.rng);
        }
    }

    fn game_over(&mut self, out: &mut Outputs<'_>) {
        self.phase = GamePhase::GameOver;
        out.audio.stop_music();
        out.hud.show_screen(Screen::GameOver, self.score);
        log::info!("Game over, final score {}", self.score);
    }

    fn win(&mut self, out: &mut Outputs<'_>) {
        self.phase = GamePhase::Win;
        out.audio.stop_music();
        out.hud.show_screen(Screen::Win, self.score);
        log::info!("Grid cleared, final score {}", self.score);
    }

    /// Start a shake, replacing any shake in progress
    pub fn trigger_shake(&mut self, duration: f64, magnitude: f64) {
        self.shake.trigger(duration, magnitude);
    }

    /// Random draw offset for this frame while shaking, in `[-m/2, m/2]` per axis
    pub fn shake_offset(&mut self) -> Option<DVec2> {
        if !self.shake_enabled || !self.shake.is_active() {
            return None;
        }
        let m = self.shake.magnitude;
        let dx = (self.fx_rng.random::<f64>() - 0.5) * m;
        let dy = (self.fx_rng.random::<f64>() - 0.5) * m;
        Some(DVec2::new(dx, dy))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            seed: self.seed,
            phase: self.phase,
            score: self.score,
            lives: self.lives,
            paddle: self.paddle.clone(),
            ball: self.ball.clone(),
            bricks_remaining: self.bricks.active_count(),
            particles: self.particles.len(),
            shake: self.shake,
        }
    }
}

/// Serializable summary of a session (diagnostics only, never reloaded)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks_remaining: usize,
    pub particles: usize,
    pub shake: ScreenShake,
}
