//! Neon Breakout - A paddle-and-ball brick breaker
//!
//! Core modules:
//! - `sim`: Simulation core (paddle, ball, bricks, particles, session state machine)
//! - `renderer`: Draw command contract and a software tessellator
//! - `audio`: Sound cue sink contract
//! - `hud`: Score/lives and terminal screen sink contract
//! - `input`: Intent sources (keyboard mapping, autopilot)
//! - `game_loop`: Frame driver tying the collaborators to a session
//! - `settings`: Data-driven configuration

pub mod audio;
pub mod color;
pub mod game_loop;
pub mod hud;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use color::Color;
pub use game_loop::{FrameClock, GameLoop};
pub use settings::{QualityPreset, Settings, SettingsError};

/// Game configuration constants
///
/// Time is measured in milliseconds, so speeds are field units per millisecond.
pub mod consts {
    use crate::Color;

    /// Field dimensions
    pub const FIELD_WIDTH: f64 = 800.0;
    pub const FIELD_HEIGHT: f64 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f64 = 120.0;
    pub const PADDLE_HEIGHT: f64 = 20.0;
    pub const PADDLE_SPEED: f64 = 0.8;
    /// Distance from the field bottom to the paddle top edge
    pub const PADDLE_BOTTOM_OFFSET: f64 = 40.0;
    pub const PADDLE_COLOR: Color = Color::from_hex(0x00f3ff);
    pub const PADDLE_GLOW: f64 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 8.0;
    pub const BALL_BASE_SPEED: f64 = 0.4;
    pub const BALL_MAX_SPEED: f64 = 0.8;
    /// Distance from the field bottom to the ball spawn point
    pub const BALL_SPAWN_OFFSET: f64 = 60.0;
    pub const BALL_COLOR: Color = Color::from_hex(0xffffff);
    pub const BALL_GLOW: f64 = 15.0;
    /// Horizontal velocity per unit of offset from the paddle center
    pub const PADDLE_ENGLISH: f64 = 0.005;
    /// Speed boost when ball hits paddle (multiplicative)
    pub const PADDLE_BOOST: f64 = 1.05;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 8;
    pub const BRICK_PADDING: f64 = 10.0;
    pub const BRICK_MARGIN_TOP: f64 = 80.0;
    pub const BRICK_HEIGHT: f64 = 30.0;
    pub const BRICK_GLOW: f64 = 10.0;
    pub const BRICK_PALETTE: [Color; 5] = [
        Color::from_hex(0xff00ff),
        Color::from_hex(0xff00aa),
        Color::from_hex(0xff0055),
        Color::from_hex(0xff0000),
        Color::from_hex(0xff5500),
    ];

    /// Scoring
    pub const BRICK_POINTS: u32 = 10;
    pub const STARTING_LIVES: u32 = 3;

    /// Particle bursts
    pub const PADDLE_BURST: usize = 10;
    pub const BRICK_BURST: usize = 20;
    pub const PARTICLE_MIN_SPEED: f64 = 0.1;
    pub const PARTICLE_SPEED_RANGE: f64 = 0.2;
    pub const PARTICLE_MIN_DECAY: f64 = 0.001;
    pub const PARTICLE_DECAY_RANGE: f64 = 0.002;
    pub const PARTICLE_MIN_SIZE: f64 = 2.0;
    pub const PARTICLE_SIZE_RANGE: f64 = 3.0;
    /// Applied once per update call, not scaled by dt
    pub const PARTICLE_SHRINK: f64 = 0.99;

    /// Screen shake (duration ms, magnitude units)
    pub const BRICK_SHAKE: (f64, f64) = (100.0, 5.0);
    pub const BALL_LOST_SHAKE: (f64, f64) = (300.0, 10.0);
}
