//! Rendering contract
//!
//! The session is drawn as an ordered list of draw commands sent to a
//! `RenderSurface`. How the surface turns them into pixels is up to it.

pub mod shapes;
pub mod vertex;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::Color;
use crate::consts::{BALL_COLOR, BALL_GLOW, BRICK_GLOW, PADDLE_COLOR, PADDLE_GLOW};
use crate::sim::GameSession;

pub use shapes::Tessellator;
pub use vertex::Vertex;

/// A single draw call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Start a new frame
    Clear,
    /// Offset every following shape (accumulates until reset)
    Translate(DVec2),
    ResetTransform,
    Rect {
        pos: DVec2,
        size: DVec2,
        color: Color,
        glow: Option<f64>,
    },
    Circle {
        center: DVec2,
        radius: f64,
        color: Color,
        glow: Option<f64>,
    },
    /// Small filled square faded by `alpha`
    Particle {
        pos: DVec2,
        size: f64,
        color: Color,
        alpha: f64,
    },
}

pub trait RenderSurface {
    fn draw(&mut self, command: DrawCommand);
}

/// Records commands as-is
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSurface for DrawList {
    fn draw(&mut self, command: DrawCommand) {
        if command == DrawCommand::Clear {
            self.commands.clear();
        }
        self.commands.push(command);
    }
}

/// Emit one frame: paddle, ball, active bricks, particles
///
/// `shake` is this frame's random offset, if the screen is shaking.
pub fn draw_scene(session: &GameSession, shake: Option<DVec2>, surface: &mut dyn RenderSurface) {
    surface.draw(DrawCommand::Clear);
    if let Some(offset) = shake {
        surface.draw(DrawCommand::Translate(offset));
    }

    let paddle = &session.paddle;
    surface.draw(DrawCommand::Rect {
        pos: paddle.pos,
        size: DVec2::new(paddle.width, paddle.height),
        color: PADDLE_COLOR,
        glow: Some(PADDLE_GLOW),
    });

    surface.draw(DrawCommand::Circle {
        center: session.ball.pos,
        radius: session.ball.radius,
        color: BALL_COLOR,
        glow: Some(BALL_GLOW),
    });

    for brick in session.bricks.bricks.iter().filter(|b| b.active) {
        surface.draw(DrawCommand::Rect {
            pos: brick.rect.pos,
            size: brick.rect.size,
            color: brick.color,
            glow: Some(BRICK_GLOW),
        });
    }

    for particle in session.particles.iter() {
        surface.draw(DrawCommand::Particle {
            pos: particle.pos,
            size: particle.size,
            color: particle.color,
            alpha: particle.life,
        });
    }

    if shake.is_some() {
        surface.draw(DrawCommand::ResetTransform);
    }
}
