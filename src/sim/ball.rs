//! Ball physics and collision resolution
//!
//! Each update integrates the ball, then resolves walls, paddle, bricks and
//! the floor in that order. Every step sees the state left by the previous
//! one, which decides which collision wins when several apply in one frame.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bricks::BrickGrid;
use super::collision::circle_rect_collision;
use super::paddle::Paddle;
use super::particles::ParticleSystem;
use super::state::{Field, GameEvent};
use crate::consts::*;

/// What the ball may touch during an update
///
/// The ball gets field bounds, a read-only paddle, the bricks, a particle
/// spawner and an event log. Scoring, lives, shake and audio are applied by
/// the session from the recorded events.
pub struct BallContext<'a> {
    pub field: Field,
    pub paddle: &'a Paddle,
    pub bricks: &'a mut BrickGrid,
    pub particles: &'a mut ParticleSystem,
    pub events: &'a mut Vec<GameEvent>,
}

/// The moving ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: DVec2,
    /// Units per millisecond
    pub vel: DVec2,
    pub radius: f64,
    pub base_speed: f64,
    /// Speed-up only applies below this
    pub max_speed: f64,
}

impl Ball {
    pub fn new<R: Rng + ?Sized>(field: Field, rng: &mut R) -> Self {
        let mut ball = Self {
            pos: DVec2::ZERO,
            vel: DVec2::ZERO,
            radius: BALL_RADIUS,
            base_speed: BALL_BASE_SPEED,
            max_speed: BALL_MAX_SPEED,
        };
        ball.reset(field, rng);
        ball
    }

    /// Where the ball is served from
    pub fn spawn_point(field: Field) -> DVec2 {
        DVec2::new(field.width / 2.0, field.height - BALL_SPAWN_OFFSET)
    }

    /// Serve: back to the spawn point, moving up and to a random side
    pub fn reset<R: Rng + ?Sized>(&mut self, field: Field, rng: &mut R) {
        self.pos = Self::spawn_point(field);
        let side = if rng.random_bool(0.5) { -1.0 } else { 1.0 };
        self.vel = DVec2::new(side * self.base_speed, -self.base_speed);
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Advance one frame and resolve collisions
    pub fn update(&mut self, dt: f64, ctx: &mut BallContext<'_>) {
        self.pos += self.vel * dt;

        self.collide_walls(ctx.field, ctx.events);
        self.collide_paddle(ctx.paddle, ctx.particles, ctx.events);
        self.collide_bricks(ctx.bricks, ctx.particles, ctx.events);

        // Still checked after a clear; a loss recorded here is applied after the win
        if self.pos.y + self.radius > ctx.field.height {
            ctx.events.push(GameEvent::BallLost);
        }
    }

    /// Left, right and top walls, each checked independently
    fn collide_walls(&mut self, field: Field, events: &mut Vec<GameEvent>) {
        if self.pos.x - self.radius < 0.0 {
            self.pos.x = self.radius;
            self.vel.x = -self.vel.x;
            events.push(GameEvent::WallBounce);
        }
        if self.pos.x + self.radius > field.width {
            self.pos.x = field.width - self.radius;
            self.vel.x = -self.vel.x;
            events.push(GameEvent::WallBounce);
        }
        if self.pos.y - self.radius < 0.0 {
            self.pos.y = self.radius;
            self.vel.y = -self.vel.y;
            events.push(GameEvent::WallBounce);
        }
    }

    fn collide_paddle(
        &mut self,
        paddle: &Paddle,
        particles: &mut ParticleSystem,
        events: &mut Vec<GameEvent>,
    ) {
        if !circle_rect_collision(self.pos, self.radius, &paddle.rect()).hit {
            return;
        }

        // Always bounce up, from just above the paddle so it can't re-trigger
        self.vel.y = -self.vel.y.abs();
        self.pos.y = paddle.pos.y - self.radius;

        // Deflection replaces the old horizontal velocity
        self.vel.x = (self.pos.x - paddle.center_x()) * PADDLE_ENGLISH;

        // Cap is checked before scaling, so the boost may overshoot it slightly
        if self.speed() < self.max_speed {
            self.vel *= PADDLE_BOOST;
        }

        let contact = DVec2::new(self.pos.x, self.pos.y + self.radius);
        particles.spawn_burst(contact, PADDLE_COLOR, PADDLE_BURST);
        events.push(GameEvent::PaddleHit { contact });
    }

    fn collide_bricks(
        &mut self,
        grid: &mut BrickGrid,
        particles: &mut ParticleSystem,
        events: &mut Vec<GameEvent>,
    ) {
        let mut broke_any = false;

        // Only the active flag flips during the scan, and the ball position is
        // fixed for the whole pass, so every overlapping brick is honored.
        for (index, brick) in grid.bricks.iter_mut().enumerate() {
            if !brick.active || !circle_rect_collision(self.pos, self.radius, &brick.rect).hit {
                continue;
            }

            brick.hit();
            broke_any = true;

            // Simple bounce: flip regardless of which face was hit
            self.vel.y = -self.vel.y;

            let center = brick.center();
            particles.spawn_burst(center, brick.color, BRICK_BURST);
            events.push(GameEvent::BrickBroken { index, center });
        }

        if broke_any && grid.is_cleared() {
            events.push(GameEvent::GridCleared);
        }
    }
}
