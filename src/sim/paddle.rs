//! The player's paddle

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::Field;
use crate::consts::*;

/// Player-controlled rectangle with bounded horizontal motion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: DVec2,
    pub width: f64,
    pub height: f64,
    /// Units per millisecond
    pub speed: f64,
    pub move_left: bool,
    pub move_right: bool,
}

impl Paddle {
    pub fn new(field: Field) -> Self {
        let mut paddle = Self {
            pos: DVec2::ZERO,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            move_left: false,
            move_right: false,
        };
        paddle.reset(field);
        paddle
    }

    /// Recenter horizontally and clear both intents
    pub fn reset(&mut self, field: Field) {
        self.pos = DVec2::new(
            field.width / 2.0 - self.width / 2.0,
            field.height - PADDLE_BOTTOM_OFFSET,
        );
        self.move_left = false;
        self.move_right = false;
    }

    /// Move by `speed * dt` per active intent, then clamp to the field
    pub fn update(&mut self, dt: f64, field: Field) {
        if self.move_left {
            self.pos.x -= self.speed * dt;
        }
        if self.move_right {
            self.pos.x += self.speed * dt;
        }

        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        }
        if self.pos.x + self.width > field.width {
            self.pos.x = field.width - self.width;
        }
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.pos.x + self.width / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: DVec2::new(self.width, self.height),
        }
    }
}
