//! Brick grid
//!
//! A static grid of destructible rectangles. Bricks are only ever
//! deactivated in place; the collection is rebuilt on `reset`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::Field;
use crate::Color;
use crate::consts::*;

/// A single destructible brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub color: Color,
    pub active: bool,
}

impl Brick {
    pub fn new(rect: Rect, color: Color) -> Self {
        Self {
            rect,
            color,
            active: true,
        }
    }

    /// Deactivate the brick. Returns false if it was already inactive.
    pub fn hit(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    pub fn center(&self) -> DVec2 {
        self.rect.center()
    }
}

/// Grid layout parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
    pub padding: f64,
    pub margin_top: f64,
    pub brick_height: f64,
    pub palette: Vec<Color>,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            cols: BRICK_COLS,
            padding: BRICK_PADDING,
            margin_top: BRICK_MARGIN_TOP,
            brick_height: BRICK_HEIGHT,
            palette: BRICK_PALETTE.to_vec(),
        }
    }
}

impl GridLayout {
    /// Width of every brick so that `cols` bricks and `cols + 1` gaps span the field
    pub fn brick_width(&self, field: Field) -> f64 {
        if self.cols == 0 {
            return 0.0;
        }
        (field.width - (self.cols + 1) as f64 * self.padding) / self.cols as f64
    }
}

/// Ordered collection of bricks (row-major)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    pub layout: GridLayout,
    pub bricks: Vec<Brick>,
}

impl BrickGrid {
    pub fn new(layout: GridLayout, field: Field) -> Self {
        let mut grid = Self {
            layout,
            bricks: Vec::new(),
        };
        grid.reset(field);
        grid
    }

    /// Build a grid from explicit bricks (custom layouts, tests)
    pub fn from_bricks(bricks: Vec<Brick>) -> Self {
        Self {
            layout: GridLayout::default(),
            bricks,
        }
    }

    /// Regenerate every brick, all active
    pub fn reset(&mut self, field: Field) {
        let layout = &self.layout;
        let width = layout.brick_width(field);
        let height = layout.brick_height;

        self.bricks.clear();
        self.bricks.reserve(layout.rows * layout.cols);
        for r in 0..layout.rows {
            let color = if layout.palette.is_empty() {
                BALL_COLOR
            } else {
                layout.palette[r % layout.palette.len()]
            };
            for c in 0..layout.cols {
                let x = layout.padding + c as f64 * (width + layout.padding);
                let y = layout.margin_top + r as f64 * (height + layout.padding);
                self.bricks.push(Brick::new(Rect::new(x, y, width, height), color));
            }
        }
    }

    /// True iff every brick is inactive
    pub fn is_cleared(&self) -> bool {
        self.bricks.iter().all(|b| !b.active)
    }

    pub fn active_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }
}
