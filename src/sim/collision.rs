//! Collision detection between the ball and axis-aligned rectangles
//!
//! Uses the closest-point method: clamp the circle center to the rectangle
//! bounds per axis, then compare the distance to that point with the radius.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left position + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> DVec2 {
        self.pos + self.size / 2.0
    }

    /// Closest point inside the rectangle to `p`
    pub fn closest_point(&self, p: DVec2) -> DVec2 {
        // Per-axis comparisons rather than f64::clamp, which panics on
        // degenerate (negative size) rectangles
        let x = if p.x < self.left() {
            self.left()
        } else if p.x > self.right() {
            self.right()
        } else {
            p.x
        };
        let y = if p.y < self.top() {
            self.top()
        } else if p.y > self.bottom() {
            self.bottom()
        } else {
            p.y
        };
        DVec2::new(x, y)
    }
}

/// Result of a collision check
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Closest point on the rectangle to the circle center
    pub point: DVec2,
    /// Distance from the circle center to `point`
    pub distance: f64,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: DVec2::ZERO,
            distance: f64::INFINITY,
        }
    }
}

/// Check collision between a circle and a rectangle
///
/// Touching counts as a hit (`distance <= radius`). A center inside the
/// rectangle has distance 0.
pub fn circle_rect_collision(center: DVec2, radius: f64, rect: &Rect) -> CollisionResult {
    let point = rect.closest_point(center);
    let distance = center.distance(point);
    if distance <= radius {
        CollisionResult {
            hit: true,
            point,
            distance,
        }
    } else {
        CollisionResult::miss()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_inside_rect() {
        let rect = Rect::new(100.0, 100.0, 80.0, 30.0);
        let result = circle_rect_collision(DVec2::new(140.0, 115.0), 8.0, &rect);
        assert!(result.hit);
        assert_eq!(result.distance, 0.0);
    }

    #[test]
    fn test_edge_touch_counts() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Exactly radius away from the right edge
        let result = circle_rect_collision(DVec2::new(18.0, 5.0), 8.0, &rect);
        assert!(result.hit);
        assert_eq!(result.point, DVec2::new(10.0, 5.0));
    }

    #[test]
    fn test_corner_miss() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        // 7 units from the corner on both axes: distance ~9.9 > 8
        let result = circle_rect_collision(DVec2::new(17.0, 17.0), 8.0, &rect);
        assert!(!result.hit);
    }

    #[test]
    fn test_corner_hit() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let result = circle_rect_collision(DVec2::new(15.0, 15.0), 8.0, &rect);
        assert!(result.hit);
        assert_eq!(result.point, DVec2::new(10.0, 10.0));
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 60.0);
        assert_eq!(rect.center(), DVec2::new(25.0, 40.0));
    }
}
