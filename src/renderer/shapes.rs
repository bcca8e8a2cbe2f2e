//! Shape generation for 2D primitives
//!
//! `Tessellator` is a render surface that turns draw commands into a flat
//! triangle list ready for upload.

use glam::{DVec2, Vec2};
use std::f32::consts::TAU;

use super::vertex::Vertex;
use super::{DrawCommand, RenderSurface};

/// Alpha of the halo drawn behind glowing shapes
const GLOW_ALPHA: f32 = 0.25;

/// Generate vertices for an axis-aligned filled rectangle
pub fn quad(pos: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Unit directions for the two edges of each circle segment
fn segment_edges(segments: u32) -> impl Iterator<Item = (Vec2, Vec2)> {
    let step = TAU / segments.max(3) as f32;
    (0..segments.max(3)).map(move |i| {
        let angle = i as f32 * step;
        (Vec2::from_angle(angle), Vec2::from_angle(angle + step))
    })
}

/// Filled circle as a fan of `segments` triangles around the center
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    segment_edges(segments)
        .flat_map(|(a, b)| [center, center + a * radius, center + b * radius])
        .map(|p| Vertex::new(p.x, p.y, color))
        .collect()
}

/// Annulus between `inner` and `outer`, two triangles per segment
pub fn ring(center: Vec2, inner: f32, outer: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    segment_edges(segments)
        .flat_map(|(a, b)| {
            let (in_a, out_a) = (center + a * inner, center + a * outer);
            let (in_b, out_b) = (center + b * inner, center + b * outer);
            [in_a, out_a, in_b, in_b, out_a, out_b]
        })
        .map(|p| Vertex::new(p.x, p.y, color))
        .collect()
}

/// Render surface producing a triangle list
#[derive(Debug, Clone)]
pub struct Tessellator {
    pub vertices: Vec<Vertex>,
    pub circle_segments: u32,
    offset: DVec2,
}

impl Default for Tessellator {
    fn default() -> Self {
        Self::new(24)
    }
}

impl Tessellator {
    pub fn new(circle_segments: u32) -> Self {
        Self {
            vertices: Vec::new(),
            circle_segments: circle_segments.max(3),
            offset: DVec2::ZERO,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    fn to_screen(&self, p: DVec2) -> Vec2 {
        (p + self.offset).as_vec2()
    }
}

impl RenderSurface for Tessellator {
    fn draw(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::Clear => {
                self.vertices.clear();
                self.offset = DVec2::ZERO;
            }
            DrawCommand::Translate(delta) => self.offset += delta,
            DrawCommand::ResetTransform => self.offset = DVec2::ZERO,
            DrawCommand::Rect {
                pos,
                size,
                color,
                glow,
            } => {
                if let Some(glow) = glow {
                    let halo = DVec2::splat(glow);
                    let corner = self.to_screen(pos - halo);
                    self.vertices.extend(quad(
                        corner,
                        (size + halo * 2.0).as_vec2(),
                        color.to_rgba(GLOW_ALPHA),
                    ));
                }
                let corner = self.to_screen(pos);
                self.vertices.extend(quad(corner, size.as_vec2(), color.to_rgba(1.0)));
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
                glow,
            } => {
                let c = self.to_screen(center);
                let r = radius as f32;
                if let Some(glow) = glow {
                    self.vertices.extend(ring(
                        c,
                        r,
                        r + glow as f32,
                        color.to_rgba(GLOW_ALPHA),
                        self.circle_segments,
                    ));
                }
                self.vertices.extend(circle(c, r, color.to_rgba(1.0), self.circle_segments));
            }
            DrawCommand::Particle {
                pos,
                size,
                color,
                alpha,
            } => {
                let alpha = alpha.clamp(0.0, 1.0) as f32;
                let corner = self.to_screen(pos);
                self.vertices.extend(quad(
                    corner,
                    Vec2::splat(size as f32),
                    color.to_rgba(alpha),
                ));
            }
        }
    }
}
