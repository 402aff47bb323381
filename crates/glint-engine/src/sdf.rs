//! Rounded-rectangle signed distance field.
//!
//! CPU reference of the math evaluated per pixel by `sdf_rect.wgsl`. Distances
//! are negative inside the shape and positive outside. Shading follows the
//! fragment shader line for line so both can be checked against each other.

use crate::coords::Vec2;
use crate::paint::Rgba;

/// Signed distance from `p` to a rectangle centred at the origin with half
/// extents `b` whose corners are rounded by `r`.
///
/// `d = |p| - b + r`, then `min(max(d.x, d.y), 0) + |max(d, 0)| - r`.
#[inline]
pub fn rect_sdf(p: Vec2, b: Vec2, r: f32) -> f32 {
    let dx = p.x.abs() - b.x + r;
    let dy = p.y.abs() - b.y + r;

    let inside = dx.max(dy).min(0.0);
    let ox = dx.max(0.0);
    let oy = dy.max(0.0);
    let outside = (ox * ox + oy * oy).sqrt();

    inside + outside - r
}

/// Hermite step between `edge0` and `edge1`.
///
/// A degenerate edge (`edge0 == edge1`) acts as a hard step at `edge0`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 == edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linear blend of two colors, `a` at `t = 0` and `b` at `t = 1`.
#[inline]
pub fn mix(a: Rgba, b: Rgba, t: f32) -> Rgba {
    Rgba::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

/// Per-draw parameters of the rounded rectangle.
///
/// `size` is in pixels. `radius`, `border_thickness` and `edge_softness` are
/// in pixels too.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RoundedRectParams {
    pub size: Vec2,
    pub radius: f32,
    pub border_thickness: f32,
    pub edge_softness: f32,
    pub border_color: Rgba,
}

impl RoundedRectParams {
    /// Inset applied to the outer edge so the softened falloff stays inside
    /// the quad.
    #[inline]
    pub fn softness_padding(&self) -> f32 {
        (self.edge_softness * 2.0 - 1.0).max(0.0)
    }

    /// Coverage of the outer edge at rect-local position `pos` (pixels,
    /// origin at a corner of the quad). `1` inside, `0` outside.
    pub fn coverage(&self, pos: Vec2) -> f32 {
        let half = self.size * 0.5;
        let pad = self.softness_padding();
        let dist = rect_sdf(pos - half, Vec2::new(half.x - pad, half.y - pad), self.radius);
        1.0 - smoothstep(0.0, 2.0 * self.edge_softness, dist)
    }

    /// Shades one fragment.
    ///
    /// `uv` is the interpolated quad coordinate in `[0, 1]²` and `fill` the
    /// interpolated vertex color.
    pub fn shade(&self, uv: Vec2, fill: Rgba) -> Rgba {
        let pos = Vec2::new(self.size.x * uv.x, self.size.y * uv.y);
        let sdf_factor = self.coverage(pos);

        if self.border_thickness > 0.0 {
            let half = self.size * 0.5;
            let inset = self.border_thickness / 2.0 + 1.0;
            let dist = rect_sdf(
                pos - half,
                Vec2::new(half.x - inset, half.y - inset),
                self.radius,
            );
            let blend = smoothstep(-1.0, 1.0, dist.abs() - self.border_thickness / 2.0);
            let to = if dist <= 0.0 { fill } else { Rgba::transparent() };
            mix(self.border_color, to, blend).scaled(sdf_factor)
        } else {
            fill.scaled(sdf_factor)
        }
    }
}
