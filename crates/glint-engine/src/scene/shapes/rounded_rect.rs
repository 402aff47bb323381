use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Interior fill of a rounded rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Fill {
    Solid(Color),
    /// Left edge to right edge.
    Horizontal(Color, Color),
    /// Top edge to bottom edge.
    Vertical(Color, Color),
}

impl Fill {
    /// `(start, end, direction)` as consumed by the rounded-rect shader.
    pub fn resolve(self) -> (Color, Color, [f32; 2]) {
        match self {
            Fill::Solid(c) => (c, c, [0.0, 0.0]),
            Fill::Horizontal(a, b) => (a, b, [1.0, 0.0]),
            Fill::Vertical(a, b) => (a, b, [0.0, 1.0]),
        }
    }
}

/// Rounded rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radius: f32,
    pub fill: Fill,
    pub border: Option<Border>,
}

impl DrawList {
    /// Records a rounded rectangle.
    pub fn push_rounded_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        radius: f32,
        fill: Fill,
        border: Option<Border>,
    ) {
        self.push(z, DrawCmd::RoundedRect(RoundedRectCmd { rect, radius, fill, border }));
    }

    #[inline]
    pub fn push_solid_rounded_rect(&mut self, z: ZIndex, rect: Rect, radius: f32, color: Color) {
        self.push_rounded_rect(z, rect, radius, Fill::Solid(color), None);
    }
}
