/// Straight-alpha RGBA color with channels in `[0, 1]`.
///
/// This is what colour pickers edit and what the SDF demo shader receives.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Rgba = Rgba::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);
    pub const YELLOW: Rgba = Rgba::new(1.0, 1.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Multiplies all four channels by `k`.
    #[inline]
    pub fn scaled(self, k: f32) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k, self.a * k)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Channel by index (`0..4` → r, g, b, a).
    #[inline]
    pub fn channel_mut(&mut self, i: usize) -> Option<&mut f32> {
        match i {
            0 => Some(&mut self.r),
            1 => Some(&mut self.g),
            2 => Some(&mut self.b),
            3 => Some(&mut self.a),
            _ => None,
        }
    }

    /// Channel value quantised to a byte, as shown by colour editors.
    #[inline]
    pub fn channel_u8(v: f32) -> u8 {
        (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
    }
}

impl From<[f32; 4]> for Rgba {
    #[inline]
    fn from(c: [f32; 4]) -> Self {
        Rgba::new(c[0], c[1], c[2], c[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_multiplies_alpha_too() {
        assert_eq!(Rgba::YELLOW.scaled(0.5), Rgba::new(0.5, 0.5, 0.0, 0.5));
    }

    #[test]
    fn channel_mut_by_index() {
        let mut c = Rgba::RED;
        if let Some(g) = c.channel_mut(1) {
            *g = 0.25;
        }
        assert_eq!(c, Rgba::new(1.0, 0.25, 0.0, 1.0));
        assert!(c.channel_mut(4).is_none());
    }

    #[test]
    fn channel_u8_rounds_and_clamps() {
        assert_eq!(Rgba::channel_u8(1.0), 255);
        assert_eq!(Rgba::channel_u8(0.5), 128);
        assert_eq!(Rgba::channel_u8(-0.2), 0);
        assert_eq!(Rgba::channel_u8(1.7), 255);
    }
}
