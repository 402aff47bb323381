use super::Rgba;

/// Linear premultiplied RGBA color.
///
/// `r`, `g` and `b` are already multiplied by `a`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a color from components that are already premultiplied.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    ///
    /// Channels are clamped to `[0, 1]` first.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Returns the straight-alpha form. Fully transparent colors map to zero.
    #[inline]
    pub fn to_straight(self) -> Rgba {
        if self.a <= 0.0 {
            Rgba::transparent()
        } else {
            let inv = 1.0 / self.a;
            Rgba::new(self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Multiplies every channel by `k`, fading the color.
    #[inline]
    pub fn with_opacity(self, k: f32) -> Self {
        let k = k.clamp(0.0, 1.0);
        Self::from_premul(self.r * k, self.g * k, self.b * k, self.a * k)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Rgba> for Color {
    #[inline]
    fn from(c: Rgba) -> Self {
        Color::from_straight(c.r, c.g, c.b, c.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_straight_premultiplies() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c, Color::from_premul(0.5, 0.25, 0.0, 0.5));
    }

    #[test]
    fn from_straight_clamps() {
        let c = Color::from_straight(2.0, -1.0, 0.5, 3.0);
        assert_eq!(c, Color::from_premul(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn to_straight_undoes_premultiplication() {
        let c = Color::from_premul(0.25, 0.5, 0.0, 0.5).to_straight();
        assert_eq!(c, Rgba::new(0.5, 1.0, 0.0, 0.5));
        assert_eq!(Color::transparent().to_straight(), Rgba::transparent());
    }

    #[test]
    fn opacity_scales_all_channels() {
        let c = Color::WHITE.with_opacity(0.5);
        assert_eq!(c, Color::from_premul(0.5, 0.5, 0.5, 0.5));
    }
}
