use glint_engine::coords::Vec2;
use glint_engine::paint::Color;

/// Colors and metrics shared by every window and widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub font_size: f32,

    pub window_padding: Vec2,
    pub frame_padding: Vec2,
    pub item_spacing: Vec2,
    /// Gap between a widget's frame and its label.
    pub item_inner_spacing: f32,
    /// Width of slider and color editor frames.
    pub item_width: f32,
    pub grab_min_size: f32,
    pub window_rounding: f32,
    pub frame_rounding: f32,
    pub window_border: f32,

    pub text: Color,
    pub window_bg: Color,
    pub border: Color,
    pub title_bg: Color,
    pub title_bg_active: Color,
    pub frame_bg: Color,
    pub frame_bg_hovered: Color,
    pub frame_bg_active: Color,
    pub check_mark: Color,
    pub slider_grab: Color,
    pub slider_grab_active: Color,
}

impl Style {
    /// Dark theme.
    pub fn dark() -> Self {
        Self {
            font_size: 13.0,

            window_padding: Vec2::new(8.0, 8.0),
            frame_padding: Vec2::new(4.0, 3.0),
            item_spacing: Vec2::new(8.0, 4.0),
            item_inner_spacing: 4.0,
            item_width: 200.0,
            grab_min_size: 10.0,
            window_rounding: 0.0,
            frame_rounding: 0.0,
            window_border: 1.0,

            text: Color::from_straight(1.0, 1.0, 1.0, 1.0),
            window_bg: Color::from_straight(0.06, 0.06, 0.06, 0.94),
            border: Color::from_straight(0.43, 0.43, 0.50, 0.50),
            title_bg: Color::from_straight(0.04, 0.04, 0.04, 1.0),
            title_bg_active: Color::from_straight(0.16, 0.29, 0.48, 1.0),
            frame_bg: Color::from_straight(0.16, 0.29, 0.48, 0.54),
            frame_bg_hovered: Color::from_straight(0.26, 0.59, 0.98, 0.40),
            frame_bg_active: Color::from_straight(0.26, 0.59, 0.98, 0.67),
            check_mark: Color::from_straight(0.26, 0.59, 0.98, 1.0),
            slider_grab: Color::from_straight(0.24, 0.52, 0.88, 1.0),
            slider_grab_active: Color::from_straight(0.26, 0.59, 0.98, 1.0),
        }
    }

    /// Height of one line of framed widgets.
    #[inline]
    pub fn frame_height(&self) -> f32 {
        self.font_size + self.frame_padding.y * 2.0
    }

    /// Frame fill for the given interaction state.
    #[inline]
    pub fn frame_color(&self, hovered: bool, active: bool) -> Color {
        if active {
            self.frame_bg_active
        } else if hovered {
            self.frame_bg_hovered
        } else {
            self.frame_bg
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_height_covers_text_and_padding() {
        let s = Style::dark();
        assert_eq!(s.frame_height(), 19.0);
    }

    #[test]
    fn active_wins_over_hovered() {
        let s = Style::dark();
        assert_eq!(s.frame_color(true, true), s.frame_bg_active);
        assert_eq!(s.frame_color(true, false), s.frame_bg_hovered);
        assert_eq!(s.frame_color(false, false), s.frame_bg);
    }
}
