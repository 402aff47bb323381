//! Rounded rectangle drawn by the SDF pipeline, tuned from the GUI.

use glint_engine::coords::Vec2;
use glint_engine::paint::Rgba;
use glint_engine::render::{ColoredVertex, CornerColors, corner_quad};
use glint_engine::sdf::RoundedRectParams;
use glint_imgui::Ui;

#[derive(Debug, Clone, PartialEq)]
pub struct SdfDemo {
    /// `[x1, y1, x2, y2]` in window pixels.
    pub rect: [f32; 4],
    pub radius: f32,
    pub border_thickness: f32,
    pub edge_softness: f32,
    pub colors: CornerColors,
    pub border_color: Rgba,
    pub draw_rect: bool,
}

impl Default for SdfDemo {
    fn default() -> Self {
        Self {
            rect: [50.0, 50.0, 250.0, 250.0],
            radius: 0.0,
            border_thickness: 0.0,
            edge_softness: 0.0,
            colors: CornerColors::default(),
            border_color: Rgba::YELLOW,
            draw_rect: true,
        }
    }
}

impl SdfDemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shader parameters for the current state. Size follows the rect
    /// corners as entered, so a flipped rect has a negative extent.
    pub fn params(&self) -> RoundedRectParams {
        let [x1, y1, x2, y2] = self.rect;
        RoundedRectParams {
            size: Vec2::new(x2 - x1, y2 - y1),
            radius: self.radius,
            border_thickness: self.border_thickness,
            edge_softness: self.edge_softness,
            border_color: self.border_color,
        }
    }

    pub fn vertices(&self) -> [ColoredVertex; 4] {
        corner_quad(self.rect, &self.colors)
    }

    /// Declares the `Debug` window. Returns `true` if anything changed.
    pub fn ui(&mut self, ui: &mut Ui<'_>) -> bool {
        ui.window("Debug", |ui| {
            let mut changed = ui.checkbox("Draw Rect", &mut self.draw_rect);

            let [x1, y1, x2, y2] = &mut self.rect;
            changed |= ui.slider_float("Rect X1", x1, 10.0, 300.0);
            changed |= ui.slider_float("Rect X2", x2, 10.0, 500.0);
            changed |= ui.slider_float("Rect Y1", y1, 10.0, 300.0);
            changed |= ui.slider_float("Rect Y2", y2, 10.0, 500.0);

            changed |= ui.slider_float("Corner Radius", &mut self.radius, 0.0, 100.0);
            changed |= ui.slider_float("Border Thickness", &mut self.border_thickness, 0.0, 100.0);
            changed |= ui.slider_float("Edge Softness", &mut self.edge_softness, 0.0, 10.0);

            changed |= ui.color_edit4("Upper Left", &mut self.colors.upper_left);
            changed |= ui.color_edit4("Upper Right", &mut self.colors.upper_right);
            changed |= ui.color_edit4("Lower Right", &mut self.colors.lower_right);
            changed |= ui.color_edit4("Lower Left", &mut self.colors.lower_left);
            changed |= ui.color_edit4("Border Color", &mut self.border_color);
            changed
        })
    }
}

#[cfg(test)]
mod tests {
    use glint_engine::coords::Viewport;
    use glint_imgui::{Context, UiInput};

    use super::*;

    #[test]
    fn defaults() {
        let d = SdfDemo::new();
        assert_eq!(d.rect, [50.0, 50.0, 250.0, 250.0]);
        assert_eq!(d.radius, 0.0);
        assert_eq!(d.border_thickness, 0.0);
        assert_eq!(d.edge_softness, 0.0);
        assert_eq!(d.border_color, Rgba::YELLOW);
        assert!(d.draw_rect);
    }

    #[test]
    fn params_take_size_from_the_rect() {
        let mut d = SdfDemo::new();
        d.rect = [10.0, 20.0, 110.0, 70.0];
        d.radius = 12.0;
        let p = d.params();
        assert_eq!(p.size, Vec2::new(100.0, 50.0));
        assert_eq!(p.radius, 12.0);
        assert_eq!(p.border_color, Rgba::YELLOW);
    }

    #[test]
    fn vertices_are_in_window_pixels() {
        let v = SdfDemo::new().vertices();
        assert_eq!(v[0].pos, [50.0, 50.0, 0.0]);
        assert_eq!(v[1].pos, [250.0, 50.0, 0.0]);
        assert_eq!(v[2].pos, [250.0, 250.0, 0.0]);
        assert_eq!(v[3].pos, [50.0, 250.0, 0.0]);
        assert_eq!(v[0].uv, [0.0, 1.0]);
        assert_eq!(v[2].uv, [1.0, 0.0]);
    }

    #[test]
    fn default_params_shade_the_center_with_its_fill() {
        let d = SdfDemo::new();
        let fill = Rgba::new(0.5, 0.5, 0.5, 1.0);
        assert_eq!(d.params().shade(Vec2::new(0.5, 0.5), fill), fill);
    }

    #[test]
    fn idle_gui_frame_changes_nothing() {
        let mut gui = Context::new();
        let mut d = SdfDemo::new();
        for _ in 0..3 {
            let mut ui = gui.frame(UiInput::default(), Viewport::new(640.0, 480.0));
            assert!(!d.ui(&mut ui));
            ui.finish();
        }
        assert_eq!(d, SdfDemo::new());
    }

    #[test]
    fn dragging_the_radius_slider_updates_params() {
        let mut gui = Context::new();
        let mut d = SdfDemo::new();
        let view = Viewport::new(640.0, 480.0);

        let mut ui = gui.frame(UiInput::default(), view);
        d.ui(&mut ui);
        ui.finish();

        // Rows are 19 px high with 4 px spacing, starting at y = 87.
        // Corner Radius is the sixth row; its slider spans x = 68..268 (end exclusive).
        let y = 87.0 + 5.0 * 23.0 + 9.0;
        let press = UiInput {
            mouse_pos: Some(Vec2::new(267.0, y)),
            mouse_down: true,
            mouse_pressed: true,
            mouse_released: false,
        };
        let mut ui = gui.frame(press, view);
        assert!(d.ui(&mut ui));
        ui.finish();

        assert_eq!(d.radius, 100.0);
        assert_eq!(d.params().radius, 100.0);
        assert_eq!(d.rect, [50.0, 50.0, 250.0, 250.0]);
    }
}
