use glint_engine::coords::Vec2;

use crate::ui::Ui;

impl Ui<'_> {
    /// A line of text.
    pub fn text(&mut self, text: &str) {
        let size = Vec2::new(self.ctx.text_width(text), self.ctx.style.font_size);
        let item = self.next_item(size);
        self.draw_text(text, item.rect.origin, item.z.above(1));
    }
}

#[cfg(test)]
mod tests {
    use glint_engine::coords::Viewport;

    use crate::{Context, UiInput};

    #[test]
    fn lines_stack_vertically() {
        let mut ctx = Context::new();
        let mut ui = ctx.frame(UiInput::default(), Viewport::new(640.0, 480.0));
        ui.window("Info", |ui| {
            ui.text("one");
            ui.text("two");
        });
        ui.finish();

        // Title 19, padding 8 + 8, two 13 px lines with 4 px between.
        let r = ctx.window_rect("Info").unwrap();
        assert_eq!(r.size.y, 19.0 + 8.0 + 13.0 + 4.0 + 13.0 + 8.0);
    }
}
