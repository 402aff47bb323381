use glint_engine::core::FrameCtx;
use glint_engine::render::{DrawListRenderer, RenderCtx, RenderTarget};
use glint_imgui::{Context, Ui, UiInput};

use crate::fonts;

/// GUI context plus the renderer that draws it.
pub struct GuiOverlay {
    pub gui: Context,
    renderer: DrawListRenderer,
}

impl GuiOverlay {
    pub fn new() -> Self {
        let mut gui = Context::new();
        fonts::load_gui_font(&mut gui);
        Self { gui, renderer: DrawListRenderer::new() }
    }

    /// Starts a GUI frame from this redraw's input and window size.
    pub fn begin(&mut self, ctx: &FrameCtx<'_, '_>) -> Ui<'_> {
        let input = UiInput::from_engine(ctx.input, ctx.input_frame);
        self.gui.frame(input, ctx.window.viewport())
    }

    pub fn paint(&mut self, rctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.gui.paint(&mut self.renderer, rctx, target);
    }
}

impl Default for GuiOverlay {
    fn default() -> Self {
        Self::new()
    }
}
