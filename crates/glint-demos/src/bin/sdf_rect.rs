//! Rounded rectangle rendered by a signed distance field, tuned live from
//! the `Debug` window.

use glint_demos::overlay::GuiOverlay;
use glint_demos::sdf_demo::SdfDemo;
use glint_demos::{CLEAR_COLOR, exit_requested, gpu_init};
use glint_engine::core::{App, AppControl, FrameCtx};
use glint_engine::logging::{LoggingConfig, init_logging};
use glint_engine::render::SdfRectRenderer;
use glint_engine::window::{Runtime, RuntimeConfig};

struct SdfApp {
    demo: SdfDemo,
    overlay: GuiOverlay,
    rect: SdfRectRenderer,
}

impl App for SdfApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if exit_requested(ctx.input_frame) {
            return AppControl::Exit;
        }

        let mut ui = self.overlay.begin(ctx);
        if self.demo.ui(&mut ui) {
            log::trace!("sdf params: {:?}", self.demo.params());
        }
        ui.finish();

        let vertices = self.demo.vertices();
        let params = self.demo.params();
        let draw_rect = self.demo.draw_rect;
        let Self { overlay, rect, .. } = self;
        ctx.render(CLEAR_COLOR, |rctx, target| {
            if draw_rect {
                rect.render(rctx, target, &vertices, &params);
            }
            overlay.paint(rctx, target);
        })
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    let app = SdfApp {
        demo: SdfDemo::new(),
        overlay: GuiOverlay::new(),
        rect: SdfRectRenderer::new(),
    };
    Runtime::run(RuntimeConfig::default(), gpu_init(), app)
}
