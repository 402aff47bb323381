//! Window with a GUI overlay and a four-colour quad moved with W/A/S/D.

use glint_demos::overlay::GuiOverlay;
use glint_demos::quad_demo::QuadDemo;
use glint_demos::{CLEAR_COLOR, exit_requested, gpu_init};
use glint_engine::core::{App, AppControl, FrameCtx};
use glint_engine::logging::{LoggingConfig, init_logging};
use glint_engine::render::QuadRenderer;
use glint_engine::window::{Runtime, RuntimeConfig};

struct QuadApp {
    demo: QuadDemo,
    overlay: GuiOverlay,
    quad: QuadRenderer,
}

impl App for QuadApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if exit_requested(ctx.input_frame) {
            return AppControl::Exit;
        }

        self.demo.apply_keys(&ctx.input_frame.key_events);

        let mut ui = self.overlay.begin(ctx);
        self.demo.ui(&mut ui);
        ui.finish();

        let vertices = self.demo.vertices();
        let draw_rect = self.demo.draw_rect;
        let Self { overlay, quad, .. } = self;
        ctx.render(CLEAR_COLOR, |rctx, target| {
            if draw_rect {
                quad.render(rctx, target, &vertices);
            }
            overlay.paint(rctx, target);
        })
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    let app = QuadApp {
        demo: QuadDemo::new(),
        overlay: GuiOverlay::new(),
        quad: QuadRenderer::new(),
    };
    Runtime::run(RuntimeConfig::default(), gpu_init(), app)
}
