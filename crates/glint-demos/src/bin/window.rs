//! Opens a window and clears it every frame. ESC quits.

use glint_demos::{CLEAR_COLOR, exit_requested, gpu_init};
use glint_engine::core::{App, AppControl, FrameCtx};
use glint_engine::logging::{LoggingConfig, init_logging};
use glint_engine::window::{Runtime, RuntimeConfig};

struct ClearWindow;

impl App for ClearWindow {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if exit_requested(ctx.input_frame) {
            return AppControl::Exit;
        }
        ctx.render(CLEAR_COLOR, |_, _| {})
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    Runtime::run(RuntimeConfig::default(), gpu_init(), ClearWindow)
}
