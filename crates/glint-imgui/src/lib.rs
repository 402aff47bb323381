//! Immediate-mode GUI on top of the glint-engine draw list.
//!
//! Widgets are declared every frame and return whether they changed the
//! value they edit. Only window placement and the widget under the mouse
//! persist in the [`Context`].
//!
//! ```rust,ignore
//! let mut gui = Context::new();
//!
//! // Each frame:
//! let mut ui = gui.frame(UiInput::from_engine(ctx.input, ctx.input_frame), viewport);
//! ui.window("Debug", |ui| {
//!     ui.checkbox("Draw Rect", &mut draw_rect);
//!     ui.slider_float("Corner Radius", &mut radius, 0.0, 100.0);
//! });
//! ui.finish();
//!
//! // Inside FrameCtx::render:
//! gui.paint(&mut renderer, rctx, target);
//! ```

mod context;
mod id;
mod input;
mod style;
mod ui;
mod widgets;

pub use context::Context;
pub use id::Id;
pub use input::UiInput;
pub use style::Style;
pub use ui::{FrameOutput, IMPLICIT_WINDOW, Ui};
