//! Draw stream types.
//!
//! Commands are renderer-agnostic and ordered by z-index, then insertion.
//! Shape payloads and their push helpers live under `scene::shapes`.

mod cmd;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use shapes::rounded_rect::{Fill, RoundedRectCmd};
pub use shapes::text::TextCmd;
pub use shapes::Border;
pub use z_index::ZIndex;
