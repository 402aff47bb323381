//! Widgets, each an `impl Ui` block.

mod checkbox;
mod color_edit;
mod slider;
mod text;
