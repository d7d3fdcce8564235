//! Text renderers for the board.

mod template;

pub use template::{BOARD_TEMPLATE, RenderError, TemplateRenderer};
