//! In-memory adapters for board storage and rendering.

mod renderer;
mod store;

pub use renderer::{RecordingRenderer, RenderRecord};
pub use store::InMemoryBoardStore;
