//! Port contracts for the task board.
//!
//! Ports define the storage and rendering collaborators the board service
//! drives after every mutation.

pub mod persistence;
pub mod render;

pub use persistence::{BoardPersistence, PersistenceError, PersistenceResult};
pub use render::BoardRenderer;
