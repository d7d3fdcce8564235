//! Taskboard: the state engine behind a Kanban task board.
//!
//! Tasks are sorted into four ordered containers (to do, in progress,
//! await feedback, done). This crate keeps the task collection and its
//! container partition consistent across transfers, deletions and subtask
//! updates, computes checklist progress, and flushes the board to a
//! persistence port after every mutation.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and rendering
//! - **Adapters**: Concrete implementations of ports (memory, files, text)
//!
//! # Modules
//!
//! - [`board`]: Task store, transfers, progress and persistence sync

pub mod board;
