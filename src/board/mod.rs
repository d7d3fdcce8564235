//! Kanban board core.
//!
//! Tasks live in one of four ordered containers. This module keeps the task
//! collection and its partition into containers consistent across
//! transfers, deletions and subtask updates, and mirrors every change to a
//! persistence port. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
