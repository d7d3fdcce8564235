//! In-memory board integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `partition_tests`: Mixed operation sequences keep the partition intact
//! - `persistence_tests`: Flush counts, reload equivalence, corrupt payloads

mod board_memory {
    pub mod helpers;

    mod partition_tests;
    mod persistence_tests;
}
