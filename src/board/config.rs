//! Configuration for board task creation.

use crate::board::domain::ContainerKey;

/// Limits and defaults applied when tasks are created.
///
/// # Examples
///
/// ```
/// use taskboard::board::config::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert_eq!(config.max_subtasks, 50);
///
/// let lenient = BoardConfig::lenient();
/// assert!(lenient.max_title_length > config.max_title_length);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Container new tasks start in when the request names none.
    pub default_container: ContainerKey,
    /// Maximum title length in characters.
    pub max_title_length: usize,
    /// Maximum number of subtasks per task.
    pub max_subtasks: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_container: ContainerKey::ToDo,
            max_title_length: 200,
            max_subtasks: 50,
        }
    }
}

impl BoardConfig {
    /// Creates a configuration with generous limits.
    ///
    /// Useful when importing boards written by other tools.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            max_title_length: 10_000,
            max_subtasks: 1_000,
            ..Default::default()
        }
    }

    /// Creates a configuration with reduced limits.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            default_container: ContainerKey::ToDo,
            max_title_length: 80,
            max_subtasks: 10,
        }
    }

    /// Sets the container new tasks start in.
    #[must_use]
    pub const fn with_default_container(mut self, key: ContainerKey) -> Self {
        self.default_container = key;
        self
    }
}
