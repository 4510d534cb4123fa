//! Configuration error types.

use thiserror::Error;

/// Errors that can occur when loading or validating a [`MachineConfig`].
///
/// [`MachineConfig`]: super::MachineConfig
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// The configuration document could not be parsed
    #[error("Failed to parse machine config: {0}")]
    Parse(String),

    #[error("Placeholder name must not be empty")]
    EmptyPlaceholder,

    #[error("Placeholder name contains control character {0:?}")]
    ControlCharacter(char),

    #[error("Placeholder name is {len} bytes long (max: {max})")]
    PlaceholderTooLong { len: usize, max: usize },

    /// Every violation found by [`MachineConfig::validate`]
    ///
    /// [`MachineConfig::validate`]: super::MachineConfig::validate
    #[error("Machine config has {} violation(s)", .0.len())]
    Invalid(Vec<ConfigError>),
}
