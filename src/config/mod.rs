//! Machine configuration.
//!
//! Behaviour that revisions of this kind of engine have disagreed on is
//! pinned here explicitly instead of being implied:
//!
//! - what the log callback receives when a state or event has no name
//!   ([`MissingName`]);
//! - whether transitions are reported through `tracing`.
//!
//! Configurations are plain serde values, so they can be embedded in a host's
//! own configuration file. [`MachineConfig::validate`] accumulates every
//! violation instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use variant_fsm::config::{MachineConfig, MissingName};
//!
//! let config = MachineConfig::from_json(r#"{ "missing_name": { "placeholder": "unknown" } }"#)
//!     .unwrap();
//!
//! assert_eq!(config.missing_name, MissingName::Placeholder("unknown".to_string()));
//! assert!(config.trace);
//! ```

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Longest accepted placeholder name, in bytes.
pub const MAX_PLACEHOLDER_LEN: usize = 64;

/// What the log callback receives for a state or event without a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingName {
    /// Do not call the log callback when either state is unnamed.
    /// An unnamed event is reported as `None`.
    #[default]
    Skip,

    /// Substitute the given text for every missing name.
    Placeholder(String),
}

impl MissingName {
    /// Apply the policy to an optional name.
    pub fn resolve<'a>(&'a self, name: Option<&'a str>) -> Option<&'a str> {
        match (name, self) {
            (Some(name), _) => Some(name),
            (None, MissingName::Skip) => None,
            (None, MissingName::Placeholder(placeholder)) => Some(placeholder),
        }
    }
}

/// Configuration of a [`StateMachine`](crate::StateMachine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Policy for unnamed states and events in log records.
    pub missing_name: MissingName,

    /// Report activations, dispatches and transitions through `tracing`.
    pub trace: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            missing_name: MissingName::Skip,
            trace: true,
        }
    }
}

impl MachineConfig {
    /// Default configuration: skip missing names, trace enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress log records involving unnamed states.
    pub fn skip_missing_names(mut self) -> Self {
        self.missing_name = MissingName::Skip;
        self
    }

    /// Replace missing names with `placeholder` in log records.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.missing_name = MissingName::Placeholder(placeholder.into());
        self
    }

    /// Enable or disable `tracing` output.
    pub fn trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    /// Check the configuration, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let MissingName::Placeholder(placeholder) = &self.missing_name else {
            return Validation::success(());
        };

        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        checks.push(if placeholder.is_empty() {
            Validation::fail(ConfigError::EmptyPlaceholder)
        } else {
            Validation::success(())
        });

        checks.push(match placeholder.chars().find(|c| c.is_control()) {
            Some(c) => Validation::fail(ConfigError::ControlCharacter(c)),
            None => Validation::success(()),
        });

        checks.push(if placeholder.len() > MAX_PLACEHOLDER_LEN {
            Validation::fail(ConfigError::PlaceholderTooLong {
                len: placeholder.len(),
                max: MAX_PLACEHOLDER_LEN,
            })
        } else {
            Validation::success(())
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate into a `Result`, folding all violations into
    /// [`ConfigError::Invalid`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => Err(ConfigError::Invalid(errors.iter().cloned().collect())),
        }
    }

    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validated()
    }
}
