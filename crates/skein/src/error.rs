//! Top-level error type.

use std::error::Error;
use std::fmt;

use skein_core::{BuildError, ChartError};

use crate::config::ConfigError;

/// Errors that stop a [`Simulation`](crate::Simulation) before it runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    /// The chart could not be padded.
    Chart(ChartError),
    /// The configuration failed validation.
    Config(ConfigError),
    /// A stage could not be built from the configuration.
    Build(BuildError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chart(e) => write!(f, "chart: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Build(e) => write!(f, "build: {e}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Chart(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Build(e) => Some(e),
        }
    }
}

impl From<ChartError> for SimError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<BuildError> for SimError {
    fn from(e: BuildError) -> Self {
        Self::Build(e)
    }
}
