//! Simulation configuration and validation.

use std::error::Error;
use std::fmt;

use skein_trace::YarnPath;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Fewer than one column of padding. The carriage needs an empty
    /// column on each side to turn around in.
    PaddingTooSmall {
        /// The configured column padding.
        configured: u32,
    },
    /// A search limit of zero.
    ZeroSearchLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PaddingTooSmall { configured } => {
                write!(f, "x_padding {configured} is below minimum of 1")
            }
            Self::ZeroSearchLimit => write!(f, "search_limit must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── SimConfig ──────────────────────────────────────────────────────

/// Settings for one [`Simulation`](crate::Simulation) run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Empty columns added on each side of the chart. Default: 1. Minimum: 1.
    pub x_padding: u32,
    /// Empty rows added above and below the chart. Default: 0.
    pub y_padding: u32,
    /// Step limit for guard searches and final-location chases. Default: 1000.
    pub search_limit: usize,
    /// Fewest path points worth rendering. Default: 8.
    pub min_render_points: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            x_padding: 1,
            y_padding: 0,
            search_limit: 1000,
            min_render_points: YarnPath::DEFAULT_MIN_RENDER_POINTS,
        }
    }
}

impl SimConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.x_padding < 1 {
            return Err(ConfigError::PaddingTooSmall {
                configured: self.x_padding,
            });
        }
        if self.search_limit == 0 {
            return Err(ConfigError::ZeroSearchLimit);
        }
        Ok(())
    }
}
