//! Skein: simulate the yarn path of a knitting chart.
//!
//! This is the top-level facade crate. It re-exports the sub-crates and
//! adds [`Simulation`], which pads a chart, knits it through the contact
//! automaton, traces the strand and derives its links in one call.
//!
//! # Quick start
//!
//! ```rust
//! use skein::prelude::*;
//!
//! // Top line is the last row knitted.
//! let chart: StitchGrid = "KPK\nKKK".parse().unwrap();
//! let sim = Simulation::run(&chart, &SimConfig::default()).unwrap();
//!
//! assert!(sim.is_renderable());
//! assert_eq!(sim.links().len(), sim.path().len() - 1);
//! assert!(sim.links().iter().any(|l| l.crossing));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `skein-core` | Stitch ops, CN states, coordinates, errors, diagnostics |
//! | [`chart`] | `skein-chart` | `StitchGrid`, chart text, pattern normalization |
//! | [`automaton`] | `skein-automaton` | Contact-neighbourhood automaton and state grid |
//! | [`trace`] | `skein-trace` | Yarn-path tracer, tags and links |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary (`skein-core`).
pub use skein_core as types;

/// Stitch charts (`skein-chart`).
///
/// Build a [`chart::StitchGrid`] from text, pixel codes or
/// [`chart::PatternStitch`] rows.
pub use skein_chart as chart;

/// The contact-neighbourhood automaton (`skein-automaton`).
pub use skein_automaton as automaton;

/// Yarn-path tracing and link derivation (`skein-trace`).
pub use skein_trace as trace;

pub mod config;
pub mod error;
mod hash;
pub mod simulation;

pub use config::{ConfigError, SimConfig};
pub use error::SimError;
pub use simulation::Simulation;

/// Common imports for typical Skein usage.
///
/// ```rust
/// use skein::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use skein_core::{
        ActualizationValue, CnCoord, Diagnostic, Diagnostics, IncreaseDir, MovementVector,
        StitchOp,
    };

    // Errors
    pub use skein_core::{BuildError, ChartError};

    // Chart
    pub use skein_chart::{PatternStitch, StitchGrid};

    // Automaton
    pub use skein_automaton::{ContactAutomaton, ContactGrid};

    // Trace
    pub use skein_trace::{CnTag, LinkLayer, YarnLink, YarnPath, YarnPathPoint, YarnPathTracer};

    // Facade
    pub use crate::{ConfigError, SimConfig, SimError, Simulation};
}
