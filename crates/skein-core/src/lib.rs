//! Core types for the Skein yarn-path simulator.
//!
//! This is the leaf crate of the workspace. It defines the vocabulary
//! shared by the chart, automaton and tracer crates: stitch operations,
//! contact-neighbourhood states, coordinates, error types and the
//! non-fatal [`Diagnostic`] record.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod contact;
pub mod coord;
pub mod diagnostic;
pub mod error;
pub mod op;

pub use contact::{ActualizationValue, MovementVector};
pub use coord::{Carriage, CnCoord};
pub use diagnostic::{Diagnostic, Diagnostics, SearchKind};
pub use error::{BuildError, ChartError};
pub use op::{IncreaseDir, StitchOp};
