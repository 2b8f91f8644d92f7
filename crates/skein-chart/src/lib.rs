//! Stitch charts for the Skein yarn-path simulator.
//!
//! A [`StitchGrid`] is the immutable, row-major chart of knitting
//! operations that the contact automaton consumes. Row 0 is the bottom
//! row, the first one knitted. Charts are built from op buffers, from
//! bitmap pixel codes ([`StitchGrid::from_codes`]), from chart text
//! (`str::parse`), or from editor pattern rows via [`normalize`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod normalize;
mod text;

pub use grid::{StitchGrid, StitchQuad};
pub use normalize::{chart_from_pattern_rows, PatternStitch};
