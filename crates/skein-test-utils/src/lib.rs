//! Test utilities for Skein development.
//!
//! Chart fixtures shared by the unit, integration and benchmark suites.
//! Everything here panics on malformed input; it is only meant for
//! tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use skein_chart::StitchGrid;
use skein_core::StitchOp;

/// Parse chart text, panicking on error.
pub fn chart(text: &str) -> StitchGrid {
    text.parse()
        .unwrap_or_else(|e| panic!("bad fixture chart {text:?}: {e}"))
}

/// Parse chart text and add the one empty column on each side the
/// automaton expects.
pub fn padded(text: &str) -> StitchGrid {
    pad(&chart(text))
}

/// Add one empty column on each side.
pub fn pad(grid: &StitchGrid) -> StitchGrid {
    grid.pad(1, 0, StitchOp::Empty)
        .unwrap_or_else(|e| panic!("cannot pad fixture chart: {e}"))
}

/// Build a chart from pixel codes, folding every byte into the op
/// table so any byte string is a valid chart.
pub fn chart_from_bytes(width: u32, height: u32, bytes: &[u8]) -> StitchGrid {
    let codes: Vec<u8> = (0..(width * height) as usize)
        .map(|k| bytes.get(k).copied().unwrap_or(0) % 6)
        .collect();
    StitchGrid::from_codes(width, height, &codes)
        .unwrap_or_else(|e| panic!("bad fixture dimensions {width}x{height}: {e}"))
}
