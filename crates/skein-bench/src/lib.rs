//! Benchmark charts for the Skein yarn-path simulator.
//!
//! - [`reference_chart`]: 100x100 tiled motif (10K stitches)
//! - [`stress_chart`]: 316x316 tiled motif (~100K stitches)
//! - [`motif`] / [`motif_chart`]: any size, tiled with [`MOTIF`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use skein_chart::StitchGrid;
use skein_core::{ChartError, StitchOp};

/// 8x4 tile, bottom row first: a knit/purl border, a tuck row, a miss
/// row and a row with increases. Every op type appears so the automaton
/// exercises all of its rules.
pub const MOTIF: [[StitchOp; 8]; 4] = {
    use StitchOp::{Empty as E, Knit as K, MakeOne as Y, Miss as M, Purl as P, Tuck as T};
    [
        [K, K, P, P, K, K, P, P],
        [K, T, K, K, T, K, K, K],
        [K, K, M, K, K, M, K, K],
        [Y, K, K, E, K, K, Y, K],
    ]
};

/// A `width x height` chart tiled with [`MOTIF`].
pub fn motif(width: u32, height: u32) -> Result<StitchGrid, ChartError> {
    let ops = (0..height as usize)
        .flat_map(|y| (0..width as usize).map(move |x| MOTIF[y % 4][x % 8]))
        .collect();
    StitchGrid::new(width, height, ops)
}

/// [`motif`] framed by one column of `Empty` on each side, ready for the
/// automaton.
pub fn motif_chart(width: u32, height: u32) -> Result<StitchGrid, ChartError> {
    motif(width, height)?.pad(1, 0, StitchOp::Empty)
}

/// Reference profile: 100x100 stitches.
pub fn reference_chart() -> Result<StitchGrid, ChartError> {
    motif_chart(100, 100)
}

/// Stress profile: 316x316 stitches.
pub fn stress_chart() -> Result<StitchGrid, ChartError> {
    motif_chart(316, 316)
}
