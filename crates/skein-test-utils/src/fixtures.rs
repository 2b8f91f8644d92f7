//! Reusable chart fixtures.
//!
//! - [`stockinette`]: all knit.
//! - [`rib`]: alternating knit and purl columns.
//! - [`single_in_field`]: one op in the middle of a 3x3 knit field.
//! - [`seeded`]: deterministic pseudo-random chart.

use skein_chart::StitchGrid;
use skein_core::StitchOp;

/// A `width x height` all-knit chart.
pub fn stockinette(width: u32, height: u32) -> StitchGrid {
    StitchGrid::filled(width, height, StitchOp::Knit)
        .unwrap_or_else(|e| panic!("bad stockinette {width}x{height}: {e}"))
}

/// Columns alternate knit and purl, starting with knit.
pub fn rib(width: u32, height: u32) -> StitchGrid {
    let ops = (0..width * height)
        .map(|k| {
            if (k % width) % 2 == 0 {
                StitchOp::Knit
            } else {
                StitchOp::Purl
            }
        })
        .collect();
    StitchGrid::new(width, height, ops).unwrap_or_else(|e| panic!("bad rib {width}x{height}: {e}"))
}

/// A 3x3 knit field with `op` at its centre.
pub fn single_in_field(op: StitchOp) -> StitchGrid {
    let mut ops = vec![StitchOp::Knit; 9];
    ops[4] = op;
    StitchGrid::new(3, 3, ops).unwrap_or_else(|e| panic!("bad field: {e}"))
}

/// Deterministic pseudo-random chart. Empty cells are rarer than the
/// other ops so that paths stay long.
pub fn seeded(width: u32, height: u32, seed: u64) -> StitchGrid {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    let ops = (0..width * height)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            match (state >> 33) % 16 {
                0..=6 => StitchOp::Knit,
                7..=9 => StitchOp::Purl,
                10 | 11 => StitchOp::Tuck,
                12 | 13 => StitchOp::Miss,
                14 => StitchOp::MakeOne,
                _ => StitchOp::Empty,
            }
        })
        .collect();
    StitchGrid::new(width, height, ops)
        .unwrap_or_else(|e| panic!("bad seeded chart {width}x{height}: {e}"))
}
