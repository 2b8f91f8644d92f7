//! Pattern-row normalization.
//!
//! Pattern editors describe rows with a richer stitch vocabulary than the
//! machine ops a chart holds: yarn-overs, paired decreases, spacer cells
//! and the padding cells decreases leave behind. [`chart_from_pattern_rows`]
//! lowers those rows into a [`StitchGrid`].

use skein_core::{ChartError, IncreaseDir, StitchOp};

use crate::grid::StitchGrid;

/// One cell of an editor pattern row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternStitch {
    /// Knit stitch.
    Knit,
    /// Purl stitch.
    Purl,
    /// Miss (slip) stitch.
    Miss,
    /// Tuck stitch.
    Tuck,
    /// Layout spacer; keeps its column but holds no stitch.
    Space,
    /// Needle out of work.
    Empty,
    /// Yarn-over; knitted as an unbiased make-one.
    YarnOver,
    /// Make-one increase with an optional lean.
    MakeOne(Option<IncreaseDir>),
    /// Knit two together.
    KnitTwoTogether,
    /// Slip, slip, knit.
    SlipSlipKnit,
    /// Placeholder left by a decrease; dropped.
    DecreasePad,
}

/// Face of the nearest stitch left of `idx`, ignoring spacers and
/// decrease padding. Knit when there is none.
fn previous_face(row: &[PatternStitch], idx: usize) -> StitchOp {
    row[..idx]
        .iter()
        .rev()
        .find(|st| !matches!(st, PatternStitch::Space | PatternStitch::DecreasePad))
        .map_or(StitchOp::Knit, |st| match st {
            PatternStitch::Purl => StitchOp::Purl,
            _ => StitchOp::Knit,
        })
}

fn lower_row(row: &[PatternStitch]) -> Vec<(StitchOp, Option<IncreaseDir>)> {
    let mut out = Vec::with_capacity(row.len() + 1);
    for (idx, &st) in row.iter().enumerate() {
        match st {
            PatternStitch::DecreasePad => {}
            PatternStitch::Knit => out.push((StitchOp::Knit, None)),
            PatternStitch::Purl => out.push((StitchOp::Purl, None)),
            PatternStitch::Miss => out.push((StitchOp::Miss, None)),
            PatternStitch::Tuck => out.push((StitchOp::Tuck, None)),
            PatternStitch::Space | PatternStitch::Empty => out.push((StitchOp::Empty, None)),
            PatternStitch::YarnOver => out.push((StitchOp::MakeOne, None)),
            PatternStitch::MakeOne(dir) => out.push((StitchOp::MakeOne, dir)),
            PatternStitch::KnitTwoTogether | PatternStitch::SlipSlipKnit => {
                let face = previous_face(row, idx);
                out.push((face, None));
                out.push((face, None));
            }
        }
    }
    out
}

/// Lower editor rows (row 0 = bottom) into a chart.
///
/// Decrease padding is dropped, spacers become empty cells, yarn-overs
/// become unbiased make-ones and each two-into-one decrease becomes two
/// stitches of the face knitted just before it. Leading rows that end up
/// with no cells are trimmed while more than one row remains. The chart
/// is as wide as the longest row (at least 1); short rows are filled
/// with empty cells.
///
/// Returns `Err(ChartError::EmptyChart)` when `rows` is empty.
pub fn chart_from_pattern_rows(rows: &[Vec<PatternStitch>]) -> Result<StitchGrid, ChartError> {
    let mut lowered: Vec<_> = rows.iter().map(|row| lower_row(row)).collect();
    let leading = lowered
        .iter()
        .take(lowered.len().saturating_sub(1))
        .take_while(|row| row.is_empty())
        .count();
    lowered.drain(..leading);

    let width = lowered.iter().map(Vec::len).max().unwrap_or(0).max(1);
    let width = u32::try_from(width).map_err(|_| ChartError::DimensionTooLarge {
        name: "width",
        value: u32::MAX,
        max: StitchGrid::MAX_DIM,
    })?;
    let height = u32::try_from(lowered.len()).map_err(|_| ChartError::DimensionTooLarge {
        name: "height",
        value: u32::MAX,
        max: StitchGrid::MAX_DIM,
    })?;

    let mut ops = Vec::with_capacity(width as usize * lowered.len());
    let mut dirs = Vec::with_capacity(ops.capacity());
    for row in &lowered {
        for x in 0..width as usize {
            let (op, dir) = row.get(x).copied().unwrap_or((StitchOp::Empty, None));
            ops.push(op);
            dirs.push(dir);
        }
    }
    StitchGrid::new(width, height, ops)?.with_increase_dirs(dirs)
}
