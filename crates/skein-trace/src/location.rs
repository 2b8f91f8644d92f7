//! Where a displaced loop finally rests.

use skein_automaton::ContactGrid;
use skein_core::{CnCoord, StitchOp};

/// Outcome of a final-location chase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resting {
    /// The chase settled on this cell.
    Settled(CnCoord),
    /// The step limit ran out; `last` is the last cell passed through.
    Exhausted {
        /// Last in-range cell the chase passed through.
        last: CnCoord,
        /// Steps taken.
        steps: usize,
    },
}

impl Resting {
    /// The cell to draw the loop at, whether or not the chase settled.
    pub fn at(self) -> CnCoord {
        match self {
            Self::Settled(at) | Self::Exhausted { last: at, .. } => at,
        }
    }
}

/// Follow the movement vectors from `from` to the loop's resting cell.
///
/// The top row rests where it is. Otherwise the first step is sideways
/// by `dcol` if non-zero, else vertical by `drow`. From there the chase
/// climbs by each cell's `drow` and stops on a cell holding a
/// loop-forming stitch, on the top row, or on a cell that does not point
/// upward. A step off the grid resolves to the last cell on it. At most
/// `limit` cells are examined.
pub fn final_location(grid: &ContactGrid, from: CnCoord, limit: usize) -> Resting {
    let top = grid.top_row();
    if from.j == top {
        return Resting::Settled(from);
    }
    let mv = grid.mv(from).unwrap_or_default();
    let mut at = if mv.dcol != 0 {
        from.offset(mv.dcol, 0)
    } else {
        from.offset(0, mv.drow)
    };
    let mut last = from;
    for _ in 0..limit {
        let Some(cell) = grid.cell(at) else {
            return Resting::Settled(last);
        };
        if cell.stitch.is_some_and(StitchOp::forms_loop) || at.j == top || cell.mv.drow <= 0 {
            return Resting::Settled(at);
        }
        last = at;
        at = at.offset(0, cell.mv.drow);
    }
    Resting::Exhausted { last, steps: limit }
}
