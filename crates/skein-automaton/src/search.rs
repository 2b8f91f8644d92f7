//! Bounded downward column searches.

use skein_core::CnCoord;

use crate::grid::{ContactCell, ContactGrid};

/// Result of a bounded search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The first matching cell.
    Found(CnCoord),
    /// Row 0 was passed without a match.
    NotFound,
    /// The step limit ran out first.
    Exhausted {
        /// Steps taken.
        steps: usize,
    },
}

/// Walk down the column of `from`, starting at `from` itself, and return
/// the first cell accepted by `pred`. At most `limit` cells are examined.
pub fn search_down(
    grid: &ContactGrid,
    from: CnCoord,
    limit: usize,
    mut pred: impl FnMut(&ContactCell) -> bool,
) -> SearchOutcome {
    let mut at = from;
    let mut steps = 0;
    loop {
        if at.j < 0 {
            return SearchOutcome::NotFound;
        }
        if steps >= limit {
            return SearchOutcome::Exhausted { steps };
        }
        steps += 1;
        if grid.cell(at).is_some_and(&mut pred) {
            return SearchOutcome::Found(at);
        }
        at = at.offset(0, -1);
    }
}
