//! The automaton runner and its builder.

use skein_chart::StitchGrid;
use skein_core::{BuildError, Carriage, CnCoord, Diagnostics, StitchOp};

use crate::grid::ContactGrid;
use crate::rules::RowPass;

/// Replays a chart over a fresh [`ContactGrid`].
///
/// Rows are knitted bottom to top. Even rows travel left to right and
/// odd rows right to left; within a row, columns are visited in travel
/// order. The chart is expected to be padded with at least one empty
/// column on each side (the simulation facade does this).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactAutomaton {
    search_limit: usize,
}

/// Builder for [`ContactAutomaton`].
#[derive(Clone, Debug)]
pub struct ContactAutomatonBuilder {
    search_limit: usize,
}

/// Output of one automaton run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRun {
    /// The filled state grid.
    pub grid: ContactGrid,
    /// Non-fatal conditions met on the way.
    pub diagnostics: Diagnostics,
}

impl ContactAutomaton {
    /// Step limit of the downward column searches unless configured.
    pub const DEFAULT_SEARCH_LIMIT: usize = 1000;

    /// An automaton with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder.
    pub fn builder() -> ContactAutomatonBuilder {
        ContactAutomatonBuilder {
            search_limit: Self::DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Step limit of each downward column search.
    pub fn search_limit(&self) -> usize {
        self.search_limit
    }

    /// Knit `chart` and return the resulting state grid.
    ///
    /// Never fails: a search that runs out of steps leaves the state as
    /// last observed and adds a diagnostic to the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use skein_automaton::ContactAutomaton;
    /// use skein_chart::StitchGrid;
    /// use skein_core::{ActualizationValue, CnCoord};
    ///
    /// let chart: StitchGrid = ".K.".parse().unwrap();
    /// let run = ContactAutomaton::new().run(&chart);
    /// assert_eq!(run.grid.width(), 6);
    /// assert_eq!(run.grid.av(CnCoord::new(2, 0)), Some(ActualizationValue::Acn));
    /// assert!(run.diagnostics.is_empty());
    /// ```
    pub fn run(&self, chart: &StitchGrid) -> ContactRun {
        let mut grid = ContactGrid::for_stitch_grid(chart);
        let mut diagnostics = Diagnostics::new();
        let mut pass = RowPass {
            grid: &mut grid,
            search_limit: self.search_limit,
            diagnostics: &mut diagnostics,
        };

        for n in 0..chart.height() {
            let carriage = Carriage::for_row(n);
            let row = n as i32;
            for k in 0..chart.width() {
                let m = column_at(carriage, k, chart.width());
                let x = m as i32;
                let op = chart.op(x, row).unwrap_or(StitchOp::Empty);
                let bias = if op == StitchOp::MakeOne {
                    chart.increase_dir_at(x, row)
                } else {
                    None
                };
                let at = CnCoord::new(carriage.leading_cn(m), row);
                pass.apply(at, carriage.step(), op, bias);
            }
            if let Some((lo, hi)) = chart.active_span(n) {
                let i = match carriage {
                    Carriage::Right => 2 * hi as i32 + 1,
                    Carriage::Left => 2 * lo as i32,
                };
                pass.turn(CnCoord::new(i, row + 1));
            }
        }

        log::debug!(
            "contact automaton: {} rows over {}x{} cells, {} diagnostics",
            chart.height(),
            grid.width(),
            grid.height(),
            diagnostics.len()
        );
        ContactRun { grid, diagnostics }
    }
}

/// Stitch column visited `k`-th by a carriage crossing `width` columns.
fn column_at(carriage: Carriage, k: u32, width: u32) -> u32 {
    match carriage {
        Carriage::Right => k,
        Carriage::Left => width - 1 - k,
    }
}

impl Default for ContactAutomaton {
    fn default() -> Self {
        Self {
            search_limit: Self::DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl ContactAutomatonBuilder {
    /// Set the step limit of each downward column search (default: 1000).
    /// Must be >= 1.
    pub fn search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    /// Build the automaton.
    ///
    /// # Errors
    ///
    /// Returns `Err(BuildError::ZeroLimit)` if the search limit is 0.
    pub fn build(self) -> Result<ContactAutomaton, BuildError> {
        if self.search_limit == 0 {
            return Err(BuildError::ZeroLimit {
                name: "search_limit",
            });
        }
        Ok(ContactAutomaton {
            search_limit: self.search_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skein_core::{ActualizationValue as Av, MovementVector};

    fn padded(text: &str) -> StitchGrid {
        text.parse::<StitchGrid>()
            .unwrap()
            .pad(1, 0, StitchOp::Empty)
            .unwrap()
    }

    // ── Builder ─────────────────────────────────────────────────

    #[test]
    fn builder_defaults() {
        let automaton = ContactAutomaton::builder().build().unwrap();
        assert_eq!(automaton, ContactAutomaton::new());
        assert_eq!(automaton.search_limit(), 1000);
    }

    #[test]
    fn builder_rejects_zero_limit() {
        let err = ContactAutomaton::builder().search_limit(0).build();
        assert_eq!(
            err,
            Err(BuildError::ZeroLimit {
                name: "search_limit"
            })
        );
    }

    // ── Rows ────────────────────────────────────────────────────

    #[test]
    fn single_knit_cell() {
        let run = ContactAutomaton::new().run(&padded("K"));
        let g = &run.grid;
        assert_eq!((g.width(), g.height()), (6, 2));
        assert_eq!(g.av(CnCoord::new(2, 0)), Some(Av::Acn));
        assert_eq!(g.av(CnCoord::new(3, 0)), Some(Av::Acn));
        assert_eq!(g.av(CnCoord::new(2, 1)), Some(Av::Pcn));
        assert_eq!(g.av(CnCoord::new(3, 1)), Some(Av::Pcn));
        assert_eq!(g.av(CnCoord::new(0, 0)), Some(Av::Pcn));
        assert_eq!(g.av(CnCoord::new(0, 1)), Some(Av::Ecn));
        assert_eq!(g.stitch(CnCoord::new(4, 0)), None);
    }

    #[test]
    fn knit_field_actualizes_second_row() {
        let run = ContactAutomaton::new().run(&padded("KK\nKK"));
        let g = &run.grid;
        for i in 2..6 {
            assert_eq!(g.av(CnCoord::new(i, 1)), Some(Av::Acn), "i = {i}");
            assert_eq!(g.av(CnCoord::new(i, 2)), Some(Av::Pcn), "i = {i}");
        }
        assert!(run.diagnostics.is_empty());
    }

    #[test]
    fn turn_anchors_unanchored_edge_head() {
        // A tuck at the end of a right-travelling row leaves UACN heads;
        // the turnaround anchors the outermost one.
        let run = ContactAutomaton::new().run(&padded("KT"));
        let g = &run.grid;
        assert_eq!(g.av(CnCoord::new(4, 1)), Some(Av::Uacn));
        assert_eq!(g.av(CnCoord::new(5, 1)), Some(Av::Pcn));
        assert_eq!(g.mv(CnCoord::new(5, 0)), Some(MovementVector::new(0, 1)));
    }

    #[test]
    fn empty_row_has_no_turn() {
        let run = ContactAutomaton::new().run(&padded("..\nKK"));
        let g = &run.grid;
        for i in 0..g.width() as i32 {
            assert_eq!(g.av(CnCoord::new(i, 2)), Some(Av::Ecn));
        }
    }

    #[test]
    fn carriage_sets_column_order() {
        let right: Vec<u32> = (0..3).map(|k| column_at(Carriage::Right, k, 3)).collect();
        let left: Vec<u32> = (0..3).map(|k| column_at(Carriage::Left, k, 3)).collect();
        assert_eq!(right, [0, 1, 2]);
        assert_eq!(left, [2, 1, 0]);
        assert_eq!(column_at(Carriage::Left, 0, 1), 0);
    }

    #[test]
    fn biased_make_one_uses_lean() {
        let run = ContactAutomaton::new().run(&padded("K<"));
        let g = &run.grid;
        // Row 0 travels right: cell x = 2 (padded) starts at i = 4 and
        // leans left onto i = 3, which knit already owns.
        assert_eq!(g.stitch(CnCoord::new(3, 0)), Some(StitchOp::MakeOne));
        assert_eq!(g.stitch(CnCoord::new(4, 0)), Some(StitchOp::MakeOne));
        assert_eq!(g.stitch(CnCoord::new(5, 0)), Some(StitchOp::MakeOne));
    }
}
