//! Per-operation transition rules.
//!
//! A chart cell `(m, n)` touches four contact cells: the lower pair
//! `(i, n)`, `(i + offset, n)` where its legs sit, and the upper pair one
//! row above where its head sits. `i` and `offset` depend on the
//! carriage direction, so the first cell written is always the one the
//! carriage meets first.

use skein_core::{
    ActualizationValue as Av, CnCoord, Diagnostic, Diagnostics, IncreaseDir, MovementVector,
    SearchKind, StitchOp,
};

use crate::grid::{ContactCell, ContactGrid};
use crate::search::{search_down, SearchOutcome};

/// Mutable view of one automaton run.
pub(crate) struct RowPass<'a> {
    pub(crate) grid: &'a mut ContactGrid,
    pub(crate) search_limit: usize,
    pub(crate) diagnostics: &'a mut Diagnostics,
}

impl RowPass<'_> {
    /// Apply `op` at lower contact cell `at` with partner `at + offset`.
    pub(crate) fn apply(
        &mut self,
        at: CnCoord,
        offset: i32,
        op: StitchOp,
        bias: Option<IncreaseDir>,
    ) {
        let partner = at.offset(offset, 0);
        if !op.is_empty() {
            self.grid.record_stitch(at, op, true);
            self.grid.record_stitch(partner, op, true);
            self.grid.record_stitch(at.offset(0, 1), op, false);
            self.grid.record_stitch(partner.offset(0, 1), op, false);
        }
        match op {
            StitchOp::Empty => self.clear_empty(at, partner),
            StitchOp::MakeOne => {
                let offset = self.make_one_offset(at, offset, bias);
                self.make_one(at, at.offset(offset, 0));
            }
            StitchOp::Knit | StitchOp::Purl => {
                self.loop_lower(at, op);
                self.loop_lower(partner, op);
                self.loop_upper(at);
                self.loop_upper(partner);
            }
            StitchOp::Tuck | StitchOp::Miss => {
                self.hold_lower(at);
                self.hold_lower(partner);
                self.hold_upper(at, op);
                self.hold_upper(partner, op);
            }
        }
    }

    /// Lower-cell rule of a loop-forming op.
    fn loop_lower(&mut self, at: CnCoord, op: StitchOp) {
        self.grid.record_stitch(at, op, true);
        if at.j == 0 && self.grid.av(at) == Some(Av::Ecn) {
            self.grid.set_av(at, Av::Pcn);
        }
        let Some(cell) = self.grid.cell(at).copied() else {
            return;
        };
        if cell.av == Av::Pcn && cell.mv.dcol == 0 {
            self.grid.set_av(at, Av::Acn);
        }
        if cell.av == Av::Uacn {
            let held = self.grid.diagonals_below(at).into_iter().any(|d| {
                self.grid
                    .cell(d)
                    .is_some_and(|c| c.av == Av::Acn && c.mv.drow == 0)
            });
            if held {
                self.grid.set_av(at, Av::Acn);
            }
            let below = at.offset(0, -1);
            if self.grid.av(below) == Some(Av::Pcn) {
                self.grid.set_av(below, Av::Acn);
            }
        }
    }

    /// Upper-cell rule of a loop-forming op.
    fn loop_upper(&mut self, at: CnCoord) {
        let above = at.offset(0, 1);
        self.grid.set_mv(above, MovementVector::ZERO);
        let lower = self.grid.av(at);
        let av = if lower == Some(Av::Acn) {
            Av::Pcn
        } else {
            Av::Uacn
        };
        self.grid.set_av(above, av);
        if lower == Some(Av::Uacn) {
            self.anchor_below(at);
        }
    }

    /// Promote the nearest potential cell at or below `from`.
    fn anchor_below(&mut self, from: CnCoord) {
        match search_down(&*self.grid, from, self.search_limit, |c| c.av == Av::Pcn) {
            SearchOutcome::Found(at) => {
                self.grid.set_av(at, Av::Acn);
            }
            SearchOutcome::NotFound => {}
            SearchOutcome::Exhausted { steps } => {
                self.diagnostics.raise(Diagnostic::SearchExhausted {
                    kind: SearchKind::Anchor,
                    from,
                    steps,
                });
            }
        }
    }

    /// Lower-cell rule of tuck and miss: the loop below is held up.
    fn hold_lower(&mut self, at: CnCoord) {
        let Some(cell) = self.grid.cell(at).copied() else {
            return;
        };
        match cell.av {
            Av::Pcn | Av::Uacn => self.grid.set_mv(at, cell.mv.with_drow(1)),
            Av::Ecn => self.lift_below(at),
            Av::Acn => {}
        }
    }

    /// Lift the nearest already-lifted loop at or below `from` one more row.
    fn lift_below(&mut self, from: CnCoord) {
        match search_down(&*self.grid, from, self.search_limit, |c| c.mv.drow > 0) {
            SearchOutcome::Found(at) => {
                if let Some(mv) = self.grid.mv(at) {
                    self.grid.set_mv(at, mv.with_drow(mv.drow + 1));
                }
            }
            SearchOutcome::NotFound => {
                self.diagnostics.raise(Diagnostic::SearchBottomedOut {
                    kind: SearchKind::Lift,
                    from,
                });
            }
            SearchOutcome::Exhausted { steps } => {
                self.diagnostics.raise(Diagnostic::SearchExhausted {
                    kind: SearchKind::Lift,
                    from,
                    steps,
                });
            }
        }
    }

    /// Upper-cell rule of tuck and miss.
    fn hold_upper(&mut self, at: CnCoord, op: StitchOp) {
        let above = at.offset(0, 1);
        if op == StitchOp::Tuck {
            self.grid.set_av(above, Av::Uacn);
            self.grid.set_mv(above, MovementVector::ZERO);
        } else {
            self.grid.set_av(above, Av::Ecn);
            self.grid.set_mv(above, MovementVector::SKIPPED);
        }
    }

    /// Partner offset of a make-one: its lean when the leaned-to column
    /// exists, otherwise the carriage direction.
    fn make_one_offset(&self, at: CnCoord, offset: i32, bias: Option<IncreaseDir>) -> i32 {
        match bias {
            Some(dir) if self.grid.contains(at.offset(dir.offset(), 0)) => dir.offset(),
            _ => offset,
        }
    }

    fn make_one(&mut self, at: CnCoord, partner: CnCoord) {
        for c in [at, partner] {
            if self.grid.av(c) == Some(Av::Ecn) {
                self.grid.set_av(c, Av::Pcn);
                self.grid.set_mv(c, MovementVector::ZERO);
            }
        }
        self.loop_lower(at, StitchOp::MakeOne);
        self.loop_lower(partner, StitchOp::MakeOne);
        self.loop_upper(at);
        self.loop_upper(partner);
    }

    /// An empty needle resets untouched cells and never clears
    /// actualized ones.
    fn clear_empty(&mut self, at: CnCoord, partner: CnCoord) {
        for c in [at, partner, at.offset(0, 1), partner.offset(0, 1)] {
            if let Some(cell) = self.grid.cell_mut(c) {
                if cell.av == Av::Ecn && cell.stitch.is_none() {
                    *cell = ContactCell::EMPTY;
                }
            }
        }
    }

    /// Anchor the head cell where the carriage turns after a row.
    pub(crate) fn turn(&mut self, at: CnCoord) {
        if matches!(self.grid.av(at), Some(Av::Ecn | Av::Uacn)) {
            self.grid.set_av(at, Av::Pcn);
            self.grid.set_mv(at, MovementVector::ZERO);
        }
    }
}
