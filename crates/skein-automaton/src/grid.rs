//! The contact-neighbourhood state grid.

use std::fmt;

use skein_chart::StitchGrid;
use skein_core::{ActualizationValue, ChartError, CnCoord, MovementVector, StitchOp};
use smallvec::SmallVec;

/// State of one contact neighbourhood.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactCell {
    /// Whether, and how firmly, yarn rests here.
    pub av: ActualizationValue,
    /// Displacement of the loop nominally resting here.
    pub mv: MovementVector,
    /// Operation recorded for this cell, if any op touched it.
    pub stitch: Option<StitchOp>,
}

impl ContactCell {
    /// An empty cell: ECN, no movement, no stitch.
    pub const EMPTY: Self = Self {
        av: ActualizationValue::Ecn,
        mv: MovementVector::ZERO,
        stitch: None,
    };

    const BASE: Self = Self {
        av: ActualizationValue::Pcn,
        ..Self::EMPTY
    };
}

/// Export record for one contact cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CnStitch {
    /// Column.
    pub i: u32,
    /// Row.
    pub j: u32,
    /// Recorded stitch type.
    pub stitch: Option<StitchOp>,
}

/// A `(2M) x (N + 1)` grid of [`ContactCell`]s for an `M x N` chart.
///
/// Chart cell `(x, y)` owns contact columns `2x` and `2x + 1`: its legs
/// sit in row `y` and its head in row `y + 1`. Row 0 starts out as
/// potential contacts (the cast-on); every other cell starts empty.
///
/// Queries outside the grid answer `None` and writes outside it are
/// ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactGrid {
    width: u32,
    height: u32,
    cells: Vec<ContactCell>,
}

impl ContactGrid {
    /// Fresh grid for a chart of `chart_width x chart_height` cells.
    ///
    /// Returns `Err(ChartError::EmptyChart)` if either dimension is 0 and
    /// `Err(ChartError::DimensionTooLarge)` past
    /// [`StitchGrid::MAX_DIM`].
    pub fn for_chart(chart_width: u32, chart_height: u32) -> Result<Self, ChartError> {
        if chart_width == 0 || chart_height == 0 {
            return Err(ChartError::EmptyChart);
        }
        for (name, value) in [("width", chart_width), ("height", chart_height)] {
            if value > StitchGrid::MAX_DIM {
                return Err(ChartError::DimensionTooLarge {
                    name,
                    value,
                    max: StitchGrid::MAX_DIM,
                });
            }
        }
        Ok(Self::blank(chart_width, chart_height))
    }

    /// Fresh grid for `chart`, whose dimensions are already bounded.
    pub fn for_stitch_grid(chart: &StitchGrid) -> Self {
        Self::blank(chart.width(), chart.height())
    }

    fn blank(chart_width: u32, chart_height: u32) -> Self {
        let width = 2 * chart_width;
        let height = chart_height + 1;
        let mut cells = vec![ContactCell::EMPTY; width as usize * height as usize];
        for cell in &mut cells[..width as usize] {
            *cell = ContactCell::BASE;
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of contact columns (`2M`).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of contact rows (`N + 1`).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Index of the topmost row.
    pub fn top_row(&self) -> i32 {
        self.height as i32 - 1
    }

    /// Whether `at` lies on the grid.
    pub fn contains(&self, at: CnCoord) -> bool {
        at.i >= 0 && at.j >= 0 && (at.i as u32) < self.width && (at.j as u32) < self.height
    }

    /// Row-major flat index of `at`.
    pub fn flat_index(&self, at: CnCoord) -> Option<usize> {
        if !self.contains(at) {
            return None;
        }
        Some(at.j as usize * self.width as usize + at.i as usize)
    }

    /// The cell at `at`.
    pub fn cell(&self, at: CnCoord) -> Option<&ContactCell> {
        self.flat_index(at).map(|idx| &self.cells[idx])
    }

    pub(crate) fn cell_mut(&mut self, at: CnCoord) -> Option<&mut ContactCell> {
        self.flat_index(at).map(move |idx| &mut self.cells[idx])
    }

    /// Actualization value at `at`.
    pub fn av(&self, at: CnCoord) -> Option<ActualizationValue> {
        self.cell(at).map(|c| c.av)
    }

    /// Movement vector at `at`.
    pub fn mv(&self, at: CnCoord) -> Option<MovementVector> {
        self.cell(at).map(|c| c.mv)
    }

    /// Recorded stitch type at `at`.
    pub fn stitch(&self, at: CnCoord) -> Option<StitchOp> {
        self.cell(at).and_then(|c| c.stitch)
    }

    /// Stitch of the loop that forms the node at `at`: the stitch of the
    /// cell below when there is one, else the cell's own.
    pub fn owner_stitch(&self, at: CnCoord) -> Option<StitchOp> {
        if at.j > 0 {
            if let Some(below) = self.stitch(at.offset(0, -1)) {
                return Some(below);
            }
        }
        self.stitch(at)
    }

    /// Mark the cell at `at` actualized. Returns `false` off the grid.
    pub fn promote(&mut self, at: CnCoord) -> bool {
        self.set_av(at, ActualizationValue::Acn)
    }

    pub(crate) fn set_av(&mut self, at: CnCoord, av: ActualizationValue) -> bool {
        match self.cell_mut(at) {
            Some(cell) => {
                cell.av = av;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_mv(&mut self, at: CnCoord, mv: MovementVector) {
        if let Some(cell) = self.cell_mut(at) {
            cell.mv = mv;
        }
    }

    /// Record `op` at `at`. Unless `force`, an existing record is kept.
    pub(crate) fn record_stitch(&mut self, at: CnCoord, op: StitchOp, force: bool) {
        if let Some(cell) = self.cell_mut(at) {
            if force || cell.stitch.is_none() {
                cell.stitch = Some(op);
            }
        }
    }

    /// The two diagonal neighbours one row down that lie on the grid.
    pub(crate) fn diagonals_below(&self, at: CnCoord) -> SmallVec<[CnCoord; 2]> {
        [at.offset(1, -1), at.offset(-1, -1)]
            .into_iter()
            .filter(|&c| self.contains(c))
            .collect()
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[ContactCell] {
        &self.cells
    }

    /// Per-cell `{i, j, stitch}` export, row-major.
    pub fn stitch_cells(&self) -> impl Iterator<Item = CnStitch> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(idx, cell)| CnStitch {
            i: idx as u32 % width,
            j: idx as u32 / width,
            stitch: cell.stitch,
        })
    }
}

impl fmt::Display for ContactGrid {
    /// One line per row, top row first: `AV(dcol,drow)S` per cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for j in (0..self.height as usize).rev() {
            let row = &self.cells[j * self.width as usize..(j + 1) * self.width as usize];
            write!(f, "{j:>3} |")?;
            for cell in row {
                let symbol = cell.stitch.map_or('-', StitchOp::symbol);
                write!(f, " {:<4}{}{symbol}", cell.av, cell.mv)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ActualizationValue::*;

    #[test]
    fn oversized_chart_is_rejected() {
        assert_eq!(ContactGrid::for_chart(0, 1), Err(ChartError::EmptyChart));
        assert_eq!(
            ContactGrid::for_chart(StitchGrid::MAX_DIM + 1, 1),
            Err(ChartError::DimensionTooLarge {
                name: "width",
                value: StitchGrid::MAX_DIM + 1,
                max: StitchGrid::MAX_DIM,
            })
        );
        assert!(matches!(
            ContactGrid::for_chart(1, u32::MAX),
            Err(ChartError::DimensionTooLarge { name: "height", .. })
        ));
    }

    #[test]
    fn stitch_grid_shape_matches_dimensions() {
        let chart = StitchGrid::filled(3, 2, StitchOp::Knit).unwrap();
        assert_eq!(
            ContactGrid::for_stitch_grid(&chart),
            ContactGrid::for_chart(3, 2).unwrap()
        );
    }

    #[test]
    fn fresh_grid_shape_and_cast_on() {
        let grid = ContactGrid::for_chart(3, 2).unwrap();
        assert_eq!(grid.width(), 6);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.top_row(), 2);
        for i in 0..6 {
            assert_eq!(grid.av(CnCoord::new(i, 0)), Some(Pcn));
            assert_eq!(grid.av(CnCoord::new(i, 1)), Some(Ecn));
            assert_eq!(grid.mv(CnCoord::new(i, 2)), Some(MovementVector::ZERO));
        }
    }

    #[test]
    fn out_of_range_reads_none_and_writes_ignored() {
        let mut grid = ContactGrid::for_chart(1, 1).unwrap();
        let off = CnCoord::new(2, 0);
        assert_eq!(grid.av(off), None);
        assert_eq!(grid.flat_index(CnCoord::new(-1, 0)), None);
        assert!(!grid.promote(off));
        grid.set_mv(off, MovementVector::new(0, 3));
        grid.record_stitch(off, StitchOp::Knit, true);
        assert_eq!(grid, ContactGrid::for_chart(1, 1).unwrap());
    }

    #[test]
    fn record_stitch_write_once_unless_forced() {
        let mut grid = ContactGrid::for_chart(1, 1).unwrap();
        let at = CnCoord::new(0, 1);
        grid.record_stitch(at, StitchOp::Tuck, false);
        grid.record_stitch(at, StitchOp::Knit, false);
        assert_eq!(grid.stitch(at), Some(StitchOp::Tuck));
        grid.record_stitch(at, StitchOp::Knit, true);
        assert_eq!(grid.stitch(at), Some(StitchOp::Knit));
    }

    #[test]
    fn owner_stitch_prefers_cell_below() {
        let mut grid = ContactGrid::for_chart(1, 2).unwrap();
        grid.record_stitch(CnCoord::new(0, 0), StitchOp::Purl, true);
        grid.record_stitch(CnCoord::new(0, 1), StitchOp::Knit, true);
        grid.record_stitch(CnCoord::new(1, 1), StitchOp::Knit, true);
        assert_eq!(grid.owner_stitch(CnCoord::new(0, 1)), Some(StitchOp::Purl));
        assert_eq!(grid.owner_stitch(CnCoord::new(1, 1)), Some(StitchOp::Knit));
        assert_eq!(grid.owner_stitch(CnCoord::new(0, 0)), Some(StitchOp::Purl));
    }

    #[test]
    fn diagonals_clip_at_edges() {
        let grid = ContactGrid::for_chart(2, 2).unwrap();
        assert_eq!(grid.diagonals_below(CnCoord::new(0, 1)).len(), 1);
        assert_eq!(grid.diagonals_below(CnCoord::new(1, 1)).len(), 2);
        assert!(grid.diagonals_below(CnCoord::new(1, 0)).is_empty());
    }

    #[test]
    fn stitch_cells_are_row_major() {
        let mut grid = ContactGrid::for_chart(1, 1).unwrap();
        grid.record_stitch(CnCoord::new(1, 1), StitchOp::Miss, true);
        let cells: Vec<CnStitch> = grid.stitch_cells().collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(
            cells[3],
            CnStitch {
                i: 1,
                j: 1,
                stitch: Some(StitchOp::Miss)
            }
        );
        assert_eq!(grid.flat_index(CnCoord::new(1, 1)), Some(3));
    }

    #[test]
    fn display_prints_top_row_first() {
        let grid = ContactGrid::for_chart(1, 1).unwrap();
        let text = grid.to_string();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("  1 |"));
        assert!(text.lines().nth(1).unwrap().contains("PCN (0,0)-"));
    }
}
