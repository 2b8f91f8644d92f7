//! The immutable stitch chart.

use skein_core::{ChartError, IncreaseDir, StitchOp};

/// A rectangular chart of knitting operations.
///
/// Cells are addressed `(x, y)` with `0 <= x < width` and
/// `0 <= y < height`; row 0 is the bottom row. Every chart also carries
/// an optional [`IncreaseDir`] per cell, meaningful only for
/// [`StitchOp::MakeOne`] cells.
///
/// Queries take signed coordinates and answer `None` outside the chart,
/// so neighbour arithmetic never needs its own range checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StitchGrid {
    width: u32,
    height: u32,
    ops: Vec<StitchOp>,
    increase: Vec<Option<IncreaseDir>>,
}

/// One chart cell and the four contact cells that outline it.
///
/// `corners` are flat contact-grid indices in polygon draw order:
/// `(2x, y)`, `(2x+1, y)`, `(2x+1, y+1)`, `(2x, y+1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StitchQuad {
    /// Chart column.
    pub x: u32,
    /// Chart row.
    pub y: u32,
    /// Operation in the cell.
    pub op: StitchOp,
    /// Flat contact-grid indices of the outline.
    pub corners: [usize; 4],
}

impl StitchGrid {
    /// Maximum chart dimension: the contact grid doubles the width and
    /// adds a row, and its coordinates use `i32`.
    pub const MAX_DIM: u32 = (i32::MAX / 2) as u32;

    /// Create a chart from a row-major op buffer.
    ///
    /// Returns `Err(ChartError::EmptyChart)` if either dimension is 0,
    /// `Err(ChartError::DimensionTooLarge)` past [`Self::MAX_DIM`], or
    /// `Err(ChartError::SizeMismatch)` if `ops.len() != width * height`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skein_chart::StitchGrid;
    /// use skein_core::StitchOp;
    ///
    /// let chart = StitchGrid::new(2, 1, vec![StitchOp::Knit, StitchOp::Purl]).unwrap();
    /// assert_eq!(chart.op(1, 0), Some(StitchOp::Purl));
    /// assert_eq!(chart.op(2, 0), None);
    /// ```
    pub fn new(width: u32, height: u32, ops: Vec<StitchOp>) -> Result<Self, ChartError> {
        let expected = check_dims(width, height)?;
        if ops.len() != expected {
            return Err(ChartError::SizeMismatch {
                expected,
                actual: ops.len(),
            });
        }
        Ok(Self {
            width,
            height,
            ops,
            increase: vec![None; expected],
        })
    }

    /// Create a chart with every cell set to `op`.
    pub fn filled(width: u32, height: u32, op: StitchOp) -> Result<Self, ChartError> {
        let count = check_dims(width, height)?;
        Self::new(width, height, vec![op; count])
    }

    /// Create a chart from bitmap pixel codes (`K=0 P=1 M=2 T=3 E=4 Y=5`).
    pub fn from_codes(width: u32, height: u32, codes: &[u8]) -> Result<Self, ChartError> {
        let ops = codes
            .iter()
            .enumerate()
            .map(|(index, &code)| {
                StitchOp::from_code(code).ok_or(ChartError::UnknownCode { code, index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(width, height, ops)
    }

    /// Attach a row-major increase-bias buffer.
    pub fn with_increase_dirs(
        mut self,
        dirs: Vec<Option<IncreaseDir>>,
    ) -> Result<Self, ChartError> {
        if dirs.len() != self.ops.len() {
            return Err(ChartError::SizeMismatch {
                expected: self.ops.len(),
                actual: dirs.len(),
            });
        }
        self.increase = dirs;
        Ok(self)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.ops.len()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// The operation at `(x, y)`, or `None` outside the chart.
    pub fn op(&self, x: i32, y: i32) -> Option<StitchOp> {
        self.index(x, y).map(|idx| self.ops[idx])
    }

    /// The increase bias at `(x, y)`, or `None` if unset or outside.
    pub fn increase_dir_at(&self, x: i32, y: i32) -> Option<IncreaseDir> {
        self.index(x, y).and_then(|idx| self.increase[idx])
    }

    /// Row-major op buffer.
    pub fn ops(&self) -> &[StitchOp] {
        &self.ops
    }

    /// Ops of row `y`, left to right.
    pub fn row(&self, y: u32) -> Option<&[StitchOp]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.ops[start..start + self.width as usize])
    }

    /// Lowest and highest column of row `y` holding a non-empty op.
    pub fn active_span(&self, y: u32) -> Option<(u32, u32)> {
        let row = self.row(y)?;
        let lo = row.iter().position(|op| !op.is_empty())?;
        let hi = row.iter().rposition(|op| !op.is_empty())?;
        Some((lo as u32, hi as u32))
    }

    /// A new chart enlarged by `x_margin` columns on both sides and
    /// `y_margin` rows above and below, margins filled with `fill` and
    /// carrying no increase bias.
    pub fn pad(&self, x_margin: u32, y_margin: u32, fill: StitchOp) -> Result<Self, ChartError> {
        let width = grow(self.width, x_margin, "width")?;
        let height = grow(self.height, y_margin, "height")?;
        let count = check_dims(width, height)?;
        let mut ops = vec![fill; count];
        let mut increase = vec![None; count];
        for y in 0..self.height as usize {
            let src = y * self.width as usize;
            let dst = (y + y_margin as usize) * width as usize + x_margin as usize;
            let len = self.width as usize;
            ops[dst..dst + len].copy_from_slice(&self.ops[src..src + len]);
            increase[dst..dst + len].copy_from_slice(&self.increase[src..src + len]);
        }
        Ok(Self {
            width,
            height,
            ops,
            increase,
        })
    }

    /// Every cell with its contact-grid outline, row-major.
    pub fn stitch_quads(&self) -> Vec<StitchQuad> {
        let cn_width = 2 * self.width as usize;
        let mut quads = Vec::with_capacity(self.ops.len());
        for y in 0..self.height {
            for x in 0..self.width {
                let i = 2 * x as usize;
                let lower = y as usize * cn_width;
                let upper = lower + cn_width;
                quads.push(StitchQuad {
                    x,
                    y,
                    op: self.ops[y as usize * self.width as usize + x as usize],
                    corners: [lower + i, lower + i + 1, upper + i + 1, upper + i],
                });
            }
        }
        quads
    }
}

fn check_dims(width: u32, height: u32) -> Result<usize, ChartError> {
    if width == 0 || height == 0 {
        return Err(ChartError::EmptyChart);
    }
    if width > StitchGrid::MAX_DIM {
        return Err(ChartError::DimensionTooLarge {
            name: "width",
            value: width,
            max: StitchGrid::MAX_DIM,
        });
    }
    if height > StitchGrid::MAX_DIM {
        return Err(ChartError::DimensionTooLarge {
            name: "height",
            value: height,
            max: StitchGrid::MAX_DIM,
        });
    }
    Ok(width as usize * height as usize)
}

fn grow(dim: u32, margin: u32, name: &'static str) -> Result<u32, ChartError> {
    margin
        .checked_mul(2)
        .and_then(|m| dim.checked_add(m))
        .ok_or(ChartError::DimensionTooLarge {
            name,
            value: u32::MAX,
            max: StitchGrid::MAX_DIM,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use StitchOp::*;

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn zero_dimension_is_empty_chart() {
        assert_eq!(StitchGrid::new(0, 3, vec![]), Err(ChartError::EmptyChart));
        assert_eq!(StitchGrid::new(3, 0, vec![]), Err(ChartError::EmptyChart));
    }

    #[test]
    fn smallest_chart_still_has_a_cell() {
        let chart = StitchGrid::filled(1, 1, Empty).unwrap();
        assert_eq!(chart.cell_count(), 1);
        assert_eq!(chart.op(0, 0), Some(Empty));
    }

    #[test]
    fn buffer_length_is_checked() {
        let err = StitchGrid::new(2, 2, vec![Knit; 3]).unwrap_err();
        assert_eq!(
            err,
            ChartError::SizeMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn oversized_width_rejected() {
        let err = StitchGrid::filled(StitchGrid::MAX_DIM + 1, 1, Knit).unwrap_err();
        assert!(matches!(
            err,
            ChartError::DimensionTooLarge { name: "width", .. }
        ));
    }

    #[test]
    fn codes_decode_in_table_order() {
        let chart = StitchGrid::from_codes(6, 1, &[0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(chart.ops(), &[Knit, Purl, Miss, Tuck, Empty, MakeOne]);
    }

    #[test]
    fn unknown_code_reports_index() {
        let err = StitchGrid::from_codes(2, 1, &[0, 9]).unwrap_err();
        assert_eq!(err, ChartError::UnknownCode { code: 9, index: 1 });
    }

    #[test]
    fn increase_dirs_must_match_size() {
        let chart = StitchGrid::filled(2, 1, MakeOne).unwrap();
        assert!(chart.clone().with_increase_dirs(vec![None]).is_err());
        let chart = chart
            .with_increase_dirs(vec![Some(IncreaseDir::Left), None])
            .unwrap();
        assert_eq!(chart.increase_dir_at(0, 0), Some(IncreaseDir::Left));
        assert_eq!(chart.increase_dir_at(1, 0), None);
    }

    // ── Queries ─────────────────────────────────────────────────

    #[test]
    fn out_of_range_is_none() {
        let chart = StitchGrid::filled(3, 2, Knit).unwrap();
        assert_eq!(chart.op(-1, 0), None);
        assert_eq!(chart.op(0, -1), None);
        assert_eq!(chart.op(3, 0), None);
        assert_eq!(chart.op(0, 2), None);
        assert_eq!(chart.increase_dir_at(-5, 9), None);
        assert_eq!(chart.row(2), None);
    }

    #[test]
    fn active_span_skips_empty_edges() {
        let chart = StitchGrid::new(5, 1, vec![Empty, Knit, Empty, Tuck, Empty]).unwrap();
        assert_eq!(chart.active_span(0), Some((1, 3)));
        let blank = StitchGrid::filled(4, 1, Empty).unwrap();
        assert_eq!(blank.active_span(0), None);
    }

    // ── Padding ─────────────────────────────────────────────────

    #[test]
    fn pad_surrounds_with_fill() {
        let chart = StitchGrid::new(2, 1, vec![Knit, MakeOne])
            .unwrap()
            .with_increase_dirs(vec![None, Some(IncreaseDir::Right)])
            .unwrap();
        let padded = chart.pad(1, 1, Empty).unwrap();
        assert_eq!(padded.width(), 4);
        assert_eq!(padded.height(), 3);
        assert_eq!(padded.row(0), Some(&[Empty; 4][..]));
        assert_eq!(padded.row(1), Some(&[Empty, Knit, MakeOne, Empty][..]));
        assert_eq!(padded.row(2), Some(&[Empty; 4][..]));
        assert_eq!(padded.increase_dir_at(2, 1), Some(IncreaseDir::Right));
        assert_eq!(padded.increase_dir_at(0, 1), None);
    }

    // ── Quads ───────────────────────────────────────────────────

    #[test]
    fn quads_follow_draw_order() {
        let chart = StitchGrid::filled(2, 2, Knit).unwrap();
        let quads = chart.stitch_quads();
        assert_eq!(quads.len(), 4);
        // CN width is 4: cell (1, 1) spans columns 2..=3 of rows 1..=2.
        assert_eq!(quads[3].corners, [6, 7, 11, 10]);
        assert_eq!(quads[0].corners, [0, 1, 5, 4]);
    }

    proptest! {
        #[test]
        fn pad_preserves_interior(
            width in 1u32..6,
            height in 1u32..6,
            xm in 0u32..3,
            ym in 0u32..3,
            seed in any::<u64>(),
        ) {
            let ops: Vec<StitchOp> = (0..width * height)
                .map(|k| StitchOp::ALL[(((seed >> (k % 60)) % 6) as usize + k as usize) % 6])
                .collect();
            let chart = StitchGrid::new(width, height, ops).unwrap();
            let padded = chart.pad(xm, ym, Empty).unwrap();
            for y in 0..height as i32 {
                for x in 0..width as i32 {
                    prop_assert_eq!(
                        padded.op(x + xm as i32, y + ym as i32),
                        chart.op(x, y)
                    );
                }
            }
            prop_assert_eq!(padded.op(0, 0), Some(if xm > 0 || ym > 0 { Empty } else { chart.ops()[0] }));
        }
    }
}
