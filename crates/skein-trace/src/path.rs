//! The traced yarn path.

use skein_automaton::ContactGrid;
use skein_core::{CnCoord, Diagnostics, StitchOp};

use crate::link::{derive_links, YarnLink};
use crate::tag::CnTag;

/// One waypoint of the strand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YarnPathPoint {
    /// Contact cell the point is drawn at. Legs sit on their own cell,
    /// heads on their final resting cell.
    pub at: CnCoord,
    /// Carriage pass the point was emitted in.
    pub stitch_row: u32,
    /// Side, layer and visit order.
    pub tag: CnTag,
    /// Stitch owning the point: the leg's own cell, or the cell below a
    /// head's nominal cell.
    pub stitch: Option<StitchOp>,
}

/// Ordered points of the strand plus the grid they were traced on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YarnPath {
    pub(crate) points: Vec<YarnPathPoint>,
    pub(crate) grid: ContactGrid,
    pub(crate) diagnostics: Diagnostics,
}

impl YarnPath {
    /// Fewest points worth drawing, unless a caller says otherwise.
    pub const DEFAULT_MIN_RENDER_POINTS: usize = 8;

    /// Points in strand order.
    pub fn points(&self) -> &[YarnPathPoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if no point was emitted.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the path has at least `min_points` points. Shorter paths
    /// are "nothing to render", not an error.
    pub fn is_renderable(&self, min_points: usize) -> bool {
        self.points.len() >= min_points
    }

    /// The tracer's copy of the state grid, including the unanchored
    /// heads it promoted.
    pub fn grid(&self) -> &ContactGrid {
        &self.grid
    }

    /// Non-fatal conditions met while tracing.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// One link per consecutive pair of points.
    pub fn links(&self) -> Vec<YarnLink> {
        derive_links(&self.points, &self.grid)
    }
}
