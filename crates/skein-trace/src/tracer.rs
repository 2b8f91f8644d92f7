//! The yarn-path tracer and its builder.

use skein_automaton::ContactGrid;
use skein_core::{
    ActualizationValue as Av, BuildError, Carriage, CnCoord, Diagnostic, Diagnostics,
};

use crate::cursor::{Cursor, Phase};
use crate::location::{final_location, Resting};
use crate::path::{YarnPath, YarnPathPoint};
use crate::tag::{Layer, TagCounter};

/// Walks a contact grid and emits the strand's waypoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YarnPathTracer {
    search_limit: usize,
    step_budget: Option<usize>,
}

/// Builder for [`YarnPathTracer`].
#[derive(Clone, Debug)]
pub struct YarnPathTracerBuilder {
    search_limit: usize,
    step_budget: Option<usize>,
}

impl YarnPathTracer {
    /// Extra steps a final-location chase may take beyond the grid height
    /// unless configured.
    pub const DEFAULT_SEARCH_LIMIT: usize = 1000;

    /// A tracer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder.
    pub fn builder() -> YarnPathTracerBuilder {
        YarnPathTracerBuilder {
            search_limit: Self::DEFAULT_SEARCH_LIMIT,
            step_budget: None,
        }
    }

    /// Extra chase steps beyond the grid height.
    pub fn search_limit(&self) -> usize {
        self.search_limit
    }

    /// Cursor steps a walk over `grid` may take: the configured budget,
    /// or `width * height * 4`.
    pub fn step_budget(&self, grid: &ContactGrid) -> usize {
        self.step_budget
            .unwrap_or(grid.width() as usize * grid.height() as usize * 4)
    }

    /// Trace the strand over `grid`.
    ///
    /// The tracer works on its own copy of `grid`; heads it promotes are
    /// visible through [`YarnPath::grid`] only. The walk is bounded by
    /// [`step_budget`](Self::step_budget) steps and ends once the legs
    /// reach the top row, which has no heads above it. Running out of
    /// steps keeps the points emitted so far and raises
    /// [`Diagnostic::TraversalExhausted`].
    ///
    /// # Examples
    ///
    /// ```
    /// use skein_automaton::ContactAutomaton;
    /// use skein_chart::StitchGrid;
    /// use skein_core::StitchOp;
    /// use skein_trace::YarnPathTracer;
    ///
    /// let chart: StitchGrid = "K".parse().unwrap();
    /// let chart = chart.pad(1, 0, StitchOp::Empty).unwrap();
    /// let grid = ContactAutomaton::new().run(&chart).grid;
    /// let path = YarnPathTracer::new().trace(&grid);
    /// assert_eq!(path.len(), 6);
    /// assert_eq!(path.points()[0].tag.to_string(), "FBa");
    /// ```
    pub fn trace(&self, grid: &ContactGrid) -> YarnPath {
        let mut walk = Walk {
            grid: grid.clone(),
            points: Vec::new(),
            tags: TagCounter::default(),
            diagnostics: Diagnostics::new(),
            chase_limit: grid.height() as usize + self.search_limit,
        };
        walk.run(self.step_budget(grid));
        log::debug!(
            "yarn path: {} points, {} tag keys, {} diagnostics",
            walk.points.len(),
            walk.tags.len(),
            walk.diagnostics.len()
        );
        YarnPath {
            points: walk.points,
            grid: walk.grid,
            diagnostics: walk.diagnostics,
        }
    }
}

impl Default for YarnPathTracer {
    fn default() -> Self {
        Self {
            search_limit: Self::DEFAULT_SEARCH_LIMIT,
            step_budget: None,
        }
    }
}

impl YarnPathTracerBuilder {
    /// Set the extra chase steps beyond the grid height (default: 1000).
    /// Must be >= 1.
    pub fn search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    /// Cap the cursor steps of every walk (default: `width * height * 4`
    /// of the traced grid). Must be >= 1.
    pub fn step_budget(mut self, steps: usize) -> Self {
        self.step_budget = Some(steps);
        self
    }

    /// Build the tracer.
    ///
    /// # Errors
    ///
    /// Returns `Err(BuildError::ZeroLimit)` if the search limit or the
    /// step budget is 0.
    pub fn build(self) -> Result<YarnPathTracer, BuildError> {
        if self.search_limit == 0 {
            return Err(BuildError::ZeroLimit {
                name: "search_limit",
            });
        }
        if self.step_budget == Some(0) {
            return Err(BuildError::ZeroLimit {
                name: "step_budget",
            });
        }
        Ok(YarnPathTracer {
            search_limit: self.search_limit,
            step_budget: self.step_budget,
        })
    }
}

/// State of one trace.
struct Walk {
    grid: ContactGrid,
    points: Vec<YarnPathPoint>,
    tags: TagCounter,
    diagnostics: Diagnostics,
    chase_limit: usize,
}

impl Walk {
    fn run(&mut self, budget: usize) {
        let width = self.grid.width();
        let top = self.grid.top_row();
        let mut steps = 0;
        let mut cursor = Cursor::start();

        // Skip ahead to the first leg that carries yarn.
        let mut started = false;
        while cursor.leg_row() < top {
            if steps >= budget {
                self.diagnostics.raise(Diagnostic::TraversalExhausted {
                    started: false,
                    steps,
                });
                return;
            }
            steps += 1;
            if cursor.phase.is_leg() {
                if let Some(at) = self.visit(&cursor) {
                    self.emit(&cursor, at);
                    started = true;
                }
            }
            cursor = cursor.advance(width);
            if started {
                break;
            }
        }
        if !started {
            return;
        }

        while cursor.leg_row() < top {
            if steps >= budget {
                self.diagnostics.raise(Diagnostic::TraversalExhausted {
                    started: true,
                    steps,
                });
                return;
            }
            steps += 1;
            if let Some(at) = self.visit(&cursor) {
                self.emit(&cursor, at);
            }
            let next = cursor.advance(width);
            if next.stitch_row != cursor.stitch_row {
                self.bridge(&cursor);
            }
            cursor = next;
        }
    }

    /// Where to draw the point under `cursor`, or `None` to skip it.
    ///
    /// Legs are drawn where yarn passes. Heads are drawn when anchored;
    /// an unanchored head is drawn, and promoted, only when the strand
    /// arrives from below its final resting row.
    fn visit(&mut self, cursor: &Cursor) -> Option<CnCoord> {
        let at = cursor.at;
        if cursor.phase.is_leg() {
            return self
                .grid
                .stitch(at)
                .is_some_and(|s| s.carries_leg())
                .then_some(at);
        }
        match self.grid.av(at)? {
            Av::Ecn => None,
            Av::Acn | Av::Pcn => Some(self.resting(at)),
            Av::Uacn => {
                let comparison_row = match self.points.last() {
                    Some(last) if at.i % 2 != at.j % 2 => last.at.j,
                    _ => cursor.advance(self.grid.width()).at.j,
                };
                let resting = self.resting(at);
                if comparison_row < resting.j {
                    self.grid.promote(at);
                    Some(resting)
                } else {
                    None
                }
            }
        }
    }

    fn resting(&mut self, at: CnCoord) -> CnCoord {
        let resting = final_location(&self.grid, at, self.chase_limit);
        if let Resting::Exhausted { steps, .. } = resting {
            self.diagnostics
                .raise(Diagnostic::ChaseExhausted { from: at, steps });
        }
        resting.at()
    }

    fn emit(&mut self, cursor: &Cursor, drawn_at: CnCoord) {
        let stitch = if cursor.phase.is_leg() {
            self.grid.stitch(cursor.at)
        } else {
            self.grid.stitch(cursor.at.offset(0, -1))
        };
        let tag = self
            .tags
            .tag(cursor.stitch_row, drawn_at.i, cursor.phase, stitch);
        self.points.push(YarnPathPoint {
            at: drawn_at,
            stitch_row: cursor.stitch_row,
            tag,
            stitch,
        });
    }

    /// Close the stitch row `finished` with the two legs of the stitch
    /// just past its last point.
    ///
    /// If that cell holds no stitch, the legs of the outermost stitched
    /// cell of the row are used instead.
    fn bridge(&mut self, finished: &Cursor) {
        let Some(last) = self.points.last().copied() else {
            return;
        };
        if last.stitch_row != finished.stitch_row {
            return;
        }
        let row = match last.tag.layer {
            Layer::Leg => last.at.j,
            Layer::Head => last.at.j - 1,
        };
        let carriage = finished.carriage();
        let mut at = last.at.offset(carriage.step(), 0);
        at.j = row;
        if !self.grid.contains(at) {
            return;
        }
        if self.grid.stitch(at).is_none() {
            let width = self.grid.width() as i32;
            let stitched = |i: &i32| self.grid.stitch(CnCoord::new(*i, row)).is_some();
            let found = match carriage {
                Carriage::Right => (0..width).rev().find(stitched),
                Carriage::Left => (0..width).find(stitched),
            };
            let Some(i) = found else {
                return;
            };
            at.i = i;
        }
        let stitch = self.grid.stitch(at);
        for phase in [Phase::FirstLeg, Phase::SecondLeg] {
            let tag = self.tags.tag(finished.stitch_row, at.i, phase, stitch);
            self.points.push(YarnPathPoint {
                at,
                stitch_row: finished.stitch_row,
                tag,
                stitch,
            });
        }
    }
}
