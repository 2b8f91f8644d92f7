//! One end-to-end run: pad, automaton, tracer, links.

use skein_automaton::{CnStitch, ContactAutomaton, ContactGrid};
use skein_chart::StitchGrid;
use skein_core::{Diagnostics, StitchOp};
use skein_trace::{YarnLink, YarnPath, YarnPathTracer};

use crate::config::SimConfig;
use crate::error::SimError;
use crate::hash;

/// The full output of simulating one chart.
///
/// All stages run eagerly in [`Simulation::run`]; the accessors only
/// read the stored results.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimConfig,
    chart: StitchGrid,
    grid: ContactGrid,
    path: YarnPath,
    links: Vec<YarnLink>,
    diagnostics: Diagnostics,
}

impl Simulation {
    /// Simulate `chart` under `config`.
    ///
    /// The chart is padded with `Empty` stitches, knitted by the contact
    /// automaton and traced. Diagnostics from both stages are collected
    /// in order.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if `config` fails validation and
    /// [`SimError::Chart`] if the padded chart would be too large.
    ///
    /// # Examples
    ///
    /// ```
    /// use skein::prelude::*;
    ///
    /// let chart: StitchGrid = "KK\nKK".parse().unwrap();
    /// let sim = Simulation::run(&chart, &SimConfig::default()).unwrap();
    /// assert_eq!(sim.path().len(), 20);
    /// assert!(sim.is_renderable());
    /// assert!(sim.diagnostics().is_empty());
    /// ```
    pub fn run(chart: &StitchGrid, config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let chart = chart.pad(config.x_padding, config.y_padding, StitchOp::Empty)?;
        let automaton = ContactAutomaton::builder()
            .search_limit(config.search_limit)
            .build()?;
        let tracer = YarnPathTracer::builder()
            .search_limit(config.search_limit)
            .build()?;

        let run = automaton.run(&chart);
        let path = tracer.trace(&run.grid);
        let links = path.links();

        let mut diagnostics = run.diagnostics;
        diagnostics.extend(path.diagnostics().clone());

        log::debug!(
            "simulated {}x{} chart: {} points, {} links, {} diagnostics",
            chart.width(),
            chart.height(),
            path.len(),
            links.len(),
            diagnostics.len()
        );

        Ok(Self {
            config: config.clone(),
            chart,
            grid: run.grid,
            path,
            links,
            diagnostics,
        })
    }

    /// The configuration this run used.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The chart as knitted, padding included.
    pub fn padded_chart(&self) -> &StitchGrid {
        &self.chart
    }

    /// The automaton's state grid.
    ///
    /// Unanchored heads the tracer promoted are only promoted in
    /// [`YarnPath::grid`].
    pub fn contact_grid(&self) -> &ContactGrid {
        &self.grid
    }

    /// The traced strand.
    pub fn path(&self) -> &YarnPath {
        &self.path
    }

    /// One link per consecutive pair of path points.
    pub fn links(&self) -> &[YarnLink] {
        &self.links
    }

    /// Diagnostics of the automaton followed by those of the tracer.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Whether the path is long enough to be worth drawing.
    pub fn is_renderable(&self) -> bool {
        self.path.is_renderable(self.config.min_render_points)
    }

    /// Map a contact cell back to the `(column, row)` of the unpadded
    /// chart. Cells in the padding map outside `0..width`/`0..height`.
    pub fn chart_coord(&self, i: i32, j: i32) -> (i32, i32) {
        let x_padding = self.config.x_padding as i32;
        let y_padding = self.config.y_padding as i32;
        ((i - 2 * x_padding).div_euclid(2), j - y_padding)
    }

    /// Export records for every contact cell, row-major.
    pub fn cn_cells(&self) -> impl Iterator<Item = CnStitch> + '_ {
        self.grid.stitch_cells()
    }

    /// FNV-1a hash of the contact grid, path points and links.
    ///
    /// Equal inputs and configurations always give equal fingerprints.
    pub fn fingerprint(&self) -> u64 {
        hash::fingerprint(&self.grid, self.path.points(), &self.links)
    }
}
