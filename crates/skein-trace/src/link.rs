//! Links between consecutive path points.

use skein_automaton::ContactGrid;
use skein_core::StitchOp;

use crate::path::YarnPathPoint;
use crate::tag::Layer;

/// Depth layer a link is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkLayer {
    /// In front of the fabric.
    Front,
    /// Behind the fabric.
    Back,
    /// In the fabric plane, between stitches of different faces.
    Mid,
}

/// Edge between two consecutive points of the strand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YarnLink {
    /// Index of the first point in the path.
    pub source: usize,
    /// Index of the second point in the path.
    pub target: usize,
    /// Flat contact-grid index of the first point.
    pub source_cn: usize,
    /// Flat contact-grid index of the second point.
    pub target_cn: usize,
    /// Stitch row of the second point.
    pub stitch_row: u32,
    /// Depth layer.
    pub layer: LinkLayer,
    /// Whether the strand passes from leg to head (or back) on one side
    /// of a stitch.
    pub crossing: bool,
}

fn knit_like(stitch: Option<StitchOp>) -> bool {
    matches!(stitch, Some(StitchOp::Knit | StitchOp::MakeOne))
}

/// Classify every consecutive pair of `points` traced on `grid`.
///
/// Between two knit-faced nodes a link leaving a leg runs behind and a
/// link leaving a head runs in front; purl-faced pairs swap the two, and
/// mixed pairs sit in the middle. A node's face is its
/// [`owner_stitch`](ContactGrid::owner_stitch).
pub fn derive_links(points: &[YarnPathPoint], grid: &ContactGrid) -> Vec<YarnLink> {
    let width = grid.width() as usize;
    let flat = |p: &YarnPathPoint| p.at.j as usize * width + p.at.i as usize;
    points
        .windows(2)
        .enumerate()
        .map(|(k, pair)| {
            let (a, b) = (&pair[0], &pair[1]);
            let sa = grid.owner_stitch(a.at);
            let sb = grid.owner_stitch(b.at);
            let from_leg = a.tag.layer == Layer::Leg;
            let layer = if knit_like(sa) && knit_like(sb) {
                if from_leg {
                    LinkLayer::Back
                } else {
                    LinkLayer::Front
                }
            } else if sa == Some(StitchOp::Purl) && sb == Some(StitchOp::Purl) {
                if from_leg {
                    LinkLayer::Front
                } else {
                    LinkLayer::Back
                }
            } else {
                LinkLayer::Mid
            };
            YarnLink {
                source: k,
                target: k + 1,
                source_cn: flat(a),
                target_cn: flat(b),
                stitch_row: b.stitch_row,
                layer,
                crossing: a.tag.crosses_to(&b.tag),
            }
        })
        .collect()
}
