//! Point tags: which side of a stitch, leg or head, first or second.

use std::fmt;

use indexmap::IndexMap;
use skein_core::StitchOp;

use crate::cursor::Phase;

/// Side of the stitch a point belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Entering side (`F`).
    First,
    /// Leaving side (`L`).
    Last,
}

impl Side {
    fn flipped(self) -> Self {
        match self {
            Self::First => Self::Last,
            Self::Last => Self::First,
        }
    }
}

/// Leg (`B`) or head (`H`) point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Bottom of the loop.
    Leg,
    /// Top of the loop.
    Head,
}

/// First (`a`) or second (`b`) visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// First.
    A,
    /// Second or later.
    B,
}

impl Order {
    fn swapped(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// Tag of one path point, printed as e.g. `FBa` or `LHb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CnTag {
    /// Side of the stitch.
    pub side: Side,
    /// Leg or head.
    pub layer: Layer,
    /// Visit order.
    pub order: Order,
}

impl CnTag {
    /// Whether `self -> next` changes layer while staying on one side.
    pub fn crosses_to(&self, next: &CnTag) -> bool {
        self.side == next.side && self.layer != next.layer
    }
}

impl fmt::Display for CnTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side {
            Side::First => 'F',
            Side::Last => 'L',
        };
        let layer = match self.layer {
            Layer::Leg => 'B',
            Layer::Head => 'H',
        };
        let order = match self.order {
            Order::A => 'a',
            Order::B => 'b',
        };
        write!(f, "{side}{layer}{order}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct TagKey {
    stitch_row: u32,
    column: i32,
    side: Side,
    layer: Layer,
}

/// Per-run visit counters, keyed by stitch row, column, side and layer.
#[derive(Debug, Default)]
pub(crate) struct TagCounter {
    visits: IndexMap<TagKey, u32>,
}

impl TagCounter {
    /// Tag a point and count the visit.
    ///
    /// Legs start on the first side and heads on the last; a purl
    /// stitch mirrors both. The first visit of a key orders by phase, a
    /// make-one head on the last side swapping the order; later visits
    /// are always `b`.
    pub(crate) fn tag(
        &mut self,
        stitch_row: u32,
        column: i32,
        phase: Phase,
        stitch: Option<StitchOp>,
    ) -> CnTag {
        let layer = if phase.is_leg() {
            Layer::Leg
        } else {
            Layer::Head
        };
        let mut side = if phase.is_leg() {
            Side::First
        } else {
            Side::Last
        };
        if stitch == Some(StitchOp::Purl) {
            side = side.flipped();
        }
        let key = TagKey {
            stitch_row,
            column,
            side,
            layer,
        };
        let count = self.visits.entry(key).or_insert(0);
        let seen = *count;
        *count += 1;

        let order = if seen > 0 {
            Order::B
        } else {
            let order = if phase.is_first() { Order::A } else { Order::B };
            if stitch == Some(StitchOp::MakeOne) && side == Side::Last && layer == Layer::Head {
                order.swapped()
            } else {
                order
            }
        };
        CnTag { side, layer, order }
    }

    /// Number of distinct keys seen.
    pub(crate) fn len(&self) -> usize {
        self.visits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knit_stitch_tags() {
        let mut tags = TagCounter::default();
        let k = Some(StitchOp::Knit);
        assert_eq!(tags.tag(0, 2, Phase::FirstLeg, k).to_string(), "FBa");
        assert_eq!(tags.tag(0, 3, Phase::SecondLeg, k).to_string(), "FBb");
        assert_eq!(tags.tag(0, 2, Phase::FirstHead, k).to_string(), "LHa");
        assert_eq!(tags.tag(0, 3, Phase::SecondHead, k).to_string(), "LHb");
        assert_eq!(tags.len(), 4);
    }

    #[test]
    fn revisits_are_b() {
        let mut tags = TagCounter::default();
        let k = Some(StitchOp::Knit);
        tags.tag(0, 3, Phase::SecondLeg, k);
        assert_eq!(tags.tag(0, 3, Phase::FirstLeg, k).order, Order::B);
        // A new stitch row is a new key.
        assert_eq!(tags.tag(1, 3, Phase::FirstLeg, k).order, Order::A);
    }

    #[test]
    fn purl_mirrors_sides() {
        let mut tags = TagCounter::default();
        let p = Some(StitchOp::Purl);
        assert_eq!(tags.tag(1, 5, Phase::FirstLeg, p).to_string(), "LBa");
        assert_eq!(tags.tag(1, 5, Phase::FirstHead, p).to_string(), "FHa");
    }

    #[test]
    fn make_one_last_head_swaps_order() {
        let mut tags = TagCounter::default();
        let y = Some(StitchOp::MakeOne);
        assert_eq!(tags.tag(0, 2, Phase::FirstHead, y).to_string(), "LHb");
        assert_eq!(tags.tag(0, 3, Phase::SecondHead, y).to_string(), "LHa");
        assert_eq!(tags.tag(0, 2, Phase::FirstLeg, y).to_string(), "FBa");
    }

    #[test]
    fn crossing_needs_same_side() {
        let fb = CnTag {
            side: Side::First,
            layer: Layer::Leg,
            order: Order::A,
        };
        let fh = CnTag {
            layer: Layer::Head,
            ..fb
        };
        let lh = CnTag {
            side: Side::Last,
            ..fh
        };
        assert!(fb.crosses_to(&fh));
        assert!(fh.crosses_to(&fb));
        assert!(!fb.crosses_to(&lh));
        assert!(!fb.crosses_to(&fb));
    }
}
