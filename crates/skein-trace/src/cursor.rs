//! Traversal state of the tracer.

use skein_core::{Carriage, CnCoord};

/// Which of the four points of a stitch the cursor is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    /// First leg, at the stitch's row.
    FirstLeg,
    /// Second leg, one column on in the travel direction.
    SecondLeg,
    /// First head, one row up above the first leg.
    FirstHead,
    /// Second head, one column on from the first head.
    SecondHead,
}

impl Phase {
    /// Index `0..=3`.
    pub fn index(self) -> u8 {
        match self {
            Self::FirstLeg => 0,
            Self::SecondLeg => 1,
            Self::FirstHead => 2,
            Self::SecondHead => 3,
        }
    }

    /// `true` for the two leg phases.
    pub fn is_leg(self) -> bool {
        matches!(self, Self::FirstLeg | Self::SecondLeg)
    }

    /// `true` for the first point of a pair (phases 0 and 2).
    pub fn is_first(self) -> bool {
        matches!(self, Self::FirstLeg | Self::FirstHead)
    }
}

/// Position of the tracer: contact cell, phase and stitch row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// Contact cell under the cursor.
    pub at: CnCoord,
    /// Point of the stitch being visited.
    pub phase: Phase,
    /// Carriage pass the cursor belongs to.
    pub stitch_row: u32,
}

impl Cursor {
    /// The first leg of the bottom-left stitch.
    pub fn start() -> Self {
        Self {
            at: CnCoord::new(0, 0),
            phase: Phase::FirstLeg,
            stitch_row: 0,
        }
    }

    /// Travel direction of the cursor's stitch row.
    pub fn carriage(&self) -> Carriage {
        Carriage::for_row(self.stitch_row)
    }

    /// Row of the legs of the stitch being visited.
    pub fn leg_row(&self) -> i32 {
        if self.phase.is_leg() {
            self.at.j
        } else {
            self.at.j - 1
        }
    }

    /// The next cursor position on a grid `width` columns wide.
    ///
    /// Legs go across, then up to the head, across, and back down to the
    /// next stitch's first leg. A step off either side ends the stitch
    /// row: the next one starts at that same side, one row up, travelling
    /// back.
    pub fn advance(&self, width: u32) -> Self {
        let d = self.carriage().step();
        let (di, dj, phase) = match self.phase {
            Phase::FirstLeg => (d, 0, Phase::SecondLeg),
            Phase::SecondLeg => (-d, 1, Phase::FirstHead),
            Phase::FirstHead => (d, 0, Phase::SecondHead),
            Phase::SecondHead => (d, -1, Phase::FirstLeg),
        };
        let next = self.at.offset(di, dj);
        if next.i < 0 || next.i >= width as i32 {
            let i = match self.carriage() {
                Carriage::Right => width as i32 - 1,
                Carriage::Left => 0,
            };
            return Self {
                at: CnCoord::new(i, self.leg_row() + 1),
                phase: Phase::FirstLeg,
                stitch_row: self.stitch_row + 1,
            };
        }
        Self {
            at: next,
            phase,
            stitch_row: self.stitch_row,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(i: i32, j: i32, phase: Phase, stitch_row: u32) -> Cursor {
        Cursor {
            at: CnCoord::new(i, j),
            phase,
            stitch_row,
        }
    }

    #[test]
    fn one_stitch_rightwards() {
        let mut c = Cursor::start();
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push((c.at.i, c.at.j, c.phase.index()));
            c = c.advance(6);
        }
        assert_eq!(
            seen,
            vec![(0, 0, 0), (1, 0, 1), (0, 1, 2), (1, 1, 3), (2, 0, 0)]
        );
    }

    #[test]
    fn leftward_row_mirrors() {
        let c = cursor(5, 1, Phase::FirstLeg, 1);
        let c = c.advance(6);
        assert_eq!((c.at.i, c.at.j, c.phase), (4, 1, Phase::SecondLeg));
        let c = c.advance(6);
        assert_eq!((c.at.i, c.at.j, c.phase), (5, 2, Phase::FirstHead));
    }

    #[test]
    fn stepping_off_the_right_edge_turns() {
        let c = cursor(5, 1, Phase::SecondHead, 0);
        let next = c.advance(6);
        assert_eq!(next, cursor(5, 1, Phase::FirstLeg, 1));
    }

    #[test]
    fn stepping_off_the_left_edge_turns() {
        let c = cursor(0, 1, Phase::FirstLeg, 1);
        let next = c.advance(6);
        assert_eq!(next, cursor(0, 2, Phase::FirstLeg, 2));
    }

    #[test]
    fn leg_row_of_heads_is_one_below() {
        assert_eq!(cursor(3, 4, Phase::FirstHead, 0).leg_row(), 3);
        assert_eq!(cursor(3, 4, Phase::SecondLeg, 0).leg_row(), 4);
    }
}
