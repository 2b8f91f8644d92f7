//! Contact-grid coordinates and carriage direction.

use std::fmt;

/// A contact-neighbourhood coordinate: column `i`, row `j`.
///
/// Signed so that neighbour arithmetic can step off the grid; range
/// checks belong to the grid that is queried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CnCoord {
    /// Column in `[0, 2M)`.
    pub i: i32,
    /// Row in `[0, N]`.
    pub j: i32,
}

impl CnCoord {
    /// Construct a coordinate.
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    /// Coordinate shifted by `(di, dj)`.
    pub fn offset(self, di: i32, dj: i32) -> Self {
        Self {
            i: self.i + di,
            j: self.j + dj,
        }
    }
}

impl fmt::Display for CnCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

impl From<(i32, i32)> for CnCoord {
    fn from((i, j): (i32, i32)) -> Self {
        Self { i, j }
    }
}

/// Travel direction of the carriage across one row.
///
/// Rows alternate: even rows travel right, odd rows travel left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Carriage {
    /// Towards increasing columns.
    Right,
    /// Towards decreasing columns.
    Left,
}

impl Carriage {
    /// Direction used for row (or stitch-row) `row`.
    pub fn for_row(row: u32) -> Self {
        if row % 2 == 0 {
            Self::Right
        } else {
            Self::Left
        }
    }

    /// Column step in this direction.
    pub fn step(self) -> i32 {
        match self {
            Self::Right => 1,
            Self::Left => -1,
        }
    }

    /// The first contact column of stitch column `m` met in this direction.
    pub fn leading_cn(self, m: u32) -> i32 {
        let i = 2 * m as i32;
        match self {
            Self::Right => i,
            Self::Left => i + 1,
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}
