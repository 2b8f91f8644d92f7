//! Stitch operations and increase bias.

use std::fmt;

/// One knitting-machine operation in a chart cell.
///
/// The discriminant order matches the pixel-code table used by chart
/// bitmaps (see [`StitchOp::from_code`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StitchOp {
    /// Pull a new loop through the previous one, front to back.
    Knit,
    /// Pull a new loop through the previous one, back to front.
    Purl,
    /// Skip the needle: the yarn floats past and the old loop is held.
    Miss,
    /// Lay the yarn on the needle without knitting the old loop off.
    Tuck,
    /// No needle in work.
    Empty,
    /// Increase: a new loop made between two existing ones.
    MakeOne,
}

impl StitchOp {
    /// Every operation, in pixel-code order.
    pub const ALL: [StitchOp; 6] = [
        StitchOp::Knit,
        StitchOp::Purl,
        StitchOp::Miss,
        StitchOp::Tuck,
        StitchOp::Empty,
        StitchOp::MakeOne,
    ];

    /// Decode a chart pixel code (`K=0 P=1 M=2 T=3 E=4 Y=5`).
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// The pixel code of this operation.
    pub fn code(self) -> u8 {
        match self {
            Self::Knit => 0,
            Self::Purl => 1,
            Self::Miss => 2,
            Self::Tuck => 3,
            Self::Empty => 4,
            Self::MakeOne => 5,
        }
    }

    /// Single-character chart symbol.
    pub fn symbol(self) -> char {
        match self {
            Self::Knit => 'K',
            Self::Purl => 'P',
            Self::Miss => 'M',
            Self::Tuck => 'T',
            Self::Empty => '.',
            Self::MakeOne => 'Y',
        }
    }

    /// Whether the needle is out of work.
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// Whether the operation forms a new loop that holds the one below.
    pub fn forms_loop(self) -> bool {
        matches!(self, Self::Knit | Self::Purl | Self::MakeOne)
    }

    /// Whether yarn passes through the leg positions of this cell.
    pub fn carries_leg(self) -> bool {
        matches!(self, Self::Knit | Self::Purl | Self::MakeOne | Self::Miss)
    }
}

impl fmt::Display for StitchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Knit => "knit",
            Self::Purl => "purl",
            Self::Miss => "miss",
            Self::Tuck => "tuck",
            Self::Empty => "empty",
            Self::MakeOne => "make-one",
        };
        f.write_str(name)
    }
}

/// Lean of a [`StitchOp::MakeOne`] increase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IncreaseDir {
    /// New loop leans towards lower column indices.
    Left,
    /// New loop leans towards higher column indices.
    Right,
}

impl IncreaseDir {
    /// Column offset of the partner contact cell.
    pub fn offset(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}
