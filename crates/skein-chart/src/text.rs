//! Chart text: one line per row, top row first.
//!
//! ```text
//! KPK
//! K<K
//! KKK
//! ```
//!
//! `K` knit, `P` purl, `T` tuck, `M` miss, `.` or `E` empty, `Y` make-one,
//! `<` / `>` make-one leaning left / right. Symbols are case-insensitive.
//! Short rows are filled with empty cells on the right.

use std::fmt;
use std::str::FromStr;

use skein_core::{ChartError, IncreaseDir, StitchOp};

use crate::grid::StitchGrid;

fn decode(symbol: char) -> Option<(StitchOp, Option<IncreaseDir>)> {
    let op = match symbol.to_ascii_uppercase() {
        'K' => StitchOp::Knit,
        'P' => StitchOp::Purl,
        'T' => StitchOp::Tuck,
        'M' => StitchOp::Miss,
        '.' | 'E' => StitchOp::Empty,
        'Y' => StitchOp::MakeOne,
        '<' => return Some((StitchOp::MakeOne, Some(IncreaseDir::Left))),
        '>' => return Some((StitchOp::MakeOne, Some(IncreaseDir::Right))),
        _ => return None,
    };
    Some((op, None))
}

impl FromStr for StitchGrid {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .rev()
            .collect();
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .ok_or(ChartError::EmptyChart)?;
        let width = u32::try_from(width).map_err(|_| ChartError::DimensionTooLarge {
            name: "width",
            value: u32::MAX,
            max: StitchGrid::MAX_DIM,
        })?;
        let height = u32::try_from(lines.len()).map_err(|_| ChartError::DimensionTooLarge {
            name: "height",
            value: u32::MAX,
            max: StitchGrid::MAX_DIM,
        })?;

        let mut ops = Vec::with_capacity(width as usize * lines.len());
        let mut dirs = Vec::with_capacity(ops.capacity());
        for (row, line) in lines.iter().enumerate() {
            let mut count = 0;
            for (column, symbol) in line.chars().enumerate() {
                let (op, dir) = decode(symbol).ok_or(ChartError::UnknownSymbol {
                    symbol,
                    row,
                    column,
                })?;
                ops.push(op);
                dirs.push(dir);
                count += 1;
            }
            for _ in count..width as usize {
                ops.push(StitchOp::Empty);
                dirs.push(None);
            }
        }
        StitchGrid::new(width, height, ops)?.with_increase_dirs(dirs)
    }
}

impl fmt::Display for StitchGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height() as i32).rev() {
            for x in 0..self.width() as i32 {
                let symbol = match (self.op(x, y), self.increase_dir_at(x, y)) {
                    (Some(StitchOp::MakeOne), Some(IncreaseDir::Left)) => '<',
                    (Some(StitchOp::MakeOne), Some(IncreaseDir::Right)) => '>',
                    (Some(op), _) => op.symbol(),
                    (None, _) => '?',
                };
                write!(f, "{symbol}")?;
            }
            if y > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
