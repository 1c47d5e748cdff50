use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction a word runs in when placed in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
    /// Down and to the right
    Diagonal,
}

impl Direction {
    /// The placement directions every puzzle draws from
    pub const ALL: [Direction; 3] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
    ];

    /// Unit step as `(row_step, col_step)`
    pub const fn step(self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
        }
    }

    /// Number of valid start values along each axis for a word of `len`
    /// letters, as `(rows, cols)`. `None` when the word cannot fit.
    pub fn start_range(self, len: usize, size: usize) -> Option<(usize, usize)> {
        let (row_step, col_step) = self.step();
        let extent = |step: usize| {
            if step == 0 {
                Some(size)
            } else {
                size.checked_sub(len.checked_sub(1)?).filter(|&n| n > 0)
            }
        };
        if len == 0 {
            return None;
        }
        Some((extent(row_step)?, extent(col_step)?))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "Horizontal"),
            Direction::Vertical => write!(f, "Vertical"),
            Direction::Diagonal => write!(f, "Diagonal"),
        }
    }
}
