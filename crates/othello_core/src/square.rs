use std::fmt;

use crate::board::BOARD_SIZE;

/// A board cell. Rows and columns are 1-indexed, so (0,0) is never a square.
/// The only way in is through the checked constructors:
///
/// ```compile_fail
/// let corner = othello_core::Square { row: 0, col: 0 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8, // 1-8, top to bottom
    col: u8, // 1-8, left to right
}

impl Square {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (1..=BOARD_SIZE).contains(&row) && (1..=BOARD_SIZE).contains(&col) {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major index into a 64-cell array.
    pub fn index(self) -> usize {
        (self.row as usize - 1) * BOARD_SIZE as usize + (self.col as usize - 1)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        let size = BOARD_SIZE as usize;
        if index >= size * size {
            return None;
        }
        Some(Self {
            row: (index / size) as u8 + 1,
            col: (index % size) as u8 + 1,
        })
    }

    /// The neighbouring square one step along `(d_row, d_col)`, if still on the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 1 || col < 1 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// Every square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=BOARD_SIZE).flat_map(|row| (1..=BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
