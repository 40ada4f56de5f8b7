use std::fmt;

use crate::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Square),
    Pass,
}

impl Move {
    pub fn square(&self) -> Option<Square> {
        match self {
            Move::Place(sq) => Some(*sq),
            Move::Pass => None,
        }
    }
}

/// Prints `pass` or `(row,col)`, the form the move is reported in.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(sq) => write!(f, "{sq}"),
            Move::Pass => f.write_str("pass"),
        }
    }
}
