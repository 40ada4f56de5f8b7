use thiserror::Error;

use crate::{Square, ENCODED_LEN};

/// Errors raised while decoding a position string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("the position string is too short: expected {} characters, got {0}", ENCODED_LEN)]
    TooShort(usize),

    #[error("the position string is too long: expected {} characters, got {0}", ENCODED_LEN)]
    TooLong(usize),

    #[error("invalid side to move {0:?}, expected 'W' or 'B'")]
    InvalidSideToMove(char),

    #[error("invalid cell {found:?} at index {index}, expected 'O', 'X' or 'E'")]
    InvalidCell { index: usize, found: char },
}

/// Errors raised when a move is not legal in the given position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("square {0} is already occupied")]
    Occupied(Square),

    #[error("move {0} does not flip any disk")]
    NoFlips(Square),

    #[error("cannot pass while a legal move is available")]
    PassWithMovesAvailable,
}
