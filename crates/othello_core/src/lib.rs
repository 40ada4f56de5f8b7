// Core Othello game logic modules
pub mod board;
pub mod error;
pub mod moves;
pub mod piece;
pub mod square;

// Re-export main types for convenience
pub use board::{Board, BOARD_SIZE, ENCODED_LEN};
pub use error::{BoardError, MoveError};
pub use moves::Move;
pub use piece::Color;
pub use square::Square;
