use othello_core::{Board, Move, MoveError, Square};

/// What the search needs from a game: the side-to-move polarity, the legal
/// moves in generator order, and successor construction.
pub trait GamePosition: Sized {
    type Move: Copy + std::fmt::Debug;
    type Error: std::error::Error + 'static;

    /// True when the side to move is the maximizing player.
    fn is_max_player(&self) -> bool;

    fn legal_moves(&self) -> Vec<Self::Move>;

    /// The position after `mv`. Must not modify `self`.
    fn play(&self, mv: Self::Move) -> Result<Self, Self::Error>;
}

impl GamePosition for Board {
    type Move = Square;
    type Error = MoveError;

    fn is_max_player(&self) -> bool {
        Board::is_max_player(self)
    }

    fn legal_moves(&self) -> Vec<Square> {
        Board::legal_moves(self)
    }

    fn play(&self, mv: Square) -> Result<Board, MoveError> {
        self.make_move(Move::Place(mv))
    }
}
