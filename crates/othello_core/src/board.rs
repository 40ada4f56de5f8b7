use std::fmt;
use std::str::FromStr;

use crate::{BoardError, Color, Move, MoveError, Square};

pub const BOARD_SIZE: u8 = 8;

/// Length of the textual encoding: one side-to-move marker plus 64 cells.
pub const ENCODED_LEN: usize = 1 + (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

const EMPTY_CHAR: char = 'E';

// Row/column steps for the eight lines a placement can flip along
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An Othello position. Transitions never mutate in place: `make_move`
/// returns the successor board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Color>; 64],
    to_move: Color,
}

impl Board {
    /// An empty board with `to_move` to play.
    pub fn empty(to_move: Color) -> Self {
        Self {
            cells: [None; 64],
            to_move,
        }
    }

    /// The standard starting position, White to move.
    pub fn initial() -> Self {
        let mut board = Self::empty(Color::White);
        board.setup_initial_position();
        board
    }

    fn setup_initial_position(&mut self) {
        for (row, col, color) in [
            (4, 4, Color::White),
            (4, 5, Color::Black),
            (5, 4, Color::Black),
            (5, 5, Color::White),
        ] {
            if let Some(sq) = Square::new(row, col) {
                self.cells[sq.index()] = Some(color);
            }
        }
    }

    /// Decodes the 65-character encoding: `W`/`B` for the side to move,
    /// then 64 cells in row-major order (`O` white, `X` black, `E` empty).
    pub fn parse(encoded: &str) -> Result<Self, BoardError> {
        let chars: Vec<char> = encoded.chars().collect();
        if chars.len() < ENCODED_LEN {
            return Err(BoardError::TooShort(chars.len()));
        }
        if chars.len() > ENCODED_LEN {
            return Err(BoardError::TooLong(chars.len()));
        }

        let to_move =
            Color::from_turn_char(chars[0]).ok_or(BoardError::InvalidSideToMove(chars[0]))?;
        let mut board = Self::empty(to_move);

        for (offset, &c) in chars[1..].iter().enumerate() {
            board.cells[offset] = match c {
                EMPTY_CHAR => None,
                _ => Some(Color::from_disk_char(c).ok_or(BoardError::InvalidCell {
                    index: offset + 1,
                    found: c,
                })?),
            };
        }

        Ok(board)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Color> {
        self.cells[sq.index()]
    }

    pub fn side_to_move(&self) -> Color {
        self.to_move
    }

    /// True when the side to move is the maximizing one (White).
    pub fn is_max_player(&self) -> bool {
        self.to_move.is_max()
    }

    /// A copy of this board with only the turn flag replaced.
    pub fn with_side_to_move(&self, color: Color) -> Self {
        Self {
            cells: self.cells,
            to_move: color,
        }
    }

    pub fn disk_count(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c == Some(color)).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Occupied squares and their owners, row-major.
    pub fn disks(&self) -> impl Iterator<Item = (Square, Color)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|color| (sq, color)))
    }

    /// Placements available to the side to move, in row-major order.
    pub fn legal_moves(&self) -> Vec<Square> {
        Square::all()
            .filter(|&sq| self.is_legal_placement(sq))
            .collect()
    }

    pub fn has_legal_move(&self) -> bool {
        Square::all().any(|sq| self.is_legal_placement(sq))
    }

    /// Neither side can place a disk.
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_move() && !self.with_side_to_move(self.to_move.opponent()).has_legal_move()
    }

    fn is_legal_placement(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
            && DIRECTIONS
                .iter()
                .any(|&(dr, dc)| self.flips_along(sq, dr, dc, self.to_move) > 0)
    }

    /// Number of opponent disks `color` would flip along one direction by placing on `sq`.
    fn flips_along(&self, sq: Square, d_row: i8, d_col: i8, color: Color) -> usize {
        let mut count = 0;
        let mut current = sq.offset(d_row, d_col);
        while let Some(pos) = current {
            match self.piece_at(pos) {
                Some(c) if c == color.opponent() => count += 1,
                Some(_) => return count,
                None => return 0,
            }
            current = pos.offset(d_row, d_col);
        }
        0
    }

    /// Plays `mv` for the side to move and returns the resulting board.
    pub fn make_move(&self, mv: Move) -> Result<Board, MoveError> {
        let mut next = self.clone();
        match mv {
            Move::Pass => {
                if self.has_legal_move() {
                    return Err(MoveError::PassWithMovesAvailable);
                }
            }
            Move::Place(sq) => {
                if self.piece_at(sq).is_some() {
                    return Err(MoveError::Occupied(sq));
                }
                if next.place_and_flip(sq) == 0 {
                    return Err(MoveError::NoFlips(sq));
                }
            }
        }
        next.to_move = self.to_move.opponent();
        Ok(next)
    }

    // Returns the number of flipped disks; leaves the board untouched when zero
    fn place_and_flip(&mut self, sq: Square) -> usize {
        let color = self.to_move;
        let mut flipped = 0;

        for &(dr, dc) in DIRECTIONS.iter() {
            let n = self.flips_along(sq, dr, dc, color);
            let mut current = sq;
            for _ in 0..n {
                if let Some(pos) = current.offset(dr, dc) {
                    self.cells[pos.index()] = Some(color);
                    current = pos;
                }
            }
            flipped += n;
        }

        if flipped > 0 {
            self.cells[sq.index()] = Some(color);
        }
        flipped
    }

    /// Multi-line diagram for debugging, rows top to bottom.
    pub fn render(&self) -> String {
        let mut out = String::from("  1 2 3 4 5 6 7 8\n");
        for row in 1..=BOARD_SIZE {
            out.push_str(&row.to_string());
            for col in 1..=BOARD_SIZE {
                out.push(' ');
                out.push(match Square::new(row, col).and_then(|sq| self.piece_at(sq)) {
                    Some(color) => color.disk_char(),
                    None => '.',
                });
            }
            out.push('\n');
        }
        out.push_str(&format!("{} to move", self.to_move.turn_char()));
        out
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Writes the same 65-character encoding `parse` reads.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut encoded = String::with_capacity(ENCODED_LEN);
        encoded.push(self.to_move.turn_char());
        for cell in self.cells.iter() {
            encoded.push(match cell {
                Some(color) => color.disk_char(),
                None => EMPTY_CHAR,
            });
        }
        f.write_str(&encoded)
    }
}
