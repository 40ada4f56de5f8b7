use othello_core::{Board, Color};

/// Scores a position from the maximizing player's perspective: positive
/// favors the maximizer no matter whose turn it is. Implementations must be
/// pure; the search calls them only at depth cutoffs and forced passes.
pub trait Evaluator<P> {
    fn evaluate(&self, position: &P) -> i32;
}

impl<P, E: Evaluator<P> + ?Sized> Evaluator<P> for &E {
    fn evaluate(&self, position: &P) -> i32 {
        (**self).evaluate(position)
    }
}

// Corners are worth the most; squares touching a corner hand it to the opponent
const BOARD_WEIGHT: [[i32; 8]; 8] = [
    [20, -3, 11,  8,  8, 11, -3, 20],
    [-3, -7, -4,  1,  1, -4, -7, -3],
    [11, -4,  2,  2,  2,  2, -4, 11],
    [ 8,  1,  2,  1,  1,  2,  1,  8],
    [ 8,  1,  2,  1,  1,  2,  1,  8],
    [11, -4,  2,  2,  2,  2, -4, 11],
    [-3, -7, -4,  1,  1, -4, -7, -3],
    [20, -3, 11,  8,  8, 11, -3, 20],
];

/// Default Othello heuristic: positional weights plus mobility.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticHeuristic;

impl StaticHeuristic {
    /// Sum of square weights, maximizer's disks positive.
    pub fn positional(board: &Board) -> i32 {
        board
            .disks()
            .map(|(sq, color)| {
                let weight = BOARD_WEIGHT[sq.row() as usize - 1][sq.col() as usize - 1];
                if color.is_max() {
                    weight
                } else {
                    -weight
                }
            })
            .sum()
    }

    /// Legal-move difference between the two sides, oriented toward the maximizer.
    pub fn mobility(board: &Board) -> i32 {
        let own = board.legal_moves().len() as i32;
        let opponent = board
            .with_side_to_move(board.side_to_move().opponent())
            .legal_moves()
            .len() as i32;

        if board.is_max_player() {
            own - opponent
        } else {
            opponent - own
        }
    }

    pub fn weight(row: u8, col: u8) -> i32 {
        BOARD_WEIGHT[row as usize - 1][col as usize - 1]
    }
}

impl Evaluator<Board> for StaticHeuristic {
    fn evaluate(&self, board: &Board) -> i32 {
        Self::positional(board) + Self::mobility(board)
    }
}

/// Disk difference, White minus Black. Mostly useful in tests and endgames.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskCount;

impl Evaluator<Board> for DiskCount {
    fn evaluate(&self, board: &Board) -> i32 {
        board.disk_count(Color::White) as i32 - board.disk_count(Color::Black) as i32
    }
}
