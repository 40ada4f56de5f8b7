use std::cell::Cell;
use std::time::{Duration, Instant};

use othello_core::{Board, Move};
use othello_engine::{
    AlphaBeta, Decision, DiskCount, Evaluator, GamePosition, IterativeDeepening, SearchConfig,
    SearchError, StaticHeuristic, StopReason,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn far_deadline() -> Instant {
    Instant::now() + Duration::from_secs(3600)
}

/// Plays `plies` random moves from the start, passing when forced.
fn random_board(rng: &mut StdRng, plies: usize) -> Board {
    let mut board = Board::initial();
    for _ in 0..plies {
        if board.is_game_over() {
            break;
        }
        let moves = board.legal_moves();
        let mv = if moves.is_empty() {
            Move::Pass
        } else {
            Move::Place(moves[rng.gen_range(0..moves.len())])
        };
        board = board.make_move(mv).expect("generated move is legal");
    }
    board
}

/// Unpruned minimax with the same leaf rules as the engine.
fn minimax<E: Evaluator<Board>>(board: &Board, depth: u32, evaluator: &E) -> i32 {
    let moves = board.legal_moves();
    if depth == 0 || moves.is_empty() {
        return evaluator.evaluate(board);
    }
    let children = moves.into_iter().map(|sq| {
        let next = board.make_move(Move::Place(sq)).expect("legal");
        minimax(&next, depth - 1, evaluator)
    });
    if board.is_max_player() {
        children.max().expect("at least one move")
    } else {
        children.min().expect("at least one move")
    }
}

#[test]
fn pruning_preserves_minimax_value() {
    let mut rng = StdRng::seed_from_u64(0x07e1_10);
    let heuristic = AlphaBeta::new(StaticHeuristic);
    let disks = AlphaBeta::new(DiskCount);

    for _ in 0..25 {
        let plies = rng.gen_range(0..30);
        let board = random_board(&mut rng, plies);
        for depth in 1..=3 {
            let action = heuristic.search(&board, depth, far_deadline()).unwrap();
            assert_eq!(
                action.value,
                minimax(&board, depth, &StaticHeuristic),
                "heuristic mismatch at depth {depth} for {board}"
            );

            let action = disks.search(&board, depth, far_deadline()).unwrap();
            assert_eq!(
                action.value,
                minimax(&board, depth, &DiskCount),
                "disk count mismatch at depth {depth} for {board}"
            );
        }
    }
}

#[test]
fn chosen_move_achieves_reported_value() {
    let mut rng = StdRng::seed_from_u64(42);
    let engine = AlphaBeta::new(StaticHeuristic);

    for _ in 0..20 {
        let plies = rng.gen_range(0..40);
        let board = random_board(&mut rng, plies);
        let action = engine.search(&board, 2, far_deadline()).unwrap();
        match action.decision {
            Decision::Play(sq) => {
                assert!(board.legal_moves().contains(&sq));
                let next = board.make_move(Move::Place(sq)).unwrap();
                assert_eq!(action.value, minimax(&next, 1, &StaticHeuristic));
            }
            Decision::Pass => {
                assert!(board.legal_moves().is_empty());
                assert_eq!(action.value, StaticHeuristic.evaluate(&board));
            }
            Decision::Leaf => panic!("depth 2 root search returned a leaf"),
        }
    }
}

#[test]
fn moves_always_hand_over_the_turn() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..20 {
        let plies = rng.gen_range(0..50);
        let board = random_board(&mut rng, plies);
        for sq in GamePosition::legal_moves(&board) {
            let next = board.play(sq).unwrap();
            assert_ne!(next, board);
            assert_eq!(next.side_to_move(), board.side_to_move().opponent());
            assert_eq!(next.empty_count() + 1, board.empty_count());
        }
    }
}

/// A game where every extra ply can only raise the score: the maximizer adds
/// 1 or 2, the minimizer adds 0 or 1.
#[derive(Debug, Clone)]
struct Climb {
    score: i32,
    max_to_move: bool,
}

#[derive(Debug, thiserror::Error)]
#[error("unreachable")]
struct Never;

impl GamePosition for Climb {
    type Move = i32;
    type Error = Never;

    fn is_max_player(&self) -> bool {
        self.max_to_move
    }

    fn legal_moves(&self) -> Vec<i32> {
        if self.max_to_move {
            vec![1, 2]
        } else {
            vec![0, 1]
        }
    }

    fn play(&self, step: i32) -> Result<Self, Never> {
        Ok(Climb {
            score: self.score + step,
            max_to_move: !self.max_to_move,
        })
    }
}

struct Score;

impl Evaluator<Climb> for Score {
    fn evaluate(&self, position: &Climb) -> i32 {
        position.score
    }
}

#[test]
fn deeper_iterations_never_regress() {
    let root = Climb {
        score: 0,
        max_to_move: true,
    };
    let driver = IterativeDeepening::new(SearchConfig::new(1, 8).unwrap(), Score);

    let mut previous = i32::MIN;
    for depth in 1..=8 {
        let action = driver.engine().search(&root, depth, far_deadline()).unwrap();
        assert!(action.value >= previous, "depth {depth} regressed");
        assert_eq!(action.decision, Decision::Play(2));
        previous = action.value;
    }

    let report = driver.run(&root, far_deadline()).unwrap();
    assert_eq!(report.stop, StopReason::DepthCap);
    assert_eq!(report.completed_depth, Some(8));
    assert_eq!(report.best.map(|a| a.value), Some(previous));
}

/// Counts how often the search asks for legal moves.
struct Watched<'a> {
    expansions: &'a Cell<u32>,
}

impl GamePosition for Watched<'_> {
    type Move = u8;
    type Error = Never;

    fn is_max_player(&self) -> bool {
        true
    }

    fn legal_moves(&self) -> Vec<u8> {
        self.expansions.set(self.expansions.get() + 1);
        vec![0, 1, 2]
    }

    fn play(&self, _mv: u8) -> Result<Self, Never> {
        Ok(Watched {
            expansions: self.expansions,
        })
    }
}

impl Evaluator<Watched<'_>> for Score {
    fn evaluate(&self, _position: &Watched<'_>) -> i32 {
        0
    }
}

#[test]
fn expired_deadline_stops_before_expanding_the_root() {
    let expansions = Cell::new(0);
    let root = Watched {
        expansions: &expansions,
    };
    let now = Instant::now();
    let deadline = now.checked_sub(Duration::from_secs(1)).unwrap_or(now);

    let result = AlphaBeta::new(Score).search(&root, 4, deadline);
    assert!(matches!(result, Err(SearchError::Timeout)));
    assert_eq!(expansions.get(), 0);

    let report = IterativeDeepening::new(SearchConfig::default(), Score)
        .run(&root, deadline)
        .unwrap();
    assert_eq!(report.stop, StopReason::Timeout);
    assert!(report.best.is_none());
    assert_eq!(expansions.get(), 0);
}

#[test]
fn short_budget_still_answers() {
    // Depth 1 fits easily in the budget; a full-game depth never does
    let board = Board::initial();
    let driver = IterativeDeepening::with_config(SearchConfig::new(1, 60).unwrap());
    let deadline = Instant::now() + Duration::from_millis(200);

    let report = driver.run(&board, deadline).unwrap();
    assert_eq!(report.stop, StopReason::Timeout);
    assert!(report.completed_depth >= Some(1));
    let sq = report.chosen().expect("a completed depth picks a move");
    assert!(board.legal_moves().contains(&sq));
}
