// Depth-bounded alpha-beta minimax over any `GamePosition`
use std::cell::Cell;
use std::time::Instant;

use thiserror::Error;

use crate::evaluation::Evaluator;
use crate::game::GamePosition;

/// Why a search did not produce an action.
#[derive(Debug, Error)]
pub enum SearchError<E> {
    /// The deadline passed. Only the iterative-deepening driver recovers from this.
    #[error("search deadline exceeded")]
    Timeout,

    /// The position rejected a move it had listed as legal.
    #[error("illegal move during search: {0}")]
    IllegalMove(#[source] E),
}

/// What an action proposes to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision<M> {
    Play(M),
    /// The side to move has no legal move.
    Pass,
    /// Depth cutoff or no improving child: carries a value but no move.
    Leaf,
}

/// A decision together with the value the search assigned to it, from the
/// maximizing player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action<M> {
    pub decision: Decision<M>,
    pub value: i32,
}

impl<M: Copy> Action<M> {
    fn leaf(value: i32) -> Self {
        Self { decision: Decision::Leaf, value }
    }

    fn pass(value: i32) -> Self {
        Self { decision: Decision::Pass, value }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self.decision, Decision::Pass)
    }

    /// The move to play, if this action carries one.
    pub fn played(&self) -> Option<M> {
        match self.decision {
            Decision::Play(mv) => Some(mv),
            Decision::Pass | Decision::Leaf => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarity {
    Max,
    Min,
}

impl Polarity {
    fn of<P: GamePosition>(position: &P) -> Self {
        if position.is_max_player() {
            Polarity::Max
        } else {
            Polarity::Min
        }
    }

    fn flip(self) -> Self {
        match self {
            Polarity::Max => Polarity::Min,
            Polarity::Min => Polarity::Max,
        }
    }

    fn worst(self) -> i32 {
        match self {
            Polarity::Max => i32::MIN,
            Polarity::Min => i32::MAX,
        }
    }

    // Strict: on ties the earlier move stays best
    fn improves(self, candidate: i32, best: i32) -> bool {
        match self {
            Polarity::Max => candidate > best,
            Polarity::Min => candidate < best,
        }
    }
}

/// State for one search invocation. The evaluator and deadline are fixed for
/// the lifetime of the context; only the node counter changes.
pub struct SearchContext<'a, E> {
    evaluator: &'a E,
    deadline: Instant,
    nodes: Cell<u64>,
}

impl<'a, E> SearchContext<'a, E> {
    pub fn new(evaluator: &'a E, deadline: Instant) -> Self {
        Self {
            evaluator,
            deadline,
            nodes: Cell::new(0),
        }
    }

    /// Nodes entered so far, across every `search` call on this context.
    pub fn nodes(&self) -> u64 {
        self.nodes.get()
    }

    /// Searches `depth` plies from `root` with the full window. The root's
    /// side-to-move flag picks the polarity.
    pub fn search<P>(&self, root: &P, depth: u32) -> Result<Action<P::Move>, SearchError<P::Error>>
    where
        P: GamePosition,
        E: Evaluator<P>,
    {
        self.visit(root, i32::MIN, i32::MAX, depth, Polarity::of(root))
    }

    fn visit<P>(
        &self,
        position: &P,
        mut alpha: i32,
        mut beta: i32,
        depth: u32,
        polarity: Polarity,
    ) -> Result<Action<P::Move>, SearchError<P::Error>>
    where
        P: GamePosition,
        E: Evaluator<P>,
    {
        // Only gates entry into a node; a node already being expanded runs to completion
        if Instant::now() > self.deadline {
            return Err(SearchError::Timeout);
        }
        self.nodes.set(self.nodes.get() + 1);

        let moves = position.legal_moves();

        if depth == 0 {
            let value = self.evaluator.evaluate(position);
            // Only min nodes flag a moveless cutoff as a pass
            if polarity == Polarity::Min && moves.is_empty() {
                return Ok(Action::pass(value));
            }
            return Ok(Action::leaf(value));
        }

        // A forced pass is scored as is, without looking at the opponent's reply
        if moves.is_empty() {
            return Ok(Action::pass(self.evaluator.evaluate(position)));
        }

        let mut best = Action::leaf(polarity.worst());
        for mv in moves {
            let next = position.play(mv).map_err(SearchError::IllegalMove)?;
            let child = self.visit(&next, alpha, beta, depth - 1, polarity.flip())?;

            if polarity.improves(child.value, best.value) {
                best = Action {
                    decision: Decision::Play(mv),
                    value: child.value,
                };
            }

            match polarity {
                Polarity::Max => alpha = alpha.max(best.value.max(child.value)),
                Polarity::Min => beta = beta.min(best.value.min(child.value)),
            }
            // Strict comparison: equal bounds keep scanning
            if alpha > beta {
                break;
            }
        }

        Ok(best)
    }
}

/// Alpha-beta searcher owning its evaluator. Holds no per-search state, so one
/// instance can serve any number of searches.
#[derive(Debug, Clone, Default)]
pub struct AlphaBeta<E> {
    evaluator: E,
}

impl<E> AlphaBeta<E> {
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn context(&self, deadline: Instant) -> SearchContext<'_, E> {
        SearchContext::new(&self.evaluator, deadline)
    }

    /// Best action for the side to move in `position`, searching `depth` plies.
    pub fn search<P>(
        &self,
        position: &P,
        depth: u32,
        deadline: Instant,
    ) -> Result<Action<P::Move>, SearchError<P::Error>>
    where
        P: GamePosition,
        E: Evaluator<P>,
    {
        self.context(deadline).search(position, depth)
    }
}
