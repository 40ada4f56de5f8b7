use std::time::Instant;

use log::{debug, error, info, warn};
use othello_core::{Board, Move};
use thiserror::Error;

use crate::evaluation::{Evaluator, StaticHeuristic};
use crate::game::GamePosition;
use crate::search::{Action, AlphaBeta, SearchError};

pub const DEFAULT_DEPTH: u32 = 7; // First depth the driver searches
pub const MAX_DEPTH: u32 = 1000; // Safety bound; the deadline normally stops the loop first

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("initial depth must be at least 1")]
    ZeroInitialDepth,

    #[error("initial depth {initial} exceeds max depth {max}")]
    DepthRange { initial: u32, max: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub initial_depth: u32,
    pub max_depth: u32,
}

impl SearchConfig {
    pub fn new(initial_depth: u32, max_depth: u32) -> Result<Self, ConfigError> {
        let config = Self {
            initial_depth,
            max_depth,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_depth == 0 {
            return Err(ConfigError::ZeroInitialDepth);
        }
        if self.initial_depth > self.max_depth {
            return Err(ConfigError::DepthRange {
                initial: self.initial_depth,
                max: self.max_depth,
            });
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            initial_depth: DEFAULT_DEPTH,
            max_depth: MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Timeout,
    DepthCap,
}

/// Outcome of one iterative-deepening run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport<M> {
    /// Result of the deepest completed depth, `None` if no depth completed.
    pub best: Option<Action<M>>,
    pub completed_depth: Option<u32>,
    pub stop: StopReason,
    pub nodes: u64,
}

impl<M: Copy> SearchReport<M> {
    /// The move to play. `None` means pass: either nothing completed or the
    /// best action carries no move.
    pub fn chosen(&self) -> Option<M> {
        self.best.as_ref().and_then(Action::played)
    }
}

/// Iterative-deepening driver around `AlphaBeta`.
#[derive(Debug, Clone, Default)]
pub struct IterativeDeepening<E> {
    config: SearchConfig,
    engine: AlphaBeta<E>,
}

impl<E> IterativeDeepening<E> {
    pub fn new(config: SearchConfig, evaluator: E) -> Self {
        Self {
            config,
            engine: AlphaBeta::new(evaluator),
        }
    }

    pub fn engine(&self) -> &AlphaBeta<E> {
        &self.engine
    }

    /// Searches `initial_depth`, `initial_depth + 1`, ... until the deadline
    /// passes or `max_depth` completes. A depth cut short by the deadline is
    /// discarded. Illegal-move failures are returned as errors.
    pub fn run<P>(
        &self,
        position: &P,
        deadline: Instant,
    ) -> Result<SearchReport<P::Move>, SearchError<P::Error>>
    where
        P: GamePosition,
        E: Evaluator<P>,
    {
        let start = Instant::now();
        let ctx = self.engine.context(deadline);
        let mut best = None;
        let mut completed_depth = None;
        let mut stop = StopReason::DepthCap;

        for depth in self.config.initial_depth..=self.config.max_depth {
            match ctx.search(position, depth) {
                Ok(action) => {
                    debug!(
                        "depth {} completed: {:?} value {} ({} nodes, {:?})",
                        depth,
                        action.decision,
                        action.value,
                        ctx.nodes(),
                        start.elapsed()
                    );
                    best = Some(action);
                    completed_depth = Some(depth);
                }
                Err(SearchError::Timeout) => {
                    debug!("depth {} abandoned at the deadline", depth);
                    stop = StopReason::Timeout;
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        if completed_depth.is_none() {
            warn!(
                "no depth completed before the deadline (initial depth {})",
                self.config.initial_depth
            );
        }

        Ok(SearchReport {
            best,
            completed_depth,
            stop,
            nodes: ctx.nodes(),
        })
    }

    /// The move to play in `position`, `None` meaning pass. Never fails: an
    /// illegal-move failure inside the search is logged and answered with a
    /// pass, whatever earlier depths found.
    pub fn choose<P>(&self, position: &P, deadline: Instant) -> Option<P::Move>
    where
        P: GamePosition,
        E: Evaluator<P>,
    {
        match self.run(position, deadline) {
            Ok(report) => {
                let chosen = report.chosen();
                info!(
                    "chose {:?} at depth {:?} (value {:?}, {} nodes, stopped by {:?})",
                    chosen,
                    report.completed_depth,
                    report.best.map(|a| a.value),
                    report.nodes,
                    report.stop
                );
                chosen
            }
            Err(e) => {
                error!("{}", e);
                None
            }
        }
    }
}

impl<E: Evaluator<Board>> IterativeDeepening<E> {
    pub fn choose_move(&self, board: &Board, deadline: Instant) -> Move {
        self.choose(board, deadline).map_or(Move::Pass, Move::Place)
    }
}


impl IterativeDeepening<StaticHeuristic> {
    pub fn with_config(config: SearchConfig) -> Self {
        Self::new(config, StaticHeuristic)
    }
}
