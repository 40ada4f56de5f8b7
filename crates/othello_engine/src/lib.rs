pub mod ai;
pub mod evaluation;
pub mod game;
pub mod search;

pub use ai::{
    ConfigError, IterativeDeepening, SearchConfig, SearchReport, StopReason, DEFAULT_DEPTH, MAX_DEPTH,
};
pub use evaluation::{DiskCount, Evaluator, StaticHeuristic};
pub use game::GamePosition;
pub use search::{Action, AlphaBeta, Decision, SearchContext, SearchError};
