//! Time-budgeted move search for two-player, perfect-information board games.
//!
//! The crate owns the search: iterative-deepening negamax with alpha-beta
//! pruning, a transposition table, quiescence search and heuristic move
//! ordering, on top of a tapered piece-square evaluator. Board
//! representation, legal-move generation and wall-clock timing are supplied
//! by the host through the traits in [`interface`].
//!
//! The entry point is [`Engine::choose_move`]: hand it a board and a timer
//! and it returns a legal move, or the null move when none exist.

pub mod evaluation;
pub mod interface;
pub mod move_ordering;
pub mod negamax;
pub mod piece_square_tables;
pub mod search;
pub mod transposition_table;

pub use evaluation::evaluate;
pub use interface::{Board, MoveList, Piece, SearchMove, Timer};
pub use negamax::{
    is_mate_score, SearchContext, SearchInterrupted, MATE_SCORE, MAX_SCORE, MIN_SCORE,
};
pub use search::{Engine, MAX_DEPTH};
pub use transposition_table::{Bound, TableEntry, TranspositionTable};
