// Iterative deepening driver
//
// Owns the externally visible "choose a move" contract: given a position and
// the game clock, spend a fixed fraction of the remaining time searching at
// depth 1, 2, 3, ... and return the best move of the deepest depth that
// finished. A depth cut short by the clock is discarded; adopting its
// half-searched candidate could surface a move chosen by an incomplete
// traversal.

use crate::interface::{Board, SearchMove, Timer};
use crate::move_ordering::{HistoryTable, KillerTable};
use crate::negamax::{is_mate_score, SearchContext, SearchInterrupted};
use crate::transposition_table::TranspositionTable;

/// Hard ceiling on the deepening loop; no episode gets anywhere near it.
pub const MAX_DEPTH: i32 = 64;

/// Fraction of the remaining game clock one episode may spend.
const TIME_FRACTION: u64 = 30;

/// The search engine with its persistent heuristic state.
///
/// The transposition table and killer table carry over from episode to
/// episode; the history table is reset when an episode starts. One engine
/// drives one game; searches are strictly sequential.
pub struct Engine<B: Board> {
    tt: TranspositionTable<B::Move>,
    killers: KillerTable<B::Move>,
    history: HistoryTable,
}

impl<B: Board> Engine<B> {
    pub fn new() -> Self {
        Self {
            tt: TranspositionTable::new(),
            killers: KillerTable::new(),
            history: HistoryTable::new(),
        }
    }

    /// Engine with a transposition table of at least `slots` entries
    /// (rounded up to a power of two).
    pub fn with_table_slots(slots: usize) -> Self {
        Self {
            tt: TranspositionTable::with_slots(slots),
            killers: KillerTable::new(),
            history: HistoryTable::new(),
        }
    }

    /// Pick a move for the side to move within the time budget.
    ///
    /// Returns a legal move, or the null move if and only if the position
    /// has none. Even a zero budget yields the depth-1 result.
    pub fn choose_move<T: Timer>(&mut self, board: &mut B, timer: &T) -> B::Move {
        let time_limit_ms = timer.remaining_ms() / TIME_FRACTION;
        self.history.reset();

        let mut ctx = SearchContext::new(
            board,
            timer,
            time_limit_ms,
            &mut self.tt,
            &mut self.killers,
            &mut self.history,
        );
        let mut best = B::Move::null();

        for depth in 1..=MAX_DEPTH {
            match ctx.search_root(depth) {
                Ok(score) => {
                    best = ctx.root_move();
                    log::debug!(
                        "depth {} score {} nodes {} time {}ms best {:?}",
                        depth,
                        score,
                        ctx.nodes(),
                        timer.elapsed_ms(),
                        best
                    );
                    // A forced mate is proven within this horizon; deeper
                    // searches cannot change the outcome.
                    if is_mate_score(score) {
                        break;
                    }
                }
                Err(SearchInterrupted) => break,
            }

            if timer.elapsed_ms() >= time_limit_ms {
                break;
            }
        }

        best
    }
}

impl<B: Board> Default for Engine<B> {
    fn default() -> Self {
        Self::new()
    }
}
