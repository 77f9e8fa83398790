// Negamax search with alpha-beta pruning and quiescence
//
// One recursive procedure covers both the main search and quiescence:
// at depth <= 0 the node switches to captures-only move generation with a
// stand-pat floor and no further pruning. The zero-sum property lets both
// sides share the procedure, negating scores and swapping the window bounds
// at each level.
//
// Pruning and ordering, in the order they apply at a node:
// - Transposition-table probe with bound semantics
// - Check extension (a king under attack is never a quiet leaf)
// - Null-move pruning at depth >= 3 when not in check
// - Reverse futility pruning against a depth-scaled margin
// - Hash move / MVV-LVA captures / killer / history move ordering
//
// Running out of the wall-clock budget is not a score. The search returns
// `Result<i32, SearchInterrupted>` and the abort propagates through `?`, so
// no caller can mistake an abandoned branch for a real evaluation.

use crate::evaluation::evaluate;
use crate::interface::{Board, SearchMove, Timer};
use crate::move_ordering::{order_moves, HistoryTable, KillerTable, MAX_PLY};
use crate::transposition_table::{Bound, TableEntry, TranspositionTable};

/// Score of delivering checkmate at the root. Mates further from the root
/// score closer to zero (`ply - MATE_SCORE` for the side being mated).
pub const MATE_SCORE: i32 = 30_000;

/// Window bottom; below every reachable score.
pub const MIN_SCORE: i32 = -MATE_SCORE - 100;

/// Window top; above every reachable score.
pub const MAX_SCORE: i32 = MATE_SCORE + 100;

const NULL_MOVE_MIN_DEPTH: i32 = 3;
const NULL_MOVE_REDUCTION: i32 = 3;
const FUTILITY_MAX_DEPTH: i32 = 8;
const FUTILITY_MARGIN_PER_PLY: i32 = 120;

/// The wall-clock budget ran out mid-search. The branch produced no usable
/// score; whatever the interrupted depth had found so far is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchInterrupted;

/// Whether a score encodes a forced mate for either side.
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_SCORE - MAX_PLY as i32
}

/// All state one search episode touches: the position, the clock, and the
/// shared heuristic tables. Passing it explicitly keeps searches isolated;
/// nothing search-related lives in globals.
pub struct SearchContext<'a, B: Board, T: Timer> {
    board: &'a mut B,
    timer: &'a T,
    time_limit_ms: u64,
    tt: &'a mut TranspositionTable<B::Move>,
    killers: &'a mut KillerTable<B::Move>,
    history: &'a mut HistoryTable,
    root_depth: i32,
    root_move: B::Move,
    nodes: u64,
}

impl<'a, B: Board, T: Timer> SearchContext<'a, B, T> {
    pub fn new(
        board: &'a mut B,
        timer: &'a T,
        time_limit_ms: u64,
        tt: &'a mut TranspositionTable<B::Move>,
        killers: &'a mut KillerTable<B::Move>,
        history: &'a mut HistoryTable,
    ) -> Self {
        Self {
            board,
            timer,
            time_limit_ms,
            tt,
            killers,
            history,
            root_depth: 1,
            root_move: B::Move::null(),
            nodes: 0,
        }
    }

    /// Best root move recorded by the deepest completed search.
    pub fn root_move(&self) -> B::Move {
        self.root_move
    }

    /// Nodes entered so far, quiescence included, summed over every depth
    /// this context has searched.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search the root position to `depth` with a full window.
    pub fn search_root(&mut self, depth: i32) -> Result<i32, SearchInterrupted> {
        self.root_depth = depth;
        self.search(depth, 0, MIN_SCORE, MAX_SCORE)
    }

    /// Depth 1 always runs to completion so that an episode whose budget is
    /// already exhausted still produces a legal move.
    fn out_of_time(&self) -> bool {
        self.root_depth > 1 && self.timer.elapsed_ms() > self.time_limit_ms
    }

    /// Negamax with alpha-beta pruning; quiescence mode at depth <= 0.
    ///
    /// Returns the score of the position from the side to move's point of
    /// view, or `Err(SearchInterrupted)` when the time budget ran out.
    pub fn search(
        &mut self,
        mut depth: i32,
        ply: i32,
        mut alpha: i32,
        beta: i32,
    ) -> Result<i32, SearchInterrupted> {
        let hash = self.board.zobrist();
        let alpha_at_entry = alpha;
        self.nodes += 1;

        // Transposition-table probe. A deep-enough entry resolves the node
        // according to its bound; an exact entry is returned as-is without
        // re-validating the caller's window, a known approximation. The
        // stored move seeds move ordering either way. The root never takes
        // the cutoff: the episode contract needs a move, not just a score,
        // and a cached entry would leave `root_move` unset.
        let mut hash_move = B::Move::null();
        if let Some(entry) = self.tt.probe(hash) {
            hash_move = entry.best_move;
            if ply > 0 && entry.depth >= depth {
                match entry.bound {
                    Bound::Exact => return Ok(entry.score),
                    Bound::Lower if entry.score >= beta => return Ok(entry.score),
                    Bound::Upper if entry.score <= alpha => return Ok(entry.score),
                    _ => {}
                }
            }
        }

        let quiescence = depth <= 0;
        let in_check = self.board.in_check();

        if quiescence {
            // Stand pat: the side to move may decline all captures, so the
            // static evaluation is a floor for the node.
            let stand_pat = evaluate(self.board);
            if stand_pat >= beta {
                return Ok(beta);
            }
            if stand_pat > alpha {
                alpha = stand_pat;
            }
        } else {
            // Check extension: never evaluate a king under attack as a
            // quiet leaf.
            if in_check {
                depth += 1;
            }

            // Null-move pruning: give the opponent a free move; if the
            // reduced search still reaches beta the real move will too.
            // Unsound in check, where passing is illegal.
            if depth >= NULL_MOVE_MIN_DEPTH && !in_check {
                self.board.make_null_move();
                let result = self.search(depth - NULL_MOVE_REDUCTION, ply + 1, -beta, -beta + 1);
                self.board.unmake_null_move();
                let score = -result?;
                if score >= beta {
                    return Ok(score);
                }
            }

            // Reverse futility pruning: the static evaluation already clears
            // beta by a margin that grows with the remaining depth.
            if !in_check
                && depth <= FUTILITY_MAX_DEPTH
                && evaluate(self.board) >= beta + FUTILITY_MARGIN_PER_PLY * depth
            {
                return Ok(beta);
            }
        }

        let mut moves = self.board.legal_moves(quiescence);
        if moves.is_empty() {
            return Ok(if quiescence {
                // No captures left; the stand-pat bound stands.
                alpha
            } else if in_check {
                // Checkmate, preferring mates closer to the root.
                ply - MATE_SCORE
            } else {
                // Stalemate.
                0
            });
        }

        let killer = self.killers.probe(ply as usize);
        order_moves(&mut moves, hash_move, killer, self.history);

        let mut best_score = MIN_SCORE;
        let mut best_move = B::Move::null();

        for mv in moves {
            if self.out_of_time() {
                return Err(SearchInterrupted);
            }

            self.board.make_move(mv);
            let result = self.search(depth - 1, ply + 1, -beta, -alpha);
            self.board.unmake_move(mv);
            let score = -result?;

            if score > best_score {
                best_score = score;
                best_move = mv;

                if score > alpha {
                    alpha = score;
                    if ply == 0 {
                        self.root_move = mv;
                    }

                    if score >= beta {
                        // Quiet cutoffs feed the killer and history
                        // heuristics. The fail-high path returns without a
                        // table store.
                        if !mv.is_capture() {
                            self.killers.store(ply as usize, mv);
                            self.history.reward(mv, depth);
                        }
                        return Ok(score);
                    }
                }
            }
        }

        // Classify against the window as it was on entry. Fail-highs
        // returned above, so Lower is kept only for completeness.
        let bound = if best_score <= alpha_at_entry {
            Bound::Upper
        } else if best_score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt.store(TableEntry {
            hash,
            best_move,
            depth,
            score: best_score,
            bound,
        });

        Ok(best_score)
    }
}
