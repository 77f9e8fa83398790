// Move ordering for the alpha-beta search
//
// Moves are scored into disjoint bands so the categories never interleave:
// the transposition-table move first, then captures ranked by MVV-LVA
// (most valuable victim, least valuable attacker), then the current ply's
// killer move, then the remaining quiet moves by their history weight.

use crate::interface::{MoveList, Piece, SearchMove};

/// Deepest ply the killer table tracks; also bounds mate-score distances.
pub const MAX_PLY: usize = 128;

const HASH_MOVE_SCORE: i32 = 1_000_000_000;
const CAPTURE_SCORE_BASE: i32 = 100_000_000;
const KILLER_SCORE: i32 = 90_000_000;

/// MVV-LVA capture ranks, indexed `[victim][attacker]`, pawn through king.
/// A more valuable victim always outranks a less valuable one; within a
/// victim, a cheaper attacker ranks higher. King captures never occur.
#[rustfmt::skip]
const MVV_LVA: [[i32; 6]; 6] = [
    [15, 14, 13, 12, 11, 10], // victim pawn
    [25, 24, 23, 22, 21, 20], // victim knight
    [35, 34, 33, 32, 31, 30], // victim bishop
    [45, 44, 43, 42, 41, 40], // victim rook
    [55, 54, 53, 52, 51, 50], // victim queen
    [ 0,  0,  0,  0,  0,  0], // victim king
];

/// One quiet move per ply: the most recent quiet move that caused a beta
/// cutoff there. Overwritten on each new cutoff, never cleared between
/// episodes.
pub struct KillerTable<M> {
    moves: [M; MAX_PLY],
}

impl<M: SearchMove> KillerTable<M> {
    pub fn new() -> Self {
        Self {
            moves: [M::null(); MAX_PLY],
        }
    }

    pub fn store(&mut self, ply: usize, mv: M) {
        if ply < MAX_PLY {
            self.moves[ply] = mv;
        }
    }

    pub fn probe(&self, ply: usize) -> M {
        if ply < MAX_PLY {
            self.moves[ply]
        } else {
            M::null()
        }
    }
}

impl<M: SearchMove> Default for KillerTable<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulated cutoff weight per origin/destination signature. Reset at the
/// start of every move-selection episode.
pub struct HistoryTable {
    weights: [i32; 4096],
}

impl HistoryTable {
    pub fn new() -> Self {
        Self { weights: [0; 4096] }
    }

    pub fn reset(&mut self) {
        self.weights = [0; 4096];
    }

    pub fn reward<M: SearchMove>(&mut self, mv: M, depth: i32) {
        self.weights[mv.table_index() & 0xFFF] += depth;
    }

    pub fn weight<M: SearchMove>(&self, mv: M) -> i32 {
        self.weights[mv.table_index() & 0xFFF]
    }
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordering priority for a single move. Pub for the benefit of tests; the
/// search itself goes through [`order_moves`].
pub fn move_score<M: SearchMove>(mv: M, hash_move: M, killer: M, history: &HistoryTable) -> i32 {
    if !hash_move.is_null() && mv == hash_move {
        return HASH_MOVE_SCORE;
    }
    if mv.is_capture() {
        // Captures that cannot name their victim (en passant style) count
        // as pawn captures.
        let victim = mv.piece_captured().unwrap_or(Piece::Pawn);
        return CAPTURE_SCORE_BASE + MVV_LVA[victim.index()][mv.piece_moved().index()];
    }
    if !killer.is_null() && mv == killer {
        return KILLER_SCORE;
    }
    history.weight(mv)
}

/// Sort moves in descending priority order.
pub fn order_moves<M: SearchMove>(
    moves: &mut MoveList<M>,
    hash_move: M,
    killer: M,
    history: &HistoryTable,
) {
    moves.sort_by_cached_key(|&mv| -move_score(mv, hash_move, killer, history));
}
