// Collaborator interfaces for the search core
//
// The engine does not own a board representation. Legal-move generation,
// check detection, move application and Zobrist hashing are supplied by the
// host program through these traits, and the search assumes they are correct.
// Everything the search needs to know about a position flows through this
// module.

use smallvec::SmallVec;
use std::fmt::Debug;

/// Piece kinds in ascending material order.
///
/// The discriminant doubles as the index into the decoded evaluation tables
/// and the MVV-LVA capture table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Piece {
    Pawn = 0,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Move list sized so that ordinary positions never spill to the heap.
pub type MoveList<M> = SmallVec<[M; 64]>;

/// A move as the search core sees it.
///
/// The host's move type stays opaque; the search only needs equality, a
/// distinguished null value, capture information and a compact encoding it
/// can use as a table index.
pub trait SearchMove: Copy + Eq + Debug {
    /// The distinguished "no move" value, returned by the engine when a
    /// position has no legal moves.
    fn null() -> Self;

    fn is_null(&self) -> bool;

    fn is_capture(&self) -> bool;

    /// Kind of the piece being moved.
    fn piece_moved(&self) -> Piece;

    /// Kind of the captured piece, if the move is a capture.
    fn piece_captured(&self) -> Option<Piece>;

    /// Compact origin/destination encoding, strictly below 4096.
    /// Indexes the history table.
    fn table_index(&self) -> usize;
}

/// Position interface required from the host's board representation.
///
/// `make_move`/`unmake_move` are called in strict LIFO order during the
/// recursion, as are the null-move pair.
pub trait Board {
    type Move: SearchMove;

    /// Enumerate legal moves; with `captures_only` set, only capturing moves
    /// are produced (quiescence move generation).
    fn legal_moves(&self, captures_only: bool) -> MoveList<Self::Move>;

    /// Whether the side to move is in check.
    fn in_check(&self) -> bool;

    fn white_to_move(&self) -> bool;

    /// Occupancy of the given piece kind and color as a bitboard
    /// (a1 = bit 0 .. h8 = bit 63).
    fn piece_squares(&self, piece: Piece, white: bool) -> u64;

    /// 64-bit position hash, stable under transposition.
    fn zobrist(&self) -> u64;

    fn make_move(&mut self, mv: Self::Move);

    fn unmake_move(&mut self, mv: Self::Move);

    /// Pass the turn without moving. Only called when the side to move is
    /// not in check.
    fn make_null_move(&mut self);

    fn unmake_null_move(&mut self);
}

/// Wall-clock view of the current move-selection episode.
pub trait Timer {
    /// Milliseconds elapsed since this episode started.
    fn elapsed_ms(&self) -> u64;

    /// Milliseconds remaining on the clock for the whole game.
    fn remaining_ms(&self) -> u64;
}
