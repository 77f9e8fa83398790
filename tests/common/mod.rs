//! Test collaborators: a board adapter over the `chess` crate and simple
//! episode timers. The engine core never sees `chess` types directly;
//! everything goes through the `skirmish` traits.

use chess::{ChessMove, MoveGen, EMPTY};
use skirmish::{Board, MoveList, Piece, SearchMove, Timer};
use std::str::FromStr;
use std::time::Instant;

fn piece_kind(piece: chess::Piece) -> Piece {
    match piece {
        chess::Piece::Pawn => Piece::Pawn,
        chess::Piece::Knight => Piece::Knight,
        chess::Piece::Bishop => Piece::Bishop,
        chess::Piece::Rook => Piece::Rook,
        chess::Piece::Queen => Piece::Queen,
        chess::Piece::King => Piece::King,
    }
}

fn chess_piece(piece: Piece) -> chess::Piece {
    match piece {
        Piece::Pawn => chess::Piece::Pawn,
        Piece::Knight => chess::Piece::Knight,
        Piece::Bishop => chess::Piece::Bishop,
        Piece::Rook => chess::Piece::Rook,
        Piece::Queen => chess::Piece::Queen,
        Piece::King => chess::Piece::King,
    }
}

/// A `chess::ChessMove` annotated with the mover/victim kinds the search
/// needs. `inner == None` is the null move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterMove {
    pub inner: Option<ChessMove>,
    moved: Piece,
    captured: Option<Piece>,
}

impl SearchMove for AdapterMove {
    fn null() -> Self {
        Self {
            inner: None,
            moved: Piece::Pawn,
            captured: None,
        }
    }

    fn is_null(&self) -> bool {
        self.inner.is_none()
    }

    fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    fn piece_moved(&self) -> Piece {
        self.moved
    }

    fn piece_captured(&self) -> Option<Piece> {
        self.captured
    }

    fn table_index(&self) -> usize {
        match self.inner {
            Some(mv) => mv.get_source().to_index() * 64 + mv.get_dest().to_index(),
            None => 0,
        }
    }
}

/// Copy-on-make board with an undo stack, wrapping `chess::Board`.
pub struct AdapterBoard {
    stack: Vec<chess::Board>,
}

impl AdapterBoard {
    pub fn start_position() -> Self {
        Self {
            stack: vec![chess::Board::default()],
        }
    }

    pub fn from_fen(fen: &str) -> Self {
        Self {
            stack: vec![chess::Board::from_str(fen).expect("valid FEN")],
        }
    }

    fn top(&self) -> &chess::Board {
        self.stack.last().expect("board stack never empties")
    }

    /// Square-pair rendering like "a1a8", for readable assertions.
    pub fn move_name(mv: AdapterMove) -> String {
        match mv.inner {
            Some(inner) => format!("{}{}", inner.get_source(), inner.get_dest()),
            None => "0000".to_string(),
        }
    }
}

impl Board for AdapterBoard {
    type Move = AdapterMove;

    fn legal_moves(&self, captures_only: bool) -> MoveList<AdapterMove> {
        let position = self.top();
        let mut generator = MoveGen::new_legal(position);
        if captures_only {
            // En passant is invisible to this mask; close enough for a
            // test collaborator.
            let targets = *position.color_combined(!position.side_to_move());
            generator.set_iterator_mask(targets);
        }
        generator
            .map(|mv| {
                let moved = piece_kind(
                    position
                        .piece_on(mv.get_source())
                        .expect("legal move has a mover"),
                );
                let captured = position.piece_on(mv.get_dest()).map(piece_kind);
                AdapterMove {
                    inner: Some(mv),
                    moved,
                    captured,
                }
            })
            .collect()
    }

    fn in_check(&self) -> bool {
        *self.top().checkers() != EMPTY
    }

    fn white_to_move(&self) -> bool {
        self.top().side_to_move() == chess::Color::White
    }

    fn piece_squares(&self, piece: Piece, white: bool) -> u64 {
        let position = self.top();
        let color = if white {
            chess::Color::White
        } else {
            chess::Color::Black
        };
        (position.pieces(chess_piece(piece)) & position.color_combined(color)).0
    }

    fn zobrist(&self) -> u64 {
        self.top().get_hash()
    }

    fn make_move(&mut self, mv: AdapterMove) {
        let next = self.top().make_move_new(mv.inner.expect("never play the null move"));
        self.stack.push(next);
    }

    fn unmake_move(&mut self, _mv: AdapterMove) {
        self.stack.pop();
    }

    fn make_null_move(&mut self) {
        let next = self
            .top()
            .null_move()
            .expect("null move requested while in check");
        self.stack.push(next);
    }

    fn unmake_null_move(&mut self) {
        self.stack.pop();
    }
}

/// Real wall clock with a configurable remaining budget.
pub struct EpisodeTimer {
    start: Instant,
    remaining_ms: u64,
}

impl EpisodeTimer {
    pub fn new(remaining_ms: u64) -> Self {
        Self {
            start: Instant::now(),
            remaining_ms,
        }
    }
}

impl Timer for EpisodeTimer {
    fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }
}
