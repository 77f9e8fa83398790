// Static position evaluation
// Returns score in centipawns, positive = good for the side to move.
//
// Tapered evaluation: every piece contributes a midgame and an endgame
// piece-square value plus a material constant, and the two accumulators are
// blended by the remaining non-pawn material (the game phase). No mobility,
// king safety or pawn structure terms; the piece-square tables carry all
// positional knowledge.

use crate::interface::{Board, Piece};
use crate::piece_square_tables::{EVAL_TABLES, PHASE_MAX};

/// Evaluate the position from the perspective of the side to move.
pub fn evaluate<B: Board>(board: &B) -> i32 {
    let tables = &*EVAL_TABLES;

    let mut midgame = 0;
    let mut endgame = 0;
    let mut phase = 0;

    for white in [true, false] {
        for piece in Piece::ALL {
            let kind = piece.index();
            let mut occupied = board.piece_squares(piece, white);

            while occupied != 0 {
                let square = occupied.trailing_zeros() as usize;
                occupied &= occupied - 1;

                // Tables are laid out for the side moving down the board;
                // mirror ranks for White.
                let square = if white { square ^ 56 } else { square };

                midgame += tables.midgame[kind][square] + tables.midgame_material[kind];
                endgame += tables.endgame[kind][square] + tables.endgame_material[kind];
                phase += tables.phase[kind];
            }
        }

        // Negating after each side leaves white-minus-black once both
        // passes are done.
        midgame = -midgame;
        endgame = -endgame;
    }

    let blended = (midgame * phase + endgame * (PHASE_MAX - phase)) / PHASE_MAX;
    let oriented = if board.white_to_move() {
        blended
    } else {
        -blended
    };

    // Small tempo bonus, proportional to how much material is still on.
    oriented + phase / 2
}
