//! King pseudo-legal move generation.
//!
//! Single steps exclude any square touching the enemy king, which keeps the
//! two kings apart without help from the self-check filter. Castling is
//! offered when the king and a same-colored rook on the back rank have never
//! moved, the king is not in check, and the squares between them are empty.
//! Whether the king crosses or lands on an attacked square is decided later
//! by the legality engine.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceColor, PieceKind, Position, BOARD_SIZE};
use crate::move_generation::piece_move::PieceMove;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Column the king starts on and castles from.
pub const KING_START_COLUMN: i8 = 4;

/// Rook columns paired with castling: queen side, then king side.
pub const CASTLING_ROOK_COLUMNS: [i8; 2] = [0, BOARD_SIZE - 1];

pub fn king_moves(
    board: &Board,
    color: PieceColor,
    times_moved: u32,
    from: Position,
) -> Vec<PieceMove> {
    let mut moves = Vec::new();

    for (d_row, d_column) in KING_OFFSETS {
        let Some(target) = from.offset(d_row, d_column) else {
            continue;
        };
        if is_next_to_enemy_king(board, color, target) {
            continue;
        }
        match board.piece_at_position(target) {
            None => moves.push(PieceMove::new(target.row, target.column, false)),
            Some(other) if other.color() != color => {
                moves.push(PieceMove::new(target.row, target.column, true))
            }
            Some(_) => {}
        }
    }

    if times_moved == 0
        && from.row == color.back_rank()
        && from.column == KING_START_COLUMN
        && !board.is_check()
    {
        for rook_column in CASTLING_ROOK_COLUMNS {
            let Some(rook) = board.piece_at(from.row, rook_column) else {
                continue;
            };
            if rook.kind() != PieceKind::Rook || rook.color() != color || rook.times_moved() != 0 {
                continue;
            }
            if pieces_between(board, from, rook_column) {
                continue;
            }
            let destination = if rook_column < from.column {
                from.column - 2
            } else {
                from.column + 2
            };
            moves.push(PieceMove::new(from.row, destination, false));
        }
    }

    moves
}

fn is_next_to_enemy_king(board: &Board, color: PieceColor, target: Position) -> bool {
    KING_OFFSETS.iter().any(|&(d_row, d_column)| {
        target
            .offset(d_row, d_column)
            .and_then(|square| board.piece_at_position(square))
            .is_some_and(|piece| piece.kind() == PieceKind::King && piece.color() != color)
    })
}

fn pieces_between(board: &Board, king: Position, rook_column: i8) -> bool {
    let low = king.column.min(rook_column) + 1;
    let high = king.column.max(rook_column);
    (low..high).any(|column| board.piece_at(king.row, column).is_some())
}
