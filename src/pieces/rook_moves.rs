//! Rook pseudo-legal move generation (orthogonal rays).

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceColor, Position};
use crate::move_generation::piece_move::PieceMove;
use crate::pieces::piece::ray_moves;

pub const STRAIGHT_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn rook_moves(board: &Board, color: PieceColor, from: Position) -> Vec<PieceMove> {
    ray_moves(board, color, from, &STRAIGHT_DIRECTIONS)
}
