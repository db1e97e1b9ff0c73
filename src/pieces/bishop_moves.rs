//! Bishop pseudo-legal move generation (diagonal rays).

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceColor, Position};
use crate::move_generation::piece_move::PieceMove;
use crate::pieces::piece::ray_moves;

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn bishop_moves(board: &Board, color: PieceColor, from: Position) -> Vec<PieceMove> {
    ray_moves(board, color, from, &DIAGONAL_DIRECTIONS)
}
