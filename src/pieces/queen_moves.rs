//! Queen pseudo-legal move generation (diagonal and orthogonal rays).

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceColor, Position};
use crate::move_generation::piece_move::PieceMove;
use crate::pieces::piece::ray_moves;

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub fn queen_moves(board: &Board, color: PieceColor, from: Position) -> Vec<PieceMove> {
    ray_moves(board, color, from, &QUEEN_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::piece::Piece;

    #[test]
    fn corner_queen_covers_three_rays() {
        let board = Board::from_pieces(
            PieceColor::Black,
            &[
                (Position::new(7, 4), Piece::king(PieceColor::White)),
                (Position::new(0, 4), Piece::king(PieceColor::Black)),
                (Position::new(0, 0), Piece::queen(PieceColor::Black)),
            ],
        )
        .expect("setup should be valid");
        let moves = queen_moves(&board, PieceColor::Black, Position::new(0, 0));
        // Three squares toward the own king, seven down the file, seven down
        // the long diagonal.
        assert_eq!(moves.len(), 17);
        assert!(moves.iter().all(|m| !m.is_take));
    }
}
