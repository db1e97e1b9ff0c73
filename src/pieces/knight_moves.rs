//! Knight pseudo-legal move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceColor, Position};
use crate::move_generation::piece_move::PieceMove;
use crate::pieces::piece::step_moves;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub fn knight_moves(board: &Board, color: PieceColor, from: Position) -> Vec<PieceMove> {
    step_moves(board, color, from, &KNIGHT_OFFSETS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::piece::Piece;

    #[test]
    fn opening_knight_has_two_targets() {
        let board = Board::new_game();
        let moves = knight_moves(&board, PieceColor::White, Position::new(7, 1));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&PieceMove::new(5, 0, false)));
        assert!(moves.contains(&PieceMove::new(5, 2, false)));
    }

    #[test]
    fn centralised_knight_captures_enemy_but_not_friend() {
        let board = Board::from_pieces(
            PieceColor::White,
            &[
                (Position::new(7, 7), Piece::king(PieceColor::White)),
                (Position::new(0, 7), Piece::king(PieceColor::Black)),
                (Position::new(4, 3), Piece::knight(PieceColor::White)),
                (Position::new(2, 2), Piece::pawn(PieceColor::Black)),
                (Position::new(2, 4), Piece::pawn(PieceColor::White)),
            ],
        )
        .expect("setup should be valid");
        let moves = knight_moves(&board, PieceColor::White, Position::new(4, 3));
        assert_eq!(moves.len(), 7);
        assert!(moves.contains(&PieceMove::new(2, 2, true)));
        assert!(!moves.iter().any(|m| m.destination == Position::new(2, 4)));
    }
}
