//! Static board evaluation used at the leaves of the search.
//!
//! Scores are White-positive: every piece contributes its material and
//! square bonus (negative for Black), and a side in check or checkmated to
//! move is penalised.

use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceColor;

/// Penalty for the side to move being in check.
pub const CHECK_PENALTY: i32 = 1000;
/// Penalty for the side to move being checkmated.
pub const CHECKMATE_PENALTY: i32 = 2000;

/// Sum of piece values over the whole grid, White-positive.
pub fn material_and_position(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(position, piece)| piece.value(position.row, position.column))
        .sum()
}

/// Full evaluation, White-positive.
pub fn evaluate_board(board: &Board) -> i32 {
    let mut value = material_and_position(board);

    if board.is_check() {
        let penalty = if board.legal_moves().is_empty() {
            CHECKMATE_PENALTY
        } else {
            CHECK_PENALTY
        };
        value -= penalty * board.turn().sign();
    }

    value
}

/// Evaluation from `side`'s point of view: higher is better for `side`.
#[inline]
pub fn evaluate_for(board: &Board, side: PieceColor) -> i32 {
    evaluate_board(board) * side.sign()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Position;
    use crate::move_generation::piece_move::PieceMove;
    use crate::pieces::piece::Piece;

    #[test]
    fn initial_position_is_balanced() {
        let board = Board::new_game();
        assert_eq!(evaluate_board(&board), 0);
        assert_eq!(evaluate_for(&board, PieceColor::Black), 0);
    }

    #[test]
    fn extra_material_favours_its_owner() {
        let board = Board::from_pieces(
            PieceColor::White,
            &[
                (Position::new(7, 4), Piece::king(PieceColor::White)),
                (Position::new(4, 3), Piece::queen(PieceColor::White)),
                (Position::new(0, 0), Piece::king(PieceColor::Black)),
            ],
        )
        .expect("setup should be valid");
        assert!(evaluate_board(&board) > 0);
        assert!(evaluate_for(&board, PieceColor::Black) < 0);
    }

    #[test]
    fn check_and_mate_terms_hit_the_side_to_move() {
        let mut board = Board::new_game();
        for (row, column, piece_move) in [
            (6, 5, PieceMove::new(5, 5, false)),
            (1, 4, PieceMove::new(3, 4, false)),
            (6, 6, PieceMove::new(4, 6, false)),
        ] {
            board.commit(row, column, &piece_move).expect("move is legal");
        }
        let before_mate = material_and_position(&board);
        board
            .commit(0, 3, &PieceMove::new(4, 7, false))
            .expect("mate is legal");

        let material = material_and_position(&board);
        assert_ne!(material, before_mate);
        assert_eq!(evaluate_board(&board), material - CHECKMATE_PENALTY);
    }

    #[test]
    fn check_penalty_for_black_is_positive() {
        let board = Board::from_pieces(
            PieceColor::Black,
            &[
                (Position::new(7, 4), Piece::king(PieceColor::White)),
                (Position::new(3, 0), Piece::rook(PieceColor::White)),
                (Position::new(0, 0), Piece::king(PieceColor::Black)),
            ],
        )
        .expect("setup should be valid");
        assert!(board.is_check());
        assert_eq!(
            evaluate_board(&board),
            material_and_position(&board) + CHECK_PENALTY
        );
    }
}
