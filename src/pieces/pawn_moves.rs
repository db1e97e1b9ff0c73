//! Pawn pseudo-legal move generation.
//!
//! Covers single and double advances, diagonal captures, promotion onto the
//! far rank (all four alternatives), and en passant against a neighbouring
//! pawn that just made a double advance.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceColor, Position, PromotionKind, BOARD_SIZE};
use crate::move_generation::piece_move::PieceMove;

/// Row a pawn of `color` must stand on to capture en passant.
#[inline]
pub const fn en_passant_row(color: PieceColor) -> i8 {
    match color {
        PieceColor::White => 3,
        PieceColor::Black => BOARD_SIZE - 4,
    }
}

/// Row a pawn of `color` starts the game on.
#[inline]
pub const fn starting_row(color: PieceColor) -> i8 {
    match color {
        PieceColor::White => BOARD_SIZE - 2,
        PieceColor::Black => 1,
    }
}

pub fn pawn_moves(board: &Board, color: PieceColor, from: Position) -> Vec<PieceMove> {
    let mut moves = Vec::new();
    let direction = color.pawn_direction();

    let Some(one_forward) = from.offset(direction, 0) else {
        return moves;
    };

    let one_forward_is_free = board.piece_at_position(one_forward).is_none();
    if one_forward_is_free {
        push_with_promotions(&mut moves, one_forward, false);

        if from.row == starting_row(color) {
            if let Some(two_forward) = one_forward.offset(direction, 0) {
                if board.piece_at_position(two_forward).is_none() {
                    moves.push(PieceMove::new(two_forward.row, two_forward.column, false));
                }
            }
        }
    }

    for d_column in [-1, 1] {
        let Some(diagonal) = from.offset(direction, d_column) else {
            continue;
        };
        if let Some(target) = board.piece_at_position(diagonal) {
            if target.color() != color {
                push_with_promotions(&mut moves, diagonal, true);
            }
        }
    }

    if from.row == en_passant_row(color) {
        for d_column in [-1, 1] {
            let Some(beside) = from.offset(0, d_column) else {
                continue;
            };
            let Some(neighbour) = board.piece_at_position(beside) else {
                continue;
            };
            if neighbour.color() != color && neighbour.is_open_to_en_passant() {
                moves.push(PieceMove::en_passant(
                    from.row + direction,
                    beside.column,
                    beside,
                ));
            }
        }
    }

    moves
}

fn push_with_promotions(moves: &mut Vec<PieceMove>, target: Position, is_take: bool) {
    if target.row > 0 && target.row < BOARD_SIZE - 1 {
        moves.push(PieceMove::new(target.row, target.column, is_take));
    } else {
        for kind in PromotionKind::ALL {
            moves.push(PieceMove::promotion(target.row, target.column, is_take, kind));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::piece::Piece;

    fn board_with(turn: PieceColor, extra: &[(Position, Piece)]) -> Board {
        let mut pieces = vec![
            (Position::new(7, 4), Piece::king(PieceColor::White)),
            (Position::new(0, 4), Piece::king(PieceColor::Black)),
        ];
        pieces.extend_from_slice(extra);
        Board::from_pieces(turn, &pieces).expect("setup should be valid")
    }

    #[test]
    fn starting_pawn_has_single_and_double_advance() {
        let board = Board::new_game();
        let moves = pawn_moves(&board, PieceColor::White, Position::new(6, 4));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&PieceMove::new(5, 4, false)));
        assert!(moves.contains(&PieceMove::new(4, 4, false)));
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let board = board_with(
            PieceColor::White,
            &[
                (Position::new(6, 0), Piece::pawn(PieceColor::White)),
                (Position::new(5, 0), Piece::knight(PieceColor::Black)),
            ],
        );
        assert!(pawn_moves(&board, PieceColor::White, Position::new(6, 0)).is_empty());
    }

    #[test]
    fn promotion_offers_all_four_pieces() {
        let board = board_with(
            PieceColor::White,
            &[
                (Position::new(1, 0), Piece::pawn(PieceColor::White)),
                (Position::new(0, 1), Piece::rook(PieceColor::Black)),
            ],
        );
        let moves = pawn_moves(&board, PieceColor::White, Position::new(1, 0));
        assert_eq!(moves.len(), 8);
        assert_eq!(moves.iter().filter(|m| m.is_take).count(), 4);
        assert!(moves.iter().all(|m| m.promotion.is_some()));
    }

    #[test]
    fn en_passant_requires_open_flag() {
        let mut open = Piece::pawn(PieceColor::Black);
        open.set_open_to_en_passant(true);
        let board = board_with(
            PieceColor::White,
            &[
                (Position::new(3, 2), Piece::pawn(PieceColor::White)),
                (Position::new(3, 3), open),
                (Position::new(3, 1), Piece::pawn(PieceColor::Black)),
            ],
        );
        let moves = pawn_moves(&board, PieceColor::White, Position::new(3, 2));
        assert!(moves.contains(&PieceMove::en_passant(2, 3, Position::new(3, 3))));
        assert!(!moves
            .iter()
            .any(|m| m.en_passant_capture == Some(Position::new(3, 1))));
    }
}
