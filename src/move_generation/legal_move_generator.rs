//! Full legal move generation.
//!
//! Runs every pseudo-legal generator for the side to move, drops the moves
//! that leave the mover's own king attacked, and keeps only origin squares
//! with at least one surviving move.

use std::collections::BTreeMap;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Position, BOARD_SIZE};
use crate::move_generation::piece_move::PieceMove;

/// Legal moves keyed by origin row, then origin column. Iteration is
/// row-major, which fixes the order the search enumerates moves in.
pub type LegalMoves = BTreeMap<i8, BTreeMap<i8, Vec<PieceMove>>>;

/// Flatten the cache into `(origin, move)` pairs in iteration order.
pub fn flatten_legal_moves(legal_moves: &LegalMoves) -> Vec<(Position, PieceMove)> {
    legal_moves
        .iter()
        .flat_map(|(&row, columns)| {
            columns.iter().flat_map(move |(&column, moves)| {
                moves
                    .iter()
                    .map(move |piece_move| (Position::new(row, column), *piece_move))
            })
        })
        .collect()
}

impl Board {
    /// Legal moves of the piece on `(row, column)` in the current position,
    /// computed without consulting the cache. Empty for empty squares and
    /// for pieces of the side not to move.
    pub fn compute_legal_moves_for(&self, row: i8, column: i8) -> Vec<PieceMove> {
        let Some(piece) = self.piece_at(row, column) else {
            return Vec::new();
        };
        if piece.color() != self.turn {
            return Vec::new();
        }
        piece
            .possible_moves(self, row, column)
            .into_iter()
            .filter(|piece_move| !self.would_cause_self_check(row, column, piece_move))
            .collect()
    }

    pub(crate) fn compute_legal_moves(&self) -> LegalMoves {
        let mut legal_moves = LegalMoves::new();
        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                let moves = self.compute_legal_moves_for(row, column);
                if !moves.is_empty() {
                    legal_moves.entry(row).or_default().insert(column, moves);
                }
            }
        }
        legal_moves
    }

    /// Rebuild the legal-move cache for the side to move.
    pub(crate) fn calculate_legal_moves(&mut self) {
        self.legal_moves = self.compute_legal_moves();
    }

    /// Rebuild the cache and hand back the one it replaced.
    pub(crate) fn replace_legal_moves(&mut self) -> LegalMoves {
        let fresh = self.compute_legal_moves();
        std::mem::replace(&mut self.legal_moves, fresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceColor;
    use crate::pieces::piece::Piece;

    #[test]
    fn opening_has_sixteen_pawn_and_four_knight_moves() {
        let board = Board::new_game();
        let all = flatten_legal_moves(board.legal_moves());
        assert_eq!(all.len(), 20);
        let pawn_moves = all
            .iter()
            .filter(|(origin, _)| origin.row == 6)
            .count();
        assert_eq!(pawn_moves, 16);
        assert!(board.legal_moves().keys().all(|&row| row == 6 || row == 7));
    }

    #[test]
    fn only_one_piece_can_answer_check() {
        // Black rook gives check down the e-file; only the white bishop can
        // capture it and the king is boxed in by its own pieces.
        let board = Board::from_pieces(
            PieceColor::White,
            &[
                (Position::new(7, 4), Piece::king(PieceColor::White)),
                (Position::new(7, 3), Piece::rook(PieceColor::White)),
                (Position::new(7, 5), Piece::rook(PieceColor::White)),
                (Position::new(6, 3), Piece::pawn(PieceColor::White)),
                (Position::new(6, 5), Piece::pawn(PieceColor::White)),
                (Position::new(5, 2), Piece::bishop(PieceColor::White)),
                (Position::new(3, 4), Piece::rook(PieceColor::Black)),
                (Position::new(0, 0), Piece::king(PieceColor::Black)),
            ],
        )
        .expect("setup should be valid");

        assert!(board.is_check());
        let all = flatten_legal_moves(board.legal_moves());
        assert_eq!(all.len(), 1, "unexpected legal moves: {all:?}");
        assert_eq!(board.legal_moves().len(), 1);
        let (origin, piece_move) = all[0];
        assert_eq!(origin, Position::new(5, 2));
        assert_eq!(piece_move.destination, Position::new(3, 4));
        assert!(piece_move.is_take);
    }

    #[test]
    fn cache_holds_only_squares_with_moves() {
        let board = Board::new_game();
        for (row, columns) in board.legal_moves() {
            for (column, moves) in columns {
                assert!(!moves.is_empty());
                let piece = board.piece_at(*row, *column).expect("origin is occupied");
                assert_eq!(piece.color(), PieceColor::White);
            }
        }
        assert!(board.legal_moves_from(7, 0).is_none());
    }
}
