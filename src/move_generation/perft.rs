//! Perft: exhaustive legal-move tree counting.
//!
//! Walks every line to a fixed depth by probing moves on the live board and
//! undoing them again. Leaf counts double as an end-to-end check of the
//! generators, the self-check filter and the executor.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{GameState, PieceKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count the leaf positions `depth` plies below the current one. The board
/// is left exactly as it was found.
pub fn perft(board: &mut Board, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for (origin, piece_move) in board.legal_move_list() {
        let is_castle = board
            .piece_at_position(origin)
            .is_some_and(|piece| piece.kind() == PieceKind::King)
            && (piece_move.destination.column - origin.column).abs() == 2;

        let snapshot = board.probe_commit(origin.row, origin.column, &piece_move)?;

        if depth == 1 {
            let mut leaf = PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            };
            if piece_move.is_take {
                leaf.captures += 1;
            }
            if piece_move.en_passant_capture.is_some() {
                leaf.en_passant += 1;
            }
            if is_castle {
                leaf.castles += 1;
            }
            if piece_move.promotion.is_some() {
                leaf.promotions += 1;
            }
            match board.game_state() {
                GameState::Check => leaf.checks += 1,
                GameState::Checkmate => {
                    leaf.checks += 1;
                    leaf.checkmates += 1;
                }
                GameState::Ongoing | GameState::Stalemate => {}
            }
            total.merge(leaf);
        } else {
            total.merge(perft(board, depth - 1)?);
        }

        board.undo_probe(snapshot)?;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceColor, Position};
    use crate::pieces::piece::Piece;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut board = Board::new_game();
        let counts = perft(&mut board, 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_from_initial_position() {
        let mut board = Board::new_game();
        assert_eq!(perft(&mut board, 1).expect("perft should run").nodes, 20);
        assert_eq!(perft(&mut board, 2).expect("perft should run").nodes, 400);

        let depth_three = perft(&mut board, 3).expect("perft should run");
        assert_eq!(
            depth_three,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                en_passant: 0,
                castles: 0,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn perft_leaves_board_untouched() {
        let mut board = Board::new_game();
        let before = board.legal_move_list();
        perft(&mut board, 2).expect("perft should run");
        assert_eq!(board.legal_move_list(), before);
        assert_eq!(board.moves_played(), 0);
        assert_eq!(board.turn(), PieceColor::White);
        assert!(board.notation_log().is_empty());
        assert!(board.drain_events().is_empty());
    }

    #[test]
    fn perft_counts_castles_and_promotions() {
        let mut board = Board::from_pieces(
            PieceColor::White,
            &[
                (Position::new(7, 4), Piece::king(PieceColor::White)),
                (Position::new(7, 7), Piece::rook(PieceColor::White)),
                (Position::new(1, 0), Piece::pawn(PieceColor::White)),
                (Position::new(0, 5), Piece::king(PieceColor::Black)),
            ],
        )
        .expect("setup should be valid");

        let counts = perft(&mut board, 1).expect("perft should run");
        assert_eq!(counts.castles, 1);
        assert_eq!(counts.promotions, 4);
    }
}
