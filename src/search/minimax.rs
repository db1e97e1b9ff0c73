//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The search plays candidate moves on the live board through probe commits
//! and takes each one back with the cache snapshot the probe returned, so the
//! board is unchanged once the search returns. Nodes where the searching side
//! is to move maximise, the others minimise. Leaves are scored from the
//! searching side's point of view.

use std::time::Instant;

use tracing::{info, instrument, trace};

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceColor;
use crate::move_generation::piece_move::BestMove;
use crate::search::board_scoring::evaluate_for;

/// Starting value of a maximising node (and of the root).
pub const MAX_NODE_START: i32 = -9999;
/// Starting value of a minimising node.
pub const MIN_NODE_START: i32 = 9999;
/// Initial alpha-beta window.
pub const ALPHA_START: i32 = -10000;
pub const BETA_START: i32 = 10000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched, counting the root move. Zero is treated as one.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 4 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<BestMove>,
    pub best_score: i32,
    pub depth: u8,
    pub nodes: u64,
}

/// Pick the best move for `side`, which must be the side to move.
///
/// Root moves are tried in cache order and a later move replaces an earlier
/// one on an equal score. Moves whose probe commit fails are skipped.
#[instrument(skip_all, fields(side = %side, depth = config.depth))]
pub fn search_best_move(
    board: &mut Board,
    side: PieceColor,
    config: &SearchConfig,
) -> ChessResult<SearchResult> {
    if board.turn() != side {
        return Err(ChessErrors::NotSideToMove(side));
    }

    let start = Instant::now();
    let depth = config.depth.max(1);
    let mut nodes = 0u64;
    let mut best_move = None;
    let mut best_score = MAX_NODE_START;

    for (origin, piece_move) in board.legal_move_list() {
        let snapshot = match board.probe_commit(origin.row, origin.column, &piece_move) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                trace!(%origin, %err, "skipping root move");
                continue;
            }
        };
        nodes += 1;

        let value = minimax(board, depth - 1, side, ALPHA_START, BETA_START, &mut nodes);
        board.undo_probe(snapshot)?;
        let value = value?;

        if value >= best_score {
            best_score = value;
            best_move = Some(BestMove::new(origin, piece_move));
        }
    }

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        nodes,
        score = best_score,
        "time to determine best move"
    );

    Ok(SearchResult {
        best_move,
        best_score,
        depth,
        nodes,
    })
}

/// Score the current position `depth` plies deep for `searcher`.
pub fn minimax(
    board: &mut Board,
    depth: u8,
    searcher: PieceColor,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> ChessResult<i32> {
    if depth == 0 {
        return Ok(evaluate_for(board, searcher));
    }

    let moves = board.legal_move_list();
    if moves.is_empty() {
        return Ok(evaluate_for(board, searcher));
    }

    let maximizing = board.turn() == searcher;
    let mut best_value = if maximizing {
        MAX_NODE_START
    } else {
        MIN_NODE_START
    };

    for (origin, piece_move) in moves {
        let snapshot = match board.probe_commit(origin.row, origin.column, &piece_move) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                trace!(%origin, %err, depth, "skipping branch");
                continue;
            }
        };
        *nodes += 1;

        let value = minimax(board, depth - 1, searcher, alpha, beta, nodes);
        board.undo_probe(snapshot)?;
        let value = value?;

        if maximizing {
            best_value = best_value.max(value);
            alpha = alpha.max(best_value);
        } else {
            best_value = best_value.min(value);
            beta = beta.min(best_value);
        }
        if beta <= alpha {
            break;
        }
    }

    Ok(best_value)
}

impl Board {
    /// Best move for `side` with the default search depth. `None` only when
    /// `side` has no legal moves.
    pub fn best_move(&mut self, side: PieceColor) -> ChessResult<Option<BestMove>> {
        self.best_move_with_config(side, &SearchConfig::default())
    }

    pub fn best_move_with_config(
        &mut self,
        side: PieceColor,
        config: &SearchConfig,
    ) -> ChessResult<Option<BestMove>> {
        search_best_move(self, side, config).map(|result| result.best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Position;
    use crate::move_generation::piece_move::PieceMove;
    use crate::pieces::piece::Piece;

    #[test]
    fn search_leaves_the_board_untouched() {
        let mut board = Board::new_game();
        board
            .commit(6, 4, &PieceMove::new(4, 4, false))
            .expect("e4 is legal");
        board.drain_events();
        let moves_before = board.legal_move_list();
        let notation_before = board.notation_log().to_vec();

        let best = board
            .best_move_with_config(PieceColor::Black, &SearchConfig { depth: 3 })
            .expect("search should run");

        assert!(best.is_some());
        assert_eq!(board.legal_move_list(), moves_before);
        assert_eq!(board.moves_played(), 1);
        assert_eq!(board.turn(), PieceColor::Black);
        assert_eq!(board.notation_log(), notation_before.as_slice());
        assert!(board.drain_events().is_empty());
    }

    #[test]
    fn equal_scores_keep_the_later_move() {
        let mut board = Board::new_game();
        let mut scored = Vec::new();
        for (origin, piece_move) in board.legal_move_list() {
            board
                .commit(origin.row, origin.column, &piece_move)
                .expect("cached move is legal");
            scored.push((origin, piece_move, evaluate_for(&board, PieceColor::White)));
            board.undo().expect("undo should succeed");
        }
        let top = scored.iter().map(|(_, _, score)| *score).max().expect("white has moves");
        let tied: Vec<_> = scored.iter().filter(|(_, _, score)| *score == top).collect();
        // Nc3 and Nf3 gain the same positional bonus.
        assert_eq!(tied.len(), 2);

        let result = search_best_move(&mut board, PieceColor::White, &SearchConfig { depth: 1 })
            .expect("search should run");
        let best = result.best_move.expect("white has moves");
        assert_eq!(result.best_score, top);
        assert_eq!(best.origin(), Position::new(7, 6));
        assert_eq!(best.piece_move, PieceMove::new(5, 5, false));
        assert_eq!((best.origin(), best.piece_move), (tied[1].0, tied[1].1));
    }

    #[test]
    fn searching_out_of_turn_is_an_error() {
        let mut board = Board::new_game();
        assert_eq!(
            board.best_move(PieceColor::Black),
            Err(ChessErrors::NotSideToMove(PieceColor::Black))
        );
    }

    #[test]
    fn takes_a_hanging_queen() {
        let mut board = Board::from_pieces(
            PieceColor::Black,
            &[
                (Position::new(7, 7), Piece::king(PieceColor::White)),
                (Position::new(4, 3), Piece::queen(PieceColor::White)),
                (Position::new(0, 0), Piece::king(PieceColor::Black)),
                (Position::new(0, 3), Piece::rook(PieceColor::Black)),
            ],
        )
        .expect("setup should be valid");

        let best = board
            .best_move_with_config(PieceColor::Black, &SearchConfig { depth: 2 })
            .expect("search should run")
            .expect("black has moves");
        assert_eq!(best.origin(), Position::new(0, 3));
        assert_eq!(best.piece_move, PieceMove::new(4, 3, true));
    }

    #[test]
    fn finds_mate_in_one() {
        // Back-rank mate: the rook slides to the eighth rank.
        let mut board = Board::from_pieces(
            PieceColor::White,
            &[
                (Position::new(7, 6), Piece::king(PieceColor::White)),
                (Position::new(7, 0), Piece::rook(PieceColor::White)),
                (Position::new(0, 6), Piece::king(PieceColor::Black)),
                (Position::new(1, 5), Piece::pawn(PieceColor::Black)),
                (Position::new(1, 6), Piece::pawn(PieceColor::Black)),
                (Position::new(1, 7), Piece::pawn(PieceColor::Black)),
            ],
        )
        .expect("setup should be valid");

        let result = search_best_move(&mut board, PieceColor::White, &SearchConfig { depth: 1 })
            .expect("search should run");
        let best = result.best_move.expect("white has moves");
        assert_eq!(best.origin(), Position::new(7, 0));
        assert_eq!(best.piece_move.destination, Position::new(0, 0));
        assert!(result.nodes > 0);
    }

    #[test]
    fn no_moves_means_no_best_move() {
        let mut board = Board::from_pieces(
            PieceColor::Black,
            &[
                (Position::new(2, 1), Piece::king(PieceColor::White)),
                (Position::new(1, 2), Piece::queen(PieceColor::White)),
                (Position::new(0, 0), Piece::king(PieceColor::Black)),
            ],
        )
        .expect("setup should be valid");
        assert!(board.legal_moves().is_empty());
        assert_eq!(board.best_move(PieceColor::Black), Ok(None));
    }
}
