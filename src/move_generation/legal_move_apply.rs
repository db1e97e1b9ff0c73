//! Move execution.
//!
//! `commit` validates a move against the legal-move cache, plays it on the
//! grid, records a history entry and rebuilds the cache. Real commits also
//! append notation and emit one event. Probe commits used by the search skip
//! both and hand back the replaced cache so the matching undo can restore it
//! without recomputing.

use tracing::debug;

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{GameState, PieceKind, Position, BOARD_SIZE};
use crate::game_state::events::ChessEvent;
use crate::game_state::full_move::FullMove;
use crate::move_generation::legal_move_generator::LegalMoves;
use crate::move_generation::piece_move::PieceMove;
use crate::pieces::pawn_moves::en_passant_row;
use crate::pieces::piece::Piece;
use crate::utils::notation::{game_state_suffix, move_notation};

/// Rook squares for a castle by `column_shift` (`2` or `-2`) from a king on
/// `row`: where the rook stands now and where it lands.
pub(crate) fn castling_rook_squares(row: i8, king_destination: i8, column_shift: i8) -> (Position, Position) {
    if column_shift > 0 {
        (
            Position::new(row, BOARD_SIZE - 1),
            Position::new(row, king_destination - 1),
        )
    } else {
        (Position::new(row, 0), Position::new(row, king_destination + 1))
    }
}

impl Board {
    /// Play `piece_move` for the piece on `(row, column)`.
    ///
    /// The move must appear in the legal-move cache for that square. Nothing
    /// is changed when an error is returned.
    pub fn commit(&mut self, row: i8, column: i8, piece_move: &PieceMove) -> ChessResult<()> {
        self.commit_internal(row, column, piece_move, true)
            .map(|_| ())
    }

    /// Commit without notation or events. Returns the legal-move cache of the
    /// position before the move, to be passed back to [`Board::undo_probe`].
    pub(crate) fn probe_commit(
        &mut self,
        row: i8,
        column: i8,
        piece_move: &PieceMove,
    ) -> ChessResult<LegalMoves> {
        self.commit_internal(row, column, piece_move, false)
    }

    /// Check a move against the cache and the castling configuration.
    /// Returns the moving piece.
    fn validate_commit(&self, origin: Position, piece_move: &PieceMove) -> ChessResult<Piece> {
        let mover = self
            .piece_at_position(origin)
            .copied()
            .filter(|piece| piece.color() == self.turn)
            .ok_or(ChessErrors::NoPiece(origin))?;

        let moves = self
            .legal_moves_from(origin.row, origin.column)
            .ok_or(ChessErrors::NoLegalMoves(origin))?;
        if !moves.contains(piece_move) {
            return Err(ChessErrors::NotALegalMove {
                origin,
                destination: piece_move.destination,
            });
        }

        let column_shift = piece_move.destination.column - origin.column;
        if mover.kind() == PieceKind::King && column_shift.abs() == 2 {
            let (rook_square, _) =
                castling_rook_squares(origin.row, piece_move.destination.column, column_shift);
            let rook_present = self.piece_at_position(rook_square).is_some_and(|piece| {
                piece.kind() == PieceKind::Rook && piece.color() == mover.color()
            });
            if !rook_present {
                return Err(ChessErrors::CastleWithNonExistentRook(rook_square));
            }
        }

        Ok(mover)
    }

    fn commit_internal(
        &mut self,
        row: i8,
        column: i8,
        piece_move: &PieceMove,
        is_real: bool,
    ) -> ChessResult<LegalMoves> {
        let origin = Position::new(row, column);
        let mover = self.validate_commit(origin, piece_move)?;
        let notation = if is_real {
            Some(move_notation(self, origin, piece_move)?)
        } else {
            None
        };

        let destination = piece_move.destination;
        let captured_piece = self
            .piece_at_position(piece_move.en_passant_capture.unwrap_or(destination))
            .copied();

        self.take_square(origin);
        let mut moved = mover;
        match mover.kind() {
            PieceKind::King => {
                moved.increase_times_moved();
                self.set_king_position(mover.color(), destination);
                let column_shift = destination.column - column;
                if column_shift.abs() == 2 {
                    let (rook_from, rook_to) =
                        castling_rook_squares(row, destination.column, column_shift);
                    let mut rook = self
                        .take_square(rook_from)
                        .ok_or(ChessErrors::CastleWithNonExistentRook(rook_from))?;
                    rook.increase_times_moved();
                    self.set_square(rook_to, Some(rook));
                }
            }
            PieceKind::Pawn => {
                moved.set_open_to_en_passant((destination.row - row).abs() == 2);
                if let Some(captured) = piece_move.en_passant_capture {
                    self.set_square(captured, None);
                } else if let Some(kind) = piece_move.promotion {
                    moved = Piece::promoted(kind, mover.color());
                }
            }
            PieceKind::Rook => moved.increase_times_moved(),
            _ => {}
        }
        self.set_square(destination, Some(moved));

        // Only the pawn that just advanced two squares stays capturable.
        let mut closed_en_passant = None;
        for en_passant_rank in [en_passant_row(mover.color()), en_passant_row(mover.color().opposite())] {
            for file in 0..BOARD_SIZE {
                let square = Position::new(en_passant_rank, file);
                if square == destination {
                    continue;
                }
                if let Some(piece) = self.piece_at_mut(square) {
                    if piece.is_open_to_en_passant() {
                        piece.set_open_to_en_passant(false);
                        closed_en_passant = Some(square);
                    }
                }
            }
        }

        self.turn = self.turn.opposite();
        let caused_check = self.is_side_to_move_attacked();
        self.history.push(FullMove {
            from_row: row,
            from_column: column,
            piece_move: *piece_move,
            caused_check,
            captured_piece,
            closed_en_passant,
        });
        let previous_moves = self.replace_legal_moves();

        if let Some(mut text) = notation {
            let state = self.game_state();
            text.push_str(game_state_suffix(state));
            debug!(notation = %text, ?state, "committed move");
            self.notation.push(text);
            let event = match state {
                GameState::Check => ChessEvent::Check,
                GameState::Checkmate => ChessEvent::Checkmate,
                GameState::Stalemate => ChessEvent::Stalemate,
                GameState::Ongoing => ChessEvent::TurnChanged(self.turn),
            };
            self.events.dispatch(event);
        }

        Ok(previous_moves)
    }
}
