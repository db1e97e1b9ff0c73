//! Reversal of the most recent half-move.
//!
//! Undo restores everything `commit` changed: piece squares, captured
//! pieces, king and rook counters, promotions, and the en-passant window the
//! undone move closed.

use tracing::debug;

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::events::ChessEvent;
use crate::move_generation::legal_move_apply::castling_rook_squares;
use crate::move_generation::legal_move_generator::LegalMoves;
use crate::pieces::piece::Piece;

impl Board {
    /// Take back the last half-move. Returns `Ok(false)` when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> ChessResult<bool> {
        self.undo_internal(None)
    }

    /// Take back a probe commit, restoring the cache it returned.
    pub(crate) fn undo_probe(&mut self, snapshot: LegalMoves) -> ChessResult<()> {
        self.undo_internal(Some(snapshot)).map(|_| ())
    }

    fn undo_internal(&mut self, snapshot: Option<LegalMoves>) -> ChessResult<bool> {
        let Some(last) = self.history.last().copied() else {
            return Ok(false);
        };
        let origin = last.origin();
        let destination = last.destination();
        let mover_color = self.turn.opposite();

        let moved = self
            .piece_at_position(destination)
            .copied()
            .ok_or(ChessErrors::NoPieceAtDestination(destination))?;

        let castle = (moved.kind() == PieceKind::King && last.column_shift().abs() == 2)
            .then(|| castling_rook_squares(origin.row, destination.column, last.column_shift()));
        if let Some((_, rook_now)) = castle {
            if self.piece_at_position(rook_now).map(Piece::kind) != Some(PieceKind::Rook) {
                return Err(ChessErrors::CastleWithNonExistentRook(rook_now));
            }
        }

        self.history.pop();
        self.take_square(destination);

        let mut restored = if last.piece_move.promotion.is_some() {
            Piece::pawn(mover_color)
        } else {
            moved
        };
        match restored.kind() {
            PieceKind::King => {
                restored.decrease_times_moved();
                self.set_king_position(mover_color, origin);
                if let Some((rook_home, rook_now)) = castle {
                    if let Some(mut rook) = self.take_square(rook_now) {
                        rook.decrease_times_moved();
                        self.set_square(rook_home, Some(rook));
                    }
                }
            }
            PieceKind::Rook => restored.decrease_times_moved(),
            PieceKind::Pawn => restored.set_open_to_en_passant(false),
            _ => {}
        }
        self.set_square(origin, Some(restored));

        if let Some(captured) = last.captured_piece {
            let square = last.piece_move.en_passant_capture.unwrap_or(destination);
            self.set_square(square, Some(captured));
        }

        if let Some(square) = last.closed_en_passant {
            if let Some(piece) = self.piece_at_mut(square) {
                piece.set_open_to_en_passant(true);
            }
        }

        self.turn = mover_color;

        match snapshot {
            Some(legal_moves) => self.legal_moves = legal_moves,
            None => {
                self.calculate_legal_moves();
                self.notation.pop();
                let event = if self.is_check() {
                    ChessEvent::Check
                } else {
                    ChessEvent::TurnChanged(self.turn)
                };
                debug!(origin = %origin, destination = %destination, ?event, "undid move");
                self.events.dispatch(event);
            }
        }

        Ok(true)
    }
}
