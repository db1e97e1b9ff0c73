//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by board operations.
//! Variants fall into two groups:
//! - caller-input errors (`NoPiece`, `NoLegalMoves`, `NotALegalMove`,
//!   `NotSideToMove`, `InvalidAlgebraicString`, `InvalidSetup`) are raised
//!   before any mutation and can be retried with corrected input;
//! - invariant violations (`CastleWithNonExistentRook`,
//!   `NoPieceAtDestination`) mean the board reached an impossible state and
//!   the game instance should be discarded.

use thiserror::Error;

use crate::game_state::chess_types::{PieceColor, Position};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// No piece of the side to move stands on the origin square.
    #[error("no piece of the side to move at {0}")]
    NoPiece(Position),

    /// The legal-move cache has no entry for the origin square.
    #[error("no legal moves for the piece at {0}")]
    NoLegalMoves(Position),

    /// The origin square has legal moves, but not the submitted one.
    #[error("move to {destination} is not legal for the piece at {origin}")]
    NotALegalMove {
        origin: Position,
        destination: Position,
    },

    /// A castling king move found no rook where the rook must stand.
    ///
    /// Payload: the square the rook was expected on.
    #[error("castling expected a rook at {0}")]
    CastleWithNonExistentRook(Position),

    /// Undo found the destination of the last recorded move empty.
    #[error("no piece at {0}, the destination of a recorded move")]
    NoPieceAtDestination(Position),

    /// A search was requested for the side that is not to move.
    #[error("it is not {0}'s turn")]
    NotSideToMove(PieceColor),

    /// A square name such as `e4` failed to parse.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicString(String),

    /// A custom starting position violated a board invariant.
    #[error("invalid board setup: {0}")]
    InvalidSetup(String),
}

pub type ChessResult<T> = Result<T, ChessErrors>;
