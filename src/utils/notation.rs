//! Short algebraic notation for moves about to be committed.
//!
//! The base text is built from the position before the move; the check,
//! checkmate or stalemate suffix is appended once the move is done.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{GameState, PieceKind, Position};
use crate::move_generation::piece_move::PieceMove;
use crate::utils::algebraic::{column_symbol, rank_number, square_to_algebraic};

pub const KING_SIDE_CASTLE: &str = "0-0";
pub const QUEEN_SIDE_CASTLE: &str = "0-0-0";

/// Notation for playing `piece_move` from `origin` in the board's current
/// position, without the game-state suffix.
pub fn move_notation(board: &Board, origin: Position, piece_move: &PieceMove) -> ChessResult<String> {
    let piece = board
        .piece_at_position(origin)
        .ok_or(ChessErrors::NoPiece(origin))?;

    let column_shift = piece_move.destination.column - origin.column;
    if piece.kind() == PieceKind::King && column_shift.abs() == 2 {
        let castle = if column_shift > 0 {
            KING_SIDE_CASTLE
        } else {
            QUEEN_SIDE_CASTLE
        };
        return Ok(castle.to_owned());
    }

    let mut text = String::from(piece.symbol());
    text.push_str(&disambiguation(board, origin, piece_move.destination));
    if piece_move.is_take {
        text.push('x');
    }
    text.push_str(&square_to_algebraic(piece_move.destination)?);
    if let Some(kind) = piece_move.promotion {
        text.push_str(kind.symbol());
    }
    Ok(text)
}

/// Origin file and/or rank needed to tell the mover apart from other pieces
/// of the same kind that can also reach `destination`.
fn disambiguation(board: &Board, origin: Position, destination: Position) -> String {
    let Some(kind) = board.piece_at_position(origin).map(|piece| piece.kind()) else {
        return String::new();
    };

    let rivals: Vec<Position> = board
        .legal_move_list()
        .into_iter()
        .filter(|(from, piece_move)| *from != origin && piece_move.destination == destination)
        .filter(|(from, _)| {
            board
                .piece_at_position(*from)
                .is_some_and(|piece| piece.kind() == kind)
        })
        .map(|(from, _)| from)
        .collect();

    if rivals.is_empty() {
        return String::new();
    }

    let file = column_symbol(origin.column).to_string();
    let rank = rank_number(origin.row).to_string();
    let shares_row = rivals.iter().any(|rival| rival.row == origin.row);
    let shares_column = rivals.iter().any(|rival| rival.column == origin.column);

    match (shares_row, shares_column) {
        (true, true) => file + &rank,
        (true, false) => file,
        (false, true) => rank,
        (false, false) => file,
    }
}

/// Suffix appended after the move: `+` check, `#` checkmate, `$` stalemate.
pub const fn game_state_suffix(state: GameState) -> &'static str {
    match state {
        GameState::Ongoing => "",
        GameState::Check => "+",
        GameState::Checkmate => "#",
        GameState::Stalemate => "$",
    }
}
