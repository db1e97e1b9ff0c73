//! Square-name conversions between grid coordinates and algebraic form.
//!
//! Row 0 is rank 8, so the rank digit of a square is `8 - row`.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{Position, BOARD_SIZE};

/// File letters indexed by column.
pub const COLUMN_SYMBOLS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// File letter of a column (`0 -> 'a'`).
#[inline]
pub fn column_symbol(column: i8) -> char {
    COLUMN_SYMBOLS[column.clamp(0, BOARD_SIZE - 1) as usize]
}

/// Rank number of a row (`0 -> 8`, `7 -> 1`).
#[inline]
pub const fn rank_number(row: i8) -> i8 {
    BOARD_SIZE - row
}

/// Convert algebraic notation (for example: "e4") to a board position.
pub fn algebraic_to_square(square: &str) -> Result<Position, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let column = (file - b'a') as i8;
    let row = BOARD_SIZE - (rank - b'0') as i8;
    Ok(Position::new(row, column))
}

/// Convert a board position to algebraic notation (for example: "e4").
pub fn square_to_algebraic(position: Position) -> Result<String, ChessErrors> {
    if !position.is_valid() {
        return Err(ChessErrors::InvalidAlgebraicString(format!(
            "({}, {})",
            position.row, position.column
        )));
    }

    Ok(format!(
        "{}{}",
        column_symbol(position.column),
        rank_number(position.row)
    ))
}

impl Position {
    /// Algebraic name of the square, e.g. `e4`.
    pub fn to_algebraic(self) -> Result<String, ChessErrors> {
        square_to_algebraic(self)
    }

    /// Parse an algebraic square name, e.g. `e4`.
    pub fn from_algebraic(square: &str) -> Result<Position, ChessErrors> {
        algebraic_to_square(square)
    }
}
