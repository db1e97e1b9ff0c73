//! Base material values and positional bonus tables.
//!
//! Tables are written from White's point of view with row 0 at the top
//! (rank 8). Black reads the same table mirrored vertically.

use crate::game_state::chess_types::{PieceColor, PieceKind, BOARD_SIZE};

pub type PieceSquareTable = [[i32; 8]; 8];

pub const PAWN_VALUE: i32 = 10;
pub const KNIGHT_VALUE: i32 = 30;
pub const BISHOP_VALUE: i32 = 30;
pub const ROOK_VALUE: i32 = 50;
pub const QUEEN_VALUE: i32 = 90;
pub const KING_VALUE: i32 = 900;

pub const PAWN_TABLE: PieceSquareTable = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 1, 1, 3, 3, 1, 1, 1],
    [0, 0, 0, 2, 2, 0, 0, 0],
    [1, -1, -1, 0, 0, -1, -1, 1],
    [1, 1, 1, -2, -2, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub const KNIGHT_TABLE: PieceSquareTable = [
    [-5, -4, -3, -3, -3, -3, -4, -5],
    [-4, -2, 0, 0, 0, 0, -2, -4],
    [-3, 0, 1, 2, 2, 1, 0, -3],
    [-3, 1, 2, 2, 2, 2, 1, -3],
    [-3, 0, 2, 2, 2, 2, 0, -3],
    [-3, 1, 1, 2, 2, 1, 1, -3],
    [-4, -2, 0, 1, 1, 0, -2, -4],
    [-5, -4, -3, -3, -3, -3, -4, -5],
];

pub const BISHOP_TABLE: PieceSquareTable = [
    [-2, -1, -1, -1, -1, -1, -1, -2],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [-1, 0, 1, 1, 1, 1, 0, -1],
    [-1, 1, 1, 1, 1, 1, 1, -1],
    [-1, 0, 1, 1, 1, 1, 0, -1],
    [-1, 1, 1, 1, 1, 1, 1, -1],
    [-1, 1, 0, 0, 0, 0, 1, -1],
    [-2, -1, -1, -1, -1, -1, -1, -2],
];

pub const ROOK_TABLE: PieceSquareTable = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [0, 0, 0, 1, 1, 0, 0, 0],
];

pub const QUEEN_TABLE: PieceSquareTable = [
    [-2, -1, -1, -1, -1, -1, -1, -2],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [-1, 0, 1, 1, 1, 1, 0, -1],
    [-1, 0, 1, 1, 1, 1, 0, -1],
    [0, 0, 1, 1, 1, 1, 0, -1],
    [-1, 1, 1, 1, 1, 1, 0, -1],
    [-1, 0, 1, 0, 0, 0, 0, -1],
    [-2, -1, -1, -1, -1, -1, -1, -2],
];

pub const KING_TABLE: PieceSquareTable = [
    [-3, -4, -4, -5, -5, -4, -4, -3],
    [-3, -4, -4, -5, -5, -4, -4, -3],
    [-3, -4, -4, -5, -5, -4, -4, -3],
    [-3, -4, -4, -5, -5, -4, -4, -3],
    [-2, -3, -3, -4, -4, -3, -3, -2],
    [-1, -2, -2, -2, -2, -2, -2, -1],
    [2, 2, 0, 0, 0, 0, 2, 2],
    [2, 3, 1, 0, 0, 1, 3, 2],
];

#[inline]
pub const fn base_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

#[inline]
const fn table(kind: PieceKind) -> &'static PieceSquareTable {
    match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    }
}

/// Signed value of a piece on a square: base value plus positional bonus,
/// negated for Black.
pub fn square_value(kind: PieceKind, color: PieceColor, row: i8, column: i8) -> i32 {
    let table_row = match color {
        PieceColor::White => row,
        PieceColor::Black => BOARD_SIZE - 1 - row,
    };
    let bonus = table(kind)[table_row as usize][column as usize];
    color.sign() * (base_value(kind) + bonus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_squares_cancel_out() {
        for kind in [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ] {
            for row in 0..8 {
                for column in 0..8 {
                    let white = square_value(kind, PieceColor::White, row, column);
                    let black = square_value(kind, PieceColor::Black, 7 - row, column);
                    assert_eq!(white + black, 0);
                }
            }
        }
    }

    #[test]
    fn advanced_pawn_is_worth_more() {
        assert!(
            square_value(PieceKind::Pawn, PieceColor::White, 1, 4)
                > square_value(PieceKind::Pawn, PieceColor::White, 6, 4)
        );
        assert!(square_value(PieceKind::Queen, PieceColor::Black, 0, 3) < 0);
    }
}
