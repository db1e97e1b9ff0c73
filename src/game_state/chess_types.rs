//! Core value types shared by the board, the pieces, and the search.
//!
//! Coordinates follow the grid layout of the board: row 0 is Black's back
//! rank (rank 8) and row 7 is White's back rank (rank 1). Column 0 is file a.

use std::fmt;

use crate::utils::algebraic::square_to_algebraic;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// Side to move / owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row delta of a single pawn advance for this color.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    /// Row of this color's back rank.
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            PieceColor::White => BOARD_SIZE - 1,
            PieceColor::Black => 0,
        }
    }

    /// `1` for White and `-1` for Black, so positive scores favour White.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => -1,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => write!(f, "white"),
            PieceColor::Black => write!(f, "black"),
        }
    }
}

/// Piece kind without color or counters, used for comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// The pieces a pawn may promote to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionKind {
    Rook,
    Queen,
    Bishop,
    Knight,
}

impl PromotionKind {
    /// Generation order of promotion alternatives.
    pub const ALL: [PromotionKind; 4] = [
        PromotionKind::Rook,
        PromotionKind::Queen,
        PromotionKind::Bishop,
        PromotionKind::Knight,
    ];

    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            PromotionKind::Rook => "R",
            PromotionKind::Queen => "Q",
            PromotionKind::Bishop => "B",
            PromotionKind::Knight => "N",
        }
    }
}

/// Derived classification of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

/// A `(row, column)` square. Only squares with both coordinates in
/// `0..BOARD_SIZE` are on the board; see [`Position::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i8,
    pub column: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, column: i8) -> Self {
        Self { row, column }
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.row >= 0 && self.column >= 0 && self.row < BOARD_SIZE && self.column < BOARD_SIZE
    }

    /// Shift by a row/column delta; `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Position> {
        let shifted = Position::new(self.row + d_row, self.column + d_column);
        shifted.is_valid().then_some(shifted)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match square_to_algebraic(*self) {
            Ok(name) => f.write_str(&name),
            Err(_) => write!(f, "({}, {})", self.row, self.column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_square_validity_matches_bounds() {
        for row in -2..10 {
            for column in -2..10 {
                let expected = (0..8).contains(&row) && (0..8).contains(&column);
                assert_eq!(Position::new(row, column).is_valid(), expected);
            }
        }
    }

    #[test]
    fn offset_stops_at_edges() {
        assert_eq!(Position::new(0, 0).offset(-1, 0), None);
        assert_eq!(Position::new(0, 0).offset(1, 2), Some(Position::new(1, 2)));
        assert_eq!(Position::new(7, 7).offset(0, 1), None);
    }

    #[test]
    fn colors_flip_and_point_forward() {
        assert_eq!(PieceColor::White.opposite(), PieceColor::Black);
        assert_eq!(PieceColor::White.pawn_direction(), -1);
        assert_eq!(PieceColor::Black.back_rank(), 0);
        assert_eq!(PieceColor::Black.sign(), -1);
    }
}
