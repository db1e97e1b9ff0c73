//! Move descriptors produced by piece generators and accepted by the board.

use crate::game_state::chess_types::{Position, PromotionKind};

/// A move of whichever piece stands on the origin square.
///
/// The origin is not part of the descriptor; legal moves are keyed by origin
/// in the board's cache. Equality compares every field, so two separately
/// built descriptors for the same move are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceMove {
    pub destination: Position,
    pub is_take: bool,
    /// Square of the captured pawn when it differs from `destination`.
    pub en_passant_capture: Option<Position>,
    pub promotion: Option<PromotionKind>,
}

impl PieceMove {
    /// A plain move or capture.
    #[inline]
    pub const fn new(row: i8, column: i8, is_take: bool) -> Self {
        Self {
            destination: Position::new(row, column),
            is_take,
            en_passant_capture: None,
            promotion: None,
        }
    }

    /// An en-passant capture landing on `(row, column)`.
    #[inline]
    pub const fn en_passant(row: i8, column: i8, captured: Position) -> Self {
        Self {
            destination: Position::new(row, column),
            is_take: true,
            en_passant_capture: Some(captured),
            promotion: None,
        }
    }

    /// A pawn advance or capture onto the last rank.
    #[inline]
    pub const fn promotion(row: i8, column: i8, is_take: bool, kind: PromotionKind) -> Self {
        Self {
            destination: Position::new(row, column),
            is_take,
            en_passant_capture: None,
            promotion: Some(kind),
        }
    }

    /// Square whose occupant this move removes, if any.
    #[inline]
    pub fn captured_square(&self) -> Option<Position> {
        if !self.is_take {
            return None;
        }
        Some(self.en_passant_capture.unwrap_or(self.destination))
    }
}

/// A move together with the square it starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BestMove {
    pub origin_row: i8,
    pub origin_column: i8,
    pub piece_move: PieceMove,
}

impl BestMove {
    #[inline]
    pub const fn new(origin: Position, piece_move: PieceMove) -> Self {
        Self {
            origin_row: origin.row,
            origin_column: origin.column,
            piece_move,
        }
    }

    #[inline]
    pub const fn origin(&self) -> Position {
        Position::new(self.origin_row, self.origin_column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_construction_path() {
        let a = PieceMove::en_passant(2, 3, Position::new(3, 3));
        let b = PieceMove {
            destination: Position::new(2, 3),
            is_take: true,
            en_passant_capture: Some(Position::new(3, 3)),
            promotion: None,
        };
        assert_eq!(a, b);
        assert_ne!(a, PieceMove::new(2, 3, true));
        assert_ne!(
            PieceMove::promotion(0, 0, false, PromotionKind::Queen),
            PieceMove::promotion(0, 0, false, PromotionKind::Knight)
        );
    }

    #[test]
    fn captured_square_prefers_en_passant_square() {
        assert_eq!(PieceMove::new(4, 4, false).captured_square(), None);
        assert_eq!(
            PieceMove::new(4, 4, true).captured_square(),
            Some(Position::new(4, 4))
        );
        assert_eq!(
            PieceMove::en_passant(2, 3, Position::new(3, 3)).captured_square(),
            Some(Position::new(3, 3))
        );
    }
}
