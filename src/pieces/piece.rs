//! The closed set of piece kinds and their per-kind behaviour.
//!
//! Each variant carries its own color and any mutable state the rules need:
//! pawns track en-passant eligibility, rooks and kings count their moves for
//! castling rights. Behaviour is dispatched with a `match`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceColor, PieceKind, Position, PromotionKind};
use crate::move_generation::piece_move::PieceMove;
use crate::pieces::piece_square_tables::square_value;
use crate::pieces::{bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Pawn {
        color: PieceColor,
        open_to_en_passant: bool,
    },
    Rook {
        color: PieceColor,
        times_moved: u32,
    },
    Knight {
        color: PieceColor,
    },
    Bishop {
        color: PieceColor,
    },
    Queen {
        color: PieceColor,
    },
    King {
        color: PieceColor,
        times_moved: u32,
    },
}

impl Piece {
    #[inline]
    pub const fn pawn(color: PieceColor) -> Self {
        Piece::Pawn {
            color,
            open_to_en_passant: false,
        }
    }

    #[inline]
    pub const fn rook(color: PieceColor) -> Self {
        Piece::Rook {
            color,
            times_moved: 0,
        }
    }

    #[inline]
    pub const fn knight(color: PieceColor) -> Self {
        Piece::Knight { color }
    }

    #[inline]
    pub const fn bishop(color: PieceColor) -> Self {
        Piece::Bishop { color }
    }

    #[inline]
    pub const fn queen(color: PieceColor) -> Self {
        Piece::Queen { color }
    }

    #[inline]
    pub const fn king(color: PieceColor) -> Self {
        Piece::King {
            color,
            times_moved: 0,
        }
    }

    /// Freshly constructed piece a pawn turns into.
    #[inline]
    pub const fn promoted(kind: PromotionKind, color: PieceColor) -> Self {
        match kind {
            PromotionKind::Rook => Piece::rook(color),
            PromotionKind::Queen => Piece::queen(color),
            PromotionKind::Bishop => Piece::bishop(color),
            PromotionKind::Knight => Piece::knight(color),
        }
    }

    #[inline]
    pub const fn color(&self) -> PieceColor {
        match *self {
            Piece::Pawn { color, .. }
            | Piece::Rook { color, .. }
            | Piece::Knight { color }
            | Piece::Bishop { color }
            | Piece::Queen { color }
            | Piece::King { color, .. } => color,
        }
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        match self {
            Piece::Pawn { .. } => PieceKind::Pawn,
            Piece::Rook { .. } => PieceKind::Rook,
            Piece::Knight { .. } => PieceKind::Knight,
            Piece::Bishop { .. } => PieceKind::Bishop,
            Piece::Queen { .. } => PieceKind::Queen,
            Piece::King { .. } => PieceKind::King,
        }
    }

    /// One-letter notation symbol; empty for pawns.
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Piece::Pawn { .. } => "",
            Piece::Rook { .. } => "R",
            Piece::Knight { .. } => "N",
            Piece::Bishop { .. } => "B",
            Piece::Queen { .. } => "Q",
            Piece::King { .. } => "K",
        }
    }

    /// Material plus positional value on `(row, column)`; negative for Black.
    #[inline]
    pub fn value(&self, row: i8, column: i8) -> i32 {
        square_value(self.kind(), self.color(), row, column)
    }

    #[inline]
    pub fn is_same_team(&self, other: &Piece) -> bool {
        self.color() == other.color()
    }

    /// Every pseudo-legal move from `(row, column)`, ignoring whether the
    /// mover's own king is left attacked.
    pub fn possible_moves(&self, board: &Board, row: i8, column: i8) -> Vec<PieceMove> {
        let from = Position::new(row, column);
        match self {
            Piece::Pawn { color, .. } => pawn_moves::pawn_moves(board, *color, from),
            Piece::Rook { color, .. } => rook_moves::rook_moves(board, *color, from),
            Piece::Knight { color } => knight_moves::knight_moves(board, *color, from),
            Piece::Bishop { color } => bishop_moves::bishop_moves(board, *color, from),
            Piece::Queen { color } => queen_moves::queen_moves(board, *color, from),
            Piece::King { color, times_moved } => {
                king_moves::king_moves(board, *color, *times_moved, from)
            }
        }
    }

    #[inline]
    pub const fn is_open_to_en_passant(&self) -> bool {
        matches!(
            self,
            Piece::Pawn {
                open_to_en_passant: true,
                ..
            }
        )
    }

    /// No effect on pieces other than pawns.
    #[inline]
    pub fn set_open_to_en_passant(&mut self, is_open: bool) {
        if let Piece::Pawn {
            open_to_en_passant, ..
        } = self
        {
            *open_to_en_passant = is_open;
        }
    }

    /// Move counter of rooks and kings; `0` for every other kind.
    #[inline]
    pub const fn times_moved(&self) -> u32 {
        match self {
            Piece::Rook { times_moved, .. } | Piece::King { times_moved, .. } => *times_moved,
            _ => 0,
        }
    }

    #[inline]
    pub fn increase_times_moved(&mut self) {
        if let Piece::Rook { times_moved, .. } | Piece::King { times_moved, .. } = self {
            *times_moved += 1;
        }
    }

    #[inline]
    pub fn decrease_times_moved(&mut self) {
        if let Piece::Rook { times_moved, .. } | Piece::King { times_moved, .. } = self {
            *times_moved = times_moved.saturating_sub(1);
        }
    }
}

/// Shared helper for the ray-casting pieces: walk each direction until the
/// edge, stopping before a friendly piece and on an enemy piece.
pub(crate) fn ray_moves(
    board: &Board,
    color: PieceColor,
    from: Position,
    directions: &[(i8, i8)],
) -> Vec<PieceMove> {
    let mut moves = Vec::new();
    for &(d_row, d_column) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_column) {
            match board.piece_at_position(next) {
                None => moves.push(PieceMove::new(next.row, next.column, false)),
                Some(other) => {
                    if other.color() != color {
                        moves.push(PieceMove::new(next.row, next.column, true));
                    }
                    break;
                }
            }
            current = next;
        }
    }
    moves
}

/// Shared helper for the single-step pieces: each offset that lands on an
/// empty or enemy square.
pub(crate) fn step_moves(
    board: &Board,
    color: PieceColor,
    from: Position,
    offsets: &[(i8, i8)],
) -> Vec<PieceMove> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_column)| from.offset(d_row, d_column))
        .filter_map(|target| match board.piece_at_position(target) {
            None => Some(PieceMove::new(target.row, target.column, false)),
            Some(other) if other.color() != color => {
                Some(PieceMove::new(target.row, target.column, true))
            }
            Some(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_only_touch_rooks_and_kings() {
        let mut rook = Piece::rook(PieceColor::White);
        rook.increase_times_moved();
        rook.increase_times_moved();
        rook.decrease_times_moved();
        assert_eq!(rook.times_moved(), 1);

        let mut knight = Piece::knight(PieceColor::Black);
        knight.increase_times_moved();
        assert_eq!(knight, Piece::knight(PieceColor::Black));
    }

    #[test]
    fn en_passant_flag_only_on_pawns() {
        let mut pawn = Piece::pawn(PieceColor::Black);
        pawn.set_open_to_en_passant(true);
        assert!(pawn.is_open_to_en_passant());

        let mut queen = Piece::queen(PieceColor::Black);
        queen.set_open_to_en_passant(true);
        assert!(!queen.is_open_to_en_passant());
    }

    #[test]
    fn symbols_and_promotions() {
        assert_eq!(Piece::pawn(PieceColor::White).symbol(), "");
        assert_eq!(Piece::knight(PieceColor::White).symbol(), "N");
        assert_eq!(
            Piece::promoted(PromotionKind::Rook, PieceColor::Black),
            Piece::rook(PieceColor::Black)
        );
        assert_eq!(Piece::king(PieceColor::White).kind(), PieceKind::King);
    }
}
