use crate::game_state::chess_types::Position;
use crate::move_generation::piece_move::PieceMove;
use crate::pieces::piece::Piece;

/// Single history record: everything undo needs to reverse one half-move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullMove {
    pub from_row: i8,
    pub from_column: i8,
    pub piece_move: PieceMove,
    /// Whether the position after this half-move left the side to move in check.
    pub caused_check: bool,
    /// The removed piece, with the state it had when it was taken.
    pub captured_piece: Option<Piece>,
    /// Square of the pawn whose en-passant window this half-move closed.
    pub closed_en_passant: Option<Position>,
}

impl FullMove {
    #[inline]
    pub const fn origin(&self) -> Position {
        Position::new(self.from_row, self.from_column)
    }

    #[inline]
    pub const fn destination(&self) -> Position {
        self.piece_move.destination
    }

    /// Column delta of a castling king move: `2` king side, `-2` queen side.
    #[inline]
    pub fn column_shift(&self) -> i8 {
        self.piece_move.destination.column - self.from_column
    }
}
