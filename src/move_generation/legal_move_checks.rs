//! Attack detection and the self-check probe.
//!
//! The probe plays a candidate move on a copy of the grid and then looks
//! outward from the mover's king for an enemy attacker. The live board is
//! never touched.

use crate::game_state::board::{Board, Grid};
use crate::game_state::chess_types::{PieceColor, PieceKind, Position};
use crate::move_generation::piece_move::PieceMove;
use crate::pieces::bishop_moves::DIAGONAL_DIRECTIONS;
use crate::pieces::king_moves::KING_OFFSETS;
use crate::pieces::knight_moves::KNIGHT_OFFSETS;
use crate::pieces::piece::Piece;
use crate::pieces::rook_moves::STRAIGHT_DIRECTIONS;

#[inline]
fn grid_piece(grid: &Grid, position: Position) -> Option<&Piece> {
    if !position.is_valid() {
        return None;
    }
    grid[position.row as usize][position.column as usize].as_ref()
}

#[inline]
fn is_enemy_of_kind(piece: Option<&Piece>, defender: PieceColor, kinds: &[PieceKind]) -> bool {
    piece.is_some_and(|piece| piece.color() != defender && kinds.contains(&piece.kind()))
}

/// Whether any piece not of `defender`'s color attacks `square` on `grid`.
pub fn is_square_attacked(grid: &Grid, square: Position, defender: PieceColor) -> bool {
    let knight = KNIGHT_OFFSETS.iter().any(|&(d_row, d_column)| {
        square.offset(d_row, d_column).is_some_and(|from| {
            is_enemy_of_kind(grid_piece(grid, from), defender, &[PieceKind::Knight])
        })
    });
    if knight {
        return true;
    }

    // Enemy pawns attack from the two squares diagonally ahead of the defender.
    let pawn = [-1, 1].iter().any(|&d_column| {
        square
            .offset(defender.pawn_direction(), d_column)
            .is_some_and(|from| {
                is_enemy_of_kind(grid_piece(grid, from), defender, &[PieceKind::Pawn])
            })
    });
    if pawn {
        return true;
    }

    let king = KING_OFFSETS.iter().any(|&(d_row, d_column)| {
        square.offset(d_row, d_column).is_some_and(|from| {
            is_enemy_of_kind(grid_piece(grid, from), defender, &[PieceKind::King])
        })
    });
    if king {
        return true;
    }

    is_attacked_along_rays(
        grid,
        square,
        defender,
        &DIAGONAL_DIRECTIONS,
        &[PieceKind::Bishop, PieceKind::Queen],
    ) || is_attacked_along_rays(
        grid,
        square,
        defender,
        &STRAIGHT_DIRECTIONS,
        &[PieceKind::Rook, PieceKind::Queen],
    )
}

fn is_attacked_along_rays(
    grid: &Grid,
    square: Position,
    defender: PieceColor,
    directions: &[(i8, i8)],
    sliders: &[PieceKind],
) -> bool {
    directions.iter().any(|&(d_row, d_column)| {
        let mut current = square;
        while let Some(next) = current.offset(d_row, d_column) {
            if let Some(piece) = grid_piece(grid, next) {
                return is_enemy_of_kind(Some(piece), defender, sliders);
            }
            current = next;
        }
        false
    })
}

/// Play `piece_move` from `origin` on a copy of `grid`. Returns the copy and
/// the square of the mover's king afterwards, or `None` when any square the
/// move touches is off the board or the origin is empty.
fn probe_grid(
    grid: &Grid,
    king: Position,
    origin: Position,
    piece_move: &PieceMove,
) -> Option<(Grid, Position)> {
    let destination = piece_move.destination;
    let touched = [Some(origin), Some(destination), piece_move.en_passant_capture];
    if !touched.iter().flatten().all(|square| square.is_valid()) {
        return None;
    }

    let mut probe = *grid;
    let mover = probe[origin.row as usize][origin.column as usize].take()?;

    if let Some(captured) = piece_move.en_passant_capture {
        probe[captured.row as usize][captured.column as usize] = None;
    }
    let placed = match piece_move.promotion {
        Some(kind) => Piece::promoted(kind, mover.color()),
        None => mover,
    };
    probe[destination.row as usize][destination.column as usize] = Some(placed);

    let king = if mover.kind() == PieceKind::King {
        destination
    } else {
        king
    };
    Some((probe, king))
}

impl Board {
    /// Whether playing `piece_move` from `(row, column)` would leave the
    /// mover's king attacked. For castling the square the king crosses is
    /// checked as well. An empty origin or an off-board square counts as
    /// unsafe.
    pub fn would_cause_self_check(&self, row: i8, column: i8, piece_move: &PieceMove) -> bool {
        let origin = Position::new(row, column);
        let Some(mover) = self.piece_at_position(origin) else {
            return true;
        };
        let color = mover.color();
        let Some((probe, king)) =
            probe_grid(&self.grid, self.king_position(color), origin, piece_move)
        else {
            return true;
        };

        if is_square_attacked(&probe, king, color) {
            return true;
        }

        let column_shift = piece_move.destination.column - column;
        if mover.kind() == PieceKind::King && column_shift.abs() == 2 {
            let crossed = Position::new(row, column + column_shift.signum());
            if let Some((crossed_probe, crossed_king)) = probe_grid(
                &self.grid,
                self.king_position(color),
                origin,
                &PieceMove::new(crossed.row, crossed.column, false),
            ) {
                return is_square_attacked(&crossed_probe, crossed_king, color);
            }
            return true;
        }

        false
    }

    /// Whether the side to move has its king attacked in the current
    /// position.
    pub(crate) fn is_side_to_move_attacked(&self) -> bool {
        is_square_attacked(&self.grid, self.king_position(self.turn), self.turn)
    }
}
