//! Terminal-oriented Unicode board renderer.
//!
//! Draws the grid with rank 8 at the top, file and rank labels on every
//! edge, and a line naming the side to move.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceColor, PieceKind, BOARD_SIZE};
use crate::utils::algebraic::{column_symbol, rank_number};

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    let files: String = (0..BOARD_SIZE)
        .map(|column| column_symbol(column).to_string())
        .collect::<Vec<_>>()
        .join(" ");

    out.push_str("  ");
    out.push_str(&files);
    out.push('\n');

    for row in 0..BOARD_SIZE {
        let rank = rank_number(row);
        out.push_str(&rank.to_string());
        out.push(' ');

        for column in 0..BOARD_SIZE {
            match board.piece_at(row, column) {
                Some(piece) => out.push(piece_to_unicode(piece.color(), piece.kind())),
                None => out.push('·'),
            }

            if column < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push_str(&rank.to_string());
        out.push('\n');
    }

    out.push_str("  ");
    out.push_str(&files);
    out.push('\n');
    out.push_str(&format!("{} to move", board.turn()));

    out
}

pub fn piece_to_unicode(color: PieceColor, piece: PieceKind) -> char {
    match (color, piece) {
        (PieceColor::White, PieceKind::Pawn) => '♙',
        (PieceColor::White, PieceKind::Knight) => '♘',
        (PieceColor::White, PieceKind::Bishop) => '♗',
        (PieceColor::White, PieceKind::Rook) => '♖',
        (PieceColor::White, PieceKind::Queen) => '♕',
        (PieceColor::White, PieceKind::King) => '♔',
        (PieceColor::Black, PieceKind::Pawn) => '♟',
        (PieceColor::Black, PieceKind::Knight) => '♞',
        (PieceColor::Black, PieceKind::Bishop) => '♝',
        (PieceColor::Black, PieceKind::Rook) => '♜',
        (PieceColor::Black, PieceKind::Queen) => '♛',
        (PieceColor::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board_renders_ranks_top_down() {
        let rendered = render_board(&Board::new_game());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[10], "white to move");
        assert_eq!(Board::new_game().to_string(), rendered);
    }
}
