//! Board state: the grid, cached king squares, side to move, move history,
//! notation log and the legal-move cache.
//!
//! The board owns every piece. Mutation happens only through
//! [`Board::commit`] and [`Board::undo`] (see `move_generation`), which keep
//! the history, the notation log and the legal-move cache in step.

use std::fmt;

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::events::{ChessEvent, EventDispatcher, ListenerId};
use crate::game_state::full_move::FullMove;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_generator::{flatten_legal_moves, LegalMoves};
use crate::move_generation::piece_move::PieceMove;
use crate::pieces::pawn_moves::en_passant_row;
use crate::pieces::piece::Piece;
use crate::utils::render_game_state::render_board;

pub type Grid = [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// Back rank order from column 0 to column 7.
const BACK_RANK: [fn(PieceColor) -> Piece; 8] = [
    Piece::rook,
    Piece::knight,
    Piece::bishop,
    Piece::queen,
    Piece::king,
    Piece::bishop,
    Piece::knight,
    Piece::rook,
];

#[derive(Debug)]
pub struct Board {
    pub(crate) grid: Grid,
    pub(crate) white_king: Position,
    pub(crate) black_king: Position,
    pub(crate) turn: PieceColor,
    pub(crate) legal_moves: LegalMoves,
    pub(crate) history: Vec<FullMove>,
    pub(crate) notation: Vec<String>,
    pub(crate) events: EventDispatcher,
    /// Check status of the setup position, used while the history is empty.
    pub(crate) starts_in_check: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Board {
    /// Standard initial placement with White to move.
    pub fn new_game() -> Self {
        let mut grid: Grid = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for color in [PieceColor::White, PieceColor::Black] {
            let back_rank = color.back_rank() as usize;
            let pawn_rank = (color.back_rank() + color.pawn_direction()) as usize;
            for column in 0..BOARD_SIZE as usize {
                grid[back_rank][column] = Some(BACK_RANK[column](color));
                grid[pawn_rank][column] = Some(Piece::pawn(color));
            }
        }

        let mut board = Self::with_grid(
            grid,
            Position::new(PieceColor::White.back_rank(), 4),
            Position::new(PieceColor::Black.back_rank(), 4),
            PieceColor::White,
        );
        board.calculate_legal_moves();
        board
    }

    /// Build a board from an arbitrary placement.
    ///
    /// Exactly one king per color is required, and the side not to move may
    /// not be in check. Piece counters and flags are taken as given, so a
    /// rook placed with `times_moved == 0` may castle. At most one pawn may
    /// be open to en passant: one of the side not to move, standing where its
    /// double advance lands.
    pub fn from_pieces(turn: PieceColor, pieces: &[(Position, Piece)]) -> ChessResult<Self> {
        let mut grid: Grid = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        let mut white_king = None;
        let mut black_king = None;

        for &(position, piece) in pieces {
            if !position.is_valid() {
                return Err(ChessErrors::InvalidSetup(format!(
                    "square ({}, {}) is off the board",
                    position.row, position.column
                )));
            }
            let cell = &mut grid[position.row as usize][position.column as usize];
            if cell.is_some() {
                return Err(ChessErrors::InvalidSetup(format!(
                    "square {position} is occupied twice"
                )));
            }
            *cell = Some(piece);

            if piece.kind() == PieceKind::King {
                let slot = match piece.color() {
                    PieceColor::White => &mut white_king,
                    PieceColor::Black => &mut black_king,
                };
                if slot.replace(position).is_some() {
                    return Err(ChessErrors::InvalidSetup(format!(
                        "more than one {} king",
                        piece.color()
                    )));
                }
            }
        }

        let white_king = white_king
            .ok_or_else(|| ChessErrors::InvalidSetup("missing white king".to_owned()))?;
        let black_king = black_king
            .ok_or_else(|| ChessErrors::InvalidSetup("missing black king".to_owned()))?;

        let mut open_pawns = pieces
            .iter()
            .filter(|(_, piece)| piece.is_open_to_en_passant());
        if let Some((position, piece)) = open_pawns.next() {
            if open_pawns.next().is_some() {
                return Err(ChessErrors::InvalidSetup(
                    "more than one pawn open to en passant".to_owned(),
                ));
            }
            if piece.color() == turn || position.row != en_passant_row(turn) {
                return Err(ChessErrors::InvalidSetup(format!(
                    "pawn on {position} cannot have just advanced two squares"
                )));
            }
        }

        let waiting = turn.opposite();
        let waiting_king = match waiting {
            PieceColor::White => white_king,
            PieceColor::Black => black_king,
        };
        if is_square_attacked(&grid, waiting_king, waiting) {
            return Err(ChessErrors::InvalidSetup(format!(
                "{waiting} is in check but not to move"
            )));
        }

        let mut board = Self::with_grid(grid, white_king, black_king, turn);
        board.starts_in_check = board.is_side_to_move_attacked();
        board.calculate_legal_moves();
        Ok(board)
    }

    fn with_grid(grid: Grid, white_king: Position, black_king: Position, turn: PieceColor) -> Self {
        Self {
            grid,
            white_king,
            black_king,
            turn,
            legal_moves: LegalMoves::new(),
            history: Vec::new(),
            notation: Vec::new(),
            events: EventDispatcher::default(),
            starts_in_check: false,
        }
    }

    #[inline]
    pub fn is_valid_square(row: i8, column: i8) -> bool {
        Position::new(row, column).is_valid()
    }

    /// The piece on `(row, column)`; `None` for empty or off-board squares.
    #[inline]
    pub fn piece_at(&self, row: i8, column: i8) -> Option<&Piece> {
        self.piece_at_position(Position::new(row, column))
    }

    #[inline]
    pub fn piece_at_position(&self, position: Position) -> Option<&Piece> {
        if !position.is_valid() {
            return None;
        }
        self.grid[position.row as usize][position.column as usize].as_ref()
    }

    #[inline]
    pub(crate) fn piece_at_mut(&mut self, position: Position) -> Option<&mut Piece> {
        if !position.is_valid() {
            return None;
        }
        self.grid[position.row as usize][position.column as usize].as_mut()
    }

    #[inline]
    pub(crate) fn set_square(&mut self, position: Position, piece: Option<Piece>) {
        self.grid[position.row as usize][position.column as usize] = piece;
    }

    #[inline]
    pub(crate) fn take_square(&mut self, position: Position) -> Option<Piece> {
        self.grid[position.row as usize][position.column as usize].take()
    }

    /// Legal moves keyed by origin row, then origin column. Only squares with
    /// at least one legal move appear.
    #[inline]
    pub fn legal_moves(&self) -> &LegalMoves {
        &self.legal_moves
    }

    /// The legal moves for the piece on `(row, column)`, if it has any.
    pub fn legal_moves_from(&self, row: i8, column: i8) -> Option<&[PieceMove]> {
        self.legal_moves
            .get(&row)
            .and_then(|columns| columns.get(&column))
            .map(Vec::as_slice)
    }

    /// Every legal move as `(origin, move)`, in row-major origin order.
    pub fn legal_move_list(&self) -> Vec<(Position, PieceMove)> {
        flatten_legal_moves(&self.legal_moves)
    }

    #[inline]
    pub fn turn(&self) -> PieceColor {
        self.turn
    }

    #[inline]
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn notation_log(&self) -> &[String] {
        &self.notation
    }

    #[inline]
    pub fn history(&self) -> &[FullMove] {
        &self.history
    }

    #[inline]
    pub fn king_position(&self, color: PieceColor) -> Position {
        match color {
            PieceColor::White => self.white_king,
            PieceColor::Black => self.black_king,
        }
    }

    #[inline]
    pub(crate) fn set_king_position(&mut self, color: PieceColor, position: Position) {
        match color {
            PieceColor::White => self.white_king = position,
            PieceColor::Black => self.black_king = position,
        }
    }

    /// Whether the side to move is in check, as recorded by the last
    /// half-move.
    #[inline]
    pub fn is_check(&self) -> bool {
        self.history
            .last()
            .map_or(self.starts_in_check, |last| last.caused_check)
    }

    pub fn game_state(&self) -> GameState {
        match (self.legal_moves.is_empty(), self.is_check()) {
            (true, true) => GameState::Checkmate,
            (true, false) => GameState::Stalemate,
            (false, true) => GameState::Check,
            (false, false) => GameState::Ongoing,
        }
    }

    /// Pieces of `color` captured so far, in capture order.
    pub fn captured_pieces(&self, color: PieceColor) -> Vec<Piece> {
        self.history
            .iter()
            .filter_map(|full_move| full_move.captured_piece)
            .filter(|piece| piece.color() == color)
            .collect()
    }

    /// Whether only the two kings remain.
    pub fn only_kings_left(&self) -> bool {
        self.grid
            .iter()
            .flatten()
            .flatten()
            .all(|piece| piece.kind() == PieceKind::King)
    }

    /// Iterate every occupied square as `(position, piece)`.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, &Piece)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, columns)| {
            columns.iter().enumerate().filter_map(move |(column, cell)| {
                cell.as_ref()
                    .map(|piece| (Position::new(row as i8, column as i8), piece))
            })
        })
    }

    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ChessEvent) + 'static,
    {
        self.events.add_listener(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.events.remove_listener(id)
    }

    /// Take every event emitted since the last drain, up to the most recent
    /// `MAX_PENDING_EVENTS`.
    pub fn drain_events(&mut self) -> Vec<ChessEvent> {
        self.events.drain()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
