//! Crate root module declarations for the Plum Board chess rules engine.
//!
//! Exposes the board and its rules (game state, piece movement, legal move
//! generation, apply and undo), a material-and-position minimax search,
//! pluggable engines, and helpers for notation, rendering and engine
//! matches.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_types;
    pub mod events;
    pub mod full_move;
}

pub mod pieces {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece;
    pub mod piece_square_tables;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_undo;
    pub mod perft;
    pub mod piece_move;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod notation;
    pub mod render_game_state;
}
