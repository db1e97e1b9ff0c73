//! Engine abstraction used by the match harness.
//!
//! An engine looks at the board and proposes a move for the side to move.
//! It may probe the board while thinking but must hand it back unchanged;
//! committing the move is the caller's job.

use crate::game_state::board::Board;
use crate::move_generation::piece_move::BestMove;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<BestMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    fn choose_move(&mut self, board: &mut Board) -> Result<EngineOutput, String>;
}
