//! Minimax engine: wraps the alpha-beta search behind the engine trait.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::search::minimax::{search_best_move, SearchConfig};

#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: SearchConfig,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_depth(depth: u8) -> Self {
        Self {
            config: SearchConfig { depth },
        }
    }

    pub fn depth(&self) -> u8 {
        self.config.depth
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Plum Board Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("depth") {
            let depth = value
                .trim()
                .parse::<u8>()
                .map_err(|e| format!("invalid Depth value '{value}': {e}"))?;
            self.config.depth = depth.max(1);
        }
        Ok(())
    }

    fn choose_move(&mut self, board: &mut Board) -> Result<EngineOutput, String> {
        let side = board.turn();
        let result = search_best_move(board, side, &self.config).map_err(|e| e.to_string())?;

        Ok(EngineOutput {
            best_move: result.best_move,
            info_lines: vec![format!(
                "info depth {} score cp {} nodes {}",
                result.depth, result.best_score, result.nodes
            )],
        })
    }
}
