//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other on one board, with
//! a seeded random opening prefix, and aggregates results over a series.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use tracing::debug;

use crate::engines::engine_trait::Engine;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{GameState, PieceColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawOnlyKings,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinCheckmate { player: PlayerId, color: PieceColor },
    DrawStalemate,
    DrawOnlyKings,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_min_plies: 2,
            opening_max_plies: 8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    /// Every half-move of the game, opening included, in short notation.
    pub notation: Vec<String>,
    pub opening_plies: usize,
    pub plies: usize,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Game-ending classification of the position, if the game is over.
fn terminal_outcome(board: &Board) -> Option<MatchOutcome> {
    match board.game_state() {
        GameState::Checkmate => Some(match board.turn() {
            PieceColor::White => MatchOutcome::BlackWinCheckmate,
            PieceColor::Black => MatchOutcome::WhiteWinCheckmate,
        }),
        GameState::Stalemate => Some(MatchOutcome::DrawStalemate),
        GameState::Check | GameState::Ongoing if board.only_kings_left() => {
            Some(MatchOutcome::DrawOnlyKings)
        }
        GameState::Check | GameState::Ongoing => None,
    }
}

/// Play a single seeded engine-vs-engine match.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    engine_white.new_game();
    engine_black.new_game();

    let mut board = Board::new_game();
    let opening_plies = apply_seeded_random_opening(
        &mut board,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    )?;

    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;
    let mut outcome = None;

    for _ in 0..config.max_plies {
        outcome = terminal_outcome(&board);
        if outcome.is_some() {
            break;
        }

        let mover = board.turn();
        let started = Instant::now();
        let out = match mover {
            PieceColor::White => engine_white.choose_move(&mut board)?,
            PieceColor::Black => engine_black.choose_move(&mut board)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            PieceColor::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            PieceColor::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out
            .best_move
            .ok_or_else(|| format!("{mover} engine returned no move in a live position"))?;
        board
            .commit(chosen.origin_row, chosen.origin_column, &chosen.piece_move)
            .map_err(|e| format!("engine returned illegal move: {e}"))?;
    }

    let outcome = outcome
        .or_else(|| terminal_outcome(&board))
        .unwrap_or(MatchOutcome::DrawMaxPlies);
    debug!(?outcome, plies = board.moves_played(), "match finished");

    Ok(MatchResult {
        outcome,
        notation: board.notation_log().to_vec(),
        opening_plies,
        plies: board.moves_played(),
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player 1 takes White in even-numbered games and Black in odd ones.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for i in 0..config.games {
        let player1_is_white = i % 2 == 0;
        let seed = config.base_seed.wrapping_add(u64::from(i));
        if config.verbose {
            let (white, black) = if player1_is_white {
                ("Player1", "Player2")
            } else {
                ("Player2", "Player1")
            };
            println!(
                "[series] game {}/{} seed={} white={} black={}",
                i + 1,
                config.games,
                seed,
                white,
                black
            );
        }

        let result = if player1_is_white {
            play_engine_match(
                player1_factory(),
                player2_factory(),
                seed,
                config.per_game.clone(),
            )?
        } else {
            play_engine_match(
                player2_factory(),
                player1_factory(),
                seed,
                config.per_game.clone(),
            )?
        };

        let (p1_moves, p2_moves, p1_time, p2_time) = if player1_is_white {
            (
                result.white_move_count,
                result.black_move_count,
                result.white_total_time_ns,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.white_move_count,
                result.black_total_time_ns,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_time);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_time);

        let winner = match result.outcome {
            MatchOutcome::WhiteWinCheckmate => Some(PieceColor::White),
            MatchOutcome::BlackWinCheckmate => Some(PieceColor::Black),
            _ => None,
        };
        let mapped = match (winner, result.outcome) {
            (Some(color), _) => {
                let player = if (color == PieceColor::White) == player1_is_white {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWinCheckmate { player, color }
            }
            (None, MatchOutcome::DrawStalemate) => {
                stats.draws += 1;
                SeriesOutcome::DrawStalemate
            }
            (None, MatchOutcome::DrawOnlyKings) => {
                stats.draws += 1;
                SeriesOutcome::DrawOnlyKings
            }
            (None, _) => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            println!(
                "[series] game {}/{} result={:?} moves={} p1_wins={} p2_wins={} draws={}\n",
                i + 1,
                config.games,
                mapped,
                result.notation.join(" "),
                stats.player1_wins,
                stats.player2_wins,
                stats.draws
            );
        }
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

/// Commit between `min_plies` and `max_plies` uniformly random legal moves.
/// Returns the number of plies played.
fn apply_seeded_random_opening(
    board: &mut Board,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Result<usize, String> {
    let mut rng = StdRng::seed_from_u64(seed);

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    let mut played = 0;
    for _ in 0..target_plies {
        let legal_moves = board.legal_move_list();
        if legal_moves.is_empty() {
            break;
        }

        let (origin, piece_move) = legal_moves[rng.random_range(0..legal_moves.len())];
        board
            .commit(origin.row, origin.column, &piece_move)
            .map_err(|e| format!("failed to play opening move: {e}"))?;
        played += 1;
    }

    Ok(played)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::game_state::chess_types::Position;
    use crate::pieces::piece::Piece;

    #[test]
    fn engine_match_harness_runs_random_vs_minimax() {
        let white = Box::new(RandomEngine::with_seed(3));
        let black = Box::new(MinimaxEngine::with_depth(1));
        let result = play_engine_match(
            white,
            black,
            42,
            MatchConfig {
                max_plies: 40,
                opening_min_plies: 2,
                opening_max_plies: 6,
            },
        )
        .expect("match should run");

        assert!((2..=6).contains(&result.opening_plies));
        assert_eq!(result.notation.len(), result.plies);
        assert!(result.white_move_count + result.black_move_count > 0);
        assert!(result.plies <= result.opening_plies + 40);
    }

    #[test]
    fn same_seed_replays_the_same_game() {
        let config = MatchConfig {
            max_plies: 12,
            opening_min_plies: 4,
            opening_max_plies: 4,
        };
        let first = play_engine_match(
            Box::new(RandomEngine::with_seed(9)),
            Box::new(RandomEngine::with_seed(10)),
            1234,
            config.clone(),
        )
        .expect("match should run");
        let second = play_engine_match(
            Box::new(RandomEngine::with_seed(9)),
            Box::new(RandomEngine::with_seed(10)),
            1234,
            config,
        )
        .expect("match should run");

        assert_eq!(first.opening_plies, 4);
        assert_eq!(first.notation, second.notation);
        assert_eq!(first.outcome, second.outcome);
    }

    #[test]
    fn engine_match_series_alternates_colors() {
        let stats = play_engine_match_series(
            || Box::new(MinimaxEngine::with_depth(1)),
            || Box::new(RandomEngine::with_seed(77)),
            MatchSeriesConfig {
                games: 2,
                base_seed: 777,
                per_game: MatchConfig {
                    max_plies: 10,
                    opening_min_plies: 2,
                    opening_max_plies: 4,
                },
                verbose: false,
            },
        )
        .expect("series should run");

        assert_eq!(stats.games, 2);
        assert_eq!(stats.outcomes.len(), 2);
        assert_eq!(
            stats.player1_wins + stats.player2_wins + stats.draws,
            stats.games
        );
        assert!(stats.player1_moves > 0 && stats.player2_moves > 0);
        assert!(stats.overall_avg_move_time_ms >= 0.0);
        assert!(stats.report().starts_with("games=2 "));
    }

    #[test]
    fn bare_kings_are_a_draw() {
        let board = Board::from_pieces(
            PieceColor::White,
            &[
                (Position::new(7, 4), Piece::king(PieceColor::White)),
                (Position::new(0, 4), Piece::king(PieceColor::Black)),
            ],
        )
        .expect("setup should be valid");
        assert_eq!(terminal_outcome(&board), Some(MatchOutcome::DrawOnlyKings));
        assert_eq!(terminal_outcome(&Board::new_game()), None);
    }
}
