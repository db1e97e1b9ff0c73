//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose --games 4 --depth 3`
//!
//! Set `RUST_LOG=plum_board=debug` to see every committed move.

use plum_board::engines::engine_minimax::MinimaxEngine;
use plum_board::engines::engine_random::RandomEngine;
use plum_board::engines::engine_trait::Engine;
use plum_board::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use tracing_subscriber::EnvFilter;

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>, String> {
    let Some(index) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    let value = args
        .get(index + 1)
        .ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse::<T>()
        .map(Some)
        .map_err(|_| format!("invalid value for {flag}: {value}"))
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let games = parse_flag::<u16>(&args, "--games")?.unwrap_or(10);
    let depth = parse_flag::<u8>(&args, "--depth")?.unwrap_or(3);

    let player1 = move || Box::new(MinimaxEngine::with_depth(depth)) as Box<dyn Engine>;
    let player2 = || Box::new(RandomEngine::new()) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games,
            base_seed: 1234,
            per_game: MatchConfig {
                max_plies: 200,
                opening_min_plies: 2,
                opening_max_plies: 6,
            },
            verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
