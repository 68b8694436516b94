//! Tournament CLI
//!
//! Run matches between isolation agents and evaluate test agents against
//! the reference lineup.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use tournament::{
    run_tournament, AgentConfig, MatchConfig, MatchRunner, Result, TournamentConfig,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Isolation Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <agent1> <agent2> [--games N] [--time-ms T]");
    println!("  tournament run [--config FILE] [--out FILE]");
    println!("  tournament help");
    println!();
    println!("Agents:");
    println!("  random                       - Uniformly random legal moves");
    println!("  minimax[:heuristic[:depth]]  - Fixed-depth minimax (default custom, depth 3)");
    println!("  alphabeta[:heuristic]        - Iterative deepening alpha-beta");
    println!();
    println!("Heuristics: null, open, center, improved, custom, custom2, custom3");
    println!();
    println!("Examples:");
    println!("  tournament match alphabeta:custom2 minimax:improved:3 --games 10");
    println!("  tournament run --config tournament.toml --out results.json");
}

/// Value following a flag, parsed, or `default` if missing or malformed.
fn flag_value<T: std::str::FromStr>(args: &[String], i: &mut usize, default: T) -> T {
    match args.get(*i + 1) {
        Some(value) => {
            *i += 1;
            value.parse().unwrap_or(default)
        }
        None => default,
    }
}

fn run_match(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        eprintln!("Error: match requires two agent specifications");
        print_usage();
        return Ok(());
    }

    let agent1 = AgentConfig::parse(&args[0])?;
    let agent2 = AgentConfig::parse(&args[1])?;

    let mut config = MatchConfig::default();
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => config.games_per_side = flag_value(args, &mut i, 5),
            "--time-ms" | "-t" => {
                config.time_per_move = Duration::from_millis(flag_value(args, &mut i, 150))
            }
            other => eprintln!("Ignoring unknown option: {}", other),
        }
        i += 1;
    }

    println!("=== Match: {} vs {} ===", agent1.name, agent2.name);
    println!(
        "Games per side: {}, Time per move: {} ms",
        config.games_per_side,
        config.time_per_move.as_millis()
    );
    println!();

    let mut engine1 = agent1.build();
    let mut engine2 = agent2.build();
    let runner = MatchRunner::new(config);
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut())?;

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses ({} by forfeit)",
        agent1.name, result.wins, result.losses, result.forfeits
    );
    println!("Win rate: {:.1}%", result.win_rate() * 100.0);
    Ok(())
}

fn run_round_robin(args: &[String]) -> Result<()> {
    let mut config_path: Option<PathBuf> = None;
    let mut out_path: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                config_path = args.get(i + 1).map(PathBuf::from);
                i += 1;
            }
            "--out" | "-o" => {
                out_path = args.get(i + 1).map(PathBuf::from);
                i += 1;
            }
            other => eprintln!("Ignoring unknown option: {}", other),
        }
        i += 1;
    }

    let config = match &config_path {
        Some(path) => TournamentConfig::load(path)?,
        None => TournamentConfig::default(),
    };

    info!(
        name = %config.name,
        agents = config.test_agents.len(),
        opponents = config.opponents.len(),
        games_per_side = config.games_per_side,
        time_limit_ms = config.time_limit_ms,
        "starting tournament"
    );

    let results = run_tournament(&config)?;
    results.print_report();

    if let Some(path) = out_path {
        results.save(&path)?;
        println!("Results saved to {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let outcome = match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "run" | "tournament" => run_round_robin(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
