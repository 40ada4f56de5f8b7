use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use othello_core::{Board, Move};
use othello_engine::{IterativeDeepening, SearchConfig, DEFAULT_DEPTH, MAX_DEPTH};

#[derive(Parser, Debug)]
#[command(author, version, about = "Picks an Othello move within a time budget", long_about = None)]
struct Args {
    /// Position: side to move (W/B) followed by 64 cells (O, X or E), row by row
    position: String,

    /// Time budget in seconds
    time_limit: u64,

    /// First depth searched by iterative deepening
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    initial_depth: u32,

    /// Deepest depth searched before giving up on the deadline
    #[arg(long, default_value_t = MAX_DEPTH)]
    max_depth: u32,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    // The budget runs from process start
    let start = Instant::now();
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();

    match run(&args, start) {
        Ok(mv) => println!("{mv}"),
        Err(e) => {
            log::error!("{e:#}");
            std::process::exit(1);
        }
    }
}

fn run(args: &Args, start: Instant) -> Result<Move> {
    let board = Board::parse(&args.position).context("invalid position string")?;
    let config = SearchConfig::new(args.initial_depth, args.max_depth)
        .context("invalid search configuration")?;
    let deadline = start
        .checked_add(Duration::from_secs(args.time_limit))
        .context("time limit is too large")?;

    log::debug!("searching position\n{}", board.render());

    let driver = IterativeDeepening::with_config(config);
    Ok(driver.choose_move(&board, deadline))
}
