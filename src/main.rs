use std::path::PathBuf;
use std::thread;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use connect_four::ai::RandomAgent;
use connect_four::config::{AppConfig, GameMode};
use connect_four::engine::{AgentProvider, MatchTally, TurnEngine};
use connect_four::game::Board;
use connect_four::ui::{ConsoleReporter, Interactive};

/// Play Connect Four against the computer, or watch two agents play.
#[derive(Parser)]
#[command(name = "connect_four", about = "Console Connect Four")]
struct Cli {
    /// Computer vs computer instead of human vs computer
    #[arg(long)]
    bots: bool,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board height
    #[arg(long)]
    rows: Option<usize>,

    /// Override board width
    #[arg(long)]
    columns: Option<usize>,

    /// Seed the computer players for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to play in --bots mode
    #[arg(long)]
    rounds: Option<u32>,

    /// Log engine events to stderr
    #[arg(long)]
    verbose: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Terminal filter: --verbose > RUST_LOG env > default "warn"
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if cli.bots {
        config.game.mode = GameMode::AgentVsAgent;
    }
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.board.columns = columns;
    }
    if cli.seed.is_some() {
        config.game.seed = cli.seed;
    }
    if let Some(rounds) = cli.rounds {
        config.game.rounds = rounds;
    }
    config.validate().context("invalid configuration")?;

    // The game runs on its own thread so the main thread only waits on it.
    let game = thread::Builder::new()
        .name("connect-four".into())
        .spawn(move || play(&config))
        .context("spawning game thread")?;

    match game.join() {
        Ok(result) => result,
        Err(_) => bail!("game thread panicked"),
    }
}

fn play(config: &AppConfig) -> Result<()> {
    let mode = config.game.mode;
    let mut reporter = ConsoleReporter::stdout(mode);

    match mode {
        GameMode::HumanVsAgent => {
            let mut engine = TurnEngine::with_board(
                new_board(config),
                Box::new(Interactive::stdio()),
                Box::new(AgentProvider::new(random_agent(config.game.seed))),
            );
            engine.run(&mut reporter)?;
        }
        GameMode::AgentVsAgent => {
            let mut tally = MatchTally::new();
            for round in 0..u64::from(config.game.rounds) {
                // Distinct, reproducible seeds per side and round
                let seed_a = config.game.seed.map(|s| s.wrapping_add(2 * round));
                let seed_b = config.game.seed.map(|s| s.wrapping_add(2 * round + 1));

                let mut engine = TurnEngine::with_board(
                    new_board(config),
                    Box::new(AgentProvider::new(random_agent(seed_a))),
                    Box::new(AgentProvider::new(random_agent(seed_b))),
                );
                let outcome = engine
                    .run(&mut reporter)
                    .with_context(|| format!("playing round {}", round + 1))?;
                tally.record(outcome);
            }
            if config.game.rounds > 1 {
                reporter.summary(&tally)?;
            }
        }
    }

    Ok(())
}

fn new_board(config: &AppConfig) -> Board {
    Board::new(config.board.rows, config.board.columns)
}

fn random_agent(seed: Option<u64>) -> RandomAgent {
    seed.map_or_else(RandomAgent::new, RandomAgent::seeded)
}
