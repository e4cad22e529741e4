mod config;
mod game_loop;
mod input;
mod render;
mod score;

use clap::Parser;
use std::path::PathBuf;
use tictactoe_common::config::Validate;
use tictactoe_common::games::SessionRng;
use tictactoe_common::{log, logger};

use config::get_config_manager;
use game_loop::TextGame;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// Config file; defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the coin flip and the computer's random moves
    #[arg(long)]
    seed: Option<u64>,

    /// Overrides computer.optimal_probability from the config file
    #[arg(long)]
    optimal_probability: Option<f64>,

    /// Skip the pause before the computer's move
    #[arg(long)]
    no_delay: bool,

    /// Write diagnostic log lines to stderr
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(args.config);
    let mut config = config_manager.get_config()?;
    log!(
        "Loaded config from {}: {:?}",
        config_manager.content_provider().path().display(),
        config
    );

    if let Some(probability) = args.optimal_probability {
        config.computer.optimal_probability = probability;
    }
    if args.no_delay {
        config.think_delay_ms = 0;
    }
    config.validate()?;

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut game = TextGame::new(stdin.lock(), stdout.lock(), &config, rng);
    let scores = game.run()?;
    log!(
        "Session over after {} games: X={} O={} draws={}",
        scores.games_played(),
        scores.x_wins,
        scores.o_wins,
        scores.draws
    );

    Ok(())
}
