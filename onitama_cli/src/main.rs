use std::path::PathBuf;

use clap::Parser;
use onitama_cli::{load_deck, play_session, Config, SessionResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Name of the player with the red pieces
    #[arg(long, default_value = "PlayerRed")]
    red_name: String,

    /// Name of the player with the blue pieces
    #[arg(long, default_value = "PlayerBlue")]
    blue_name: String,

    /// RNG seed for dealing the cards
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a JSON file with a custom deck of at least 5 cards
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// Print the game state as JSON instead of drawing the board
    #[arg(long, default_value_t = false)]
    json: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let deck = match &args.deck {
        Some(path) => Some(load_deck(path)?),
        None => None,
    };

    let mut config = Config {
        red_name: args.red_name,
        blue_name: args.blue_name,
        rng: StdRng::seed_from_u64(seed),
        deck,
        json: args.json,
    };

    let mut game = config.new_game()?;
    info!(
        red = %config.red_name,
        blue = %config.blue_name,
        table_card = %game.table_card(),
        first = %game.current_player().color(),
        "Starting game"
    );

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    match play_session(&mut game, stdin, &mut stdout, config.json)? {
        SessionResult::Won { winner, name } => {
            info!(%winner, %name, turns = game.turn(), "Game won");
        }
        SessionResult::Abandoned => {
            info!(turns = game.turn(), "No winner");
        }
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // Stdout is used for the game itself
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
