//! Demo driver: plays dice games and reports them on stdout.
//!
//! With no arguments it plays three sample games. Otherwise it plays
//! `--games` games of the configuration given on the command line.

use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

use dice_game::{
    ConfigurationError, DiceGame, EventSink, GameConfig, GameEvent, GameRng, DEFAULT_DIE_FACES,
};

#[derive(Parser, Debug)]
#[command(name = "dice-game", about = "Simulate a multi-player dice competition")]
#[command(group(ArgGroup::new("shape").args(["players", "dice", "names"]).multiple(true)))]
struct Cli {
    /// Number of players (at least 2)
    #[arg(short, long)]
    players: Option<usize>,

    /// Dice rolled by each player per round (at least 1)
    #[arg(short, long)]
    dice: Option<u32>,

    /// Faces per die
    #[arg(short, long, default_value_t = DEFAULT_DIE_FACES)]
    faces: u32,

    /// Player name, repeatable; unnamed seats get default names
    #[arg(short, long = "name")]
    names: Vec<String>,

    /// Seed for reproducible games
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of games to play; needs --players, --dice or --name
    #[arg(short, long, requires = "shape")]
    games: Option<usize>,

    /// Print one JSON object per event instead of text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn is_demo(&self) -> bool {
        self.players.is_none() && self.dice.is_none() && self.names.is_empty()
    }

    fn configs(&self) -> Vec<GameConfig> {
        if self.is_demo() {
            return vec![
                GameConfig::default(),
                GameConfig::new(3, 2),
                GameConfig::new(3, 1).with_names(["John", "Mike"]),
            ];
        }

        let base = GameConfig::new(self.players.unwrap_or(2), self.dice.unwrap_or(1))
            .with_names(self.names.iter().cloned());
        vec![base; self.games.unwrap_or(1)]
    }
}

/// Renders events as the classic text report.
struct ConsoleReporter;

impl EventSink for ConsoleReporter {
    fn emit(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameStarted { .. } => println!("\n[+][+] Game starts"),
            GameEvent::TurnStarted { player, wins, .. } => {
                println!("{} with {} wins throws dice:", player, wins);
            }
            GameEvent::DieRolled { die, face, .. } => println!("\t on {} gets:{}", die, face),
            GameEvent::TurnFinished { .. } => {}
            GameEvent::RoundWon { player, wins, .. } => {
                println!("[+] Winner in round: {} with {} wins", player, wins);
            }
            GameEvent::GameWon { player, wins, .. } => {
                println!("\n[+][+] Game winner: {} with {}", player, wins);
            }
        }
    }
}

/// Writes each event as a line of JSON.
struct JsonReporter {
    game: usize,
}

impl EventSink for JsonReporter {
    fn emit(&mut self, event: &GameEvent) {
        let line = serde_json::json!({ "game": self.game, "data": event });
        println!("{}", line);
    }
}

fn run(cli: &Cli) -> Result<(), ConfigurationError> {
    let mut seeds = cli.seed.map(GameRng::new);

    // Validate everything up front so a bad config plays nothing.
    let mut games = Vec::new();
    for config in cli.configs() {
        let config = GameConfig {
            die_faces: cli.faces,
            seed: seeds.as_mut().map(|rng| rng.fork().seed()),
            ..config
        };
        games.push(DiceGame::new(config)?);
    }

    for (index, game) in games.iter_mut().enumerate() {
        let summary = if cli.json {
            game.run(&mut JsonReporter { game: index })
        } else {
            if index > 0 {
                println!("\n\n");
            }
            game.run(&mut ConsoleReporter)
        };
        tracing::info!(
            game = index,
            winner = %summary.winner_name,
            rounds = summary.rounds,
            "game finished"
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "dice_game=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "invalid configuration");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
