//! Wordle Daily - CLI
//!
//! Daily word puzzle with TUI and line modes. The game is saved after every
//! key press and picked up again on the next run.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_daily::{
    commands::{run_restart, run_show, run_simple},
    config::{Config, Dictionary},
    game::Game,
    logging,
    store::JsonFileStore,
    wordlists::WordBank,
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily five-letter word puzzle with persistent game state",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Where the game is saved (default: platform data dir)
    #[arg(long, global = true, env = "WORDLE_STATE")]
    state: Option<PathBuf>,

    /// Dictionary: 'all' (default), 'answers' (answer pool only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Accept any five letters as a guess
    #[arg(long, global = true)]
    no_dictionary: bool,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type words line by line)
    Simple,

    /// Print today's board and keyboard, then exit
    Show,

    /// Abandon the current game and start a new one
    Restart,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = if cli.no_dictionary {
        Dictionary::Off
    } else {
        Dictionary::from_arg(&cli.wordlist)
    };
    let config = Config::new(cli.state, dictionary);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so its logs go to a file
    let log_file = matches!(command, Commands::Play).then(|| config.log_path());
    logging::init(cli.verbose, log_file.as_deref())?;

    let words = config
        .word_bank()
        .with_context(|| format!("loading dictionary {:?}", config.dictionary))?;
    let mut game = load_game(&config, words);

    match command {
        Commands::Play => run_play_command(game),
        Commands::Simple => run_simple(&mut game, io::stdin().lock(), &mut io::stdout()),
        Commands::Show => run_show(&game, &mut io::stdout()),
        Commands::Restart => run_restart(&mut game, &mut io::stdout()),
    }
}

fn load_game(config: &Config, words: WordBank) -> Game<JsonFileStore, WordBank> {
    log::info!("Using state file {}", config.state_path.display());
    Game::load(JsonFileStore::new(&config.state_path), words)
}

fn run_play_command(game: Game<JsonFileStore, WordBank>) -> Result<()> {
    use wordle_daily::interactive::{App, run_tui};

    run_tui(App::new(game))
}
