mod console_frontend;

use std::io::{BufRead, Write};

use clap::Parser;
use common::config::{CONFIG_FILE, get_config_manager};
use common::games::SessionRng;
use common::games::tictactoe::{
    Board, FileSaveGameStore, SaveGameStore, TicTacToeGame, TicTacToeGameState,
};
use common::{log, logger};
use console_frontend::ConsoleFrontend;

#[derive(Parser)]
#[command(name = "tic_tac_toe", about = "Tic-tac-toe on an NxN board against the computer")]
struct Args {
    /// YAML config file; written with defaults when it does not exist
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,
    #[arg(long)]
    use_log_prefix: bool,
    /// Write diagnostic log lines to stderr
    #[arg(long)]
    verbose: bool,
    /// Seed for the easy bot's random moves
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = get_config_manager(&args.config).get_or_create_config()?;

    let prefix = if args.use_log_prefix || config.logging.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose || config.logging.verbose);
    log!("Using config {}", args.config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut frontend = ConsoleFrontend::new(stdin.lock(), stdout.lock());
    let store = FileSaveGameStore::new(&config.save_file);

    frontend.say("Tic-Tac-Toe game - you (X) against the robot (O)!")?;
    let size = frontend.prompt_board_size()?;
    let difficulty = frontend.prompt_difficulty()?;
    let board = choose_board(&mut frontend, &store, size)?;
    frontend.print_board(&board)?;

    let rng = SessionRng::from_seed_or_random(args.seed.or(config.rng_seed));
    let mut game = TicTacToeGame::new(TicTacToeGameState::from_board(board, difficulty), rng);
    let status = game.run(&mut frontend, &store)?;
    log!("Exiting after {:?} on {}, board saved to {}", status, difficulty, config.save_file);

    Ok(())
}

fn choose_board<R: BufRead, W: Write>(
    frontend: &mut ConsoleFrontend<R, W>,
    store: &impl SaveGameStore,
    size: usize,
) -> Result<Board, Box<dyn std::error::Error>> {
    if !frontend.prompt_load_previous()? {
        return Ok(Board::new(size));
    }

    match store.load()? {
        Some(board) => {
            frontend.say("The previous game was played from the game file.")?;
            Ok(board)
        }
        None => {
            frontend.say("The game file is not available. A new game starts.")?;
            Ok(Board::new(size))
        }
    }
}
