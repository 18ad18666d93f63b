mod config;
mod console_ui;

use clap::Parser;
use snake_engine::config::Validate;
use snake_engine::{log, logger, Game, GameStatus, SessionRng, Autopilot};

use config::{get_config_manager, RunnerConfig, CONFIG_FILE_NAME};
use console_ui::ConsoleUi;

#[derive(Parser)]
#[command(name = "snake_runner", about = "Plays a headless game of snake with the autopilot")]
struct Args {
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    config: String,

    #[arg(long)]
    size: Option<usize>,

    #[arg(long)]
    iterations: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    print_board: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply(&self, config: &mut RunnerConfig) {
        if let Some(size) = self.size {
            config.game.size = size;
        }
        if let Some(iterations) = self.iterations {
            config.game.iterations = Some(iterations);
        }
        if let Some(seed) = self.seed {
            config.game.seed = Some(seed);
        }
        if self.print_board {
            config.print_board = true;
        }
    }
}

// egg placement uses the game seed itself
fn autopilot_seed(game_seed: u64) -> u64 {
    game_seed ^ 1
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = get_config_manager(&args.config).get_config()?;
    args.apply(&mut config);
    config.validate()?;

    let seed = SessionRng::from_seed(config.game.seed).seed();
    config.game.seed = Some(seed);
    log!(
        "Starting {}x{} game, seed {}, iterations {:?}",
        config.game.size,
        config.game.size,
        seed,
        config.game.iterations
    );

    let board = config.game.board();
    let pilot = Autopilot::new(board, SessionRng::new(autopilot_seed(seed)));
    let ui = ConsoleUi::new(pilot, board, config.print_board);
    let mut game = Game::new(&config.game, ui)?;
    let survived = game.run();

    let summary = game.summary();
    log!(
        "Finished with {:?} after {} ticks ({} frames drawn), snake length {}",
        summary.status,
        summary.ticks,
        game.ui().frames(),
        summary.snake_length
    );
    if summary.status == GameStatus::Won {
        log!("The snake filled the board");
    }

    if !survived {
        std::process::exit(1);
    }
    Ok(())
}
