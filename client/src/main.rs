mod config;
mod console;
mod game_loop;

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use tictactoe_common::config::ConfigManager;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{FirstPlayerMode, Player};
use tictactoe_common::{log, logger};

use config::{Config, MatchMode, get_config_manager};
use console::Console;
use game_loop::{MatchOutcome, MatchSettings, run_match};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FirstPlayerArg {
    X,
    O,
    Random,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::X => FirstPlayerMode::X,
            FirstPlayerArg::O => FirstPlayerMode::O,
            FirstPlayerArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "tictactoe",
    version,
    about = "Tic-tac-toe against an alpha-beta minimax opponent"
)]
struct Args {
    /// Match mode; asked at the console when neither this nor the config sets it
    #[arg(long, value_enum)]
    mode: Option<MatchMode>,
    /// Who moves first; asked in pvc matches when unset
    #[arg(long, value_enum)]
    first: Option<FirstPlayerArg>,
    /// Seed for random openings and random first player
    #[arg(long)]
    seed: Option<u64>,
    /// Search the opening move instead of picking a random cell
    #[arg(long)]
    no_random_opening: bool,
    /// Config file path (defaults to tictactoe_config.yaml next to the executable)
    #[arg(long)]
    config: Option<String>,
    #[arg(long)]
    use_log_prefix: bool,
    #[arg(long)]
    verbose: bool,
}

fn choose_mode<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    preset: Option<MatchMode>,
) -> io::Result<Option<MatchMode>> {
    if preset.is_some() {
        return Ok(preset);
    }
    let choice = console.prompt_choice(
        "Enter 1 to play against the computer or 2 for computer vs. computer: ",
        1..=2,
    )?;
    Ok(choice.and_then(MatchMode::from_menu_choice))
}

fn choose_first_player<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mode: MatchMode,
    preset: Option<FirstPlayerMode>,
    rng: &mut SessionRng,
) -> io::Result<Option<Player>> {
    if let Some(first_player_mode) = preset {
        return Ok(Some(first_player_mode.resolve(rng)));
    }
    if mode == MatchMode::ComputerVsComputer {
        return Ok(Some(Player::Maximizer));
    }
    let choice = console.prompt_choice("Enter 1 to go first or 2 to go second: ", 1..=2)?;
    Ok(choice.map(|order| {
        if order == 1 {
            Player::Maximizer
        } else {
            Player::Minimizer
        }
    }))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config: Config = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path).get_config()?,
        None => get_config_manager().get_config()?,
    };

    let prefix = if args.use_log_prefix {
        Some(config.log_prefix.clone().unwrap_or_else(|| "TicTacToe".to_string()))
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let mut rng = SessionRng::from_seed_or_random(args.seed.or(config.seed));
    log!("Session seed: {}", rng.seed());

    let mode_preset = args.mode.or(config.mode);
    let first_preset = args.first.map(FirstPlayerMode::from).or(config.first_player);
    let random_opening = config.random_opening && !args.no_random_opening;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    loop {
        let Some(mode) = choose_mode(&mut console, mode_preset)? else {
            break;
        };
        let Some(first_player) = choose_first_player(&mut console, mode, first_preset, &mut rng)?
        else {
            break;
        };

        let settings = MatchSettings::new(mode, first_player, random_opening);
        match run_match(&mut console, &settings, &mut rng)? {
            MatchOutcome::Finished(state) => log!("Match finished: {:?}", state.status),
            MatchOutcome::Abandoned => {
                log!("Input closed, leaving the match");
                break;
            }
        }

        if console.prompt_yes_no("Do you want to play again? (yes/no): ")? != Some(true) {
            break;
        }
    }

    log!("Goodbye");
    Ok(())
}
