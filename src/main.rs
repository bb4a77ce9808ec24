//! Connect Four - Main Binary
//!
//! Play games from the terminal or replay scripted games, and inspect
//! scenario files.

use clap::{Parser, Subcommand, ValueEnum};
use connect_four_rs::{
    core::Token,
    game::{
        GameLogger, GameLoop, GameState,
        InteractiveController, OutputFormat, PlayerController, ScriptedController,
        VerbosityLevel,
    },
    render::render_game,
    scenario::{load_scenario_into_game, ScenarioFile},
    C4Error, Result,
};
use std::path::PathBuf;

/// Controller type for each player
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ControllerType {
    /// Text UI controller for human play via stdin
    Tui,
    /// Fixed script of columns (requires --p0-moves / --p1-moves)
    Fixed,
}

/// Verbosity level for game output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

#[derive(Parser)]
#[command(name = "c4")]
#[command(about = "Connect Four - two-player connection game engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game
    Play {
        /// Number of rows (6-9)
        #[arg(long, default_value_t = 6)]
        rows: usize,

        /// Number of columns (7-9)
        #[arg(long, default_value_t = 7)]
        cols: usize,

        /// Token for player 0
        #[arg(long, default_value = "RED")]
        token0: Token,

        /// Token for player 1
        #[arg(long, default_value = "BLUE")]
        token1: Token,

        /// Player 0 controller type
        #[arg(long, value_enum, default_value = "tui")]
        p0: ControllerType,

        /// Player 1 controller type
        #[arg(long, value_enum, default_value = "tui")]
        p1: ControllerType,

        /// Columns for player 0 (space or comma separated, e.g., "3 3 4" or "3,3,4")
        #[arg(long, value_name = "COLUMNS")]
        p0_moves: Option<String>,

        /// Columns for player 1 (space or comma separated)
        #[arg(long, value_name = "COLUMNS")]
        p1_moves: Option<String>,

        /// Player to move first in a new game
        #[arg(long, default_value_t = 0)]
        first: usize,

        /// Start from a scenario file (.c4) instead of an empty grid
        #[arg(long, value_name = "SCENARIO_FILE")]
        start_state: Option<PathBuf>,

        /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "normal", short = 'v')]
        verbosity: VerbosityArg,

        /// Emit log lines and the final result as JSON
        #[arg(long)]
        json: bool,

        /// Consecutive rejected drops allowed per turn
        #[arg(long, default_value_t = 3)]
        max_rejections: u32,
    },

    /// Print the game described by a scenario file
    Show {
        /// Scenario file (.c4)
        #[arg(value_name = "SCENARIO_FILE")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            rows,
            cols,
            token0,
            token1,
            p0,
            p1,
            p0_moves,
            p1_moves,
            first,
            start_state,
            verbosity,
            json,
            max_rejections,
        } => {
            let mut game = match start_state {
                Some(path) => load_scenario_into_game(&ScenarioFile::load(&path)?)?,
                None => {
                    let mut game = GameState::new(rows, cols)?;
                    game.assign_tokens(token0, token1)?;
                    game
                }
            };

            let mut controller0 = build_controller(0, p0, p0_moves.as_deref())?;
            let mut controller1 = build_controller(1, p1, p1_moves.as_deref())?;

            let mut logger = GameLogger::with_verbosity(verbosity.into());
            if json {
                logger.set_output_format(OutputFormat::Json);
            }

            let mut game_loop = GameLoop::new(&mut game)
                .with_logger(logger)
                .with_max_rejections(max_rejections)
                .with_first_player(first);
            let result = game_loop.run_game(&mut *controller0, &mut *controller1)?;

            if json {
                println!("{}", serde_json::to_string(&result)?);
            } else if VerbosityLevel::from(verbosity) >= VerbosityLevel::Minimal {
                println!();
                print!("{}", render_game(&game));
            }
        }
        Commands::Show { file } => {
            let game = load_scenario_into_game(&ScenarioFile::load(&file)?)?;
            print!("{}", render_game(&game));
        }
    }

    Ok(())
}

fn build_controller(
    player: usize,
    kind: ControllerType,
    moves: Option<&str>,
) -> Result<Box<dyn PlayerController>> {
    match kind {
        ControllerType::Tui => Ok(Box::new(InteractiveController::new(player))),
        ControllerType::Fixed => {
            let script = moves.ok_or_else(|| {
                C4Error::InvalidArgument(format!(
                    "--p{player}-moves is required when --p{player}=fixed"
                ))
            })?;
            Ok(Box::new(ScriptedController::from_script(player, script)?))
        }
    }
}
