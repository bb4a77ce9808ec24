//! Interactive controller for human players
//!
//! Shows the grid, then reads a column number per move. Input that is not a
//! number is re-prompted; `q` (or end of input) stops playing.

use crate::game::controller::{GameStateView, PlayerController};
use crate::render::render_grid;
use crate::C4Error;
use std::io::{self, BufRead, Write};

pub struct InteractiveController {
    player: usize,
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl InteractiveController {
    /// Controller reading stdin and writing prompts to stdout
    pub fn new(player: usize) -> Self {
        Self::with_io(
            player,
            Box::new(io::BufReader::new(io::stdin())),
            Box::new(io::stdout()),
        )
    }

    pub fn with_io(player: usize, input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        InteractiveController {
            player,
            input,
            output,
        }
    }

    fn prompt(&mut self, view: &GameStateView) -> io::Result<Option<usize>> {
        write!(self.output, "{}", render_grid(view.board()))?;
        let token = view
            .own_token()
            .map(|t| t.to_string())
            .unwrap_or_else(|| "?".to_string());

        loop {
            write!(
                self.output,
                "Player {} ({}) column [0-{}], q to quit: ",
                self.player,
                token,
                view.cols() - 1
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match trimmed.parse::<usize>() {
                Ok(col) => return Ok(Some(col)),
                Err(_) => writeln!(self.output, "'{}' is not a column number", trimmed)?,
            }
        }
    }

    fn announce(&mut self, grid: Option<String>, message: &str) -> io::Result<()> {
        if let Some(grid) = grid {
            write!(self.output, "{}", grid)?;
        }
        writeln!(self.output, "{}", message)?;
        self.output.flush()
    }

    /// Announce a message; write failures go to stderr since callbacks cannot fail
    fn report(&mut self, grid: Option<String>, message: &str) {
        if let Err(e) = self.announce(grid, message) {
            eprintln!("Error writing output: {}", e);
        }
    }
}

impl PlayerController for InteractiveController {
    fn player(&self) -> usize {
        self.player
    }

    fn choose_column(&mut self, view: &GameStateView) -> Option<usize> {
        match self.prompt(view) {
            Ok(choice) => choice,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                None
            }
        }
    }

    fn on_move_rejected(&mut self, _view: &GameStateView, error: &C4Error) {
        self.report(None, &format!("{}, try again", error));
    }

    fn on_game_end(&mut self, view: &GameStateView, won: bool) {
        let message = if won {
            format!("Player {} wins!", self.player)
        } else {
            format!("Player {}: game over.", self.player)
        };
        self.report(Some(render_grid(view.board())), &message);
    }
}
