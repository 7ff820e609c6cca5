use anyhow::Result;
use log::info;

use crate::error::GameOver;
use crate::game::Game;
use crate::input::{Steer, Steering};
use crate::snake::Direction;
use crate::term::TermManager;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Over(GameOver),
    Quit { score: u32 },
}

impl Outcome {
    pub fn score(&self) -> u32 {
        match self {
            Outcome::Over(over) => over.score,
            Outcome::Quit { score } => *score,
        }
    }
}

/// Owns the game for one run: reads keys, applies moves and redraws.
pub struct Session {
    game: Game,
    steering: Steering,
    term: TermManager,
}

impl Session {
    pub fn new(game: Game, facing: Direction) -> Result<Self> {
        let mut term = TermManager::new()?;
        term.fit(game.board())?;
        Ok(Session { game, steering: Steering::new(facing), term })
    }

    /// Plays until game over or Ctrl+C. The terminal is restored either way.
    pub fn run(mut self) -> Result<Outcome> {
        self.term.setup()?;
        let result = self.play();
        self.term.restore()?;
        result
    }

    fn play(&mut self) -> Result<Outcome> {
        let head_line = format!("Head facing {}", self.steering.facing());
        self.term.show_message(&[
            "Choose a direction to move: Up(W), Down(S), Left(A), Right(D).",
            "Keep the Snake within the board.",
            "Snake grows in size with every 5 moves you make.",
            head_line.as_str(),
        ])?;
        self.redraw(false)?;

        loop {
            let key = self.term.read_key_blocking()?;

            let dir = match self.steering.steer(&key) {
                Steer::Quit => return Ok(Outcome::Quit { score: self.game.moves() }),
                Steer::Rejected(reversal) => {
                    self.term.show_message(&[reversal.to_string().as_str()])?;
                    continue;
                }
                Steer::Go(dir) => dir,
            };

            match self.game.move_snake(dir) {
                Ok(step) => {
                    self.redraw(false)?;
                    let moving = format!("Moving {}", dir);
                    let score = format!("Current Score: {}", step.moves);
                    let grew = if step.grew {
                        format!("The snake grew to {} cells", self.game.snake().size())
                    } else {
                        String::new()
                    };
                    self.term.show_message(&[moving.as_str(), score.as_str(), grew.as_str()])?;
                }
                Err(over) => {
                    info!("game over after {} moves: {}", over.score, over.cause);
                    self.redraw(true)?;
                    let score = format!("Game Over! Your score is: {}", over.score);
                    self.term.show_message(&[score.as_str(), "", "Press any key to exit."])?;
                    self.term.read_key_blocking()?;
                    return Ok(Outcome::Over(over));
                }
            }
        }
    }

    fn redraw(&mut self, dead: bool) -> Result<()> {
        let game = &self.game;
        self.term.draw_board(game.board(), game.snake().occupied(), game.moves(), dead)
    }
}
