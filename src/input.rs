use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction::{self, *};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

/// Maps a key to a command. Keys with no meaning return `None`.
pub fn command_for_key(key: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(key) {
        return Some(Command::Quit);
    }

    let dir = match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Up,
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Left,
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Down,
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Right,
        _ => return None,
    };

    Some(Command::Move(dir))
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

/// A turn straight back onto the snake's own neck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reversal {
    pub requested: Direction,
    pub facing: Direction,
}

impl fmt::Display for Reversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let choices: Vec<String> = Direction::ALL
            .iter()
            .filter(|dir| **dir != self.requested)
            .map(|dir| format!("{}({})", dir, dir.key()))
            .collect();

        write!(
            f,
            "Can't move {} while facing {}. Choose {}, {} or {}",
            self.requested, self.facing, choices[0], choices[1], choices[2]
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Go(Direction),
    Rejected(Reversal),
    Quit,
}

/// Remembers which way the snake is facing and turns keys into moves.
#[derive(Debug, Clone)]
pub struct Steering {
    facing: Direction,
}

impl Steering {
    pub fn new(facing: Direction) -> Self {
        Steering { facing }
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn steer(&mut self, key: &KeyEvent) -> Steer {
        match command_for_key(key) {
            Some(Command::Quit) => Steer::Quit,
            Some(Command::Move(dir)) if dir.is_opposite(self.facing) => {
                Steer::Rejected(Reversal { requested: dir, facing: self.facing })
            }
            Some(Command::Move(dir)) => {
                self.facing = dir;
                Steer::Go(dir)
            }
            None => {
                log::trace!("ignoring key {:?}, keeping {}", key.code, self.facing);
                Steer::Go(self.facing)
            }
        }
    }
}
