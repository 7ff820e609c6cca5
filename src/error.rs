use thiserror::Error;

use crate::snake::Coords;

/// Why a proposed head position is not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Collision {
    #[error("left the board at {0}")]
    OutOfBounds(Coords),
    #[error("ran into itself at {0}")]
    SelfCollision(Coords),
}

/// The single terminal condition of a game. Never recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("game over: snake {cause}, score {score}")]
pub struct GameOver {
    pub cause: Collision,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("board size must be greater than zero")]
    EmptyBoard,
    #[error("board size {size} is too small, need at least {min}")]
    BoardTooSmall { size: u16, min: u16 },
    #[error("snake body must have at least one cell")]
    EmptyBody,
    #[error("snake body visits {0} twice")]
    Overlap(Coords),
    #[error("snake cell {0} is outside the board")]
    OutOfBounds(Coords),
}
