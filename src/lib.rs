//! Terminal Snake: the game engine plus the terminal glue around it.

pub mod board;
pub mod error;
pub mod game;
pub mod input;
pub mod session;
pub mod snake;
pub mod term;

pub type TermInt = u16;
