use anyhow::Result;
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use snake::board::Board;
use snake::game::Game;
use snake::session::{Outcome, Session};
use snake::snake::random_start;
use snake::TermInt;

#[derive(Parser)]
#[command(name = "snake")]
#[command(version, about = "Steer a growing snake around a square board")]
struct Cli {
    /// Side length of the board
    #[arg(long, default_value_t = 10)]
    size: TermInt,

    /// Seed for the starting position
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let board = Board::new(cli.size)?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (start, facing) = random_start(&board, &mut rng)?;
    info!("board {}x{}, seed {:?}, head facing {}", cli.size, cli.size, cli.seed, facing);

    let game = Game::new(board, start)?;
    let outcome = Session::new(game, facing)?.run()?;

    match outcome {
        Outcome::Over(_) => println!("Game Over! Your score is: {}", outcome.score()),
        Outcome::Quit { score } => println!("Quit. Your score is: {}", score),
    }

    Ok(())
}
