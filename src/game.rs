use log::{debug, warn};

use crate::board::Board;
use crate::error::{Collision, GameOver, SetupError};
use crate::snake::{Coords, Direction, Snake};

/// Every this many moves the snake stretches one extra cell.
pub const GROWTH_INTERVAL: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Over(GameOver),
}

/// Outcome of a move that kept the game alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub moves: u32,
    pub grew: bool,
    pub head: Coords,
}

pub struct Game {
    board: Board,
    snake: Snake,
    moves: u32,
    status: Status,
}

impl Game {
    pub fn new(board: Board, snake: Snake) -> Result<Self, SetupError> {
        if let Some(pos) = snake.body().find(|pos| !board.contains(**pos)) {
            return Err(SetupError::OutOfBounds(*pos));
        }

        Ok(Game { board, snake, moves: 0, status: Status::Running })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Number of completed moves, which is also the score.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, Status::Over(_))
    }

    /// Applies one move in `direction`, plus the growth step on every
    /// `GROWTH_INTERVAL`th move. Once the game is over every call returns the
    /// same `GameOver` and nothing changes.
    pub fn move_snake(&mut self, direction: Direction) -> Result<Step, GameOver> {
        if let Status::Over(over) = self.status {
            return Err(over);
        }

        self.advance_head(direction, false)?;
        self.moves += 1;
        debug!("moved {} to {}, {} moves", direction, self.snake.head(), self.moves);

        let grew = self.moves % GROWTH_INTERVAL == 0;
        if grew {
            self.advance_head(direction, true)?;
            debug!("grew to {} cells", self.snake.size());
        }

        Ok(Step { moves: self.moves, grew, head: self.snake.head() })
    }

    /// Checks a proposed head. The tail has not moved yet at this point, so
    /// its current cell counts as occupied.
    pub fn check_collision(&self, next_head: Coords) -> Option<Collision> {
        if !self.board.contains(next_head) {
            Some(Collision::OutOfBounds(next_head))
        } else if self.snake.occupies(next_head) {
            Some(Collision::SelfCollision(next_head))
        } else {
            None
        }
    }

    pub fn is_game_over(&self, next_head: Coords) -> bool {
        self.check_collision(next_head).is_some()
    }

    fn advance_head(&mut self, direction: Direction, grow: bool) -> Result<(), GameOver> {
        let next_head = self.snake.head().step(direction);

        if let Some(cause) = self.check_collision(next_head) {
            let over = GameOver { cause, score: self.moves };
            warn!("{}", over);
            self.status = Status::Over(over);
            return Err(over);
        }

        self.snake.advance(next_head, grow);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction::*;
    use std::collections::HashSet;

    fn coords(cells: &[(i32, i32)]) -> Vec<Coords> {
        cells.iter().map(|&(r, c)| Coords::new(r, c)).collect()
    }

    fn game(size: u16, cells: &[(i32, i32)]) -> Game {
        let board = Board::new(size).unwrap();
        let snake = Snake::new(coords(cells)).unwrap();
        Game::new(board, snake).unwrap()
    }

    fn body_of(game: &Game) -> Vec<Coords> {
        game.snake().body().copied().collect()
    }

    fn occupied_of(game: &Game) -> HashSet<Coords> {
        game.snake().occupied().clone()
    }

    #[test]
    fn test_new_game() {
        let game = game(10, &[(5, 5), (4, 5), (3, 5)]);

        assert_eq!(game.moves(), 0);
        assert_eq!(game.status(), Status::Running);
        assert_eq!(game.snake().size(), 3);
        assert_eq!(game.board().size(), 10);
    }

    #[test]
    fn test_snake_must_fit_board() {
        let board = Board::new(4).unwrap();
        let snake = Snake::new(coords(&[(3, 3), (3, 4)])).unwrap();

        assert_eq!(
            Game::new(board, snake).err(),
            Some(SetupError::OutOfBounds(Coords::new(3, 4)))
        );
    }

    #[test]
    fn test_moving_up_shifts_body_then_grows() {
        let mut game = game(10, &[(5, 5), (4, 5), (3, 5)]);

        game.move_snake(Up).unwrap();
        assert_eq!(body_of(&game), coords(&[(4, 5), (3, 5), (2, 5)]));
        game.move_snake(Up).unwrap();
        assert_eq!(body_of(&game), coords(&[(3, 5), (2, 5), (1, 5)]));
        let step = game.move_snake(Up).unwrap();
        assert_eq!(body_of(&game), coords(&[(2, 5), (1, 5), (0, 5)]));
        assert_eq!(occupied_of(&game), coords(&[(2, 5), (1, 5), (0, 5)]).into_iter().collect::<HashSet<_>>());
        assert!(!step.grew);
        assert_eq!(game.snake().size(), 3);

        game.move_snake(Right).unwrap();
        let step = game.move_snake(Right).unwrap();

        assert!(step.grew);
        assert_eq!(step.moves, 5);
        assert_eq!(step.head, Coords::new(0, 8));
        assert_eq!(game.snake().size(), 4);
        assert_eq!(body_of(&game), coords(&[(0, 5), (0, 6), (0, 7), (0, 8)]));
        assert_eq!(game.snake().occupied().len(), 4);
    }

    #[test]
    fn test_leaving_top_edge_ends_game() {
        let mut game = game(10, &[(2, 3), (1, 3), (0, 3)]);
        game.moves = 2;
        let before = body_of(&game);

        let over = game.move_snake(Up).unwrap_err();

        assert_eq!(over.cause, Collision::OutOfBounds(Coords::new(-1, 3)));
        assert_eq!(over.score, 2);
        assert_eq!(game.moves(), 2);
        assert_eq!(body_of(&game), before);
        assert!(game.is_over());
    }

    #[test]
    fn test_every_edge_is_out_of_bounds() {
        let game = game(6, &[(2, 2), (2, 3)]);

        for n in -1..=6 {
            assert!(game.is_game_over(Coords::new(-1, n)));
            assert!(game.is_game_over(Coords::new(6, n)));
            assert!(game.is_game_over(Coords::new(n, -1)));
            assert!(game.is_game_over(Coords::new(n, 6)));
        }
        assert!(!game.is_game_over(Coords::new(0, 0)));
        assert!(!game.is_game_over(Coords::new(5, 5)));
    }

    #[test]
    fn test_every_occupied_cell_collides() {
        let game = game(10, &[(4, 4), (4, 5), (4, 6), (5, 6)]);

        for pos in body_of(&game) {
            assert_eq!(game.check_collision(pos), Some(Collision::SelfCollision(pos)));
        }
        assert_eq!(game.check_collision(Coords::new(6, 6)), None);
    }

    #[test]
    fn test_moving_onto_tail_ends_game() {
        // Tail at (1, 1), head at (2, 1): going up lands on the tail cell.
        let mut game = game(10, &[(1, 1), (1, 2), (2, 2), (2, 1)]);

        let over = game.move_snake(Up).unwrap_err();

        assert_eq!(over.cause, Collision::SelfCollision(Coords::new(1, 1)));
        assert_eq!(game.snake().size(), 4);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_curling_into_mid_body_ends_game() {
        let mut game = game(10, &[(3, 1), (2, 1), (1, 1), (1, 2), (1, 3), (2, 3), (2, 2)]);

        let over = game.move_snake(Left).unwrap_err();

        assert_eq!(over, GameOver { cause: Collision::SelfCollision(Coords::new(2, 1)), score: 0 });
    }

    #[test]
    fn test_failed_growth_step_ends_game() {
        let mut game = game(10, &[(3, 5), (2, 5), (1, 5)]);
        game.moves = GROWTH_INTERVAL - 1;

        let over = game.move_snake(Up).unwrap_err();

        assert_eq!(over.cause, Collision::OutOfBounds(Coords::new(-1, 5)));
        assert_eq!(over.score, GROWTH_INTERVAL);
        assert_eq!(game.snake().head(), Coords::new(0, 5));
        assert_eq!(game.snake().size(), 3);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut game = game(10, &[(0, 1), (0, 0)]);
        let first = game.move_snake(Left).unwrap_err();
        let body = body_of(&game);

        assert_eq!(game.move_snake(Down), Err(first));
        assert_eq!(game.move_snake(Right), Err(first));
        assert_eq!(body_of(&game), body);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.status(), Status::Over(first));
    }

    #[test]
    fn test_growth_every_fifth_move_regardless_of_path() {
        let paths: [&[Direction]; 3] = [
            &[Right, Down],
            &[Down, Down, Right],
            &[Right, Right, Right, Down, Down, Down, Down],
        ];

        for path in paths.iter() {
            let mut game = game(60, &[(1, 0), (1, 1), (1, 2)]);
            let initial = game.snake().size();

            for (i, dir) in path.iter().cycle().take(40).enumerate() {
                let step = game.move_snake(*dir).unwrap();
                let moves = i as u32 + 1;

                assert_eq!(step.moves, moves);
                assert_eq!(step.grew, moves % GROWTH_INTERVAL == 0);
                assert_eq!(game.snake().size(), initial + (moves / GROWTH_INTERVAL) as usize);
                assert_eq!(game.snake().occupied().len(), game.snake().size());
            }
        }
    }
}
