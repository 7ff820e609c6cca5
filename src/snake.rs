use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;

use crate::TermInt;
use crate::board::Board;
use crate::error::SetupError;
use Direction::*;

pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Smallest board a straight three-cell snake can be placed on.
pub const MIN_START_BOARD: TermInt = 4;

/// A cell on the board, addressed by row then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coords {
    pub row: i32,
    pub col: i32,
}

impl Coords {
    pub fn new(row: i32, col: i32) -> Self {
        Coords { row, col }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Coords::new(self.row + d_row, self.col + d_col)
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    /// Unit step as `(row, col)`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Letter shown to the player for this direction.
    pub fn key(self) -> char {
        match self {
            Up => 'W',
            Down => 'S',
            Left => 'A',
            Right => 'D',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Up => "Up",
            Down => "Down",
            Left => "Left",
            Right => "Right",
        };
        f.write_str(name)
    }
}

/// Snake body, tail at the front and head at the back, plus the set of cells
/// it covers. The set always holds exactly the cells of the body.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Coords>,
    occupied: HashSet<Coords>,
}

impl Snake {
    /// Builds a snake from cells listed tail first.
    pub fn new<I: IntoIterator<Item = Coords>>(cells: I) -> Result<Self, SetupError> {
        let mut body = VecDeque::new();
        let mut occupied = HashSet::new();

        for pos in cells {
            if !occupied.insert(pos) {
                return Err(SetupError::Overlap(pos));
            }
            body.push_back(pos);
        }

        if body.is_empty() {
            return Err(SetupError::EmptyBody);
        }

        let snake = Snake { body, occupied };
        snake.check_occupancy();
        Ok(snake)
    }

    /// A straight snake of `len` cells whose head sits at `head`, trailing
    /// away from `facing`.
    pub fn straight(head: Coords, facing: Direction, len: usize) -> Self {
        let len = len.max(1);
        let back = facing.opposite();

        let mut cells = Vec::with_capacity(len);
        let mut pos = head;
        for _ in 0..len {
            cells.push(pos);
            pos = pos.step(back);
        }
        cells.reverse();

        let occupied = cells.iter().copied().collect();
        let snake = Snake { body: cells.into(), occupied };
        snake.check_occupancy();
        snake
    }

    /// Moves the head to `next_head`, dropping the tail unless `grow` is set.
    /// `next_head` must already have been checked for collisions.
    pub fn advance(&mut self, next_head: Coords, grow: bool) {
        if !grow {
            if let Some(old_tail) = self.body.pop_front() {
                self.occupied.remove(&old_tail);
            }
        }

        self.body.push_back(next_head);
        self.occupied.insert(next_head);

        self.check_occupancy();
    }

    pub fn size(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Coords {
        *self.body.back().expect("snake body is never empty")
    }

    pub fn tail(&self) -> Coords {
        *self.body.front().expect("snake body is never empty")
    }

    /// Cells from tail to head.
    pub fn body(&self) -> impl Iterator<Item = &Coords> + '_ {
        self.body.iter()
    }

    pub fn occupies(&self, pos: Coords) -> bool {
        self.occupied.contains(&pos)
    }

    pub fn occupied(&self) -> &HashSet<Coords> {
        &self.occupied
    }

    fn check_occupancy(&self) {
        assert_eq!(
            self.occupied.len(),
            self.body.len(),
            "occupancy set out of sync with snake body"
        );
    }
}

/// Picks a random facing and a straight three-cell snake for `board`.
///
/// The cells span `a - 2 ..= a` along the axis of travel. On boards of five
/// or more the line keeps one free cell from either edge.
pub fn random_start<R: Rng>(board: &Board, rng: &mut R) -> Result<(Snake, Direction), SetupError> {
    let size = board.size();
    if size < MIN_START_BOARD {
        return Err(SetupError::BoardTooSmall { size, min: MIN_START_BOARD });
    }

    let n = i32::from(size);
    let facing = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
    let far_end = rng.gen_range(start_axis_range(n));
    let across = rng.gen_range(0..n);

    let head = match facing {
        Up => Coords::new(far_end - 2, across),
        Down => Coords::new(far_end, across),
        Left => Coords::new(across, far_end - 2),
        Right => Coords::new(across, far_end),
    };

    Ok((Snake::straight(head, facing, INITIAL_SNAKE_LENGTH), facing))
}

fn start_axis_range(n: i32) -> RangeInclusive<i32> {
    if n >= 5 {
        3..=n - 2
    } else {
        2..=n - 1
    }
}
