use crate::TermInt;
use crate::error::SetupError;
use crate::snake::Coords;

/// Square playing field of side `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    size: TermInt,
}

impl Board {
    pub fn new(size: TermInt) -> Result<Self, SetupError> {
        if size == 0 {
            return Err(SetupError::EmptyBoard);
        }

        Ok(Board { size })
    }

    pub fn size(&self) -> TermInt {
        self.size
    }

    pub fn contains(&self, pos: Coords) -> bool {
        let n = i32::from(self.size);
        (0..n).contains(&pos.row) && (0..n).contains(&pos.col)
    }
}
