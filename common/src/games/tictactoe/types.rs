use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell coordinate, zero-based. Legality depends on the board it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Rendered as `A1`..`C3`: row letter then column digit.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = match self.row {
            0 => 'A',
            1 => 'B',
            2 => 'C',
            _ => '?',
        };
        write!(f, "{}{}", row, self.col + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::XWon => Some(Mark::X),
            GameOutcome::OWon => Some(Mark::O),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        *self != GameOutcome::InProgress
    }
}
