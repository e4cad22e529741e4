use super::types::{GameOutcome, Mark, Move};
use super::win_detector::{BOARD_SIZE, check_win, check_win_with_line};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Returns `None` for out-of-range coordinates.
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(Mark::Empty)
    }

    /// The only way to put a mark on the board during play. Leaves the board
    /// untouched and returns `false` when the target is occupied or out of range.
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if mark == Mark::Empty || !self.is_valid_move(row, col) {
            return false;
        }
        self.cells[row][col] = mark;
        true
    }

    pub fn check_outcome(&self) -> GameOutcome {
        match check_win(&self.cells) {
            Some(Mark::X) => GameOutcome::XWon,
            Some(Mark::O) => GameOutcome::OWon,
            _ if self.is_full() => GameOutcome::Draw,
            _ => GameOutcome::InProgress,
        }
    }

    pub fn winning_line(&self) -> Option<[Move; 3]> {
        check_win_with_line(&self.cells).map(|(_, line)| line)
    }

    pub fn reset(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    /// Tentatively places `mark` at `mv`, runs `f`, then puts the previous
    /// cell value back. Used by the search; the board seen by the caller
    /// after this returns is identical to the one before.
    pub(crate) fn with_mark<R>(&mut self, mv: Move, mark: Mark, f: impl FnOnce(&mut Board) -> R) -> R {
        debug_assert!(self.is_valid_move(mv.row, mv.col));
        let previous = self.cells[mv.row][mv.col];
        self.cells[mv.row][mv.col] = mark;
        let result = f(self);
        self.cells[mv.row][mv.col] = previous;
        result
    }

    /// Builds a board from three rows like `"X.O"`, where `.` is empty.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                board.cells[row][col] = match ch {
                    'X' => Mark::X,
                    'O' => Mark::O,
                    _ => Mark::Empty,
                };
            }
        }
        board
    }
}
