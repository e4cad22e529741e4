use crate::games::SessionRng;
use super::board::Board;
use super::settings::MoveSelectorSettings;
use super::types::{GameOutcome, Mark, Move};

/// The computer always plays O; the search scores positions from O's side.
pub const COMPUTER_MARK: Mark = Mark::O;
pub const HUMAN_MARK: Mark = Mark::X;

pub struct MoveSelector {
    settings: MoveSelectorSettings,
}

impl MoveSelector {
    pub fn new(settings: MoveSelectorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &MoveSelectorSettings {
        &self.settings
    }

    /// Picks the computer's next move. Each call independently rolls between the
    /// full search and a random empty cell. Returns `None` only on a full board.
    ///
    /// The board is borrowed mutably for the search and is back in its original
    /// state when this returns.
    pub fn select_move(&self, board: &mut Board, rng: &mut SessionRng) -> Option<Move> {
        if rng.chance(self.settings.optimal_probability) {
            optimal_move(board)
        } else {
            random_move(board, rng)
        }
    }
}

pub fn random_move(board: &Board, rng: &mut SessionRng) -> Option<Move> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Highest-scoring move for O. Ties keep the first candidate in row-major order.
pub fn optimal_move(board: &mut Board) -> Option<Move> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for mv in board.available_moves() {
        let score = board.with_mark(mv, COMPUTER_MARK, |b| minimax(b, false));
        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
    }

    best_move
}

/// Exhaustive game value from O's point of view: 1 for an O win, -1 for an X win,
/// 0 for a draw. No depth discount.
pub fn minimax(board: &mut Board, is_maximizing: bool) -> i32 {
    match board.check_outcome() {
        GameOutcome::OWon => return 1,
        GameOutcome::XWon => return -1,
        GameOutcome::Draw => return 0,
        GameOutcome::InProgress => {}
    }

    let moves = board.available_moves();

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for mv in moves {
            let eval = board.with_mark(mv, COMPUTER_MARK, |b| minimax(b, false));
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for mv in moves {
            let eval = board.with_mark(mv, HUMAN_MARK, |b| minimax(b, true));
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
