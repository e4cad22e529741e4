mod board;
mod bot_controller;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{COMPUTER_MARK, HUMAN_MARK, MoveSelector, minimax, optimal_move, random_move};
pub use settings::{DEFAULT_OPTIMAL_PROBABILITY, MoveSelectorSettings};
pub use types::{GameOutcome, Mark, Move};
pub use win_detector::{BOARD_SIZE, LINES, check_win, check_win_with_line};
