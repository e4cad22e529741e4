use tictactoe_common::games::tictactoe::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    Quit,
    Place(Move),
}

pub fn parse_input(line: &str) -> Option<PlayerInput> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("quit") {
        return Some(PlayerInput::Quit);
    }
    parse_move(trimmed).map(PlayerInput::Place)
}

/// Parses `A1`..`C3` (any case, surrounding whitespace ignored) into a zero-based move.
/// Only the notation is checked here; whether the cell is free is up to the board.
pub fn parse_move(text: &str) -> Option<Move> {
    let upper = text.trim().to_ascii_uppercase();
    let mut chars = upper.chars();
    let (Some(row_char), Some(col_char), None) = (chars.next(), chars.next(), chars.next()) else {
        return None;
    };

    let row = match row_char {
        'A' => 0,
        'B' => 1,
        'C' => 2,
        _ => return None,
    };
    let col = match col_char {
        '1' => 0,
        '2' => 1,
        '3' => 2,
        _ => return None,
    };

    Some(Move::new(row, col))
}

pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
