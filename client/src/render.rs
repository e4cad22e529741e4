use tictactoe_common::games::tictactoe::{BOARD_SIZE, Board, GameOutcome, Move};

use crate::score::ScoreTally;

const ROW_LABELS: [char; BOARD_SIZE] = ['A', 'B', 'C'];
const SEPARATOR: &str = "   +---+---+---+";

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("\n     1   2   3\n");
    out.push_str(SEPARATOR);
    out.push('\n');
    for (label, row) in ROW_LABELS.iter().zip(board.cells().iter()) {
        let cells: Vec<String> = row.iter().map(|mark| mark.to_string()).collect();
        out.push_str(&format!(" {} | {} |\n", label, cells.join(" | ")));
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out
}

pub fn render_outcome(outcome: GameOutcome, board: &Board) -> String {
    let message = match outcome {
        GameOutcome::XWon => "You win!",
        GameOutcome::OWon => "Computer wins!",
        GameOutcome::Draw => "It's a draw!",
        GameOutcome::InProgress => return String::new(),
    };
    match board.winning_line() {
        Some(line) => format!("{} ({})", message, render_line(&line)),
        None => message.to_string(),
    }
}

fn render_line(line: &[Move; 3]) -> String {
    line.iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

pub fn render_scores(scores: &ScoreTally) -> String {
    format!(
        "\nScores:\nHuman (X): {}\nComputer (O): {}\nDraws: {}\n",
        scores.x_wins, scores.o_wins, scores.draws
    )
}
