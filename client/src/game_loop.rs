use std::io::{self, BufRead, Write};
use std::time::Duration;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    Board, COMPUTER_MARK, GameOutcome, HUMAN_MARK, Mark, Move, MoveSelector,
};
use tictactoe_common::log;

use crate::config::{Config, FirstPlayerMode};
use crate::input::{PlayerInput, is_affirmative, parse_input};
use crate::render::{render_board, render_outcome, render_scores};
use crate::score::ScoreTally;

enum RoundEnd {
    Finished(GameOutcome),
    Quit,
}

/// Text driver: alternates human and computer turns on one board, keeps the
/// tally across rounds and asks whether to play again.
pub struct TextGame<R: BufRead, W: Write> {
    input: R,
    output: W,
    board: Board,
    selector: MoveSelector,
    rng: SessionRng,
    scores: ScoreTally,
    first_player: FirstPlayerMode,
    think_delay: Duration,
}

impl<R: BufRead, W: Write> TextGame<R, W> {
    pub fn new(input: R, output: W, config: &Config, rng: SessionRng) -> Self {
        Self {
            input,
            output,
            board: Board::new(),
            selector: MoveSelector::new(config.computer),
            rng,
            scores: ScoreTally::new(),
            first_player: config.first_player,
            think_delay: config.think_delay(),
        }
    }

    #[cfg(test)]
    fn board(&self) -> &Board {
        &self.board
    }

    /// Plays rounds until the human quits, declines a rematch or input runs out.
    pub fn run(&mut self) -> io::Result<ScoreTally> {
        writeln!(self.output, "\nWelcome to Tic-Tac-Toe!")?;
        writeln!(
            self.output,
            "Enter moves in format 'A1', 'B2', etc. (or 'quit' to exit)"
        )?;

        loop {
            let outcome = match self.play_round()? {
                RoundEnd::Finished(outcome) => outcome,
                RoundEnd::Quit => break,
            };

            self.scores.record(outcome);
            log!(
                "Round finished: {:?}, tally X={} O={} draws={}",
                outcome,
                self.scores.x_wins,
                self.scores.o_wins,
                self.scores.draws
            );
            writeln!(self.output, "{}", render_outcome(outcome, &self.board))?;
            write!(self.output, "{}", render_scores(&self.scores))?;

            write!(self.output, "\nPlay again? (yes/no): ")?;
            self.output.flush()?;
            match self.read_line()? {
                Some(answer) if is_affirmative(&answer) => {}
                _ => break,
            }
        }

        writeln!(self.output, "\nThanks for playing!")?;
        self.output.flush()?;
        Ok(self.scores)
    }

    fn play_round(&mut self) -> io::Result<RoundEnd> {
        self.board.reset();
        let mut current = self.first_player.choose(&mut self.rng);
        log!("Round {} starts, {} moves first", self.scores.games_played() + 1, current);
        writeln!(
            self.output,
            "\n{}",
            if current == HUMAN_MARK {
                "You go first!"
            } else {
                "Computer goes first!"
            }
        )?;

        loop {
            write!(self.output, "{}", render_board(&self.board))?;
            writeln!(self.output)?;

            let mv = if current == HUMAN_MARK {
                match self.read_human_move()? {
                    Some(mv) => mv,
                    None => return Ok(RoundEnd::Quit),
                }
            } else {
                match self.computer_move()? {
                    Some(mv) => mv,
                    None => return Ok(RoundEnd::Finished(self.board.check_outcome())),
                }
            };

            if !self.board.apply_move(mv.row, mv.col, current) {
                continue;
            }
            log!("{} plays {}", current, mv);

            let outcome = self.board.check_outcome();
            if outcome.is_over() {
                write!(self.output, "{}", render_board(&self.board))?;
                writeln!(self.output)?;
                return Ok(RoundEnd::Finished(outcome));
            }

            current = current.opponent().unwrap_or(Mark::X);
        }
    }

    /// Re-prompts until a free cell is named. `None` means quit or end of input.
    fn read_human_move(&mut self) -> io::Result<Option<Move>> {
        loop {
            write!(self.output, "Your move (e.g., 'A1'): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match parse_input(&line) {
                Some(PlayerInput::Quit) => return Ok(None),
                Some(PlayerInput::Place(mv)) if self.board.is_valid_move(mv.row, mv.col) => {
                    return Ok(Some(mv));
                }
                _ => {
                    writeln!(self.output, "Invalid move! Use format 'A1', 'B2', etc.")?;
                }
            }
        }
    }

    fn computer_move(&mut self) -> io::Result<Option<Move>> {
        writeln!(self.output, "Computer is thinking...")?;
        self.output.flush()?;
        if !self.think_delay.is_zero() {
            std::thread::sleep(self.think_delay);
        }
        let mv = self.selector.select_move(&mut self.board, &mut self.rng);
        if let Some(mv) = mv {
            writeln!(self.output, "Computer ({}) plays {}", COMPUTER_MARK, mv)?;
        }
        Ok(mv)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_common::games::tictactoe::MoveSelectorSettings;

    fn test_config(first_player: FirstPlayerMode) -> Config {
        Config {
            computer: MoveSelectorSettings::always_optimal(),
            first_player,
            think_delay_ms: 0,
        }
    }

    fn play(script: &str, first_player: FirstPlayerMode) -> (ScoreTally, Board, String) {
        let mut output = Vec::new();
        let (scores, board) = {
            let mut game = TextGame::new(
                Cursor::new(script.to_string()),
                &mut output,
                &test_config(first_player),
                SessionRng::new(1),
            );
            let scores = game.run().unwrap();
            (scores, game.board().clone())
        };
        (scores, board, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_computer_blocks_row_threat() {
        let (scores, board, output) = play("a1\na2\nquit\n", FirstPlayerMode::Human);
        assert_eq!(board.get(1, 1), Some(Mark::O));
        assert_eq!(board.get(0, 2), Some(Mark::O));
        assert_eq!(scores, ScoreTally::default());
        assert!(output.contains("You go first!"));
        assert!(output.contains("Computer (O) plays B2"));
        assert!(output.trim_end().ends_with("Thanks for playing!"));
    }

    #[test]
    fn test_computer_punishes_ignored_threat() {
        let (scores, board, output) = play("a1\nc3\nb1\nc2\nno\n", FirstPlayerMode::Human);
        assert_eq!(board.check_outcome(), GameOutcome::OWon);
        assert_eq!(scores.o_wins, 1);
        assert!(output.contains("Computer wins! (A3-B2-C1)"));
        assert!(output.contains("Computer (O): 1"));
        assert!(output.contains("Play again? (yes/no): "));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let (_, board, output) = play("zz\na1\na1\nd4\nquit\n", FirstPlayerMode::Human);
        assert_eq!(output.matches("Invalid move!").count(), 3);
        assert_eq!(board.get(0, 0), Some(Mark::X));
        assert_eq!(board.available_moves().len(), 7);
    }

    #[test]
    fn test_end_of_input_stops_cleanly() {
        let (scores, board, output) = play("", FirstPlayerMode::Human);
        assert_eq!(scores, ScoreTally::default());
        assert_eq!(board, Board::new());
        assert!(output.contains("Thanks for playing!"));
    }

    #[test]
    fn test_computer_opens_in_corner_when_first() {
        let (_, board, output) = play("quit\n", FirstPlayerMode::Computer);
        assert!(output.contains("Computer goes first!"));
        assert!(output.contains(" A | O |   |   |"));
        assert_eq!(board.get(0, 0), Some(Mark::O));
    }

    #[test]
    fn test_play_again_starts_fresh_round() {
        let (scores, board, output) =
            play("a1\nc3\nb1\nc2\nyes\nquit\n", FirstPlayerMode::Human);
        assert_eq!(scores.games_played(), 1);
        assert_eq!(output.matches("You go first!").count(), 2);
        assert_eq!(board, Board::new());
    }
}
