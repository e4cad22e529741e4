use tictactoe_common::games::tictactoe::GameOutcome;

/// Cross-round results, kept for the lifetime of the process only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::XWon => self.x_wins += 1,
            GameOutcome::OWon => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}
