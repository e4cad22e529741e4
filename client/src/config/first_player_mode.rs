use serde::{Deserialize, Serialize};
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{COMPUTER_MARK, HUMAN_MARK, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FirstPlayerMode {
    /// Coin flip at the start of every round.
    #[default]
    Random,
    Human,
    Computer,
}

impl FirstPlayerMode {
    pub fn choose(&self, rng: &mut SessionRng) -> Mark {
        match self {
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    HUMAN_MARK
                } else {
                    COMPUTER_MARK
                }
            }
            FirstPlayerMode::Human => HUMAN_MARK,
            FirstPlayerMode::Computer => COMPUTER_MARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_modes() {
        let mut rng = SessionRng::new(0);
        assert_eq!(FirstPlayerMode::Human.choose(&mut rng), Mark::X);
        assert_eq!(FirstPlayerMode::Computer.choose(&mut rng), Mark::O);
    }

    #[test]
    fn test_random_mode_picks_both_sides() {
        let mut rng = SessionRng::new(17);
        let picks: Vec<Mark> = (0..100)
            .map(|_| FirstPlayerMode::Random.choose(&mut rng))
            .collect();
        assert!(picks.contains(&Mark::X));
        assert!(picks.contains(&Mark::O));
    }
}
