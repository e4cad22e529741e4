use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable source for every random decision a session makes, so a game can be
/// replayed from its seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// Fair coin.
    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }

    /// `true` with the given probability, clamped to [0, 1].
    pub fn chance(&mut self, probability: f64) -> bool {
        if probability.is_nan() {
            return false;
        }
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_gives_same_sequence() {
        let mut a = SessionRng::new(99);
        let mut b = SessionRng::new(99);
        for _ in 0..50 {
            assert_eq!(a.random_range(0..9usize), b.random_range(0..9usize));
            assert_eq!(a.random_bool(), b.random_bool());
        }
        assert_eq!(a.seed(), 99);
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = SessionRng::new(1);
        for _ in 0..100 {
            assert!(rng.chance(1.0));
            assert!(!rng.chance(0.0));
            assert!(rng.chance(3.0));
            assert!(!rng.chance(-1.0));
        }
    }

    #[test]
    fn test_coin_lands_both_ways() {
        let mut rng = SessionRng::new(8);
        let heads = (0..200).filter(|_| rng.random_bool()).count();
        assert!(heads > 0 && heads < 200);
    }
}
