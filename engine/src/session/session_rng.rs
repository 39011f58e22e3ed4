use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Session-owned RNG seeded once, so a recorded seed reproduces the seat
/// shuffle exactly.
#[derive(Debug)]
pub struct SessionRng(StdRng);

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_random() -> Self {
        Self::new(rand::random())
    }

    pub fn coin_flip(&mut self) -> bool {
        self.0.random()
    }
}
