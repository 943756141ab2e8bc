//! Seedable random source for the computer player.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Random number generator owned by one engine.
///
/// Every generator is built from a `u64` seed, so a game can be replayed
/// exactly by constructing the engine with the same seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    /// Creates a generator from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator seeded from the thread-local entropy source.
    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    /// The seed this generator was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fair coin flip.
    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }

    /// Picks one element uniformly, or `None` from an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

impl std::fmt::Debug for SessionRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRng").field("seed", &self.seed).finish()
    }
}

impl Default for SessionRng {
    fn default() -> Self {
        Self::from_random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(42);
        let mut b = SessionRng::new(42);
        let items: Vec<u32> = (0..100).collect();
        let xs: Vec<u32> = (0..16).map(|_| *a.choose(&items).unwrap()).collect();
        let ys: Vec<u32> = (0..16).map(|_| *b.choose(&items).unwrap()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_choose_empty_slice() {
        let mut rng = SessionRng::new(1);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose(&empty), None);
        assert_eq!(rng.choose(&[7]), Some(&7));
    }
}
