//! Deterministic random number generation for the computer opponent.
//!
//! The Easy and Medium tiers (and the Hard tier's opening move) draw from a
//! `GameRng` that the caller owns and passes in. Nothing in the crate
//! touches a global generator, so a fixed seed reproduces every choice.
//!
//! ```
//! use oware::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! let moves = [0usize, 1, 2, 3, 4, 5];
//! assert_eq!(a.choose(&moves), b.choose(&moves));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// Probabilities outside `0.0..=1.0` are clamped; NaN counts as 0.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        if probability.is_nan() {
            return false;
        }
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<T: Copy>(&mut self, slice: &[T]) -> Option<T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(rng: &mut GameRng, n: usize) -> Vec<usize> {
        let items: Vec<usize> = (0..100).collect();
        (0..n).map(|_| rng.choose(&items).unwrap()).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);
        assert_eq!(draw(&mut rng1, 50), draw(&mut rng2, 50));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);
        assert_ne!(draw(&mut rng1, 20), draw(&mut rng2, 20));
    }

    #[test]
    fn test_choose_empty() {
        let mut rng = GameRng::new(42);
        let empty: [usize; 0] = [];
        assert_eq!(rng.choose(&empty), None);
    }

    #[test]
    fn test_gen_bool_extremes() {
        let mut rng = GameRng::new(42);
        for _ in 0..20 {
            assert!(!rng.gen_bool(0.0));
            assert!(rng.gen_bool(1.0));
        }
    }

    #[test]
    fn test_gen_bool_out_of_range_probabilities() {
        let mut rng = GameRng::new(42);
        for _ in 0..20 {
            assert!(!rng.gen_bool(f64::NAN));
            assert!(!rng.gen_bool(-0.5));
            assert!(!rng.gen_bool(f64::NEG_INFINITY));
            assert!(rng.gen_bool(3.0));
            assert!(rng.gen_bool(f64::INFINITY));
        }
    }
}
