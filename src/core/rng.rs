//! Deterministic random number generation for target draws and random dials.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same targets and rolls
//! - **Serializable**: O(1) state capture and restore via ChaCha word position
//!
//! ```
//! use lab_rules::core::SessionRng;
//!
//! let mut a = SessionRng::new(42);
//! let mut b = SessionRng::new(42);
//! assert_eq!(a.pick_index(4), b.pick_index(4));
//! assert_eq!(a.roll(0, 29), b.roll(0, 29));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG owned by one session.
///
/// Uses ChaCha8 for speed; the only consumers are target draws and
/// random dials, so a single stream is enough.
#[derive(Clone, Debug)]
pub struct SessionRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SessionRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick an index in `0..len`. Returns `None` when `len` is zero.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
    }

    /// Roll an integer in the inclusive range `[min, max]`.
    ///
    /// A reversed range yields `min`.
    pub fn roll(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        self.inner.gen_range(min..=max)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> SessionRngState {
        SessionRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &SessionRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = SessionRng::new(42);
        let mut rng2 = SessionRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll(0, 1000), rng2.roll(0, 1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = SessionRng::new(1);
        let mut rng2 = SessionRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.roll(0, 1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.roll(0, 1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_pick_index() {
        let mut rng = SessionRng::new(7);
        for _ in 0..50 {
            let i = rng.pick_index(4).unwrap();
            assert!(i < 4);
        }
        assert_eq!(rng.pick_index(0), None);
        assert_eq!(rng.pick_index(1), Some(0));
    }

    #[test]
    fn test_roll_is_inclusive() {
        let mut rng = SessionRng::new(3);
        let rolls: Vec<_> = (0..500).map(|_| rng.roll(0, 2)).collect();
        assert!(rolls.contains(&0));
        assert!(rolls.contains(&2));
        assert!(rolls.iter().all(|r| (0..=2).contains(r)));

        assert_eq!(rng.roll(5, 5), 5);
        assert_eq!(rng.roll(9, 1), 9);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = SessionRng::new(42);
        for _ in 0..100 {
            rng.roll(0, 1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.roll(0, 1000)).collect();

        let mut restored = SessionRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll(0, 1000)).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = SessionRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: SessionRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
