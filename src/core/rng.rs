//! Randomness sources for board generation.
//!
//! Board construction never touches an ambient RNG. Every shuffle goes through
//! the [`Shuffle`] trait so games can be replayed from a seed and tests can
//! pin the exact card layout.
//!
//! ```
//! use memory_match::core::{GameRng, Shuffle};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! let mut a = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut b = a.clone();
//! rng1.shuffle(&mut a);
//! rng2.shuffle(&mut b);
//!
//! // Same seed, same permutation
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::{MemoryError, Result};

/// A source of uniform random permutations.
pub trait Shuffle {
    /// Permute `items` in place.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

/// Deterministic RNG backed by ChaCha8.
///
/// Same seed produces the same sequence of shuffles. The state can be
/// captured with [`GameRng::state`] and restored with [`GameRng::from_state`].
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl Shuffle for GameRng {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position so capture and restore are O(1)
/// regardless of how many shuffles have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Leaves every sequence in its original order.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoShuffle;

impl Shuffle for NoShuffle {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}

/// Applies one fixed permutation to every sequence of matching length.
///
/// Sequences of any other length are left untouched. After shuffling,
/// `items[i]` holds what was previously at `items[permutation[i]]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedShuffle {
    permutation: Vec<usize>,
}

impl FixedShuffle {
    /// Fails unless `permutation` contains each of `0..len` exactly once.
    pub fn new(permutation: Vec<usize>) -> Result<Self> {
        let mut seen = vec![false; permutation.len()];
        for &index in &permutation {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                _ => {
                    return Err(MemoryError::InvalidConfiguration(format!(
                        "{permutation:?} is not a permutation"
                    )))
                }
            }
        }
        Ok(Self { permutation })
    }

    #[must_use]
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }
}

impl Shuffle for FixedShuffle {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        if items.len() == self.permutation.len() {
            apply_permutation(items, &self.permutation);
        }
    }
}

/// Reorder `items` so that `items[i]` becomes the old `items[permutation[i]]`.
///
/// Walks each cycle once with swaps, so `T` needs no `Clone`.
fn apply_permutation<T>(items: &mut [T], permutation: &[usize]) {
    let mut pending = permutation.to_vec();
    for start in 0..items.len() {
        let mut current = start;
        loop {
            let source = pending[current];
            pending[current] = current;
            if source == start {
                break;
            }
            items.swap(current, source);
            current = source;
        }
    }
}
