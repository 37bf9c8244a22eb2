//! Core types: board configuration and randomness sources.

pub mod config;
pub mod rng;

pub use config::{BoardConfig, BoardSize, MIN_CARDS};
pub use rng::{FixedShuffle, GameRng, GameRngState, NoShuffle, Shuffle};
