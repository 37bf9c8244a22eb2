//! The memory game engine: dealing, flipping, matching and win detection.

mod engine;

pub use engine::{FlipOutcome, MemoryGame};
