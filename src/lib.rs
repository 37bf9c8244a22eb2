//! # memory-match
//!
//! A memory-matching ("concentration") game engine.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: `MemoryGame` is a synchronous in-memory data
//!    structure. No I/O, no clocks, no ambient randomness.
//!
//! 2. **Injected randomness**: Every deal draws from a `Shuffle`
//!    implementation, so a seed (or a fixed permutation) reproduces a board.
//!
//! 3. **Caller-owned guards**: The engine never refuses a flip on a won game
//!    or on a face-up card. `GameSession` (or the host UI) checks those and
//!    reports them to the player.
//!
//! ## Modules
//!
//! - `core`: Board configuration, presets, RNG
//! - `cards`: Icon catalog, card faces, card state
//! - `game`: The flip/match engine
//! - `custom`: Named custom boards and their document store
//! - `session`: Board lifecycle and caller-side guards

pub mod cards;
pub mod core;
pub mod custom;
pub mod error;
pub mod game;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, BoardSize, FixedShuffle, GameRng, GameRngState, NoShuffle, Shuffle,
};

pub use crate::cards::{CardFace, Icon, MemoryCard};

pub use crate::custom::{BoardStore, CustomBoard, ImageList, InMemoryBoardStore};

pub use crate::error::{MemoryError, Result};

pub use crate::game::{FlipOutcome, MemoryGame};

pub use crate::session::GameSession;
