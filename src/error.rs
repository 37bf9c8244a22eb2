//! Error taxonomy for the engine and its custom-board layer.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("Invalid board configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Position {position} is out of range for a board of {len} cards")]
    IndexOutOfRange { position: usize, len: usize },
    #[error("Game already won, no new flips are accepted")]
    GameOver,
    #[error("Card at position {0} is already face up")]
    CardAlreadyFaceUp(usize),
    #[error("Invalid game name: {0}")]
    InvalidGameName(String),
    #[error("Game name '{0}' is already taken")]
    GameNameTaken(String),
    #[error("Game '{0}' not found")]
    GameNotFound(String),
    #[error("Malformed board document: {0}")]
    MalformedDocument(String),
}

pub type Result<T> = std::result::Result<T, MemoryError>;
