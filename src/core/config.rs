//! Board configuration types.
//!
//! - `BoardConfig`: Any validated board shape (width, height, pair count)
//! - `BoardSize`: The four preset shapes offered to players
//!
//! The engine only reads width, height and pair count, so a host is free to
//! build any even-area board rather than a preset.

use serde::{Deserialize, Serialize};

use crate::error::{MemoryError, Result};

/// Smallest board: a single attempt must be possible on two pairs.
pub const MIN_CARDS: usize = 4;

/// Shape of a board.
///
/// Immutable once built. `width * height` is always even and at least
/// [`MIN_CARDS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig", into = "RawBoardConfig")]
pub struct BoardConfig {
    width: usize,
    height: usize,
}

impl BoardConfig {
    /// Create a board configuration, rejecting odd or too-small areas.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let cards = width.checked_mul(height).ok_or_else(|| {
            MemoryError::InvalidConfiguration(format!("{width}x{height} board is too large"))
        })?;
        if cards < MIN_CARDS {
            return Err(MemoryError::InvalidConfiguration(format!(
                "{width}x{height} board has {cards} cards, at least {MIN_CARDS} are required"
            )));
        }
        if cards % 2 != 0 {
            return Err(MemoryError::InvalidConfiguration(format!(
                "{width}x{height} board has an odd number of cards"
            )));
        }
        Ok(Self { width, height })
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cards on the board.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of distinct faces, each appearing on exactly two cards.
    #[must_use]
    pub const fn pair_count(&self) -> usize {
        self.card_count() / 2
    }
}

impl std::fmt::Display for BoardConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Serialize, Deserialize)]
struct RawBoardConfig {
    width: usize,
    height: usize,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = MemoryError;

    fn try_from(raw: RawBoardConfig) -> Result<Self> {
        Self::new(raw.width, raw.height)
    }
}

impl From<BoardConfig> for RawBoardConfig {
    fn from(config: BoardConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
        }
    }
}

/// Preset board sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    /// 2 columns, 4 rows, 4 pairs.
    #[default]
    Easy,
    /// 3 columns, 6 rows, 9 pairs.
    Medium,
    /// 4 columns, 6 rows, 12 pairs.
    Hard,
    /// 5 columns, 6 rows, 15 pairs.
    Extreme,
}

impl BoardSize {
    pub const ALL: [BoardSize; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Extreme];

    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Easy => 2,
            Self::Medium => 3,
            Self::Hard => 4,
            Self::Extreme => 5,
        }
    }

    #[must_use]
    pub const fn height(self) -> usize {
        match self {
            Self::Easy => 4,
            Self::Medium | Self::Hard | Self::Extreme => 6,
        }
    }

    #[must_use]
    pub const fn card_count(self) -> usize {
        self.width() * self.height()
    }

    #[must_use]
    pub const fn pair_count(self) -> usize {
        self.card_count() / 2
    }

    /// The preset with exactly `cards` cards, if any.
    #[must_use]
    pub fn from_card_count(cards: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.card_count() == cards)
    }

    /// The preset with exactly `pairs` pairs, if any.
    #[must_use]
    pub fn from_pair_count(pairs: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.pair_count() == pairs)
    }

    /// The board configuration for this preset.
    #[must_use]
    pub const fn config(self) -> BoardConfig {
        // Presets are even-area and above the minimum by construction.
        BoardConfig {
            width: self.width(),
            height: self.height(),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Extreme => "Extreme",
        }
    }
}

impl From<BoardSize> for BoardConfig {
    fn from(size: BoardSize) -> Self {
        size.config()
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name(), self.config())
    }
}
