//! Named custom boards and the document they are stored as.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::BoardSize;
use crate::error::{MemoryError, Result};

pub const MIN_GAME_NAME_LENGTH: usize = 3;
pub const MAX_GAME_NAME_LENGTH: usize = 14;

/// Trim and validate a custom game name.
pub fn normalize_game_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(MemoryError::InvalidGameName("game name is empty".into()));
    }
    let len = name.chars().count();
    if !(MIN_GAME_NAME_LENGTH..=MAX_GAME_NAME_LENGTH).contains(&len) {
        return Err(MemoryError::InvalidGameName(format!(
            "'{name}' must be {MIN_GAME_NAME_LENGTH} to {MAX_GAME_NAME_LENGTH} characters"
        )));
    }
    Ok(name.to_string())
}

/// Storage path for the `index`-th image of a game uploaded at `timestamp_ms`.
#[must_use]
pub fn image_path(game_name: &str, timestamp_ms: u64, index: usize) -> String {
    format!("images/{game_name}/{timestamp_ms}-{index}.jpg")
}

/// A named board of user-supplied images.
///
/// Holds one reference per pair, in upload order. The image count always
/// matches one of the [`BoardSize`] presets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomBoard {
    name: String,
    images: Vec<String>,
}

impl CustomBoard {
    pub fn new(name: &str, images: Vec<String>) -> Result<Self> {
        let name = normalize_game_name(name)?;
        Self::with_stored_name(name, images)
    }

    /// Build a board read back from storage.
    ///
    /// Stored names were accepted by whoever wrote the document, so only
    /// the images are checked here. `name` must already be trimmed.
    pub(crate) fn with_stored_name(name: String, images: Vec<String>) -> Result<Self> {
        if BoardSize::from_pair_count(images.len()).is_none() {
            return Err(MemoryError::InvalidConfiguration(format!(
                "{} images do not fit any board size",
                images.len()
            )));
        }

        let mut seen = FxHashSet::default();
        if let Some(duplicate) = images.iter().find(|image| !seen.insert(image.as_str())) {
            return Err(MemoryError::InvalidConfiguration(format!(
                "image '{duplicate}' appears more than once"
            )));
        }

        Ok(Self { name, images })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// The preset this board is played on.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        // Checked on construction.
        BoardSize::from_pair_count(self.images.len()).unwrap_or_default()
    }

    /// The stored form of this board.
    #[must_use]
    pub fn to_document(&self) -> ImageList {
        ImageList {
            images: Some(self.images.clone()),
        }
    }
}

/// Stored document for a custom board: `{"images": ["...", ...]}`.
///
/// `images` is absent when the document exists but was never completed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageList {
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

impl ImageList {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| MemoryError::MalformedDocument(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| MemoryError::MalformedDocument(e.to_string()))
    }
}
