//! Lookup and publication of custom boards by name.
//!
//! `BoardStore` is the seam to whatever document store a host uses. Each
//! board is one JSON [`ImageList`] document keyed by game name.
//! `InMemoryBoardStore` keeps those documents in a hash map.

use log::{info, warn};
use rustc_hash::FxHashMap;

use super::board::{CustomBoard, ImageList};
use crate::error::{MemoryError, Result};

/// A document store of custom boards keyed by game name.
pub trait BoardStore {
    /// Look up a board by name.
    ///
    /// Fails with `GameNotFound` if there is no document, or the document
    /// has no image list. Only blank names are rejected; the length rule
    /// applies when publishing, not when looking up.
    fn fetch(&self, name: &str) -> Result<CustomBoard>;

    /// Store a new board. Names are never overwritten.
    fn publish(&mut self, board: &CustomBoard) -> Result<()>;

    /// Is there already a document under this name?
    fn contains(&self, name: &str) -> bool;
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryBoardStore {
    documents: FxHashMap<String, String>,
}

impl InMemoryBoardStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw JSON document, bypassing validation.
    pub fn insert_document(&mut self, name: impl Into<String>, json: impl Into<String>) {
        self.documents.insert(name.into(), json.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl BoardStore for InMemoryBoardStore {
    fn fetch(&self, name: &str) -> Result<CustomBoard> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(MemoryError::InvalidGameName("game name is empty".into()));
        }

        let json = self
            .documents
            .get(trimmed)
            .ok_or_else(|| MemoryError::GameNotFound(trimmed.to_string()))?;

        let Some(images) = ImageList::from_json(json)?.images else {
            warn!("Document for '{}' has no image list", trimmed);
            return Err(MemoryError::GameNotFound(trimmed.to_string()));
        };

        CustomBoard::with_stored_name(trimmed.to_string(), images)
    }

    fn publish(&mut self, board: &CustomBoard) -> Result<()> {
        if self.contains(board.name()) {
            warn!("Game name '{}' is already taken", board.name());
            return Err(MemoryError::GameNameTaken(board.name().to_string()));
        }
        let json = board.to_document().to_json()?;
        self.documents.insert(board.name().to_string(), json);
        info!(
            "Published game '{}' with {} images",
            board.name(),
            board.images().len()
        );
        Ok(())
    }

    fn contains(&self, name: &str) -> bool {
        self.documents.contains_key(name.trim())
    }
}
