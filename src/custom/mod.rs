//! Custom boards: user-named sets of image references.
//!
//! ## Key Types
//!
//! - `CustomBoard`: Validated name plus one image reference per pair
//! - `ImageList`: The stored document form of a board
//! - `BoardStore`: Lookup/publish seam to a document store
//! - `InMemoryBoardStore`: Hash-map backed `BoardStore`

pub mod board;
pub mod store;

pub use board::{
    image_path, normalize_game_name, CustomBoard, ImageList, MAX_GAME_NAME_LENGTH,
    MIN_GAME_NAME_LENGTH,
};
pub use store::{BoardStore, InMemoryBoardStore};
