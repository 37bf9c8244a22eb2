//! Card system: faces, the built-in icon catalog, and card state.
//!
//! ## Key Types
//!
//! - `Icon`: Built-in face catalog
//! - `CardFace`: Opaque face identifier (icon or custom image reference)
//! - `MemoryCard`: Runtime card state (face up, matched)

pub mod card;
pub mod icon;

pub use card::{CardFace, MemoryCard};
pub use icon::Icon;
