//! Card faces and per-card runtime state.
//!
//! A `MemoryCard` is one cell on the board. Its `CardFace` is opaque to the
//! engine: faces are only compared for equality and handed back to the
//! renderer.

use serde::{Deserialize, Serialize};

use super::icon::Icon;

/// What is shown when a card is turned over.
///
/// A board uses exactly one kind: built-in icons, or custom image
/// references supplied by the host.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardFace {
    /// An icon from the built-in catalog.
    Icon(Icon),
    /// A reference (typically a URL) to a custom image.
    Image(String),
}

impl CardFace {
    /// The custom image reference, if this is a custom face.
    #[must_use]
    pub fn image_ref(&self) -> Option<&str> {
        match self {
            Self::Image(reference) => Some(reference),
            Self::Icon(_) => None,
        }
    }

    /// The built-in icon, if this is a default face.
    #[must_use]
    pub fn icon(&self) -> Option<Icon> {
        match self {
            Self::Icon(icon) => Some(*icon),
            Self::Image(_) => None,
        }
    }
}

impl From<Icon> for CardFace {
    fn from(icon: Icon) -> Self {
        Self::Icon(icon)
    }
}

impl std::fmt::Display for CardFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Icon(icon) => write!(f, "{icon}"),
            Self::Image(reference) => f.write_str(reference),
        }
    }
}

/// A card on the board.
///
/// Collaborators read cards through the accessors; only the engine flips
/// or matches them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCard {
    face: CardFace,
    face_up: bool,
    matched: bool,
}

impl MemoryCard {
    /// A face-down, unmatched card.
    #[must_use]
    pub fn new(face: CardFace) -> Self {
        Self {
            face,
            face_up: false,
            matched: false,
        }
    }

    #[must_use]
    pub fn face(&self) -> &CardFace {
        &self.face
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Matched cards stay revealed for the rest of the game.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    pub(crate) fn toggle(&mut self) {
        self.face_up = !self.face_up;
    }

    pub(crate) fn turn_down(&mut self) {
        self.face_up = false;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.matched = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_hidden() {
        let card = MemoryCard::new(CardFace::Icon(Icon::Star));
        assert!(!card.is_face_up());
        assert!(!card.is_matched());
        assert_eq!(card.face().icon(), Some(Icon::Star));
        assert_eq!(card.face().image_ref(), None);
    }

    #[test]
    fn test_toggle_and_match() {
        let mut card = MemoryCard::new(CardFace::Image("https://img/1.jpg".into()));
        card.toggle();
        assert!(card.is_face_up());
        card.toggle();
        assert!(!card.is_face_up());

        card.toggle();
        card.mark_matched();
        assert!(card.is_matched());
        assert!(card.is_face_up());
    }

    #[test]
    fn test_face_equality() {
        assert_eq!(CardFace::from(Icon::Moon), CardFace::Icon(Icon::Moon));
        assert_ne!(CardFace::Icon(Icon::Moon), CardFace::Icon(Icon::Star));
        assert_ne!(
            CardFace::Image("a".into()),
            CardFace::Image("b".into())
        );
    }

    #[test]
    fn test_face_display() {
        assert_eq!(CardFace::Icon(Icon::Gift).to_string(), "ic_gift");
        assert_eq!(CardFace::Image("img://x".into()).to_string(), "img://x");
    }

    #[test]
    fn test_card_serde() {
        let card = MemoryCard::new(CardFace::Icon(Icon::Spa));
        let json = serde_json::to_string(&card).unwrap();
        let back: MemoryCard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
