//! Built-in icon catalog used when no custom images are supplied.

use serde::{Deserialize, Serialize};

/// A face from the built-in icon set.
///
/// The catalog holds enough icons for the largest preset board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Face,
    Flower,
    Gift,
    Heart,
    Home,
    Lightning,
    Moon,
    Plane,
    School,
    Send,
    Star,
    Work,
    Api,
    Cookie,
    Spa,
}

impl Icon {
    /// Every icon, in catalog order.
    pub const ALL: [Icon; 15] = [
        Self::Face,
        Self::Flower,
        Self::Gift,
        Self::Heart,
        Self::Home,
        Self::Lightning,
        Self::Moon,
        Self::Plane,
        Self::School,
        Self::Send,
        Self::Star,
        Self::Work,
        Self::Api,
        Self::Cookie,
        Self::Spa,
    ];

    /// Stable asset name, e.g. `ic_heart`.
    #[must_use]
    pub const fn asset_name(self) -> &'static str {
        match self {
            Self::Face => "ic_face",
            Self::Flower => "ic_flower",
            Self::Gift => "ic_gift",
            Self::Heart => "ic_heart",
            Self::Home => "ic_home",
            Self::Lightning => "ic_lightning",
            Self::Moon => "ic_moon",
            Self::Plane => "ic_plane",
            Self::School => "ic_school",
            Self::Send => "ic_send",
            Self::Star => "ic_star",
            Self::Work => "ic_work",
            Self::Api => "ic_api",
            Self::Cookie => "ic_cookie",
            Self::Spa => "ic_spa",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.asset_name())
    }
}
