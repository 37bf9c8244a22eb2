//! The memory game engine.
//!
//! Owns the card sequence and enforces the flip/match rules:
//!
//! - The first flip of an attempt turns every unmatched card face down,
//!   then reveals the chosen card and remembers it.
//! - The second flip reveals its card and compares the two faces.
//!   Equal faces become matched for the rest of the game.
//! - A move is one completed attempt (two flips).
//!
//! The mismatched pair of an attempt stays visible until the next attempt
//! starts, so the player gets to see both faces.
//!
//! ## Caller contract
//!
//! [`MemoryGame::flip`] does not refuse flips on a won game or on a card
//! that is already face up. Hosts are expected to check
//! [`MemoryGame::has_won`] and [`MemoryGame::is_face_up`] first (or call
//! [`MemoryGame::check_flip`]) and report rejected taps to the player
//! themselves. Only out-of-range positions are rejected by the engine.

use log::{debug, info, warn};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{CardFace, Icon, MemoryCard};
use crate::core::{BoardConfig, Shuffle};
use crate::error::{MemoryError, Result};

/// What a single accepted flip did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// A card was turned over without completing a pair.
    Flipped,
    /// The flip completed a matching pair.
    Matched,
    /// The flip completed the last pair on the board.
    Won,
}

impl FlipOutcome {
    /// Did this flip complete a matching pair?
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Matched | Self::Won)
    }
}

/// State of one game on one board.
///
/// Created fresh for every new game, restart or resize; never resized.
/// Deserialized games are checked for a consistent card count, pending
/// selection and pair count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMemoryGame", into = "RawMemoryGame")]
pub struct MemoryGame {
    config: BoardConfig,
    cards: Vec<MemoryCard>,
    pairs_found: usize,
    flip_attempts: usize,
    /// Face-up card waiting for the second flip of its attempt.
    pending: Option<usize>,
}

impl MemoryGame {
    /// Deal a new board.
    ///
    /// Without `custom_images`, `config.pair_count()` icons are drawn from
    /// the built-in catalog. With them, the list must hold exactly
    /// `config.pair_count()` distinct references. Either way every face is
    /// placed on two cards and the whole deck is shuffled with `shuffle`.
    pub fn new<S: Shuffle>(
        config: BoardConfig,
        custom_images: Option<&[String]>,
        shuffle: &mut S,
    ) -> Result<Self> {
        let pair_count = config.pair_count();

        let chosen: Vec<CardFace> = match custom_images {
            None => {
                if Icon::ALL.len() < pair_count {
                    warn!(
                        "Board {} needs {} icons but the catalog has {}",
                        config,
                        pair_count,
                        Icon::ALL.len()
                    );
                    return Err(MemoryError::InvalidConfiguration(format!(
                        "board {config} needs {pair_count} icons, only {} available",
                        Icon::ALL.len()
                    )));
                }
                let mut icons = Icon::ALL;
                shuffle.shuffle(&mut icons);
                icons[..pair_count].iter().map(|&icon| CardFace::Icon(icon)).collect()
            }
            Some(images) => {
                validate_images(config, images)?;
                images.iter().cloned().map(CardFace::Image).collect()
            }
        };

        let mut faces = Vec::with_capacity(config.card_count());
        faces.extend(chosen.iter().cloned());
        faces.extend(chosen);
        shuffle.shuffle(&mut faces);

        debug!(
            "Dealt {} board with {} pairs ({})",
            config,
            pair_count,
            if custom_images.is_some() { "custom images" } else { "default icons" }
        );

        Ok(Self {
            config,
            cards: faces.into_iter().map(MemoryCard::new).collect(),
            pairs_found: 0,
            flip_attempts: 0,
            pending: None,
        })
    }

    /// Deal a board of built-in icons.
    pub fn with_icons<S: Shuffle>(config: BoardConfig, shuffle: &mut S) -> Result<Self> {
        Self::new(config, None, shuffle)
    }

    /// Deal a board of custom images.
    pub fn with_images<S: Shuffle>(
        config: BoardConfig,
        images: &[String],
        shuffle: &mut S,
    ) -> Result<Self> {
        Self::new(config, Some(images), shuffle)
    }

    /// Turn over the card at `position`.
    ///
    /// Returns `true` when this flip completed a matching pair. Fails only
    /// when `position` is off the board, in which case nothing changes.
    ///
    /// See the module docs for the checks the caller owns.
    pub fn flip(&mut self, position: usize) -> Result<bool> {
        self.check_position(position)?;
        self.flip_attempts += 1;

        let found_match = match self.pending.take() {
            None => {
                self.restore_cards();
                self.pending = Some(position);
                false
            }
            Some(selected) => self.check_for_match(selected, position),
        };

        self.cards[position].toggle();
        debug!(
            "Flipped card {} ({} flips, {} pairs)",
            position, self.flip_attempts, self.pairs_found
        );
        Ok(found_match)
    }

    /// Like [`MemoryGame::flip`], but reports whether the match won the game.
    pub fn flip_outcome(&mut self, position: usize) -> Result<FlipOutcome> {
        Ok(match self.flip(position)? {
            false => FlipOutcome::Flipped,
            true if self.has_won() => FlipOutcome::Won,
            true => FlipOutcome::Matched,
        })
    }

    /// Check the caller-side preconditions of a flip without changing state.
    ///
    /// Fails with `IndexOutOfRange`, `GameOver` or `CardAlreadyFaceUp`.
    pub fn check_flip(&self, position: usize) -> Result<()> {
        self.check_position(position)?;
        if self.has_won() {
            return Err(MemoryError::GameOver);
        }
        if self.cards[position].is_face_up() {
            return Err(MemoryError::CardAlreadyFaceUp(position));
        }
        Ok(())
    }

    pub fn is_face_up(&self, position: usize) -> Result<bool> {
        self.card(position).map(MemoryCard::is_face_up)
    }

    pub fn card(&self, position: usize) -> Result<&MemoryCard> {
        self.cards.get(position).ok_or(MemoryError::IndexOutOfRange {
            position,
            len: self.cards.len(),
        })
    }

    /// Cards in board order, row by row.
    #[must_use]
    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    #[must_use]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.config.pair_count()
    }

    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.pairs_found
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.pairs_found == self.config.pair_count()
    }

    /// Completed attempts. A half-finished attempt is not counted.
    #[must_use]
    pub fn moves_made(&self) -> usize {
        self.flip_attempts / 2
    }

    #[must_use]
    pub fn flip_attempts(&self) -> usize {
        self.flip_attempts
    }

    /// The card waiting for the second flip of the current attempt.
    #[must_use]
    pub fn pending_selection(&self) -> Option<usize> {
        self.pending
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position < self.cards.len() {
            Ok(())
        } else {
            Err(MemoryError::IndexOutOfRange {
                position,
                len: self.cards.len(),
            })
        }
    }

    fn check_for_match(&mut self, first: usize, second: usize) -> bool {
        if self.cards[first].face() != self.cards[second].face() {
            return false;
        }
        self.cards[first].mark_matched();
        self.cards[second].mark_matched();
        self.pairs_found += 1;
        info!(
            "Found a match, {} of {} pairs",
            self.pairs_found,
            self.config.pair_count()
        );
        true
    }

    fn restore_cards(&mut self) {
        for card in self.cards.iter_mut().filter(|card| !card.is_matched()) {
            card.turn_down();
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawMemoryGame {
    config: BoardConfig,
    cards: Vec<MemoryCard>,
    pairs_found: usize,
    flip_attempts: usize,
    pending: Option<usize>,
}

impl TryFrom<RawMemoryGame> for MemoryGame {
    type Error = MemoryError;

    fn try_from(raw: RawMemoryGame) -> Result<Self> {
        let invalid = |reason: String| -> Result<Self> {
            Err(MemoryError::InvalidConfiguration(reason))
        };

        if raw.cards.len() != raw.config.card_count() {
            return invalid(format!(
                "board {} needs {} cards, got {}",
                raw.config,
                raw.config.card_count(),
                raw.cards.len()
            ));
        }
        if let Some(pending) = raw.pending.filter(|&p| p >= raw.cards.len()) {
            return invalid(format!(
                "pending card {pending} is off a board of {} cards",
                raw.cards.len()
            ));
        }
        if raw.pairs_found > raw.config.pair_count() {
            return invalid(format!(
                "{} pairs found on a board of {} pairs",
                raw.pairs_found,
                raw.config.pair_count()
            ));
        }
        let matched = raw.cards.iter().filter(|card| card.is_matched()).count();
        if matched != 2 * raw.pairs_found {
            return invalid(format!(
                "{matched} matched cards do not make {} pairs",
                raw.pairs_found
            ));
        }

        Ok(Self {
            config: raw.config,
            cards: raw.cards,
            pairs_found: raw.pairs_found,
            flip_attempts: raw.flip_attempts,
            pending: raw.pending,
        })
    }
}

impl From<MemoryGame> for RawMemoryGame {
    fn from(game: MemoryGame) -> Self {
        Self {
            config: game.config,
            cards: game.cards,
            pairs_found: game.pairs_found,
            flip_attempts: game.flip_attempts,
            pending: game.pending,
        }
    }
}

fn validate_images(config: BoardConfig, images: &[String]) -> Result<()> {
    if images.len() != config.pair_count() {
        warn!(
            "Board {} needs {} custom images, got {}",
            config,
            config.pair_count(),
            images.len()
        );
        return Err(MemoryError::InvalidConfiguration(format!(
            "board {config} needs {} custom images, got {}",
            config.pair_count(),
            images.len()
        )));
    }

    let mut seen = FxHashSet::default();
    if let Some(duplicate) = images.iter().find(|image| !seen.insert(image.as_str())) {
        return Err(MemoryError::InvalidConfiguration(format!(
            "custom image '{duplicate}' appears more than once"
        )));
    }
    Ok(())
}
