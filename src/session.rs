//! A player's game session.
//!
//! `GameSession` sits between the engine and a UI: it owns the RNG, the
//! chosen board size and any loaded custom board, deals a fresh
//! [`MemoryGame`] whenever the board changes, and rejects taps the engine
//! itself would accept (flips after a win, flips on face-up cards).
//!
//! Timing is driven by the caller: `play_at` takes the tap time in
//! milliseconds, and the session never reads a clock itself.

use log::{info, warn};

use crate::core::{BoardSize, GameRng, GameRngState};
use crate::custom::{BoardStore, CustomBoard};
use crate::error::{MemoryError, Result};
use crate::game::{FlipOutcome, MemoryGame};

/// Title shown when no custom board is loaded.
pub const DEFAULT_TITLE: &str = "My Memory";

#[derive(Clone, Debug)]
pub struct GameSession {
    rng: GameRng,
    size: BoardSize,
    custom: Option<CustomBoard>,
    game: MemoryGame,
    started_ms: Option<u64>,
    finished_ms: Option<u64>,
}

impl GameSession {
    /// Start on an easy board of built-in icons.
    pub fn new(seed: u64) -> Result<Self> {
        Self::from_rng(GameRng::new(seed), BoardSize::default())
    }

    /// Start on `size` with an existing RNG.
    pub fn from_rng(mut rng: GameRng, size: BoardSize) -> Result<Self> {
        let game = MemoryGame::with_icons(size.config(), &mut rng)?;
        Ok(Self {
            rng,
            size,
            custom: None,
            game,
            started_ms: None,
            finished_ms: None,
        })
    }

    /// Resume dealing from a captured RNG state.
    pub fn from_rng_state(state: &GameRngState, size: BoardSize) -> Result<Self> {
        Self::from_rng(GameRng::from_state(state), size)
    }

    #[must_use]
    pub fn game(&self) -> &MemoryGame {
        &self.game
    }

    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    #[must_use]
    pub fn custom_board(&self) -> Option<&CustomBoard> {
        self.custom.as_ref()
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.custom.as_ref().map_or(DEFAULT_TITLE, CustomBoard::name)
    }

    /// `(pairs found, pairs on the board)`.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.game.pairs_found(), self.game.pair_count())
    }

    /// Whether restarting now would throw away a game in progress.
    #[must_use]
    pub fn needs_restart_confirmation(&self) -> bool {
        self.game.moves_made() > 0 && !self.game.has_won()
    }

    /// Flip a card on behalf of the player.
    ///
    /// Rejects flips on a finished game and on cards already face up,
    /// leaving the game untouched.
    pub fn play(&mut self, position: usize) -> Result<FlipOutcome> {
        if let Err(e) = self.game.check_flip(position) {
            warn!("Rejected flip at {}: {}", position, e);
            return Err(e);
        }

        let outcome = self.game.flip_outcome(position)?;
        if outcome == FlipOutcome::Won {
            info!(
                "Won '{}' in {} moves",
                self.title(),
                self.game.moves_made()
            );
        }
        Ok(outcome)
    }

    /// Like [`play`](Self::play), but also times the game.
    ///
    /// Every tap made before the first pair is found moves the start time
    /// to `now_ms`, so the clock runs from the last tap with no pairs on
    /// the board. The winning flip stops it.
    pub fn play_at(&mut self, position: usize, now_ms: u64) -> Result<FlipOutcome> {
        if self.game.pairs_found() == 0 {
            self.started_ms = Some(now_ms);
        }

        let outcome = self.play(position)?;
        if outcome == FlipOutcome::Won {
            self.finished_ms = Some(now_ms);
            if let Some(secs) = self.elapsed_secs() {
                info!("Game lasted {} s", secs);
            }
        }
        Ok(outcome)
    }

    /// Whole seconds the won game lasted, rounded up by one.
    ///
    /// `None` until a game timed with [`play_at`](Self::play_at) is won.
    #[must_use]
    pub fn elapsed_secs(&self) -> Option<u64> {
        let start = self.started_ms?;
        let end = self.finished_ms?;
        Some(end.saturating_sub(start) / 1000 + 1)
    }

    /// Deal a new game on the same board.
    pub fn restart(&mut self) -> Result<()> {
        self.game = Self::deal(&mut self.rng, self.size, self.custom.as_ref())?;
        self.reset_timer();
        info!("Restarted {} board", self.size);
        Ok(())
    }

    /// Switch to a preset size. Drops any loaded custom board.
    pub fn resize(&mut self, size: BoardSize) -> Result<()> {
        self.game = Self::deal(&mut self.rng, size, None)?;
        self.reset_timer();
        self.size = size;
        self.custom = None;
        info!("Switched to {} board", size);
        Ok(())
    }

    /// Play a custom board. Its image count picks the board size.
    pub fn load_custom(&mut self, board: CustomBoard) -> Result<()> {
        let size = BoardSize::from_pair_count(board.images().len()).ok_or_else(|| {
            MemoryError::InvalidConfiguration(format!(
                "{} images do not fit any board size",
                board.images().len()
            ))
        })?;

        self.game = Self::deal(&mut self.rng, size, Some(&board))?;
        self.reset_timer();
        self.size = size;
        info!("Playing custom game '{}' on {} board", board.name(), size);
        self.custom = Some(board);
        Ok(())
    }

    /// Fetch a custom board from `store` by name and start playing it.
    pub fn download<S: BoardStore>(&mut self, store: &S, name: &str) -> Result<()> {
        let board = store.fetch(name)?;
        self.load_custom(board)
    }

    fn reset_timer(&mut self) {
        self.started_ms = None;
        self.finished_ms = None;
    }

    fn deal(
        rng: &mut GameRng,
        size: BoardSize,
        custom: Option<&CustomBoard>,
    ) -> Result<MemoryGame> {
        MemoryGame::new(size.config(), custom.map(CustomBoard::images), rng)
    }
}
