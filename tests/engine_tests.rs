//! Engine integration tests.
//!
//! These tests drive `MemoryGame` through whole attempts and games:
//! - Dealing (pair multiset, determinism)
//! - Match / mismatch transitions and the delayed restore
//! - Move counting and win detection

use memory_match::{
    BoardConfig, BoardSize, CardFace, FixedShuffle, GameRng, Icon, MemoryError, MemoryGame,
    NoShuffle,
};
use rustc_hash::FxHashMap;

/// Count how many cards show each face.
fn face_counts(game: &MemoryGame) -> FxHashMap<CardFace, usize> {
    let mut counts = FxHashMap::default();
    for card in game.cards() {
        *counts.entry(card.face().clone()).or_insert(0) += 1;
    }
    counts
}

/// Positions of each pair on the board.
fn pair_positions(game: &MemoryGame) -> Vec<(usize, usize)> {
    let cards = game.cards();
    (0..cards.len())
        .filter_map(|i| {
            (i + 1..cards.len())
                .find(|&j| cards[i].face() == cards[j].face())
                .map(|j| (i, j))
        })
        .collect()
}

// =============================================================================
// Dealing
// =============================================================================

/// Every preset deals each face exactly twice.
#[test]
fn test_every_preset_deals_pairs() {
    let mut rng = GameRng::new(2024);

    for size in BoardSize::ALL {
        let game = MemoryGame::with_icons(size.config(), &mut rng).unwrap();
        let counts = face_counts(&game);

        assert_eq!(game.cards().len(), 2 * size.pair_count());
        assert_eq!(counts.len(), size.pair_count());
        assert!(counts.values().all(|&n| n == 2));
        assert_eq!(game.pairs_found(), 0);
        assert_eq!(game.moves_made(), 0);
    }
}

/// Non-preset even boards are accepted.
#[test]
fn test_arbitrary_even_board() {
    let config = BoardConfig::new(7, 2).unwrap();
    let game = MemoryGame::with_icons(config, &mut GameRng::new(1)).unwrap();

    assert_eq!(game.cards().len(), 14);
    assert_eq!(game.pair_count(), 7);
}

/// Same configuration and same randomness give the same board.
#[test]
fn test_deal_is_deterministic() {
    for seed in [0u64, 1, 42, 9_999] {
        let a = MemoryGame::with_icons(BoardSize::Extreme.config(), &mut GameRng::new(seed)).unwrap();
        let b = MemoryGame::with_icons(BoardSize::Extreme.config(), &mut GameRng::new(seed)).unwrap();
        assert_eq!(a.cards(), b.cards());
    }

    let perm = vec![7, 6, 5, 4, 3, 2, 1, 0];
    let a = MemoryGame::with_icons(
        BoardSize::Easy.config(),
        &mut FixedShuffle::new(perm.clone()).unwrap(),
    )
    .unwrap();
    let b = MemoryGame::with_icons(BoardSize::Easy.config(), &mut FixedShuffle::new(perm).unwrap())
        .unwrap();
    assert_eq!(a.cards(), b.cards());
}

/// Different seeds give different boards (with overwhelming probability).
#[test]
fn test_different_seeds_differ() {
    let a = MemoryGame::with_icons(BoardSize::Extreme.config(), &mut GameRng::new(1)).unwrap();
    let b = MemoryGame::with_icons(BoardSize::Extreme.config(), &mut GameRng::new(2)).unwrap();
    assert_ne!(a.cards(), b.cards());
}

/// Custom images are used as given, each on two cards.
#[test]
fn test_custom_deal() {
    let images: Vec<String> = (0..15).map(|i| format!("gs://boards/beach/{i}.jpg")).collect();
    let game =
        MemoryGame::with_images(BoardSize::Extreme.config(), &images, &mut GameRng::new(3)).unwrap();

    let counts = face_counts(&game);
    assert_eq!(counts.len(), 15);
    for image in &images {
        assert_eq!(counts[&CardFace::Image(image.clone())], 2);
    }
}

#[test]
fn test_custom_count_mismatch() {
    let images: Vec<String> = (0..4).map(|i| format!("img{i}")).collect();
    let result = MemoryGame::with_images(BoardSize::Medium.config(), &images, &mut NoShuffle);
    assert!(matches!(result, Err(MemoryError::InvalidConfiguration(_))));
}

// =============================================================================
// Attempts
// =============================================================================

/// The 4x2 walkthrough: a match, a mismatch, then the restore on the next attempt.
#[test]
fn test_four_by_two_walkthrough() {
    // Identity on the 15-icon catalog, then
    // [Face, Flower, Gift, Heart, Face, Flower, Gift, Heart] becomes
    // [Face, Face, Flower, Gift, Flower, Gift, Heart, Heart].
    let mut shuffle = FixedShuffle::new(vec![0, 4, 1, 2, 5, 6, 3, 7]).unwrap();
    let mut game = MemoryGame::with_icons(BoardConfig::new(4, 2).unwrap(), &mut shuffle).unwrap();
    assert_eq!(game.pair_count(), 4);
    assert_eq!(game.cards()[0].face(), &CardFace::Icon(Icon::Face));

    assert_eq!(game.flip(0), Ok(false));
    assert_eq!(game.flip(1), Ok(true));
    assert_eq!(game.pairs_found(), 1);
    assert_eq!(game.moves_made(), 1);

    assert_eq!(game.flip(2), Ok(false));
    assert_eq!(game.flip(3), Ok(false));
    assert_eq!(game.pairs_found(), 1);
    assert_eq!(game.moves_made(), 2);
    assert!(game.is_face_up(2).unwrap());
    assert!(game.is_face_up(3).unwrap());

    // Matched card 0 is already up; the engine trusts the caller, so
    // flipping it starts a new attempt, restores 2 and 3, and toggles 0.
    game.flip(0).unwrap();
    assert!(!game.is_face_up(0).unwrap());
    assert!(!game.is_face_up(2).unwrap());
    assert!(!game.is_face_up(3).unwrap());
    assert!(game.cards()[0].is_matched());
    assert!(game.cards()[1].is_matched());
}

/// A mismatched pair is hidden by the first flip of the next attempt.
#[test]
fn test_restore_happens_on_next_attempt() {
    let mut game = MemoryGame::with_icons(BoardSize::Medium.config(), &mut GameRng::new(8)).unwrap();
    let pairs = pair_positions(&game);
    let (a, _) = pairs[0];
    let (b, _) = pairs[1];
    let (c, _) = pairs[2];

    game.flip(a).unwrap();
    assert!(!game.flip(b).unwrap());
    let up: Vec<_> = (0..18).filter(|&p| game.is_face_up(p).unwrap()).collect();
    assert_eq!(up.len(), 2);

    game.flip(c).unwrap();
    let up: Vec<_> = (0..18).filter(|&p| game.is_face_up(p).unwrap()).collect();
    assert_eq!(up, vec![c]);
}

/// Playing perfectly wins in exactly `pair_count` moves.
#[test]
fn test_perfect_game() {
    let mut game = MemoryGame::with_icons(BoardSize::Hard.config(), &mut GameRng::new(77)).unwrap();

    for (i, (a, b)) in pair_positions(&game).into_iter().enumerate() {
        assert!(!game.has_won());
        assert!(!game.flip(a).unwrap());
        assert!(game.flip(b).unwrap());
        assert_eq!(game.pairs_found(), i + 1);
    }

    assert!(game.has_won());
    assert_eq!(game.moves_made(), 12);
    assert!(game.cards().iter().all(|c| c.is_matched()));
}

/// Out-of-range positions are rejected without counting a flip.
#[test]
fn test_out_of_range() {
    let mut game = MemoryGame::with_icons(BoardSize::Easy.config(), &mut NoShuffle).unwrap();

    assert_eq!(
        game.flip(8),
        Err(MemoryError::IndexOutOfRange { position: 8, len: 8 })
    );
    assert_eq!(game.flip_attempts(), 0);
    assert_eq!(
        game.is_face_up(usize::MAX),
        Err(MemoryError::IndexOutOfRange { position: usize::MAX, len: 8 })
    );
}
