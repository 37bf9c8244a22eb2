use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memory_match::{BoardSize, GameRng, MemoryGame};

fn deal(c: &mut Criterion) {
    let mut rng = GameRng::new(42);
    c.bench_function("deal_extreme", |b| {
        b.iter(|| MemoryGame::with_icons(black_box(BoardSize::Extreme.config()), &mut rng))
    });
}

fn perfect_game(c: &mut Criterion) {
    let game = MemoryGame::with_icons(BoardSize::Extreme.config(), &mut GameRng::new(7))
        .expect("preset fits the icon catalog");
    let cards = game.cards();
    let pairs: Vec<(usize, usize)> = (0..cards.len())
        .filter_map(|i| {
            (i + 1..cards.len())
                .find(|&j| cards[i].face() == cards[j].face())
                .map(|j| (i, j))
        })
        .collect();

    c.bench_function("perfect_game_extreme", |b| {
        b.iter(|| {
            let mut game = game.clone();
            for &(first, second) in &pairs {
                game.flip(first).ok();
                game.flip(second).ok();
            }
            black_box(game.has_won())
        })
    });
}

criterion_group!(benches, deal, perfect_game);
criterion_main!(benches);
