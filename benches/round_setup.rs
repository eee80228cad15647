use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memory_match::{
    CardCatalog, CardIdentity, CardPool, Difficulty, GameConfig, MemoryGame,
};

fn catalog() -> CardCatalog {
    CardCatalog::from_tokens((0..40).map(|i| format!("card-{i}")))
}

fn bench_start_game(c: &mut Criterion) {
    let mut game = MemoryGame::builder(GameConfig::default(), catalog())
        .seed(12345)
        .build()
        .unwrap();

    c.bench_function("start_game_hard", |b| {
        b.iter(|| {
            game.start_game(black_box(Difficulty::Hard)).unwrap();
        })
    });
}

fn bench_pool_cycle(c: &mut Criterion) {
    let mut pool = CardPool::new(100);
    let face = CardIdentity::new("A");

    c.bench_function("pool_acquire_release_36", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..36)
                .filter_map(|_| pool.acquire(face.clone()))
                .collect();
            for h in handles {
                pool.release(black_box(h));
            }
        })
    });
}

fn bench_pair_resolution(c: &mut Criterion) {
    let mut game = MemoryGame::builder(GameConfig::default(), catalog())
        .seed(12345)
        .build()
        .unwrap();
    game.start_game(Difficulty::Medium).unwrap();

    c.bench_function("select_and_resolve", |b| {
        b.iter(|| {
            game.select_at(black_box(0));
            game.select_at(black_box(1));
            game.tick(Duration::from_secs(2))
        })
    });
}

criterion_group!(benches, bench_start_game, bench_pool_cycle, bench_pair_resolution);
criterion_main!(benches);
