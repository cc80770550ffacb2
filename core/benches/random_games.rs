use colortrap_core::{GameConfig, GameEngine, Mode, PlayerId};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use std::hint::black_box;

/// Plays player one at random against the computer until someone wins.
fn play_against_computer(config: &GameConfig, seed: u64) -> u32 {
    let mut engine = GameEngine::new(config, Mode::Computer, seed, ()).unwrap();
    let mut rng = SmallRng::seed_from_u64(seed);

    let start = *engine
        .board()
        .iter_tiles()
        .filter(|(_, tile)| !tile.is_disabled())
        .map(|(index, _)| index)
        .collect::<Vec<_>>()
        .choose(&mut rng)
        .unwrap();
    engine.place_player(start).unwrap();

    let mut turns = 0;
    while !engine.is_finished() {
        let from = engine.player(PlayerId::One).position().unwrap();
        let Some(&to) = engine.legal_moves(from).as_slice().choose(&mut rng) else {
            break;
        };
        engine.take_turn(to).unwrap();
        turns += 1;
    }
    turns
}

fn random_games(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_games");
    for (name, config) in [
        ("classic", GameConfig::default()),
        ("open_16x16", GameConfig::new((16, 16), 10)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(play_against_computer(config, seed))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, random_games);
criterion_main!(benches);
