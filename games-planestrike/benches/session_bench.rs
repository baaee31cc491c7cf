use criterion::{black_box, criterion_group, criterion_main, Criterion};
use games_planestrike::{GameSession, SessionConfig};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_reset(c: &mut Criterion) {
    let mut session = GameSession::with_seed(SessionConfig::default(), 0).unwrap();
    c.bench_function("reset_8x8", |b| b.iter(|| black_box(session.reset())));
}

fn bench_random_episode(c: &mut Criterion) {
    let mut session = GameSession::with_seed(SessionConfig::default(), 0).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let mut order: Vec<u32> = (0..64).collect();

    c.bench_function("random_episode_8x8", |b| {
        b.iter(|| {
            session.reset();
            order.shuffle(&mut rng);
            let mut total = 0.0;
            for &action in &order {
                let ts = session.step(action).unwrap();
                total += ts.reward;
                if ts.is_last() {
                    break;
                }
            }
            black_box(total)
        })
    });
}

criterion_group!(benches, bench_reset, bench_random_episode);
criterion_main!(benches);
