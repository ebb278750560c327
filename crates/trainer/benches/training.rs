//! Benchmarks for SGD training
//!
//! Run with: cargo bench --package trainer
//!
//! Uses a synthetic input of the same shape as the reference workload
//! (60k ratings, 500 users, 200 books).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{InputHeader, RatingStore, write_synthetic_input};
use model::{LatentFactorModel, build_rng};
use std::io::Cursor;
use trainer::{SgdTrainer, TrainingConfig};

fn load_test_data() -> RatingStore {
    let header = InputHeader {
        n_ratings: 60_000,
        n_users: 500,
        n_items: 200,
    };
    let mut rng = build_rng(Some(7));
    let mut input = Vec::new();
    write_synthetic_input(&mut input, &header, &mut rng).expect("Failed to generate test data");
    RatingStore::load_from_reader(Cursor::new(input)).expect("Failed to load test data")
}

fn bench_single_epoch(c: &mut Criterion) {
    let store = load_test_data();
    let trainer = SgdTrainer::new(TrainingConfig::default()).expect("valid config");
    let mut model = LatentFactorModel::random(store.n_users(), store.n_items(), 10, &mut build_rng(Some(1)));

    c.bench_function("sgd_run_epoch", |b| {
        b.iter(|| {
            let error = trainer.run_epoch(black_box(&mut model), black_box(&store));
            black_box(error)
        })
    });
}

fn bench_full_fit(c: &mut Criterion) {
    let store = load_test_data();
    let trainer = SgdTrainer::new(TrainingConfig::default().with_seed(Some(1))).expect("valid config");

    let mut group = c.benchmark_group("sgd_fit");
    group.sample_size(10);
    group.bench_function("fit_20_epochs", |b| {
        b.iter(|| {
            let fitted = trainer.fit(black_box(&store)).unwrap();
            black_box(fitted)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_single_epoch, bench_full_fit);
criterion_main!(benches);
