//! Benchmarks for top-K ranking
//!
//! Run with: cargo bench --package pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{InputHeader, RatingStore, write_synthetic_input};
use model::{LatentFactorModel, build_rng};
use pipeline::Recommender;
use std::io::Cursor;

fn load_test_data() -> (RatingStore, LatentFactorModel) {
    let header = InputHeader {
        n_ratings: 60_000,
        n_users: 500,
        n_items: 200,
    };
    let mut rng = build_rng(Some(7));
    let mut input = Vec::new();
    write_synthetic_input(&mut input, &header, &mut rng).expect("Failed to generate test data");
    let store = RatingStore::load_from_reader(Cursor::new(input)).expect("Failed to load test data");
    let model = LatentFactorModel::random(store.n_users(), store.n_items(), 10, &mut rng);
    (store, model)
}

fn bench_recommend_one(c: &mut Criterion) {
    let (store, model) = load_test_data();
    let recommender = Recommender::new(&model, &store).expect("matching shapes");

    c.bench_function("recommend_single_user", |b| {
        b.iter(|| {
            let recs = recommender.recommend(black_box(1)).unwrap();
            black_box(recs)
        })
    });
}

fn bench_recommend_all(c: &mut Criterion) {
    let (store, model) = load_test_data();
    let recommender = Recommender::new(&model, &store).expect("matching shapes");

    c.bench_function("recommend_all_users", |b| {
        b.iter(|| black_box(recommender.recommend_all().unwrap()))
    });
    c.bench_function("recommend_all_users_parallel", |b| {
        b.iter(|| black_box(recommender.recommend_all_parallel().unwrap()))
    });
}

criterion_group!(benches, bench_recommend_one, bench_recommend_all);
criterion_main!(benches);
