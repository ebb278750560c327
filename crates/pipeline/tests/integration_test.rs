//! Integration tests for the pipeline.
//!
//! These tests train a real model and check the recommendation contract:
//! list length, exclusion of rated items and descending score order.

use data_loader::RatingStore;
use model::LatentFactorModel;
use pipeline::{Candidate, Filter, FilterPipeline, Recommender, UserContext};
use std::collections::HashSet;
use std::io::Cursor;
use trainer::{SgdTrainer, TrainingConfig};

fn create_test_setup() -> (RatingStore, LatentFactorModel) {
    // 6 users, 15 books; user u rates books u, u+1, ..., u+u (so user 0 rates
    // one book and user 5 rates six)
    let mut input = String::new();
    let mut lines = Vec::new();
    for user in 0..6u32 {
        for offset in 0..=user {
            let item = user + offset;
            let score = 1 + (user + item) % 5;
            lines.push(format!("{} {} {}", user, item, score));
        }
    }
    input.push_str(&format!("{} 6 15\n", lines.len()));
    input.push_str(&lines.join("\n"));

    let store = RatingStore::load_from_reader(Cursor::new(input)).unwrap();
    let trainer = SgdTrainer::new(TrainingConfig::default().with_seed(Some(17))).unwrap();
    let (model, _) = trainer.fit(&store).unwrap();
    (store, model)
}

#[test]
fn test_recommendation_shape() {
    let (store, model) = create_test_setup();
    let recommender = Recommender::new(&model, &store).unwrap();

    for user in 0..store.n_users() as u32 {
        let rated = store.rated_by_user(user).unwrap();
        let recs = recommender.recommend(user).unwrap();
        let expected = std::cmp::min(10, store.n_items() - rated.len());
        assert_eq!(recs.len(), expected, "user {}", user);
    }
}

#[test]
fn test_recommendations_exclude_rated() {
    let (store, model) = create_test_setup();
    let recommender = Recommender::new(&model, &store).unwrap();

    for (user, recs) in recommender.recommend_all().unwrap().iter().enumerate() {
        let rated = store.rated_by_user(user as u32).unwrap();
        for rec in recs {
            assert!(
                !rated.contains(&rec.item_id),
                "user {} was recommended rated item {}",
                user,
                rec.item_id
            );
        }
    }
}

#[test]
fn test_recommendations_in_descending_score_order() {
    let (store, model) = create_test_setup();
    let recommender = Recommender::new(&model, &store).unwrap();

    for (user, recs) in recommender.recommend_all().unwrap().iter().enumerate() {
        for pair in recs.windows(2) {
            let x = model.predict(user, pair[0].item_id as usize);
            let y = model.predict(user, pair[1].item_id as usize);
            assert!(x >= y, "user {}: {} before {}", user, x, y);
        }
    }
}

#[test]
fn test_no_duplicate_items() {
    let (store, model) = create_test_setup();
    let recommender = Recommender::new(&model, &store).unwrap().with_top_k(15);

    for recs in recommender.recommend_all().unwrap() {
        let unique: HashSet<u32> = recs.iter().map(|c| c.item_id).collect();
        assert_eq!(unique.len(), recs.len());
    }
}

/// Drops odd item ids; shows custom filters compose with the default one
struct EvenItemsOnly;

impl Filter for EvenItemsOnly {
    fn name(&self) -> &str {
        "EvenItemsOnly"
    }

    fn apply(&self, candidates: Vec<Candidate>, _context: &UserContext<'_>) -> anyhow::Result<Vec<Candidate>> {
        Ok(candidates.into_iter().filter(|c| c.item_id % 2 == 0).collect())
    }
}

#[test]
fn test_custom_filter_pipeline() {
    let (store, model) = create_test_setup();
    // Rated books are excluded before the custom pipeline runs
    let pipeline = FilterPipeline::new().add_filter(EvenItemsOnly);
    let recommender = Recommender::new(&model, &store)
        .unwrap()
        .with_filter_pipeline(pipeline);

    let recs = recommender.recommend(0).unwrap();
    // User 0 rated book 0; the even books left are 2, 4, ..., 14
    assert_eq!(recs.len(), 7);
    assert!(recs.iter().all(|c| c.item_id % 2 == 0 && c.item_id != 0));
}
