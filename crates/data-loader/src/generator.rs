//! Synthetic input generation.
//!
//! Produces a valid rating stream of the requested shape: every
//! (user, item) pair appears at most once and raw scores are integers drawn
//! uniformly from 1..=5. Useful for load testing and benchmarks.

use crate::error::{DataLoadError, Result};
use crate::types::{InputHeader, ItemId, UserId};
use rand::Rng;
use std::collections::HashSet;
use std::io::Write;

/// Write a synthetic input with the shape described by `header`.
///
/// Fails when more ratings are requested than there are distinct
/// (user, item) pairs.
pub fn write_synthetic_input<W, R>(writer: &mut W, header: &InputHeader, rng: &mut R) -> Result<()>
where
    W: Write,
    R: Rng,
{
    if header.n_users > UserId::MAX as usize || header.n_items > ItemId::MAX as usize {
        return Err(DataLoadError::ValidationError(format!(
            "Cannot generate ids for {} users and {} books: ids are 32-bit",
            header.n_users, header.n_items
        )));
    }

    let capacity = header.n_users.saturating_mul(header.n_items);
    if header.n_ratings > capacity {
        return Err(DataLoadError::ValidationError(format!(
            "Cannot generate {} distinct ratings for {} users and {} books",
            header.n_ratings, header.n_users, header.n_items
        )));
    }

    writeln!(
        writer,
        "{}\t{}\t{}",
        header.n_ratings, header.n_users, header.n_items
    )?;

    let mut already_rated: HashSet<(UserId, ItemId)> = HashSet::with_capacity(header.n_ratings);
    while already_rated.len() < header.n_ratings {
        let user_id = rng.random_range(0..header.n_users) as UserId;
        let item_id = rng.random_range(0..header.n_items) as ItemId;

        // Rejection sampling: retry on a pair we've already emitted
        if already_rated.insert((user_id, item_id)) {
            let raw_score: u8 = rng.random_range(1..=5);
            writeln!(writer, "{}\t{}\t{}", user_id, item_id, raw_score)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RatingStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn header(n_ratings: usize, n_users: usize, n_items: usize) -> InputHeader {
        InputHeader { n_ratings, n_users, n_items }
    }

    #[test]
    fn test_generated_input_loads() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut buf = Vec::new();
        write_synthetic_input(&mut buf, &header(50, 10, 8), &mut rng).unwrap();

        let store = RatingStore::load_from_reader(Cursor::new(buf)).unwrap();
        assert_eq!(store.counts(), (10, 8, 50));

        let pairs: HashSet<(u32, u32)> = store
            .ratings()
            .iter()
            .map(|r| (r.user_id, r.item_id))
            .collect();
        assert_eq!(pairs.len(), 50, "pairs must be distinct");

        for rating in store.ratings() {
            assert!((1.0..=5.0).contains(&rating.raw_score));
            assert_eq!(rating.raw_score.fract(), 0.0);
        }
    }

    #[test]
    fn test_full_matrix_is_possible() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut buf = Vec::new();
        write_synthetic_input(&mut buf, &header(6, 2, 3), &mut rng).unwrap();

        let store = RatingStore::load_from_reader(Cursor::new(buf)).unwrap();
        assert_eq!(store.rated_by_user(0).unwrap().len(), 3);
        assert_eq!(store.rated_by_user(1).unwrap().len(), 3);
    }

    #[test]
    fn test_too_many_ratings_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut buf = Vec::new();
        let err = write_synthetic_input(&mut buf, &header(7, 2, 3), &mut rng).unwrap_err();
        assert!(matches!(err, DataLoadError::ValidationError(_)));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_counts_beyond_id_range_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut buf = Vec::new();
        let err = write_synthetic_input(&mut buf, &header(1, u32::MAX as usize + 1, 1), &mut rng)
            .unwrap_err();
        assert!(matches!(err, DataLoadError::ValidationError(_)));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_same_seed_same_output() {
        let generate = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut buf = Vec::new();
            write_synthetic_input(&mut buf, &header(20, 5, 5), &mut rng).unwrap();
            buf
        };
        assert_eq!(generate(42), generate(42));
    }
}
