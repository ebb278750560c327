//! Filter to remove books the user has already rated.
//!
//! This is always the first filter in the recommender's pipeline: a rated
//! book is never recommended back to the same user.

use crate::candidate::{Candidate, UserContext};
use crate::traits::Filter;
use anyhow::Result;

/// Removes candidates that the user has already rated.
///
/// ## Algorithm
/// Uses the HashSet in UserContext.rated_items for O(1) lookups.
pub struct AlreadyRatedFilter;

impl Filter for AlreadyRatedFilter {
    fn name(&self) -> &str {
        "AlreadyRatedFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, context: &UserContext<'_>) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| !context.rated_items.contains(&candidate.item_id))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_already_rated_filter() {
        let rated: HashSet<u32> = [100, 200].into_iter().collect();
        let context = UserContext::new(1, &rated);

        let candidates = vec![
            Candidate::new(100),
            Candidate::new(101),
            Candidate::new(200),
            Candidate::new(300),
        ];

        let filter = AlreadyRatedFilter;
        let filtered = filter.apply(candidates, &context).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].item_id, 101);
        assert_eq!(filtered[1].item_id, 300);
    }

    #[test]
    fn test_everything_rated() {
        let rated: HashSet<u32> = [0, 1].into_iter().collect();
        let context = UserContext::new(0, &rated);

        let filtered = AlreadyRatedFilter
            .apply(vec![Candidate::new(0), Candidate::new(1)], &context)
            .unwrap();
        assert!(filtered.is_empty());
    }
}
