/// Next free id for a collection: one past the current maximum, or 1 for an
/// empty collection.
pub fn next_id<I>(ids: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    ids.into_iter().max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_collection_starts_at_one() {
        assert_eq!(next_id(Vec::new()), 1);
    }

    #[test]
    fn test_gaps_are_not_filled() {
        assert_eq!(next_id(vec![1, 5, 3]), 6);
    }

    proptest! {
        #[test]
        fn next_id_exceeds_every_existing_id(ids in proptest::collection::vec(1u64..1_000_000, 0..64)) {
            let next = next_id(ids.iter().copied());
            prop_assert!(next >= 1);
            prop_assert!(ids.iter().all(|id| *id < next));
        }
    }
}
