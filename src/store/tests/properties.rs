use proptest::collection::vec;
use proptest::prelude::*;

use crate::store::prelude::*;

proptest! {
    #[test]
    fn push_front_and_back_keep_indices(values in vec(any::<i32>(), 0..64), head: i32, tail: i32) {
        let mut store: Store<i32> = Store::from(values.clone());

        store.push_back(tail);
        prop_assert_eq!(store[store.length() - 1], tail);
        prop_assert_eq!(&store[..values.len()], values.as_slice());

        store.push_front(head);
        prop_assert_eq!(store[0], head);
        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(&store[index + 1], value);
        }
        prop_assert_eq!(store.length(), values.len() + 2);
    }

    #[test]
    fn ascending_is_reverse_of_descending(values in vec(any::<i64>(), 0..128)) {
        let ascending = Store::<i64>::from(values.clone()).sorted(true);
        let descending = Store::<i64>::from(values).sorted(false);

        prop_assert_eq!(ascending, descending.reversed());
    }

    #[test]
    fn reverse_twice_is_identity(values in vec(any::<u16>(), 0..128)) {
        let store: Store<u16> = Store::from(values);
        prop_assert_eq!(store.clone().reversed().reversed(), store);
    }

    #[test]
    fn filter_is_pure(values in vec(any::<i32>(), 0..128), pivot: i32) {
        let store: Store<i32> = Store::from(values.clone());
        let kept = store.filter(|value| *value < pivot);

        prop_assert_eq!(store.as_slice(), values.as_slice());
        prop_assert!(kept.all_of(|value| *value < pivot));

        let expected: Vec<i32> = values.into_iter().filter(|value| *value < pivot).collect();
        prop_assert_eq!(kept.into_vec(), expected);
    }

    #[test]
    fn unique_sorted_is_strictly_increasing(values in vec(0u8..32, 0..128)) {
        let mut store: Store<u8> = Store::from(values.clone());
        store.unique(true);

        prop_assert!(store.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(values.iter().all(|value| store.contains(value)));
    }

    #[test]
    fn find_all_matches_count(values in vec(0u8..8, 0..128), needle in 0u8..8) {
        let store: Store<u8> = Store::from(values);
        let indices = store.find_all(&needle);

        prop_assert_eq!(indices.len(), store.count(&needle));
        prop_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(indices.iter().all(|index| store[*index] == needle));
    }

    #[test]
    fn length_never_exceeds_capacity(pushes in 0usize..512) {
        let mut store: Store<usize> = Store::new();
        for value in 0..pushes {
            store.push_back(value);
            prop_assert!(store.length() <= store.capacity());
        }
    }

    #[test]
    fn int_round_trip_through_strings(values in vec(any::<i32>(), 1..64)) {
        let store: Store<i32> = Store::from(values);
        let texts = store.to_strings().map_err(|error| TestCaseError::fail(error.to_string()))?;
        let numbers = texts.to_int().map_err(|error| TestCaseError::fail(error.to_string()))?;

        prop_assert_eq!(numbers, store);
    }

    #[test]
    fn mini_rejection_leaves_store_unchanged(values in vec(any::<i32>(), 0..32), offset in 0usize..8) {
        let mut store: MiniStore<i32> = MiniStore::from(values.clone());
        let index = values.len() + offset;

        prop_assert_eq!(store.remove_at(index), None);
        prop_assert_eq!(store.replace_at(index, 0), None);
        prop_assert_eq!(store.insert(index + 1, 0), None);
        prop_assert_eq!(store.into_vec(), values);
    }
}
