use crate::store::prelude::*;

#[test]
fn growth_policy() {
    let mut store: Store<u8> = Store::new();
    assert_eq!(store.capacity(), 0);

    store.push_back(1);
    assert!(store.capacity() >= 8);

    let mut previous = store.capacity();
    for value in 0..200u8 {
        store.push_back(value);
        assert!(store.length() <= store.capacity());

        if store.capacity() != previous {
            assert!(store.capacity() >= previous * 2);
            previous = store.capacity();
        }
    }
}

#[test]
fn reserve_never_shrinks() {
    let mut store: Store<i32> = store![1, 2, 3];

    store.reserve(100);
    assert!(store.capacity() >= 100);
    let reserved = store.capacity();

    store.reserve(10);
    assert_eq!(store.capacity(), reserved);
    assert_eq!(store.as_slice(), &[1, 2, 3]);

    for value in 4..=100 {
        store.push_back(value);
    }
    assert_eq!(store.capacity(), reserved);
}

#[test]
fn resize() {
    let mut store: Store<i32> = store![1, 2, 3, 4, 5];

    store.resize(3);
    assert_eq!(store.as_slice(), &[1, 2, 3]);

    store.resize(6);
    assert_eq!(store.as_slice(), &[1, 2, 3, 0, 0, 0]);

    store.resize(0);
    assert!(store.is_empty());
}

#[test]
fn shrink_to_fit() {
    let mut store: Store<i32> = Store::allocate(1000);
    store.push_back_all(0..10);

    store.shrink_to_fit();
    assert!(store.capacity() >= 10);
    assert!(store.capacity() < 1000);
    assert_eq!(store.length(), 10);
}

#[test]
fn allocation() {
    let empty = Store::<String>::allocate(16);
    assert_eq!(empty.length(), 0);
    assert!(empty.capacity() >= 16);

    let sized = Store::<String>::allocate_sized(3);
    assert_eq!(sized.length(), 3);
    assert!(sized.all_eq(&String::new()));
}

#[test]
fn length_comparisons() {
    let short: Store<i32> = store![1, 2];
    let long: Store<i32> = store![3, 4, 5];
    let other: Store<i32> = store![9, 9];

    assert!(short.length_eq(&other));
    assert_eq!(short.length_cmp(&long), std::cmp::Ordering::Less);
    assert_eq!(long.length_cmp(&short), std::cmp::Ordering::Greater);
}

#[test]
fn snapshot_is_independent() {
    let mut store: Store<i32> = store![1, 2, 3];
    let snapshot = store.snapshot();

    store.push_back(4);
    store[0] = 100;

    assert_eq!(snapshot, vec![1, 2, 3]);
    assert_eq!(store.as_slice(), &[100, 2, 3, 4]);
}

#[test]
fn clone_is_deep() {
    let original: Store<String> = store!["a".to_string(), "b".to_string()];
    let mut copy = original.clone();
    copy[0].push('!');
    copy.push_back("c".to_string());

    assert_eq!(original.as_slice(), &["a", "b"]);
    assert_eq!(copy.as_slice(), &["a!", "b", "c"]);
}

#[test]
fn vec_conversions() {
    let store: Store<i32> = Store::from(vec![1, 2, 3]);
    let from_array: Store<i32> = Store::from([1, 2, 3]);
    let from_slice: Store<i32> = Store::from_slice(&[1, 2, 3]);

    assert_eq!(store, from_array);
    assert_eq!(store, from_slice);

    let back: Vec<i32> = store.into();
    assert_eq!(back, vec![1, 2, 3]);
}
