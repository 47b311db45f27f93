use crate::store::prelude::*;

#[test]
fn remove() -> anyhow::Result<()> {
    let mut store: Store<i32> = store![42];
    assert_eq!(*store.at(0)?, 42);

    let removed = store.remove_at(0)?;
    assert_eq!(removed, 42);
    assert!(store.at(0).is_err());
    assert!(store.is_empty());

    Ok(())
}

#[test]
fn remove_out_of_bounds() -> anyhow::Result<()> {
    let mut store: Store<i32> = store![42];

    if let Err(error) = store.remove_at(1) {
        assert!(error.is_out_of_range());
    } else {
        panic!("Expected error when removing out of bounds");
    }
    assert_eq!(store.as_slice(), &[42]);

    Ok(())
}

#[test]
fn remove_shifts_tail() -> anyhow::Result<()> {
    let mut store: Store<i32> = (0..1000).collect();

    for i in 0..1000 {
        let removed = store.remove_at(0)?;
        assert_eq!(removed, i);
    }
    assert!(store.is_empty());

    let mut store: Store<char> = store!['a', 'b', 'c', 'd'];
    assert_eq!(store.remove_at(2)?, 'c');
    assert_eq!(store.as_slice(), &['a', 'b', 'd']);

    Ok(())
}

#[test]
fn pop() -> anyhow::Result<()> {
    let mut store: Store<i32> = store![1, 2, 3, 4];

    assert_eq!(store.pop_front()?, 1);
    assert_eq!(store.pop_back()?, 4);
    assert_eq!(store.as_slice(), &[2, 3]);

    assert_eq!(store.pop_back()?, 3);
    assert_eq!(store.pop_front()?, 2);

    assert!(store.pop_front().unwrap_err().is_out_of_range());
    assert!(store.pop_back().unwrap_err().is_out_of_range());

    Ok(())
}

#[test]
fn clear_keeps_capacity() {
    let mut store: Store<i32> = (0..64).collect();
    let capacity = store.capacity();

    store.clear();
    assert_eq!(store.length(), 0);
    assert_eq!(store.capacity(), capacity);
}

#[test]
fn take_leaves_source_empty() {
    let mut large: Store<String> = Store::new();
    for i in 0..1000 {
        large.emplace_back(format!("String_{i}"));
    }

    let moved = large.take();
    assert_eq!(moved.length(), 1000);
    assert_eq!(large.length(), 0);

    large.push_back("reused".to_string());
    assert_eq!(large.as_slice(), &["reused"]);
}
