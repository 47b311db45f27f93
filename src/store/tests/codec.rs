use crate::store::prelude::*;

#[test]
fn bincode_round_trip() -> anyhow::Result<()> {
    super::init_tracing();

    let store: Store<String> = store!["alpha".to_string(), "beta".to_string(), String::new()];

    for configuration in [BincodeConfiguration::Standard, BincodeConfiguration::Legacy] {
        let bytes = store.bincode(&configuration)?;
        let decoded = Store::<String>::from_bincode(&bytes, &configuration)?;
        assert_eq!(decoded, store);
    }

    Ok(())
}

#[test]
fn bincode_across_profiles() -> anyhow::Result<()> {
    let full: Store<u64> = (0..256).collect();
    let bytes = full.bincode(&BincodeConfiguration::default())?;

    let mini = MiniStore::<u64>::from_bincode(&bytes, &BincodeConfiguration::Standard)?;
    assert_eq!(mini.as_slice(), full.as_slice());

    Ok(())
}

#[test]
fn bincode_configurations_differ() -> anyhow::Result<()> {
    let store: Store<u32> = store![1, 2, 3];

    let standard = store.bincode(&BincodeConfiguration::Standard)?;
    let legacy = store.bincode(&BincodeConfiguration::Legacy)?;

    assert!(standard.len() < legacy.len());
    Ok(())
}

#[test]
fn bincode_rejects_trailing_bytes() -> anyhow::Result<()> {
    let store: Store<u8> = store![1, 2, 3];
    let mut bytes = store.bincode(&BincodeConfiguration::Standard)?;
    bytes.push(0xFF);

    assert!(Store::<u8>::from_bincode(&bytes, &BincodeConfiguration::Standard).is_err());
    Ok(())
}

#[test]
fn bincode_rejects_truncated_input() -> anyhow::Result<()> {
    let store: Store<i64> = store![i64::MIN, 0, i64::MAX];
    let bytes = store.bincode(&BincodeConfiguration::Legacy)?;

    let truncated = &bytes[..bytes.len() - 1];
    assert!(Store::<i64>::from_bincode(truncated, &BincodeConfiguration::Legacy).is_err());
    Ok(())
}

#[test]
fn serde_json_shape() -> anyhow::Result<()> {
    let store: Store<i32> = store![1, 2, 3];
    assert_eq!(serde_json::to_string(&store)?, "[1,2,3]");

    let parsed: MiniStore<i32> = serde_json::from_str("[4, 5]")?;
    assert_eq!(parsed.as_slice(), &[4, 5]);

    let empty: Store<i32> = serde_json::from_str("[]")?;
    assert!(empty.is_empty());

    assert!(serde_json::from_str::<Store<i32>>("{\"a\": 1}").is_err());
    Ok(())
}
