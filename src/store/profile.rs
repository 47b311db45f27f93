use crate::error::Result;

/// ### -> `Profile Trait`.
///
/// Selects how a [`Store`](super::Store) reports a rejected operation.
///
/// Every checked operation (`at`, `front`, `pop_back`, `insert`, `remove_at`,
/// conversions, ...) first computes a `Result<V, StoreError>` and then hands it
/// to [`Profile::settle`]. The profile decides what the caller finally sees
/// through the associated [`Profile::Outcome`] type.
///
/// A rejected operation never mutates the store, whatever the profile.
///
/// ### -> `Provided Profiles`
/// - [`Full`]: `Outcome<V> = Result<V, StoreError>`. Fails fast, the caller must handle it.
/// - [`Mini`]: `Outcome<V> = Option<V>`. Rejections become `None` and are otherwise silent.
///
/// Indexing with `store[i]` is outside this contract: it panics on a bad index
/// in every profile, like slice indexing.
pub trait Profile: Copy + Default + Send + Sync + 'static {
    /// Short name used in log events.
    const NAME: &'static str;

    /// What checked operations return under this profile.
    type Outcome<V>;

    fn settle<V>(result: Result<V>) -> Self::Outcome<V>;
}

/// The checked profile. Every rejected operation returns `Err(StoreError)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Full;

/// The lax profile. Rejected operations return `None` and leave the store unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mini;

impl Profile for Full {
    const NAME: &'static str = "full";

    type Outcome<V> = Result<V>;

    #[inline]
    fn settle<V>(result: Result<V>) -> Self::Outcome<V> {
        result
    }
}

impl Profile for Mini {
    const NAME: &'static str = "mini";

    type Outcome<V> = Option<V>;

    #[inline]
    fn settle<V>(result: Result<V>) -> Self::Outcome<V> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::trace!(profile = Self::NAME, %error, "operation rejected");
                None
            }
        }
    }
}
