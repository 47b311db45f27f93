use std::cmp::Ordering;

use crate::BincodeConfiguration;

/// ### -> `Allocation<T> Trait`.
///
/// Provides allocation capabilities for stores and is the foundational
/// trait for constructing them up front.
///
/// ### -> `Methods`
/// - `allocate(capacity: usize) -> Self`:
/// Allocates an empty store able to hold at least `capacity` elements without growing.
/// - `allocate_sized(length: usize) -> Self`:
/// Allocates a store holding `length` default-valued elements.
///
/// ### -> `Usage`
///
/// ```
/// use advance_store::prelude::*;
///
/// let store = Store::<i32>::allocate(5);
/// assert_eq!(store.length(), 0);
/// assert!(store.capacity() >= 5);
///
/// let sized = Store::<i32>::allocate_sized(3);
/// assert_eq!(sized.as_slice(), &[0, 0, 0]);
/// ```
pub trait Allocation<T>
where
    Self: Sized,
{
    #[must_use = "Allocated stores must have a purpose!"]
    fn allocate(capacity: usize) -> Self;

    #[must_use = "Allocated stores must have a purpose!"]
    fn allocate_sized(length: usize) -> Self
    where
        T: Default;
}

/// Length queries and comparisons.
pub trait Length {
    fn length(&self) -> usize;

    fn length_eq(&self, other: &Self) -> bool {
        self.length() == other.length()
    }

    fn length_cmp(&self, other: &Self) -> Ordering {
        self.length().cmp(&other.length())
    }
}

/// ### -> `SnapShot<T> Trait`.
///
/// Copies the current contents into a plain `Vec<T>`. The snapshot is
/// independent: later mutations of the store are not reflected in it.
pub trait SnapShot<T>
where
    T: Clone,
{
    #[must_use = "Snapshot output must serve a purpose!"]
    fn snapshot(&self) -> Vec<T>;
}

/// ### -> `Bincode<T> Trait`.
///
/// Binary encoding of a store's elements, in order, through `serde`.
/// The [`BincodeConfiguration`] passed to `from_bincode` must match the one
/// used to encode.
///
/// ### -> `Usage`
///
/// ```
/// use advance_store::prelude::*;
///
/// # fn main() -> anyhow::Result<()> {
/// let store = store![1, 2, 3];
/// let bytes = store.bincode(&BincodeConfiguration::Standard)?;
/// let decoded = Store::<i32>::from_bincode(&bytes, &BincodeConfiguration::Standard)?;
/// assert_eq!(store, decoded);
/// # Ok(())
/// # }
/// ```
pub trait Bincode<T>: SnapShot<T>
where
    T: Clone,
    Self: Sized,
{
    #[must_use = "Bincode serialization output must serve a purpose!"]
    fn bincode(&self, configuration: &BincodeConfiguration) -> anyhow::Result<Vec<u8>>
    where
        T: serde::Serialize;

    fn from_bincode(bytes: &[u8], configuration: &BincodeConfiguration) -> anyhow::Result<Self>
    where
        T: serde::de::DeserializeOwned;
}
