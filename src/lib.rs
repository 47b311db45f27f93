//! An owned, growable sequence container with a friendlier surface than a bare `Vec`.
//!
//! [`Store<T>`] wraps one contiguous buffer and adds:
//!
//! - symmetric front/back insertion (`push_front`, `push_back`, bulk and emplace variants),
//! - checked access (`at`, `front`, `back`, `mid`, `max`, `min`),
//! - predicate searches (`any_of`, `find_all`, `count`, ...),
//! - fluent pipelines (`filter(..).transformed(..).sorted(..)`),
//! - deduplication, statistics and element conversions (`to_int`, `to_double`, `to_char`, `to_strings`).
//!
//! Two profiles share one implementation: [`Store<T>`] (`Full`) reports rejected
//! operations as `Err(StoreError)`, while [`MiniStore<T>`] (`Mini`) turns them
//! into `None` and leaves the store untouched.
//!
//! ```
//! use advance_store::prelude::*;
//!
//! # fn main() -> Result<(), StoreError> {
//! let mut todo: Store<&str> = store!["write docs", "review"];
//! todo.push_front("fix bug");
//! assert_eq!(todo.pop_front()?, "fix bug");
//!
//! let mut recent: MiniStore<&str> = mini_store![];
//! assert_eq!(recent.pop_back(), None);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod store;

pub use error::{Result, StoreError};
pub use store::prelude;
pub use store::{BincodeConfiguration, Full, Mini, MiniStore, Profile, Store};

/// Builds a [`Store`] (`Full` profile) from a literal list, like `vec!`.
///
/// ```
/// use advance_store::store;
///
/// let numbers = store![1, 2, 3];
/// assert_eq!(numbers.as_slice(), &[1, 2, 3]);
///
/// let zeros = store![0u8; 4];
/// assert_eq!(zeros.len(), 4);
/// ```
#[macro_export]
macro_rules! store {
    () => {
        <$crate::Store<_>>::new()
    };
    ($value:expr; $count:expr) => {
        <$crate::Store<_>>::from(::std::vec![$value; $count])
    };
    ($($value:expr),+ $(,)?) => {
        <$crate::Store<_>>::from(::std::vec![$($value),+])
    };
}

/// Builds a [`MiniStore`] from a literal list, like `vec!`.
#[macro_export]
macro_rules! mini_store {
    () => {
        <$crate::MiniStore<_>>::new()
    };
    ($value:expr; $count:expr) => {
        <$crate::MiniStore<_>>::from(::std::vec![$value; $count])
    };
    ($($value:expr),+ $(,)?) => {
        <$crate::MiniStore<_>>::from(::std::vec![$($value),+])
    };
}
