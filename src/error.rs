use thiserror::Error;

/// Errors raised by the checked operations of a [`Store`](crate::Store).
///
/// Which operations surface these depends on the store's
/// [`Profile`](crate::Profile): the `Full` profile returns them directly,
/// the `Mini` profile settles them into `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An index or position fell outside `[0, length)` (or `[0, length]` for insertion).
    #[error("{operation}: index {index} is out of range for a store of length {length}")]
    OutOfRange {
        operation: &'static str,
        index: usize,
        length: usize,
    },

    /// Reserved. No current operation raises it.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation-level precondition did not hold.
    #[error("runtime error: {0}")]
    Runtime(String),
}

impl StoreError {
    pub(crate) fn out_of_range(operation: &'static str, index: usize, length: usize) -> Self {
        Self::OutOfRange { operation, index, length }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    pub fn is_runtime(&self) -> bool {
        matches!(self, Self::Runtime(_))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
