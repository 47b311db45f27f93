use std::marker::PhantomData;

use crate::error::{Result, StoreError};

mod codec;
mod compat;
mod convert;
mod pipeline;
mod profile;
mod traits;

pub use codec::BincodeConfiguration;
pub use convert::Convertible;
pub use profile::{Full, Mini, Profile};
pub use traits::{Allocation, Bincode, Length, SnapShot};

/// The owned buffer behind every [`Store`].
///
/// Capacity growth is decided here, through [`Container::generate_capacity`],
/// so that every insertion path grows the buffer the same way.
#[derive(Clone, PartialEq, Eq, Hash)]
struct Container<T> {
    slots: Vec<T>,
}

impl <T> Default for Container<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl <T> Container<T> {
    fn allocate(capacity: usize) -> Self {
        Self { slots: Vec::with_capacity(capacity) }
    }

    fn generate_capacity(current: usize, required: usize) -> usize {
        let new_capacity = if current < 8 {
            8
        } else {
            current.saturating_mul(2)
        };

        new_capacity.max(required)
    }

    /// Makes room for `additional` more elements, growing by the capacity policy.
    fn make_room(&mut self, additional: usize) {
        let length = self.slots.len();
        let capacity = self.slots.capacity();
        let required = length.saturating_add(additional);

        if required <= capacity {
            return;
        }

        let upto = Self::generate_capacity(capacity, required);
        self.slots.reserve_exact(upto - length);
        tracing::trace!(from = capacity, to = self.slots.capacity(), "store buffer grown");
    }

    /// Guarantees `capacity >= capacity`; never shrinks.
    fn reserve(&mut self, capacity: usize) {
        let length = self.slots.len();
        if capacity > self.slots.capacity() {
            self.slots.reserve_exact(capacity - length);
        }
    }

    fn push(&mut self, value: T) {
        self.make_room(1);
        self.slots.push(value);
    }

    fn insert(&mut self, index: usize, value: T) {
        self.make_room(1);
        self.slots.insert(index, value);
    }

    fn splice_front<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        let incoming: Vec<T> = iter.into_iter().collect();
        self.make_room(incoming.len());
        self.slots.splice(0..0, incoming);
    }

    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        self.make_room(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

/// ### -> `Store<T, P>` - An owned, growable, index-addressable sequence container.
///
/// `Store<T>` owns one contiguous buffer of `T` and layers a friendlier surface
/// on top of it than a bare `Vec<T>`: symmetric front/back insertion, checked
/// access, predicate searches, fluent filter/transform/sort pipelines,
/// deduplication, simple statistics and element conversions.
///
/// ### -> `Profiles`
///
/// The second type parameter selects how rejected operations are reported
/// (see [`Profile`]):
///
/// - **`Store<T>` / `Store<T, Full>`**: checked operations return
///   `Result<_, StoreError>`.
/// - **`MiniStore<T>` / `Store<T, Mini>`**: checked operations return
///   `Option<_>`; a rejected operation is a silent no-op.
///
/// Both profiles share every line of implementation; only the final
/// reporting step differs. A store can be re-tagged with [`Store::into_profile`].
///
/// ### -> `Invariants`
///
/// 1. **Length ≤ Capacity**: the logical length never exceeds the allocated capacity.
/// 2. **Contiguity**: elements occupy indices `[0, length)`.
/// 3. **Exclusive ownership**: references into the buffer are borrows of the
///    store and cannot survive a mutation that may relocate it.
///
/// ### -> `Checked vs Unchecked Access`
///
/// | Entry point                          | Checked | On violation                     |
/// |--------------------------------------|---------|----------------------------------|
/// | `at`, `front`, `back`, `mid`, ...    | yes     | `Err` (Full) / `None` (Mini)     |
/// | `store[i]`                           | no      | panic                            |
/// | `get_unchecked` (via `Deref<[T]>`)   | no      | undefined behaviour (`unsafe`)   |
///
/// ### -> `Performance Characteristics`
///
/// - **Push back / emplace back**: amortized O(1).
/// - **Push front / emplace front / pop front**: O(n), every element shifts.
/// - **Insert / remove at**: O(n).
/// - **Search / filter / transform**: O(n).
/// - **Sort / unique**: O(n log n).
///
/// ### -> `Usage Example`
///
/// ```
/// use advance_store::prelude::*;
///
/// # fn main() -> Result<(), StoreError> {
/// let mut store: Store<i32> = store![5, 2, 8, 1, 9, 2, 5];
///
/// store.push_front(0);
/// store.push_back(10);
/// assert_eq!(*store.front()?, 0);
/// assert_eq!(*store.back()?, 10);
///
/// assert_eq!(store.find_all(&2), vec![2, 6]);
///
/// store.unique(true);
/// assert_eq!(store.as_slice(), &[0, 1, 2, 5, 8, 9, 10]);
///
/// let evens = store.filter(|value| value % 2 == 0).sorted(false);
/// assert_eq!(evens.as_slice(), &[10, 8, 2, 0]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Store<T, P: Profile = Full> {
    container: Container<T>,
    profile: PhantomData<P>,
}

/// A [`Store`] under the lax [`Mini`] profile.
pub type MiniStore<T> = Store<T, Mini>;

impl <T, P: Profile> Store<T, P> {
    /// Creates an empty store without allocating.
    pub fn new() -> Self {
        Self::from_container(Container::default())
    }

    fn from_container(container: Container<T>) -> Self {
        Self { container, profile: PhantomData }
    }

    /// Creates a store that holds clones of every element of `slice`.
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from(slice.to_vec())
    }

    /// Re-tags the store with another profile. No element is moved or copied.
    pub fn into_profile<Q: Profile>(self) -> Store<T, Q> {
        Store::from_container(self.container)
    }

    /// Moves the contents out, leaving this store empty and valid.
    pub fn take(&mut self) -> Self {
        Self::from_container(std::mem::take(&mut self.container))
    }

    /// Consumes the store and returns its buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.container.slots
    }

    pub fn as_slice(&self) -> &[T] {
        &self.container.slots
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.container.slots
    }

    /// Raw pointer to the first slot of the buffer.
    ///
    /// The pointer is invalidated by any mutation that may grow, shrink or
    /// clear the store.
    pub fn data(&self) -> *const T {
        self.container.slots.as_ptr()
    }

    /// Mutable raw pointer to the first slot of the buffer. Same validity rules as [`Store::data`].
    pub fn data_mut(&mut self) -> *mut T {
        self.container.slots.as_mut_ptr()
    }

    fn length_of(&self) -> usize {
        self.container.slots.len()
    }
}

impl <T, P: Profile> Default for Store<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl <T, P: Profile> traits::Allocation<T> for Store<T, P> {
    fn allocate(capacity: usize) -> Self {
        Self::from_container(Container::allocate(capacity))
    }

    fn allocate_sized(length: usize) -> Self
    where
        T: Default,
    {
        let mut container = Container::allocate(length);
        container.slots.resize_with(length, T::default);
        Self::from_container(container)
    }
}

impl <T, P: Profile> traits::Length for Store<T, P> {
    fn length(&self) -> usize {
        self.length_of()
    }
}

impl <T: Clone, P: Profile> traits::SnapShot<T> for Store<T, P> {
    fn snapshot(&self) -> Vec<T> {
        self.container.slots.clone()
    }
}

// Capacity
impl <T, P: Profile> Store<T, P> {
    /// Number of slots currently allocated; always `>= length`.
    pub fn capacity(&self) -> usize {
        self.container.slots.capacity()
    }

    /// Guarantees `capacity() >= capacity` without touching the elements.
    ///
    /// Unlike [`Vec::reserve`], the argument is the total capacity wanted, not
    /// an additional count. Never shrinks.
    pub fn reserve(&mut self, capacity: usize) {
        self.container.reserve(capacity);
    }

    /// Truncates to `length`, or appends `T::default()` until the store holds `length` elements.
    pub fn resize(&mut self, length: usize)
    where
        T: Default,
    {
        let current = self.length_of();
        if length > current {
            self.container.make_room(length - current);
        }
        self.container.slots.resize_with(length, T::default);
    }

    /// Asks the allocator to drop unused capacity. Best-effort.
    pub fn shrink_to_fit(&mut self) {
        self.container.slots.shrink_to_fit();
    }

    /// Removes every element. The allocated capacity is kept.
    pub fn clear(&mut self) {
        self.container.slots.clear();
    }
}

// Element access
impl <T, P: Profile> Store<T, P> {
    fn checked(&self, operation: &'static str, index: usize) -> Result<usize> {
        let length = self.length_of();
        if index < length {
            Ok(index)
        } else {
            Err(StoreError::out_of_range(operation, index, length))
        }
    }

    /// Bounds-checked access to the element at `index`.
    ///
    /// ```
    /// use advance_store::prelude::*;
    ///
    /// let store: Store<i32> = store![10, 20, 30];
    /// assert_eq!(store.at(1), Ok(&20));
    /// assert!(store.at(3).unwrap_err().is_out_of_range());
    ///
    /// let mini: MiniStore<i32> = mini_store![10, 20, 30];
    /// assert_eq!(mini.at(3), None);
    /// ```
    pub fn at(&self, index: usize) -> P::Outcome<&T> {
        P::settle(self.checked("at", index).map(|index| &self.container.slots[index]))
    }

    /// Bounds-checked mutable access to the element at `index`.
    pub fn at_mut(&mut self, index: usize) -> P::Outcome<&mut T> {
        let checked = self.checked("at_mut", index);
        P::settle(checked.map(|index| &mut self.container.slots[index]))
    }

    pub fn front(&self) -> P::Outcome<&T> {
        P::settle(self.checked("front", 0).map(|index| &self.container.slots[index]))
    }

    pub fn back(&self) -> P::Outcome<&T> {
        let length = self.length_of();
        let last = length.saturating_sub(1);
        P::settle(self.checked("back", last).map(|index| &self.container.slots[index]))
    }

    /// The element at `length / 2`.
    pub fn mid(&self) -> P::Outcome<&T> {
        let middle = self.length_of() / 2;
        P::settle(self.checked("mid", middle).map(|index| &self.container.slots[index]))
    }

    /// The greatest element; the first one scanned wins a tie.
    ///
    /// Incomparable pairs (e.g. `NaN`) never replace the current maximum.
    pub fn max(&self) -> P::Outcome<&T>
    where
        T: PartialOrd,
    {
        P::settle(self.extreme("max", |candidate, best| candidate > best))
    }

    /// The least element; the first one scanned wins a tie.
    pub fn min(&self) -> P::Outcome<&T>
    where
        T: PartialOrd,
    {
        P::settle(self.extreme("min", |candidate, best| candidate < best))
    }

    fn extreme<F>(&self, operation: &'static str, mut replaces: F) -> Result<&T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut slots = self.container.slots.iter();
        let mut best = slots
            .next()
            .ok_or_else(|| StoreError::out_of_range(operation, 0, 0))?;

        for candidate in slots {
            if replaces(candidate, best) {
                best = candidate;
            }
        }

        Ok(best)
    }
}

// Insertion & removal
impl <T, P: Profile> Store<T, P> {
    pub fn push_back(&mut self, value: T) {
        self.container.push(value);
    }

    /// Prepends `value`. O(length): every element shifts one slot right.
    pub fn push_front(&mut self, value: T) {
        self.container.insert(0, value);
    }

    /// Appends every element of `values`, in order.
    pub fn push_back_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.container.extend(values);
    }

    /// Prepends every element of `values`, keeping their relative order.
    ///
    /// ```
    /// use advance_store::prelude::*;
    ///
    /// let mut store: Store<i32> = store![4, 5];
    /// store.push_front_all([1, 2, 3]);
    /// assert_eq!(store.as_slice(), &[1, 2, 3, 4, 5]);
    /// ```
    pub fn push_front_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.container.splice_front(values);
    }

    /// Constructs an element from `args` at the back and returns it.
    pub fn emplace_back<A>(&mut self, args: A) -> &mut T
    where
        A: Into<T>,
    {
        self.container.push(args.into());
        let last = self.length_of() - 1;
        &mut self.container.slots[last]
    }

    /// Constructs an element from `args` at the front and returns it.
    pub fn emplace_front<A>(&mut self, args: A) -> &mut T
    where
        A: Into<T>,
    {
        self.container.insert(0, args.into());
        &mut self.container.slots[0]
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> P::Outcome<T> {
        let checked = self.checked("pop_front", 0);
        P::settle(checked.map(|index| self.container.slots.remove(index)))
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> P::Outcome<T> {
        let popped = self
            .container
            .slots
            .pop()
            .ok_or_else(|| StoreError::out_of_range("pop_back", 0, 0));
        P::settle(popped)
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    pub fn remove_at(&mut self, index: usize) -> P::Outcome<T> {
        let checked = self.checked("remove_at", index);
        P::settle(checked.map(|index| self.container.slots.remove(index)))
    }

    /// Inserts `value` before `index`. `index == length` appends.
    pub fn insert(&mut self, index: usize, value: T) -> P::Outcome<()> {
        let length = self.length_of();
        if index > length {
            return P::settle(Err(StoreError::out_of_range("insert", index, length)));
        }

        self.container.insert(index, value);
        P::settle(Ok(()))
    }

    /// Overwrites the element at `index` and returns the previous value.
    pub fn replace_at(&mut self, index: usize, value: T) -> P::Outcome<T> {
        let checked = self.checked("replace_at", index);
        P::settle(checked.map(|index| std::mem::replace(&mut self.container.slots[index], value)))
    }

    /// Moves every element of `other` to the back of this store, leaving `other` empty.
    pub fn append<Q: Profile>(&mut self, other: &mut Store<T, Q>) {
        let incoming = other.length_of();
        self.container.make_room(incoming);
        self.container.slots.append(&mut other.container.slots);
    }

    /// Exchanges the contents of two stores.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.container, &mut other.container);
    }
}

pub mod prelude;

#[cfg(test)]
mod tests;
