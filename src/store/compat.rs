//! Interoperability between [`Store`] and the standard sequence types.
//!
//! A store dereferences to `[T]`, so every slice method (`iter`, `iter_mut`,
//! `len`, `get`, `windows`, `binary_search`, ...) is available on it, and its
//! iterators are double-ended: `store.iter().rev()` walks it backwards.
//! Inherent `Store` methods shadow slice methods of the same name
//! (`sort`, `reverse`, `fill`, `contains`, `swap`).

use std::fmt;
use std::ops::{AddAssign, Deref, DerefMut, Index, IndexMut};
use std::slice::SliceIndex;

use super::{Container, Profile, Store};

impl <T, P: Profile> Deref for Store<T, P> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl <T, P: Profile> DerefMut for Store<T, P> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl <T, P: Profile> AsRef<[T]> for Store<T, P> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl <T, P: Profile> AsMut<[T]> for Store<T, P> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Unchecked-by-contract indexing: panics on an out-of-range index in every profile.
impl <T, P: Profile, I: SliceIndex<[T]>> Index<I> for Store<T, P> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl <T, P: Profile, I: SliceIndex<[T]>> IndexMut<I> for Store<T, P> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl <T, P: Profile> From<Vec<T>> for Store<T, P> {
    fn from(slots: Vec<T>) -> Self {
        Self::from_container(Container { slots })
    }
}

impl <T, P: Profile, const N: usize> From<[T; N]> for Store<T, P> {
    fn from(array: [T; N]) -> Self {
        Self::from(Vec::from(array))
    }
}

impl <T: Clone, P: Profile> From<&[T]> for Store<T, P> {
    fn from(slice: &[T]) -> Self {
        Self::from(slice.to_vec())
    }
}

impl <T, P: Profile> From<Store<T, P>> for Vec<T> {
    fn from(store: Store<T, P>) -> Self {
        store.into_vec()
    }
}

impl <T, P: Profile> FromIterator<T> for Store<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut store = Self::new();
        store.push_back_all(iter);
        store
    }
}

impl <T, P: Profile> Extend<T> for Store<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_back_all(iter);
    }
}

impl <'a, T: Copy + 'a, P: Profile> Extend<&'a T> for Store<T, P> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.push_back_all(iter.into_iter().copied());
    }
}

impl <T, P: Profile> IntoIterator for Store<T, P> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl <'a, T, P: Profile> IntoIterator for &'a Store<T, P> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl <'a, T, P: Profile> IntoIterator for &'a mut Store<T, P> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

/// `store += other` moves every element of `other` to the back.
impl <T, P: Profile, Q: Profile> AddAssign<Store<T, Q>> for Store<T, P> {
    fn add_assign(&mut self, mut other: Store<T, Q>) {
        self.append(&mut other);
    }
}

impl <T: fmt::Debug, P: Profile> fmt::Debug for Store<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Elements separated by single spaces, no trailing separator.
impl <T: fmt::Display, P: Profile> fmt::Display for Store<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements = self.as_slice().iter();
        if let Some(first) = elements.next() {
            write!(f, "{first}")?;
            for element in elements {
                write!(f, " {element}")?;
            }
        }
        Ok(())
    }
}
