use std::cmp::Ordering;
use std::fmt::Display;
use std::io::{self, Write};

use super::{Convertible, Profile, Store};

// Search & predicates
impl <T, P: Profile> Store<T, P> {
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().iter().any(|element| element == value)
    }

    /// True as soon as one element satisfies `predicate`.
    pub fn any_of<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.as_slice().iter().any(predicate)
    }

    /// True unless one element fails `predicate`. Vacuously true when empty.
    pub fn all_of<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.as_slice().iter().all(predicate)
    }

    /// True unless one element satisfies `predicate`.
    pub fn none_of<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        !self.any_of(predicate)
    }

    pub fn any_eq(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.any_of(|element| element == value)
    }

    pub fn all_eq(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.all_of(|element| element == value)
    }

    pub fn none_eq(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.none_of(|element| element == value)
    }

    /// Ascending indices of every element equal to `value`.
    pub fn find_all(&self, value: &T) -> Vec<usize>
    where
        T: PartialEq,
    {
        self.find_all_if(|element| element == value)
    }

    /// Ascending indices of every element satisfying `predicate`.
    pub fn find_all_if<F>(&self, mut predicate: F) -> Vec<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.as_slice()
            .iter()
            .enumerate()
            .filter_map(|(index, element)| predicate(element).then_some(index))
            .collect()
    }

    /// Index of the first element equal to `value`, `None` when absent.
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|element| element == value)
    }

    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.count_if(|element| element == value)
    }

    pub fn count_if<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.as_slice().iter().filter(|element| predicate(element)).count()
    }
}

/// Natural ordering for `PartialOrd` elements; incomparable pairs count as equal.
fn natural<T: PartialOrd>(left: &T, right: &T) -> Ordering {
    left.partial_cmp(right).unwrap_or(Ordering::Equal)
}

// In-place transformation. Each returns `&mut Self` so calls can chain:
// `store.sort(true).unique(false).reverse();`
impl <T, P: Profile> Store<T, P> {
    /// Replaces every element with `function(&element)`.
    pub fn transform<F>(&mut self, mut function: F) -> &mut Self
    where
        F: FnMut(&T) -> T,
    {
        for element in self.as_mut_slice() {
            *element = function(element);
        }
        self
    }

    /// Sorts under the natural ordering, ascending or descending.
    ///
    /// The sort is unstable: equal elements carry no relative-order guarantee.
    pub fn sort(&mut self, ascending: bool) -> &mut Self
    where
        T: PartialOrd,
    {
        if ascending {
            self.as_mut_slice().sort_unstable_by(natural);
        } else {
            self.as_mut_slice().sort_unstable_by(|left, right| natural(right, left));
        }
        self
    }

    /// Sorts with a caller-supplied comparator.
    pub fn sort_by<F>(&mut self, comparator: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_unstable_by(comparator);
        self
    }

    /// Removes duplicates.
    ///
    /// With `auto_sort` the store is **sorted ascending first**, so every
    /// duplicate is removed but the original order is lost. Without it only
    /// runs of adjacent equal elements collapse (see [`Store::unique_adjacent`]).
    ///
    /// ```
    /// use advance_store::prelude::*;
    ///
    /// let mut store: Store<i32> = store![5, 2, 8, 1, 9, 2, 5];
    /// store.unique(true);
    /// assert_eq!(store.as_slice(), &[1, 2, 5, 8, 9]);
    ///
    /// let mut store: Store<i32> = store![1, 1, 2, 1];
    /// store.unique(false);
    /// assert_eq!(store.as_slice(), &[1, 2, 1]);
    /// ```
    pub fn unique(&mut self, auto_sort: bool) -> &mut Self
    where
        T: PartialOrd,
    {
        if auto_sort {
            self.sort(true);
        }
        self.unique_adjacent()
    }

    /// Collapses each run of adjacent equal elements to its first element. Order is kept.
    pub fn unique_adjacent(&mut self) -> &mut Self
    where
        T: PartialEq,
    {
        self.container.slots.dedup();
        self
    }

    /// Sorts ascending, then removes every duplicate.
    pub fn sorted_unique(&mut self) -> &mut Self
    where
        T: PartialOrd,
    {
        self.unique(true)
    }

    pub fn reverse(&mut self) -> &mut Self {
        self.as_mut_slice().reverse();
        self
    }

    /// Overwrites every existing element with a clone of `value`. The length is unchanged.
    pub fn fill(&mut self, value: &T) -> &mut Self
    where
        T: Clone,
    {
        self.as_mut_slice().fill(value.clone());
        self
    }

    /// Replaces every element equal to `old` with a clone of `new`.
    pub fn replace_all(&mut self, old: &T, new: T) -> &mut Self
    where
        T: PartialEq + Clone,
    {
        for element in self.as_mut_slice() {
            if *element == *old {
                *element = new.clone();
            }
        }
        self
    }
}

// By-value pipeline stages: each consumes and returns an owned store, so
// `store.filter(..).transformed(..).sorted(..)` never touches the receiver.
impl <T, P: Profile> Store<T, P> {
    /// A new store with clones of the elements satisfying `predicate`, in order.
    /// The receiver is left untouched.
    ///
    /// ```
    /// use advance_store::prelude::*;
    ///
    /// let salaries: Store<f64> = store![1200.5, 800.2, 1500.8, 900.1, 2000.5, 750.3];
    /// let raised = salaries
    ///     .filter(|salary| *salary > 1000.0)
    ///     .transformed(|salary| salary * 1.1)
    ///     .sorted(false);
    ///
    /// assert_eq!(raised.length(), 3);
    /// assert_eq!(salaries.length(), 6);
    /// assert!((raised[0] - 2200.55).abs() < 1e-9);
    /// ```
    #[must_use = "filter returns a new store and leaves the receiver unchanged"]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.as_slice()
            .iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// A new store holding `function(&element)` for every element, in order.
    #[must_use = "map returns a new store and leaves the receiver unchanged"]
    pub fn map<U, F>(&self, function: F) -> Store<U, P>
    where
        F: FnMut(&T) -> U,
    {
        self.as_slice().iter().map(function).collect()
    }

    pub fn transformed<F>(mut self, function: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        self.transform(function);
        self
    }

    pub fn sorted(mut self, ascending: bool) -> Self
    where
        T: PartialOrd,
    {
        self.sort(ascending);
        self
    }

    pub fn sorted_by<F>(mut self, comparator: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_by(comparator);
        self
    }

    pub fn reversed(mut self) -> Self {
        self.reverse();
        self
    }

    pub fn deduplicated(mut self, auto_sort: bool) -> Self
    where
        T: PartialOrd,
    {
        self.unique(auto_sort);
        self
    }
}

// Statistics
impl <T, P: Profile> Store<T, P> {
    /// Sum of every element; the additive identity when empty.
    pub fn sum(&self) -> T
    where
        T: Clone + std::iter::Sum<T>,
    {
        self.as_slice().iter().cloned().sum()
    }

    /// Arithmetic mean of the elements as `f64`; `0.0` when empty.
    pub fn average(&self) -> f64
    where
        T: Convertible,
    {
        let length = self.length_of();
        if length == 0 {
            return 0.0;
        }

        let total: f64 = self.as_slice().iter().map(Convertible::to_double).sum();
        total / length as f64
    }
}

// Diagnostics output
impl <T: Display, P: Profile> Store<T, P> {
    /// Writes the elements separated by single spaces, with an optional trailing newline.
    ///
    /// Meant for diagnostics only; this is not a stable serialization format.
    pub fn write_to<W: Write>(&self, writer: &mut W, new_line: bool) -> io::Result<()> {
        write!(writer, "{self}")?;
        if new_line {
            writeln!(writer)?;
        }
        Ok(())
    }

    /// [`Store::write_to`] on standard output.
    pub fn print(&self, new_line: bool) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle, new_line)?;
        handle.flush()
    }
}
