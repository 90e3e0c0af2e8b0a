//! # Sequence Interfaces - Conformance Without Inheritance
//!
//! An abstract "sequence" is anything with a length and indexed access.
//! Given those two, everything else (iteration, membership, search,
//! reversal) follows, so the trait requires two methods and provides the
//! rest:
//!
//! - [`Sequence`]: `len` + `item`, everything else provided
//! - [`MutableSequence`]: adds `set_item`, `insert_item`, `remove_at`
//!
//! ## Registration is an `impl`
//!
//! A type that *looks* like a sequence is not one until it says so.
//! [`MySequence`] was written with only `len` and indexed access, and the
//! single line `impl Sequence for MySequence<T>` is what makes it a sequence.
//! No inheritance is involved and nothing is recorded at runtime: the
//! compiler checks the declaration where it is written.
//!
//! [`UnregisteredSequence`] has the same two methods but no `impl`, and
//! [`conforms_to!`](crate::conforms_to) reports the difference.
//!
//! ## Naming
//!
//! The provided methods use names (`items`, `insert_item`, ...) that do not
//! collide with the inherent methods of `Vec` and slices, so importing the
//! traits never changes what `v.iter()` or `v.insert(..)` mean.

use std::collections::VecDeque;

use crate::SequenceError;

/// A sized, indexable collection.
pub trait Sequence {
    /// Element type, returned by value.
    type Item;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Element at `index`, or `None` past the end.
    fn item(&self, index: usize) -> Option<Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate by index from 0, stopping at the first missing element.
    fn items(&self) -> SequenceIter<'_, Self> {
        SequenceIter {
            seq: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Iterate from the last element to the first.
    fn reversed(&self) -> std::iter::Rev<SequenceIter<'_, Self>> {
        self.items().rev()
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.items().any(|x| &x == value)
    }

    /// Position of the first element equal to `value`.
    fn index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.items().position(|x| &x == value)
    }

    /// Number of elements equal to `value`.
    fn count_of(&self, value: &Self::Item) -> usize
    where
        Self::Item: PartialEq,
    {
        self.items().filter(|x| x == value).count()
    }
}

/// A [`Sequence`] that can be changed in place.
///
/// Implementors supply `set_item`, `insert_item` and `remove_at`; the rest is
/// built on those and may be overridden with something faster.
pub trait MutableSequence: Sequence {
    /// Replace the element at `index`.
    fn set_item(&mut self, index: usize, value: Self::Item) -> Result<(), SequenceError>;

    /// Insert before `index`; `index == len` appends.
    fn insert_item(&mut self, index: usize, value: Self::Item) -> Result<(), SequenceError>;

    /// Remove and return the element at `index`.
    fn remove_at(&mut self, index: usize) -> Result<Self::Item, SequenceError>;

    fn push_item(&mut self, value: Self::Item) -> Result<(), SequenceError> {
        let len = self.len();
        self.insert_item(len, value)
    }

    fn extend_items<I>(&mut self, values: I) -> Result<(), SequenceError>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        for value in values {
            self.push_item(value)?;
        }
        Ok(())
    }

    /// Remove and return the last element.
    fn pop_item(&mut self) -> Result<Self::Item, SequenceError> {
        match self.len() {
            0 => Err(SequenceError::Empty),
            len => self.remove_at(len - 1),
        }
    }

    /// Reverse in place by swapping through `item`/`set_item`.
    fn reverse_items(&mut self) -> Result<(), SequenceError> {
        let len = self.len();
        for i in 0..len / 2 {
            let j = len - 1 - i;
            let (a, b) = match (self.item(i), self.item(j)) {
                (Some(a), Some(b)) => (a, b),
                _ => return Err(SequenceError::IndexOutOfRange { index: j, len }),
            };
            self.set_item(i, b)?;
            self.set_item(j, a)?;
        }
        Ok(())
    }

    /// Remove the first element equal to `value`.
    fn remove_value(&mut self, value: &Self::Item) -> Result<(), SequenceError>
    where
        Self::Item: PartialEq,
    {
        let index = self.index_of(value).ok_or(SequenceError::ValueNotFound)?;
        self.remove_at(index).map(|_| ())
    }
}

/// Index-driven iterator over any [`Sequence`].
pub struct SequenceIter<'a, S: ?Sized> {
    seq: &'a S,
    front: usize,
    back: usize,
}

impl<S: Sequence + ?Sized> Iterator for SequenceIter<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.front >= self.back {
            return None;
        }
        match self.seq.item(self.front) {
            Some(value) => {
                self.front += 1;
                Some(value)
            }
            None => {
                self.front = self.back;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.back - self.front))
    }
}

impl<S: Sequence + ?Sized> DoubleEndedIterator for SequenceIter<'_, S> {
    fn next_back(&mut self) -> Option<S::Item> {
        if self.front >= self.back {
            return None;
        }
        match self.seq.item(self.back - 1) {
            Some(value) => {
                self.back -= 1;
                Some(value)
            }
            None => {
                self.back = self.front;
                None
            }
        }
    }
}

// ============================================================================
// Standard Library Conformance
// ============================================================================

impl<T: Clone> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn item(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn item(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn item(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }
}

impl<T: Clone> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn item(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

/// A string is a sequence of characters. `Sequence::len` counts characters,
/// not bytes, and indexing walks from the start.
impl Sequence for str {
    type Item = char;

    fn len(&self) -> usize {
        self.chars().count()
    }

    fn item(&self, index: usize) -> Option<char> {
        self.chars().nth(index)
    }
}

impl Sequence for String {
    type Item = char;

    fn len(&self) -> usize {
        Sequence::len(self.as_str())
    }

    fn item(&self, index: usize) -> Option<char> {
        self.as_str().item(index)
    }
}

impl<T: Clone> MutableSequence for Vec<T> {
    fn set_item(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        let len = self.as_slice().len();
        let slot = self
            .get_mut(index)
            .ok_or(SequenceError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    fn insert_item(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        let len = self.as_slice().len();
        if index > len {
            return Err(SequenceError::IndexOutOfRange { index, len });
        }
        self.insert(index, value);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, SequenceError> {
        let len = self.as_slice().len();
        if index >= len {
            return Err(SequenceError::IndexOutOfRange { index, len });
        }
        Ok(self.remove(index))
    }

    fn push_item(&mut self, value: T) -> Result<(), SequenceError> {
        self.push(value);
        Ok(())
    }

    fn pop_item(&mut self) -> Result<T, SequenceError> {
        self.pop().ok_or(SequenceError::Empty)
    }

    fn reverse_items(&mut self) -> Result<(), SequenceError> {
        self.as_mut_slice().reverse();
        Ok(())
    }
}

// ============================================================================
// A Custom Sequence
// ============================================================================

/// A wrapper exposing only a length and indexed access.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MySequence<T> {
    data: Vec<T>,
}

impl<T> MySequence<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }
}

// The registration.
impl<T: Clone> Sequence for MySequence<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn item(&self, index: usize) -> Option<T> {
        self.data.get(index).cloned()
    }
}

impl<'a, T: Clone> IntoIterator for &'a MySequence<T> {
    type Item = T;
    type IntoIter = SequenceIter<'a, MySequence<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items()
    }
}

/// Structurally identical to [`MySequence`], but never declared a
/// [`Sequence`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnregisteredSequence<T> {
    data: Vec<T>,
}

impl<T> UnregisteredSequence<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }
}

// ============================================================================
// Conformance Checks
// ============================================================================

/// `true` if the type implements the trait, `false` otherwise.
///
/// ```rust
/// use std::collections::HashSet;
/// use fluent_sequences::{conforms_to, MutableSequence, MySequence, Sequence};
///
/// assert!(conforms_to!(MySequence<i32>: Sequence));
/// assert!(conforms_to!(str: Sequence));
/// assert!(!conforms_to!(str: MutableSequence));
/// assert!(!conforms_to!(HashSet<i32>: Sequence));
/// ```
///
/// Resolved entirely at compile time: an inherent method that exists only
/// when `T: Trait` shadows a fallback trait method returning `false`.
/// Works on concrete types only; inside a generic function the answer would
/// reflect the declared bounds rather than the caller's type.
#[macro_export]
macro_rules! conforms_to {
    ($ty:ty : $trait:path) => {{
        struct Probe<T: ?Sized>(::core::marker::PhantomData<T>);

        #[allow(dead_code)]
        trait Fallback {
            fn conforms(&self) -> bool {
                false
            }
        }

        impl<T: ?Sized> Fallback for Probe<T> {}

        #[allow(dead_code)]
        impl<T: ?Sized + $trait> Probe<T> {
            fn conforms(&self) -> bool {
                true
            }
        }

        Probe::<$ty>(::core::marker::PhantomData).conforms()
    }};
}
