use log::{debug, trace};

use crate::error::{ArraySetError, Result};

/// An insertion-ordered collection with set-like operations, stored in a `Vec`.
///
/// `add` does not deduplicate: adding an element twice stores it twice, and each copy has to
/// be removed separately. Lookups and removals scan from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArraySet<T> {
    items: Vec<T>,
}

impl<T> ArraySet<T> {
    pub fn new<I>(initial: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = ArraySet { items: Vec::new() };
        for x in initial {
            set.add(x);
        }
        set
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ArraySet {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_nonempty(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Appends `x`, even if an equal element is already present.
    pub fn add(&mut self, x: T) {
        let old_capacity = self.items.capacity();
        self.items.push(x);
        let new_capacity = self.items.capacity();
        if new_capacity != old_capacity {
            trace!(
                "grew backing store from {} to {}, copying {} elements",
                old_capacity,
                new_capacity,
                self.items.len() - 1
            );
        }
    }
}

impl<T> ArraySet<T>
where
    T: PartialEq,
{
    pub fn contains(&self, x: &T) -> bool {
        self.items.iter().any(|item| item == x)
    }

    pub fn count(&self, x: &T) -> usize {
        self.items.iter().filter(|item| *item == x).count()
    }

    pub fn position(&self, x: &T) -> Option<usize> {
        self.items.iter().position(|item| item == x)
    }

    /// Removes the first element equal to `x`, shifting everything after it down by one.
    ///
    /// Fails with [`ArraySetError::NotFound`] if there is no such element, in which case the
    /// set is left untouched.
    pub fn remove(&mut self, x: &T) -> Result<()> {
        let Some(index) = self.position(x) else {
            debug!("remove from set of {} elements found no match", self.items.len());
            return Err(ArraySetError::NotFound);
        };
        self.items.remove(index);
        Ok(())
    }
}

impl<T> Default for ArraySet<T> {
    fn default() -> Self {
        ArraySet { items: Vec::new() }
    }
}

impl<T> FromIterator<T> for ArraySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ArraySet::new(iter)
    }
}

impl<T> Extend<T> for ArraySet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl<T> From<Vec<T>> for ArraySet<T> {
    fn from(items: Vec<T>) -> Self {
        ArraySet { items }
    }
}

impl<T, const N: usize> From<[T; N]> for ArraySet<T> {
    fn from(items: [T; N]) -> Self {
        ArraySet::new(items)
    }
}
