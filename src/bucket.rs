//! Bucket: the entries for every value that maps to one table slot.
//!
//! Entries are kept in a `Vec` and found by a linear scan on `Eq`. Buckets
//! are expected to stay small when hash codes spread evenly across their
//! declared range, but nothing enforces that.

use crate::entry::{Decrement, Entry};

#[derive(Debug, Clone)]
pub struct Bucket<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for Bucket<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Bucket<T> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of distinct values in this bucket.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct values with their occurrence counts, in arbitrary order.
    pub fn entries(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.entries.iter().map(|e| (e.value(), e.count()))
    }

    /// Every stored occurrence: each value is yielded once per unit of its
    /// count.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            entries: self.entries.iter(),
            current: None,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> Bucket<T> {
    fn position(&self, value: &T) -> Option<usize> {
        self.entries.iter().position(|e| e.matches(value))
    }

    pub fn count(&self, value: &T) -> usize {
        self.position(value)
            .map(|i| self.entries[i].count())
            .unwrap_or(0)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    pub fn insert(&mut self, value: T) {
        match self.position(&value) {
            Some(i) => self.entries[i].increment(),
            None => self.entries.push(Entry::new(value)),
        }
    }

    /// Remove one occurrence of `value`. Returns whether it was present.
    pub fn delete(&mut self, value: &T) -> bool {
        let Some(i) = self.position(value) else {
            return false;
        };
        if self.entries[i].decrement() == Decrement::Exhausted {
            // Order inside a bucket carries no meaning.
            self.entries.swap_remove(i);
        }
        true
    }

    /// Remove every occurrence of `value`, returning how many there were.
    pub fn delete_all(&mut self, value: &T) -> usize {
        match self.position(value) {
            Some(i) => self.entries.swap_remove(i).count(),
            None => 0,
        }
    }
}

/// Iterator over every occurrence stored in a `Bucket`.
#[derive(Debug)]
pub struct Iter<'a, T> {
    entries: core::slice::Iter<'a, Entry<T>>,
    current: Option<(&'a T, usize)>,
}

// Only references are held, so no `T: Clone` bound.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            current: self.current,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((value, remaining)) = self.current.as_mut() {
                if *remaining > 0 {
                    *remaining -= 1;
                    return Some(*value);
                }
            }
            let e = self.entries.next()?;
            self.current = Some((e.value(), e.count()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.current.map(|(_, n)| n).unwrap_or(0);
        let rest = self.entries.as_slice();
        if rest.is_empty() {
            (pending, Some(pending))
        } else {
            // Each remaining entry holds at least one occurrence.
            (pending + rest.len(), None)
        }
    }
}
