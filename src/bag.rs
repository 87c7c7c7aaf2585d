//! Bag: the public multiset facade.
//!
//! Every operation resolves the bucket a value maps to and delegates to it.
//! The bag also keeps a running total of stored occurrences so `len` is O(1);
//! the total is adjusted on each mutation and never recomputed.

use core::fmt;

use crate::bucket::Bucket;
use crate::config::BagConfig;
use crate::error::Result;
use crate::hash_table::{self, HashTable};
use crate::hashable::Hashable;

/// An unordered multiset.
///
/// Values are grouped by hash into a fixed number of buckets (100 unless
/// configured otherwise), and each distinct value is stored once alongside
/// its occurrence count. Lookups cost one scan of a single bucket.
///
/// ```
/// use hash_bag::Bag;
///
/// let mut cars = Bag::with_buckets(5).unwrap();
/// cars.insert("Honda Pilot");
/// cars.insert("Honda Fit");
/// cars.insert("Honda Pilot");
///
/// assert_eq!(cars.count(&"Honda Pilot"), 2);
/// assert_eq!(cars.count(&"Yugo"), 0);
/// assert_eq!(cars.len(), 3);
///
/// let mut all = cars.to_vec();
/// all.sort();
/// assert_eq!(all, ["Honda Fit", "Honda Pilot", "Honda Pilot"]);
/// ```
#[derive(Clone)]
pub struct Bag<T> {
    table: HashTable<T>,
    len: usize,
}

impl<T: Hashable> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hashable> Bag<T> {
    /// An empty bag with the default bucket count.
    pub fn new() -> Self {
        Self::from_table(HashTable::new())
    }

    pub fn with_buckets(buckets: usize) -> Result<Self> {
        Ok(Self::from_table(HashTable::with_buckets(buckets)?))
    }

    pub fn with_config(config: BagConfig) -> Self {
        Self::from_table(HashTable::with_config(config))
    }
}

impl<T> Bag<T> {
    /// Build a bag around an existing table, counting whatever it already
    /// holds.
    pub fn from_table(table: HashTable<T>) -> Self {
        let len = table
            .buckets()
            .flat_map(|b| b.entries())
            .map(|(_, n)| n)
            .sum();
        Self { table, len }
    }

    /// Total number of stored occurrences, repeats included.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct values.
    pub fn distinct_len(&self) -> usize {
        self.table.buckets().map(Bucket::len).sum()
    }

    pub fn num_buckets(&self) -> usize {
        self.table.num_buckets()
    }

    pub fn table(&self) -> &HashTable<T> {
        &self.table
    }

    /// Every stored occurrence; a value appears once per unit of its count.
    /// Order is unspecified.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.table.iter(),
            remaining: self.len,
        }
    }

    /// Distinct values with their counts, in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.table.buckets().flat_map(|b| b.entries())
    }

    /// Copy every occurrence into a `Vec` of exactly `len()` items.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter().cloned());
        out
    }
}

impl<T: Hashable + PartialEq> Bag<T> {
    pub fn insert(&mut self, value: T) {
        self.table.bucket_mut(&value).insert(value);
        self.len += 1;
    }

    /// Whether at least one occurrence of `value` is stored.
    pub fn contains(&self, value: &T) -> bool {
        self.table.bucket(value).contains(value)
    }

    pub fn count(&self, value: &T) -> usize {
        self.table.bucket(value).count(value)
    }

    /// Remove a single occurrence of `value`. Returns whether one was present.
    /// Use [`Bag::delete_all`] to drop every occurrence at once.
    pub fn delete(&mut self, value: &T) -> bool {
        let removed = self.table.bucket_mut(value).delete(value);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Remove every occurrence of `value`. Returns whether any were present.
    pub fn delete_all(&mut self, value: &T) -> bool {
        let removed = self.table.bucket_mut(value).delete_all(value);
        if removed == 0 {
            return false;
        }
        tracing::trace!(removed, "deleted all occurrences of a value");
        self.len -= removed;
        true
    }
}

impl<T: fmt::Debug> fmt::Debug for Bag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hashable + PartialEq> Extend<T> for Bag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Hashable + PartialEq> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Bag::new();
        bag.extend(iter);
        bag
    }
}

impl<'a, T> IntoIterator for &'a Bag<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over every occurrence stored in a `Bag`.
pub struct Iter<'a, T> {
    inner: hash_table::Iter<'a, T>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        debug_assert!(
            self.remaining > 0,
            "bag holds more occurrences than its length; a `Hashable` value changed its hash code or equality while stored"
        );
        self.remaining = self.remaining.saturating_sub(1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
