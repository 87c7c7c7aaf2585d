//! HashTable: a fixed array of buckets addressed by range-scaled hash codes.
//!
//! A value's bucket is found by measuring how far its hash code sits between
//! the type's declared `MIN_HASH` and `MAX_HASH`, then scaling that fraction
//! onto the bucket count:
//!
//! ```text
//! index = floor((hash - MIN_HASH) / (MAX_HASH - MIN_HASH) * buckets)
//! ```
//!
//! The arithmetic is done exactly in 128-bit integers. A hash equal to
//! `MAX_HASH` lands on the last bucket rather than one past it. The table
//! never grows; the bucket count is fixed when it is built.

use crate::bucket::{self, Bucket};
use crate::config::BagConfig;
use crate::error::Result;
use crate::hashable::Hashable;

/// Width of a type's declared hash range, checked when first used.
trait HashSpan: Hashable {
    const SPAN: u128 = {
        assert!(
            Self::MAX_HASH > Self::MIN_HASH,
            "Hashable::MAX_HASH must be greater than Hashable::MIN_HASH"
        );
        (Self::MAX_HASH as i128 - Self::MIN_HASH as i128) as u128
    };
}

impl<T: Hashable + ?Sized> HashSpan for T {}

/// Map `hash` onto `[0, buckets)` by its position within `T`'s hash range.
///
/// Hash codes outside the declared range break the `Hashable` contract; debug
/// builds assert, release builds saturate to the first or last bucket.
pub(crate) fn scale_to_bucket<T: Hashable + ?Sized>(hash: i64, buckets: usize) -> usize {
    debug_assert!(buckets > 0);
    debug_assert!(
        (T::MIN_HASH..=T::MAX_HASH).contains(&hash),
        "hash code {hash} outside declared range [{}, {}]",
        T::MIN_HASH,
        T::MAX_HASH
    );
    let span = <T as HashSpan>::SPAN;
    let offset = (i128::from(hash) - i128::from(T::MIN_HASH)).clamp(0, span as i128) as u128;
    let last = buckets as u128 - 1;
    (offset * buckets as u128 / span).min(last) as usize
}

#[derive(Debug, Clone)]
pub struct HashTable<T> {
    buckets: Box<[Bucket<T>]>,
}

impl<T: Hashable> Default for HashTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hashable> HashTable<T> {
    /// Table with the default bucket count.
    pub fn new() -> Self {
        Self::with_config(BagConfig::default())
    }

    pub fn with_buckets(buckets: usize) -> Result<Self> {
        Ok(Self::with_config(BagConfig::with_buckets(buckets)?))
    }

    pub fn with_config(config: BagConfig) -> Self {
        let span = <T as HashSpan>::SPAN;
        let n = config.buckets.get();
        tracing::debug!(
            buckets = n,
            min_hash = T::MIN_HASH,
            max_hash = T::MAX_HASH,
            range_width = %span,
            "allocating hash table"
        );
        Self {
            buckets: (0..n).map(|_| Bucket::new()).collect(),
        }
    }

    /// Index of the bucket `value` belongs to, whether or not it is stored.
    pub fn bucket_index(&self, value: &T) -> usize {
        scale_to_bucket::<T>(value.hash_code(), self.buckets.len())
    }

    /// The bucket `value` belongs to, whether or not it is stored.
    pub fn bucket(&self, value: &T) -> &Bucket<T> {
        &self.buckets[self.bucket_index(value)]
    }

    pub fn bucket_mut(&mut self, value: &T) -> &mut Bucket<T> {
        let i = self.bucket_index(value);
        &mut self.buckets[i]
    }
}

impl<T> HashTable<T> {
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Buckets in index order.
    pub fn buckets(&self) -> core::slice::Iter<'_, Bucket<T>> {
        self.buckets.iter()
    }

    /// Every stored occurrence, bucket by bucket. Order within a bucket is
    /// arbitrary.
    pub fn iter<'a>(&'a self) -> Iter<'a, T> {
        let flatten: fn(&'a Bucket<T>) -> bucket::Iter<'a, T> = Bucket::iter;
        Iter {
            inner: self.buckets.iter().flat_map(flatten),
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

type Flatten<'a, T> = core::iter::FlatMap<
    core::slice::Iter<'a, Bucket<T>>,
    bucket::Iter<'a, T>,
    fn(&'a Bucket<T>) -> bucket::Iter<'a, T>,
>;

/// Iterator over every occurrence stored in a `HashTable`.
pub struct Iter<'a, T> {
    inner: Flatten<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
