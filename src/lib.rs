//! hash-bag: an unordered multiset (bag) backed by a fixed-size hash table.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: store values with repetition, answer per-value counts, and
//!   remove one or all occurrences, without keeping insertion order.
//! - Layers (data flows strictly downward):
//!   - Bag<T>: public facade; resolves the bucket for a value, delegates,
//!     and keeps a running total so `len()` is O(1).
//!   - HashTable<T>: fixed array of buckets; maps a value to exactly one
//!     bucket index.
//!   - Bucket<T>: unordered `Vec` of entries searched linearly by `Eq`.
//!   - Entry<T>: one distinct value with a non-zero occurrence count.
//!
//! Bucket selection
//! - Values implement `Hashable`, which declares an inclusive hash range
//!   `[MIN_HASH, MAX_HASH]` alongside `hash_code()`.
//! - The index is the hash's position within that range scaled onto the
//!   bucket count (not a modulo). The top of the range maps to the last
//!   bucket.
//! - A type with an empty range (`MAX_HASH <= MIN_HASH`) cannot build a
//!   table: the check is const-evaluated, so misuse fails the build.
//!
//! Constraints
//! - Bucket count is fixed at construction (default 100); no rehashing.
//! - No ordering guarantees for iteration or `to_vec()`.
//! - Single-threaded use; mutation requires `&mut Bag`.
//!
//! Counting invariants
//! - An entry's count is a `NonZeroUsize`. Decrementing the last occurrence
//!   reports exhaustion and the bucket drops the entry, so a zero count is
//!   never stored.
//! - `Bag::len()` equals the sum of all entry counts; every mutating call
//!   adjusts it by exactly the number of occurrences added or removed.
//!
//! Errors
//! - Absence is not an error: `delete`/`delete_all` return `false` and
//!   `count` returns 0.
//! - The only runtime error is a zero bucket count (`BagError::ZeroBuckets`).

pub mod bag;
pub mod bucket;
pub mod config;
mod entry;
pub mod error;
pub mod hash_table;
pub mod hashable;

// Public surface
pub use bag::Bag;
pub use config::{BagConfig, DEFAULT_BUCKETS};
pub use error::{BagError, Result};
pub use hash_table::HashTable;
pub use hashable::Hashable;
