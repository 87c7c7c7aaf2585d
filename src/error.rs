//! Configuration errors raised when building a table or bag.

use thiserror::Error;

/// Errors reported while constructing a `HashTable` or `Bag`.
///
/// Lookups and mutations never fail; absence is reported through `false` or
/// a zero count.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BagError {
    #[error("bucket count must be positive, got 0")]
    ZeroBuckets,
}

pub type Result<T, E = BagError> = core::result::Result<T, E>;
