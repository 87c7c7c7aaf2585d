//! Construction-time settings for a `HashTable`.

use core::num::NonZeroUsize;

use crate::error::{BagError, Result};

/// Bucket count used by `Bag::new` and `BagConfig::default`.
pub const DEFAULT_BUCKETS: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(n) => n,
    None => panic!("default bucket count must be non-zero"),
};

/// Settings fixed for the lifetime of a table. The table never resizes, so
/// the bucket count chosen here bounds how well values spread out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BagConfig {
    pub buckets: NonZeroUsize,
}

impl Default for BagConfig {
    fn default() -> Self {
        Self {
            buckets: DEFAULT_BUCKETS,
        }
    }
}

impl BagConfig {
    pub fn new(buckets: NonZeroUsize) -> Self {
        Self { buckets }
    }

    /// Validate a raw bucket count.
    pub fn with_buckets(buckets: usize) -> Result<Self> {
        match NonZeroUsize::new(buckets) {
            Some(buckets) => Ok(Self { buckets }),
            None => {
                tracing::warn!("rejecting table configuration with zero buckets");
                Err(BagError::ZeroBuckets)
            }
        }
    }
}
