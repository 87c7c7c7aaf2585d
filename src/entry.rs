//! Entry: one distinct value together with how many times it occurs.

use core::num::NonZeroUsize;

#[derive(Debug, Clone)]
pub(crate) struct Entry<T> {
    value: T,
    count: NonZeroUsize,
}

/// Result of taking one occurrence away from an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decrement {
    /// At least one occurrence remains.
    Live,
    /// The entry held its last occurrence and must be removed by the owner.
    /// The stored count is left untouched.
    Exhausted,
}

impl<T> Entry<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            count: NonZeroUsize::MIN,
        }
    }

    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.count.get()
    }

    #[inline]
    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub(crate) fn increment(&mut self) {
        match self.count.checked_add(1) {
            Some(n) => self.count = n,
            // Same policy as `Rc`: an overflowing count cannot be represented.
            None => std::process::abort(),
        }
    }

    /// Remove one occurrence. Never stores a zero count: when the entry holds
    /// its last occurrence, the caller is told to drop the whole entry.
    #[inline]
    pub(crate) fn decrement(&mut self) -> Decrement {
        match NonZeroUsize::new(self.count.get() - 1) {
            Some(n) => {
                self.count = n;
                Decrement::Live
            }
            None => Decrement::Exhausted,
        }
    }

    #[inline]
    pub(crate) fn matches(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.value == *value
    }
}
