//! State-to-state transformations.
//!
//! Each combinator consumes its container and returns a fresh one. An absent
//! input short-circuits: the closure is never called.

use crate::Optional;

impl<T> Optional<T> {
    /// Transform the payload, changing the contained type.
    pub fn map<U, F>(self, transform: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional::from_slot(self.inner.map(transform))
    }

    /// Transform the payload with a function that may itself produce nothing.
    ///
    /// The result is absent when the input is absent or `transform` returns `None`.
    pub fn map_nilable<U, F>(self, transform: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        Optional::from_slot(self.inner.and_then(transform))
    }

    /// Chain a transform that already speaks in containers.
    ///
    /// Use this instead of [`Optional::map`] when the next step is a second
    /// fallible operation; the result is never nested.
    pub fn flat_map<U, F>(self, transform: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.inner {
            Some(value) => transform(value),
            None => Optional::empty(),
        }
    }

    /// Keep the payload only if `predicate` accepts it.
    ///
    /// The predicate sees the payload only when one exists.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if self.inner.as_ref().is_some_and(predicate) {
            self
        } else {
            Self::empty()
        }
    }
}
