//! Side-effecting consumers and equality. None of these change state.

use std::cmp::Ordering;

use crate::Optional;
use crate::compare::Comparable;

impl<T> Optional<T> {
    pub fn if_present<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.inner {
            consumer(value);
        }
    }

    /// Run `consumer` on the payload, or `fallback` when absent. Exactly one runs.
    pub fn if_present_or_else<F, G>(&self, consumer: F, fallback: G)
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match &self.inner {
            Some(value) => consumer(value),
            None => fallback(),
        }
    }

    /// Compare two containers through the payload's [`Comparable`] impl.
    ///
    /// True only when both sides are present and compare as
    /// [`Ordering::Equal`]. Two absent containers are *not* equal.
    ///
    /// The capability is checked at compile time:
    ///
    /// ```compile_fail
    /// use optio_core::Optional;
    ///
    /// struct Opaque;
    ///
    /// let _ = Optional::of(Opaque).equals(&Optional::of(Opaque));
    /// ```
    #[must_use]
    pub fn equals<U>(&self, other: &Optional<U>) -> bool
    where
        T: Comparable<U>,
    {
        match (&self.inner, &other.inner) {
            (Some(lhs), Some(rhs)) => lhs.compare(rhs) == Ordering::Equal,
            _ => false,
        }
    }
}
