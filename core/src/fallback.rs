//! Fallbacks: substitute or extract when the container may be absent.
//!
//! Suppliers run only on the absent path. Extra inputs a supplier needs are
//! either captured by the closure or passed as one typed `args` value through
//! the `*_with` variants.

use crate::Optional;
use crate::error::ForcedAbsenceError;

impl<T> Optional<T> {
    /// Keep a present container, or ask `supplier` for a replacement.
    ///
    /// This is the only operation that can turn an absent container into a
    /// present one.
    pub fn or<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Option<T>,
    {
        self.or_with((), |()| supplier())
    }

    /// [`Optional::or`] with explicit supplier arguments.
    ///
    /// `args` is dropped untouched when the container is present.
    pub fn or_with<A, F>(self, args: A, supplier: F) -> Self
    where
        F: FnOnce(A) -> Option<T>,
    {
        if self.is_present() {
            return self;
        }
        Self::of_nilable(supplier(args))
    }

    /// Take the payload, or `other` when absent.
    ///
    /// `other` is evaluated by the caller up front; see
    /// [`Optional::or_else_get`] for the lazy form.
    #[must_use]
    pub fn or_else(self, other: T) -> T {
        self.inner.unwrap_or(other)
    }

    #[must_use]
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.inner.unwrap_or_else(supplier)
    }

    #[must_use]
    pub fn or_else_get_with<A, F>(self, args: A, supplier: F) -> T
    where
        F: FnOnce(A) -> T,
    {
        match self.inner {
            Some(value) => value,
            None => supplier(args),
        }
    }

    /// Take the payload or report a [`ForcedAbsenceError`] carrying `message`.
    pub fn or_else_fail(self, message: impl Into<String>) -> Result<T, ForcedAbsenceError> {
        self.inner.ok_or_else(|| ForcedAbsenceError::new(message))
    }

    /// Take the payload, asserting it exists.
    ///
    /// # Panics
    ///
    /// Panics when absent. The panic payload is `message`, unchanged.
    #[track_caller]
    #[must_use]
    pub fn or_else_panic(self, message: &str) -> T {
        match self.or_else_fail(message) {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(reason = err.message(), "forced read of absent Optional");
                panic!("{err}");
            }
        }
    }
}
