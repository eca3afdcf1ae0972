//! The container and its query operations.

use std::fmt;

/// A value that may be absent.
///
/// `Optional` is either present, holding a payload of type `T`, or absent.
/// Construction goes through [`Optional::of`], [`Optional::of_nilable`],
/// [`Optional::of_errorable`], [`Optional::empty`] and friends; the payload
/// field is private so the present/absent state can only come from those
/// entry points.
///
/// Combinators take `self` by value and hand back a new container. A caller
/// that still needs the original either clones it or works through
/// [`Optional::as_ref`].
///
/// # Invariants
///
/// - Present iff the inner slot holds a value
/// - An absent container has no payload to read
///
/// ```compile_fail
/// use optio_core::Optional;
///
/// // The state is private; only the constructors can set it.
/// let _ = Optional { inner: Some(1) };
/// ```
#[derive(Clone, Copy)]
#[must_use]
pub struct Optional<T> {
    pub(crate) inner: Option<T>,
}

impl<T> Optional<T> {
    pub(crate) const fn from_slot(inner: Option<T>) -> Self {
        Self { inner }
    }

    #[inline]
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.inner.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.inner.is_none()
    }

    /// Peek at the payload without consuming the container.
    ///
    /// Returns `None` when absent. Never panics.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    /// Consume the container and return its payload, if any.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Option<T> {
        self.inner
    }

    /// Borrow the payload as a new container of references.
    ///
    /// Lets a chain run against a shared container without moving or cloning it.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional::from_slot(self.inner.as_ref())
    }

    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        Optional::from_slot(self.inner.as_mut())
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nilable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.inner
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(value) => f.debug_tuple("Present").field(value).finish(),
            None => f.write_str("Absent"),
        }
    }
}
