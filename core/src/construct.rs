//! Entry points that establish a container's initial state.

use std::fmt::Display;

use crate::Optional;
use crate::error::ConstructionError;

impl<T> Optional<T> {
    /// Wrap a value that is known to exist.
    ///
    /// A plain `T` is never absent, so this cannot fail. Use
    /// [`Optional::of_some`] or [`Optional::try_of`] when the source is an
    /// `Option` that the caller asserts is populated.
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::from_slot(Some(value))
    }

    /// Wrap a value the caller asserts is present.
    ///
    /// # Panics
    ///
    /// Panics with [`ConstructionError`] when `value` is `None`. Sources that
    /// may legitimately be empty belong in [`Optional::of_nilable`].
    #[track_caller]
    pub fn of_some(value: Option<T>) -> Self {
        match Self::try_of(value) {
            Ok(opt) => opt,
            Err(err) => {
                tracing::error!(error = %err, "absent value passed to Optional::of_some");
                panic!("{err}");
            }
        }
    }

    /// Non-panicking form of [`Optional::of_some`].
    pub fn try_of(value: Option<T>) -> Result<Self, ConstructionError> {
        value.map(Self::of).ok_or(ConstructionError)
    }

    #[inline]
    pub const fn of_nilable(value: Option<T>) -> Self {
        Self::from_slot(value)
    }

    /// Build from the outcome of a fallible operation.
    ///
    /// `Err` yields an absent container; the error itself is dropped after
    /// being logged at `debug`.
    pub fn of_errorable<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::of(value),
            Err(err) => {
                tracing::debug!(error = %err, "discarding error, container is absent");
                Self::empty()
            }
        }
    }

    /// Like [`Optional::of_errorable`] for operations whose success value may
    /// itself be missing.
    pub fn of_errorable_nilable<E: Display>(result: Result<Option<T>, E>) -> Self {
        Optional::of_errorable(result).flat_map(Self::of_nilable)
    }

    #[inline]
    pub const fn empty() -> Self {
        Self::from_slot(None)
    }
}
