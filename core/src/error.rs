use thiserror::Error;

/// An absent value was handed to a constructor that requires a present one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "Optional::of_some requires a present value; use Optional::of_nilable for values that may be absent"
)]
pub struct ConstructionError;

/// A caller asserted a container was present and it was not.
///
/// Displays as the caller's message, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ForcedAbsenceError {
    message: String,
}

impl ForcedAbsenceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}
