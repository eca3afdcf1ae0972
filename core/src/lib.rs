//! A container for values that may be absent.
//!
//! [`Optional<T>`] lets a call chain carry "no value" through transformations,
//! filters and fallbacks without a presence check at every step. Pure in-memory
//! logic: no IO, no async.
//!
//! ```
//! use optio_core::Optional;
//!
//! let port = Optional::of_nilable(std::env::var("OPTIO_DOC_PORT").ok())
//!     .flat_map(|raw| Optional::of_errorable(raw.parse::<u16>()))
//!     .filter(|port| *port != 0)
//!     .or_else(8080);
//!
//! assert!(port > 0);
//! ```
//!
//! Operations group as follows:
//!
//! - **Construction**: [`Optional::of`], [`Optional::of_some`], [`Optional::try_of`],
//!   [`Optional::of_nilable`], [`Optional::of_errorable`], [`Optional::empty`]
//! - **Combinators**: [`Optional::map`], [`Optional::map_nilable`],
//!   [`Optional::flat_map`], [`Optional::filter`]
//! - **Fallback**: [`Optional::or`], [`Optional::or_else`], [`Optional::or_else_get`],
//!   [`Optional::or_else_panic`], [`Optional::or_else_fail`]
//! - **Consumption**: [`Optional::if_present`], [`Optional::if_present_or_else`],
//!   [`Optional::equals`]

#![allow(clippy::missing_errors_doc)]

mod combinators;
mod compare;
mod construct;
mod consume;
mod error;
mod fallback;
mod optional;

pub use compare::Comparable;
pub use error::{ConstructionError, ForcedAbsenceError};
pub use optional::Optional;
