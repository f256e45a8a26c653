//! A minimal result/outcome container for exception-free error signalling.
//!
//! This crate defines the [`Outcome`] type: a two-variant sum type holding
//! exactly one of a success payload or an error, intended as the return type
//! of fallible functions. Misusing the container (reading the variant that is
//! not held) is a programming contract violation and panics; recoverable
//! failures are exactly those the callee placed in the error slot.
//!
//! Functions that succeed without producing data return the unit form,
//! `Outcome<(), E>`, which is the [`Default`] state.
//!
//! ```rust
//! use outcome::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     match raw.parse() {
//!         Ok(port) => Outcome::Value(port),
//!         Err(e) => Outcome::Error(e.to_string()),
//!     }
//! }
//!
//! let port = parse_port("8080");
//! assert!(port.has_value());
//! assert_eq!(port.value(), 8080);
//!
//! let bad = parse_port("not a port");
//! assert!(bad.has_error());
//! ```
//!
//! # Feature flags
//!
//! * `report` (default) — enables `ErrorReport`, a structured diagnostic
//!   carrying a code, description, and source location.
//! * `macros` (default) — enables the `ensure!` and `unwrap!` early-return
//!   propagation macros.
//! * `serde` — enables `Serialize`/`Deserialize` support for [`Outcome`]
//!   and `ErrorReport`.

mod outcome;

#[cfg(feature = "macros")]
mod macros;
#[cfg(feature = "report")]
mod report;

pub use outcome::Outcome;

#[cfg(feature = "report")]
pub use report::ErrorReport;

#[cfg(feature = "macros")]
#[doc(hidden)]
pub use macros::__cold;
