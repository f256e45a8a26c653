//! Core outcome container: a two-variant sum type for fallible operations.
//!
//! The accessor surface lives in the `accessors` submodule; this module owns
//! the type definition and its construction states.

mod accessors;


/// The result of a fallible operation: exactly one of a success payload of
/// type `T` or an error of type `E`.
///
/// The state is fixed at construction and never transitions afterwards.
/// Extraction via [`Outcome::into_value`] consumes the container, so a
/// moved-from outcome cannot be observed.
///
/// For operations that succeed without producing data, use `Outcome<(), E>`;
/// its [`Default`] value is the success state.
///
/// ```rust
/// use outcome::Outcome;
///
/// fn checked_div(num: i32, den: i32) -> Outcome<i32, String> {
///     if den == 0 {
///         return Outcome::Error("division by zero".to_owned());
///     }
///     Outcome::Value(num / den)
/// }
///
/// assert_eq!(checked_div(6, 3).value(), 2);
/// assert!(checked_div(1, 0).has_error());
/// ```
#[must_use = "an `Outcome` may carry an error that should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The operation succeeded, carrying its payload.
    Value(T),
    /// The operation failed, carrying the error.
    Error(E),
}

impl<T: Default, E> Default for Outcome<T, E> {
    /// Returns the canonical success state.
    ///
    /// For the unit form `Outcome<(), E>` this is the "operation succeeded
    /// with nothing to report" value that side-effect-only functions return.
    fn default() -> Self {
        Self::Value(T::default())
    }
}
