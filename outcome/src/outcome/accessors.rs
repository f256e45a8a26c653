//! Accessor surface for [`Outcome`]: state predicates plus duplicating,
//! borrowing, and consuming payload extraction.
//!
//! Duplication requires `Clone` on the relevant slot and is enforced at
//! compile time; reading the variant that is not held is a contract
//! violation and panics.

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// Returns `true` when the container holds a success payload.
    ///
    /// Exactly one of [`Outcome::has_value`] and [`Outcome::has_error`] is
    /// `true` for any outcome.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` when the container holds an error.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        !self.has_value()
    }

    /// Returns a clone of the success payload.
    ///
    /// The `T: Clone` bound is the duplicability contract: payload types
    /// that cannot be duplicated are rejected at compile time, and callers
    /// must use [`Outcome::value_ref`] or [`Outcome::into_value`] instead.
    ///
    /// ```compile_fail
    /// use outcome::Outcome;
    ///
    /// struct Session(u32); // deliberately not Clone
    ///
    /// let outcome: Outcome<Session, i32> = Outcome::Value(Session(7));
    /// let session = outcome.value();
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the outcome holds an error.
    #[must_use]
    pub fn value(&self) -> T
    where
        T: Clone,
    {
        match self {
            Self::Value(value) => value.clone(),
            Self::Error(_) => panic!("called `Outcome::value()` on an `Error` outcome"),
        }
    }

    /// Borrows the success payload.
    ///
    /// The borrow is non-owning and lifetime-bound to the container; this is
    /// the accessor of choice for payload types that cannot be cloned.
    ///
    /// # Panics
    ///
    /// Panics if the outcome holds an error.
    #[must_use]
    pub fn value_ref(&self) -> &T {
        match self {
            Self::Value(value) => value,
            Self::Error(_) => panic!("called `Outcome::value_ref()` on an `Error` outcome"),
        }
    }

    /// Mutably borrows the success payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome holds an error.
    #[must_use]
    pub fn value_mut(&mut self) -> &mut T {
        match self {
            Self::Value(value) => value,
            Self::Error(_) => panic!("called `Outcome::value_mut()` on an `Error` outcome"),
        }
    }

    /// Consumes the outcome and transfers ownership of the payload to the
    /// caller.
    ///
    /// Because this takes `self` by value, the moved-from container cannot
    /// be read again; the at-most-once extraction rule is enforced by the
    /// compiler rather than by convention.
    ///
    /// # Panics
    ///
    /// Panics if the outcome holds an error.
    #[must_use]
    pub fn into_value(self) -> T {
        match self {
            Self::Value(value) => value,
            Self::Error(_) => panic!("called `Outcome::into_value()` on an `Error` outcome"),
        }
    }

    /// Returns a clone of the error.
    ///
    /// # Panics
    ///
    /// Panics if the outcome holds a success payload.
    #[must_use]
    pub fn error(&self) -> E
    where
        E: Clone,
    {
        match self {
            Self::Value(_) => panic!("called `Outcome::error()` on a `Value` outcome"),
            Self::Error(error) => error.clone(),
        }
    }

    /// Consumes the outcome and transfers ownership of the error to the
    /// caller.
    ///
    /// This is the extraction used by the propagation macros, so errors need
    /// not be `Clone` to travel up the call stack.
    ///
    /// # Panics
    ///
    /// Panics if the outcome holds a success payload.
    #[must_use]
    pub fn into_error(self) -> E {
        match self {
            Self::Value(_) => panic!("called `Outcome::into_error()` on a `Value` outcome"),
            Self::Error(error) => error,
        }
    }
}
