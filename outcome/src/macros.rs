//! Early-return propagation helpers for functions returning
//! [`Outcome`](crate::Outcome).
//!
//! Both macros are sugar for the manual "check and return early" pattern;
//! they add no behaviour beyond what the accessor surface already provides.

/// Marks the failure branch of the propagation macros as statistically cold.
#[doc(hidden)]
#[cold]
#[inline(never)]
pub fn __cold() {}

/// Checks `condition` and returns early from the enclosing function with
/// `error` when it does not hold.
///
/// The enclosing function must return an [`Outcome`](crate::Outcome) whose
/// error slot `error` converts into. The failure branch is marked cold:
/// write conditions so that failing them is the unlikely path.
///
/// ```rust
/// use outcome::{Outcome, ensure};
///
/// fn halve(i: i32) -> Outcome<i32, String> {
///     ensure!(i % 2 == 0, format!("{i} is odd"));
///     Outcome::Value(i / 2)
/// }
///
/// assert_eq!(halve(4), Outcome::Value(2));
/// assert_eq!(halve(3), Outcome::Error("3 is odd".to_owned()));
/// ```
#[macro_export]
macro_rules! ensure {
    ($condition:expr, $error:expr) => {
        if !$condition {
            $crate::__cold();
            return $crate::Outcome::Error($error.into());
        }
    };
}

/// Evaluates an [`Outcome`](crate::Outcome)-returning expression and returns
/// early from the enclosing function when it holds an error.
///
/// The inner error is forwarded unchanged (converting into the enclosing
/// function's error type, as the `?` operator would). On success the payload
/// is dropped; callers that need it should extract it with the accessor
/// surface instead. The failure branch is marked cold.
///
/// ```rust
/// use outcome::{Outcome, ensure, unwrap};
///
/// fn reject_odd(i: i32) -> Outcome<(), i32> {
///     ensure!(i % 2 == 0, i);
///     Outcome::default()
/// }
///
/// fn sum_if_even(a: i32, b: i32) -> Outcome<i32, i32> {
///     unwrap!(reject_odd(a));
///     unwrap!(reject_odd(b));
///     Outcome::Value(a + b)
/// }
///
/// assert_eq!(sum_if_even(2, 4), Outcome::Value(6));
/// assert_eq!(sum_if_even(2, 3), Outcome::Error(3));
/// ```
#[macro_export]
macro_rules! unwrap {
    ($outcome:expr) => {
        match $outcome {
            checked if checked.has_error() => {
                $crate::__cold();
                return $crate::Outcome::Error(checked.into_error().into());
            }
            _ => {}
        }
    };
}
