//! Structured diagnostic payload for outcome errors.
//!
//! [`ErrorReport`] models one taxonomy point: a coded, located, described
//! failure. Every field is fixed at construction; the display-ready
//! `message` is derived from the other four fields and never set directly.

use std::panic::Location;

use thiserror::Error;

/// A coded, located diagnostic suitable as the error slot of an
/// [`Outcome`](crate::Outcome).
///
/// ```rust
/// use outcome::ErrorReport;
///
/// let report = ErrorReport::new(5, "foobar", "/some/file", 42);
/// assert_eq!(report.code, 5);
/// assert!(report.message.contains("Code: 5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "ReportFields")
)]
pub struct ErrorReport {
    /// Integer code identifying the kind of failure.
    pub code: i32,
    /// Human-readable description of what went wrong.
    pub description: String,
    /// Source file where the failure originated.
    pub file: String,
    /// Line in that file where the failure originated.
    pub line: u32,
    /// Preformatted, display-ready message derived from the other fields.
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    pub message: String,
}

impl ErrorReport {
    /// Builds a report and eagerly formats its `message`.
    #[must_use]
    pub fn new(
        code: i32,
        description: impl Into<String>,
        file: impl Into<String>,
        line: u32,
    ) -> Self {
        let description = description.into();
        let file = file.into();
        let message = format!(
            "\n** Error! **\n  Code: {code}\n  File: {file}\n  Line: {line}\n  Description: {description}"
        );
        Self {
            code,
            description,
            file,
            line,
            message,
        }
    }

    /// Builds a report located at the caller's source position.
    ///
    /// Saves threading `file!()`/`line!()` through every call site:
    ///
    /// ```rust
    /// use outcome::ErrorReport;
    ///
    /// let report = ErrorReport::here(101, "lease expired");
    /// assert!(report.file.ends_with(".rs"));
    /// ```
    #[must_use]
    #[track_caller]
    pub fn here(code: i32, description: impl Into<String>) -> Self {
        let location = Location::caller();
        Self::new(code, description, location.file(), location.line())
    }
}

/// Wire shape for deserialization; `message` is recomputed on the way in so
/// the derived-field invariant holds for decoded reports.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ReportFields {
    code: i32,
    description: String,
    file: String,
    line: u32,
}

#[cfg(feature = "serde")]
impl From<ReportFields> for ErrorReport {
    fn from(fields: ReportFields) -> Self {
        Self::new(fields.code, fields.description, fields.file, fields.line)
    }
}
