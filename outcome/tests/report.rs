//! Tests for `ErrorReport` used as the error slot of an `Outcome`.
#![cfg(feature = "report")]

use outcome::{ErrorReport, Outcome};

fn locate(succeed: bool) -> Outcome<String, ErrorReport> {
    if succeed {
        Outcome::Value("foo".to_owned())
    } else {
        Outcome::Error(ErrorReport::new(5, "foobar", "/some/file", 42))
    }
}

#[test]
fn succeeding_functions_still_return_their_payload() {
    let outcome = locate(true);
    assert!(outcome.has_value());
    assert!(!outcome.has_error());
    assert_eq!(outcome.value(), "foo");
}

#[test]
fn failing_functions_surface_the_full_report() {
    let outcome = locate(false);
    assert!(outcome.has_error());
    assert!(!outcome.has_value());

    let report = outcome.into_error();
    assert_eq!(report.code, 5);
    assert_eq!(report.description, "foobar");
    assert_eq!(report.file, "/some/file");
    assert_eq!(report.line, 42);
    assert_eq!(
        report.message,
        "\n** Error! **\n  Code: 5\n  File: /some/file\n  Line: 42\n  Description: foobar"
    );
}

#[test]
fn reports_are_std_errors() {
    let report = ErrorReport::new(9, "io stalled", "net.rs", 17);
    let boxed: Box<dyn std::error::Error> = Box::new(report.clone());
    assert_eq!(boxed.to_string(), report.message);
}
