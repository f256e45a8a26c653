//! Round-trip coverage for the optional serde facet.
#![cfg(feature = "serde")]

use outcome::Outcome;

#[test]
fn value_outcomes_round_trip() -> Result<(), serde_json::Error> {
    let outcome: Outcome<String, i32> = Outcome::Value("foo".to_owned());
    let json = serde_json::to_string(&outcome)?;
    let decoded: Outcome<String, i32> = serde_json::from_str(&json)?;
    assert_eq!(decoded, outcome);
    Ok(())
}

#[test]
fn error_outcomes_round_trip() -> Result<(), serde_json::Error> {
    let outcome: Outcome<String, i32> = Outcome::Error(1);
    let decoded: Outcome<String, i32> = serde_json::from_str(&serde_json::to_string(&outcome)?)?;
    assert_eq!(decoded, outcome);
    Ok(())
}

#[cfg(feature = "report")]
mod report {
    use outcome::ErrorReport;

    #[test]
    fn message_is_not_serialized_and_is_rebuilt_on_decode() -> Result<(), serde_json::Error> {
        let report = ErrorReport::new(5, "foobar", "/some/file", 42);
        let json = serde_json::to_string(&report)?;
        assert!(!json.contains("message"));

        let decoded: ErrorReport = serde_json::from_str(&json)?;
        assert_eq!(decoded, report);
        assert_eq!(decoded.message, report.message);
        Ok(())
    }
}
