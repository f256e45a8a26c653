//! The unit form needs no placeholder payload type at call sites.

use outcome::Outcome;

fn succeed() -> Outcome<(), i32> {
    Outcome::default()
}

fn fail() -> Outcome<(), i32> {
    Outcome::Error(2)
}

fn main() {
    assert!(succeed().has_value());
    assert!(fail().has_error());
    assert_eq!(fail().error(), 2);
}
