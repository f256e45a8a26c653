//! A move-only payload must work with `value_ref` and `into_value` even
//! though `value()` is unavailable for it.

use outcome::Outcome;

struct Lease(Box<u32>); // deliberately not Clone

fn acquire() -> Outcome<Lease, i32> {
    Outcome::Value(Lease(Box::new(42)))
}

fn main() {
    let outcome = acquire();
    assert_eq!(*outcome.value_ref().0, 42);

    let lease = outcome.into_value();
    assert_eq!(*lease.0, 42);
}
