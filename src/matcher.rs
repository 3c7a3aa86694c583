use super::{Comparable, Mismatch, Reporter};
use serde_json::Value;
use tracing::debug;

/// Which side of a comparison the wrapped value stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Expected,
    Actual,
}

/// Wraps one value and checks other values against it, sending any failure
/// to the reporter it was built with.
///
/// ```
/// use assert_matcher::{Matcher, Panic};
///
/// Matcher::wrap("foo", &Panic).compare_to("foo").require_not_absent();
/// Matcher::actual(vec!["a", "b"], &Panic).is(vec!["a", "b"]);
/// ```
pub struct Matcher<'r, T, R: ?Sized> {
    value: T,
    side: Side,
    reporter: &'r R,
}

impl<'r, T, R: Reporter + ?Sized> Matcher<'r, T, R> {
    /// Wraps the expected value; alias of [`Matcher::expecting`].
    pub fn wrap(expected: T, reporter: &'r R) -> Self {
        Self::expecting(expected, reporter)
    }

    /// Wraps the expected value, so the argument of [`Matcher::compare_to`] is the actual one.
    pub fn expecting(expected: T, reporter: &'r R) -> Self {
        Matcher {
            value: expected,
            side: Side::Expected,
            reporter,
        }
    }

    /// Wraps the actual value, so the argument of [`Matcher::is`] is the expectation.
    pub fn actual(actual: T, reporter: &'r R) -> Self {
        Matcher {
            value: actual,
            side: Side::Actual,
            reporter,
        }
    }

    #[track_caller]
    fn report(&self, mismatch: Mismatch<'_>) {
        let message = mismatch.to_string();
        debug!(target: "assert_matcher", %message, "assertion failed");
        self.reporter.fail(message);
    }
}

impl<'r, T: Comparable, R: Reporter + ?Sized> Matcher<'r, T, R> {
    /// Checks `other` against the wrapped value. The wrapped value picks the
    /// comparison, whichever side it stands for.
    #[track_caller]
    pub fn compare_to(&self, other: T) -> &Self {
        let (expected, actual) = match self.side {
            Side::Expected => (&self.value, &other),
            Side::Actual => (&other, &self.value),
        };

        let mismatch = self
            .value
            .unsupported()
            .or_else(|| T::difference(expected, actual));
        if let Some(mismatch) = mismatch {
            self.report(mismatch);
        }
        self
    }

    #[track_caller]
    pub fn is(&self, other: T) -> &Self {
        self.compare_to(other)
    }
}

impl<'r, T: MaybeAbsent, R: Reporter + ?Sized> Matcher<'r, T, R> {
    #[track_caller]
    pub fn require_not_absent(&self) -> &Self {
        if self.value.is_absent() {
            self.report(Mismatch::UnexpectedNil);
        }
        self
    }
}

/// Values that may stand for "nothing".
pub trait MaybeAbsent {
    fn is_absent(&self) -> bool;
}

impl<T> MaybeAbsent for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl MaybeAbsent for Value {
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: MaybeAbsent + ?Sized> MaybeAbsent for &T {
    fn is_absent(&self) -> bool {
        T::is_absent(*self)
    }
}

macro_rules! never_absent {
    ($($t:ty),*) => {
        $(
            impl MaybeAbsent for $t {
                fn is_absent(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_absent!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool, str, String);

impl<S> MaybeAbsent for [S] {
    fn is_absent(&self) -> bool {
        false
    }
}

impl<S> MaybeAbsent for Vec<S> {
    fn is_absent(&self) -> bool {
        false
    }
}

impl<S, const N: usize> MaybeAbsent for [S; N] {
    fn is_absent(&self) -> bool {
        false
    }
}

/// Builds matchers that all share one reporter.
///
/// ```
/// use assert_matcher::{Asserter, Panic};
///
/// let assert = Asserter::new(&Panic);
/// assert.that(1 + 1).is(2);
/// assert.expect("two").compare_to("two");
/// ```
pub struct Asserter<'r, R: ?Sized> {
    reporter: &'r R,
}

impl<'r, R: Reporter + ?Sized> Asserter<'r, R> {
    pub fn new(reporter: &'r R) -> Self {
        Asserter { reporter }
    }

    pub fn that<T>(&self, actual: T) -> Matcher<'r, T, R> {
        Matcher::actual(actual, self.reporter)
    }

    pub fn expect<T>(&self, expected: T) -> Matcher<'r, T, R> {
        Matcher::expecting(expected, self.reporter)
    }
}
