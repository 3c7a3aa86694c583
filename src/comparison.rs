use super::{Kind, Mismatch};
use serde_json::{Number, Value};

/// Values a `Matcher` knows how to compare.
///
/// `mismatch` returns `None` when the two values are equal and otherwise the
/// single most specific cause, treating `expected` as the reference value.
pub trait Comparable {
    /// Compares two values, assuming `expected` is of a supported kind.
    fn difference<'a>(expected: &'a Self, actual: &'a Self) -> Option<Mismatch<'a>>;

    /// Failure to report when this value cannot be the reference of a comparison.
    fn unsupported(&self) -> Option<Mismatch<'_>> {
        None
    }

    fn mismatch<'a>(expected: &'a Self, actual: &'a Self) -> Option<Mismatch<'a>> {
        expected
            .unsupported()
            .or_else(|| Self::difference(expected, actual))
    }
}

macro_rules! comparable_integer {
    ($($t:ty),*) => {
        $(
            impl Comparable for $t {
                fn difference<'a>(expected: &'a Self, actual: &'a Self) -> Option<Mismatch<'a>> {
                    compare_integers(i128::from(*expected), i128::from(*actual))
                }
            }
        )*
    };
}

comparable_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

// i128/From is not implemented for the pointer-sized integers
impl Comparable for isize {
    fn difference<'a>(expected: &'a Self, actual: &'a Self) -> Option<Mismatch<'a>> {
        compare_integers(*expected as i128, *actual as i128)
    }
}

impl Comparable for usize {
    fn difference<'a>(expected: &'a Self, actual: &'a Self) -> Option<Mismatch<'a>> {
        compare_integers(*expected as i128, *actual as i128)
    }
}

impl Comparable for str {
    fn difference<'a>(expected: &'a Self, actual: &'a Self) -> Option<Mismatch<'a>> {
        if expected == actual {
            None
        } else {
            Some(Mismatch::MismatchedString(expected, actual))
        }
    }
}

impl Comparable for String {
    fn difference<'a>(expected: &'a Self, actual: &'a Self) -> Option<Mismatch<'a>> {
        <str>::difference(expected, actual)
    }
}

impl Comparable for bool {
    fn difference<'a>(expected: &'a Self, actual: &'a Self) -> Option<Mismatch<'a>> {
        if expected == actual {
            None
        } else {
            Some(Mismatch::MismatchedBool(*expected, *actual))
        }
    }
}

impl<S: AsRef<str>> Comparable for [S] {
    fn difference<'a>(expected: &'a Self, actual: &'a Self) -> Option<Mismatch<'a>> {
        let expected: Vec<&'a str> = expected.iter().map(|item| item.as_ref()).collect();
        let actual: Vec<&'a str> = actual.iter().map(|item| item.as_ref()).collect();

        compare_sequences(&expected, &actual)
    }
}

impl<S: AsRef<str>> Comparable for Vec<S> {
    fn difference<'a>(expected: &'a Self, actual: &'a Self) -> Option<Mismatch<'a>> {
        <[S]>::difference(expected, actual)
    }
}

impl<S: AsRef<str>, const N: usize> Comparable for [S; N] {
    fn difference<'a>(expected: &'a Self, actual: &'a Self) -> Option<Mismatch<'a>> {
        <[S]>::difference(expected, actual)
    }
}

impl<T: Comparable + ?Sized> Comparable for &T {
    fn difference<'a>(expected: &'a Self, actual: &'a Self) -> Option<Mismatch<'a>> {
        T::difference(*expected, *actual)
    }

    fn unsupported(&self) -> Option<Mismatch<'_>> {
        T::unsupported(*self)
    }
}

/// Dynamic comparison, dispatched on the runtime kind of the reference value.
impl Comparable for Value {
    fn unsupported(&self) -> Option<Mismatch<'_>> {
        match Kind::of(self) {
            Kind::Unsupported => Some(Mismatch::NotImplemented(self)),
            _ => None,
        }
    }

    fn difference<'a>(expected: &'a Self, actual: &'a Self) -> Option<Mismatch<'a>> {
        match (expected, actual) {
            (Value::Number(v1), Value::Number(v2)) => match (integer(v1), integer(v2)) {
                (Some(v1), Some(v2)) => compare_integers(v1, v2),
                _ => compare_different_kinds(expected, actual),
            },
            (Value::String(v1), Value::String(v2)) => <str>::difference(v1, v2),
            (Value::Bool(v1), Value::Bool(v2)) => bool::difference(v1, v2),
            (Value::Array(v1), Value::Array(v2)) => match (strings(v1), strings(v2)) {
                (Some(v1), Some(v2)) => compare_sequences(&v1, &v2),
                _ => compare_different_kinds(expected, actual),
            },
            (_, _) => compare_different_kinds(expected, actual),
        }
    }
}

fn compare_different_kinds<'a>(expected: &'a Value, actual: &'a Value) -> Option<Mismatch<'a>> {
    Some(Mismatch::MismatchedTypes(Kind::of(expected), Kind::of(actual)))
}

fn compare_integers<'a>(expected: i128, actual: i128) -> Option<Mismatch<'a>> {
    if expected == actual {
        None
    } else {
        Some(Mismatch::MismatchedInteger(expected, actual))
    }
}

fn compare_sequences<'a>(expected: &[&'a str], actual: &[&'a str]) -> Option<Mismatch<'a>> {
    if expected.len() != actual.len() {
        return Some(Mismatch::DifferentLength(expected.len(), actual.len()));
    }

    expected
        .iter()
        .zip(actual)
        .enumerate()
        .find(|(_, (left, right))| left != right)
        .map(|(index, (left, right))| Mismatch::DifferentItem(index, *left, *right))
}

fn integer(number: &Number) -> Option<i128> {
    number
        .as_i64()
        .map(i128::from)
        .or_else(|| number.as_u64().map(i128::from))
}

fn strings(values: &[Value]) -> Option<Vec<&str>> {
    values.iter().map(Value::as_str).collect()
}
