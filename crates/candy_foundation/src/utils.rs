//! Generic primitives shared by every container: index normalization,
//! tag-aware equality, slot swapping and the exchange sort.

use crate::error::{Error, Result};
use crate::tag::Tag;
use crate::value::Value;

/// Converts a length or position into the signed domain used for caller indices.
#[must_use]
pub fn signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

/// Resolves a possibly negative index against `length`.
///
/// A negative index is shifted by `length` exactly once. The result must fall
/// in `[0, length)`, or in `[0, length]` when `inclusive_end` is set (the
/// position one past the last element, used for appends).
///
/// # Errors
///
/// Returns `IndexOutOfBounds` carrying the caller's original index.
pub fn resolve_index(index: isize, length: usize, inclusive_end: bool) -> Result<usize> {
    let normalized = if index < 0 {
        index + signed(length)
    } else {
        index
    };
    let upper = if inclusive_end { length } else { length.wrapping_sub(1) };
    match usize::try_from(normalized) {
        Ok(position) if length > 0 || inclusive_end => {
            if position <= upper {
                Ok(position)
            } else {
                Err(Error::index_out_of_bounds(index, length))
            }
        }
        _ => Err(Error::index_out_of_bounds(index, length)),
    }
}

/// Tag-aware equality of two optional values.
///
/// - both absent: equal
/// - exactly one absent: unequal
/// - either value not of kind `tag`: unequal
/// - `Object`: referent identity
/// - `Str`: byte-for-byte content
/// - everything else: numeric `==` on the native type, so `NaN` never equals
///   itself
#[must_use]
pub fn equals(tag: Tag, a: Option<&Value>, b: Option<&Value>) -> bool {
    let (a, b) = match (a, b) {
        (None, None) => return true,
        (Some(a), Some(b)) => (a, b),
        _ => return false,
    };
    if a.tag() != tag || b.tag() != tag {
        return false;
    }
    match (a, b) {
        (Value::Char(x), Value::Char(y)) => x == y,
        (Value::Short(x), Value::Short(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Long(x), Value::Long(y)) => x == y,
        (Value::LongLong(x), Value::LongLong(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::Double(x), Value::Double(y)) | (Value::LongDouble(x), Value::LongDouble(y)) => {
            x == y
        }
        (Value::Str(x), Value::Str(y)) => x.as_bytes() == y.as_bytes(),
        (Value::Object(x), Value::Object(y)) => x.ptr_eq(y),
        _ => false,
    }
}

/// Exchanges two slots in place.
///
/// # Errors
///
/// Returns `IndexOutOfBounds` if either index is outside the slice.
pub fn swap<T>(slots: &mut [T], i: usize, j: usize) -> Result<()> {
    let length = slots.len();
    for index in [i, j] {
        if index >= length {
            return Err(Error::index_out_of_bounds(signed(index), length));
        }
    }
    slots.swap(i, j);
    Ok(())
}

/// Sorts `items` in place with an exchange sort keyed by `key`.
///
/// Ascending unless `reverse` is set. Only strictly out-of-order neighbours
/// are exchanged, so items with equal keys keep their relative order. A pass
/// without exchanges ends the sort early: O(n) on sorted input, O(n²) worst.
pub fn sort<T, F>(items: &mut [T], reverse: bool, mut key: F)
where
    F: FnMut(&T) -> i64,
{
    let length = items.len();
    for pass in 0..length {
        let mut swapped = false;
        for j in 0..length - pass - 1 {
            let left = key(&items[j]);
            let right = key(&items[j + 1]);
            let out_of_order = if reverse { right > left } else { left > right };
            if out_of_order {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Stock sort key for values.
///
/// Integer kinds map to their value (`LongLong` saturates to the `i64`
/// range), float kinds truncate toward zero, strings map to their length and
/// objects to zero.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn int_key(value: &Value) -> i64 {
    match value {
        Value::Char(c) => i64::from(*c),
        Value::Short(n) => i64::from(*n),
        Value::Int(n) => i64::from(*n),
        Value::Long(n) => *n,
        Value::LongLong(n) => i64::try_from(*n).unwrap_or(if *n < 0 { i64::MIN } else { i64::MAX }),
        Value::Float(n) => *n as i64,
        Value::Double(n) | Value::LongDouble(n) => *n as i64,
        Value::Str(s) => i64::try_from(s.len()).unwrap_or(i64::MAX),
        Value::Object(_) => 0,
    }
}
