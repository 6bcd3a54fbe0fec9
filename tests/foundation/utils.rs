//! Integration tests for the shared utilities
//!
//! Tests index resolution, tag-aware equality, swapping, and sorting.

use candy_foundation::utils::{equals, int_key, resolve_index, sort, swap};
use candy_foundation::{ErrorKind, Tag, Value};

// =============================================================================
// Index Resolution
// =============================================================================

#[test]
fn negative_index_shifts_once() {
    assert_eq!(resolve_index(-1, 5, false).unwrap(), 4);
    let err = resolve_index(-6, 5, false).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::IndexOutOfBounds {
            index: -6,
            length: 5
        }
    );
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn equals_is_reflexive_for_zero_values() {
    for tag in Tag::ALL {
        if let Some(zero) = Value::zero(tag) {
            assert!(equals(tag, Some(&zero), Some(&zero)), "{tag}");
        }
    }
}

#[test]
fn equals_rejects_values_of_other_kind() {
    let a = Value::from("a");
    assert!(!equals(Tag::Int, Some(&a), Some(&a)));
}

// =============================================================================
// Swap & Sort
// =============================================================================

#[test]
fn swap_values() {
    let mut values = vec![Value::Int(1), Value::from("two")];
    swap(&mut values, 0, 1).unwrap();
    assert_eq!(values[0], Value::from("two"));
    assert!(swap(&mut values, 2, 0).unwrap_err().is_out_of_bounds());
}

#[test]
fn sort_values_by_stock_key() {
    let mut values: Vec<Value> = [5, -2, 9, 0].into_iter().map(Value::Int).collect();
    sort(&mut values, false, int_key);
    assert_eq!(
        values,
        [-2, 0, 5, 9].into_iter().map(Value::Int).collect::<Vec<_>>()
    );
}

#[test]
fn sort_keeps_equal_keys_in_order() {
    let mut words: Vec<Value> = ["ccc", "a", "bb", "b", "aa"]
        .into_iter()
        .map(Value::from)
        .collect();
    sort(&mut words, true, int_key);
    let rendered: Vec<String> = words.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["ccc", "bb", "aa", "a", "b"]);
}
