//! Integration tests for List
//!
//! Tests construction, signed indexing, capacity management, copying,
//! joining, ordering, and extraction.

use candy_collections::{CopyMode, List, ResizePolicy};
use candy_foundation::utils::int_key;
use candy_foundation::{ErrorKind, Tag, Text, Value};
use proptest::prelude::*;

fn ints(list: &List) -> Vec<i32> {
    list.iter().filter_map(Value::as_int).collect()
}

fn strings(values: &[&str]) -> List {
    List::from_values(Tag::Str, values.iter().copied().map(Value::from)).unwrap()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn new_list_reports_capacity() {
    let list = List::new(Tag::Double, 7).unwrap();
    assert_eq!(list.len(), 0);
    assert_eq!(list.capacity(), 7);
    assert_eq!(list.tag(), Tag::Double);
}

#[test]
fn zero_capacity_is_out_of_bounds() {
    let err = List::new(Tag::Int, 0).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::IndexOutOfBounds {
            index: 0,
            length: 0
        }
    );
}

// =============================================================================
// Capacity Management
// =============================================================================

#[test]
fn appending_past_capacity_doubles_it() {
    let mut list = List::new(Tag::Int, 2).unwrap();
    list.append(Value::Int(1)).unwrap();
    list.append(Value::Int(2)).unwrap();
    assert_eq!(list.capacity(), 2);
    list.append(Value::Int(3)).unwrap();
    assert_eq!(list.capacity(), 4);
    assert_eq!(ints(&list), vec![1, 2, 3]);
}

#[test]
fn inserting_into_full_list_grows_it() {
    let mut list = List::from_ints(&[1, 2]).unwrap();
    list.insert(0, Value::Int(0)).unwrap();
    assert_eq!(list.capacity(), 4);
    assert_eq!(ints(&list), vec![0, 1, 2]);
}

#[test]
fn eager_policy_grows_early() {
    let mut list = List::with_policy(Tag::Int, 4, ResizePolicy::eager()).unwrap();
    for n in 0..3 {
        list.append(Value::Int(n)).unwrap();
    }
    assert_eq!(list.capacity(), 4);
    list.append(Value::Int(3)).unwrap();
    assert_eq!(list.capacity(), 8);
}

#[test]
fn compact_policy_shrinks_early() {
    let mut list =
        List::from_values(Tag::Int, (0..4).map(Value::Int)).unwrap();
    let mut compact = List::with_policy(Tag::Int, 4, ResizePolicy::compact()).unwrap();
    for value in list.to_array() {
        compact.append(value).unwrap();
    }

    list.delete(0).unwrap();
    list.delete(0).unwrap();
    compact.delete(0).unwrap();
    compact.delete(0).unwrap();

    assert_eq!(list.capacity(), 4);
    assert_eq!(compact.capacity(), 2);
}

#[test]
fn capacity_never_drops_below_one() {
    let mut list = List::from_ints(&[1]).unwrap();
    list.delete(0).unwrap();
    assert_eq!(list.capacity(), 1);
    assert!(list.is_empty());
}

// =============================================================================
// Signed Indexing
// =============================================================================

#[test]
fn negative_indices_address_from_the_end() {
    let mut list = List::from_ints(&[10, 20, 30]).unwrap();
    assert_eq!(list.get(-1).unwrap(), Value::Int(30));
    assert_eq!(list.get(-3).unwrap(), list.get(0).unwrap());
    assert_eq!(list.delete(-2).unwrap(), Value::Int(20));
    assert_eq!(ints(&list), vec![10, 30]);
}

#[test]
fn out_of_range_indices_are_errors() {
    let mut list = List::from_ints(&[1, 2]).unwrap();
    assert!(list.get(2).unwrap_err().is_out_of_bounds());
    assert!(list.get(-3).unwrap_err().is_out_of_bounds());
    assert!(list.delete(5).unwrap_err().is_out_of_bounds());
    assert!(list.insert(3, Value::Int(0)).unwrap_err().is_out_of_bounds());
    assert!(list.set(-4, Value::Int(0)).unwrap_err().is_out_of_bounds());
    assert_eq!(ints(&list), vec![1, 2]);
}

#[test]
fn set_returns_previous_value() {
    let mut list = strings(&["old"]);
    let previous = list.set(0, Value::from("new")).unwrap();
    assert_eq!(previous, Value::from("old"));
    assert_eq!(list.get(0).unwrap(), Value::from("new"));
}

#[test]
fn get_returns_an_independent_copy() {
    let list = strings(&["abc"]);
    let mut got = list.get(0).unwrap();
    got.text_mut().unwrap().append(&Text::from("def")).unwrap();
    assert_eq!(list.get(0).unwrap(), Value::from("abc"));
}

// =============================================================================
// Type Checking
// =============================================================================

#[test]
fn values_of_other_kinds_are_rejected() {
    let mut list = List::new(Tag::Short, 2).unwrap();
    let err = list.append(Value::Int(1)).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: Tag::Short,
            actual: Tag::Int
        }
    );
    assert!(list.is_empty());
}

#[test]
fn find_uses_tag_aware_equality() {
    let list = strings(&["a", "b", "a"]);
    assert_eq!(list.find(&Value::from("a")), Some(0));
    assert_eq!(list.find(&Value::from("c")), None);
    assert_eq!(list.find(&Value::Char(b'a')), None);
}

#[test]
fn objects_are_found_by_identity() {
    let mine = Value::object(5_u32);
    let list = List::from_values(Tag::Object, [mine.clone(), Value::object(5_u32)]).unwrap();
    assert_eq!(list.find(&mine), Some(0));
    assert!(!list.contains(&Value::object(5_u32)));
}

// =============================================================================
// Copy, Join, Extend
// =============================================================================

#[test]
fn copy_preserves_tag_and_capacity() {
    let mut list = List::new(Tag::Int, 10).unwrap();
    list.append(Value::Int(1)).unwrap();
    for mode in [CopyMode::Shallow, CopyMode::Deep] {
        let copy = list.copy(mode).unwrap();
        assert_eq!(copy.capacity(), 10);
        assert_eq!(copy, list);
    }
}

#[test]
fn join_concatenates_in_order() {
    let a = strings(&["a", "b"]);
    let b = strings(&["c"]);
    let joined = List::join(&a, &b).unwrap();
    assert_eq!(joined, strings(&["a", "b", "c"]));
    assert_eq!(joined.capacity(), 4);
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 1);
}

#[test]
fn join_mismatch_is_type_error() {
    let a = List::from_ints(&[1]).unwrap();
    let b = strings(&["x"]);
    let err = List::join(&a, &b).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn extend_appends_other() {
    let mut a = List::from_ints(&[1, 2]).unwrap();
    let b = List::from_ints(&[3, 4]).unwrap();
    a.extend(&b).unwrap();
    assert_eq!(ints(&a), vec![1, 2, 3, 4]);
    assert_eq!(a.capacity(), 5);
    assert_eq!(ints(&b), vec![3, 4]);
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn reverse_twice_restores_order() {
    let mut list = List::from_ints(&[1, 2, 3, 4]).unwrap();
    list.reverse();
    assert_eq!(ints(&list), vec![4, 3, 2, 1]);
    list.reverse();
    assert_eq!(ints(&list), vec![1, 2, 3, 4]);
}

#[test]
fn reversed_deep_copies_strings() {
    let list = strings(&["x", "y"]);
    let rev = list.reversed().unwrap();
    assert_eq!(rev, strings(&["y", "x"]));
    let original = list.get(0).unwrap();
    let copied = rev.get(1).unwrap();
    assert!(!original.shares_storage_with(&copied));
}

#[test]
fn sorted_leaves_source_untouched() {
    let list = List::from_ints(&[3, 1, 2]).unwrap();
    let ascending = list.sorted(false, int_key).unwrap();
    let descending = list.sorted(true, int_key).unwrap();
    assert_eq!(ints(&ascending), vec![1, 2, 3]);
    assert_eq!(ints(&descending), vec![3, 2, 1]);
    assert_eq!(ints(&list), vec![3, 1, 2]);
}

#[test]
fn sort_with_custom_key() {
    let mut list = List::from_ints(&[-3, 2, -1, 0]).unwrap();
    list.sort(false, |v| v.as_int().map_or(0, |n| i64::from(n.abs())));
    assert_eq!(ints(&list), vec![0, -1, 2, -3]);
}

// =============================================================================
// Extraction
// =============================================================================

#[test]
fn to_array_copies_values() {
    let list = List::from_ints(&[1, 2]).unwrap();
    assert_eq!(list.to_array(), vec![Value::Int(1), Value::Int(2)]);
    assert!(List::new(Tag::Int, 1).unwrap().to_array().is_empty());
}

#[test]
fn sublist_with_negative_bounds() {
    let list = strings(&["a", "b", "c", "d"]);
    let tail = list.get_sublist(-2, 4, CopyMode::Deep).unwrap();
    assert_eq!(tail, strings(&["c", "d"]));
    let head = list.get_sublist(0, -3, CopyMode::Shallow).unwrap();
    assert_eq!(head, strings(&["a"]));
    assert!(head.get(0).unwrap().shares_storage_with(&list.get(0).unwrap()));
}

#[test]
fn sublist_rejects_inverted_range() {
    let list = List::from_ints(&[1, 2, 3]).unwrap();
    assert!(list.get_sublist(2, 1, CopyMode::Shallow).unwrap_err().is_out_of_bounds());
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Debug, Clone)]
enum Op {
    Append(i32),
    Insert(usize, i32),
    Delete(usize),
    Set(usize, i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Append),
        (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        any::<usize>().prop_map(Op::Delete),
        (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
    ]
}

fn signed(n: usize) -> isize {
    isize::try_from(n).unwrap()
}

proptest! {
    #[test]
    fn list_tracks_a_vec_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut list = List::new(Tag::Int, 1).unwrap();
        let mut model: Vec<i32> = Vec::new();
        for op in ops {
            match op {
                Op::Append(v) => {
                    list.append(Value::Int(v)).unwrap();
                    model.push(v);
                }
                Op::Insert(i, v) => {
                    let at = i % (model.len() + 1);
                    list.insert(signed(at), Value::Int(v)).unwrap();
                    model.insert(at, v);
                }
                Op::Delete(_) if model.is_empty() => {
                    prop_assert!(list.delete(0).unwrap_err().is_out_of_bounds());
                }
                Op::Delete(i) => {
                    let at = i % model.len();
                    prop_assert_eq!(list.delete(signed(at)).unwrap(), Value::Int(model.remove(at)));
                }
                Op::Set(_, v) if model.is_empty() => {
                    prop_assert!(list.set(0, Value::Int(v)).unwrap_err().is_out_of_bounds());
                }
                Op::Set(i, v) => {
                    let at = i % model.len();
                    let previous = list.set(signed(at), Value::Int(v)).unwrap();
                    prop_assert_eq!(previous, Value::Int(std::mem::replace(&mut model[at], v)));
                }
            }
            prop_assert!(list.len() <= list.capacity());
            prop_assert_eq!(ints(&list), model.clone());
        }
    }

    #[test]
    fn negative_delete_matches_positive(values in prop::collection::vec(any::<i32>(), 1..32), i in any::<usize>()) {
        let len = values.len();
        let at = i % len;
        let mut forward = List::from_ints(&values).unwrap();
        let mut backward = List::from_ints(&values).unwrap();
        let a = forward.delete(signed(at)).unwrap();
        let b = backward.delete(signed(at) - signed(len)).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(ints(&forward), ints(&backward));
    }

    #[test]
    fn negative_set_matches_positive(values in prop::collection::vec(any::<i32>(), 1..32), i in any::<usize>(), v in any::<i32>()) {
        let len = values.len();
        let at = i % len;
        let mut forward = List::from_ints(&values).unwrap();
        let mut backward = List::from_ints(&values).unwrap();
        let a = forward.set(signed(at), Value::Int(v)).unwrap();
        let b = backward.set(signed(at) - signed(len), Value::Int(v)).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(ints(&forward), ints(&backward));
    }

    #[test]
    fn negative_insert_matches_positive(values in prop::collection::vec(any::<i32>(), 1..32), i in any::<usize>(), v in any::<i32>()) {
        let len = values.len();
        let at = i % len;
        let mut forward = List::from_ints(&values).unwrap();
        let mut backward = List::from_ints(&values).unwrap();
        forward.insert(signed(at), Value::Int(v)).unwrap();
        backward.insert(signed(at) - signed(len), Value::Int(v)).unwrap();
        prop_assert_eq!(ints(&forward), ints(&backward));
        prop_assert_eq!(forward.len(), len + 1);
    }
}
