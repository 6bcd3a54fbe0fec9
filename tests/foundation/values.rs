//! Integration tests for Value types
//!
//! Tests Value variants, tag-aware equality, copy semantics, display, and
//! typed construction.

use std::sync::Arc;

use candy_foundation::{ObjectRef, Tag, Text, Value};

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_char() {
    let v = Value::from(b'q');
    assert_eq!(v.tag(), Tag::Char);
    assert_eq!(v.as_char(), Some(b'q'));
    assert_eq!(v.as_int(), None);
}

#[test]
fn value_short() {
    let v = Value::from(-300_i16);
    assert_eq!(v.tag(), Tag::Short);
    assert_eq!(v.as_short(), Some(-300));
}

#[test]
fn value_int() {
    let v = Value::Int(42);
    assert_eq!(v.tag(), Tag::Int);
    assert_eq!(v.as_int(), Some(42));
    assert_eq!(v.as_float(), None);
}

#[test]
fn value_long_and_long_long() {
    assert_eq!(Value::from(1_i64 << 40).as_long(), Some(1 << 40));
    assert_eq!(Value::from(i128::MIN).as_long_long(), Some(i128::MIN));
}

#[test]
fn value_floats() {
    assert_eq!(Value::from(1.5_f32).as_float(), Some(1.5));
    assert_eq!(Value::from(2.5_f64).as_double(), Some(2.5));
    let wide = Value::long_double(3.5);
    assert_eq!(wide.tag(), Tag::LongDouble);
    assert_eq!(wide.as_double(), Some(3.5));
}

#[test]
fn value_string() {
    let v = Value::from("hello");
    assert_eq!(v.tag(), Tag::Str);
    assert_eq!(v.as_text(), Some(&Text::from("hello")));

    let owned = Value::from(String::from("hello"));
    assert_eq!(v, owned);
}

#[test]
fn value_object() {
    let v = Value::object(vec![1_u8, 2, 3]);
    assert_eq!(v.tag(), Tag::Object);
    let handle = v.as_object().unwrap();
    assert_eq!(handle.downcast_ref::<Vec<u8>>(), Some(&vec![1, 2, 3]));
}

#[test]
fn zero_values() {
    assert_eq!(Value::zero(Tag::Int), Some(Value::Int(0)));
    assert_eq!(Value::zero(Tag::Str), Some(Value::from("")));
    assert!(Value::zero(Tag::Object).is_none());
}

// =============================================================================
// Value Equality
// =============================================================================

#[test]
fn value_equality_same_kind() {
    assert_eq!(Value::Int(42), Value::Int(42));
    assert_ne!(Value::Int(42), Value::Int(43));
    assert_eq!(Value::from("a"), Value::from("a"));
    assert_ne!(Value::from("a"), Value::from("b"));
}

#[test]
fn value_equality_across_kinds() {
    assert_ne!(Value::Short(1), Value::Int(1));
    assert_ne!(Value::Float(1.0), Value::Double(1.0));
}

#[test]
fn value_equality_objects_by_identity() {
    let shared = ObjectRef::new(String::from("same"));
    let a = Value::from(shared.clone());
    let b = Value::from(shared);
    let c = Value::object(String::from("same"));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn value_equality_nan() {
    let nan = Value::Float(f32::NAN);
    assert_ne!(nan, nan.clone());
}

// =============================================================================
// Copy Semantics
// =============================================================================

#[test]
fn string_clone_shares_buffer_until_written() {
    let mut a = Value::from("abc");
    let b = a.clone();
    assert!(a.shares_storage_with(&b));

    a.text_mut().unwrap().append(&Text::from("!")).unwrap();
    assert!(!a.shares_storage_with(&b));
    assert_eq!(b, Value::from("abc"));
    assert_eq!(a, Value::from("abc!"));
}

#[test]
fn deep_clone_gets_own_buffer() {
    let text = Arc::new(Text::from("xyz"));
    let v = Value::from(Arc::clone(&text));
    let deep = v.deep_clone();
    assert!(!deep.shares_storage_with(&v));
    assert_eq!(deep, v);
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn value_display() {
    assert_eq!(format!("{}", Value::Int(-7)), "-7");
    assert_eq!(format!("{}", Value::Char(b'A')), "A");
    assert_eq!(format!("{}", Value::from("text")), "text");
}

#[test]
fn tag_display() {
    assert_eq!(format!("{}", Tag::LongLong), "long-long");
    assert_eq!(format!("{}", Tag::Str), "str");
    assert_eq!(Tag::ALL.len(), 10);
}
