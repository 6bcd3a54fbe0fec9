//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Tag, Value, ObjectRef, Error, and shared utilities.

mod utils;
mod values;
