//! Tags, tagged values, byte strings and generic utilities for Candy.
//!
//! This crate provides:
//! - [`Tag`] - The runtime kind selector
//! - [`Value`] - One generic value of a runtime-selected kind
//! - [`ObjectRef`] - Shared handle to caller-owned data
//! - [`Text`] / [`TextCursor`] - Owned byte strings and a cursor over them
//! - [`utils`] - Equality, swap and sort shared by every container
//! - [`Error`] - Error kinds with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cursor;
pub mod error;
pub mod tag;
pub mod text;
pub mod utils;
pub mod value;

pub use cursor::TextCursor;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use tag::Tag;
pub use text::Text;
pub use value::{ObjectRef, Value};
