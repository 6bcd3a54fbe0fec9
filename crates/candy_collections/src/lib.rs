//! Dynamic containers over Candy values.
//!
//! This crate provides:
//! - [`List`] - Growable array with signed indexing and managed capacity
//! - [`Stack`] - Singly-linked LIFO stack
//! - [`Tuple`] - Fixed-arity heterogeneous tuple
//! - [`ResizePolicy`] - When lists grow and shrink
//!
//! Lists and stacks are homogeneous: every element carries the container's
//! [`Tag`](candy_foundation::Tag), checked on the way in.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod list;
pub mod policy;
pub mod stack;
pub mod tuple;

pub use list::{CopyMode, List};
pub use policy::ResizePolicy;
pub use stack::Stack;
pub use tuple::Tuple;
