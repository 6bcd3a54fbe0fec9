//! Candy - Tagged generic values and dynamic containers
//!
//! This crate re-exports all layers of the Candy library for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: candy_collections - List, Stack, Tuple, ResizePolicy
//! Layer 0: candy_foundation  - Core types (Tag, Value, Text, TextCursor, Error)
//! ```

pub use candy_collections as collections;
pub use candy_foundation as foundation;
