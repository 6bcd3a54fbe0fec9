//! Error types for Candy containers and values.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

use crate::tag::Tag;

/// The main error type for Candy operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an absent-object error.
    #[must_use]
    pub fn null_object(what: &'static str) -> Self {
        Self::new(ErrorKind::NullObject(what))
    }

    /// Creates an allocation failure error.
    #[must_use]
    pub fn allocation_failure(requested: usize) -> Self {
        Self::new(ErrorKind::AllocationFailure { requested })
    }

    /// Creates an index out of bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: isize, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Tag, actual: Tag) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Returns true if this is an index out of bounds error.
    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind, ErrorKind::IndexOutOfBounds { .. })
    }

    /// Returns true if this is a type mismatch error.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::TypeMismatch { .. })
    }
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        // The std error does not expose the requested size.
        Self::allocation_failure(0)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Operation invoked on an absent container or value.
    #[error("null object: {0}")]
    NullObject(&'static str),

    /// Storage could not be obtained.
    #[error("allocation failure ({requested} slots requested)")]
    AllocationFailure {
        /// Number of slots the failed allocation asked for (0 if unknown).
        requested: usize,
    },

    /// Normalized index outside the valid range.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index as supplied by the caller.
        index: isize,
        /// The length of the collection at the time of access.
        length: usize,
    },

    /// Operation between values or containers of incompatible tags.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The tag the operation required.
        expected: Tag,
        /// The tag actually supplied.
        actual: Tag,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the failing operation.
    pub operation: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the failing operation.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operation {
            Some(operation) => write!(f, "in {operation}"),
            None => Ok(()),
        }
    }
}

/// Result type for Candy operations.
pub type Result<T> = std::result::Result<T, Error>;
