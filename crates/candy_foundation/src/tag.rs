//! Runtime type tags for generic values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Runtime discriminator selecting which kind a generic slot holds.
///
/// Lists and stacks carry exactly one tag for their whole lifetime; tuples
/// carry one tag per slot.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tag {
    /// 8-bit byte / character.
    Char,
    /// 16-bit signed integer.
    Short,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// Widest signed integer (128-bit).
    LongLong,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Extended floating point, stored with 64-bit precision.
    LongDouble,
    /// Owned byte string.
    Str,
    /// Opaque reference to caller-owned data.
    Object,
}

impl Tag {
    /// Every tag, in declaration order.
    pub const ALL: [Tag; 10] = [
        Tag::Char,
        Tag::Short,
        Tag::Int,
        Tag::Long,
        Tag::LongLong,
        Tag::Float,
        Tag::Double,
        Tag::LongDouble,
        Tag::Str,
        Tag::Object,
    ];

    /// Returns true if values of this tag are owned by their container.
    ///
    /// Object referents belong to the caller; a container only ever holds a
    /// handle to them.
    #[must_use]
    pub const fn is_owned(self) -> bool {
        !matches!(self, Self::Object)
    }

    /// Lowercase name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::LongLong => "long-long",
            Self::Float => "float",
            Self::Double => "double",
            Self::LongDouble => "long-double",
            Self::Str => "str",
            Self::Object => "object",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
