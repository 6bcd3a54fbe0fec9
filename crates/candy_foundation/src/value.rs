//! Core tagged value stored by every Candy container.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::tag::Tag;
use crate::text::Text;
use crate::utils;

/// One generic value of a runtime-selected kind.
///
/// Primitive kinds are stored inline. Strings are reference counted and
/// copy-on-write, so sharing a buffer between two containers is never
/// observable through mutation. Objects are handles to caller-owned data that
/// no container ever duplicates.
#[derive(Clone)]
pub enum Value {
    /// 8-bit byte / character.
    Char(u8),
    /// 16-bit signed integer.
    Short(i16),
    /// 32-bit signed integer.
    Int(i32),
    /// 64-bit signed integer.
    Long(i64),
    /// 128-bit signed integer.
    LongLong(i128),
    /// 32-bit float.
    Float(f32),
    /// 64-bit float.
    Double(f64),
    /// Extended float, held at 64-bit precision.
    LongDouble(f64),
    /// Byte string.
    Str(Arc<Text>),
    /// Caller-owned reference.
    Object(ObjectRef),
}

/// Shared handle to caller-owned data.
///
/// Equality is identity of the referent, never its contents.
#[derive(Clone)]
pub struct ObjectRef(Arc<dyn Any + Send + Sync>);

impl ObjectRef {
    /// Wraps `value` in a new shared handle.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Borrows the referent as `T`, if that is its type.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns true if both handles point at the same referent.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live handles to the referent.
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    fn address(&self) -> *const () {
        Arc::as_ptr(&self.0).cast::<()>()
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<object {:p}>", self.address())
    }
}

impl Value {
    /// Returns the tag of this value.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        match self {
            Self::Char(_) => Tag::Char,
            Self::Short(_) => Tag::Short,
            Self::Int(_) => Tag::Int,
            Self::Long(_) => Tag::Long,
            Self::LongLong(_) => Tag::LongLong,
            Self::Float(_) => Tag::Float,
            Self::Double(_) => Tag::Double,
            Self::LongDouble(_) => Tag::LongDouble,
            Self::Str(_) => Tag::Str,
            Self::Object(_) => Tag::Object,
        }
    }

    /// The zero value of `tag`: `0` for numbers, the empty string for `Str`.
    ///
    /// Objects have no zero value.
    #[must_use]
    pub fn zero(tag: Tag) -> Option<Self> {
        Some(match tag {
            Tag::Char => Self::Char(0),
            Tag::Short => Self::Short(0),
            Tag::Int => Self::Int(0),
            Tag::Long => Self::Long(0),
            Tag::LongLong => Self::LongLong(0),
            Tag::Float => Self::Float(0.0),
            Tag::Double => Self::Double(0.0),
            Tag::LongDouble => Self::LongDouble(0.0),
            Tag::Str => Self::Str(Arc::new(Text::new())),
            Tag::Object => return None,
        })
    }

    /// Creates a `LongDouble` value.
    #[must_use]
    pub const fn long_double(n: f64) -> Self {
        Self::LongDouble(n)
    }

    /// Wraps caller data as an `Object` value.
    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        Self::Object(ObjectRef::new(value))
    }

    /// Clones the value, giving strings a buffer of their own.
    ///
    /// Objects stay shared: the referent belongs to the caller.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        match self {
            Self::Str(s) => Self::Str(Arc::new(Text::clone(s))),
            other => other.clone(),
        }
    }

    /// Returns true if both values are strings sharing one buffer, or objects
    /// sharing one referent.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Str(a), Self::Str(b)) => Arc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Attempts to extract a `Char`.
    #[must_use]
    pub const fn as_char(&self) -> Option<u8> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Attempts to extract a `Short`.
    #[must_use]
    pub const fn as_short(&self) -> Option<i16> {
        match self {
            Self::Short(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract an `Int`.
    #[must_use]
    pub const fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a `Long`.
    #[must_use]
    pub const fn as_long(&self) -> Option<i64> {
        match self {
            Self::Long(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a `LongLong`.
    #[must_use]
    pub const fn as_long_long(&self) -> Option<i128> {
        match self {
            Self::LongLong(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a `Float`.
    #[must_use]
    pub const fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a `Double` or `LongDouble`.
    #[must_use]
    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(n) | Self::LongDouble(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to borrow a string.
    #[must_use]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Str(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Attempts to borrow an object handle.
    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Mutable access to a string value, detaching it from any other holder first.
    pub fn text_mut(&mut self) -> Option<&mut Text> {
        match self {
            Self::Str(s) => Some(Arc::make_mut(s)),
            _ => None,
        }
    }
}

// Equality follows the tag-aware rules in `utils::equals`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        utils::equals(self.tag(), Some(self), Some(other))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{:?}", char::from(*c)),
            Self::Short(n) => write!(f, "{n}s"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Long(n) => write!(f, "{n}l"),
            Self::LongLong(n) => write!(f, "{n}ll"),
            Self::Float(n) => write!(f, "{n}f"),
            Self::Double(n) => write!(f, "{n}"),
            Self::LongDouble(n) => write!(f, "{n}L"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Object(o) => write!(f, "{o:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", char::from(*c)),
            Self::Short(n) => write!(f, "{n}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Long(n) => write!(f, "{n}"),
            Self::LongLong(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Double(n) | Self::LongDouble(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Object(o) => write!(f, "{o:?}"),
        }
    }
}

// Convenience From implementations

impl From<u8> for Value {
    fn from(c: u8) -> Self {
        Self::Char(c)
    }
}

impl From<i16> for Value {
    fn from(n: i16) -> Self {
        Self::Short(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Long(n)
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Self::LongLong(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Float(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(Arc::new(Text::from(s)))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(Arc::new(Text::from(s)))
    }
}

impl From<Text> for Value {
    fn from(s: Text) -> Self {
        Self::Str(Arc::new(s))
    }
}

impl From<Arc<Text>> for Value {
    fn from(s: Arc<Text>) -> Self {
        Self::Str(s)
    }
}

impl From<ObjectRef> for Value {
    fn from(o: ObjectRef) -> Self {
        Self::Object(o)
    }
}
