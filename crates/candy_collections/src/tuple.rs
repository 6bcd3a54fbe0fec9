//! Fixed-arity heterogeneous tuple.

use candy_foundation::utils::resolve_index;
use candy_foundation::{Error, Result, Tag, Value};

/// An immutable sequence of values, each slot with its own tag.
#[derive(Clone, Debug, PartialEq)]
pub struct Tuple {
    slots: Box<[(Tag, Value)]>,
}

impl Tuple {
    /// Builds a tuple, taking each slot's tag from its value.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds { index: 0, length: 0 }` for an empty tuple.
    pub fn new(values: Vec<Value>) -> Result<Self> {
        Self::from_tagged(values.into_iter().map(|v| (v.tag(), v)).collect())
    }

    /// Builds a tuple from declared `(tag, value)` slots.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` for an empty tuple, `TypeMismatch` if a value does
    /// not match its declared tag.
    pub fn from_tagged(slots: Vec<(Tag, Value)>) -> Result<Self> {
        if slots.is_empty() {
            return Err(Error::index_out_of_bounds(0, 0));
        }
        if let Some((tag, value)) = slots.iter().find(|(tag, value)| value.tag() != *tag) {
            return Err(Error::type_mismatch(*tag, value.tag()));
        }
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false: tuples have at least one slot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Copy of the value in slot `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` unless `index` resolves into `[0, len)`.
    pub fn at(&self, index: isize) -> Result<Value> {
        let position = resolve_index(index, self.slots.len(), false)?;
        Ok(self.slots[position].1.clone())
    }

    /// Tag of slot `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` unless `index` resolves into `[0, len)`.
    pub fn type_at(&self, index: isize) -> Result<Tag> {
        let position = resolve_index(index, self.slots.len(), false)?;
        Ok(self.slots[position].0)
    }

    /// Values in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.slots.iter().map(|(_, value)| value)
    }

    /// Tags in slot order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.slots.iter().map(|(tag, _)| *tag)
    }

    /// Checks that `other` has the same arity and slot tags.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` naming the first disagreeing slot. A slot missing from
    /// `other` is reported against the tag it should have had.
    pub fn same_shape(&self, other: &Self) -> Result<()> {
        for position in 0..self.len().max(other.len()) {
            match (self.slots.get(position), other.slots.get(position)) {
                (Some((mine, _)), Some((theirs, _))) if mine == theirs => {}
                (Some((mine, _)), Some((theirs, _))) => {
                    return Err(Error::type_mismatch(*mine, *theirs));
                }
                (Some((mine, _)), None) => return Err(Error::type_mismatch(*mine, *mine)),
                (None, Some((theirs, _))) => return Err(Error::type_mismatch(*theirs, *theirs)),
                (None, None) => {}
            }
        }
        Ok(())
    }
}
