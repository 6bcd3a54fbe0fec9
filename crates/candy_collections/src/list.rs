//! Growable array of values sharing one tag.

use std::mem;
use std::slice;

use candy_foundation::utils::{self, resolve_index};
use candy_foundation::{Error, ErrorContext, Result, Tag, Value};
use tracing::{debug, trace, warn};

use crate::policy::ResizePolicy;

/// How values are duplicated when a list is copied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CopyMode {
    /// Strings share their buffer (copy-on-write), objects share their referent.
    #[default]
    Shallow,
    /// Strings get a buffer of their own. Objects are still shared.
    Deep,
}

impl CopyMode {
    fn apply(self, value: &Value) -> Value {
        match self {
            Self::Deep if value.tag().is_owned() => value.deep_clone(),
            _ => value.clone(),
        }
    }
}

/// A dynamic array whose elements all carry the list's tag.
///
/// Capacity is tracked explicitly and managed by a [`ResizePolicy`]: it grows
/// before an insert into a full list and shrinks after deletes leave it mostly
/// empty. `1 <= capacity` and `len <= capacity` hold after every operation.
///
/// Indices are signed. A negative index is shifted by `len` once, so `-1`
/// addresses the last element.
#[derive(Clone, Debug)]
pub struct List {
    tag: Tag,
    items: Vec<Value>,
    capacity: usize,
    policy: ResizePolicy,
}

impl List {
    /// Creates an empty list of `tag` with room for `initial_capacity` values.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds { index: 0, length: 0 }` for a zero capacity, or
    /// `AllocationFailure` if the storage cannot be reserved.
    pub fn new(tag: Tag, initial_capacity: usize) -> Result<Self> {
        Self::with_policy(tag, initial_capacity, ResizePolicy::default())
    }

    /// Creates an empty list with a custom resize policy.
    ///
    /// # Errors
    ///
    /// Same as [`List::new`].
    pub fn with_policy(tag: Tag, initial_capacity: usize, policy: ResizePolicy) -> Result<Self> {
        if initial_capacity == 0 {
            return Err(Error::index_out_of_bounds(0, 0)
                .with_context(ErrorContext::new().with_operation("List::new")));
        }
        let mut items = Vec::new();
        reserve(&mut items, initial_capacity)?;
        Ok(Self {
            tag,
            items,
            capacity: initial_capacity,
            policy,
        })
    }

    /// Builds an `Int` list from a slice.
    ///
    /// # Errors
    ///
    /// `AllocationFailure` if the storage cannot be reserved.
    pub fn from_ints(ints: &[i32]) -> Result<Self> {
        Self::from_values(Tag::Int, ints.iter().copied().map(Value::Int))
    }

    /// Builds a list of `tag` from values, capacity fitted to their count.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` if any value is not of kind `tag`.
    pub fn from_values(tag: Tag, values: impl IntoIterator<Item = Value>) -> Result<Self> {
        let values: Vec<Value> = values.into_iter().collect();
        if let Some(stray) = values.iter().find(|v| v.tag() != tag) {
            return Err(Error::type_mismatch(tag, stray.tag()));
        }
        let mut list = Self::new(tag, values.len().max(1))?;
        list.items.extend(values);
        Ok(list)
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Logical capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The tag every element carries.
    #[must_use]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Returns true if the list holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The resize policy in effect.
    #[must_use]
    pub fn policy(&self) -> &ResizePolicy {
        &self.policy
    }

    /// Borrowing iterator in index order.
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.items.iter()
    }

    fn check_tag(&self, value: &Value) -> Result<()> {
        if value.tag() == self.tag {
            Ok(())
        } else {
            Err(Error::type_mismatch(self.tag, value.tag()))
        }
    }

    fn grow(&mut self) -> Result<()> {
        let target = self.policy.grown(self.capacity);
        if let Err(err) = reserve(&mut self.items, target) {
            warn!(capacity = self.capacity, target, "list growth aborted");
            return Err(err);
        }
        debug!(
            from = self.capacity,
            to = target,
            len = self.items.len(),
            "list grew"
        );
        self.capacity = target;
        Ok(())
    }

    fn shrink(&mut self) {
        let target = ResizePolicy::shrunk(self.capacity).max(self.items.len());
        if target == self.capacity {
            return;
        }
        self.items.shrink_to(target);
        debug!(
            from = self.capacity,
            to = target,
            len = self.items.len(),
            "list shrank"
        );
        self.capacity = target;
    }

    /// Inserts `value` before position `index`, shifting later values right.
    ///
    /// Valid positions are `[0, len]`; `len` appends.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` for a value of another kind, `IndexOutOfBounds` for a bad
    /// position, `AllocationFailure` if a required growth fails. The list is
    /// unchanged on error.
    pub fn insert(&mut self, index: isize, value: Value) -> Result<()> {
        self.check_tag(&value)?;
        let position = resolve_index(index, self.items.len(), true)?;
        if self.policy.should_grow(self.items.len(), self.capacity) {
            self.grow()?;
        }
        self.items.insert(position, value);
        Ok(())
    }

    /// Appends `value` at the end.
    ///
    /// # Errors
    ///
    /// Same as [`List::insert`].
    pub fn append(&mut self, value: Value) -> Result<()> {
        self.insert(utils::signed(self.items.len()), value)
    }

    /// Removes and returns the value at `index`, shifting later values left.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` unless `index` resolves into `[0, len)`.
    pub fn delete(&mut self, index: isize) -> Result<Value> {
        let position = resolve_index(index, self.items.len(), false)?;
        let removed = self.items.remove(position);
        if self.policy.should_shrink(self.items.len(), self.capacity) {
            self.shrink();
        }
        Ok(removed)
    }

    /// Position of the first value equal to `value`.
    #[must_use]
    pub fn find(&self, value: &Value) -> Option<usize> {
        self.items
            .iter()
            .position(|item| utils::equals(self.tag, Some(item), Some(value)))
    }

    /// Returns true if some element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.find(value).is_some()
    }

    /// Copy of the value at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` unless `index` resolves into `[0, len)`.
    pub fn get(&self, index: isize) -> Result<Value> {
        let position = resolve_index(index, self.items.len(), false)?;
        Ok(self.items[position].clone())
    }

    /// Replaces the value at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` or `IndexOutOfBounds`; the list is unchanged on error.
    pub fn set(&mut self, index: isize, value: Value) -> Result<Value> {
        self.check_tag(&value)?;
        let position = resolve_index(index, self.items.len(), false)?;
        Ok(mem::replace(&mut self.items[position], value))
    }

    /// New list with the same tag, capacity and policy.
    ///
    /// # Errors
    ///
    /// `AllocationFailure` if the storage cannot be reserved.
    pub fn copy(&self, mode: CopyMode) -> Result<Self> {
        let mut copy = Self::with_policy(self.tag, self.capacity, self.policy)?;
        copy.items
            .extend(self.items.iter().map(|value| mode.apply(value)));
        Ok(copy)
    }

    /// Concatenates deep copies of `a` then `b` into a new list.
    ///
    /// The result has capacity `a.len() + b.len() + 1` and `a`'s policy.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` if the tags differ.
    pub fn join(a: &Self, b: &Self) -> Result<Self> {
        if a.tag != b.tag {
            return Err(Error::type_mismatch(a.tag, b.tag)
                .with_context(ErrorContext::new().with_operation("List::join")));
        }
        let mut joined = Self::with_policy(a.tag, a.len() + b.len() + 1, a.policy)?;
        joined.items.extend(
            a.items
                .iter()
                .chain(b.items.iter())
                .map(Value::deep_clone),
        );
        trace!(left = a.len(), right = b.len(), "joined lists");
        Ok(joined)
    }

    /// Appends deep copies of `other`'s values, keeping this list's own values.
    ///
    /// Capacity becomes `len + other.len() + 1`, as with [`List::join`].
    ///
    /// # Errors
    ///
    /// `TypeMismatch` if the tags differ, `AllocationFailure` if the storage
    /// cannot be reserved. The list is unchanged on error.
    pub fn extend(&mut self, other: &Self) -> Result<()> {
        if self.tag != other.tag {
            return Err(Error::type_mismatch(self.tag, other.tag)
                .with_context(ErrorContext::new().with_operation("List::extend")));
        }
        let target = self.items.len() + other.len() + 1;
        reserve(&mut self.items, target)?;
        self.items
            .extend(other.items.iter().map(Value::deep_clone));
        trace!(added = other.len(), len = self.items.len(), "extended list");
        self.capacity = target;
        Ok(())
    }

    /// Reverses the list in place.
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Deep copy in reverse order.
    ///
    /// # Errors
    ///
    /// `AllocationFailure` if the storage cannot be reserved.
    pub fn reversed(&self) -> Result<Self> {
        let mut copy = self.copy(CopyMode::Deep)?;
        copy.reverse();
        Ok(copy)
    }

    /// Sorts in place by `key`, ascending unless `reverse`.
    ///
    /// The sort is stable. [`utils::int_key`] is the stock key.
    pub fn sort<F>(&mut self, reverse: bool, key: F)
    where
        F: FnMut(&Value) -> i64,
    {
        trace!(len = self.items.len(), reverse, "sorting list");
        utils::sort(&mut self.items, reverse, key);
    }

    /// Shallow copy, sorted.
    ///
    /// # Errors
    ///
    /// `AllocationFailure` if the storage cannot be reserved.
    pub fn sorted<F>(&self, reverse: bool, key: F) -> Result<Self>
    where
        F: FnMut(&Value) -> i64,
    {
        let mut copy = self.copy(CopyMode::Shallow)?;
        copy.sort(reverse, key);
        Ok(copy)
    }

    /// The values as a plain vector. Empty for an empty list.
    #[must_use]
    pub fn to_array(&self) -> Vec<Value> {
        self.items.clone()
    }

    /// Copies `[start, end)` into a new list of the same tag and policy.
    ///
    /// Both bounds accept negative indices. The result's capacity is the
    /// number of values copied, or 1 for an empty range.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` unless `0 <= start <= end <= len` after resolution.
    pub fn get_sublist(&self, start: isize, end: isize, mode: CopyMode) -> Result<Self> {
        let length = self.items.len();
        let from = resolve_index(start, length, true)?;
        let to = resolve_index(end, length, true)?;
        if from > to {
            return Err(Error::index_out_of_bounds(start, length)
                .with_context(ErrorContext::new().with_operation("List::get_sublist")));
        }
        let mut sub = Self::with_policy(self.tag, (to - from).max(1), self.policy)?;
        sub.items
            .extend(self.items[from..to].iter().map(|value| mode.apply(value)));
        Ok(sub)
    }
}

/// Ensures `items` can hold `capacity` values without reallocating.
fn reserve(items: &mut Vec<Value>, capacity: usize) -> Result<()> {
    let additional = capacity.saturating_sub(items.len());
    items
        .try_reserve_exact(additional)
        .map_err(|_| Error::allocation_failure(capacity))
}

impl PartialEq for List {
    /// Lists are equal when their tags and values match; capacity is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.items == other.items
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
