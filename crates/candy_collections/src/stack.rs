//! Singly-linked LIFO stack of values sharing one tag.

use candy_foundation::{Error, ErrorContext, Result, Tag, Value, utils};

struct Node {
    value: Value,
    next: Option<Box<Node>>,
}

/// A LIFO stack whose elements all carry the stack's tag.
///
/// Each node owns its value and the node below it. Dropping the stack
/// releases nodes one at a time, so very deep stacks do not exhaust the call
/// stack.
pub struct Stack {
    tag: Tag,
    top: Option<Box<Node>>,
    len: usize,
}

impl Stack {
    /// Creates an empty stack of `tag`.
    #[must_use]
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            top: None,
            len: 0,
        }
    }

    /// The tag every element carries.
    #[must_use]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the stack holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Pushes `value` on top.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` if `value` is not of the stack's kind.
    pub fn push(&mut self, value: Value) -> Result<()> {
        if value.tag() != self.tag {
            return Err(Error::type_mismatch(self.tag, value.tag()));
        }
        let next = self.top.take();
        self.top = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Pushes values in order, stopping at the first one that is rejected.
    ///
    /// Returns how many were pushed.
    pub fn push_multi(&mut self, values: impl IntoIterator<Item = Value>) -> usize {
        let mut pushed = 0;
        for value in values {
            if self.push(value).is_err() {
                break;
            }
            pushed += 1;
        }
        pushed
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    ///
    /// `NullObject` on an empty stack.
    pub fn pop(&mut self) -> Result<Value> {
        let node = self.top.take().ok_or_else(|| empty("Stack::pop"))?;
        let Node { value, next } = *node;
        self.top = next;
        self.len -= 1;
        Ok(value)
    }

    /// Copy of the top value; the stack is unchanged.
    ///
    /// # Errors
    ///
    /// `NullObject` on an empty stack.
    pub fn peek(&self) -> Result<Value> {
        self.top
            .as_ref()
            .map(|node| node.value.clone())
            .ok_or_else(|| empty("Stack::peek"))
    }

    /// Distance from the top of the first value equal to `value`.
    #[must_use]
    pub fn find(&self, value: &Value) -> Option<usize> {
        self.iter()
            .position(|item| utils::equals(self.tag, Some(item), Some(value)))
    }

    /// The values from bottom to top.
    #[must_use]
    pub fn to_array(&self) -> Vec<Value> {
        let mut values: Vec<Value> = self.iter().cloned().collect();
        values.reverse();
        values
    }

    /// Borrowing iterator from top to bottom.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.top.as_deref(),
        }
    }
}

fn empty(operation: &str) -> Error {
    Error::null_object("stack is empty").with_context(ErrorContext::new().with_operation(operation))
}

impl Drop for Stack {
    fn drop(&mut self) {
        let mut cursor = self.top.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stack")
            .field("tag", &self.tag)
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Top-to-bottom iterator over a [`Stack`].
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
