//! Position cursor over a [`Text`].

use crate::error::{Error, Result};
use crate::text::Text;
use crate::utils::signed;

/// A marker moving over its own copy of a string.
///
/// The marker ranges over `0..=len`; `len` is end-of-sequence. Reads
/// (`this`, `peek_next`, `peek_prev`) never move it, and every move is clamped into
/// range.
#[derive(Clone, Debug)]
pub struct TextCursor {
    text: Text,
    marker: usize,
}

impl TextCursor {
    /// Creates a cursor at the start of a copy of `text`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` for an empty string: there is nothing to
    /// traverse.
    pub fn new(text: &Text) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::index_out_of_bounds(0, 0));
        }
        Ok(Self {
            text: text.clone(),
            marker: 0,
        })
    }

    /// The string being traversed.
    #[must_use]
    pub fn text(&self) -> &Text {
        &self.text
    }

    /// Current marker position; equals `text().len()` at end-of-sequence.
    #[must_use]
    pub fn marker(&self) -> usize {
        self.marker
    }

    fn byte(&self, position: usize) -> Option<u8> {
        self.text.as_bytes().get(position).copied()
    }

    /// Byte under the marker, `None` at end-of-sequence.
    #[must_use]
    pub fn this(&self) -> Option<u8> {
        self.byte(self.marker)
    }

    /// Byte right of the marker.
    #[must_use]
    pub fn peek_next(&self) -> Option<u8> {
        self.byte(self.marker + 1)
    }

    /// Byte left of the marker.
    #[must_use]
    pub fn peek_prev(&self) -> Option<u8> {
        self.marker.checked_sub(1).and_then(|p| self.byte(p))
    }

    /// True at end-of-sequence.
    #[must_use]
    pub fn is_at_eos(&self) -> bool {
        self.marker == self.text.len()
    }

    /// True at the first byte.
    #[must_use]
    pub fn is_at_bos(&self) -> bool {
        self.marker == 0
    }

    /// True if the marker sits at `position`.
    #[must_use]
    pub fn is_at(&self, position: usize) -> bool {
        self.marker == position
    }

    fn clamp(&mut self, position: isize) -> usize {
        self.marker = position.clamp(0, signed(self.text.len())).unsigned_abs();
        self.marker
    }

    /// Moves by `n` bytes (negative moves left), clamped to `[0, len]`.
    pub fn move_by(&mut self, n: isize) -> usize {
        self.clamp(signed(self.marker).saturating_add(n))
    }

    /// Moves one byte right.
    pub fn move_next(&mut self) -> usize {
        self.move_by(1)
    }

    /// Moves one byte left.
    pub fn move_prev(&mut self) -> usize {
        self.move_by(-1)
    }

    /// Skips over `n` bytes, landing on the one after them.
    ///
    /// Named apart from [`Iterator::skip`], which consumes the cursor.
    pub fn skip_over(&mut self, n: usize) -> usize {
        self.move_by(signed(n).saturating_add(1))
    }

    /// Moves to the first byte.
    pub fn reset(&mut self) -> usize {
        self.marker = 0;
        self.marker
    }

    /// Alias of [`TextCursor::reset`].
    pub fn move_bos(&mut self) -> usize {
        self.reset()
    }

    /// Moves to end-of-sequence.
    pub fn move_eos(&mut self) -> usize {
        self.marker = self.text.len();
        self.marker
    }

    fn scan(&mut self, step: isize, mut keep_going: impl FnMut(u8) -> bool) -> usize {
        if step == 0 {
            return self.marker;
        }
        let length = signed(self.text.len());
        let mut position = signed(self.marker);
        while (0..length).contains(&position) {
            let byte = self.text.as_bytes()[position.unsigned_abs()];
            if !keep_going(byte) {
                break;
            }
            position += step;
        }
        self.clamp(position)
    }

    /// Steps by `step` until the byte under the marker is one of `chars`.
    ///
    /// A negative step scans backward; a zero step does not move.
    pub fn move_until(&mut self, chars: &[u8], step: isize) -> usize {
        self.scan(step, |b| !chars.contains(&b))
    }

    /// Steps by `step` while the byte under the marker is one of `chars`.
    pub fn move_while(&mut self, chars: &[u8], step: isize) -> usize {
        self.scan(step, |b| chars.contains(&b))
    }
}

impl Iterator for TextCursor {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let byte = self.this()?;
        self.move_next();
        Some(byte)
    }
}
