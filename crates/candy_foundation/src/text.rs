//! Owned, length-tracked byte strings.
//!
//! A [`Text`] keeps a trailing NUL after its bytes so the buffer can be handed
//! to C-style consumers; [`Text::len`] never counts it. Operations are ASCII
//! oriented and work byte by byte.
//!
//! Almost every operation returns a new `Text`. The exceptions are
//! [`Text::append`], [`Text::insert`] and [`Text::replace_part`], which
//! rebuild the buffer and replace it in place.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

use tracing::warn;

use crate::error::{Error, Result};
use crate::utils::{resolve_index, signed};

/// Bytes treated as whitespace by stripping, titling and splitting.
pub const WHITESPACE: &[u8] = b" \t\n\r\x0b\x0c";

fn is_space(byte: u8) -> bool {
    WHITESPACE.contains(&byte)
}

/// Owned byte string with a trailing NUL terminator.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Text {
    // Invariant: non-empty, last byte is 0.
    data: Vec<u8>,
}

impl Text {
    /// Creates an empty string.
    #[must_use]
    pub fn new() -> Self {
        Self { data: vec![0] }
    }

    /// Creates a string holding a copy of `bytes`.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut data = Vec::with_capacity(bytes.len() + 1);
        data.extend_from_slice(bytes);
        data.push(0);
        Self { data }
    }

    /// Number of bytes, excluding the terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len() - 1
    }

    /// Returns true if the string has no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The bytes of the string, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len()]
    }

    /// The bytes of the string followed by the NUL terminator.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.data
    }

    /// Decodes the bytes as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Copies `self[src]` into a fresh buffer of `total_len` bytes starting at
    /// `dest_start`, optionally filling `[0, dest_start)` with `left_fill`.
    ///
    /// Bytes not written are zero; callers fill them afterwards. This is the
    /// single place where copy bounds are validated.
    fn bounded_copy(
        &self,
        total_len: usize,
        dest_start: usize,
        src: Range<usize>,
        left_fill: Option<u8>,
    ) -> Result<Self> {
        if src.start > src.end || src.end > self.len() {
            return Err(Error::index_out_of_bounds(signed(src.end), self.len()));
        }
        let count = src.end - src.start;
        match dest_start.checked_add(count) {
            Some(dest_end) if dest_end <= total_len => {}
            _ => {
                return Err(Error::index_out_of_bounds(
                    signed(dest_start.saturating_add(count)),
                    total_len,
                ));
            }
        }

        let Some(buffer_len) = total_len.checked_add(1) else {
            warn!(requested = total_len, "text buffer length overflows");
            return Err(Error::allocation_failure(total_len));
        };
        let mut data = Vec::new();
        if data.try_reserve_exact(buffer_len).is_err() {
            warn!(requested = buffer_len, "text buffer allocation failed");
            return Err(Error::allocation_failure(buffer_len));
        }
        data.resize(buffer_len, 0);
        if let Some(fill) = left_fill {
            data[..dest_start].fill(fill);
        }
        data[dest_start..dest_start + count].copy_from_slice(&self.data[src]);
        Ok(Self { data })
    }

    fn map_bytes(&self, f: impl Fn(usize, &[u8]) -> u8) -> Self {
        let bytes = self.as_bytes();
        let mapped: Vec<u8> = (0..bytes.len()).map(|i| f(i, bytes)).collect();
        Self::from_bytes(&mapped)
    }

    fn all_bytes(&self, f: impl Fn(u8) -> bool) -> bool {
        self.as_bytes().iter().all(|b| f(*b))
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns the byte at `index` (negative counts from the end).
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if the normalized index is outside the string.
    pub fn char_at(&self, index: isize) -> Result<u8> {
        let position = resolve_index(index, self.len(), false)?;
        Ok(self.data[position])
    }

    /// Returns true if `byte` occurs in the string.
    #[must_use]
    pub fn contains_char(&self, byte: u8) -> bool {
        self.as_bytes().contains(&byte)
    }

    /// Returns true if the string begins with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &Text) -> bool {
        self.as_bytes().starts_with(prefix.as_bytes())
    }

    /// Returns true if the string ends with `suffix`.
    #[must_use]
    pub fn ends_with(&self, suffix: &Text) -> bool {
        self.as_bytes().ends_with(suffix.as_bytes())
    }

    /// Returns `[start, end)` as a new string. Negative bounds count from the
    /// end; `start >= end` yields an empty string.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if a normalized bound is negative or `end`
    /// is past the end of the string.
    pub fn substring(&self, start: isize, end: isize) -> Result<Self> {
        let length = signed(self.len());
        let lo = if start < 0 { start + length } else { start };
        let hi = if end < 0 { end + length } else { end };
        if lo < 0 {
            return Err(Error::index_out_of_bounds(start, self.len()));
        }
        if hi < 0 || hi > length {
            return Err(Error::index_out_of_bounds(end, self.len()));
        }
        if lo >= hi {
            return Ok(Self::new());
        }
        let (lo, hi) = (lo.unsigned_abs(), hi.unsigned_abs());
        self.bounded_copy(hi - lo, 0, lo..hi, None)
    }

    // =========================================================================
    // Case and shape
    // =========================================================================

    /// ASCII uppercase copy.
    #[must_use]
    pub fn to_upper(&self) -> Self {
        self.map_bytes(|i, b| b[i].to_ascii_uppercase())
    }

    /// ASCII lowercase copy.
    #[must_use]
    pub fn to_lower(&self) -> Self {
        self.map_bytes(|i, b| b[i].to_ascii_lowercase())
    }

    /// Copy with ASCII case inverted.
    #[must_use]
    pub fn swap_case(&self) -> Self {
        self.map_bytes(|i, b| {
            let c = b[i];
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
    }

    /// Copy with the first letter of every word uppercased.
    #[must_use]
    pub fn title(&self) -> Self {
        self.map_bytes(|i, b| {
            if i == 0 || is_space(b[i - 1]) {
                b[i].to_ascii_uppercase()
            } else {
                b[i]
            }
        })
    }

    /// Copy with the bytes in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut bytes = self.as_bytes().to_vec();
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    /// Copy with every tab replaced by `tab_size` spaces.
    #[must_use]
    pub fn expand_tabs(&self, tab_size: usize) -> Self {
        let mut out = Vec::with_capacity(self.len());
        for &byte in self.as_bytes() {
            if byte == b'\t' {
                out.extend(std::iter::repeat_n(b' ', tab_size));
            } else {
                out.push(byte);
            }
        }
        Self::from_bytes(&out)
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// True if every byte is an ASCII letter or digit.
    #[must_use]
    pub fn is_alphanumeric(&self) -> bool {
        self.all_bytes(|b| b.is_ascii_alphanumeric())
    }

    /// True if every byte is an ASCII letter.
    #[must_use]
    pub fn is_alpha(&self) -> bool {
        self.all_bytes(|b| b.is_ascii_alphabetic())
    }

    /// True if every byte is an ASCII digit.
    #[must_use]
    pub fn is_decimal(&self) -> bool {
        self.all_bytes(|b| b.is_ascii_digit())
    }

    /// True if every byte is whitespace.
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        self.all_bytes(is_space)
    }

    /// True if no byte is a lowercase letter.
    #[must_use]
    pub fn is_upper(&self) -> bool {
        self.all_bytes(|b| !b.is_ascii_lowercase())
    }

    /// True if no byte is an uppercase letter.
    #[must_use]
    pub fn is_lower(&self) -> bool {
        self.all_bytes(|b| !b.is_ascii_uppercase())
    }

    // =========================================================================
    // Padding and trimming
    // =========================================================================

    /// Left-pads with `'0'` up to `width` bytes.
    ///
    /// # Errors
    ///
    /// Returns `AllocationFailure` if the buffer cannot be obtained.
    pub fn zfill(&self, width: usize) -> Result<Self> {
        if self.len() >= width {
            return Ok(self.clone());
        }
        self.bounded_copy(width, width - self.len(), 0..self.len(), Some(b'0'))
    }

    /// Centers within `width` bytes; odd padding puts the extra byte on the right.
    ///
    /// # Errors
    ///
    /// Returns `AllocationFailure` if the buffer cannot be obtained.
    pub fn center(&self, width: usize, pad: u8) -> Result<Self> {
        if self.len() >= width {
            return Ok(self.clone());
        }
        let left = (width - self.len()) / 2;
        let mut out = self.bounded_copy(width, left, 0..self.len(), Some(pad))?;
        out.data[left + self.len()..width].fill(pad);
        Ok(out)
    }

    /// Left-justifies within `width` bytes, padding on the right.
    ///
    /// # Errors
    ///
    /// Returns `AllocationFailure` if the buffer cannot be obtained.
    pub fn ljust(&self, width: usize, pad: u8) -> Result<Self> {
        if self.len() >= width {
            return Ok(self.clone());
        }
        let mut out = self.bounded_copy(width, 0, 0..self.len(), None)?;
        out.data[self.len()..width].fill(pad);
        Ok(out)
    }

    /// Right-justifies within `width` bytes, padding on the left.
    ///
    /// # Errors
    ///
    /// Returns `AllocationFailure` if the buffer cannot be obtained.
    pub fn rjust(&self, width: usize, pad: u8) -> Result<Self> {
        if self.len() >= width {
            return Ok(self.clone());
        }
        self.bounded_copy(width, width - self.len(), 0..self.len(), Some(pad))
    }

    /// Removes `left` bytes from the front and `right` bytes from the back.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if more bytes are chopped than exist.
    pub fn chop(&self, left: usize, right: usize) -> Result<Self> {
        let len = self.len();
        match left.checked_add(right) {
            Some(total) if total <= len => {
                self.bounded_copy(len - total, 0, left..len - right, None)
            }
            _ => Err(Error::index_out_of_bounds(
                signed(left.saturating_add(right)),
                len,
            )),
        }
    }

    fn leading_space(&self) -> usize {
        self.as_bytes().iter().take_while(|b| is_space(**b)).count()
    }

    fn trailing_space(&self) -> usize {
        self.as_bytes().iter().rev().take_while(|b| is_space(**b)).count()
    }

    /// Removes leading and trailing whitespace.
    ///
    /// # Errors
    ///
    /// Returns `AllocationFailure` if the buffer cannot be obtained.
    pub fn strip(&self) -> Result<Self> {
        let start = self.leading_space();
        let end = if start == self.len() {
            start
        } else {
            self.len() - self.trailing_space()
        };
        self.bounded_copy(end - start, 0, start..end, None)
    }

    /// Removes leading whitespace.
    ///
    /// # Errors
    ///
    /// Returns `AllocationFailure` if the buffer cannot be obtained.
    pub fn lstrip(&self) -> Result<Self> {
        let start = self.leading_space();
        self.bounded_copy(self.len() - start, 0, start..self.len(), None)
    }

    /// Removes trailing whitespace.
    ///
    /// # Errors
    ///
    /// Returns `AllocationFailure` if the buffer cannot be obtained.
    pub fn rstrip(&self) -> Result<Self> {
        let end = self.len() - self.trailing_space();
        self.bounded_copy(end, 0, 0..end, None)
    }

    // =========================================================================
    // In-place edits
    // =========================================================================

    /// Appends `suffix` to the end of this string.
    ///
    /// # Errors
    ///
    /// Returns `AllocationFailure` if the new buffer cannot be obtained; the
    /// string is left unchanged.
    pub fn append(&mut self, suffix: &Text) -> Result<()> {
        let len = self.len();
        let mut out = self.bounded_copy(len + suffix.len(), 0, 0..len, None)?;
        out.data[len..len + suffix.len()].copy_from_slice(suffix.as_bytes());
        *self = out;
        Ok(())
    }

    /// Inserts `other` before position `index` (negative counts from the end;
    /// `len` appends).
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` for a position outside `[0, len]`.
    pub fn insert(&mut self, index: isize, other: &Text) -> Result<()> {
        let len = self.len();
        let at = resolve_index(index, len, true)?;
        let mut out = self.bounded_copy(len + other.len(), 0, 0..at, None)?;
        out.data[at..at + other.len()].copy_from_slice(other.as_bytes());
        out.data[at + other.len()..len + other.len()].copy_from_slice(&self.data[at..len]);
        *self = out;
        Ok(())
    }

    /// Overwrites `[start, end)` with the leading bytes of `other`.
    ///
    /// Only `min(end - start, other.len())` bytes are written; the length of
    /// the string never changes.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` unless `0 <= start < end <= len` after
    /// normalization.
    pub fn replace_part(&mut self, start: isize, end: isize, other: &Text) -> Result<()> {
        let len = self.len();
        let lo = resolve_index(start, len, false)?;
        let hi = resolve_index(end, len, true)?;
        if lo >= hi {
            return Err(Error::index_out_of_bounds(end, len));
        }
        let mut out = self.bounded_copy(len, 0, 0..len, None)?;
        let count = (hi - lo).min(other.len());
        out.data[lo..lo + count].copy_from_slice(&other.as_bytes()[..count]);
        *self = out;
        Ok(())
    }

    // =========================================================================
    // Comparison and search
    // =========================================================================

    /// Byte-wise ordering.
    #[must_use]
    pub fn compare(&self, other: &Text) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }

    /// Byte-wise ordering after ASCII uppercasing both sides.
    #[must_use]
    pub fn compare_ignore_case(&self, other: &Text) -> Ordering {
        let a = self.as_bytes().iter().map(u8::to_ascii_uppercase);
        let b = other.as_bytes().iter().map(u8::to_ascii_uppercase);
        a.cmp(b)
    }

    /// Equality ignoring ASCII case.
    #[must_use]
    pub fn equals_ignore_case(&self, other: &Text) -> bool {
        self.as_bytes().eq_ignore_ascii_case(other.as_bytes())
    }

    /// Position of the first occurrence of `needle`. An empty needle never matches.
    #[must_use]
    pub fn find(&self, needle: &Text) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        self.as_bytes()
            .windows(needle.len())
            .position(|w| w == needle.as_bytes())
    }

    /// Position of the last occurrence of `needle`. An empty needle never matches.
    #[must_use]
    pub fn rfind(&self, needle: &Text) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        self.as_bytes()
            .windows(needle.len())
            .rposition(|w| w == needle.as_bytes())
    }

    /// Number of non-overlapping occurrences of `needle`.
    #[must_use]
    pub fn count(&self, needle: &Text) -> usize {
        if needle.is_empty() {
            return 0;
        }
        let haystack = self.as_bytes();
        let mut count = 0;
        let mut i = 0;
        while i + needle.len() <= haystack.len() {
            if &haystack[i..i + needle.len()] == needle.as_bytes() {
                count += 1;
                i += needle.len();
            } else {
                i += 1;
            }
        }
        count
    }

    /// Splits on runs of whitespace, dropping empty pieces.
    #[must_use]
    pub fn split_whitespace(&self) -> Vec<Text> {
        self.as_bytes()
            .split(|b| is_space(*b))
            .filter(|piece| !piece.is_empty())
            .map(Self::from_bytes)
            .collect()
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialOrd for Text {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Text {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        let mut data = s.into_bytes();
        data.push(0);
        Self { data }
    }
}

impl From<&[u8]> for Text {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}
