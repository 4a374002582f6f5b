//! Character-offset ranges over a subject string
//!
//! The engine reports byte offsets into UTF-8 text; callers work with
//! [`TextRange`], a half-open interval of character (Unicode scalar value)
//! offsets. This module owns the translation in both directions.
//!
//! A `TextRange` is only meaningful against the exact subject string that
//! produced it. Translating it against a different string is unsupported
//! and will either panic or silently denote the wrong text.

use std::ops::Range;

/// A half-open interval of character offsets into a subject string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Create a range from character offsets
    ///
    /// # Panics
    /// Panics if `start > end`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "invalid range: start {start} > end {end}");
        TextRange { start, end }
    }

    /// The range covering every character of `subject`
    pub fn full(subject: &str) -> Self {
        TextRange { start: 0, end: subject.chars().count() }
    }

    /// Start offset (inclusive), in characters
    pub fn start(&self) -> usize {
        self.start
    }

    /// End offset (exclusive), in characters
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range covers no characters
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `pos` falls inside the range
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Whether `other` lies entirely inside this range
    pub fn contains_range(&self, other: TextRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The same span shifted by `offset` characters
    ///
    /// # Panics
    /// Panics if the shift would move either bound below zero or past
    /// `usize::MAX`. A bad offset means the caller re-anchored against the
    /// wrong coordinate origin, which is a programmer error.
    pub fn shifted_by(self, offset: isize) -> Self {
        let shift = |bound: usize| {
            bound
                .checked_add_signed(offset)
                .unwrap_or_else(|| panic!("range {self:?} cannot be shifted by {offset}"))
        };
        TextRange { start: shift(self.start), end: shift(self.end) }
    }

    /// Translate a raw byte range reported by the engine into character
    /// offsets over `subject`
    ///
    /// # Panics
    /// Panics if either bound does not fall on a character boundary of
    /// `subject`. That indicates the byte range was produced against a
    /// different string, which must never be silently truncated.
    pub fn from_byte_range(subject: &str, bytes: Range<usize>) -> Self {
        for bound in [bytes.start, bytes.end] {
            assert!(
                bound <= subject.len() && subject.is_char_boundary(bound),
                "byte offset {bound} is not a character boundary of the subject"
            );
        }
        let start = subject[..bytes.start].chars().count();
        let len = subject[bytes.start..bytes.end].chars().count();
        TextRange { start, end: start + len }
    }

    /// Translate back into byte offsets over `subject`
    ///
    /// # Panics
    /// Panics if either character offset lies past the end of `subject`.
    pub fn to_byte_range(self, subject: &str) -> Range<usize> {
        byte_offset(subject, self.start)..byte_offset(subject, self.end)
    }
}

/// Byte offset of the `pos`-th character of `subject`; `subject.len()` for
/// the one-past-the-end position.
fn byte_offset(subject: &str, pos: usize) -> usize {
    if let Some((byte, _)) = subject.char_indices().nth(pos) {
        return byte;
    }
    if pos == subject.chars().count() {
        return subject.len();
    }
    panic!("character offset {pos} lies past the end of the subject");
}
