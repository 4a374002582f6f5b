//! Immutable view over one match
//!
//! A [`MatchResult`] borrows the subject string it was found in; substring
//! accessors slice the subject lazily rather than copying every group up
//! front, since callers typically read only one or two groups per match.

use std::{collections::HashMap, sync::Arc};

use crate::range::TextRange;

/// One match of a pattern against a subject string
///
/// Group slot 0 is the overall match and always participates; slots
/// `1..=capture_group_count` are capture groups and are absent when that
/// optional group did not take part in the match. The number of slots is
/// constant for every match of the same pattern.
#[derive(Debug, Clone)]
pub struct MatchResult<'h> {
    subject: &'h str,
    ranges: Vec<Option<TextRange>>,
    names: Arc<HashMap<String, usize>>,
}

impl<'h> MatchResult<'h> {
    pub(crate) fn new(
        subject: &'h str,
        ranges: Vec<Option<TextRange>>,
        names: Arc<HashMap<String, usize>>,
    ) -> Self {
        debug_assert!(ranges[0].is_some(), "overall range always participates");
        MatchResult { subject, ranges, names }
    }

    /// The span of the full match
    pub fn range(&self) -> TextRange {
        self.ranges[0].expect("overall range always participates")
    }

    /// The span of group `index`, or `None` if the group did not
    /// participate in this match
    ///
    /// Index 0 is the overall match.
    ///
    /// # Panics
    /// Panics when `index` exceeds the pattern's capture group count; that
    /// is a programmer error, not a recoverable condition.
    pub fn range_at(&self, index: usize) -> Option<TextRange> {
        match self.ranges.get(index) {
            Some(range) => *range,
            None => panic!(
                "capture group index {index} out of range (pattern has {} groups)",
                self.ranges.len() - 1
            ),
        }
    }

    /// The span of the group called `name`
    ///
    /// Returns `None` both when no group has that name and when the named
    /// group did not participate; the two cases are indistinguishable, as
    /// in the underlying engine.
    pub fn range_named(&self, name: &str) -> Option<TextRange> {
        self.ranges.get(*self.names.get(name)?).copied().flatten()
    }

    /// Number of group slots, including the overall match
    pub fn group_count(&self) -> usize {
        self.ranges.len()
    }

    /// The matched text
    pub fn as_str(&self) -> &'h str {
        &self.subject[self.range().to_byte_range(self.subject)]
    }

    /// The text of group `index`, extracted lazily from the subject
    ///
    /// # Panics
    /// Panics when `index` exceeds the pattern's capture group count.
    pub fn substring_at(&self, index: usize) -> Option<&'h str> {
        self.range_at(index)
            .map(|range| &self.subject[range.to_byte_range(self.subject)])
    }

    /// The text of the group called `name`
    pub fn substring_named(&self, name: &str) -> Option<&'h str> {
        self.range_named(name)
            .map(|range| &self.subject[range.to_byte_range(self.subject)])
    }

    /// A copy of this result with every present range shifted by `offset`
    /// characters
    ///
    /// Used to re-anchor a match found against a shifted working copy of
    /// the subject back onto the original coordinate space, e.g. during
    /// in-place replacement.
    ///
    /// # Panics
    /// Panics if a shift would move a range below zero.
    pub fn adjusting_ranges(&self, offset: isize) -> MatchResult<'h> {
        MatchResult {
            subject: self.subject,
            ranges: self
                .ranges
                .iter()
                .map(|range| range.map(|r| r.shifted_by(offset)))
                .collect(),
            names: Arc::clone(&self.names),
        }
    }
}
