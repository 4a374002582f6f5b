//! Match enumeration
//!
//! One enumeration drives a single left-to-right pass of the engine over a
//! subject (or a sub-range of it), streaming each match to a callback. The
//! callback runs synchronously on the calling thread and controls early
//! termination by returning [`Control::Stop`]; the decision is checked
//! immediately after each invocation and the callback is never called
//! again once it stopped.
//!
//! Every other matching operation — [`Pattern::matches`],
//! [`Pattern::first_match`], the replace family — is defined through this
//! one pass, so they all agree on edge cases like zero-length matches and
//! matches touching sub-range boundaries.

use crate::{
    engine::RawRecord,
    options::{MatchOptions, ProgressFlags},
    pattern::Pattern,
    range::TextRange,
    result::MatchResult,
};

/// A callback's verdict after seeing one enumeration event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep enumerating.
    Continue,
    /// Terminate now; the callback will not be invoked again.
    Stop,
}

impl Pattern {
    /// Stream every match of this pattern over `subject` to `callback`
    ///
    /// `range` restricts the search to a sub-range of the subject and
    /// defaults to the whole subject. Matches arrive left to right,
    /// non-overlapping, in subject order.
    ///
    /// The callback's first argument is `Some` for a concrete match and
    /// `None` for the completion event (fired once, only when
    /// [`MatchOptions::REPORT_COMPLETION`] is set) or for an engine
    /// internal failure (reported through
    /// [`ProgressFlags::INTERNAL_ERROR`], after which enumeration stops).
    pub fn enumerate_matches<'h, F>(
        &self,
        subject: &'h str,
        range: Option<TextRange>,
        options: MatchOptions,
        mut callback: F,
    ) where
        F: FnMut(Option<&MatchResult<'h>>, ProgressFlags) -> Control,
    {
        let byte_range = match range {
            Some(range) => range.to_byte_range(subject),
            None => 0..subject.len(),
        };

        // Opaque bounds (the default) slice the subject so assertions
        // cannot see past the sub-range and anchors bind to its edges.
        // Either transparency flag searches the sub-range in place, with
        // the whole subject as visible context.
        let transparent = options.intersects(
            MatchOptions::WITH_TRANSPARENT_BOUNDS | MatchOptions::WITHOUT_ANCHORING_BOUNDS,
        );
        let (haystack, span, base) = if transparent {
            (subject, byte_range, 0)
        } else {
            (&subject[byte_range.clone()], 0..byte_range.len(), byte_range.start)
        };

        let mut match_flags = ProgressFlags::empty();
        if options.contains(MatchOptions::REPORT_PROGRESS) {
            match_flags |= ProgressFlags::PROGRESS;
        }

        let anchored = options.contains(MatchOptions::ANCHORED);
        let mut scan = self.engine.scan(haystack, span, anchored);
        loop {
            match scan.advance() {
                Err(_failure) => {
                    callback(None, ProgressFlags::INTERNAL_ERROR);
                    return;
                }
                Ok(None) => break,
                Ok(Some(record)) => {
                    let result = self.resolve(record, subject, base);
                    if callback(Some(&result), match_flags) == Control::Stop {
                        return;
                    }
                }
            }
        }

        if options.contains(MatchOptions::REPORT_COMPLETION) {
            callback(None, ProgressFlags::COMPLETED | ProgressFlags::HIT_END);
        }
    }

    /// Every match over the whole subject, in order
    pub fn matches<'h>(&self, subject: &'h str) -> Vec<MatchResult<'h>> {
        self.matches_in(subject, None, MatchOptions::empty())
    }

    /// Every match within `range`, in order
    ///
    /// Progress-only callbacks are not observable here; the returned
    /// sequence holds exactly the concrete matches, left to right.
    pub fn matches_in<'h>(
        &self,
        subject: &'h str,
        range: Option<TextRange>,
        options: MatchOptions,
    ) -> Vec<MatchResult<'h>> {
        let mut found = Vec::new();
        self.enumerate_matches(subject, range, options, |result, _flags| {
            if let Some(result) = result {
                found.push(result.clone());
            }
            Control::Continue
        });
        found
    }

    /// The first match over the whole subject
    pub fn first_match<'h>(&self, subject: &'h str) -> Option<MatchResult<'h>> {
        self.first_match_in(subject, None, MatchOptions::empty())
    }

    /// The first match within `range`
    ///
    /// Equivalent to enumerating and stopping on the first concrete
    /// result; not a separate matching code path.
    pub fn first_match_in<'h>(
        &self,
        subject: &'h str,
        range: Option<TextRange>,
        options: MatchOptions,
    ) -> Option<MatchResult<'h>> {
        let mut first = None;
        self.enumerate_matches(subject, range, options, |result, _flags| match result {
            Some(result) => {
                first = Some(result.clone());
                Control::Stop
            }
            None => Control::Continue,
        });
        first
    }

    /// The span of the first match over the whole subject, if any
    pub fn range_of_first_match(&self, subject: &str) -> Option<TextRange> {
        self.first_match(subject).map(|result| result.range())
    }

    /// Whether the pattern matches anywhere in the subject
    pub fn is_match(&self, subject: &str) -> bool {
        self.first_match(subject).is_some()
    }

    /// Number of matches within `range`
    pub fn number_of_matches(
        &self,
        subject: &str,
        range: Option<TextRange>,
        options: MatchOptions,
    ) -> usize {
        let mut count = 0;
        self.enumerate_matches(subject, range, options, |result, _flags| {
            if result.is_some() {
                count += 1;
            }
            Control::Continue
        });
        count
    }

    /// Build a caller-facing result from one raw engine record
    ///
    /// `base` re-anchors byte spans found in a sliced haystack back onto
    /// the full subject before translating them to character offsets.
    fn resolve<'h>(&self, record: RawRecord, subject: &'h str, base: usize) -> MatchResult<'h> {
        let ranges = record
            .groups
            .into_iter()
            .map(|span| {
                span.map(|span| {
                    TextRange::from_byte_range(subject, span.start + base..span.end + base)
                })
            })
            .collect();
        MatchResult::new(subject, ranges, self.engine.names().clone())
    }
}
