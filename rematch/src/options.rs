//! Option sets for compiling and matching
//!
//! Three independent bitmask sets: [`CompileOptions`] is fixed into a
//! [`Pattern`](crate::Pattern) at construction, [`MatchOptions`] applies to
//! a single matching call, and [`ProgressFlags`] is a read-only output
//! describing why an enumeration callback fired.
//!
//! The numeric value of every flag is frozen: compiled patterns persist
//! their options as a raw bitmask (see [`Pattern`](crate::Pattern)'s serde
//! support), and a later build of this library must decode a mask written
//! by an earlier one.

use bitflags::bitflags;

bitflags! {
    /// Flags baked into a pattern at compile time
    ///
    /// These cannot be changed after construction; compile a new pattern
    /// instead.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CompileOptions: u32 {
        /// Match letters without regard to case.
        const CASE_INSENSITIVE = 1 << 0;
        /// Ignore unescaped whitespace and `#`-comments in the pattern.
        const ALLOW_COMMENTS_AND_WHITESPACE = 1 << 1;
        /// Treat the whole pattern as a literal string; metacharacters
        /// lose their special meaning.
        const IGNORE_METACHARACTERS = 1 << 2;
        /// `.` also matches line separators.
        const DOT_MATCHES_LINE_SEPARATORS = 1 << 3;
        /// `^` and `$` match at the start and end of every line, not just
        /// of the whole subject.
        const ANCHORS_MATCH_LINES = 1 << 4;
        /// Only `\n` terminates a line. When unset, line anchors are also
        /// CRLF-aware.
        const USE_UNIX_LINE_SEPARATORS = 1 << 5;
        /// Request Unicode-aware word boundaries. Recorded for persistence;
        /// the bundled engine already evaluates `\b` with full Unicode
        /// awareness, so this flag cannot widen behavior further.
        const USE_UNICODE_WORD_BOUNDARIES = 1 << 6;
    }

    /// Flags that apply to one matching invocation only
    ///
    /// These never mutate the compiled pattern.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MatchOptions: u32 {
        /// Set [`ProgressFlags::PROGRESS`] on match callbacks.
        const REPORT_PROGRESS = 1 << 0;
        /// Fire one final callback with [`ProgressFlags::COMPLETED`] after
        /// the last match.
        const REPORT_COMPLETION = 1 << 1;
        /// Matches must start at the beginning of the search range.
        const ANCHORED = 1 << 2;
        /// Look-around assertions may see text beyond the search range.
        /// With the bundled engine this also lifts anchoring at the range
        /// edges, since the engine evaluates anchors and look-around
        /// against the same surrounding context.
        const WITH_TRANSPARENT_BOUNDS = 1 << 3;
        /// `^` and `$` bind to the ends of the whole subject rather than
        /// to the edges of the search range.
        const WITHOUT_ANCHORING_BOUNDS = 1 << 4;
    }

    /// Read-only flags passed to an enumeration callback
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ProgressFlags: u32 {
        /// The callback fired to report matching progress.
        const PROGRESS = 1 << 0;
        /// Enumeration has finished; no further callbacks will fire.
        const COMPLETED = 1 << 1;
        /// The scan consulted the end of the search range.
        const HIT_END = 1 << 2;
        /// The end of the search range was required for the match to be
        /// valid. Defined for encoding stability; the bundled engine does
        /// not report it.
        const REQUIRED_END = 1 << 3;
        /// The engine failed internally; enumeration stopped early.
        const INTERNAL_ERROR = 1 << 4;
    }
}
