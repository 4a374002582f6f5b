//! Rematch
//!
//! An ergonomic match/replace/enumerate layer over a finite-automata regex
//! engine. Pattern compilation and the matching algorithm itself live in
//! the wrapped engine; this crate owns the calling conventions: compile
//! and per-call option sets with stable bit encodings, character-offset
//! ranges instead of raw byte offsets, immutable match results with lazy
//! group extraction, a streaming enumerator with cooperative early
//! termination, and template-based replacement.
//!
//! ```
//! use rematch::{CompileOptions, Pattern};
//!
//! let pattern = Pattern::new(r"(?<first>\w+) (?<last>\w+)", CompileOptions::empty())?;
//! let subject = "John Appleseed";
//! let m = pattern.first_match(subject).expect("matches");
//! assert_eq!(m.substring_named("first"), Some("John"));
//! assert_eq!(m.substring_named("last"), Some("Appleseed"));
//! # Ok::<(), rematch::PatternError>(())
//! ```

pub mod error;
pub mod matching;
pub mod options;
pub mod pattern;
pub mod range;
pub mod result;
pub mod template;

mod engine;

pub use error::{PatternError, Result};
pub use matching::Control;
pub use options::{CompileOptions, MatchOptions, ProgressFlags};
pub use pattern::Pattern;
pub use range::TextRange;
pub use result::MatchResult;
pub use template::{Template, TemplatePart};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end() {
        // Compile, enumerate, replace: the full pipeline over one subject.
        let pattern = Pattern::must(r"(\w+)=(\w+)");
        let subject = "a=1 b=2";
        assert_eq!(pattern.matches(subject).len(), 2);
        let rewritten =
            pattern.replacing_matches(subject, None, MatchOptions::empty(), r"\2=\1");
        assert_eq!(rewritten, "1=a 2=b");
    }
}
