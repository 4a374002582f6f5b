//! Compiled patterns
//!
//! A [`Pattern`] pairs the original pattern text with its compiled engine
//! form. Construction is the only fallible step; after that the pattern is
//! immutable and safe to share across threads, and every matching call
//! against it is independent.

use std::fmt;

use crate::{
    engine::{self, Engine},
    error::Result,
    options::CompileOptions,
};

/// An immutable compiled pattern
///
/// Compile once, match many times; recompilation never happens implicitly.
pub struct Pattern {
    source: String,
    options: CompileOptions,
    pub(crate) engine: Engine,
}

impl Pattern {
    /// Compile `source` under `options`
    ///
    /// This is the constructor for runtime or otherwise untrusted pattern
    /// text: invalid syntax is a recoverable [`PatternError`].
    pub fn new(source: &str, options: CompileOptions) -> Result<Pattern> {
        let engine = Engine::compile(source, options)?;
        Ok(Pattern { source: source.to_string(), options, engine })
    }

    /// Compile a statically known-good pattern literal
    ///
    /// # Panics
    /// Panics when `source` is not a valid pattern. Use only for literals
    /// validated at development time; anything else belongs in
    /// [`Pattern::new`].
    pub fn must(source: &str) -> Pattern {
        match Pattern::new(source, CompileOptions::empty()) {
            Ok(pattern) => pattern,
            Err(err) => panic!("{err}"),
        }
    }

    /// The original pattern text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The options the pattern was compiled with
    pub fn options(&self) -> CompileOptions {
        self.options
    }

    /// Number of capture groups, excluding the implicit overall group
    pub fn capture_group_count(&self) -> usize {
        self.engine.group_count()
    }

    /// The group slot a name refers to, if the pattern names one
    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.engine.names().get(name).copied()
    }

    /// Escape `text` so it compiles to a pattern matching it literally
    pub fn escaped_pattern(text: &str) -> String {
        engine::escape_literal(text)
    }

    /// Escape `text` so it expands to itself when used as a replacement
    /// template
    pub fn escaped_template(text: &str) -> String {
        text.replace('\\', r"\\")
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "serde")]
mod persistence {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    use super::Pattern;
    use crate::{error::PatternError, options::CompileOptions};

    /// The stable persisted form: pattern text plus raw options bitmask.
    #[derive(Serialize, Deserialize)]
    struct Persisted<'a> {
        pattern: std::borrow::Cow<'a, str>,
        options: u32,
    }

    impl Serialize for Pattern {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            Persisted {
                pattern: std::borrow::Cow::Borrowed(self.source()),
                options: self.options().bits(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Pattern {
        /// Decoding re-validates: the stored bitmask must contain only
        /// known bits and the stored text must still compile under it.
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let persisted = Persisted::deserialize(deserializer)?;
            let options = CompileOptions::from_bits(persisted.options)
                .ok_or_else(|| {
                    de::Error::custom(PatternError::InvalidOptions { bits: persisted.options })
                })?;
            Pattern::new(&persisted.pattern, options).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternError;

    #[test]
    fn test_new_compiles_valid_pattern() {
        let pattern = Pattern::new(r"f(o+)b(a)r", CompileOptions::empty()).unwrap();
        assert_eq!(pattern.source(), r"f(o+)b(a)r");
        assert_eq!(pattern.options(), CompileOptions::empty());
        assert_eq!(pattern.capture_group_count(), 2);
    }

    #[test]
    fn test_new_rejects_invalid_pattern() {
        let err = Pattern::new("(unclosed", CompileOptions::empty()).unwrap_err();
        assert!(matches!(err, PatternError::Syntax { .. }));
    }

    #[test]
    fn test_must_on_valid_literal() {
        let pattern = Pattern::must(r"\d+");
        assert_eq!(pattern.capture_group_count(), 0);
    }

    #[test]
    #[should_panic(expected = "invalid pattern")]
    fn test_must_panics_on_invalid_literal() {
        Pattern::must("(");
    }

    #[test]
    fn test_group_index() {
        let pattern = Pattern::must(r"(?<first>\w+) (?<last>\w+)");
        assert_eq!(pattern.group_index("first"), Some(1));
        assert_eq!(pattern.group_index("last"), Some(2));
        assert_eq!(pattern.group_index("middle"), None);
    }

    #[test]
    fn test_escaped_pattern() {
        let escaped = Pattern::escaped_pattern("1+1=2?");
        let pattern = Pattern::new(&escaped, CompileOptions::empty()).unwrap();
        assert!(pattern.is_match("so 1+1=2? yes"));
        assert!(!pattern.is_match("11=2"));
    }

    #[test]
    fn test_escaped_template() {
        assert_eq!(Pattern::escaped_template(r"a\b"), r"a\\b");
    }

    #[test]
    fn test_pattern_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pattern>();
    }

    #[cfg(feature = "serde")]
    mod serde_round_trip {
        use super::*;

        #[test]
        fn test_encode_decode_preserves_source_and_options() {
            let options =
                CompileOptions::CASE_INSENSITIVE | CompileOptions::DOT_MATCHES_LINE_SEPARATORS;
            let pattern = Pattern::new(r"f(o+)bar", options).unwrap();
            let encoded = serde_json::to_string(&pattern).unwrap();
            let decoded: Pattern = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded.source(), pattern.source());
            assert_eq!(decoded.options(), pattern.options());
        }

        #[test]
        fn test_persisted_shape_is_stable() {
            let pattern = Pattern::new("abc", CompileOptions::CASE_INSENSITIVE).unwrap();
            let encoded = serde_json::to_string(&pattern).unwrap();
            assert_eq!(encoded, r#"{"pattern":"abc","options":1}"#);
        }

        #[test]
        fn test_decode_rejects_unknown_option_bits() {
            let result: serde_json::Result<Pattern> =
                serde_json::from_str(r#"{"pattern":"abc","options":4096}"#);
            assert!(result.unwrap_err().to_string().contains("options bits"));
        }

        #[test]
        fn test_decode_revalidates_pattern_text() {
            let result: serde_json::Result<Pattern> =
                serde_json::from_str(r#"{"pattern":"(","options":0}"#);
            assert!(result.unwrap_err().to_string().contains("invalid pattern"));
        }
    }
}
