//! Bridge to the underlying matching engine
//!
//! This is the only module that names `regex-automata` types. It translates
//! [`CompileOptions`] into the engine's syntax configuration, builds the
//! `PikeVM`, and exposes a fallible byte-offset scan that the enumerator
//! drives. Everything above this module consumes plain byte ranges, so a
//! different compliant backend can replace this file without changing the
//! crate's observable contracts.

use std::{
    collections::HashMap,
    ops::Range,
    panic::{RefUnwindSafe, UnwindSafe},
    sync::Arc,
};

use regex_automata::{
    Anchored, Input, PatternID,
    nfa::thompson::{
        self,
        pikevm::{Cache, PikeVM},
    },
    util::{
        captures::Captures,
        iter::Searcher,
        pool::{Pool, PoolGuard},
        syntax,
    },
};

use crate::{
    error::PatternError,
    options::CompileOptions,
};

/// Factory for per-scan caches. The boxed closure owns an `Arc` to the VM
/// so the pool can mint caches without borrowing the engine.
type CacheFn = Box<dyn Fn() -> Cache + Send + Sync + UnwindSafe + RefUnwindSafe>;

/// A compiled engine handle plus the shared state every scan needs
#[derive(Debug)]
pub(crate) struct Engine {
    vm: Arc<PikeVM>,
    /// Thread-safe pool of scratch caches. Plucking a cache per scan keeps
    /// concurrent calls against a shared pattern independent.
    pool: Pool<Cache, CacheFn>,
    group_count: usize,
    names: Arc<HashMap<String, usize>>,
}

impl Engine {
    /// Compile `source` under `options`
    pub(crate) fn compile(source: &str, options: CompileOptions) -> Result<Engine, PatternError> {
        let literal;
        let pattern = if options.contains(CompileOptions::IGNORE_METACHARACTERS) {
            literal = regex_syntax::escape(source);
            literal.as_str()
        } else {
            source
        };

        let vm = PikeVM::builder()
            .syntax(syntax_config(options))
            .thompson(thompson::Config::new().utf8(true))
            .build(pattern)
            .map_err(|err| PatternError::Syntax {
                pattern: source.to_string(),
                message: err.to_string(),
            })?;

        let group_info = vm.get_nfa().group_info();
        let group_count = group_info.group_len(PatternID::ZERO).saturating_sub(1);
        let mut names = HashMap::new();
        for (index, name) in group_info.pattern_names(PatternID::ZERO).enumerate() {
            if let Some(name) = name {
                names.insert(name.to_string(), index);
            }
        }

        let vm = Arc::new(vm);
        let create: CacheFn = Box::new({
            let vm = Arc::clone(&vm);
            move || vm.create_cache()
        });

        Ok(Engine { vm, pool: Pool::new(create), group_count, names: Arc::new(names) })
    }

    /// Number of capture groups, excluding the implicit overall group
    pub(crate) fn group_count(&self) -> usize {
        self.group_count
    }

    /// Name-to-slot table, shared read-only across all matches
    pub(crate) fn names(&self) -> &Arc<HashMap<String, usize>> {
        &self.names
    }

    /// Begin a scan of `haystack` restricted to the byte `span`
    pub(crate) fn scan<'r, 'h>(
        &'r self,
        haystack: &'h str,
        span: Range<usize>,
        anchored: bool,
    ) -> Scan<'r, 'h> {
        let mut input = Input::new(haystack).range(span);
        if anchored {
            input = input.anchored(Anchored::Yes);
        }
        Scan {
            vm: &self.vm,
            cache: self.pool.get(),
            caps: self.vm.create_captures(),
            searcher: Searcher::new(input),
        }
    }
}

/// The engine hit an internal limit or failure mid-scan. Surfaced to the
/// caller through progress flags, never as a recoverable error value.
#[derive(Debug)]
pub(crate) struct EngineFailure;

/// One raw match record: byte spans per group slot, slot 0 overall.
/// A `None` slot is the engine's "group did not participate" sentinel.
pub(crate) struct RawRecord {
    pub(crate) groups: Vec<Option<Range<usize>>>,
}

/// An in-progress scan over one haystack
///
/// Drives the engine's `Searcher`, which owns the tricky parts of
/// non-overlapping iteration: advancing past zero-length matches on valid
/// positions and never yielding overlapping spans.
pub(crate) struct Scan<'r, 'h> {
    vm: &'r PikeVM,
    cache: PoolGuard<'r, Cache, CacheFn>,
    caps: Captures,
    searcher: Searcher<'h>,
}

impl Scan<'_, '_> {
    /// Advance to the next match, left to right
    ///
    /// `Ok(None)` means the span is exhausted. `Err` means the engine
    /// failed internally and the scan must not continue.
    pub(crate) fn advance(&mut self) -> Result<Option<RawRecord>, EngineFailure> {
        let Scan { vm, cache, caps, searcher } = self;
        let found = searcher
            .try_advance(|input| {
                vm.search(cache, input, caps);
                Ok(caps.get_match())
            })
            .map_err(|_| EngineFailure)?;
        Ok(found.map(|_| RawRecord {
            groups: (0..caps.group_len())
                .map(|slot| caps.get_group(slot).map(|span| span.range()))
                .collect(),
        }))
    }
}

/// Escape `text` so it matches itself when compiled as a pattern
pub(crate) fn escape_literal(text: &str) -> String {
    regex_syntax::escape(text)
}

fn syntax_config(options: CompileOptions) -> syntax::Config {
    syntax::Config::new()
        .case_insensitive(options.contains(CompileOptions::CASE_INSENSITIVE))
        .ignore_whitespace(options.contains(CompileOptions::ALLOW_COMMENTS_AND_WHITESPACE))
        .dot_matches_new_line(options.contains(CompileOptions::DOT_MATCHES_LINE_SEPARATORS))
        .multi_line(options.contains(CompileOptions::ANCHORS_MATCH_LINES))
        .crlf(!options.contains(CompileOptions::USE_UNIX_LINE_SEPARATORS))
        .unicode(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(engine: &Engine, haystack: &str) -> Vec<Range<usize>> {
        let mut scan = engine.scan(haystack, 0..haystack.len(), false);
        let mut out = Vec::new();
        while let Some(record) = scan.advance().unwrap() {
            out.push(record.groups[0].clone().unwrap());
        }
        out
    }

    #[test]
    fn test_compile_and_scan() {
        let engine = Engine::compile("o", CompileOptions::empty()).unwrap();
        assert_eq!(spans(&engine, "foo"), vec![1..2, 2..3]);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Engine::compile("(", CompileOptions::empty()).unwrap_err();
        assert!(matches!(err, PatternError::Syntax { .. }));
    }

    #[test]
    fn test_case_insensitive_option() {
        let engine = Engine::compile("foo", CompileOptions::CASE_INSENSITIVE).unwrap();
        assert_eq!(spans(&engine, "FOO").len(), 1);
    }

    #[test]
    fn test_ignore_metacharacters_option() {
        let engine = Engine::compile("a.b", CompileOptions::IGNORE_METACHARACTERS).unwrap();
        assert!(spans(&engine, "axb").is_empty());
        assert_eq!(spans(&engine, "a.b"), vec![0..3]);
    }

    #[test]
    fn test_comments_and_whitespace_option() {
        let engine = Engine::compile(
            "f o o # trailing comment",
            CompileOptions::ALLOW_COMMENTS_AND_WHITESPACE,
        )
        .unwrap();
        assert_eq!(spans(&engine, "foo"), vec![0..3]);
    }

    #[test]
    fn test_group_names() {
        let engine =
            Engine::compile(r"(?<first>\w+) (\w+) (?<last>\w+)", CompileOptions::empty()).unwrap();
        assert_eq!(engine.group_count(), 3);
        assert_eq!(engine.names().get("first"), Some(&1));
        assert_eq!(engine.names().get("last"), Some(&3));
        assert_eq!(engine.names().get("middle"), None);
    }

    #[test]
    fn test_absent_group_is_none() {
        let engine = Engine::compile("(a)|(b)", CompileOptions::empty()).unwrap();
        let mut scan = engine.scan("b", 0..1, false);
        let record = scan.advance().unwrap().unwrap();
        assert_eq!(record.groups[1], None);
        assert_eq!(record.groups[2], Some(0..1));
    }

    #[test]
    fn test_anchored_scan() {
        let engine = Engine::compile("o", CompileOptions::empty()).unwrap();
        let mut scan = engine.scan("foo", 0..3, true);
        assert!(scan.advance().unwrap().is_none());
    }
}
