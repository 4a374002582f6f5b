//! Replacement templates and the replace operations
//!
//! A template is a literal string with a fixed escape syntax: `\1`, `\2`,
//! ... substitute the corresponding capture group's text (`\0` the whole
//! match), `\g{name}` substitutes a named group, and `\\` is a literal
//! backslash. A group that did not participate — or a reference past the
//! pattern's group count — expands to the empty string.

use crate::{
    options::MatchOptions,
    pattern::Pattern,
    range::TextRange,
    result::MatchResult,
};

/// A part of a replacement template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    /// Literal text
    Literal(String),
    /// Backreference by group number; 0 is the whole match
    Group(usize),
    /// Backreference by group name (`\g{name}`)
    NamedGroup(String),
}

/// A parsed replacement template
#[derive(Debug, Clone)]
pub struct Template {
    parts: Vec<TemplatePart>,
}

impl Template {
    /// Parse a template string
    ///
    /// Parsing never fails: a trailing backslash or an unrecognized escape
    /// is kept literally.
    pub fn new(input: &str) -> Self {
        let mut parts = Vec::new();
        let mut chars = input.chars().peekable();
        let mut literal = String::new();

        while let Some(c) = chars.next() {
            if c != '\\' {
                literal.push(c);
                continue;
            }
            match chars.peek() {
                Some(&next) if next.is_ascii_digit() => {
                    flush(&mut parts, &mut literal);
                    let mut number = 0usize;
                    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                        chars.next();
                        number = number * 10 + digit as usize;
                    }
                    parts.push(TemplatePart::Group(number));
                }
                Some('g') => {
                    chars.next();
                    if chars.peek() == Some(&'{') {
                        chars.next();
                        let name = read_until(&mut chars, '}');
                        if chars.peek() == Some(&'}') {
                            chars.next();
                        }
                        flush(&mut parts, &mut literal);
                        match name.parse::<usize>() {
                            Ok(number) => parts.push(TemplatePart::Group(number)),
                            Err(_) => parts.push(TemplatePart::NamedGroup(name)),
                        }
                    } else {
                        // Not a \g{...} reference; keep it literally.
                        literal.push('\\');
                        literal.push('g');
                    }
                }
                Some(&next) => {
                    // Escaped character, including \\ for a backslash.
                    chars.next();
                    literal.push(next);
                }
                None => literal.push('\\'),
            }
        }

        flush(&mut parts, &mut literal);
        Template { parts }
    }

    /// Expand this template against one match
    pub fn expand(&self, result: &MatchResult<'_>) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                TemplatePart::Literal(text) => out.push_str(text),
                TemplatePart::Group(number) => {
                    if *number < result.group_count() {
                        if let Some(text) = result.substring_at(*number) {
                            out.push_str(text);
                        }
                    }
                }
                TemplatePart::NamedGroup(name) => {
                    if let Some(text) = result.substring_named(name) {
                        out.push_str(text);
                    }
                }
            }
        }
        out
    }

    /// The parsed parts of the template
    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }
}

fn flush(parts: &mut Vec<TemplatePart>, literal: &mut String) {
    if !literal.is_empty() {
        parts.push(TemplatePart::Literal(std::mem::take(literal)));
    }
}

fn read_until(chars: &mut std::iter::Peekable<std::str::Chars>, delimiter: char) -> String {
    let mut result = String::new();
    while let Some(&c) = chars.peek() {
        if c == delimiter {
            break;
        }
        result.push(c);
        chars.next();
    }
    result
}

impl Pattern {
    /// A copy of `subject` with every match replaced by the expanded
    /// template
    ///
    /// Text outside the matches — including everything outside `range` —
    /// is carried over untouched. The input is never mutated.
    pub fn replacing_matches(
        &self,
        subject: &str,
        range: Option<TextRange>,
        options: MatchOptions,
        template: &str,
    ) -> String {
        let template = Template::new(template);
        let mut out = String::with_capacity(subject.len());
        let mut copied = 0;
        for result in self.matches_in(subject, range, options) {
            let bytes = result.range().to_byte_range(subject);
            out.push_str(&subject[copied..bytes.start]);
            out.push_str(&template.expand(&result));
            copied = bytes.end;
        }
        out.push_str(&subject[copied..]);
        out
    }

    /// Replace every match in place; returns the number of replacements
    ///
    /// Matching runs against a stable snapshot of the subject, then the
    /// replacements are applied left to right. Each later match is
    /// re-anchored with [`MatchResult::adjusting_ranges`] by the length
    /// delta the earlier replacements introduced.
    pub fn replace_matches(
        &self,
        subject: &mut String,
        range: Option<TextRange>,
        options: MatchOptions,
        template: &str,
    ) -> usize {
        let template = Template::new(template);
        let snapshot = subject.clone();
        let mut delta = 0isize;
        let mut count = 0;
        for result in self.matches_in(&snapshot, range, options) {
            let replacement = template.expand(&result);
            let adjusted = result.adjusting_ranges(delta);
            let bytes = adjusted.range().to_byte_range(subject);
            subject.replace_range(bytes, &replacement);
            delta += replacement.chars().count() as isize - result.range().len() as isize;
            count += 1;
        }
        count
    }
}
