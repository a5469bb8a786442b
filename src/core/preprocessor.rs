// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Source preprocessing: comment stripping and single-pass macro substitution.
//!
//! Macros are plain text substitutions declared with `.macro <name> <value>`.
//! A definition takes effect from its own line onward; replacement text is
//! never re-scanned for further macro names.

use std::collections::HashMap;

use crate::core::tokenize::rewrite_tokens;

const MACRO_KEYWORD: &str = ".macro";
const COMMENT_SYMBOL: char = ';';
const IMM_MARKER: char = '#';

pub struct Preprocessor {
    macros: HashMap<String, String>,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Preprocessor {
    pub fn new() -> Self {
        Self {
            macros: HashMap::new(),
        }
    }

    /// Clean every line in order: strip comments, trim, register `.macro`
    /// directives, substitute macro tokens. The output has the same length
    /// as the input; lines reduced to nothing stay as empty strings.
    pub fn expand(&mut self, lines: &[String]) -> Vec<String> {
        let mut cleaned = Vec::with_capacity(lines.len());
        for line in lines {
            let line = strip_comment(line).trim();
            if line.is_empty() {
                cleaned.push(String::new());
                continue;
            }
            // The directive registers before substitution runs over its own
            // line, so a macro is visible to the remainder of that line.
            if let Some((name, value)) = parse_directive(line) {
                self.macros.insert(name.to_string(), value.to_string());
            }
            cleaned.push(self.substitute(line));
        }
        cleaned
    }

    pub fn macros(&self) -> &HashMap<String, String> {
        &self.macros
    }

    fn substitute(&self, line: &str) -> String {
        rewrite_tokens(line, |token| {
            if let Some(rest) = token.strip_prefix(IMM_MARKER) {
                // Marker-prefixed tokens are looked up without the marker,
                // which is re-applied to whatever comes back.
                let value = self.macros.get(rest).map(String::as_str).unwrap_or(rest);
                Some(format!("{IMM_MARKER}{value}"))
            } else {
                self.macros.get(token).cloned()
            }
        })
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_SYMBOL) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Parse a `.macro <name> <value>` directive from a trimmed line.
///
/// The value is everything after the name, verbatim. A name with no value
/// maps to itself; a keyword with no name is not a directive.
fn parse_directive(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix(MACRO_KEYWORD)?;
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start();
    if rest.is_empty() {
        return None;
    }
    let name_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let name = &rest[..name_end];
    let value = rest[name_end..].trim_start();
    if value.is_empty() {
        Some((name, name))
    } else {
        Some((name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn strips_comment_from_first_symbol() {
        let mut pp = Preprocessor::new();
        let out = pp.expand(&lines(&["add r0, r1 ; increment", "; whole line"]));
        assert_eq!(out, vec!["add r0, r1".to_string(), String::new()]);
    }

    #[test]
    fn output_keeps_one_entry_per_input_line() {
        let mut pp = Preprocessor::new();
        let out = pp.expand(&lines(&["add r0, r1", "", "sub r0, r1"]));
        assert_eq!(out.len(), 3);
        assert_eq!(out[1], "");
    }

    #[test]
    fn directive_is_visible_on_its_own_line() {
        let mut pp = Preprocessor::new();
        let out = pp.expand(&lines(&[".macro TWO #2"]));
        // The freshly registered name substitutes even inside the directive.
        assert_eq!(out[0], ".macro #2 #2");
        assert_eq!(pp.macros().get("TWO").map(String::as_str), Some("#2"));
    }

    #[test]
    fn substitutes_bare_and_marker_prefixed_tokens() {
        let mut pp = Preprocessor::new();
        let out = pp.expand(&lines(&[
            ".macro COUNT 5",
            "add r0, r0, #COUNT",
            "mov r1, COUNT",
        ]));
        assert_eq!(out[1], "add r0, r0, #5");
        assert_eq!(out[2], "mov r1, 5");
    }

    #[test]
    fn replacement_text_is_not_rescanned() {
        let mut pp = Preprocessor::new();
        let out = pp.expand(&lines(&[".macro A B", ".macro B #9", "mov r0, A"]));
        // A expands to B in a single pass; B is not expanded again.
        assert_eq!(out[2], "mov r0, B");
    }

    #[test]
    fn later_definition_overrides_earlier() {
        let mut pp = Preprocessor::new();
        let out = pp.expand(&lines(&[".macro X #1", ".macro X #2", "mov r0, X"]));
        assert_eq!(out[2], "mov r0, #2");
    }

    #[test]
    fn unknown_tokens_pass_through() {
        let mut pp = Preprocessor::new();
        let out = pp.expand(&lines(&["add r0, COUNT"]));
        assert_eq!(out[0], "add r0, COUNT");
    }

    #[test]
    fn name_without_value_maps_to_itself() {
        let mut pp = Preprocessor::new();
        pp.expand(&lines(&[".macro FOO", "mov r0, FOO"]));
        assert_eq!(pp.macros().get("FOO").map(String::as_str), Some("FOO"));
    }

    #[test]
    fn keyword_alone_registers_nothing() {
        let mut pp = Preprocessor::new();
        pp.expand(&lines(&[".macro"]));
        assert!(pp.macros().is_empty());
    }

    #[test]
    fn keyword_must_be_a_whole_token() {
        let mut pp = Preprocessor::new();
        pp.expand(&lines(&[".macros X 1"]));
        assert!(pp.macros().is_empty());
    }

    #[test]
    fn value_keeps_internal_whitespace_verbatim() {
        let mut pp = Preprocessor::new();
        pp.expand(&lines(&[".macro INC add  r0, r0, #1"]));
        assert_eq!(
            pp.macros().get("INC").map(String::as_str),
            Some("add  r0, r0, #1")
        );
    }
}
