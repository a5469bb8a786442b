// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

// Delimiter-preserving line splitting shared by macro substitution and
// label rewriting. Delimiters are runs of whitespace and single commas;
// joining the fragments back in order reproduces the line exactly.

/// One fragment of a split line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    Token(&'a str),
    Delim(&'a str),
}

impl<'a> Fragment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Fragment::Token(s) | Fragment::Delim(s) => s,
        }
    }
}

/// Split a line into tokens and the delimiters between them.
pub fn split_line(line: &str) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    let mut rest = line;
    let mut offset = 0;
    while let Some(ch) = rest.chars().next() {
        let end = if ch == ',' {
            ch.len_utf8()
        } else if ch.is_whitespace() {
            rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len())
        } else {
            rest.find(|c: char| c == ',' || c.is_whitespace())
                .unwrap_or(rest.len())
        };
        let piece = &line[offset..offset + end];
        if ch == ',' || ch.is_whitespace() {
            fragments.push(Fragment::Delim(piece));
        } else {
            fragments.push(Fragment::Token(piece));
        }
        offset += end;
        rest = &rest[end..];
    }
    fragments
}

/// Rebuild a line, mapping each token through `subst`.
///
/// `subst` returns the replacement text for a token, or `None` to keep the
/// token unchanged. Delimiters always pass through as-is.
pub fn rewrite_tokens(line: &str, mut subst: impl FnMut(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(line.len());
    for fragment in split_line(line) {
        match fragment {
            Fragment::Token(token) => match subst(token) {
                Some(replacement) => out.push_str(&replacement),
                None => out.push_str(token),
            },
            Fragment::Delim(delim) => out.push_str(delim),
        }
    }
    out
}
