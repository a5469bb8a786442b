// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

// Shared reporting helpers for diagnostic output on the error stream.

use crate::core::error::Diagnostic;

const ERROR_PREFIX_COLOR: &str = "\x1b[1m\x1b[91merror:\x1b[0m";
const ERROR_PREFIX_PLAIN: &str = "error:";

pub fn error_prefix(use_color: bool) -> &'static str {
    if use_color {
        ERROR_PREFIX_COLOR
    } else {
        ERROR_PREFIX_PLAIN
    }
}

/// Render one message line with the `error:` prefix.
pub fn format_error_line(message: &str, use_color: bool) -> String {
    format!("{} {message}", error_prefix(use_color))
}

/// Render one diagnostic as `error: <file>:<line>: <message>`.
pub fn format_diagnostic_line(file: &str, diag: &Diagnostic, use_color: bool) -> String {
    format_error_line(&diag.format(file), use_color)
}
