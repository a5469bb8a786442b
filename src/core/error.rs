// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Error types, diagnostics, and run reports for the assembler.

use std::fmt;

/// Categories of assembler errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsmErrorKind {
    InvalidOpcode,
    InvalidRegister,
    InvalidImmediate,
    ArityMismatch,
    Cli,
    Io,
    Assembler,
}

impl AsmErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AsmErrorKind::InvalidOpcode => "invalid-opcode",
            AsmErrorKind::InvalidRegister => "invalid-register",
            AsmErrorKind::InvalidImmediate => "invalid-immediate",
            AsmErrorKind::ArityMismatch => "arity-mismatch",
            AsmErrorKind::Cli => "cli",
            AsmErrorKind::Io => "io",
            AsmErrorKind::Assembler => "assembler",
        }
    }
}

/// An assembler error with a kind and message.
#[derive(Debug, Clone)]
pub struct AsmError {
    kind: AsmErrorKind,
    message: String,
}

impl AsmError {
    pub fn new(kind: AsmErrorKind, msg: &str, param: Option<&str>) -> Self {
        Self {
            kind,
            message: format_error(msg, param),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> AsmErrorKind {
        self.kind
    }
}

impl fmt::Display for AsmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AsmError {}

/// A diagnostic for one failed instruction, tagged with its source line.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    line: u32,
    error: AsmError,
}

impl Diagnostic {
    pub fn new(line: u32, error: AsmError) -> Self {
        Self { line, error }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn kind(&self) -> AsmErrorKind {
        self.error.kind()
    }

    pub fn message(&self) -> &str {
        self.error.message()
    }

    pub fn format(&self, file: &str) -> String {
        format!("{file}:{}: {}", self.line, self.error.message())
    }
}

/// Report from a successful assembly run.
#[derive(Debug)]
pub struct AsmRunReport {
    instructions: usize,
    bytes: usize,
    output_path: String,
}

impl AsmRunReport {
    pub fn new(instructions: usize, bytes: usize, output_path: impl Into<String>) -> Self {
        Self {
            instructions,
            bytes,
            output_path: output_path.into(),
        }
    }

    pub fn instructions(&self) -> usize {
        self.instructions
    }

    pub fn bytes(&self) -> usize {
        self.bytes
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }
}

/// Error from a failed assembly run.
#[derive(Debug)]
pub struct AsmRunError {
    error: AsmError,
    diagnostics: Vec<Diagnostic>,
}

impl AsmRunError {
    pub fn new(error: AsmError, diagnostics: Vec<Diagnostic>) -> Self {
        Self { error, diagnostics }
    }

    pub fn kind(&self) -> AsmErrorKind {
        self.error.kind()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for AsmRunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for AsmRunError {}

/// Pass statistics.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassCounts {
    pub lines: u32,
    pub errors: u32,
}

impl PassCounts {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Format an error message with an optional parameter.
pub fn format_error(msg: &str, param: Option<&str>) -> String {
    match param {
        Some(p) => format!("{msg}: {p}"),
        None => msg.to_string(),
    }
}
