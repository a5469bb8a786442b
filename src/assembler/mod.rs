// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Assembler front end - main entry point.
//!
//! This module ties the CLI to the two-pass pipeline in [`crate::core`]:
//! pass 1 preprocesses the source and lays out labels and instructions,
//! pass 2 resolves label references and encodes the binary image.

pub mod cli;
mod engine;
mod output;
mod passes;
#[cfg(test)]
mod tests;

use engine::Assembler;
use output::write_binary;

use std::fs;

use clap::Parser;

use crate::core::encoder::encode_instruction;
use crate::core::error::{
    AsmError, AsmErrorKind, AsmRunError, AsmRunReport, Diagnostic, PassCounts,
};
use crate::core::layout::{self, Layout};
use crate::core::preprocessor::Preprocessor;
use crate::core::resolver::resolve_labels;

use cli::{validate_cli, Cli};

// Re-export public types
pub use crate::core::error::{AsmRunError as RunError, AsmRunReport as RunReport};
pub use cli::VERSION;

/// Run the assembler with command-line arguments.
pub fn run() -> Result<AsmRunReport, AsmRunError> {
    passes::run()
}

pub fn run_with_cli(cli: &Cli) -> Result<AsmRunReport, AsmRunError> {
    passes::run_with_cli(cli)
}
