// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Command-line interface parsing and argument validation.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::core::error::{AsmError, AsmErrorKind, AsmRunError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const LONG_ABOUT: &str = "Two-pass assembler for the unu toy CPU.

The first pass expands .macro definitions and records label addresses; the
second resolves label references to pc-relative operands and encodes each
instruction into a 4-byte big-endian word. The output file is written only
when the whole source assembles without errors.";

#[derive(Parser, Debug)]
#[command(
    name = "unuasm",
    version = VERSION,
    about = "Assembler for the unu CPU (11 opcodes, 8 general registers)",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    #[arg(value_name = "INPUT", long_help = "Input assembly source file.")]
    pub input: PathBuf,
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = "a.u",
        long_help = "Output binary filename. Defaults to a.u."
    )]
    pub output: PathBuf,
    #[arg(
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Text,
        long_help = "Select CLI output format. text is default; json enables machine-readable output."
    )]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn cli_error(message: impl Into<String>) -> AsmRunError {
    AsmRunError::new(
        AsmError::new(AsmErrorKind::Cli, &message.into(), None),
        Vec::new(),
    )
}

/// Validate CLI arguments and return parsed configuration.
pub fn validate_cli(cli: &Cli) -> Result<CliConfig, AsmRunError> {
    if cli.input.as_os_str().is_empty() {
        return Err(cli_error("Input filename must not be empty"));
    }
    if cli.output.as_os_str().is_empty() {
        return Err(cli_error("Output filename must not be empty"));
    }
    if cli.output == cli.input {
        return Err(cli_error(format!(
            "Output file {} would overwrite the input",
            cli.output.display()
        )));
    }
    Ok(CliConfig {
        input: cli.input.clone(),
        output: cli.output.clone(),
        output_format: cli.format,
    })
}

/// Validated CLI configuration.
#[derive(Debug)]
pub struct CliConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub output_format: OutputFormat,
}
