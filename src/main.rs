// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

// CLI entrypoint for unuasm.

use clap::Parser;
use serde_json::json;

use unuasm::assembler::cli::{validate_cli, Cli, OutputFormat};
use unuasm::core::error::{AsmRunReport, Diagnostic};
use unuasm::core::report;

fn format_diagnostic_line(
    diag: &Diagnostic,
    file: &str,
    use_color: bool,
    format: OutputFormat,
) -> String {
    if format == OutputFormat::Json {
        json!({
            "file": file,
            "line": diag.line(),
            "kind": diag.kind().as_str(),
            "message": diag.message(),
        })
        .to_string()
    } else {
        report::format_diagnostic_line(file, diag, use_color)
    }
}

fn format_run_summary(report: &AsmRunReport) -> String {
    json!({
        "status": "ok",
        "instructions": report.instructions(),
        "bytes": report.bytes(),
        "output": report.output_path(),
    })
    .to_string()
}

fn main() {
    let cli = Cli::parse();
    let cli_config = match validate_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let use_color = std::env::var("NO_COLOR").is_err();
    let file = cli_config.input.to_string_lossy();
    match unuasm::assembler::run_with_cli(&cli) {
        Ok(report) => {
            if cli_config.output_format == OutputFormat::Json {
                println!("{}", format_run_summary(&report));
            }
        }
        Err(err) => {
            for diag in err.diagnostics() {
                eprintln!(
                    "{}",
                    format_diagnostic_line(diag, &file, use_color, cli_config.output_format)
                );
            }
            if cli_config.output_format != OutputFormat::Json {
                eprintln!("{}", report::format_error_line(&err.to_string(), use_color));
            }
            std::process::exit(1);
        }
    }
}
