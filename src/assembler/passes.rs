//! Assembler run orchestration.
//!
//! This module owns CLI-driven run flow: source loading, pass sequencing,
//! and all-or-nothing binary emission.

use super::*;

/// Run the assembler with command-line arguments.
pub(super) fn run() -> Result<AsmRunReport, AsmRunError> {
    let cli = Cli::parse();
    run_with_cli(&cli)
}

pub(super) fn run_with_cli(cli: &Cli) -> Result<AsmRunReport, AsmRunError> {
    let config = validate_cli(cli)?;
    run_one(&config)
}

fn run_one(config: &cli::CliConfig) -> Result<AsmRunReport, AsmRunError> {
    let source = fs::read_to_string(&config.input).map_err(|_| {
        AsmRunError::new(
            AsmError::new(
                AsmErrorKind::Io,
                &format!("file \"{}\" not found", config.input.display()),
                None,
            ),
            Vec::new(),
        )
    })?;
    let lines: Vec<String> = source.lines().map(str::to_string).collect();

    let mut assembler = Assembler::new();
    let pass1 = assembler.pass1(&lines);
    let pass2 = assembler.pass2();

    if pass1.errors > 0 || pass2.errors > 0 {
        return Err(AsmRunError::new(
            AsmError::new(
                AsmErrorKind::Assembler,
                "Errors detected in source. No binary file created.",
                None,
            ),
            assembler.take_diagnostics(),
        ));
    }

    write_binary(&config.output, assembler.image())?;

    Ok(AsmRunReport::new(
        assembler.instructions(),
        assembler.image().len(),
        config.output.to_string_lossy(),
    ))
}
