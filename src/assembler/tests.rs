use super::{run_with_cli, Assembler};
use crate::assembler::cli::Cli;
use crate::core::error::AsmErrorKind;

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

fn source_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

fn create_temp_dir(label: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join(format!("test-{label}-{}-{nanos}", process::id()));
    fs::create_dir_all(&dir).expect("Create temp dir");
    dir
}

fn write_file(path: &Path, contents: &str) {
    fs::write(path, contents).expect("Write test file");
}

#[test]
fn pass1_then_pass2_assembles_a_countdown_loop() {
    let lines = source_lines(
        ".macro COUNT #3\n; countdown\n@loop\n  mov r1, COUNT\n  sub r1, r1, #1\n  bne r1, @loop\n",
    );
    let mut assembler = Assembler::new();
    let pass1 = assembler.pass1(&lines);
    let pass2 = assembler.pass2();
    assert_eq!(pass1.errors, 0);
    assert_eq!(pass2.errors, 0);
    assert_eq!(assembler.instructions(), 3);
    let expected: [u8; 12] = [
        0x0F, 0x10, 0x00, 0x03, // mov r1, #3
        0x07, 0x11, 0x00, 0x01, // sub r1, r1, #1
        0x13, 0x19, 0xFF, 0xF8, // bne r1, pc, #-8
    ];
    assert_eq!(assembler.image(), &expected[..]);
}

#[test]
fn pass2_collects_one_diagnostic_per_failed_instruction() {
    let lines = source_lines("mov r9, #1\nadd r0, r0, #2\nstore rx, r0, r1\n");
    let mut assembler = Assembler::new();
    let pass1 = assembler.pass1(&lines);
    let pass2 = assembler.pass2();
    assert_eq!(pass1.errors, 0);
    assert_eq!(pass2.errors, 2);
    let diagnostics = assembler.take_diagnostics();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].line(), 1);
    assert_eq!(diagnostics[0].message(), "invalid register: \"r9\"");
    assert_eq!(diagnostics[1].line(), 3);
    assert_eq!(diagnostics[1].message(), "invalid register: \"rx\"");
    assert_eq!(assembler.image().len(), 4);
    assert!(assembler.take_diagnostics().is_empty());
}

#[test]
fn diagnostics_keep_original_source_line_numbers() {
    let lines = source_lines("; header\n\n@start\nmov r0, #notanumber\n");
    let mut assembler = Assembler::new();
    assembler.pass1(&lines);
    let pass2 = assembler.pass2();
    assert_eq!(pass2.errors, 1);
    let diagnostics = assembler.take_diagnostics();
    assert_eq!(diagnostics[0].line(), 4);
    assert_eq!(diagnostics[0].kind(), AsmErrorKind::InvalidImmediate);
}

#[test]
fn run_with_cli_assembles_source_to_binary() {
    let dir = create_temp_dir("assemble-loop");
    let input = dir.join("loop.s");
    let output = dir.join("loop.u");
    write_file(&input, "@loop\n  mov r1, #3\n  sub r1, r1, #1\n  bne r1, @loop\n");

    let cli = Cli::parse_from([
        "unuasm",
        input.to_string_lossy().as_ref(),
        "-o",
        output.to_string_lossy().as_ref(),
    ]);
    let report = run_with_cli(&cli).expect("assembly should succeed");
    assert_eq!(report.instructions(), 3);
    assert_eq!(report.bytes(), 12);
    assert_eq!(report.output_path(), output.to_string_lossy());

    let image = fs::read(&output).expect("read binary");
    assert_eq!(
        image,
        vec![0x0F, 0x10, 0x00, 0x03, 0x07, 0x11, 0x00, 0x01, 0x13, 0x19, 0xFF, 0xF8]
    );
}

#[test]
fn run_with_cli_reports_missing_input_file() {
    let dir = create_temp_dir("missing-input");
    let input = dir.join("nope.s");

    let cli = Cli::parse_from(["unuasm", input.to_string_lossy().as_ref()]);
    let err = match run_with_cli(&cli) {
        Ok(_) => panic!("assembly should fail for a missing input file"),
        Err(err) => err,
    };
    assert_eq!(err.kind(), AsmErrorKind::Io);
    assert_eq!(
        err.to_string(),
        format!("file \"{}\" not found", input.display())
    );
    assert!(err.diagnostics().is_empty());
}

#[test]
fn run_with_cli_writes_nothing_when_source_has_errors() {
    let dir = create_temp_dir("no-partial-binary");
    let input = dir.join("bad.s");
    let output = dir.join("bad.u");
    write_file(&input, "mov r0, #1\nadd r0, junk, #2\nxor r0, r0, r0\n");

    let cli = Cli::parse_from([
        "unuasm",
        input.to_string_lossy().as_ref(),
        "-o",
        output.to_string_lossy().as_ref(),
    ]);
    let err = match run_with_cli(&cli) {
        Ok(_) => panic!("assembly should fail for a bad src1 register"),
        Err(err) => err,
    };
    assert_eq!(err.kind(), AsmErrorKind::Assembler);
    assert_eq!(
        err.to_string(),
        "Errors detected in source. No binary file created."
    );
    assert_eq!(err.diagnostics().len(), 1);
    assert_eq!(err.diagnostics()[0].line(), 2);
    assert_eq!(err.diagnostics()[0].message(), "invalid register: \"junk\"");
    assert!(!output.exists());
}

#[test]
fn run_with_cli_reports_unwritable_output() {
    let dir = create_temp_dir("unwritable-output");
    let input = dir.join("ok.s");
    let output = dir.join("missing").join("out.u");
    write_file(&input, "mov r0, #1\n");

    let cli = Cli::parse_from([
        "unuasm",
        input.to_string_lossy().as_ref(),
        "-o",
        output.to_string_lossy().as_ref(),
    ]);
    let err = match run_with_cli(&cli) {
        Ok(_) => panic!("assembly should fail when the output cannot be written"),
        Err(err) => err,
    };
    assert_eq!(err.kind(), AsmErrorKind::Io);
    assert!(err.to_string().starts_with("Error writing binary file:"));
}

#[test]
fn comment_only_source_produces_an_empty_binary() {
    let dir = create_temp_dir("empty-source");
    let input = dir.join("empty.s");
    let output = dir.join("empty.u");
    write_file(&input, "; nothing to assemble\n\n");

    let cli = Cli::parse_from([
        "unuasm",
        input.to_string_lossy().as_ref(),
        "-o",
        output.to_string_lossy().as_ref(),
    ]);
    let report = run_with_cli(&cli).expect("assembly should succeed");
    assert_eq!(report.instructions(), 0);
    assert_eq!(report.bytes(), 0);
    assert_eq!(fs::read(&output).expect("read binary"), Vec::<u8>::new());
}
