// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Layout scanning: assign addresses to recognized instructions and record
//! label addresses. Everything else is dropped without diagnostics.

use std::collections::HashMap;

use crate::core::encoder::is_opcode;

pub const INSTRUCTION_SIZE: u32 = 4;

/// A recognized instruction line awaiting label resolution and encoding.
#[derive(Debug, Clone)]
pub struct InstructionRecord {
    pub text: String,
    pub address: u32,
    pub line: u32,
}

/// Result of the layout scan: label addresses plus the instruction stream.
#[derive(Debug, Default)]
pub struct Layout {
    pub labels: HashMap<String, u32>,
    pub instructions: Vec<InstructionRecord>,
}

/// Scan preprocessed lines once, top to bottom.
///
/// A label line records the current program counter and contributes no
/// instruction. A line whose first token is a known opcode is recorded at
/// the current counter, which then advances by the instruction size. Any
/// other line is skipped.
pub fn scan(lines: &[String]) -> Layout {
    let mut layout = Layout::default();
    let mut pc: u32 = 0;
    for (idx, line) in lines.iter().enumerate() {
        if let Some(name) = match_label(line) {
            layout.labels.insert(name.to_string(), pc);
            continue;
        }
        let Some(first) = line.split_whitespace().next() else {
            continue;
        };
        if is_opcode(first) {
            layout.instructions.push(InstructionRecord {
                text: line.clone(),
                address: pc,
                line: (idx + 1) as u32,
            });
            pc += INSTRUCTION_SIZE;
        }
    }
    layout
}

/// Match a label definition: optional leading whitespace, `@`, then the
/// longest run of word characters. Returns the label name.
fn match_label(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix('@')?;
    let end = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    if end == 0 {
        None
    } else {
        Some(&rest[..end])
    }
}
