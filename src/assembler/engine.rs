// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

use super::*;

pub(crate) struct Assembler {
    preprocessor: Preprocessor,
    layout: Layout,
    image: Vec<u8>,
    diagnostics: Vec<Diagnostic>,
}

impl Assembler {
    pub(crate) fn new() -> Self {
        Self {
            preprocessor: Preprocessor::new(),
            layout: Layout::default(),
            image: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn image(&self) -> &[u8] {
        &self.image
    }

    pub(crate) fn instructions(&self) -> usize {
        self.layout.instructions.len()
    }

    pub(crate) fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// First pass: strip comments, expand macros, and lay out label addresses
    /// and instruction placements. Lines that are neither labels nor
    /// instructions are dropped without comment.
    pub(crate) fn pass1(&mut self, lines: &[String]) -> PassCounts {
        let mut counts = PassCounts::new();
        counts.lines = lines.len() as u32;
        let expanded = self.preprocessor.expand(lines);
        self.layout = layout::scan(&expanded);
        counts
    }

    /// Second pass: resolve label references to pc-relative operands, then
    /// validate and encode every placed instruction. Each failed instruction
    /// contributes one diagnostic tagged with its source line.
    pub(crate) fn pass2(&mut self) -> PassCounts {
        let mut counts = PassCounts::new();
        resolve_labels(&self.layout.labels, &mut self.layout.instructions);
        for record in &self.layout.instructions {
            counts.lines += 1;
            match encode_instruction(&record.text) {
                Ok(word) => self.image.extend_from_slice(&word),
                Err(err) => {
                    self.diagnostics.push(Diagnostic::new(record.line, err));
                    counts.errors += 1;
                }
            }
        }
        counts
    }
}
