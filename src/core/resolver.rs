// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Label resolution: rewrite label references into pc-relative operand pairs.

use std::collections::HashMap;

use crate::core::layout::InstructionRecord;
use crate::core::tokenize::rewrite_tokens;

/// Rewrite every label reference in the instruction stream.
///
/// A token references a label when it equals the label name, with or without
/// the `@` marker. The reference becomes `pc, #<offset>` where the offset is
/// the label address minus the instruction address — one token becomes two,
/// which downstream arity checks must absorb.
pub fn resolve_labels(labels: &HashMap<String, u32>, instructions: &mut [InstructionRecord]) {
    for record in instructions.iter_mut() {
        let address = record.address;
        record.text = rewrite_tokens(&record.text, |token| {
            let name = token.strip_prefix('@').unwrap_or(token);
            labels.get(name).map(|&label_addr| {
                let offset = i64::from(label_addr) - i64::from(address);
                format!("pc, #{offset}")
            })
        });
    }
}
