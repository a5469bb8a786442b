// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Instruction encoding: opcode and register tables, operand validation,
//! and packing into 32-bit big-endian words.
//!
//! Word layout, MSB first: opcode (7 bits), immediate flag (1 bit), dest
//! register (4 bits), src1 register (4 bits), src2 (16 bits).

use crate::core::error::{AsmError, AsmErrorKind};

/// Operand shape accepted after the destination register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandFamily {
    /// Exactly one source operand (register or immediate): mov, brn.
    SingleSource,
    /// Optional src1 register plus src2 operand: all other opcodes.
    DualSource,
}

pub struct OpcodeEntry {
    pub mnemonic: &'static str,
    pub family: OperandFamily,
    pub code: u32,
}

pub static OPCODE_TABLE: &[OpcodeEntry] = &[
    OpcodeEntry {
        mnemonic: "load",
        family: OperandFamily::DualSource,
        code: 0,
    },
    OpcodeEntry {
        mnemonic: "store",
        family: OperandFamily::DualSource,
        code: 1,
    },
    OpcodeEntry {
        mnemonic: "add",
        family: OperandFamily::DualSource,
        code: 2,
    },
    OpcodeEntry {
        mnemonic: "sub",
        family: OperandFamily::DualSource,
        code: 3,
    },
    OpcodeEntry {
        mnemonic: "and",
        family: OperandFamily::DualSource,
        code: 4,
    },
    OpcodeEntry {
        mnemonic: "or",
        family: OperandFamily::DualSource,
        code: 5,
    },
    OpcodeEntry {
        mnemonic: "xor",
        family: OperandFamily::DualSource,
        code: 6,
    },
    OpcodeEntry {
        mnemonic: "mov",
        family: OperandFamily::SingleSource,
        code: 7,
    },
    OpcodeEntry {
        mnemonic: "beq",
        family: OperandFamily::DualSource,
        code: 8,
    },
    OpcodeEntry {
        mnemonic: "bne",
        family: OperandFamily::DualSource,
        code: 9,
    },
    OpcodeEntry {
        mnemonic: "brn",
        family: OperandFamily::SingleSource,
        code: 10,
    },
];

pub struct RegisterEntry {
    pub name: &'static str,
    pub id: u32,
}

pub static REGISTER_TABLE: &[RegisterEntry] = &[
    RegisterEntry { name: "r0", id: 0 },
    RegisterEntry { name: "r1", id: 1 },
    RegisterEntry { name: "r2", id: 2 },
    RegisterEntry { name: "r3", id: 3 },
    RegisterEntry { name: "r4", id: 4 },
    RegisterEntry { name: "r5", id: 5 },
    RegisterEntry { name: "r6", id: 6 },
    RegisterEntry { name: "r7", id: 7 },
    RegisterEntry { name: "eq", id: 8 },
    RegisterEntry { name: "pc", id: 9 },
];

fn opcode_entry(token: &str) -> Option<&'static OpcodeEntry> {
    OPCODE_TABLE.iter().find(|entry| entry.mnemonic == token)
}

/// Whether a token names a known opcode. Used by the layout scanner to
/// decide which lines are instructions at all.
pub fn is_opcode(token: &str) -> bool {
    opcode_entry(token).is_some()
}

fn opcode_value(token: &str) -> Result<&'static OpcodeEntry, AsmError> {
    opcode_entry(token).ok_or_else(|| {
        AsmError::new(
            AsmErrorKind::InvalidOpcode,
            "invalid opcode in assembly stage",
            Some(&format!("\"{token}\"")),
        )
    })
}

fn register_value(token: &str) -> Result<u32, AsmError> {
    REGISTER_TABLE
        .iter()
        .find(|entry| entry.name == token)
        .map(|entry| entry.id)
        .ok_or_else(|| {
            AsmError::new(
                AsmErrorKind::InvalidRegister,
                "invalid register",
                Some(&format!("\"{token}\"")),
            )
        })
}

fn immediate_value(text: &str) -> Result<i64, AsmError> {
    text.parse::<i64>().map_err(|_| {
        AsmError::new(
            AsmErrorKind::InvalidImmediate,
            "invalid immediate",
            Some(&format!("\"{text}\"")),
        )
    })
}

/// Parse a source operand: `#`-prefixed decimal immediate (flag 1) or a
/// register name (flag 0).
fn parse_operand(token: &str) -> Result<(i64, u32), AsmError> {
    if let Some(rest) = token.strip_prefix('#') {
        Ok((immediate_value(rest)?, 1))
    } else {
        Ok((i64::from(register_value(token)?), 0))
    }
}

fn arity_error(mnemonic: &str) -> AsmError {
    AsmError::new(
        AsmErrorKind::ArityMismatch,
        &format!("invalid number of arguments for {mnemonic}"),
        None,
    )
}

/// Encode one resolved instruction into its 4-byte big-endian word.
pub fn encode_instruction(text: &str) -> Result<[u8; 4], AsmError> {
    let spaced = text.replace(',', " ");
    let parts: Vec<&str> = spaced.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(AsmError::new(
            AsmErrorKind::ArityMismatch,
            "not enough arguments",
            None,
        ));
    }

    let opcode = opcode_value(parts[0])?;
    let dest = register_value(parts[1])?;

    let (src1, src2, imm_flag) = match opcode.family {
        OperandFamily::SingleSource => {
            if parts.len() != 3 {
                return Err(arity_error(parts[0]));
            }
            let (src2, imm_flag) = parse_operand(parts[2])?;
            (0, src2, imm_flag)
        }
        OperandFamily::DualSource => match parts.len() {
            4 => {
                let src1 = register_value(parts[2])?;
                let (src2, imm_flag) = parse_operand(parts[3])?;
                (src1, src2, imm_flag)
            }
            // A missing src2 counts as an immediate zero; the third token
            // is not examined in this form.
            3 => (0, 0, 1),
            _ => return Err(arity_error(parts[0])),
        },
    };

    let mut word = (opcode.code & 0x7F) << 25;
    word |= (imm_flag & 0x1) << 24;
    word |= (dest & 0xF) << 20;
    word |= (src1 & 0xF) << 16;
    word |= (src2 as u32) & 0xFFFF;
    Ok(word.to_be_bytes())
}
