// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Core assembly pipeline components.
//!
//! - [`preprocessor`] - Comment stripping and macro substitution
//! - [`layout`] - Label addresses and instruction placement
//! - [`resolver`] - Label references to pc-relative operands
//! - [`encoder`] - Instruction validation and word packing
//! - [`tokenize`] - Structure-preserving line tokenization
//! - [`error`] - Error types and diagnostics
//! - [`report`] - Diagnostic rendering for the terminal

pub mod encoder;
pub mod error;
pub mod layout;
pub mod preprocessor;
pub mod report;
pub mod resolver;
pub mod tokenize;
