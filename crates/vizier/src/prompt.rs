// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2025 Vizier Project
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

pub const INSTRUCTION_START: &str = "[INST] ";
pub const INSTRUCTION_END: &str = " [/INST]";
pub const INSTRUCTION_DIRECTIVE: &str =
    "Please shortly suggest chart type and columns needed for the following question:";

/// Deterministic, pure function of (columns, question). The marker pair is
/// the prompting convention the instruct model was tuned on.
pub fn build_instruction(columns: &[&str], question: &str) -> String {
    format!(
        "{INSTRUCTION_START}My data contains columns: {}.\n{INSTRUCTION_DIRECTIVE}\n{question}{INSTRUCTION_END}",
        columns.join(", ")
    )
}

/// Strips the first literal occurrence of the echoed instruction from the
/// raw reply and trims. When the model altered or omitted the echo, the raw
/// text passes through unchanged. Idempotent on already-clean text.
pub fn clean_response(raw: &str, instruction: &str) -> String {
    match raw.find(instruction) {
        Some(idx) => {
            let mut stripped = String::with_capacity(raw.len() - instruction.len());
            stripped.push_str(&raw[..idx]);
            stripped.push_str(&raw[idx + instruction.len()..]);
            stripped.trim().to_string()
        }
        None => raw.trim().to_string(),
    }
}
