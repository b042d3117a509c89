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

use vizier::prompt::{build_instruction, clean_response, INSTRUCTION_DIRECTIVE};

#[test]
fn test_instruction_is_deterministic_and_marker_wrapped() {
    let columns = ["Region", "Sales"];
    let first = build_instruction(&columns, "show sales by region");
    let second = build_instruction(&columns, "show sales by region");
    assert_eq!(first, second);
    assert!(first.starts_with("[INST] "));
    assert!(first.ends_with(" [/INST]"));
    assert!(first.contains("My data contains columns: Region, Sales."));
    assert!(first.contains(INSTRUCTION_DIRECTIVE));
    assert!(first.contains("show sales by region"));
}

#[test]
fn test_instruction_accepts_empty_question() {
    let instruction = build_instruction(&["a", "b"], "");
    assert!(instruction.starts_with("[INST] "));
    assert!(instruction.ends_with(" [/INST]"));
}

#[test]
fn test_clean_strips_echoed_instruction() {
    let instruction = build_instruction(&["Region", "Sales"], "show sales by region");
    let raw = format!("{instruction} Use a bar chart with Region and Sales.");
    assert_eq!(
        clean_response(&raw, &instruction),
        "Use a bar chart with Region and Sales."
    );
}

#[test]
fn test_clean_passes_through_when_instruction_absent() {
    let instruction = build_instruction(&["Region"], "anything");
    let raw = "a pie chart of Region would work";
    assert_eq!(clean_response(raw, &instruction), raw);
}

#[test]
fn test_clean_is_idempotent() {
    let instruction = build_instruction(&["Region", "Sales"], "show sales");
    let raw = format!("{instruction}\n  a line chart of Sales over Region  ");
    let once = clean_response(&raw, &instruction);
    let twice = clean_response(&once, &instruction);
    assert_eq!(once, twice);
}

#[test]
fn test_clean_removes_only_first_occurrence() {
    let instruction = "[INST] hello [/INST]";
    let raw = format!("{instruction}middle{instruction}");
    assert_eq!(clean_response(&raw, instruction), format!("middle{instruction}"));
}
