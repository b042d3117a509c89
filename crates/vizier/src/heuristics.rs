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

use crate::dataset::{ColumnKind, Dataset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
    Scatter,
    Table,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Table => "table",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the dataset columns whose names occur in the generated text,
/// preserving dataset column order. Case-sensitive substring containment;
/// backslashes are stripped first since some backends escape their output.
/// A column name that sits inside a longer token still matches.
pub fn match_columns(dataset: &Dataset, generated_text: &str) -> Vec<String> {
    let text = generated_text.replace('\\', "");
    dataset
        .columns()
        .iter()
        .filter(|col| text.contains(&col.name))
        .map(|col| col.name.clone())
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisSplit {
    pub label_columns: Vec<String>,
    pub value_columns: Vec<String>,
}

/// Partitions matched columns by their declared kind, preserving order
/// within each group. Classification never depends on the generated text.
pub fn classify_axes(dataset: &Dataset, matched: &[String]) -> AxisSplit {
    let mut split = AxisSplit::default();
    for name in matched {
        match dataset.column(name).map(|col| col.kind) {
            Some(ColumnKind::Categorical) => split.label_columns.push(name.clone()),
            Some(ColumnKind::Numeric) => split.value_columns.push(name.clone()),
            None => {}
        }
    }
    split
}

/// Keyword spotting over the generated text, first match wins. A two-column
/// dataset always charts as bar, overriding whatever the model suggested;
/// that precedence is deliberate and must not be reordered.
pub fn select_chart_kind(dataset: &Dataset, generated_text: &str) -> ChartKind {
    if dataset.column_count() == 2 {
        return ChartKind::Bar;
    }
    let text = generated_text.to_lowercase();
    if text.contains("scatter") {
        ChartKind::Scatter
    } else if text.contains("pie") {
        ChartKind::Pie
    } else if text.contains("line") {
        ChartKind::Line
    } else {
        ChartKind::Bar
    }
}
