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

use crate::dataset::{Column, Dataset};
use crate::error::RenderError;
use crate::heuristics::ChartKind;
use serde::{Deserialize, Serialize};
use tracing::warn;

const PIE_HOLE: f64 = 0.4;

/// The resolved rendering instruction: chart kind plus the matched columns
/// split into categorical labels and numeric values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub label_columns: Vec<String>,
    pub value_columns: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScatterMode {
    Lines,
    Markers,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie {
        labels: Vec<String>,
        values: Vec<f64>,
        hole: f64,
    },
    Bar {
        name: String,
        x: Vec<String>,
        y: Vec<f64>,
    },
    Scatter {
        name: String,
        mode: ScatterMode,
        x: Vec<String>,
        y: Vec<f64>,
    },
    Table {
        header: Vec<String>,
        cells: Vec<Vec<String>>,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Plotly-shaped figure document. The drawing surface that consumes it is
/// an external collaborator; this module only decides what goes in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(data: Vec<Trace>) -> Self {
        Self {
            data,
            layout: Layout::default(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

enum SeriesStyle {
    Bar,
    Line,
    Scatter,
}

pub fn attempt_render(dataset: &Dataset, spec: &ChartSpec) -> Result<Figure, RenderError> {
    match spec.kind {
        ChartKind::Pie => pie_figure(dataset, spec),
        ChartKind::Bar => series_figure(dataset, spec, SeriesStyle::Bar),
        ChartKind::Line => series_figure(dataset, spec, SeriesStyle::Line),
        ChartKind::Scatter => series_figure(dataset, spec, SeriesStyle::Scatter),
        ChartKind::Table => Ok(table_figure(dataset)),
    }
}

/// Fallback combinator: renders the spec, and on any render error retries
/// as a table over all dataset columns. Never fails.
pub fn render_or_table(dataset: &Dataset, spec: &ChartSpec) -> Figure {
    match attempt_render(dataset, spec) {
        Ok(figure) => figure,
        Err(err) => {
            warn!(kind = spec.kind.as_str(), error = %err, "falling back to table render");
            table_figure(dataset)
        }
    }
}

fn pie_figure(dataset: &Dataset, spec: &ChartSpec) -> Result<Figure, RenderError> {
    let names = lookup(dataset, first_label(spec)?)?;
    let values = lookup(dataset, first_value(spec)?)?;
    Ok(Figure::new(vec![Trace::Pie {
        labels: names.values().to_vec(),
        values: values.numeric_values(),
        hole: PIE_HOLE,
    }]))
}

fn series_figure(
    dataset: &Dataset,
    spec: &ChartSpec,
    style: SeriesStyle,
) -> Result<Figure, RenderError> {
    // Line and scatter take exactly one x column; more than one is the
    // table fallback's problem. Bar tolerates extras and charts the first.
    if !matches!(style, SeriesStyle::Bar) && spec.label_columns.len() > 1 {
        return Err(RenderError::TooManyLabelColumns {
            kind: spec.kind.as_str(),
            count: spec.label_columns.len(),
        });
    }

    let x = lookup(dataset, first_label(spec)?)?.values().to_vec();
    if spec.value_columns.is_empty() {
        return Err(RenderError::NoValueColumns {
            kind: spec.kind.as_str(),
        });
    }

    let mut traces = Vec::with_capacity(spec.value_columns.len());
    for name in &spec.value_columns {
        let y = lookup(dataset, name)?.numeric_values();
        traces.push(match style {
            SeriesStyle::Bar => Trace::Bar {
                name: name.clone(),
                x: x.clone(),
                y,
            },
            SeriesStyle::Line => Trace::Scatter {
                name: name.clone(),
                mode: ScatterMode::Lines,
                x: x.clone(),
                y,
            },
            SeriesStyle::Scatter => Trace::Scatter {
                name: name.clone(),
                mode: ScatterMode::Markers,
                x: x.clone(),
                y,
            },
        });
    }
    Ok(Figure::new(traces))
}

/// Tabular view of every dataset column; the render of last resort.
pub fn table_figure(dataset: &Dataset) -> Figure {
    Figure::new(vec![Trace::Table {
        header: dataset
            .columns()
            .iter()
            .map(|col| col.name.clone())
            .collect(),
        cells: dataset
            .columns()
            .iter()
            .map(|col| col.values().to_vec())
            .collect(),
    }])
}

fn first_label(spec: &ChartSpec) -> Result<&str, RenderError> {
    spec.label_columns
        .first()
        .map(String::as_str)
        .ok_or(RenderError::NoLabelColumns {
            kind: spec.kind.as_str(),
        })
}

fn first_value(spec: &ChartSpec) -> Result<&str, RenderError> {
    spec.value_columns
        .first()
        .map(String::as_str)
        .ok_or(RenderError::NoValueColumns {
            kind: spec.kind.as_str(),
        })
}

fn lookup<'a>(dataset: &'a Dataset, name: &str) -> Result<&'a Column, RenderError> {
    dataset.column(name).ok_or_else(|| RenderError::UnknownColumn {
        name: name.to_string(),
    })
}
