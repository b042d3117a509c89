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

use std::io::Cursor;
use vizier::figure::{attempt_render, render_or_table, ChartSpec};
use vizier::heuristics::ChartKind;
use vizier::{Dataset, RenderError, ScatterMode, Trace};

fn dataset() -> Dataset {
    let csv = "Region,Product,Sales,Units\n\
               North,Widget,120.5,3\n\
               South,Gadget,98.0,2\n\
               East,Widget,101.25,4\n";
    Dataset::from_reader(Cursor::new(csv)).unwrap()
}

fn spec(kind: ChartKind, labels: &[&str], values: &[&str]) -> ChartSpec {
    ChartSpec {
        kind,
        label_columns: labels.iter().map(|s| s.to_string()).collect(),
        value_columns: values.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_bar_uses_first_label_as_x_and_each_value_as_series() {
    let ds = dataset();
    let figure = attempt_render(&ds, &spec(ChartKind::Bar, &["Region", "Product"], &["Sales", "Units"]))
        .unwrap();
    assert_eq!(figure.data.len(), 2);
    match &figure.data[0] {
        Trace::Bar { name, x, y } => {
            assert_eq!(name, "Sales");
            assert_eq!(x.as_slice(), ["North", "South", "East"]);
            assert_eq!(y.as_slice(), [120.5, 98.0, 101.25]);
        }
        other => panic!("expected a bar trace, got {other:?}"),
    }
    match &figure.data[1] {
        Trace::Bar { name, .. } => assert_eq!(name, "Units"),
        other => panic!("expected a bar trace, got {other:?}"),
    }
}

#[test]
fn test_pie_uses_first_label_and_first_value_with_hole() {
    let ds = dataset();
    let figure =
        attempt_render(&ds, &spec(ChartKind::Pie, &["Region", "Product"], &["Sales", "Units"]))
            .unwrap();
    assert_eq!(figure.data.len(), 1);
    match &figure.data[0] {
        Trace::Pie {
            labels,
            values,
            hole,
        } => {
            assert_eq!(labels.as_slice(), ["North", "South", "East"]);
            assert_eq!(values.as_slice(), [120.5, 98.0, 101.25]);
            assert_eq!(*hole, 0.4);
        }
        other => panic!("expected a pie trace, got {other:?}"),
    }
}

#[test]
fn test_line_and_scatter_modes() {
    let ds = dataset();
    let line = attempt_render(&ds, &spec(ChartKind::Line, &["Region"], &["Sales"])).unwrap();
    match &line.data[0] {
        Trace::Scatter { mode, .. } => assert_eq!(*mode, ScatterMode::Lines),
        other => panic!("expected a scatter trace, got {other:?}"),
    }

    let scatter = attempt_render(&ds, &spec(ChartKind::Scatter, &["Region"], &["Sales"])).unwrap();
    match &scatter.data[0] {
        Trace::Scatter { mode, .. } => assert_eq!(*mode, ScatterMode::Markers),
        other => panic!("expected a scatter trace, got {other:?}"),
    }
}

#[test]
fn test_pie_without_values_is_a_render_error() {
    let ds = dataset();
    let err = attempt_render(&ds, &spec(ChartKind::Pie, &["Region"], &[])).unwrap_err();
    assert!(matches!(err, RenderError::NoValueColumns { kind: "pie" }));
}

#[test]
fn test_bar_without_labels_is_a_render_error() {
    let ds = dataset();
    let err = attempt_render(&ds, &spec(ChartKind::Bar, &[], &["Sales"])).unwrap_err();
    assert!(matches!(err, RenderError::NoLabelColumns { kind: "bar" }));
}

#[test]
fn test_line_with_multiple_labels_degrades_to_table() {
    let ds = dataset();
    let err =
        attempt_render(&ds, &spec(ChartKind::Line, &["Region", "Product"], &["Sales"]))
            .unwrap_err();
    assert!(matches!(
        err,
        RenderError::TooManyLabelColumns { kind: "line", count: 2 }
    ));

    let figure = render_or_table(&ds, &spec(ChartKind::Scatter, &["Region", "Product"], &["Sales"]));
    assert!(matches!(figure.data[0], Trace::Table { .. }));
}

#[test]
fn test_fallback_produces_table_without_raising() {
    let ds = dataset();
    let figure = render_or_table(&ds, &spec(ChartKind::Pie, &["Region"], &[]));
    match &figure.data[0] {
        Trace::Table { header, cells } => {
            assert_eq!(header.as_slice(), ["Region", "Product", "Sales", "Units"]);
            assert_eq!(cells.len(), 4);
            assert_eq!(cells[0].as_slice(), ["North", "South", "East"]);
        }
        other => panic!("expected the table fallback, got {other:?}"),
    }
}

#[test]
fn test_unknown_column_falls_back_to_table() {
    let ds = dataset();
    let figure = render_or_table(&ds, &spec(ChartKind::Bar, &["Missing"], &["Sales"]));
    assert!(matches!(figure.data[0], Trace::Table { .. }));
}

#[test]
fn test_table_kind_always_renders() {
    let ds = dataset();
    let figure = attempt_render(&ds, &spec(ChartKind::Table, &[], &[])).unwrap();
    assert!(matches!(figure.data[0], Trace::Table { .. }));
}

#[test]
fn test_figure_serialises_as_plotly_document() {
    let ds = dataset();
    let figure = attempt_render(&ds, &spec(ChartKind::Bar, &["Region"], &["Sales"])).unwrap();
    let json = figure.to_json();
    assert_eq!(json["data"][0]["type"], "bar");
    assert_eq!(json["data"][0]["x"][0], "North");
    assert!(json["layout"].is_object());
}
