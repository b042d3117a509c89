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

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};
use vizier::{Figure, ScatterMode, Trace};

// Sampled from the plasma colour ramp the original dashboard used.
const PALETTE: [Color32; 8] = [
    Color32::from_rgb(13, 8, 135),
    Color32::from_rgb(84, 2, 163),
    Color32::from_rgb(139, 10, 165),
    Color32::from_rgb(185, 50, 137),
    Color32::from_rgb(219, 92, 104),
    Color32::from_rgb(244, 136, 73),
    Color32::from_rgb(254, 188, 43),
    Color32::from_rgb(240, 249, 33),
];

const MAX_TABLE_ROWS: usize = 100;
const MAX_X_LABELS: usize = 12;

pub fn figure_view(ui: &mut egui::Ui, figure: &Figure) {
    match figure.data.first() {
        None => {
            ui.label("No data to display");
        }
        Some(Trace::Table { header, cells }) => table_view(ui, header, cells),
        Some(Trace::Pie {
            labels,
            values,
            hole,
        }) => pie_view(ui, labels, values, *hole),
        Some(_) => cartesian_view(ui, &figure.data),
    }
}

fn table_view(ui: &mut egui::Ui, header: &[String], cells: &[Vec<String>]) {
    let total_rows = cells.iter().map(Vec::len).max().unwrap_or(0);
    let shown_rows = total_rows.min(MAX_TABLE_ROWS);

    egui::ScrollArea::both().show(ui, |ui| {
        egui::Grid::new("table_trace").striped(true).show(ui, |ui| {
            for name in header {
                ui.strong(name);
            }
            ui.end_row();
            for row in 0..shown_rows {
                for column in cells {
                    ui.label(column.get(row).map(String::as_str).unwrap_or(""));
                }
                ui.end_row();
            }
        });
    });

    if total_rows > shown_rows {
        ui.label(format!("Showing first {shown_rows} of {total_rows} rows"));
    }
}

fn pie_view(ui: &mut egui::Ui, labels: &[String], values: &[f64], hole: f64) {
    let total: f64 = values.iter().filter(|v| v.is_finite() && **v > 0.0).sum();
    if total <= 0.0 {
        ui.label("No positive values to chart");
        return;
    }

    ui.horizontal(|ui| {
        let (response, painter) = ui.allocate_painter(Vec2::splat(320.0), Sense::hover());
        let rect = response.rect;
        let center = rect.center();
        let radius = rect.width().min(rect.height()) * 0.45;

        let mut angle = -std::f64::consts::FRAC_PI_2;
        for (i, value) in values.iter().enumerate() {
            if !(value.is_finite() && *value > 0.0) {
                continue;
            }
            let sweep = value / total * std::f64::consts::TAU;
            let color = PALETTE[i % PALETTE.len()];
            // Fan-triangulated wedge; each triangle stays convex.
            let steps = ((sweep / 0.1).ceil() as usize).max(2);
            let mut prev = point_on(center, radius, angle);
            for step in 1..=steps {
                let a = angle + sweep * step as f64 / steps as f64;
                let next = point_on(center, radius, a);
                painter.add(Shape::convex_polygon(
                    vec![center, prev, next],
                    color,
                    Stroke::NONE,
                ));
                prev = next;
            }
            angle += sweep;
        }

        if hole > 0.0 {
            painter.circle_filled(center, radius * hole as f32, ui.visuals().panel_fill);
        }

        ui.vertical(|ui| {
            for (i, label) in labels.iter().enumerate() {
                let Some(value) = values.get(i) else { break };
                if !(value.is_finite() && *value > 0.0) {
                    continue;
                }
                ui.horizontal(|ui| {
                    let (swatch, painter) =
                        ui.allocate_painter(Vec2::splat(12.0), Sense::hover());
                    painter.rect_filled(
                        swatch.rect,
                        egui::CornerRadius::ZERO,
                        PALETTE[i % PALETTE.len()],
                    );
                    ui.label(format!("{label} ({:.1}%)", value / total * 100.0));
                });
            }
        });
    });
}

fn cartesian_view(ui: &mut egui::Ui, traces: &[Trace]) {
    let mut categories: &[String] = &[];
    let mut y_min: f64 = 0.0;
    let mut y_max = f64::NEG_INFINITY;
    let mut series: Vec<&Trace> = Vec::new();

    for trace in traces {
        match trace {
            Trace::Bar { x, y, .. } | Trace::Scatter { x, y, .. } => {
                if categories.is_empty() {
                    categories = x;
                }
                for v in y {
                    if v.is_finite() {
                        y_min = y_min.min(*v);
                        y_max = y_max.max(*v);
                    }
                }
                series.push(trace);
            }
            _ => {}
        }
    }

    if categories.is_empty() || !y_max.is_finite() {
        ui.label("Nothing to plot");
        return;
    }
    if (y_max - y_min).abs() < f64::EPSILON {
        y_max = y_min + 1.0;
    }

    let size = Vec2::new(ui.available_width().max(200.0), 360.0);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect.shrink(28.0);

    let n = categories.len().max(1);
    let slot_width = rect.width() / n as f32;
    let to_screen_y =
        |v: f64| rect.bottom() - ((v - y_min) / (y_max - y_min)) as f32 * rect.height();

    let axis_stroke = Stroke::new(1.0, Color32::GRAY);
    painter.line_segment([rect.left_bottom(), rect.right_bottom()], axis_stroke);
    painter.line_segment([rect.left_top(), rect.left_bottom()], axis_stroke);

    let series_count = series.len().max(1);
    for (si, trace) in series.iter().enumerate() {
        let color = PALETTE[si % PALETTE.len()];
        match trace {
            Trace::Bar { y, .. } => {
                let bar_width = slot_width / (series_count as f32 + 1.0);
                let baseline = to_screen_y(y_min.max(0.0));
                for (i, v) in y.iter().enumerate().take(n) {
                    if !v.is_finite() {
                        continue;
                    }
                    let x0 = rect.left() + i as f32 * slot_width + bar_width * (si as f32 + 0.5);
                    let bar = Rect::from_two_pos(
                        Pos2::new(x0, to_screen_y(*v)),
                        Pos2::new(x0 + bar_width, baseline),
                    );
                    painter.rect_filled(bar, egui::CornerRadius::ZERO, color);
                }
            }
            Trace::Scatter { y, mode, .. } => {
                let points: Vec<Pos2> = y
                    .iter()
                    .enumerate()
                    .take(n)
                    .filter(|(_, v)| v.is_finite())
                    .map(|(i, v)| {
                        Pos2::new(
                            rect.left() + (i as f32 + 0.5) * slot_width,
                            to_screen_y(*v),
                        )
                    })
                    .collect();
                match mode {
                    ScatterMode::Lines => {
                        if points.len() >= 2 {
                            painter.add(Shape::line(points, Stroke::new(2.0, color)));
                        }
                    }
                    ScatterMode::Markers => {
                        for point in points {
                            painter.circle_filled(point, 3.0, color);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    let text_color = ui.visuals().text_color();
    let label_step = n.div_ceil(MAX_X_LABELS).max(1);
    for i in (0..n).step_by(label_step) {
        painter.text(
            Pos2::new(rect.left() + (i as f32 + 0.5) * slot_width, rect.bottom() + 4.0),
            Align2::CENTER_TOP,
            &categories[i],
            FontId::proportional(10.0),
            text_color,
        );
    }
    painter.text(
        Pos2::new(rect.left() - 4.0, rect.top()),
        Align2::RIGHT_TOP,
        format!("{y_max:.1}"),
        FontId::proportional(10.0),
        text_color,
    );
    painter.text(
        Pos2::new(rect.left() - 4.0, rect.bottom()),
        Align2::RIGHT_BOTTOM,
        format!("{y_min:.1}"),
        FontId::proportional(10.0),
        text_color,
    );
}

fn point_on(center: Pos2, radius: f32, angle: f64) -> Pos2 {
    Pos2::new(
        center.x + radius * angle.cos() as f32,
        center.y + radius * angle.sin() as f32,
    )
}
