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

mod chart_view;

use clap::Parser;
use eframe::egui;
use std::sync::{mpsc, Arc};
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vizier::{
    ChartOutcome, ChartPipeline, DataConfig, Dataset, HuggingFaceClient, InferenceConfig,
};

// Placeholder filters kept from the original layout; not wired to anything.
const FILTER_OPTIONS: [&str; 2] = ["option1", "option2"];

#[derive(Parser, Debug)]
#[command(
    name = "vizier-dashboard",
    about = "Ask a question about a dataset and get a chart back"
)]
struct Args {
    /// CSV path or URL, overrides VIZIER_DATA_SOURCE
    #[arg(long)]
    data: Option<String>,
    /// Max characters per inference request, overrides VIZIER_MAX_CHARS_PER_REQUEST
    #[arg(long)]
    chunk_size: Option<usize>,
}

fn main() -> std::result::Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Generative AI Dashboard"),
        ..Default::default()
    };
    eframe::run_native(
        "Generative AI Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(args)))),
    )
}

struct DashboardApp {
    runtime: Arc<Runtime>,
    pipeline: Option<Arc<ChartPipeline>>,
    dataset_summary: String,
    question: String,
    filter_one: Option<String>,
    filter_two: Option<String>,
    outcome: Option<ChartOutcome>,
    error_message: Option<String>,
    is_processing: bool,
    progress_message: String,
    rx: Option<mpsc::Receiver<vizier::Result<ChartOutcome>>>,
}

impl DashboardApp {
    fn new(args: Args) -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create Tokio runtime"));
        let mut error_message = None;
        let mut dataset_summary = String::new();

        let pipeline = match Self::build_pipeline(&args) {
            Ok(pipeline) => {
                let dataset = pipeline.dataset();
                dataset_summary = format!(
                    "{} columns, {} rows",
                    dataset.column_count(),
                    dataset.row_count()
                );
                Some(Arc::new(pipeline))
            }
            Err(err) => {
                error_message = Some(format!("[{}] {err}", err.category()));
                None
            }
        };

        Self {
            runtime,
            pipeline,
            dataset_summary,
            question: String::new(),
            filter_one: None,
            filter_two: None,
            outcome: None,
            error_message,
            is_processing: false,
            progress_message: String::new(),
            rx: None,
        }
    }

    fn build_pipeline(args: &Args) -> vizier::Result<ChartPipeline> {
        let inference = InferenceConfig::from_env()?;
        let source = args
            .data
            .clone()
            .unwrap_or_else(|| DataConfig::from_env().source);
        let dataset = Arc::new(Dataset::from_source(&source)?);
        info!(
            source = %source,
            columns = dataset.column_count(),
            rows = dataset.row_count(),
            "dataset loaded"
        );
        let client = HuggingFaceClient::new(&inference)?;
        let max_chars = args.chunk_size.unwrap_or(inference.max_chars_per_request);
        Ok(ChartPipeline::new(dataset, Box::new(client)).with_max_chars_per_request(max_chars))
    }

    fn submit_question(&mut self) {
        let Some(pipeline) = &self.pipeline else {
            return;
        };
        if self.is_processing {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let pipeline = Arc::clone(pipeline);
        let question = self.question.clone();
        self.runtime.spawn(async move {
            let result = pipeline.run(&question).await;
            let _ = tx.send(result);
        });

        self.rx = Some(rx);
        self.is_processing = true;
        self.progress_message = "Asking the model...".to_string();
    }

    fn poll_pipeline(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.rx else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(outcome)) => {
                self.outcome = Some(outcome);
                self.error_message = None;
                self.is_processing = false;
                self.rx = None;
            }
            Ok(Err(err)) => {
                self.error_message = Some(format!("[{}] {err}", err.category()));
                self.is_processing = false;
                self.rx = None;
            }
            Err(mpsc::TryRecvError::Empty) => {
                ctx.request_repaint_after(Duration::from_millis(100));
            }
            Err(mpsc::TryRecvError::Disconnected) => {
                self.error_message = Some("pipeline worker exited without a result".to_string());
                self.is_processing = false;
                self.rx = None;
            }
        }
    }

    fn sidebar(&mut self, ui: &mut egui::Ui) {
        ui.heading("Vizier");
        ui.separator();

        ui.label("Filter 1");
        egui::ComboBox::from_id_salt("filter-1")
            .selected_text(self.filter_one.as_deref().unwrap_or("all"))
            .show_ui(ui, |ui| {
                for option in FILTER_OPTIONS {
                    ui.selectable_value(&mut self.filter_one, Some(option.to_string()), option);
                }
            });

        ui.add_space(8.0);
        ui.label("Filter 2");
        egui::ComboBox::from_id_salt("filter-2")
            .selected_text(self.filter_two.as_deref().unwrap_or("all"))
            .show_ui(ui, |ui| {
                for option in FILTER_OPTIONS {
                    ui.selectable_value(&mut self.filter_two, Some(option.to_string()), option);
                }
            });

        ui.add_space(16.0);
        let can_apply = self.pipeline.is_some() && !self.is_processing;
        if ui
            .add_enabled(can_apply, egui::Button::new("Apply").min_size([120.0, 28.0].into()))
            .clicked()
        {
            self.submit_question();
        }
        ui.separator();
    }

    fn chart_area(&self, ui: &mut egui::Ui) {
        if let Some(ref error) = self.error_message {
            ui.colored_label(egui::Color32::RED, "Error:");
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.monospace(error);
            });
            return;
        }

        if self.is_processing {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(&self.progress_message);
            });
            return;
        }

        let Some(ref outcome) = self.outcome else {
            ui.centered_and_justified(|ui| {
                ui.label("Type a question below and press Apply");
            });
            return;
        };

        ui.horizontal(|ui| {
            ui.strong(format!("Chart: {}", outcome.spec.kind));
            ui.separator();
            ui.label(format!("labels: {}", outcome.spec.label_columns.join(", ")));
            ui.separator();
            ui.label(format!("values: {}", outcome.spec.value_columns.join(", ")));
        });

        egui::CollapsingHeader::new("Model suggestion")
            .default_open(false)
            .show(ui, |ui| {
                ui.label(&outcome.generated_text);
            });

        ui.separator();
        chart_view::figure_view(ui, &outcome.figure);
        ui.separator();

        egui::CollapsingHeader::new("Figure JSON")
            .default_open(false)
            .show(ui, |ui| {
                let json = serde_json::to_string_pretty(&outcome.figure.to_json())
                    .unwrap_or_default();
                egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                    ui.monospace(json);
                });
            });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pipeline(ctx);

        egui::SidePanel::left("sidebar")
            .default_width(200.0)
            .show(ctx, |ui| self.sidebar(ui));

        egui::TopBottomPanel::bottom("question_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let input = egui::TextEdit::singleline(&mut self.question)
                    .hint_text("Enter text here...")
                    .desired_width(ui.available_width() - 160.0);
                let response = ui.add(input);
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.submit_question();
                }
                ui.label(&self.dataset_summary);
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Generative AI Dashboard");
            ui.separator();
            self.chart_area(ui);
        });
    }
}
