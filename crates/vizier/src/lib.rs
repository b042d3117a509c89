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

pub mod config;
pub mod dataset;
pub mod error;
pub mod figure;
pub mod heuristics;
pub mod inference;
pub mod pipeline;
pub mod prompt;

pub use config::{DataConfig, InferenceConfig};
pub use dataset::{Column, ColumnKind, Dataset};
pub use error::{ConfigError, DataError, InferenceError, RenderError, Result, VizierError};
pub use figure::{ChartSpec, Figure, Layout, ScatterMode, Trace};
pub use heuristics::{AxisSplit, ChartKind};
pub use inference::{CompletionClient, HuggingFaceClient};
pub use pipeline::{ChartOutcome, ChartPipeline};
