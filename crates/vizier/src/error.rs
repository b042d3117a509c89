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

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} environment variable not set")]
    MissingVar { var: &'static str },
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to fetch dataset from '{url}': {reason}")]
    Fetch { url: String, reason: String },
    #[error("dataset has no columns")]
    EmptyDataset,
    #[error("duplicate column name: '{name}'")]
    DuplicateColumn { name: String },
}

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("inference endpoint returned {status}: {body}")]
    Endpoint { status: u16, body: String },
    #[error("malformed response body: {0}")]
    MalformedResponse(String),
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("chart '{kind}' needs at least one label column")]
    NoLabelColumns { kind: &'static str },
    #[error("chart '{kind}' needs at least one value column")]
    NoValueColumns { kind: &'static str },
    #[error("chart '{kind}' takes a single label column, got {count}")]
    TooManyLabelColumns { kind: &'static str, count: usize },
    #[error("column '{name}' not found in dataset")]
    UnknownColumn { name: String },
}

#[derive(Error, Debug)]
pub enum VizierError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("data error: {0}")]
    Data(#[from] DataError),
    #[error("inference error: {0}")]
    Inference(#[from] InferenceError),
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, VizierError>;

impl VizierError {
    pub fn category(&self) -> &'static str {
        match self {
            VizierError::Config(_) => "Configuration",
            VizierError::Data(_) => "Data",
            VizierError::Inference(_) => "Inference",
            VizierError::Render(_) => "Render",
        }
    }
}
