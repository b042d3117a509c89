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

use crate::config::DEFAULT_MAX_CHARS_PER_REQUEST;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::figure::{render_or_table, ChartSpec, Figure};
use crate::heuristics::{classify_axes, match_columns, select_chart_kind};
use crate::inference::{query_chunked, CompletionClient};
use crate::prompt::{build_instruction, clean_response};
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct ChartOutcome {
    pub generated_text: String,
    pub spec: ChartSpec,
    pub figure: Figure,
}

/// One question in, one chart out. Holds the process-wide dataset snapshot
/// and the remote completion client; everything else is created fresh per
/// invocation.
pub struct ChartPipeline {
    dataset: Arc<Dataset>,
    client: Box<dyn CompletionClient>,
    max_chars_per_request: usize,
}

impl ChartPipeline {
    pub fn new(dataset: Arc<Dataset>, client: Box<dyn CompletionClient>) -> Self {
        Self {
            dataset,
            client,
            max_chars_per_request: DEFAULT_MAX_CHARS_PER_REQUEST,
        }
    }

    pub fn with_max_chars_per_request(mut self, max_chars: usize) -> Self {
        self.max_chars_per_request = max_chars.max(1);
        self
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// Remote failure aborts the run with no chart produced; every parse
    /// mismatch downstream of the network degrades locally instead.
    #[instrument(skip(self), fields(provider = self.client.provider_name()))]
    pub async fn run(&self, question: &str) -> Result<ChartOutcome> {
        let names = self.dataset.column_names();
        let instruction = build_instruction(&names, question);

        let raw = query_chunked(
            self.client.as_ref(),
            &instruction,
            self.max_chars_per_request,
        )
        .await?;
        let generated_text = clean_response(&raw, &instruction);
        debug!(length = generated_text.len(), "cleaned generated text");

        let matched = match_columns(&self.dataset, &generated_text);
        let axes = classify_axes(&self.dataset, &matched);
        let kind = select_chart_kind(&self.dataset, &generated_text);
        debug!(kind = kind.as_str(), matched = matched.len(), "resolved chart spec");

        let spec = ChartSpec {
            kind,
            label_columns: axes.label_columns,
            value_columns: axes.value_columns,
        };
        let figure = render_or_table(&self.dataset, &spec);

        Ok(ChartOutcome {
            generated_text,
            spec,
            figure,
        })
    }
}
