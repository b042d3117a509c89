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

pub mod huggingface;

use crate::error::InferenceError;
use async_trait::async_trait;
use tracing::debug;

pub use huggingface::HuggingFaceClient;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn generate(&self, input: &str) -> Result<String, InferenceError>;

    fn provider_name(&self) -> &'static str;
}

/// Splits `text` into ceil(chars / max_chars) contiguous, non-overlapping
/// substrings in original order. Counted in characters, sliced on UTF-8
/// boundaries.
pub fn split_chunks(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in text.char_indices() {
        if count == max_chars {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}

/// Sends one request per chunk, sequentially, and joins the generated
/// fragments in chunk order with no separator. Any failed call fails the
/// whole operation; partial results are never returned.
///
/// The chunks go to a stateless completion endpoint independently, so
/// cross-chunk semantic coherence is not guaranteed. That compromise is
/// inherited from the original design and kept as-is.
pub async fn query_chunked(
    client: &dyn CompletionClient,
    instruction: &str,
    max_chars: usize,
) -> Result<String, InferenceError> {
    let chunks = split_chunks(instruction, max_chars);
    debug!(
        provider = client.provider_name(),
        chunk_count = chunks.len(),
        "dispatching chunked completion request"
    );
    let mut joined = String::new();
    for chunk in chunks {
        let fragment = client.generate(chunk).await?;
        joined.push_str(&fragment);
    }
    Ok(joined)
}
