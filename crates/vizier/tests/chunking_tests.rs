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

use async_trait::async_trait;
use std::sync::Mutex;
use vizier::inference::{query_chunked, split_chunks, CompletionClient};
use vizier::InferenceError;

struct EchoClient {
    calls: Mutex<Vec<String>>,
}

impl EchoClient {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CompletionClient for EchoClient {
    async fn generate(&self, input: &str) -> Result<String, InferenceError> {
        self.calls.lock().unwrap().push(input.to_string());
        Ok(format!("<{input}>"))
    }

    fn provider_name(&self) -> &'static str {
        "echo"
    }
}

struct FailingClient {
    fail_on_call: usize,
    calls: Mutex<usize>,
}

#[async_trait]
impl CompletionClient for FailingClient {
    async fn generate(&self, _input: &str) -> Result<String, InferenceError> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        if *calls >= self.fail_on_call {
            Err(InferenceError::Network("connection reset".to_string()))
        } else {
            Ok("fragment".to_string())
        }
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }
}

#[test]
fn test_split_produces_ceil_len_over_chunk_size_chunks() {
    assert_eq!(split_chunks("abcdefghij", 3).len(), 4);
    assert_eq!(split_chunks("abcdefghi", 3).len(), 3);
    assert_eq!(split_chunks("ab", 3).len(), 1);
    assert_eq!(split_chunks("", 3).len(), 0);
}

#[test]
fn test_split_chunks_are_contiguous_and_ordered() {
    let text = "the quick brown fox jumps over the lazy dog";
    let chunks = split_chunks(text, 7);
    assert_eq!(chunks.concat(), text);
    for chunk in &chunks[..chunks.len() - 1] {
        assert_eq!(chunk.chars().count(), 7);
    }
}

#[test]
fn test_split_counts_characters_not_bytes() {
    let text = "héllo wörld déjà vu";
    let chunks = split_chunks(text, 4);
    assert_eq!(chunks.concat(), text);
    assert_eq!(
        chunks.len(),
        text.chars().count().div_ceil(4),
        "chunk count must follow character length"
    );
}

#[tokio::test]
async fn test_one_call_per_chunk_joined_in_order() {
    let client = EchoClient::new();
    let text = "abcdefghijklmnopqrstuvwxy";
    let joined = query_chunked(&client, text, 10).await.unwrap();

    let calls = client.calls.lock().unwrap();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls.as_slice(), ["abcdefghij", "klmnopqrst", "uvwxy"]);
    assert_eq!(joined, "<abcdefghij><klmnopqrst><uvwxy>");
}

#[tokio::test]
async fn test_short_instruction_is_a_single_call() {
    let client = EchoClient::new();
    let joined = query_chunked(&client, "short", 1000).await.unwrap();
    assert_eq!(client.calls.lock().unwrap().len(), 1);
    assert_eq!(joined, "<short>");
}

#[tokio::test]
async fn test_any_chunk_failure_fails_the_whole_operation() {
    let client = FailingClient {
        fail_on_call: 2,
        calls: Mutex::new(0),
    };
    let result = query_chunked(&client, &"x".repeat(30), 10).await;
    assert!(matches!(result, Err(InferenceError::Network(_))));
    // The failing second call stops dispatch; no partial result leaks out.
    assert_eq!(*client.calls.lock().unwrap(), 2);
}
