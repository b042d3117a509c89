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
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use super::CompletionClient;
use crate::config::InferenceConfig;
use crate::error::InferenceError;

const MAX_GENERATION_LENGTH: u32 = 10_000;

#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: Client,
    endpoint: String,
    api_token: String,
    timeout: Duration,
}

impl HuggingFaceClient {
    pub fn new(config: &InferenceConfig) -> Result<Self, InferenceError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InferenceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_token: config.api_token.clone(),
            timeout,
        })
    }

    fn build_payload(input: &str) -> Value {
        json!({
            "inputs": input,
            "parameters": { "max_length": MAX_GENERATION_LENGTH }
        })
    }

    fn parse_generated_text(body: &Value) -> Result<String, InferenceError> {
        body.get(0)
            .and_then(|entry| entry.get("generated_text"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                InferenceError::MalformedResponse(
                    "expected an array whose first element carries a 'generated_text' string"
                        .to_string(),
                )
            })
    }
}

#[async_trait]
impl CompletionClient for HuggingFaceClient {
    async fn generate(&self, input: &str) -> Result<String, InferenceError> {
        let response = tokio::time::timeout(
            self.timeout,
            self.client
                .post(&self.endpoint)
                .header("Authorization", format!("Bearer {}", self.api_token))
                .header("Content-Type", "application/json")
                .json(&Self::build_payload(input))
                .send(),
        )
        .await
        .map_err(|_| InferenceError::Timeout {
            seconds: self.timeout.as_secs(),
        })?
        .map_err(|e| {
            // reqwest enforces the same deadline internally; either side
            // tripping it is the same timeout.
            if e.is_timeout() {
                InferenceError::Timeout {
                    seconds: self.timeout.as_secs(),
                }
            } else {
                InferenceError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| InferenceError::MalformedResponse(e.to_string()))?;
        Self::parse_generated_text(&body)
    }

    fn provider_name(&self) -> &'static str {
        "huggingface"
    }
}
