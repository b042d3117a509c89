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

use crate::error::ConfigError;
use dotenvy::dotenv;

pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/mistralai/Mixtral-8x7B-Instruct-v0.1";
pub const DEFAULT_MAX_CHARS_PER_REQUEST: usize = 1000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_DATA_SOURCE: &str = "data/sample_sales.csv";

#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub endpoint: String,
    pub api_token: String,
    pub max_chars_per_request: usize,
    pub timeout_secs: u64,
}

impl InferenceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        let api_token = std::env::var("VIZIER_API_TOKEN").map_err(|_| ConfigError::MissingVar {
            var: "VIZIER_API_TOKEN",
        })?;

        Ok(Self {
            endpoint: std::env::var("VIZIER_INFERENCE_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            api_token,
            max_chars_per_request: std::env::var("VIZIER_MAX_CHARS_PER_REQUEST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CHARS_PER_REQUEST),
            timeout_secs: std::env::var("VIZIER_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }
}

#[derive(Debug, Clone)]
pub struct DataConfig {
    pub source: String,
}

impl DataConfig {
    pub fn from_env() -> Self {
        dotenv().ok();
        Self {
            source: std::env::var("VIZIER_DATA_SOURCE")
                .unwrap_or_else(|_| DEFAULT_DATA_SOURCE.to_string()),
        }
    }
}
