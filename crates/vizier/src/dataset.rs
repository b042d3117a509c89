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

use crate::error::DataError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ColumnKind {
    Categorical,
    Numeric,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    values: Vec<String>,
}

impl Column {
    pub fn values(&self) -> &[String] {
        &self.values
    }
    pub fn numeric_values(&self) -> Vec<f64> {
        self.values
            .iter()
            .map(|v| v.trim().parse().unwrap_or(f64::NAN))
            .collect()
    }
}

/// Read-only snapshot of the tabular source. Built once at startup and
/// shared by reference into every pipeline invocation; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr.headers()?.clone();
        if headers.is_empty() {
            return Err(DataError::EmptyDataset);
        }

        let mut seen = HashSet::new();
        for name in headers.iter() {
            if !seen.insert(name.to_string()) {
                return Err(DataError::DuplicateColumn {
                    name: name.to_string(),
                });
            }
        }

        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        let mut row_count = 0;
        for record in rdr.records() {
            let record = record?;
            for (i, field) in record.iter().enumerate() {
                if let Some(column) = cells.get_mut(i) {
                    column.push(field.to_string());
                }
            }
            row_count += 1;
        }

        let columns = headers
            .iter()
            .zip(cells)
            .map(|(name, values)| Column {
                name: name.to_string(),
                kind: infer_kind(&values),
                values,
            })
            .collect();

        Ok(Self { columns, row_count })
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_csv_url(url: &str) -> Result<Self, DataError> {
        let body = reqwest::blocking::get(url)
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text)
            .map_err(|e| DataError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        Self::from_reader(Cursor::new(body))
    }

    pub fn from_source(source: &str) -> Result<Self, DataError> {
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::from_csv_url(source)
        } else {
            Self::from_csv_path(source)
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

// A column is numeric when every non-empty cell parses as f64; a column with
// no non-empty cells stays categorical.
fn infer_kind(values: &[String]) -> ColumnKind {
    let mut saw_value = false;
    for v in values {
        let v = v.trim();
        if v.is_empty() {
            continue;
        }
        saw_value = true;
        if v.parse::<f64>().is_err() {
            return ColumnKind::Categorical;
        }
    }
    if saw_value {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}
