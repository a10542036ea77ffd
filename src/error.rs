// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;
use thiserror::Error;

use crate::dockerfile::ParseError;

/// Errors that can occur while loading a Dockerfile for analysis.
///
/// Evaluating instructions never fails; only getting them does.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The Dockerfile could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Standard input could not be read.
    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),
    /// The Dockerfile is not well formed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The path is not valid UTF-8 and cannot be tilde-expanded.
    #[error("Invalid path encoding: {0}")]
    InvalidPathEncoding(PathBuf),
}
