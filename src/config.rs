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

//! Analyzer settings
//!
//! The binary fills these from command-line flags; library callers can
//! build them directly or start from `Default`.

use clap::ValueEnum;

use crate::core::types::Severity;

/// How findings are printed
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Coloured, human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Output and exit-status settings for an analysis run
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnalyzerConfig {
    /// Output format
    pub format: OutputFormat,
    /// Findings below this severity are not reported
    pub min_severity: Severity,
    /// Exit with failure when a reported finding reaches this severity
    pub fail_on: Severity,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            min_severity: Severity::Low,
            fail_on: Severity::Medium,
        }
    }
}
