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

//! Aggregated findings for a whole Dockerfile
//!
//! The analyzer returns findings per instruction; a `Report` collects them
//! so callers can summarise, filter, and decide on an exit status.

use serde::Serialize;

use crate::core::types::{Finding, Severity, Status};

/// A finding together with the instruction keyword that produced it
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ReportEntry {
    /// Instruction keyword (e.g., "RUN")
    pub instruction: String,
    #[serde(flatten)]
    pub finding: Finding,
}

/// All findings for one analysis run, in instruction order
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    /// Creates a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the findings of one instruction
    pub fn extend(&mut self, instruction: &str, findings: Vec<Finding>) {
        self.entries
            .extend(findings.into_iter().map(|finding| ReportEntry {
                instruction: instruction.to_string(),
                finding,
            }));
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest severity among failing findings, if any
    pub fn highest_severity(&self) -> Option<Severity> {
        self.failures().map(|entry| entry.finding.severity).max()
    }

    /// Number of findings with the given severity
    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.finding.severity == severity)
            .count()
    }

    /// Number of findings with the given status
    pub fn count_status(&self, status: Status) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.finding.status == status)
            .count()
    }

    /// Failing findings only
    pub fn failures(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.finding.status == Status::Fail)
    }

    /// Returns true if any failing finding is at or above `threshold`
    pub fn should_fail(&self, threshold: Severity) -> bool {
        self.highest_severity()
            .is_some_and(|highest| highest >= threshold)
    }

    /// Drops findings below `min`
    pub fn filter_min_severity(mut self, min: Severity) -> Self {
        self.entries.retain(|entry| entry.finding.severity >= min);
        self
    }
}
