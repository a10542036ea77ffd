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

//! src/core/types.rs
//!
//! Core type definitions for Dockerfile command analysis
//!
//! This module defines the fundamental types used throughout the analyzer:
//! - `Severity`: How serious a finding is (Low → Critical)
//! - `Status`: Whether a check passed or failed
//! - `Finding`: A single reported issue with remediation text
//! - `Source` / `LineSpan` / `SourceLocation`: Where an instruction came from
//!
//! Findings are plain data. They implement serialization so any downstream
//! reporter (console, JSON, aggregation) can consume them unchanged.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a finding
///
/// Ordered from least to most serious so reports can compute the
/// highest severity seen and filter by threshold.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Cosmetic or informational
    Low = 0,
    /// Likely to cause unexpected behaviour at runtime
    Medium = 1,
    /// Likely to break the image under the platform's security model
    High = 2,
    /// The command could not be understood at all
    Critical = 3,
}

impl Severity {
    /// All severities in ascending order
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Error returned when a severity name is not recognised
#[derive(Debug, Error, Eq, PartialEq)]
#[error("Unknown severity '{0}' (expected low, medium, high or critical)")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}

/// Outcome of a single check
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pass => write!(f, "pass"),
            Status::Fail => write!(f, "fail"),
        }
    }
}

/// A single reported issue
///
/// The description always embeds the offending command and the
/// formatted `SourceLocation`, so a finding is self-contained once
/// it leaves the analyzer.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Finding {
    /// Short rule title (e.g., "Permission set")
    pub title: String,
    /// Pass or fail
    pub status: Status,
    /// How serious the issue is
    pub severity: Severity,
    /// Human-readable explanation and remediation
    pub description: String,
}

impl Finding {
    /// Creates a failing finding
    pub fn failed(title: &str, severity: Severity, description: String) -> Self {
        Self {
            title: title.to_string(),
            status: Status::Fail,
            severity,
            description,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.severity, self.title, self.status, self.description
        )
    }
}

/// Ordered findings for one instruction, in sub-command order
pub type EvaluationResult = Vec<Finding>;

/// Where an instruction's text was read from
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// A Dockerfile on disk
    File(PathBuf),
    /// Standard input
    Stdin,
    /// A value passed directly by the caller (e.g., `eval` on the CLI)
    Inline,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Stdin => write!(f, "<stdin>"),
            Source::Inline => write!(f, "<inline>"),
        }
    }
}

/// Physical lines covered by an instruction (1-based, inclusive)
///
/// An instruction continued with a trailing backslash spans more
/// than one line.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    /// A span covering exactly one line
    pub fn single(line: usize) -> Self {
        Self {
            start: line,
            end: line,
        }
    }

    /// A span from `start` to `end`; `end` is clamped so it never precedes `start`
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }
}

impl fmt::Display for LineSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "line {}", self.start)
        } else {
            write!(f, "lines {}-{}", self.start, self.end)
        }
    }
}

/// Origin of an instruction: file plus line span
///
/// Opaque to the rules beyond its `Display` form, which renders the
/// "at file X, line Y" fragment embedded in finding descriptions.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct SourceLocation {
    pub source: Source,
    pub lines: LineSpan,
}

impl SourceLocation {
    pub fn new(source: Source, lines: LineSpan) -> Self {
        Self { source, lines }
    }

    /// Location for a value supplied directly by the caller
    pub fn inline() -> Self {
        Self::new(Source::Inline, LineSpan::single(1))
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at file {}, {}", self.source, self.lines)
    }
}
