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

//! OpenShift Dockerfile Analyzer
//!
//! Flags Dockerfile RUN commands that are likely to break, or to weaken
//! security, when the image runs on OpenShift: under an arbitrarily
//! assigned, non-root user ID that always belongs to the root group (0).
//!
//! # Checks
//!
//! - **Permission set:** `chmod` modes whose group digit is not `7`
//! - **Owner set:** `chown` to a group other than `root`/`0`
//! - **Use of sudo/su command:** any privilege escalation
//! - **Syntax error:** `chmod` arguments that cannot be understood
//!
//! # Architecture
//!
//! - **`core`:** Finding types, sub-command splitting, intent classification
//! - **`rules`:** One analysis routine per intent
//! - **`analyzer`:** The RUN coordinator and instruction dispatch
//! - **`dockerfile`:** Reads Dockerfile text into instructions
//! - **`report`:** Aggregates findings across instructions
//!
//! # Examples
//!
//! ## Evaluating one RUN value
//!
//! ```
//! use openshift_dockerfile_analyzer::core::types::{Severity, SourceLocation};
//!
//! let findings = openshift_dockerfile_analyzer::evaluate(
//!     "sudo chmod 777 /app && chown 0:0 /app",
//!     &SourceLocation::inline(),
//! );
//!
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].title, "Use of sudo/su command");
//! assert_eq!(findings[0].severity, Severity::Medium);
//! ```
//!
//! ## Analyzing a Dockerfile
//!
//! ```no_run
//! use openshift_dockerfile_analyzer::{analyzer::Analyzer, dockerfile};
//! use std::path::Path;
//!
//! let instructions = dockerfile::load(Path::new("Dockerfile"))?;
//! let report = Analyzer::new().analyze(&instructions);
//! for entry in report.entries() {
//!     println!("{}", entry.finding);
//! }
//! # Ok::<(), openshift_dockerfile_analyzer::error::AnalyzerError>(())
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

use std::sync::LazyLock;

pub mod analyzer;
pub mod config;
pub mod core;
pub mod dockerfile;
pub mod error;
pub mod report;
pub mod rules;

// Re-export commonly used types for convenience
pub use analyzer::{Analyzer, InstructionRule, Run};
pub use crate::core::{EvaluationResult, Finding, Severity, SourceLocation, Status};

static RUN: LazyLock<Run> = LazyLock::new(Run::new);

/// Evaluates one RUN value with the built-in rules
///
/// Never fails. Returns the findings in sub-command order; an empty
/// result means nothing was flagged.
pub fn evaluate(value: &str, location: &SourceLocation) -> EvaluationResult {
    RUN.evaluate(value, location)
}
