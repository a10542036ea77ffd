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

//! Instruction-level analysis
//!
//! An `InstructionRule` evaluates the value of one Dockerfile instruction
//! keyword. `Run` is the RUN implementation; other instructions would get
//! their own implementor and register with the same `Analyzer`.
//!
//! Nothing here keeps state between calls. Evaluating one instruction
//! never affects another, so callers may fan instructions out across
//! threads freely.

use std::collections::HashMap;

use crate::core::types::{EvaluationResult, SourceLocation};
use crate::dockerfile::Instruction;
use crate::report::Report;

pub mod run;

pub use run::Run;

/// Analysis for one Dockerfile instruction keyword
pub trait InstructionRule: Send + Sync {
    /// Upper-case instruction keyword this rule handles (e.g., "RUN")
    fn instruction(&self) -> &'static str;

    /// Evaluates an instruction's raw value
    fn evaluate(&self, value: &str, location: &SourceLocation) -> EvaluationResult;
}

/// Dispatches instructions to the rule registered for their keyword
pub struct Analyzer {
    rules: HashMap<&'static str, Box<dyn InstructionRule>>,
}

impl Default for Analyzer {
    fn default() -> Self {
        let mut analyzer = Self::empty();
        analyzer.register(Box::new(Run::new()));
        analyzer
    }
}

impl Analyzer {
    /// Creates an analyzer with every built-in instruction rule
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with no rules registered
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Registers a rule, replacing any rule for the same keyword
    pub fn register(&mut self, rule: Box<dyn InstructionRule>) {
        self.rules.insert(rule.instruction(), rule);
    }

    /// Returns true if some rule handles `keyword` (case-insensitive)
    pub fn handles(&self, keyword: &str) -> bool {
        self.rules.contains_key(keyword.to_ascii_uppercase().as_str())
    }

    /// Evaluates a single instruction
    ///
    /// Instructions without a registered rule produce no findings.
    pub fn evaluate(&self, keyword: &str, value: &str, location: &SourceLocation) -> EvaluationResult {
        match self.rules.get(keyword.to_ascii_uppercase().as_str()) {
            Some(rule) => rule.evaluate(value, location),
            None => EvaluationResult::new(),
        }
    }

    /// Evaluates every instruction and collects the findings into a report
    pub fn analyze(&self, instructions: &[Instruction]) -> Report {
        let mut report = Report::new();
        for instruction in instructions {
            let findings = self.evaluate(&instruction.keyword, &instruction.value, &instruction.location);
            report.extend(&instruction.keyword, findings);
        }

        tracing::info!(
            instructions = instructions.len(),
            findings = report.len(),
            "analysis complete"
        );
        report
    }
}

#[cfg(test)]
mod tests;
