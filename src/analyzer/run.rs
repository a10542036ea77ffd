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

//! RUN instruction coordinator
//!
//! Tokenizes a RUN value, classifies each sub-command and dispatches it to
//! the rule registered for that intent. Findings come back in sub-command
//! order, at most one per sub-command.

use crate::analyzer::InstructionRule;
use crate::core::classifier::{classify, Intent};
use crate::core::tokenizer::split_commands;
use crate::core::types::{EvaluationResult, SourceLocation};
use crate::rules::{default_rules, CommandRule};

/// Analyzes RUN instructions
pub struct Run {
    rules: Vec<Box<dyn CommandRule>>,
}

impl Default for Run {
    fn default() -> Self {
        Self::with_rules(default_rules())
    }
}

impl Run {
    /// Creates a coordinator with the permission, ownership and
    /// privilege-escalation rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a coordinator with a custom rule set
    ///
    /// When two rules share an intent, the first one registered is used.
    pub fn with_rules(rules: Vec<Box<dyn CommandRule>>) -> Self {
        Self { rules }
    }

    fn rule_for(&self, intent: Intent) -> Option<&dyn CommandRule> {
        self.rules
            .iter()
            .find(|rule| rule.intent() == intent)
            .map(|rule| rule.as_ref())
    }

    /// Evaluates one RUN value
    ///
    /// # Examples
    /// ```
    /// use openshift_dockerfile_analyzer::analyzer::Run;
    /// use openshift_dockerfile_analyzer::core::types::{Severity, SourceLocation};
    ///
    /// let run = Run::new();
    /// let findings = run.evaluate("chown node:node /app && chmod 770 /app", &SourceLocation::inline());
    ///
    /// assert_eq!(findings.len(), 1);
    /// assert_eq!(findings[0].title, "Owner set");
    /// assert_eq!(findings[0].severity, Severity::Medium);
    /// ```
    pub fn evaluate(&self, value: &str, location: &SourceLocation) -> EvaluationResult {
        let mut findings = EvaluationResult::new();

        for command in split_commands(value) {
            let intent = classify(command);
            if intent == Intent::Unclassified {
                continue;
            }

            let Some(rule) = self.rule_for(intent) else {
                tracing::trace!(%intent, "no rule registered for intent");
                continue;
            };

            if let Some(finding) = rule.analyze(command, location) {
                tracing::debug!(
                    title = %finding.title,
                    severity = %finding.severity,
                    %location,
                    "RUN sub-command flagged"
                );
                findings.push(finding);
            }
        }

        findings
    }
}

impl InstructionRule for Run {
    fn instruction(&self) -> &'static str {
        "RUN"
    }

    fn evaluate(&self, value: &str, location: &SourceLocation) -> EvaluationResult {
        Run::evaluate(self, value, location)
    }
}
