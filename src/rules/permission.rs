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

//! `chmod` analysis
//!
//! The group digit of a numeric mode decides compliance. Under an arbitrary
//! UID the owner digit applies to nobody in particular, so what counts is
//! what the root group can do:
//! - `7` (rwx): compliant
//! - `6` (rw-): flagged, propose `7` in case the file is executable
//! - anything else: flagged, propose `7` or `6`
//!
//! Modes that are not exactly three digits (symbolic modes, setuid
//! prefixes, missing operands) are reported as a syntax error.

use regex::Regex;

use crate::core::classifier::Intent;
use crate::core::types::{Finding, Severity, SourceLocation};
use crate::rules::{patterns, CommandRule};

/// Finding title for a non-compliant group digit
pub const PERMISSION_SET: &str = "Permission set";
/// Finding title for an unparseable chmod
pub const SYNTAX_ERROR: &str = "Syntax error";

/// Checks that chmod modes grant full access to the root group
pub struct PermissionRule {
    mode_pattern: Regex,
}

impl Default for PermissionRule {
    fn default() -> Self {
        Self {
            mode_pattern: patterns::build_chmod_mode_pattern(),
        }
    }
}

impl PermissionRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts the numeric mode argument, if there is one
    ///
    /// Returns `None` when no mode/operand pair is found or the mode is
    /// not purely numeric.
    pub fn extract_mode<'a>(&self, command: &'a str) -> Option<&'a str> {
        let mode = self.mode_pattern.captures(command)?.get(1)?.as_str();
        mode.chars().all(|c| c.is_ascii_digit()).then_some(mode)
    }

    fn syntax_error(command: &str, location: &SourceLocation) -> Finding {
        Finding::failed(
            SYNTAX_ERROR,
            Severity::Critical,
            format!(
                "unable to fetch args of chmod command '{}' {}. Is it correct?",
                command.trim(),
                location
            ),
        )
    }
}

/// Builds the remediation text for a mode whose group digit is not `7`
///
/// `mode` must be three ASCII digits.
pub fn proposal(mode: &str) -> String {
    let (owner, rest) = mode.split_at(1);
    let (group, other) = rest.split_at(1);

    let mut proposal = format!(
        "Is it an executable file? Try updating permissions to {}7{}",
        owner, other
    );
    if group != "6" {
        proposal.push_str(&format!(" otherwise set it to {}6{}", owner, other));
    }
    proposal
}

impl CommandRule for PermissionRule {
    fn intent(&self) -> Intent {
        Intent::PermissionChange
    }

    fn analyze(&self, command: &str, location: &SourceLocation) -> Option<Finding> {
        let Some(mode) = self.extract_mode(command) else {
            tracing::debug!(command, "chmod without a numeric mode");
            return Some(Self::syntax_error(command, location));
        };

        if mode.len() != 3 {
            tracing::debug!(command, mode, "chmod mode is not three digits");
            return Some(Self::syntax_error(command, location));
        }

        if &mode[1..2] == "7" {
            return None;
        }

        Some(Finding::failed(
            PERMISSION_SET,
            Severity::Medium,
            format!(
                "permission set on {} {} could cause an unexpected behavior. {}\n\
                 Explanation - in OpenShift, directories and files need to be read/writable by the root group \
                 and files that must be executed should have group execute permissions",
                command.trim(),
                location,
                proposal(mode)
            ),
        ))
    }
}
