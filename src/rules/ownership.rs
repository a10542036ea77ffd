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

//! `chown` analysis
//!
//! Only the group half of an `owner:group` argument matters. A chown that
//! sets the owner alone (`chown 1001 file`) is left alone.
//!
//! # Known Limitation
//! Every `word:word` in the command is a candidate and the last one wins,
//! so an unrelated colon later in the line (a path such as `/a:b`) decides
//! the group instead of the real argument.

use regex::Regex;

use crate::core::classifier::Intent;
use crate::core::types::{Finding, Severity, SourceLocation};
use crate::rules::{patterns, CommandRule};

/// Finding title for a non-root group
pub const OWNER_SET: &str = "Owner set";

/// Checks that chown assigns files to the root group
pub struct OwnershipRule {
    owner_group_pattern: Regex,
}

impl Default for OwnershipRule {
    fn default() -> Self {
        Self {
            owner_group_pattern: patterns::build_owner_group_pattern(),
        }
    }
}

impl OwnershipRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the group half of the last `owner:group` pair in `command`
    pub fn extract_group<'a>(&self, command: &'a str) -> Option<&'a str> {
        self.owner_group_pattern
            .captures_iter(command)
            .last()
            .and_then(|captures| captures.get(2))
            .map(|group| group.as_str())
    }
}

/// Returns true if `group` names the root group
///
/// The word form is case-insensitive; the numeric form must be exactly `0`.
pub fn is_root_group(group: &str) -> bool {
    group.eq_ignore_ascii_case("root") || group == "0"
}

impl CommandRule for OwnershipRule {
    fn intent(&self) -> Intent {
        Intent::OwnershipChange
    }

    fn analyze(&self, command: &str, location: &SourceLocation) -> Option<Finding> {
        let Some(group) = self.extract_group(command) else {
            tracing::debug!(command, "chown without an owner:group pair");
            return None;
        };

        if is_root_group(group) {
            return None;
        }

        Some(Finding::failed(
            OWNER_SET,
            Severity::Medium,
            format!(
                "owner set on {} {} could cause an unexpected behavior. \
                 In OpenShift the group ID must always be set to the root group (0)",
                command.trim(),
                location
            ),
        ))
    }
}
