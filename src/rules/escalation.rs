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

//! `sudo`/`su` analysis
//!
//! There is no compliant use. The runtime UID need not exist in
//! `/etc/passwd`, so switching users either fails or does something the
//! image author did not expect.

use crate::core::classifier::{is_command, Intent};
use crate::core::types::{Finding, Severity, SourceLocation};
use crate::rules::CommandRule;

/// Finding title for any privilege escalation
pub const SUDO_OR_SU: &str = "Use of sudo/su command";

/// Flags every `sudo` or `su` invocation
#[derive(Default)]
pub struct PrivilegeEscalationRule;

impl PrivilegeEscalationRule {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRule for PrivilegeEscalationRule {
    fn intent(&self) -> Intent {
        Intent::PrivilegeEscalation
    }

    fn analyze(&self, command: &str, location: &SourceLocation) -> Option<Finding> {
        let invoked = self
            .intent()
            .keywords()
            .iter()
            .any(|keyword| is_command(command, keyword));
        if !invoked {
            return None;
        }

        Some(Finding::failed(
            SUDO_OR_SU,
            Severity::Medium,
            format!(
                "sudo/su command used in '{}' {} could cause an unexpected behavior. \
                 In OpenShift, containers are run using arbitrarily assigned user ID \
                 and elevating privileges could lead to an unexpected behavior",
                command.trim(),
                location
            ),
        ))
    }
}
