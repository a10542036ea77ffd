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

//! Per-intent command rules
//!
//! Each rule analyses one sub-command whose intent the classifier has
//! already decided, and produces at most one finding.
//!
//! | Rule | Intent | Title | Severity |
//! |------|--------|-------|----------|
//! | `PermissionRule` | PermissionChange | Permission set / Syntax error | Medium / Critical |
//! | `OwnershipRule` | OwnershipChange | Owner set | Medium |
//! | `PrivilegeEscalationRule` | PrivilegeEscalation | Use of sudo/su command | Medium |
//!
//! All three encode the same platform constraint: containers run under an
//! arbitrary UID that is always a member of the root group (GID 0), so
//! files must be accessible through the group, never through a specific
//! user.

use crate::core::classifier::Intent;
use crate::core::types::{Finding, SourceLocation};

pub mod escalation;
pub mod ownership;
pub mod patterns;
pub mod permission;

pub use escalation::PrivilegeEscalationRule;
pub use ownership::OwnershipRule;
pub use permission::PermissionRule;

/// Analysis routine for one command intent
///
/// Implementors must be pure: the same command and location always
/// produce the same result.
pub trait CommandRule: Send + Sync {
    /// The intent this rule handles
    fn intent(&self) -> Intent;

    /// Analyses a sub-command already classified as `self.intent()`
    ///
    /// Returns `None` when the command is compliant or the rule cannot
    /// tell (malformed input is never an error here).
    fn analyze(&self, command: &str, location: &SourceLocation) -> Option<Finding>;
}

/// The rules applied to RUN sub-commands, one per classified intent
pub fn default_rules() -> Vec<Box<dyn CommandRule>> {
    vec![
        Box::new(PermissionRule::new()),
        Box::new(OwnershipRule::new()),
        Box::new(PrivilegeEscalationRule::new()),
    ]
}

#[cfg(test)]
mod tests;
