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

//! Command intent classification
//!
//! Decides what a sub-command is trying to do by looking at its leading
//! command name. Matching is whole-word and case-sensitive, so `chmodify`
//! is not `chmod` and `CHMOD` is not `chmod`.
//!
//! # Classification Order
//! 1. **PermissionChange**: `chmod`
//! 2. **OwnershipChange**: `chown`
//! 3. **PrivilegeEscalation**: `sudo`, `su`
//!
//! The first match wins. The keyword sets are disjoint, so the order only
//! matters if a new category reuses a keyword.

use std::fmt;

use serde::Serialize;

/// What a sub-command is trying to do
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Intent {
    /// Changes file mode bits (`chmod`)
    PermissionChange,
    /// Changes file owner or group (`chown`)
    OwnershipChange,
    /// Runs something as another user (`sudo`, `su`)
    PrivilegeEscalation,
    /// Nothing the rules care about
    Unclassified,
}

impl Intent {
    /// Keywords that select this intent
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Intent::PermissionChange => &["chmod"],
            Intent::OwnershipChange => &["chown"],
            Intent::PrivilegeEscalation => &["sudo", "su"],
            Intent::Unclassified => &[],
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::PermissionChange => write!(f, "permission change"),
            Intent::OwnershipChange => write!(f, "ownership change"),
            Intent::PrivilegeEscalation => write!(f, "privilege escalation"),
            Intent::Unclassified => write!(f, "unclassified"),
        }
    }
}

/// Classified intents, in the order they are tried
const CLASSIFICATION_ORDER: [Intent; 3] = [
    Intent::PermissionChange,
    Intent::OwnershipChange,
    Intent::PrivilegeEscalation,
];

/// Returns the leading command name of `command`
///
/// Leading whitespace is skipped; the name ends at the next whitespace.
/// Returns `None` for blank input.
pub fn leading_command(command: &str) -> Option<&str> {
    command.split_whitespace().next()
}

/// Returns true if the leading command name is exactly `keyword`
pub fn is_command(command: &str, keyword: &str) -> bool {
    leading_command(command) == Some(keyword)
}

/// Classifies a sub-command by its leading command name
///
/// # Examples
/// ```
/// use openshift_dockerfile_analyzer::core::classifier::{classify, Intent};
///
/// assert_eq!(classify("  chmod 664 /app"), Intent::PermissionChange);
/// assert_eq!(classify("sudo chmod 777 /app"), Intent::PrivilegeEscalation);
/// assert_eq!(classify("chmodify 777 /app"), Intent::Unclassified);
/// ```
pub fn classify(command: &str) -> Intent {
    let intent = CLASSIFICATION_ORDER
        .into_iter()
        .find(|intent| {
            intent
                .keywords()
                .iter()
                .any(|keyword| is_command(command, keyword))
        })
        .unwrap_or(Intent::Unclassified);

    tracing::trace!(command, %intent, "classified sub-command");
    intent
}
