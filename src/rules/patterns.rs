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

//! Argument patterns used by the command rules
//!
//! These are heuristics, not a shell grammar. They only need to find the
//! one argument each rule cares about.

use regex::Regex;

/// Builds the `chmod` mode pattern
///
/// Captures the first non-option argument after `chmod` and requires at
/// least one operand after it:
/// - `chmod 664 /app` → `664`
/// - `chmod -R 775 /app` → `775`
/// - `chmod 664` → no match (nothing to apply the mode to)
#[allow(clippy::expect_used)]
pub fn build_chmod_mode_pattern() -> Regex {
    Regex::new(r"^\s*chmod\s+(?:-\S*\s+)*(\S+)\s+\S")
        .expect("chmod mode pattern should be valid regex")
}

/// Builds the `chown` owner:group pattern
///
/// Each half is a word, optionally written as a variable reference
/// (`$GROUP`, `${GROUP}`). The owner half may be absent (`chown :grp f`).
/// Capture group 2 is the group.
#[allow(clippy::expect_used)]
pub fn build_owner_group_pattern() -> Regex {
    Regex::new(r"(\$\{\w+\}|\$*\w+)?:(\$\{\w+\}|\$*\w+)")
        .expect("owner:group pattern should be valid regex")
}
