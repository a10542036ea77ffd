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

//! Command rule tests
//!
//! Contains test suites for the per-intent rules:
//! - Permission tests (chmod mode parsing, group digit, proposals)
//! - Ownership tests (owner:group extraction, root group detection)
//! - Escalation tests (sudo/su)



#[cfg(test)]
mod permission_tests;

use crate::core::types::{LineSpan, Source, SourceLocation};

/// Location used by every rule test
fn location() -> SourceLocation {
    SourceLocation::new(
        Source::File(std::path::PathBuf::from("Dockerfile")),
        LineSpan::single(4),
    )
}

#[test]
fn test_default_rules_cover_each_intent_once() {
    use crate::core::classifier::Intent;

    let rules = super::default_rules();
    for intent in [
        Intent::PermissionChange,
        Intent::OwnershipChange,
        Intent::PrivilegeEscalation,
    ] {
        assert_eq!(
            rules.iter().filter(|rule| rule.intent() == intent).count(),
            1,
            "Exactly one rule should handle {}",
            intent
        );
    }
}
