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

use super::location;
use crate::core::types::Severity;
use crate::rules::permission::*;
use crate::rules::CommandRule;

// ========================================================================
// Compliant modes
// ========================================================================

#[test]
fn test_group_rwx_is_compliant() {
    let rule = PermissionRule::new();

    let compliant = vec![
        "chmod 770 /app",
        "chmod 775 /app",
        "chmod 070 /app/routes ",
        " chmod -R 775 /app",
        "chmod --recursive 771 /app /data",
    ];

    for command in compliant {
        assert_eq!(
            rule.analyze(command, &location()),
            None,
            "'{}' grants rwx to the root group",
            command
        );
    }
}

// ========================================================================
// Non-compliant group digit
// ========================================================================

#[test]
fn test_group_rw_proposes_only_executable_alternative() {
    let rule = PermissionRule::new();

    let finding = rule
        .analyze("chmod 664 /app", &location())
        .expect("group digit 6 should be flagged");

    assert_eq!(finding.title, PERMISSION_SET);
    assert_eq!(finding.severity, Severity::Medium);
    assert!(
        finding.description.contains("Try updating permissions to 674"),
        "Should propose group 7: {}",
        finding.description
    );
    assert!(
        !finding.description.contains("otherwise set it to"),
        "Group is already 6, no second proposal: {}",
        finding.description
    );
}

#[test]
fn test_other_group_digits_propose_both_alternatives() {
    let rule = PermissionRule::new();

    let test_cases = vec![
        ("chmod 750 /app", "750", "770", "760"),
        ("chmod 700 /app", "700", "770", "760"),
        ("chmod 644 /app", "644", "674", "664"),
        ("chmod 755 /usr/bin/run.sh", "755", "775", "765"),
    ];

    for (command, mode, executable, writable) in test_cases {
        let finding = rule
            .analyze(command, &location())
            .unwrap_or_else(|| panic!("'{}' should be flagged", command));

        assert_eq!(finding.title, PERMISSION_SET, "Mode {}", mode);
        assert!(
            finding
                .description
                .contains(&format!("Try updating permissions to {}", executable)),
            "Mode {} should propose {}: {}",
            mode,
            executable,
            finding.description
        );
        assert!(
            finding
                .description
                .contains(&format!("otherwise set it to {}", writable)),
            "Mode {} should propose {}: {}",
            mode,
            writable,
            finding.description
        );
    }
}

#[test]
fn test_description_names_command_and_location() {
    let rule = PermissionRule::new();
    let finding = rule.analyze(" chmod 644 /app ", &location()).unwrap();

    assert!(finding
        .description
        .starts_with("permission set on chmod 644 /app at file Dockerfile, line 4"));
    assert!(finding.description.contains("\nExplanation - in OpenShift"));
}

#[test]
fn test_proposal_text() {
    assert_eq!(
        proposal("664"),
        "Is it an executable file? Try updating permissions to 674"
    );
    assert_eq!(
        proposal("600"),
        "Is it an executable file? Try updating permissions to 670 otherwise set it to 660"
    );
}

// ========================================================================
// Syntax errors
// ========================================================================

#[test]
fn test_unparseable_mode_is_critical() {
    let rule = PermissionRule::new();

    let test_cases = vec![
        "chmod",
        "chmod ",
        "chmod 664",
        "chmod +x /app/run.sh",
        "chmod g+rwX /app",
        "chmod -R",
    ];

    for command in test_cases {
        let finding = rule
            .analyze(command, &location())
            .unwrap_or_else(|| panic!("'{}' should be a syntax error", command));

        assert_eq!(finding.title, SYNTAX_ERROR, "Command '{}'", command);
        assert_eq!(finding.severity, Severity::Critical, "Command '{}'", command);
        assert!(finding.description.contains("unable to fetch args of chmod command"));
        assert!(finding.description.contains("at file Dockerfile, line 4"));
    }
}

#[test]
fn test_mode_must_be_three_digits() {
    let rule = PermissionRule::new();

    for command in ["chmod 0775 /app", "chmod 77 /app", "chmod 7 /app", "chmod 12345 /app"] {
        let finding = rule.analyze(command, &location()).unwrap();
        assert_eq!(finding.title, SYNTAX_ERROR, "Command '{}'", command);
        assert_eq!(finding.severity, Severity::Critical);
    }
}

#[test]
fn test_extract_mode() {
    let rule = PermissionRule::new();

    assert_eq!(rule.extract_mode("chmod 664 /app"), Some("664"));
    assert_eq!(rule.extract_mode("  chmod   -R  0775 /app"), Some("0775"));
    assert_eq!(rule.extract_mode("chmod u+x /app"), None);
    assert_eq!(rule.extract_mode("chmod 664"), None);
}
