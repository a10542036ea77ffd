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

use crate::analyzer::Analyzer;
use crate::core::types::{Severity, Source, SourceLocation};
use crate::dockerfile::parse_dockerfile;

#[test]
fn test_keyword_dispatch_is_case_insensitive() {
    let analyzer = Analyzer::new();
    let location = SourceLocation::inline();

    assert!(analyzer.handles("RUN"));
    assert!(analyzer.handles("run"));
    assert!(!analyzer.handles("COPY"));

    assert_eq!(analyzer.evaluate("run", "chown a:b /x", &location).len(), 1);
    assert!(analyzer.evaluate("COPY", "--chown=a:b . /app", &location).is_empty());
}

#[test]
fn test_empty_analyzer_reports_nothing() {
    let analyzer = Analyzer::empty();
    assert!(analyzer
        .evaluate("RUN", "sudo chmod 600 /app", &SourceLocation::inline())
        .is_empty());
}

#[test]
fn test_analyze_dockerfile() {
    let content = "\
# syntax=docker/dockerfile:1
FROM registry.access.redhat.com/ubi9/nodejs-18
USER root
RUN chown -R node:node /app \\
    && chmod 775 /app
COPY --chown=1001:0 . /app
RUN sudo npm install -g pm2
RUN chmod 770 /app && chown 1001:0 /app
USER 1001
";
    let instructions = parse_dockerfile(content, Source::Inline).unwrap();
    let report = Analyzer::new().analyze(&instructions);

    assert_eq!(report.len(), 2);
    let entries = report.entries();
    assert_eq!(entries[0].instruction, "RUN");
    assert_eq!(entries[0].finding.title, "Owner set");
    assert!(entries[0]
        .finding
        .description
        .contains("at file <inline>, lines 4-5"));
    assert_eq!(entries[1].finding.title, "Use of sudo/su command");
    assert!(entries[1].finding.description.contains("line 7"));

    assert_eq!(report.highest_severity(), Some(Severity::Medium));
    assert!(report.should_fail(Severity::Medium));
    assert!(!report.should_fail(Severity::High));
}
