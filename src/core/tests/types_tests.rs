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

use crate::core::types::*;
use std::path::PathBuf;

#[test]
fn test_severity_ordering() {
    assert!(Severity::Low < Severity::Medium);
    assert!(Severity::Medium < Severity::High);
    assert!(Severity::High < Severity::Critical);
    assert_eq!(Severity::ALL.iter().max(), Some(&Severity::Critical));
}

#[test]
fn test_severity_from_str() {
    assert_eq!("medium".parse::<Severity>(), Ok(Severity::Medium));
    assert_eq!("CRITICAL".parse::<Severity>(), Ok(Severity::Critical));
    assert_eq!(
        "severe".parse::<Severity>(),
        Err(UnknownSeverity("severe".to_string()))
    );

    for severity in Severity::ALL {
        assert_eq!(severity.to_string().parse::<Severity>(), Ok(severity));
    }
}

#[test]
fn test_location_display_single_line() {
    let location = SourceLocation::new(
        Source::File(PathBuf::from("app/Dockerfile")),
        LineSpan::single(12),
    );
    assert_eq!(location.to_string(), "at file app/Dockerfile, line 12");
}

#[test]
fn test_location_display_span() {
    let location = SourceLocation::new(Source::Stdin, LineSpan::new(3, 5));
    assert_eq!(location.to_string(), "at file <stdin>, lines 3-5");
}

#[test]
fn test_line_span_never_inverted() {
    let span = LineSpan::new(7, 2);
    assert_eq!(span, LineSpan::single(7));
}

#[test]
fn test_inline_location() {
    assert_eq!(SourceLocation::inline().to_string(), "at file <inline>, line 1");
}

#[test]
fn test_failed_finding() {
    let finding = Finding::failed("Owner set", Severity::Medium, "details".to_string());

    assert_eq!(finding.status, Status::Fail);
    assert_eq!(finding.title, "Owner set");
    assert_eq!(
        finding.to_string(),
        "[medium] Owner set (fail): details"
    );
}
