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

//! src/dockerfile/mod.rs
//!
//! Dockerfile instruction reader
//!
//! Turns Dockerfile text into `Instruction` records for the analyzer. It
//! handles:
//! - Comments and blank lines (including inside continuations)
//! - Line continuations with a trailing backslash
//! - Heredoc bodies (`RUN <<EOF ... EOF`), kept as part of the value;
//!   several openers on one line (`RUN <<A <<B`) take their bodies in order
//! - Line spans for every instruction, for finding locations
//!
//! # Architecture
//! Logical lines are assembled first, then each one is split into keyword
//! and value with nom combinators. The reader never interprets shell
//! syntax; that is left to the instruction rules.

use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{char, one_of, space0, space1},
    combinator::{eof, opt},
};
use nom::{branch::alt, IResult, Parser};
use std::path::Path;
use thiserror::Error;

use crate::core::types::{LineSpan, Source, SourceLocation};
use crate::error::AnalyzerError;

/// Parse errors with line number context
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },

    #[error("Unterminated heredoc '{delimiter}' starting on line {line}")]
    UnterminatedHeredoc { delimiter: String, line: usize },
}

/// One Dockerfile instruction
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Instruction {
    /// Upper-case keyword (e.g., "RUN")
    pub keyword: String,
    /// Everything after the keyword, continuations joined
    pub value: String,
    /// File and physical lines the instruction was read from
    pub location: SourceLocation,
}

/// Reads a Dockerfile from disk
pub fn load(path: &Path) -> Result<Vec<Instruction>, AnalyzerError> {
    let content = std::fs::read_to_string(path).map_err(|source| AnalyzerError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_dockerfile(&content, Source::File(path.to_path_buf()))?)
}

/// Parses Dockerfile text into instructions
///
/// # Example
/// ```
/// use openshift_dockerfile_analyzer::core::types::Source;
/// use openshift_dockerfile_analyzer::dockerfile::parse_dockerfile;
///
/// let content = "FROM ubi9\nRUN chmod 664 /app \\\n    && chown 0:0 /app\n";
/// let instructions = parse_dockerfile(content, Source::Inline)?;
///
/// assert_eq!(instructions.len(), 2);
/// assert_eq!(instructions[1].keyword, "RUN");
/// assert_eq!(instructions[1].value, "chmod 664 /app && chown 0:0 /app");
/// assert_eq!(instructions[1].location.to_string(), "at file <inline>, lines 2-3");
/// # Ok::<(), openshift_dockerfile_analyzer::dockerfile::ParseError>(())
/// ```
pub fn parse_dockerfile(content: &str, source: Source) -> Result<Vec<Instruction>, ParseError> {
    let mut instructions = Vec::new();
    let mut lines = content.lines().enumerate().map(|(i, line)| (i + 1, line));

    while let Some((start, line)) = lines.next() {
        let trimmed = line.trim();
        if is_skippable(trimmed) {
            continue;
        }

        // Assemble the logical line
        let mut end = start;
        let mut parts = Vec::new();
        let mut current = trimmed;
        loop {
            match current.strip_suffix('\\') {
                Some(stripped) => {
                    parts.push(stripped.trim());
                    let next = lines.by_ref().find(|(_, l)| !is_skippable(l.trim()));
                    match next {
                        Some((line_num, l)) => {
                            end = line_num;
                            current = l.trim();
                        }
                        None => break,
                    }
                }
                None => {
                    parts.push(current);
                    break;
                }
            }
        }
        let logical = parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        let (keyword, value) = match parse_instruction_line(&logical) {
            Ok((_, parsed)) => parsed,
            Err(e) => {
                return Err(ParseError::InvalidSyntax {
                    line: start,
                    message: format!("{:?}", e),
                });
            }
        };
        let mut value = value.to_string();

        // Bodies follow in the order their openers appear
        for delimiter in heredoc_delimiters(&value) {
            let mut body = Vec::new();
            let mut terminated = false;
            for (line_num, l) in lines.by_ref() {
                end = line_num;
                if l.trim() == delimiter {
                    terminated = true;
                    break;
                }
                body.push(l);
            }
            if !terminated {
                return Err(ParseError::UnterminatedHeredoc {
                    delimiter,
                    line: start,
                });
            }
            value.push('\n');
            value.push_str(&body.join("\n"));
        }

        tracing::trace!(keyword, start, end, "read instruction");
        instructions.push(Instruction {
            keyword: keyword.to_ascii_uppercase(),
            value,
            location: SourceLocation::new(source.clone(), LineSpan::new(start, end)),
        });
    }

    Ok(instructions)
}

/// Blank lines and comments (parser directives included)
fn is_skippable(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parse one logical line into (keyword, value)
///
/// Format: KEYWORD [value]
/// Examples:
/// - "RUN chmod 664 /app" → ("RUN", "chmod 664 /app")
/// - "HEALTHCHECK NONE" → ("HEALTHCHECK", "NONE")
pub fn parse_instruction_line(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, _) = space0(input)?;
    let (input, keyword) = take_while1(|c: char| c.is_ascii_alphabetic())(input)?;
    let (rest, _) = alt((space1, eof)).parse(input)?;

    Ok(("", (keyword, rest.trim())))
}

/// Returns the terminators of every heredoc opened in `value`, in order
///
/// Recognises `<<EOF`, `<<-EOF`, `<<'EOF'` and `<<"EOF"`, only at the start
/// of a whitespace-delimited word. Shell arithmetic (`$((1<<2))`), quoted
/// text (`"a<<b"`) and here-strings (`<<<`) are not openers.
pub fn heredoc_delimiters(value: &str) -> Vec<String> {
    value
        .split_whitespace()
        .filter(|word| word.starts_with("<<") && !word.starts_with("<<<"))
        .filter_map(|word| parse_heredoc_open(word).ok())
        .map(|(_, delimiter)| delimiter.to_string())
        .collect()
}

fn parse_heredoc_open(input: &str) -> IResult<&str, &str> {
    let (input, _) = (tag("<<"), opt(char('-')), opt(one_of("'\""))).parse(input)?;
    take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)
}

#[cfg(test)]
mod tests;
