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

//! src/core/mod.rs
//!
//! Core analysis building blocks
//!
//! This module contains the pieces every instruction rule is built from:
//! - Type definitions for findings, severities and source locations
//! - Splitting a RUN value into sub-commands
//! - Classifying a sub-command by intent
//!
//! Everything here is a pure function of its input. No I/O, no shared
//! state, nothing that can fail.

pub mod classifier;
pub mod tokenizer;
pub mod types;

pub use classifier::{classify, Intent};
pub use tokenizer::split_commands;
pub use types::*;

#[cfg(test)]
mod tests;
