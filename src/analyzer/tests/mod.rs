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

//! Instruction analysis tests
//!
//! Contains test suites for the RUN coordinator and instruction dispatch:
//! - RUN tests (splitting, dispatch, ordering, purity)
//! - Analyzer tests (keyword dispatch, whole-Dockerfile reports)

#[cfg(test)]
mod analyzer_tests;
