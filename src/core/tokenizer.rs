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

//! Splits a RUN value into independent sub-commands
//!
//! Splitting is purely lexical: the value is cut on every `&&` with no
//! trimming, quoting or escape handling. `chmod 070 /app && chmod 070 /bin`
//! becomes `["chmod 070 /app ", " chmod 070 /bin"]`.

/// The operator that chains sub-commands
pub const CHAIN_OPERATOR: &str = "&&";

/// Splits `value` on `&&`
///
/// Always returns at least one element. A value without `&&` comes back
/// unchanged as the only element, and an empty value yields `[""]`.
pub fn split_commands(value: &str) -> Vec<&str> {
    let commands: Vec<&str> = value.split(CHAIN_OPERATOR).collect();
    tracing::trace!(count = commands.len(), "split instruction into sub-commands");
    commands
}
