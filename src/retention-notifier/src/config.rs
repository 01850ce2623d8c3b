// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Runtime configuration from the environment.

pub(crate) const PROJECT_VAR: &str = "GCP_PROJECT";
pub(crate) const PORT_VAR: &str = "PORT";

/// The project id sent when [PROJECT_VAR] is not set.
pub const PROJECT_PLACEHOLDER: &str = "Specified environment variable is not set.";
/// The port used by the function host when [PORT_VAR] is not set.
pub const DEFAULT_PORT: u16 = 8080;
/// The retention rules service endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://104.198.4.155:8080/retentionrules/";

/// Returns the project id for new retention rules.
///
/// A missing variable is not an error, the placeholder text is used as the
/// project id instead.
pub fn project_id() -> String {
    std::env::var(PROJECT_VAR)
        .ok()
        .unwrap_or(PROJECT_PLACEHOLDER.to_string())
}

/// Returns the port for the function host.
pub fn port() -> u16 {
    std::env::var(PORT_VAR)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
