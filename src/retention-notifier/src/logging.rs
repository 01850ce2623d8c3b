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

//! Log output for the function host.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Returns the subscriber used by the function host.
///
/// Log lines go to stdout, where the Cloud Functions runtime collects them.
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn subscriber() -> impl tracing::Subscriber + Send + Sync + 'static {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .finish()
}

/// Enables tracing for the application.
///
/// Returns false if a global subscriber was already installed.
pub fn enable_tracing() -> bool {
    tracing::subscriber::set_global_default(subscriber()).is_ok()
}
