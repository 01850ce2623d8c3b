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

//! The function host for the retention policy notifier.

use retention_policy_notifier::{Notifier, config, host, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::enable_tracing();

    let notifier = Notifier::builder().build()?;
    let listener = host::bind(config::port()).await?;
    host::serve(listener, notifier).await?;
    Ok(())
}
