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

//! Registers a retention rule for each new object.

use crate::config;
use crate::event::ObjectEvent;
use crate::model::{RetentionRequest, RetentionResponse};
use crate::object_name::ObjectName;
use crate::{Error, Result};

/// Sends one retention rule request per storage object event.
///
/// The notifier holds no per-invocation state, clones share the same HTTP
/// connection pool.
///
/// # Example
/// ```no_run
/// # use retention_policy_notifier::{Notifier, event::ObjectEvent};
/// # tokio_test::block_on(async {
/// let notifier = Notifier::builder().build()?;
/// let response = notifier
///     .notify(&ObjectEvent::new("mydataset/file_30", "my-bucket"))
///     .await?;
/// println!("rule id: {:?}", response.rule_id());
/// # Ok::<(), retention_policy_notifier::Error>(()) });
/// ```
#[derive(Clone, Debug)]
pub struct Notifier {
    client: reqwest::Client,
    endpoint: String,
    project_id: Option<String>,
}

impl Notifier {
    /// Returns a builder with the default configuration.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Handles one object creation event.
    ///
    /// Every failure is returned to the caller, nothing is retried. Failures
    /// to parse the object name happen before any request is sent. The HTTP
    /// status of the response is ignored, only its body must be JSON.
    pub async fn notify(&self, event: &ObjectEvent) -> Result<RetentionResponse> {
        let project_id = self
            .project_id
            .clone()
            .unwrap_or_else(config::project_id);
        tracing::info!("Project : {project_id}");
        tracing::info!("Processing file: {}.", event.name);

        let name = ObjectName::parse(&event.name)?;
        tracing::info!("Bucket: {}", event.bucket);
        tracing::info!("{}", event.bucket);

        let request = RetentionRequest::dataset(
            &event.bucket,
            name.prefix(),
            project_id,
            name.retention_period(),
        );
        tracing::info!("data: invoking REST call");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(Error::transport)?;
        let body = response.text().await.map_err(Error::transport)?;
        tracing::info!("response from server: {body}");

        serde_json::from_str(&body).map_err(Error::response)
    }
}

/// Configures a [Notifier].
#[derive(Clone, Debug)]
pub struct Builder {
    endpoint: String,
    project_id: Option<String>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            endpoint: config::DEFAULT_ENDPOINT.to_string(),
            project_id: None,
        }
    }
}

impl Builder {
    /// Sends requests to `endpoint` instead of the default retention rules
    /// service.
    pub fn with_endpoint<V: Into<String>>(mut self, endpoint: V) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Uses a fixed project id instead of reading the environment on each
    /// invocation.
    pub fn with_project_id<V: Into<String>>(mut self, project_id: V) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Creates the notifier.
    ///
    /// The HTTP client has no request timeout.
    pub fn build(self) -> Result<Notifier> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(Error::transport)?;
        Ok(Notifier {
            client,
            endpoint: self.endpoint,
            project_id: self.project_id,
        })
    }
}
