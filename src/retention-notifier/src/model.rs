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

//! Messages exchanged with the retention rules service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

const STORAGE_SCHEME: &str = "gs://";

/// The scope of a retention rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RetentionRuleType {
    /// Applies to every dataset in the project.
    Global,
    /// Applies to a single dataset.
    #[default]
    Dataset,
}

/// The request body to create a retention rule.
///
/// Fields serialize in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionRequest {
    /// The dataset the rule applies to, the object name prefix.
    pub dataset_name: String,
    /// The `gs://` URI of the dataset.
    pub data_storage_name: String,
    /// The project that owns the dataset.
    pub project_id: String,
    /// The retention period from the object name suffix.
    pub retention_period: i64,
    /// Always [RetentionRuleType::Dataset] for requests built by the notifier.
    #[serde(rename = "type")]
    pub rule_type: RetentionRuleType,
}

impl RetentionRequest {
    /// Creates a dataset rule for `prefix` in `bucket`.
    ///
    /// # Example
    /// ```
    /// # use retention_policy_notifier::model::RetentionRequest;
    /// let request = RetentionRequest::dataset("my-bucket", "mydataset", "my-project", 30);
    /// assert_eq!(request.data_storage_name, "gs://my-bucket/mydataset");
    /// ```
    pub fn dataset<B, P, I>(bucket: B, prefix: P, project_id: I, retention_period: i64) -> Self
    where
        B: AsRef<str>,
        P: Into<String>,
        I: Into<String>,
    {
        let dataset_name = prefix.into();
        let data_storage_name = format!("{STORAGE_SCHEME}{}/{dataset_name}", bucket.as_ref());
        Self {
            dataset_name,
            data_storage_name,
            project_id: project_id.into(),
            retention_period,
            rule_type: RetentionRuleType::Dataset,
        }
    }
}

/// The reply from the retention rules service.
///
/// Any JSON document is accepted. The service returns an object with
/// `requestUuid` and `ruleId` on success, but nothing depends on that shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RetentionResponse(Value);

impl RetentionResponse {
    /// The request id assigned by the service, if present.
    pub fn request_uuid(&self) -> Option<&str> {
        self.0.get("requestUuid").and_then(Value::as_str)
    }

    /// The id of the created rule, if present.
    pub fn rule_id(&self) -> Option<i64> {
        self.0.get("ruleId").and_then(Value::as_i64)
    }

    /// The full response document.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for RetentionResponse {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
