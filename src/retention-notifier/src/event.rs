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

//! Storage object events, as delivered over HTTP in CloudEvents format.
//!
//! Eventarc delivers `google.cloud.storage.object.v1.finalized` events either
//! in binary content mode (the attributes in `ce-*` headers, the object in the
//! body) or in structured content mode (one JSON envelope with the object
//! under `data`). [decode] accepts both.

use crate::{Error, Result};
use http::HeaderMap;
use http::header::CONTENT_TYPE;
use serde::Deserialize;

const STRUCTURED_CONTENT_TYPE: &str = "application/cloudevents+json";

/// The subset of a storage object consumed by the notifier.
///
/// Other fields in the payload are ignored. Both fields are required, a
/// payload without them fails to decode.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ObjectEvent {
    /// The object name, for example `mydataset/file_30`.
    pub name: String,
    /// The bucket containing the object.
    pub bucket: String,
}

impl ObjectEvent {
    /// Creates an event for `name` in `bucket`.
    pub fn new<N: Into<String>, B: Into<String>>(name: N, bucket: B) -> Self {
        Self {
            name: name.into(),
            bucket: bucket.into(),
        }
    }

    /// Decodes the object JSON, as found in a binary mode request body.
    pub fn from_slice(payload: &[u8]) -> Result<Self> {
        serde_json::from_slice(payload).map_err(Error::event)
    }
}

/// Invocation metadata from the CloudEvent attributes.
///
/// Only used to annotate log output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Context {
    /// The `id` attribute.
    #[serde(default)]
    pub id: Option<String>,
    /// The `type` attribute.
    #[serde(default, rename = "type")]
    pub event_type: Option<String>,
    /// The `source` attribute.
    #[serde(default)]
    pub source: Option<String>,
    /// The `subject` attribute.
    #[serde(default)]
    pub subject: Option<String>,
}

impl Context {
    fn from_headers(headers: &HeaderMap) -> Self {
        let attribute = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        Self {
            id: attribute("ce-id"),
            event_type: attribute("ce-type"),
            source: attribute("ce-source"),
            subject: attribute("ce-subject"),
        }
    }
}

#[derive(Deserialize)]
struct StructuredEvent {
    #[serde(flatten)]
    context: Context,
    data: ObjectEvent,
}

/// Decodes an HTTP-delivered CloudEvent.
pub fn decode(headers: &HeaderMap, body: &[u8]) -> Result<(Context, ObjectEvent)> {
    let structured = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with(STRUCTURED_CONTENT_TYPE));
    if structured {
        let event: StructuredEvent = serde_json::from_slice(body).map_err(Error::event)?;
        return Ok((event.context, event.data));
    }
    Ok((Context::from_headers(headers), ObjectEvent::from_slice(body)?))
}
