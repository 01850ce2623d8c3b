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

//! The error type for the notifier.
//!
//! Every error is fatal for the invocation that produced it. The predicates
//! on [Error] exist to classify failures in logs and tests, not to drive any
//! recovery.

/// The result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a failed invocation.
///
/// # Example
/// ```
/// # use retention_policy_notifier::ObjectName;
/// let err = ObjectName::parse("abc/file").unwrap_err();
/// assert!(err.is_retention_period(), "{err:?}");
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the event payload could not be decoded, for example because
    /// the `name` or `bucket` field is missing.
    pub fn is_event(&self) -> bool {
        matches!(&self.0, ErrorKind::Event(_))
    }

    /// If true, the suffix after the last `_` in the object name is not an
    /// integer.
    pub fn is_retention_period(&self) -> bool {
        matches!(&self.0, ErrorKind::RetentionPeriod { .. })
    }

    /// If true, the request to the retention rules service failed, or its
    /// response body could not be read.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// If true, the retention rules service replied with a body that is not
    /// JSON.
    pub fn is_response(&self) -> bool {
        matches!(&self.0, ErrorKind::Response(_))
    }

    /// If true, the function host could not bind or serve its listener.
    pub fn is_io(&self) -> bool {
        matches!(&self.0, ErrorKind::Io(_))
    }

    pub(crate) fn event(source: serde_json::Error) -> Self {
        Self(ErrorKind::Event(source))
    }

    pub(crate) fn retention_period<T: Into<String>>(
        ttl: T,
        source: std::num::ParseIntError,
    ) -> Self {
        Self(ErrorKind::RetentionPeriod {
            ttl: ttl.into(),
            source,
        })
    }

    pub(crate) fn transport(source: reqwest::Error) -> Self {
        Self(ErrorKind::Transport(source))
    }

    pub(crate) fn response(source: serde_json::Error) -> Self {
        Self(ErrorKind::Response(source))
    }

    pub(crate) fn io(source: std::io::Error) -> Self {
        Self(ErrorKind::Io(source))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("cannot decode the storage object event")]
    Event(#[source] serde_json::Error),
    #[error("invalid literal for a retention period: {ttl:?}")]
    RetentionPeriod {
        ttl: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("error sending the request to the retention rules service")]
    Transport(#[source] reqwest::Error),
    #[error("cannot decode the response from the retention rules service")]
    Response(#[source] serde_json::Error),
    #[error("function host I/O error")]
    Io(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn event() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::event(source);
        assert!(err.is_event(), "{err:?}");
        assert!(!err.is_retention_period(), "{err:?}");
        assert!(!err.is_transport(), "{err:?}");
        assert!(!err.is_response(), "{err:?}");
        assert!(!err.is_io(), "{err:?}");
        assert!(err.source().is_some(), "{err:?}");
    }

    #[test]
    fn retention_period() {
        let source = "file".parse::<i64>().unwrap_err();
        let err = Error::retention_period("file", source);
        assert!(err.is_retention_period(), "{err:?}");
        assert!(!err.is_event(), "{err:?}");
        assert!(err.to_string().contains("\"file\""), "{err}");
        assert!(err.source().is_some(), "{err:?}");
    }

    #[test]
    fn response() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = Error::response(source);
        assert!(err.is_response(), "{err:?}");
        assert!(!err.is_event(), "{err:?}");
    }

    #[test]
    fn io() {
        let err = Error::io(std::io::Error::other("address in use"));
        assert!(err.is_io(), "{err:?}");
        assert!(!err.is_transport(), "{err:?}");
    }
}
