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

//! Extracts the dataset prefix and retention period from an object name.
//!
//! Object names follow the `<dataset>/<anything>_<retention period>`
//! convention, for example `mydataset/file_30`. The parsing is lenient about
//! the prefix and strict about the retention period:
//!
//! - The retention period is whatever follows the *last* `_`. Without a `_`
//!   the whole name is used, which never parses as an integer unless the
//!   name itself is a number.
//! - The prefix is whatever precedes the *first* `/`. Without a `/` the
//!   prefix is empty.

use crate::{Error, Result};

const RETENTION_SEPARATOR: char = '_';
const PREFIX_SEPARATOR: char = '/';

/// The components of an object name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectName<'a> {
    prefix: &'a str,
    retention_period: i64,
}

impl<'a> ObjectName<'a> {
    /// Parses `name`, logging each intermediate value.
    ///
    /// # Example
    /// ```
    /// # use retention_policy_notifier::ObjectName;
    /// let parsed = ObjectName::parse("a/b_c_5")?;
    /// assert_eq!(parsed.prefix(), "a");
    /// assert_eq!(parsed.retention_period(), 5);
    /// # Ok::<(), retention_policy_notifier::Error>(())
    /// ```
    pub fn parse(name: &'a str) -> Result<Self> {
        let split_index = name.rfind(RETENTION_SEPARATOR);
        tracing::info!("{}", char_index(name, split_index));
        let ttl = match split_index {
            Some(i) => &name[i + RETENTION_SEPARATOR.len_utf8()..],
            None => name,
        };
        tracing::info!("{ttl}");
        let retention_period = parse_retention_period(ttl)?;

        let prefix_index = name.find(PREFIX_SEPARATOR);
        tracing::info!("{}", char_index(name, prefix_index));
        let prefix = prefix_index.map(|i| &name[..i]).unwrap_or_default();
        tracing::info!("{prefix}");

        Ok(Self {
            prefix,
            retention_period,
        })
    }

    /// The dataset name, possibly empty.
    pub fn prefix(&self) -> &'a str {
        self.prefix
    }

    /// The retention period encoded in the name suffix.
    pub fn retention_period(&self) -> i64 {
        self.retention_period
    }
}

fn parse_retention_period(ttl: &str) -> Result<i64> {
    ttl.trim()
        .parse::<i64>()
        .map_err(|e| Error::retention_period(ttl, e))
}

// Logged indices count characters, not bytes, and use -1 for "not found".
fn char_index(name: &str, index: Option<usize>) -> i64 {
    index
        .map(|i| name[..i].chars().count() as i64)
        .unwrap_or(-1)
}
