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

//! Registers retention rules for new Cloud Storage objects.
//!
//! This crate implements a Cloud Storage triggered function. For each object
//! created in the bucket, it derives a dataset name and a retention period
//! from the object name, and registers a retention rule with the retention
//! rules service:
//!
//! | object name         | dataset     | retention period |
//! | ------------------- | ----------- | ---------------- |
//! | `mydataset/file_30` | `mydataset` | 30               |
//! | `a/b_c_5`           | `a`         | 5                |
//! | `file_7`            | (empty)     | 7                |
//!
//! Object names without an integer suffix fail the invocation.
//!
//! The [host] module serves the function over HTTP, accepting CloudEvents as
//! delivered by Eventarc. Applications embedding the logic elsewhere use
//! [Notifier] directly.
//!
//! # Example
//! ```no_run
//! # use retention_policy_notifier::{Notifier, event::ObjectEvent};
//! # tokio_test::block_on(async {
//! let notifier = Notifier::builder().build()?;
//! notifier
//!     .notify(&ObjectEvent::new("mydataset/file_30", "my-bucket"))
//!     .await?;
//! # Ok::<(), retention_policy_notifier::Error>(()) });
//! ```

pub mod config;
pub mod event;
pub mod host;
pub mod logging;
pub mod model;
pub mod notifier;

mod error;
mod object_name;

pub use error::{Error, Result};
pub use notifier::Notifier;
pub use object_name::ObjectName;
