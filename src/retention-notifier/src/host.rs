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

//! Runs the notifier as a CloudEvents function over HTTP.
//!
//! Each `POST /` is one invocation. A successful invocation returns
//! `204 No Content`. Any error fails the invocation with a `500`, which the
//! runtime reports as a failed function execution.

use crate::event;
use crate::model::RetentionResponse;
use crate::{Error, Notifier, Result};
use axum::Router;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;
use tracing::Instrument;

/// Returns the router for the function endpoint.
pub fn router(notifier: Notifier) -> Router {
    Router::new().route("/", post(handle)).with_state(notifier)
}

/// Binds the listener on all interfaces.
pub async fn bind(port: u16) -> Result<TcpListener> {
    TcpListener::bind(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
        .await
        .map_err(Error::io)
}

/// Serves invocations until the listener fails.
pub async fn serve(listener: TcpListener, notifier: Notifier) -> Result<()> {
    let addr = listener.local_addr().map_err(Error::io)?;
    tracing::info!("function host listening on {addr}");
    axum::serve(listener, router(notifier))
        .await
        .map_err(Error::io)
}

async fn handle(State(notifier): State<Notifier>, headers: HeaderMap, body: Bytes) -> Response {
    match invoke(&notifier, &headers, &body).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("function invocation failed: {e:?}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn invoke(
    notifier: &Notifier,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<RetentionResponse> {
    let (context, event) = event::decode(headers, body)?;
    let span = tracing::info_span!(
        "invocation",
        id = context.id.as_deref().unwrap_or_default(),
        event_type = context.event_type.as_deref().unwrap_or_default(),
    );
    tracing::debug!(parent: &span, "{context:?}");
    notifier.notify(&event).instrument(span).await
}
