//! Process-wide request tracing for troubleshooting.
//!
//! Off by default. When enabled, every call logs the full outgoing request
//! and the response head at INFO under the `recs_client::trace` target;
//! otherwise the same events are emitted at DEBUG.
//!
//! Response bodies are not traced: reading one consumes the stream, and the
//! response is handed back to the caller unread.

use std::sync::atomic::{AtomicBool, Ordering};

use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Request, Response};

static ENABLED: AtomicBool = AtomicBool::new(false);

pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

pub(crate) fn redacted_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if *name == AUTHORIZATION {
                "<redacted>".to_string()
            } else {
                String::from_utf8_lossy(value.as_bytes()).into_owned()
            };
            (name.to_string(), value)
        })
        .collect()
}

pub(crate) fn trace_request(request: &Request) {
    let headers = redacted_headers(request.headers());
    let body = request
        .body()
        .and_then(|body| body.as_bytes())
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .unwrap_or_default();

    if is_enabled() {
        tracing::info!(
            target: "recs_client::trace",
            method = %request.method(),
            url = %request.url(),
            headers = ?headers,
            body = %body,
            "request"
        );
    } else {
        tracing::debug!(
            target: "recs_client::trace",
            method = %request.method(),
            url = %request.url(),
            headers = ?headers,
            body = %body,
            "request"
        );
    }
}

pub(crate) fn trace_response(response: &Response) {
    let headers = redacted_headers(response.headers());

    if is_enabled() {
        tracing::info!(
            target: "recs_client::trace",
            status = %response.status(),
            url = %response.url(),
            headers = ?headers,
            "response"
        );
    } else {
        tracing::debug!(
            target: "recs_client::trace",
            status = %response.status(),
            url = %response.url(),
            headers = ?headers,
            "response"
        );
    }
}
