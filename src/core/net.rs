// src/core/net.rs

// Blocking HTTP GET for remote dataset sources.

use std::time::Duration;

use ureq::Agent;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

fn agent() -> Agent {
    Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))
        .user_agent(USER_AGENT)
        .build()
        .into()
}

/// GET `url` and return the body as text.
///
/// Non-2xx statuses come back as `ureq::Error::StatusCode`, so callers can
/// tell an HTTP failure apart from a broken transport.
pub fn http_get(url: &str) -> Result<String, ureq::Error> {
    let mut resp = agent().get(url).call()?;
    logd!("Net: {} → {}", url, resp.status());
    resp.body_mut().read_to_string()
}

/// Join a base URL and a relative path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    join!(base.trim_end_matches('/'), "/", path.trim_start_matches('/'))
}
