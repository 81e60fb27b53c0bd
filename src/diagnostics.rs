/// API reachability probe
///
/// Checks `GET /health` and `POST /auth/login` on a base URL and reports a
/// tagged outcome per endpoint. Any HTTP response counts as reachable; the
/// status code is reported, not judged.

use std::time::Duration;

use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// The endpoints the diagnostics panel checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Health,
    Login,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Health => Method::GET,
            Endpoint::Login => Method::POST,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Health => "/health",
            Endpoint::Login => "/auth/login",
        }
    }

    /// `path` appended to whatever path the base URL already has
    fn url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        let path = format!("{}{}", base.path().trim_end_matches('/'), self.path());
        url.set_path(&path);
        url
    }
}

/// Response body, parsed as JSON when it is JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ProbeBody {
    Json(Value),
    Text(String),
    Empty,
}

impl ProbeBody {
    fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return ProbeBody::Empty;
        }
        match serde_json::from_slice(bytes) {
            Ok(value) => ProbeBody::Json(value),
            Err(_) => ProbeBody::Text(String::from_utf8_lossy(bytes).into_owned()),
        }
    }
}

/// What happened when one endpoint was probed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    Reachable { status: u16, body: ProbeBody },
    Unreachable { reason: String },
}

impl ProbeOutcome {
    pub fn is_reachable(&self) -> bool {
        matches!(self, ProbeOutcome::Reachable { .. })
    }
}

/// Outcomes for every probed endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticsReport {
    pub base_url: String,
    pub health: ProbeOutcome,
    pub login: ProbeOutcome,
}

impl DiagnosticsReport {
    pub fn all_reachable(&self) -> bool {
        self.health.is_reachable() && self.login.is_reachable()
    }
}

#[derive(Error, Debug)]
enum ProbeError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Probe both endpoints of `base_url` concurrently
pub async fn probe_api(base_url: &str, timeout: Duration) -> DiagnosticsReport {
    let (health, login) = futures::join!(
        probe_endpoint(base_url, Endpoint::Health, timeout),
        probe_endpoint(base_url, Endpoint::Login, timeout),
    );

    DiagnosticsReport {
        base_url: base_url.to_string(),
        health,
        login,
    }
}

/// Probe a single endpoint
pub async fn probe_endpoint(base_url: &str, endpoint: Endpoint, timeout: Duration) -> ProbeOutcome {
    match send(base_url, endpoint, timeout).await {
        Ok((status, body)) => {
            debug!("{} {} -> {}", endpoint.method(), endpoint.path(), status);
            ProbeOutcome::Reachable {
                status,
                body: ProbeBody::from_bytes(&body),
            }
        }
        Err(e) => {
            warn!("{} {} unreachable: {}", endpoint.method(), endpoint.path(), e);
            ProbeOutcome::Unreachable {
                reason: e.to_string(),
            }
        }
    }
}

async fn send(base_url: &str, endpoint: Endpoint, timeout: Duration) -> Result<(u16, Vec<u8>), ProbeError> {
    let base = Url::parse(base_url.trim()).map_err(|e| ProbeError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    let client = Client::builder().timeout(timeout).build()?;
    let mut request = client.request(endpoint.method(), endpoint.url(&base));
    if endpoint == Endpoint::Login {
        // Empty credentials: only reachability matters
        request = request.json(&json!({ "email": "", "password": "" }));
    }

    let response = request.send().await?;
    let status = response.status().as_u16();
    let body = response.bytes().await?;

    Ok((status, body.to_vec()))
}
