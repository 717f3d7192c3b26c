// SwitchBot cloud HTTP client
//
// Wraps `reqwest::Client` with per-request header signing, fixed-host URL
// construction, and envelope classification. All endpoint modules (devices,
// webhook) are implemented as inherent methods via separate files to keep
// this module focused on transport mechanics.

use chrono::Utc;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

use crate::auth::{Credentials, fresh_nonce};
use crate::error::Error;
use crate::models::Envelope;
use crate::transport::TransportConfig;

/// Production cloud endpoint.
pub const API_HOST: &str = "https://api.switch-bot.com";

/// API version prefix; all paths are relative to it.
const API_VERSION: &str = "v1.1";

/// Async client for the SwitchBot cloud API.
///
/// Signs every request with a fresh timestamp/nonce pair, issues exactly one
/// HTTP call per operation, and strips the `{ statusCode, body }` envelope
/// before the caller sees the payload. No retries, no internal state beyond
/// the connection pool.
pub struct SwitchBotClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
}

impl SwitchBotClient {
    /// Create a client against the production endpoint with default
    /// transport settings. The connection pool is owned by this client and
    /// released when it is dropped.
    pub fn new(credentials: Credentials) -> Result<Self, Error> {
        Self::with_config(credentials, &TransportConfig::default())
    }

    /// Create a client against the production endpoint with custom
    /// transport settings.
    pub fn with_config(credentials: Credentials, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Url::parse(API_HOST)?;
        Ok(Self { http, base_url, credentials })
    }

    /// Create a client with a pre-built `reqwest::Client` and base URL.
    ///
    /// Use this to share one connection pool across clients, or to point at
    /// a test server. `reqwest::Client` is a reference-counted handle, so
    /// dropping this client never tears down a caller-supplied pool; it is
    /// also safe to use from concurrent tasks -- each call signs with its
    /// own timestamp and nonce.
    pub fn with_client(http: reqwest::Client, base_url: Url, credentials: Credentials) -> Self {
        Self { http, base_url, credentials }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a signed GET request and unwrap the envelope.
    pub(crate) async fn get(&self, path: &str) -> Result<Value, Error> {
        let req = self.signed(Method::GET, path)?;
        let resp = req.send().await.map_err(Error::Transport)?;
        self.classify(resp).await
    }

    /// Send a signed POST request with a JSON body and unwrap the envelope.
    pub(crate) async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<Value, Error> {
        let req = self.signed(Method::POST, path)?.json(body);
        let resp = req.send().await.map_err(Error::Transport)?;
        self.classify(resp).await
    }

    /// Build a request carrying the six signed headers.
    ///
    /// Headers go on before any body so `json()` keeps the signed
    /// `Content-Type` instead of adding a second one.
    fn signed(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder, Error> {
        let url = self.url(path)?;
        debug!("{method} {url}");

        let headers = self
            .credentials
            .sign(Utc::now().timestamp_millis(), &fresh_nonce());

        let mut req = self.http.request(method, url);
        for (name, value) in headers.pairs() {
            req = req.header(name, value);
        }
        Ok(req)
    }

    /// Build a full URL: `{base}/v1.1/{path}`.
    fn url(&self, path: &str) -> Result<Url, Error> {
        let full = format!(
            "{}/{API_VERSION}/{path}",
            self.base_url.as_str().trim_end_matches('/')
        );
        Ok(Url::parse(&full)?)
    }

    // ── Response classification ──────────────────────────────────────

    /// Map (HTTP status, envelope) onto a typed outcome.
    ///
    /// 403 and device-offline are expected conditions and surface silently
    /// through the error type; everything else unexpected is logged with
    /// status and body before being returned.
    async fn classify(&self, resp: reqwest::Response) -> Result<Value, Error> {
        let status = resp.status();

        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(Error::Authentication);
        }

        let raw = resp.text().await.map_err(Error::Transport)?;

        if status.as_u16() >= 400 {
            error!("HTTP {status}: {raw}");
            return Err(Error::Api {
                status: status.as_u16(),
                body: raw,
            });
        }

        let envelope: Envelope =
            serde_json::from_str(&raw).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: raw.clone(),
            })?;

        match envelope.status_code {
            100 => Ok(envelope.body),
            // The docs claim 161 means a device is offline and 171 a hub;
            // in practice the Plug Mini (JP) reports 171 when only the
            // device itself is offline, so both map to the same outcome.
            code @ (161 | 171) => Err(Error::DeviceOffline { code }),
            code => {
                error!("envelope status {code}: {raw}");
                Err(Error::Api {
                    status: status.as_u16(),
                    body: envelope.message.unwrap_or(raw),
                })
            }
        }
    }
}

/// Decode an unwrapped envelope body into a typed record, keeping the raw
/// JSON around for the error path.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    let raw = value.to_string();
    serde_json::from_value(value).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body: raw,
    })
}
