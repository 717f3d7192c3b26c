// Request signing for the SwitchBot cloud API.
//
// Every outbound call carries a fresh (timestamp, nonce) pair and an
// HMAC-SHA256 signature over `token || timestamp || nonce`, keyed by the
// account secret. The cloud rejects replayed or stale signatures, so a
// signed header set is built per call and never reused.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// API credentials from the SwitchBot app
/// (Profile > Preferences > Developer Options).
///
/// Immutable for the lifetime of a client. The secret is only exposed at
/// the HMAC boundary inside [`Credentials::sign`].
#[derive(Debug, Clone)]
pub struct Credentials {
    token: String,
    secret: SecretString,
}

impl Credentials {
    /// Create credentials from an open token and a shared secret.
    ///
    /// Both must be non-empty; the cloud answers 403 to anything else,
    /// which surfaces as [`Error::Authentication`](crate::Error) on the
    /// first call.
    pub fn new(token: impl Into<String>, secret: impl Into<SecretString>) -> Self {
        let token = token.into();
        let secret = secret.into();
        debug_assert!(!token.is_empty(), "token must be non-empty");
        debug_assert!(!secret.expose_secret().is_empty(), "secret must be non-empty");
        Self { token, secret }
    }

    /// The open token (sent verbatim as the `Authorization` header).
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Produce the signed header set for one call.
    ///
    /// Pure: identical `(token, secret, timestamp_ms, nonce)` inputs yield
    /// an identical signature. The clock and nonce generator live at the
    /// call site so each request gets a unique pair -- see
    /// [`fresh_nonce`].
    pub fn sign(&self, timestamp_ms: i64, nonce: &str) -> SignedHeaders {
        let string_to_sign = format!("{}{timestamp_ms}{nonce}", self.token);

        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(string_to_sign.as_bytes());
        let digest = mac.finalize().into_bytes();

        SignedHeaders {
            authorization: self.token.clone(),
            t: timestamp_ms.to_string(),
            sign: STANDARD.encode(digest),
            nonce: nonce.to_owned(),
        }
    }
}

/// Generate a random nonce for one request (UUIDv4, canonical form).
pub fn fresh_nonce() -> String {
    Uuid::new_v4().to_string()
}

/// The six authentication headers the cloud expects on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// Raw token.
    pub authorization: String,
    /// Millisecond timestamp, decimal string.
    pub t: String,
    /// Base64 of the HMAC-SHA256 digest.
    pub sign: String,
    /// The nonce the signature was computed over.
    pub nonce: String,
}

impl SignedHeaders {
    pub const CONTENT_TYPE: &'static str = "application/json";
    pub const CHARSET: &'static str = "utf8";

    /// All header pairs in wire order, `Content-Type` and `charset`
    /// included.
    pub fn pairs(&self) -> [(&'static str, &str); 6] {
        [
            ("Authorization", self.authorization.as_str()),
            ("Content-Type", Self::CONTENT_TYPE),
            ("charset", Self::CHARSET),
            ("t", self.t.as_str()),
            ("sign", self.sign.as_str()),
            ("nonce", self.nonce.as_str()),
        ]
    }
}
