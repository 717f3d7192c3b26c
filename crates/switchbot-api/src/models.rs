// SwitchBot cloud API response types.
//
// Every endpoint wraps its payload in the `{ statusCode, body, message }`
// envelope; the client strips it before callers see the payload. Fields use
// `#[serde(default)]` liberally because the cloud is inconsistent about
// field presence across device firmware generations.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Error;

// ── Response envelope ────────────────────────────────────────────────

/// Standard SwitchBot cloud response envelope.
///
/// ```json
/// { "statusCode": 100, "body": { ... }, "message": "success" }
/// ```
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(rename = "statusCode")]
    pub status_code: i64,
    #[serde(default)]
    pub body: Value,
    #[serde(default)]
    pub message: Option<String>,
}

// ── Devices ──────────────────────────────────────────────────────────

/// Physical device entry from `GET devices`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_id: String,
    pub device_name: String,
    /// Product name, e.g. `"Color Bulb"`. The cloud omits it for a few
    /// hub-less entries; those map to `"-"`.
    #[serde(default = "missing_device_type")]
    pub device_type: String,
    /// Parent hub, if any. An empty string from the cloud means "none".
    #[serde(default, deserialize_with = "empty_as_none")]
    pub hub_device_id: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Infrared remote entry from `GET devices`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Remote {
    pub device_id: String,
    pub device_name: String,
    pub remote_type: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub hub_device_id: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Split payload of `GET devices`: physical devices and IR remotes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceList {
    #[serde(rename = "deviceList", default)]
    pub devices: Vec<Device>,
    #[serde(rename = "infraredRemoteList", default)]
    pub remotes: Vec<Remote>,
}

fn missing_device_type() -> String {
    "-".to_owned()
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

// ── Device status ────────────────────────────────────────────────────

/// Status payload from `GET devices/{id}/status`, keyed by `deviceType`.
///
/// Decoded through a per-tag registry: known tags get fully typed records,
/// everything else lands in [`DeviceStatus::Other`] with the raw fields
/// preserved.
#[derive(Debug, Clone)]
pub enum DeviceStatus {
    Hub2(Hub2Status),
    Curtain(CurtainStatus),
    Curtain3(CurtainStatus),
    Other(OtherStatus),
}

impl DeviceStatus {
    /// Decode a raw status body, dispatching on the `deviceType` tag.
    pub(crate) fn from_value(mut value: Value) -> Result<Self, Error> {
        normalize_hub_device_id(&mut value);

        let tag = value
            .get("deviceType")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
        let raw = value.to_string();

        let decoded = match tag.as_str() {
            "Hub 2" => serde_json::from_value(value).map(Self::Hub2),
            "Curtain" => serde_json::from_value(value).map(Self::Curtain),
            "Curtain3" => serde_json::from_value(value).map(Self::Curtain3),
            _ => serde_json::from_value(value).map(Self::Other),
        };

        decoded.map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: raw,
        })
    }

    pub fn device_id(&self) -> &str {
        match self {
            Self::Hub2(s) => &s.device_id,
            Self::Curtain(s) | Self::Curtain3(s) => &s.device_id,
            Self::Other(s) => &s.device_id,
        }
    }

    pub fn device_type(&self) -> &str {
        match self {
            Self::Hub2(s) => &s.device_type,
            Self::Curtain(s) | Self::Curtain3(s) => &s.device_type,
            Self::Other(s) => &s.device_type,
        }
    }
}

/// Hub 2 status: the built-in environment sensor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hub2Status {
    pub device_id: String,
    pub device_type: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub hub_device_id: Option<String>,
    pub temperature: f64,
    pub humidity: f64,
}

/// Curtain / Curtain3 status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurtainStatus {
    pub device_id: String,
    pub device_type: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub hub_device_id: Option<String>,
    pub calibrate: bool,
    pub group: bool,
    pub moving: bool,
    pub battery: i64,
    /// 0 = fully open, 100 = fully closed.
    pub slide_position: i64,
}

/// Status for a device type without a dedicated record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherStatus {
    pub device_id: String,
    #[serde(default = "missing_device_type")]
    pub device_type: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub hub_device_id: Option<String>,
    /// Everything else the cloud reported, untyped.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// The cloud reports "no hub" as `"000000000000"`, and hub-integrated
/// devices point `hubDeviceId` at themselves; both normalize to null
/// before decoding.
fn normalize_hub_device_id(value: &mut Value) {
    let device_id = value
        .get("deviceId")
        .and_then(Value::as_str)
        .map(str::to_owned);

    if let Some(obj) = value.as_object_mut() {
        let clear = match obj.get("hubDeviceId").and_then(Value::as_str) {
            Some(hub) => {
                hub.is_empty() || hub == "000000000000" || Some(hub) == device_id.as_deref()
            }
            None => false,
        };
        if clear {
            obj.insert("hubDeviceId".to_owned(), Value::Null);
        }
    }
}

// ── Power state ──────────────────────────────────────────────────────

/// Power state reported in status payloads and accepted as a command
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    On,
    Off,
}

// ── Webhooks ─────────────────────────────────────────────────────────

/// Webhook configuration from `POST webhook/queryWebhook`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookConfiguration {
    #[serde(default)]
    pub urls: Vec<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
