// switchbot-api: Async Rust client for the SwitchBot cloud API

pub mod auth;
pub mod client;
pub mod commands;
pub mod error;
pub mod models;
pub mod transport;

mod devices;
mod webhook;

pub use auth::{Credentials, SignedHeaders};
pub use client::{API_HOST, SwitchBotClient};
pub use commands::{CommandRequest, CommandType};
pub use devices::NON_OBSERVED_REMOTE_TYPES;
pub use error::Error;
pub use models::{
    Device, DeviceList, DeviceStatus, PowerState, Remote, WebhookConfiguration,
};
pub use transport::TransportConfig;
