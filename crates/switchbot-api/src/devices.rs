// Device endpoints
//
// Listing, status, and command dispatch via the devices/ paths.

use tracing::debug;

use crate::client::{SwitchBotClient, decode};
use crate::commands::CommandRequest;
use crate::error::Error;
use crate::models::{DeviceList, DeviceStatus};

/// Remote types dropped from list results. "Others" is the app's
/// free-form bucket of learned buttons and has no observable state.
pub const NON_OBSERVED_REMOTE_TYPES: &[&str] = &["Others"];

impl SwitchBotClient {
    /// List the physical devices and infrared remotes bound to the account.
    ///
    /// `GET /v1.1/devices`
    pub async fn list_devices(&self) -> Result<DeviceList, Error> {
        let body = self.get("devices").await?;
        debug!("devices: {body}");

        let mut list: DeviceList = decode(body)?;
        list.remotes
            .retain(|remote| !NON_OBSERVED_REMOTE_TYPES.contains(&remote.remote_type.as_str()));
        Ok(list)
    }

    /// Current status of a physical device. IR remotes have no status.
    ///
    /// `GET /v1.1/devices/{id}/status`
    pub async fn get_status(&self, device_id: &str) -> Result<DeviceStatus, Error> {
        let body = self.get(&format!("devices/{device_id}/status")).await?;
        DeviceStatus::from_value(body)
    }

    /// Send a command to a device.
    ///
    /// `POST /v1.1/devices/{id}/commands`
    pub async fn send_command(
        &self,
        device_id: &str,
        request: &CommandRequest,
    ) -> Result<(), Error> {
        debug!(device_id, command = request.command.as_str(), "sending command");
        self.post(&format!("devices/{device_id}/commands"), request)
            .await?;
        Ok(())
    }
}
