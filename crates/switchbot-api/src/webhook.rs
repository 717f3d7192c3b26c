// Webhook management endpoints
//
// The cloud pushes device status updates to a single caller-hosted URL;
// these calls manage that registration. All three are POSTs to fixed paths
// with an `action` discriminator in the body.

use serde_json::json;
use tracing::debug;

use crate::client::{SwitchBotClient, decode};
use crate::error::Error;
use crate::models::WebhookConfiguration;

impl SwitchBotClient {
    /// The currently registered webhook URLs.
    ///
    /// `POST /v1.1/webhook/queryWebhook`
    pub async fn get_webhook_configuration(&self) -> Result<WebhookConfiguration, Error> {
        let body = self
            .post("webhook/queryWebhook", &json!({ "action": "queryUrl" }))
            .await?;
        decode(body)
    }

    /// Register a URL to receive status updates for all devices.
    ///
    /// `POST /v1.1/webhook/setupWebhook`
    pub async fn setup_webhook(&self, url: &str) -> Result<(), Error> {
        debug!(url, "setting up webhook");
        self.post(
            "webhook/setupWebhook",
            &json!({
                "action": "setupWebhook",
                "url": url,
                "deviceList": "ALL",
            }),
        )
        .await?;
        Ok(())
    }

    /// Remove a webhook registration.
    ///
    /// `POST /v1.1/webhook/deleteWebhook`
    pub async fn delete_webhook(&self, url: &str) -> Result<(), Error> {
        debug!(url, "deleting webhook");
        self.post(
            "webhook/deleteWebhook",
            &json!({
                "action": "deleteWebhook",
                "url": url,
            }),
        )
        .await?;
        Ok(())
    }
}
