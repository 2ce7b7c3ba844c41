use crate::cli::Command;
use crate::error::CliError;

use cubeconnect_client::{Messaging, TemplateMessage};

use log::{debug, info};
use serde_json::Value;

/// Run one command against the given messaging backend.
///
/// # Returns
///
/// The API result as JSON, ready to print.
///
/// # Errors
///
/// Returns [`CliError::Api`] if the call fails, or [`CliError::Cli`] if the
/// result cannot be converted to JSON.
pub async fn run(command: &Command, messaging: &dyn Messaging) -> Result<Value, CliError> {
    match command {
        Command::SendText { phone, body } => {
            debug!("Sending text message ({} chars)", body.chars().count());
            let response = messaging.send_text(phone, body).await?;
            info!(
                "Text message {}: log id {}, category '{}'",
                response.status, response.message_log_id, response.conversation_category
            );
            Ok(Value::Object(response.to_map()))
        }
        Command::SendTemplate {
            phone,
            name,
            params,
            language,
        } => {
            let template = TemplateMessage::new(name)
                .with_params(params)
                .with_language(language);
            debug!(
                "Sending template '{}' ({}) with {} params",
                template.name(),
                template.language_code(),
                template.params().len()
            );
            let response = messaging.send_template(phone, &template).await?;
            info!(
                "Template message {}: log id {}, category '{}'",
                response.status, response.message_log_id, response.conversation_category
            );
            Ok(Value::Object(response.to_map()))
        }
        Command::Health => {
            let health = messaging.health().await?;
            info!("Platform status: {}", health.status);
            serde_json::to_value(&health)
                .map_err(|e| CliError::cli(format!("Failed to encode health status: {e}")))
        }
    }
}
