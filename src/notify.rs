//! The notify module delivers the final message through the Telegram Bot API.

use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, error, info};
use reqwest::Client;
use serde::Serialize;

use crate::config::{Config, endpoint};

/// Result of a delivery attempt. Delivery never raises.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Delivery {
    Sent,
    /// Telegram credentials are missing; the message was printed instead.
    Skipped,
    /// Telegram answered with a non-success status.
    Rejected { status: u16 },
    /// The request did not complete.
    Failed,
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    disable_web_page_preview: bool,
}

/// Sends `message` to the configured chat with a single `sendMessage` call.
///
/// Missing credentials, rejected requests and network failures are logged and
/// reported through the returned [`Delivery`]; nothing is retried.
///
/// # Arguments
///
/// * `client` - HTTP client shared by the run
/// * `config` - Configuration holding the bot token, chat id and API URL
/// * `timeout` - Upper bound for the whole request
/// * `message` - Final message text
pub async fn notify(
    client: &Client,
    config: &Config,
    timeout: Duration,
    message: &str,
) -> Delivery {
    if !config.has_telegram() {
        error!("❌ Missing TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID");
        println!("{message}");
        return Delivery::Skipped;
    }

    match send_message(client, config, timeout, message).await {
        Ok(delivery) => delivery,
        Err(err) => {
            error!("❌ Telegram request failed: {err:#}");
            Delivery::Failed
        }
    }
}

async fn send_message(
    client: &Client,
    config: &Config,
    timeout: Duration,
    message: &str,
) -> Result<Delivery> {
    let url = endpoint(
        &config.telegram_api_url,
        &format!("bot{}/sendMessage", config.telegram_bot_token),
    )?;
    debug!(
        "Sending {} characters to chat {}",
        message.chars().count(),
        config.telegram_chat_id
    );

    let response = client
        .post(url)
        .timeout(timeout)
        .json(&SendMessage {
            chat_id: &config.telegram_chat_id,
            text: message,
            disable_web_page_preview: true,
        })
        .send()
        .await
        .map_err(reqwest::Error::without_url)
        .context("Request failed")?;

    let status = response.status();
    if status.is_success() {
        info!("✅ Sent.");
        return Ok(Delivery::Sent);
    }

    let body = response.text().await.unwrap_or_default();
    error!("❌ Telegram error: {} {body}", status.as_u16());
    Ok(Delivery::Rejected {
        status: status.as_u16(),
    })
}
