// src/notify.rs
//! Message formatting and Telegram delivery.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;
use thiserror::Error;

use crate::config::consts::{LOCALITY, PARSE_MODE, REQUEST_TIMEOUT_SECS, TELEGRAM_API};
use crate::config::options::{Sources, TelegramCredentials};
use crate::data::{MetricKey, Snapshot};
use crate::diff::{annotation, price_delta};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("could not reach Telegram: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Telegram rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Push capability for a finished message.
pub trait Notify {
    fn send(&self, text: &str) -> Result<(), NotifyError>;
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

pub struct TelegramNotifier {
    client: Client,
    endpoint: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(creds: &TelegramCredentials) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint(TELEGRAM_API, &creds.token),
            chat_id: creds.chat_id.clone(),
        })
    }
}

impl Notify for TelegramNotifier {
    fn send(&self, text: &str) -> Result<(), NotifyError> {
        let payload = SendMessage { chat_id: &self.chat_id, text, parse_mode: PARSE_MODE };
        let resp = self.client.post(&self.endpoint).json(&payload).send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(NotifyError::Rejected { status: status.as_u16(), body });
        }
        Ok(())
    }
}

/// `<api>/bot<token>/sendMessage`
pub fn endpoint(api_base: &str, token: &str) -> String {
    join!(api_base.trim_end_matches('/'), "/bot", token, "/sendMessage")
}

fn marker(key: MetricKey) -> &'static str {
    match key {
        MetricKey::Gold24K => "🟡",
        MetricKey::Gold22K => "🟠",
        MetricKey::Silver => "⚪",
    }
}

/// Markdown update message: one linked line per metric with its delta
/// against `last`, then a link to the source site.
pub fn format_message(current: &Snapshot, last: &Snapshot, sources: &Sources) -> String {
    let mut msg = format!("💰 *{LOCALITY} Price Update*\n\n");
    for (key, value) in current.iter() {
        let delta = annotation(price_delta(value, last.get(key)));
        msg.push_str(&format!(
            "{} *[{}]({}):* ₹{}/gm{}\n",
            marker(key),
            key.title(),
            sources.url_for(key),
            value,
            delta
        ));
    }
    msg.push_str(&format!("\n📈 [Check Source on Website]({})", sources.gold_url));
    msg
}
