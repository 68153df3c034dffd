// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::core::net::FetchStrategy;
use crate::data::MetricKey;
use crate::specs::rates::Extraction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub sources: Sources,
    pub state_file: PathBuf,
    pub fetch_strategy: FetchStrategy,
    pub extraction: Extraction,
    /// `None` disables delivery; the run still goes end to end.
    pub telegram: Option<TelegramCredentials>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            sources: Sources::default(),
            state_file: PathBuf::from(PRICE_FILE),
            fetch_strategy: FetchStrategy::default(),
            extraction: Extraction::default(),
            telegram: None,
        }
    }
}

impl AppOptions {
    /// Defaults plus Telegram credentials from `TOKEN` / `CHAT_ID`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    /// Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let telegram = match (read(TOKEN_VAR), read(CHAT_ID_VAR)) {
            (Some(token), Some(chat_id)) => Some(TelegramCredentials { token, chat_id }),
            _ => None,
        };

        Self { telegram, ..Self::default() }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct TelegramCredentials {
    pub token: String,
    pub chat_id: String,
}

// Keep the bot token out of logs.
impl std::fmt::Debug for TelegramCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramCredentials")
            .field("token", &"***")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sources {
    pub gold_url: String,
    pub silver_url: String,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            gold_url: s!(GOLD_URL),
            silver_url: s!(SILVER_URL),
        }
    }
}

/// One fetched page and the metrics read from it.
#[derive(Clone, Copy, Debug)]
pub struct SourcePage<'a> {
    pub name: &'static str,
    pub url: &'a str,
    pub metrics: &'static [MetricKey],
}

impl Sources {
    /// Pages in fetch order. Gold carries both carat rates.
    pub fn pages(&self) -> [SourcePage<'_>; 2] {
        [
            SourcePage {
                name: "Gold",
                url: &self.gold_url,
                metrics: &[MetricKey::Gold24K, MetricKey::Gold22K],
            },
            SourcePage {
                name: "Silver",
                url: &self.silver_url,
                metrics: &[MetricKey::Silver],
            },
        ]
    }

    pub fn url_for(&self, key: MetricKey) -> &str {
        match key {
            MetricKey::Gold24K | MetricKey::Gold22K => &self.gold_url,
            MetricKey::Silver => &self.silver_url,
        }
    }
}
