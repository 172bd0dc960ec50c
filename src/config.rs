use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/trilingo.json";

pub const CHAT_WEBHOOK_ENV: &str = "TRILINGO_WEBHOOK_CHAT";
pub const UNLOCK_WEBHOOK_ENV: &str = "TRILINGO_WEBHOOK_UNLOCK";
pub const SCHEDULE_WEBHOOK_ENV: &str = "TRILINGO_WEBHOOK_SCHEDULE";

const DEFAULT_CHAT_WEBHOOK: &str = "http://localhost:5678/webhook-test/chat-trilingo";
const DEFAULT_UNLOCK_WEBHOOK: &str = "http://localhost:5678/webhook-test/desbloqueio";
const DEFAULT_SCHEDULE_WEBHOOK: &str = "http://localhost:5678/webhook-test/api/v1/agendamento";

/// Ba endpoint webhook của trợ lý từ xa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub chat_webhook: String,
    pub unblock_webhook: String,
    pub schedule_webhook: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chat_webhook: DEFAULT_CHAT_WEBHOOK.to_string(),
            unblock_webhook: DEFAULT_UNLOCK_WEBHOOK.to_string(),
            schedule_webhook: DEFAULT_SCHEDULE_WEBHOOK.to_string(),
        }
    }
}

/// Đọc file JSON rồi áp dụng biến môi trường (kể cả từ `.env`).
pub fn load_config(path: &str) -> AppConfig {
    let config = load_config_file(path);
    apply_env_overrides(config, |key| env::var(key).ok())
}

pub fn load_config_file(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring malformed endpoints file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "No webhook endpoints file at {} ({err}); using local placeholder URLs",
                path.display()
            );
            AppConfig::default()
        }
    }
}

pub fn apply_env_overrides<F>(mut config: AppConfig, lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    let overrides = [
        (CHAT_WEBHOOK_ENV, &mut config.chat_webhook),
        (UNLOCK_WEBHOOK_ENV, &mut config.unblock_webhook),
        (SCHEDULE_WEBHOOK_ENV, &mut config.schedule_webhook),
    ];

    for (key, slot) in overrides {
        if let Some(value) = lookup(key) {
            let value = value.trim();
            if !value.is_empty() {
                log::debug!("{key} overrides configured endpoint");
                *slot = value.to_string();
            }
        }
    }

    config
}
