use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Deserialize, Clone)]
pub struct TrackingConfig {
    pub api: ApiSettings,
    #[serde(default)]
    pub search: SearchSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub endpoint: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchSettings {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl SearchSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl TrackingConfig {
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

pub fn load_tracking_config() -> anyhow::Result<TrackingConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/tracking"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
