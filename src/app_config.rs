use config::Config;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    geocoder: Geocoder,
    map: Map,
}

impl AppConfig {
    /// Loads the configuration from an optional `config` file, an optional
    /// `config_local` override and the environment, layered over built-in
    /// defaults so the tool runs without any file present.
    pub fn load() -> Self {
        Config::builder()
            .set_default("geocoder.url", "https://nominatim.openstreetmap.org")
            .unwrap()
            .set_default("geocoder.user_agent", concat!("travelsplit/", env!("CARGO_PKG_VERSION")))
            .unwrap()
            .set_default("geocoder.timeout_ms", 10_000_i64)
            .unwrap()
            .set_default("geocoder.pause_ms", 1_000_i64)
            .unwrap()
            .set_default("geocoder.max_attempts", 5_i64)
            .unwrap()
            .set_default("map.file", "travel_map.html")
            .unwrap()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn geocoder(&self) -> &Geocoder {
        &self.geocoder
    }

    pub fn map(&self) -> &Map {
        &self.map
    }
}

#[derive(Debug, Deserialize)]
pub struct Geocoder {
    url: String,
    user_agent: String,
    timeout_ms: u64,
    pause_ms: u64,
    max_attempts: u32,
}

impl Geocoder {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Pause inserted after every lookup to respect the service's rate limit.
    pub fn lookup_pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    /// Maximum lookup attempts per stop before the run gives up.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

#[derive(Debug, Deserialize)]
pub struct Map {
    file: String,
}

impl Map {
    pub fn file(&self) -> &str {
        &self.file
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                geocoder: Geocoder {
                    url: "https://geocoder.url".to_string(),
                    user_agent: "travelsplit tests".to_string(),
                    timeout_ms: 1_000,
                    pause_ms: 0,
                    max_attempts: 3,
                },
                map: Map {
                    file: "travel_map.html".to_string(),
                },
            },
        }
    }

    pub fn geocoder_url(mut self, url: String) -> Self {
        self.config.geocoder.url = url;
        self
    }

    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.config.geocoder.max_attempts = max_attempts;
        self
    }

    pub fn map_file(mut self, file: String) -> Self {
        self.config.map.file = file;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
