use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub log: LogSettings,
    pub films: FilmSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// Used when `RUST_LOG` is not set.
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilmSettings {
    pub popular_default_count: i64,
}

impl Settings {
    /// Defaults, then `filmorate.toml` if present, then `FILMORATE__*`
    /// environment variables (`FILMORATE__SERVER__PORT=9000`).
    pub fn load() -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::with_name("filmorate").required(false))
            .add_source(
                Environment::with_prefix("FILMORATE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080_i64)?
            .set_default("log.filter", "filmorate_server=info,tower_http=info")?
            .set_default(
                "films.popular_default_count",
                crate::application::films::commands::popular_films::DEFAULT_COUNT,
            )
    }
}
