use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub base_url: String,
    pub analysis_model: String,
    pub speech_model: String,
    pub voice_name: String,
    /// Name of the environment variable holding the API key. Read per call.
    pub api_key_env: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json_format: bool,
}

impl ServerSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

impl GeminiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Settings {
    /// Defaults, then `appsettings.{environment}` if present, then `APP_*` variables
    /// (nested keys separated by `__`, e.g. `APP_GEMINI__TIMEOUT_SECS`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.max_upload_mb", 20)?
            .set_default(
                "gemini.base_url",
                "https://generativelanguage.googleapis.com",
            )?
            .set_default("gemini.analysis_model", "gemini-2.5-flash")?
            .set_default("gemini.speech_model", "gemini-2.5-flash-preview-tts")?
            .set_default("gemini.voice_name", "Kore")?
            .set_default("gemini.api_key_env", "API_KEY")?
            .set_default("gemini.timeout_secs", 120)?
            .set_default("logging.level", "info,a11y_scan=debug,tower_http=debug")?
            .set_default("logging.json_format", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
