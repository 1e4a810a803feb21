use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level config (tgkit.toml + TGKIT_* env overrides).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TgkitConfig {
    pub bot: BotConfig,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct BotConfig {
    pub token: String,
    /// Bot API server root, without the `/bot<token>` suffix.
    /// Point this at a self-hosted Bot API server or a test double.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. Zero disables it.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl BotConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// The token is a credential: never let it reach the logs.
impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl TgkitConfig {
    /// Load config from a TOML file with TGKIT_* env var overrides.
    ///
    /// Uses the explicit path when given, else `~/.tgkit/tgkit.toml`.
    /// Nested keys are separated by a double underscore:
    /// `TGKIT_BOT__TOKEN`, `TGKIT_BOT__BASE_URL`.
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        debug!(path = %path, "loading tgkit config");

        Self::from_figment(
            Figment::new()
                .merge(Toml::file(&path))
                .merge(Env::prefixed("TGKIT_").split("__")),
        )
    }

    pub fn from_figment(figment: Figment) -> crate::error::Result<Self> {
        figment
            .extract()
            .map_err(|e| crate::error::CoreError::Config(e.to_string()))
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.tgkit/tgkit.toml", home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_optional_fields() {
        let toml = r#"
            [bot]
            token = "123:abc"
        "#;
        let config = TgkitConfig::from_figment(Figment::new().merge(Toml::string(toml))).unwrap();
        assert_eq!(config.bot.token, "123:abc");
        assert_eq!(config.bot.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.bot.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let toml = r#"
            [bot]
            token = "123:abc"
            base_url = "http://localhost:8081"
            timeout_secs = 5
        "#;
        let config = TgkitConfig::from_figment(Figment::new().merge(Toml::string(toml))).unwrap();
        assert_eq!(config.bot.base_url, "http://localhost:8081");
        assert_eq!(config.bot.timeout_secs, 5);
    }

    #[test]
    fn missing_token_is_a_config_error() {
        let toml = "[bot]\nbase_url = \"http://localhost\"\n";
        let err = TgkitConfig::from_figment(Figment::new().merge(Toml::string(toml))).unwrap_err();
        assert!(matches!(err, crate::error::CoreError::Config(_)));
    }

    #[test]
    fn debug_output_redacts_token() {
        let rendered = format!("{:?}", BotConfig::new("123:secret"));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
