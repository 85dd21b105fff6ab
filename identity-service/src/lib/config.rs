use std::env;

use config::builder::ConfigBuilder;
use config::builder::DefaultState;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Flat environment variables that override the `jwt` section.
const TOKEN_OVERRIDES: [(&str, &str); 4] = [
    ("jwt.access_secret", "ACCESS_TOKEN_SECRET"),
    ("jwt.refresh_secret", "REFRESH_TOKEN_SECRET"),
    ("jwt.access_ttl_minutes", "ACCESS_TOKEN_TTL_MINUTES"),
    ("jwt.refresh_ttl_hours", "REFRESH_TOKEN_TTL_HOURS"),
];

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Token settings. Absent values stay absent and surface as token errors.
#[derive(Deserialize, Clone, Default)]
pub struct JwtConfig {
    pub access_secret: Option<String>,
    pub refresh_secret: Option<String>,
    pub access_ttl_minutes: Option<i64>,
    pub refresh_ttl_hours: Option<i64>,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("access_secret", &self.access_secret.as_ref().map(|_| "<redacted>"))
            .field("refresh_secret", &self.refresh_secret.as_ref().map(|_| "<redacted>"))
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_hours", &self.refresh_ttl_hours)
            .finish()
    }
}

impl From<&JwtConfig> for auth::TokenConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            access_secret: config.access_secret.clone(),
            refresh_secret: config.refresh_secret.clone(),
            access_ttl_minutes: config.access_ttl_minutes,
            refresh_ttl_hours: config.refresh_ttl_hours,
        }
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Token variables (ACCESS_TOKEN_SECRET, REFRESH_TOKEN_TTL_HOURS, etc.)
    /// 2. Environment variables (DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 3. Environment-specific config file (config/{environment}.toml)
    /// 4. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        // Development values are opt-in, so an unset RUN_MODE never picks them up
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "production".to_string());

        let builder = config::Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::with_prefix("").separator("__"));

        with_token_overrides(builder, |name| env::var(name).ok())?
            .build()?
            .try_deserialize()
    }
}

fn with_token_overrides(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    for (key, variable) in TOKEN_OVERRIDES {
        builder = builder.set_override_option(key, lookup(variable))?;
    }
    Ok(builder)
}
