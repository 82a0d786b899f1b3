use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
    pub upstream: UpstreamConfig,
    pub jsonwebtoken: JsonWebTokenConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
    /// OTLP collector for spans. Spans are only logged when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otlp_endpoint: Option<String>,
}

/// The farm backend every request is forwarded to.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Shared secret of the HS256 tokens the farm backend signs.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct JsonWebTokenConfig {
    pub secret: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct CorsConfig {
    pub origins: Vec<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(AppConfig {
                service: ServiceConfig {
                    name: "agtech-portal".to_string(),
                    host: "127.0.0.1".to_string(),
                    port: 8080,
                },
                logging: LoggingConfig {
                    level: "info".to_string(),
                    otlp_endpoint: None,
                },
                upstream: UpstreamConfig {
                    base_url: "http://127.0.0.1:8000/api".to_string(),
                    timeout_secs: 10,
                },
                jsonwebtoken: JsonWebTokenConfig {
                    secret: String::new(),
                },
                cors: CorsConfig {
                    origins: vec!["http://localhost:3000".to_string()],
                },
            }))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()
    }
}
