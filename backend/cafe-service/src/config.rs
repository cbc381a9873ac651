/// Configuration management for Cafe Service
///
/// This module handles loading configuration from environment variables
/// (optionally seeded from a `.env` file by the binary).
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Access token configuration
    pub jwt: JwtConfig,
    /// Payment processor configuration
    pub payments: PaymentConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
    /// HTTP worker count
    pub workers: usize,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// MongoDB configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string
    pub uri: String,
    /// Database holding all collections
    pub name: String,
}

/// Access token configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Shared HS256 secret
    pub secret: String,
    /// Token lifetime in seconds
    pub ttl_secs: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

/// Payment processor configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Stripe secret key
    pub secret_key: String,
    /// Stripe REST API base URL
    pub api_base: String,
    /// ISO currency code for payment intents
    pub currency: String,
    /// Request timeout towards the processor
    pub timeout_ms: u64,
}

impl std::fmt::Debug for PaymentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentConfig")
            .field("secret_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("currency", &self.currency)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

const DEFAULT_ALLOWED_ORIGINS: &str =
    "http://localhost:5173,https://caffeine-haven.vercel.app,https://caffeinehaven-64a30.web.app";

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let production = app_env.eq_ignore_ascii_case("production");

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or_default("PORT", 5000)?,
                workers: parse_env_or_default("HTTP_WORKERS", 4)?,
            },
            cors: {
                let allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string());

                if production && allowed_origins.split(',').any(|o| o.trim() == "*") {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            database: DatabaseConfig {
                uri: std::env::var("MONGODB_URI")
                    .or_else(|_| std::env::var("URI"))
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
                name: std::env::var("MONGODB_DATABASE")
                    .unwrap_or_else(|_| "CaffeineHaven".to_string()),
            },
            jwt: {
                let secret = match std::env::var("ACCESS_WEB_TOKEN") {
                    Ok(value) if !value.trim().is_empty() => value,
                    _ if production => {
                        return Err("ACCESS_WEB_TOKEN must be set in production".to_string())
                    }
                    _ => {
                        tracing::warn!("ACCESS_WEB_TOKEN not set, using development secret");
                        "caffeine-haven-development-secret".to_string()
                    }
                };

                JwtConfig {
                    secret,
                    ttl_secs: parse_env_or_default(
                        "JWT_TTL_SECS",
                        crypto_core::jwt::ACCESS_TOKEN_EXPIRY_HOURS * 3600,
                    )?,
                }
            },
            payments: PaymentConfig {
                secret_key: std::env::var("STRIPE_SECRET_KEY").unwrap_or_default(),
                api_base: std::env::var("STRIPE_API_BASE")
                    .unwrap_or_else(|_| "https://api.stripe.com".to_string()),
                currency: std::env::var("PAYMENT_CURRENCY").unwrap_or_else(|_| "usd".to_string()),
                timeout_ms: parse_env_or_default("STRIPE_TIMEOUT_MS", 10_000)?,
            },
        })
    }

    /// Allowed origins split into trimmed entries
    pub fn allowed_origins(&self) -> Vec<&str> {
        self.cors
            .allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .collect()
    }
}

fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse()
            .map_err(|e| format!("Failed to parse {}='{}': {}", key, val, e)),
        Err(_) => Ok(default),
    }
}
