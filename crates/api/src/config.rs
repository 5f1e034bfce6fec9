use std::fmt::Display;
use std::str::FromStr;

use filmcrew_core::validation::FieldRules;

/// Runtime settings, read from the environment (and `.env` via `dotenvy`).
///
/// | Env var                | Default                 |
/// |------------------------|-------------------------|
/// | `HOST`                 | `0.0.0.0`               |
/// | `PORT`                 | `3000`                  |
/// | `DATABASE_URL`         | `sqlite://filmcrew.db`  |
/// | `CORS_ORIGINS`         | `http://localhost:5173` |
/// | `REQUEST_TIMEOUT_SECS` | `30`                    |
/// | `REQUIRE_NAME`         | `false`                 |
/// | `MAX_NAME_LEN`         | unset                   |
/// | `MAX_BIO_LEN`          | unset                   |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Comma-separated in `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    /// Optional constraints on submitted people. All off by default.
    pub field_rules: FieldRules,
}

impl ServerConfig {
    /// Load from the environment. Panics on values that do not parse, so a
    /// typo fails at startup rather than at the first request.
    pub fn from_env() -> Self {
        Self {
            host: var_or("HOST", "0.0.0.0".to_string()),
            port: var_or("PORT", 3000),
            database_url: var_or("DATABASE_URL", "sqlite://filmcrew.db".to_string()),
            cors_origins: split_list(&var_or(
                "CORS_ORIGINS",
                "http://localhost:5173".to_string(),
            )),
            request_timeout_secs: var_or("REQUEST_TIMEOUT_SECS", 30),
            field_rules: FieldRules {
                require_name: std::env::var("REQUIRE_NAME")
                    .map(|v| parse_flag(&v))
                    .unwrap_or(false),
                max_name_len: var_opt("MAX_NAME_LEN"),
                max_bio_len: var_opt("MAX_BIO_LEN"),
            },
        }
    }
}

fn var_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => panic!("{key}={raw:?} is invalid: {e}"),
    }
}

fn var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    var_opt(key).unwrap_or(default)
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
