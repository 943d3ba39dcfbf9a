//! # Configuration
//!
//! Server and logging policy read from the environment.
//!
//! - `ROADMAP_CORS_ORIGINS`: comma-separated allowed origins, or `*` for all
//!   (default: localhost only)
//! - `ROADMAP_RATE_LIMIT`: requests per second (default: 100, 0 disables)
//! - `ROADMAP_LOG_FORMAT`: `json` for machine-parseable logs (default: text)

/// Default rate limit: 100 requests per second.
pub const DEFAULT_RATE_LIMIT: u32 = 100;

/// Origins allowed when `ROADMAP_CORS_ORIGINS` is unset.
pub const LOCALHOST_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:8080",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:8080",
];

/// Which origins the API answers cross-origin requests for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin (`*`).
    Any,
    /// Localhost development origins only.
    Localhost,
    /// An explicit list.
    List(Vec<String>),
}

impl CorsOrigins {
    /// Interpret the raw `ROADMAP_CORS_ORIGINS` value.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => CorsOrigins::Localhost,
            Some("*") => CorsOrigins::Any,
            Some(list) => {
                let origins: Vec<String> = list
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
                if origins.is_empty() {
                    CorsOrigins::Localhost
                } else {
                    CorsOrigins::List(origins)
                }
            }
        }
    }
}

/// HTTP server policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub cors_origins: CorsOrigins,
    /// Requests per second; 0 disables rate limiting.
    pub rate_limit: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            cors_origins: CorsOrigins::Localhost,
            rate_limit: DEFAULT_RATE_LIMIT,
        }
    }
}

impl ServerConfig {
    /// Read the policy from environment variables.
    pub fn from_env() -> Self {
        let cors = std::env::var("ROADMAP_CORS_ORIGINS").ok();
        let rate = std::env::var("ROADMAP_RATE_LIMIT").ok();
        Self::from_values(cors.as_deref(), rate.as_deref())
    }

    /// Build the policy from raw variable values.
    pub fn from_values(cors: Option<&str>, rate_limit: Option<&str>) -> Self {
        let rate_limit = match rate_limit.map(str::trim) {
            None => DEFAULT_RATE_LIMIT,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "ROADMAP_RATE_LIMIT '{}' is not a number, using {}",
                    raw,
                    DEFAULT_RATE_LIMIT
                );
                DEFAULT_RATE_LIMIT
            }),
        };

        Self {
            cors_origins: CorsOrigins::parse(cors),
            rate_limit,
        }
    }

    /// Policy for tests: every origin, no rate limit.
    pub fn permissive() -> Self {
        Self {
            cors_origins: CorsOrigins::Any,
            rate_limit: 0,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Read `ROADMAP_LOG_FORMAT`; anything but `json` means text.
    pub fn from_env() -> Self {
        match std::env::var("ROADMAP_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_defaults_to_localhost() {
        assert_eq!(CorsOrigins::parse(None), CorsOrigins::Localhost);
        assert_eq!(CorsOrigins::parse(Some("  ")), CorsOrigins::Localhost);
        assert_eq!(CorsOrigins::parse(Some(" , ,")), CorsOrigins::Localhost);
    }

    #[test]
    fn cors_wildcard_and_list() {
        assert_eq!(CorsOrigins::parse(Some("*")), CorsOrigins::Any);
        assert_eq!(
            CorsOrigins::parse(Some("https://a.example, https://b.example")),
            CorsOrigins::List(vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ])
        );
    }

    #[test]
    fn rate_limit_parsing() {
        assert_eq!(ServerConfig::from_values(None, None).rate_limit, 100);
        assert_eq!(ServerConfig::from_values(None, Some("0")).rate_limit, 0);
        assert_eq!(ServerConfig::from_values(None, Some(" 25 ")).rate_limit, 25);
        assert_eq!(ServerConfig::from_values(None, Some("fast")).rate_limit, 100);
    }
}
