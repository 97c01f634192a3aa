use std::fmt::Display;
use std::str::FromStr;

use tourdesk_core::language::{Language, DEFAULT_LANGUAGE};
use tourdesk_core::pagination::{DEFAULT_PER_PAGE, MAX_PER_PAGE};

/// A configuration variable that is present but cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on draining in-flight requests after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    /// Page size used when a listing request omits `per_page`.
    pub default_page_size: i64,
    /// Largest `per_page` a client may ask for.
    pub max_page_size: i64,
    /// Language used when a request carries no language hint.
    pub default_language: Language,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origins: vec!["http://localhost:5173".to_string()],
            request_timeout_secs: 30,
            shutdown_timeout_secs: 30,
            default_page_size: DEFAULT_PER_PAGE,
            max_page_size: MAX_PER_PAGE,
            default_language: DEFAULT_LANGUAGE,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                    |
    /// | `DEFAULT_PAGE_SIZE`     | `10`                    |
    /// | `MAX_PAGE_SIZE`         | `100`                   |
    /// | `DEFAULT_LANGUAGE`      | `en`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults.cors_origins,
        };

        let default_language = match lookup("DEFAULT_LANGUAGE") {
            Some(raw) => Language::from_code(&raw).map_err(|e| ConfigError::Invalid {
                var: "DEFAULT_LANGUAGE",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.default_language,
        };

        let default_page_size = parse_var(&lookup, "DEFAULT_PAGE_SIZE", defaults.default_page_size)?;
        let max_page_size = parse_var(&lookup, "MAX_PAGE_SIZE", defaults.max_page_size)?;
        if default_page_size < 1 || max_page_size < default_page_size {
            return Err(ConfigError::Invalid {
                var: "MAX_PAGE_SIZE",
                value: max_page_size.to_string(),
                reason: format!(
                    "page sizes must satisfy 1 <= DEFAULT_PAGE_SIZE ({default_page_size}) <= MAX_PAGE_SIZE"
                ),
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            cors_origins,
            request_timeout_secs: parse_var(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            )?,
            shutdown_timeout_secs: parse_var(
                &lookup,
                "SHUTDOWN_TIMEOUT_SECS",
                defaults.shutdown_timeout_secs,
            )?,
            default_page_size,
            max_page_size,
            default_language,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.max_page_size, 100);
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = from_pairs(&[
            ("PORT", "8080"),
            ("CORS_ORIGINS", "https://a.example, ,https://b.example"),
            ("DEFAULT_LANGUAGE", "AR"),
            ("DEFAULT_PAGE_SIZE", "20"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.default_language, Language::Ar);
        assert_eq!(config.default_page_size, 20);
    }

    #[test]
    fn bad_port_is_reported() {
        assert_matches!(
            from_pairs(&[("PORT", "eighty")]),
            Err(ConfigError::Invalid { var: "PORT", .. })
        );
    }

    #[test]
    fn unsupported_default_language_is_reported() {
        assert_matches!(
            from_pairs(&[("DEFAULT_LANGUAGE", "pt")]),
            Err(ConfigError::Invalid { var: "DEFAULT_LANGUAGE", .. })
        );
    }

    #[test]
    fn default_page_size_cannot_exceed_max() {
        assert!(from_pairs(&[("DEFAULT_PAGE_SIZE", "50"), ("MAX_PAGE_SIZE", "25")]).is_err());
    }
}
