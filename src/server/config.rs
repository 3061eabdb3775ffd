use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holonet.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Whether list endpoints answer an empty collection with 400 instead of 200.
    pub empty_list_as_error: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map(|url| normalize_database_url(&url))
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    reason: e.to_string(),
                    value,
                })?,
            Err(_) => DEFAULT_PORT,
        };

        let empty_list_as_error = match std::env::var("EMPTY_LIST_AS_ERROR") {
            Ok(value) => parse_flag(&value).ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "EMPTY_LIST_AS_ERROR".to_string(),
                reason: "expected true, false, 1 or 0".to_string(),
                value,
            })?,
            Err(_) => true,
        };

        Ok(Self {
            database_url,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            empty_list_as_error,
        })
    }

    /// Address the HTTP listener binds to, as `host:port`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rewrites the legacy `postgres://` scheme some hosting providers hand out.
fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{}", rest),
        None => url.to_string(),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_postgres_scheme() {
        assert_eq!(
            normalize_database_url("postgres://u:p@host/db"),
            "postgresql://u:p@host/db"
        );
        assert_eq!(
            normalize_database_url("postgresql://u:p@host/db"),
            "postgresql://u:p@host/db"
        );
        assert_eq!(
            normalize_database_url("sqlite::memory:"),
            "sqlite::memory:"
        );
    }

    #[test]
    fn parses_flags() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("yes"), None);
    }
}
