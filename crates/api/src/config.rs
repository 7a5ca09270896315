use std::fmt::Display;
use std::str::FromStr;

use crate::relay::EmailRelayConfig;

/// Runtime settings for the calculator server.
///
/// Every field has a local-development default; deployments override them
/// through the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind (default: `0.0.0.0`).
    pub host: String,
    /// TCP port (default: `3000`).
    pub port: u16,
    /// Origins allowed by CORS, from the comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// Per-request deadline in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on draining in-flight requests after a shutdown signal
    /// (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Credentials for the contact-form relay. Individually optional.
    pub email: EmailRelayConfig,
}

impl ServerConfig {
    /// Read settings from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    ///
    /// The relay variables are documented on [`EmailRelayConfig::from_env`].
    ///
    /// Panics on a value that does not parse, so a bad deployment fails at
    /// startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parsed(&lookup, "PORT", 3000),
            cors_origins,
            request_timeout_secs: parsed(&lookup, "REQUEST_TIMEOUT_SECS", 30),
            shutdown_timeout_secs: parsed(&lookup, "SHUTDOWN_TIMEOUT_SECS", 30),
            email: EmailRelayConfig::from_lookup(&lookup),
        }
    }
}

fn parsed<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{name} has invalid value '{raw}': {e}")),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_environment_uses_defaults() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.shutdown_timeout_secs, 30);
        assert!(config.email.credentials().is_err());
    }

    #[test]
    fn overrides_are_parsed() {
        let config = ServerConfig::from_lookup(|name| {
            let value = match name {
                "PORT" => Some("8080"),
                "CORS_ORIGINS" => Some("https://a.example, ,https://b.example"),
                "REQUEST_TIMEOUT_SECS" => Some(" 5 "),
                _ => None,
            };
            value.map(String::from)
        });
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    #[should_panic(expected = "PORT has invalid value")]
    fn invalid_port_fails_fast() {
        ServerConfig::from_lookup(|name| (name == "PORT").then(|| "http".to_string()));
    }
}
