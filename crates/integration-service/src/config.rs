//! Service configuration, read once at startup.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `HOST` | bind host | `0.0.0.0` |
//! | `PORT` | bind port | `9090` |
//! | `DOWNSTREAM_BASE_URL` | where auth/data/notify live | the server's own address |
//! | `DELETE_ENABLED` | allow destructive actions | `false` |

use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 9090;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `None` means the simulated collaborators mounted on this server.
    pub downstream_base_url: Option<String>,
    pub destructive_actions_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            downstream_base_url: None,
            destructive_actions_enabled: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Missing or unparsable values fall back to
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, "Invalid PORT, using default");
                defaults.port
            }),
            None => defaults.port,
        };

        let destructive_actions_enabled = lookup("DELETE_ENABLED")
            .and_then(|raw| parse_flag(&raw))
            .unwrap_or(false);

        Self {
            host: lookup("HOST")
                .filter(|host| !host.trim().is_empty())
                .unwrap_or(defaults.host),
            port,
            downstream_base_url: lookup("DOWNSTREAM_BASE_URL").filter(|url| !url.trim().is_empty()),
            destructive_actions_enabled,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parses the boolean spellings accepted for flags.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
