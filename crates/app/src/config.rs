use std::str::FromStr;

use rowboard_swapi::DEFAULT_PEOPLE_URL;

/// Which table the host mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Rows fetched from the people listing.
    Remote,
    /// Rows seeded from local sample data.
    Seeded,
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "seeded" => Ok(Self::Seeded),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("ROWBOARD_VARIANT must be `remote` or `seeded` (got {0:?})")]
    UnknownVariant(String),
}

/// Host configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub variant: Variant,
    /// Listing URL for the remote variant.
    pub people_url: String,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                              |
    /// |-----------------------|--------------------------------------|
    /// | `ROWBOARD_VARIANT`    | `remote`                             |
    /// | `ROWBOARD_PEOPLE_URL` | `https://swapi.py4e.com/api/people/` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](AppConfig::from_env) but reading values through
    /// `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let variant = match lookup("ROWBOARD_VARIANT") {
            Some(raw) => raw.parse()?,
            None => Variant::Remote,
        };

        let people_url = lookup("ROWBOARD_PEOPLE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PEOPLE_URL.to_string());

        Ok(Self {
            variant,
            people_url,
        })
    }
}
