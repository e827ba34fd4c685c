//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `HEALSUMM_*` environment variables.
//! Generation backend settings live in
//! [`BackendConfig`](crate::generation::BackendConfig).

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

/// Service configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `HEALSUMM_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Directory for `summaries.json` and `evaluation.csv`. Default: `./results`.
    pub results_dir: PathBuf,

    /// Directory scanned for `*.txt` articles in batch mode. Default: `./data/raw_articles`.
    pub articles_dir: PathBuf,

    /// Optional domain term list for the secondary entity extractor.
    pub domain_lexicon: Option<PathBuf>,

    /// Articles processed concurrently in batch mode. Default: `1`.
    pub batch_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            results_dir: PathBuf::from("results"),
            articles_dir: PathBuf::from("data/raw_articles"),
            domain_lexicon: None,
            batch_concurrency: 1,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "HEALSUMM_PORT";
    const ENV_BIND_ADDR: &'static str = "HEALSUMM_BIND_ADDR";
    const ENV_RESULTS_DIR: &'static str = "HEALSUMM_RESULTS_DIR";
    const ENV_ARTICLES_DIR: &'static str = "HEALSUMM_ARTICLES_DIR";
    const ENV_DOMAIN_LEXICON: &'static str = "HEALSUMM_DOMAIN_LEXICON";
    const ENV_BATCH_CONCURRENCY: &'static str = "HEALSUMM_BATCH_CONCURRENCY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let results_dir = Self::parse_path_from_env(Self::ENV_RESULTS_DIR, defaults.results_dir);
        let articles_dir = Self::parse_path_from_env(Self::ENV_ARTICLES_DIR, defaults.articles_dir);
        let domain_lexicon = Self::parse_optional_path_from_env(Self::ENV_DOMAIN_LEXICON);
        let batch_concurrency = Self::parse_concurrency_from_env(defaults.batch_concurrency)?;

        Ok(Self {
            port,
            bind_addr,
            results_dir,
            articles_dir,
            domain_lexicon,
            batch_concurrency,
        })
    }

    /// Validates paths and basic invariants (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.results_dir.exists() && !self.results_dir.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.results_dir.clone(),
            });
        }

        if self.articles_dir.exists() && !self.articles_dir.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.articles_dir.clone(),
            });
        }

        // A missing lexicon is tolerated (the domain extractor is optional),
        // but a path that points at a directory is a misconfiguration.
        if let Some(ref path) = self.domain_lexicon
            && path.is_dir()
        {
            return Err(ConfigError::NotAFile { path: path.clone() });
        }

        if self.batch_concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency {
                value: self.batch_concurrency.to_string(),
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Path of the JSON result store.
    pub fn summaries_path(&self) -> PathBuf {
        self.results_dir.join(crate::storage::SUMMARIES_FILE)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_concurrency_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_BATCH_CONCURRENCY) {
            Ok(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(ConfigError::InvalidConcurrency { value }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
