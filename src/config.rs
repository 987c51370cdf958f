use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".pkgdoc";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub pages: PagesConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Documentation source and cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Site that serves package pages, the package path is appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How long an extracted package stays cached
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Maximum number of cached packages (0 disables caching)
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

fn default_base_url() -> String {
    "https://pkg.go.dev/".to_string()
}

fn default_user_agent() -> String {
    format!("pkgdoc/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_cache_ttl_secs() -> u64 {
    600
}

fn default_cache_capacity() -> usize {
    64
}

/// Paged listing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesConfig {
    /// Entries per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Seconds without owner activity before a session expires
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,

    /// Seconds between idle sweeps
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            idle_timeout_secs: default_idle_timeout_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

fn default_page_size() -> usize {
    10
}

fn default_idle_timeout_secs() -> u64 {
    300
}

fn default_sweep_interval_secs() -> u64 {
    300
}

/// HTTP API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_http_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_http_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_http_host(),
            port: default_http_port(),
        }
    }
}

fn default_http_host() -> String {
    "127.0.0.1".to_string()
}

fn default_http_port() -> u16 {
    3000
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write logs to rotating files
    #[serde(default)]
    pub enabled: bool,

    /// Write logs to stderr
    #[serde(default = "default_true")]
    pub stderr: bool,

    /// Level for the file log: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log directory, relative paths are resolved against the working directory
    #[serde(default = "default_log_directory")]
    pub directory: PathBuf,

    /// hourly, daily, minutely or never
    #[serde(default = "default_rotation")]
    pub rotation: String,

    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            stderr: default_true(),
            level: default_log_level(),
            directory: default_log_directory(),
            rotation: default_rotation(),
            file_prefix: default_file_prefix(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> PathBuf {
    PathBuf::from(CONFIG_DIR).join("logs")
}

fn default_rotation() -> String {
    "daily".to_string()
}

fn default_file_prefix() -> String {
    "pkgdoc.log".to_string()
}

impl Config {
    /// Load configuration from the .pkgdoc directory
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = Self::config_path(root);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;

            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {:?}", config_path))
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to the .pkgdoc directory
    pub fn save(&self, root: &Path) -> Result<()> {
        let config_dir = Self::pkgdoc_dir(root);
        let config_path = Self::config_path(root);

        std::fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create config directory {:?}", config_dir))?;

        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Get the path to the .pkgdoc directory
    pub fn pkgdoc_dir(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR)
    }

    pub fn config_path(root: &Path) -> PathBuf {
        Self::pkgdoc_dir(root).join(CONFIG_FILE)
    }

    /// Check if a config file exists in the given directory
    pub fn is_initialized(root: &Path) -> bool {
        Self::config_path(root).exists()
    }
}
