//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.docs_finder/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::state::DEFAULT_BASE_PATH;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FinderConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub links: LinksConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub catalog_path: Option<String>,
    pub version_tag: Option<String>,
    pub debounce_ms: Option<u64>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LinksConfig {
    pub base_path: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_LOG_FILE: &str = "docs_finder.log";

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub catalog_path: Option<PathBuf>,
    pub current_id: Option<String>,
    pub version_tag: Option<String>,
    pub debounce: Duration,
    pub base_path: String,
    pub log_file: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            current_id: None,
            version_tag: None,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            base_path: DEFAULT_BASE_PATH.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub catalog: Option<PathBuf>,
    pub current: Option<String>,
    pub version_tag: Option<String>,
}

/// Values read from the environment (None = unset).
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub catalog: Option<String>,
    pub version_tag: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            catalog: std::env::var("DOCS_FINDER_CATALOG").ok(),
            version_tag: std::env::var("DOCS_FINDER_VERSION_TAG").ok(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.docs_finder/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".docs_finder").join("config.toml"))
}

/// Load config from `~/.docs_finder/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FinderConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FinderConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FinderConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<FinderConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FinderConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Docs Finder Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# catalog_path = "docs.json"        # JSON or TOML catalog (or DOCS_FINDER_CATALOG)
# version_tag = "v2"                # Forwarded into every link (or DOCS_FINDER_VERSION_TAG)
# debounce_ms = 500                 # Quiet period before a search is tracked
# log_file = "docs_finder.log"

# [links]
# base_path = "/docs"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FinderConfig, env: &EnvOverrides, cli: &CliOverrides) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    // Catalog: CLI → env → config
    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| env.catalog.as_ref().map(PathBuf::from))
        .or_else(|| config.general.catalog_path.as_ref().map(PathBuf::from));

    // Version tag: CLI → env → config
    let version_tag = cli
        .version_tag
        .clone()
        .or_else(|| env.version_tag.clone())
        .or_else(|| config.general.version_tag.clone());

    ResolvedConfig {
        catalog_path,
        current_id: cli.current.clone(),
        version_tag,
        debounce: config
            .general
            .debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.debounce),
        base_path: config
            .links
            .base_path
            .clone()
            .unwrap_or(defaults.base_path),
        log_file: config
            .general
            .log_file
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or(defaults.log_file),
    }
}
