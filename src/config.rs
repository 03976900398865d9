//! Configuration for dbgui
//!
//! Read from the `dbgui:` section of the project's `.lando.yml`:
//!
//! ```yaml
//! dbgui:
//!   tool: tableplus
//!   docker_ip: 192.168.64.2
//! ```
//!
//! Both keys are optional; the rest of the lando file is ignored.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file read when no explicit path is given
pub const PROJECT_CONFIG: &str = ".lando.yml";

/// The `dbgui:` section of the project configuration
///
/// Optional settings stay `None` when unset; presence is checked
/// explicitly at dispatch time, never through sentinel values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DbguiConfig {
    /// GUI tool to launch ("tableplus", "dbeaver"); `--tool` overrides
    pub tool: Option<String>,

    /// Reachable address substituted for the reported service host, for
    /// setups where the Docker network IP differs from what services
    /// report
    pub docker_ip: Option<String>,
}

/// Wrapper matching the full lando file; everything but `dbgui:` is
/// somebody else's configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LandoFile {
    dbgui: DbguiConfig,
}

impl DbguiConfig {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. .lando.yml in current directory
    /// 3. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // Explicit path takes precedence
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        // Try project config
        let project_config = PathBuf::from(PROJECT_CONFIG);
        if project_config.exists() {
            match Self::load_from_file(&project_config) {
                Ok(config) => {
                    log::info!("Loaded config from {}", PROJECT_CONFIG);
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("Failed to load {}: {}", PROJECT_CONFIG, e);
                }
            }
        }

        // Use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let lando: LandoFile = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(lando.dbgui)
    }
}
