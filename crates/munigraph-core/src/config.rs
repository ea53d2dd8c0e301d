//! Application configuration for munigraph
//!
//! Configuration lives in `config.toml` under the munigraph config directory
//! (`$MUNIGRAPH_CONFIG_DIR`, or the platform config dir). Every field is
//! optional; missing files fall back to defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::persistence::EdgeListIo;

pub use types::{AnimationConfig, AppConfig, CsvConfig};

const CONFIG_DIR: &str = "munigraph";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "MUNIGRAPH_CONFIG_DIR";

const RESERVED_DELIMITERS: [u8; 3] = [b'"', b'\n', b'\r'];

impl AppConfig {
    /// Default location of the config file, if one can be determined
    pub fn config_path() -> Option<PathBuf> {
        let config_dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(env_dir) => PathBuf::from(env_dir),
            Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
        };

        Some(config_dir.join(CONFIG_FILE))
    }

    /// Resolve configuration: an explicit path must exist; otherwise the
    /// default location is used when present, else built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(GraphError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            return Self::load(path);
        }

        match Self::config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read config", path.display(), e))?;
        let config: AppConfig = toml::from_str(&content)?;
        config.csv.delimiter_byte()?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| GraphError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Edge-list reader/writer configured with this file format
    pub fn edge_list_io(&self) -> Result<EdgeListIo> {
        Ok(EdgeListIo::with_delimiter(self.csv.delimiter_byte()?))
    }
}

impl CsvConfig {
    /// The delimiter as a single byte, as the CSV reader expects.
    ///
    /// Must be ASCII and must not be the quote character or a line break,
    /// otherwise saved files could not be read back.
    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(|byte| byte.is_ascii() && !RESERVED_DELIMITERS.contains(byte))
            .ok_or_else(|| {
                GraphError::invalid_value("csv delimiter", self.delimiter.escape_default())
            })
    }
}
