//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::sample::DEFAULT_CSV;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Working edge-list file, used when no file is chosen explicitly
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Seed the built-in sample dataset when the working file is missing or unreadable
    #[serde(default = "default_sample_fallback")]
    pub sample_fallback: bool,

    /// Traversal animation settings
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Edge-list file format
    #[serde(default)]
    pub csv: CsvConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_file: default_data_file(),
            sample_fallback: default_sample_fallback(),
            animation: AnimationConfig::default(),
            csv: CsvConfig::default(),
        }
    }
}

/// Configuration for traversal animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Pause between frames in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            delay_ms: default_delay_ms(),
        }
    }
}

/// Configuration for the edge-list file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvConfig {
    /// Field delimiter; must be a single ASCII character
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for CsvConfig {
    fn default() -> Self {
        CsvConfig {
            delimiter: default_delimiter(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_CSV)
}

fn default_sample_fallback() -> bool {
    true
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_delimiter() -> char {
    ','
}
