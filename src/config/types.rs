use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub thumbnail: ThumbnailConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory to serve the gallery web UI from
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file. Defaults to `pixshelf.db` next to
    /// the config file (or the working directory without one).
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Thumbnail generation parameters, passed explicitly into each generation
/// call so tests can vary them without touching shared state.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThumbnailConfig {
    /// Target width in pixels
    #[serde(default = "default_thumbnail_width")]
    pub width: u32,

    /// Target height in pixels
    #[serde(default = "default_thumbnail_height")]
    pub height: u32,

    /// JPEG quality, 1-100
    #[serde(default = "default_thumbnail_quality")]
    pub quality: u8,
}

fn default_thumbnail_width() -> u32 {
    150
}
fn default_thumbnail_height() -> u32 {
    150
}
fn default_thumbnail_quality() -> u8 {
    80
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            width: default_thumbnail_width(),
            height: default_thumbnail_height(),
            quality: default_thumbnail_quality(),
        }
    }
}
