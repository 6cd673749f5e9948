use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, VidlError};
use crate::format::{AudioFormat, Resolution, VideoFormat};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub engine: EngineConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Path to the download engine binary (yt-dlp)
    pub binary_path: String,
    /// Additional arguments appended to every engine invocation
    /// Common options: ["--no-mtime"], ["--cookies-from-browser", "firefox"]
    pub extra_args: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default download directory; current working directory when unset
    pub default_dir: Option<PathBuf>,
    /// Default video container format
    pub video_format: VideoFormat,
    /// Default audio container format
    pub audio_format: AudioFormat,
    /// Default video resolution
    pub resolution: Resolution,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineConfig {
                binary_path: "yt-dlp".to_string(),
                extra_args: Vec::new(),
            },
            output: OutputConfig {
                default_dir: None,
                video_format: VideoFormat::Mp4,
                audio_format: AudioFormat::Mp3,
                resolution: Resolution::P1080,
            },
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| VidlError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| VidlError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VidlError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| VidlError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}
