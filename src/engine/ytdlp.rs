use async_trait::async_trait;
use std::process::Command;
use tracing::info;

use super::{DownloadEngine, EngineCommandBuilder};
use crate::config::EngineConfig;
use crate::error::{Result, VidlError};
use crate::request::{AudioRequest, InfoRequest, VideoRequest};

/// Concrete engine implementation backed by the yt-dlp binary.
pub struct YtDlpEngine {
    config: EngineConfig,
    command_builder: EngineCommandBuilder,
}

impl YtDlpEngine {
    pub fn new(config: EngineConfig) -> Self {
        let command_builder = EngineCommandBuilder::new(&config.binary_path);

        Self {
            config,
            command_builder,
        }
    }
}

#[async_trait]
impl DownloadEngine for YtDlpEngine {
    async fn download_video(&self, request: &VideoRequest) -> Result<()> {
        info!(
            "Downloading video {} -> {} (format: {})",
            request.url,
            request.template.display(),
            request.merge_format
        );

        let command = self
            .command_builder
            .video_download(request, &self.config.extra_args);
        command.execute().await?;

        info!("Video download completed");
        Ok(())
    }

    async fn download_audio(&self, request: &AudioRequest) -> Result<()> {
        info!(
            "Downloading audio {} -> {} (codec: {})",
            request.url,
            request.template.display(),
            request.audio_format
        );

        let command = self
            .command_builder
            .audio_download(request, &self.config.extra_args);
        command.execute().await?;

        info!("Audio download completed");
        Ok(())
    }

    async fn fetch_info(&self, request: &InfoRequest) -> Result<()> {
        info!(
            "Fetching metadata for {} -> {}.info.json",
            request.url,
            request.template.display()
        );

        let command = self
            .command_builder
            .info_fetch(request, &self.config.extra_args);
        command.execute().await?;

        info!("Metadata fetch completed");
        Ok(())
    }

    fn check_availability(&self) -> Result<()> {
        let output = Command::new(&self.config.binary_path)
            .arg("--version")
            .output()
            .map_err(|e| {
                VidlError::MissingDependency(format!(
                    "Download engine '{}' not found: {}",
                    self.config.binary_path, e
                ))
            })?;

        if output.status.success() {
            let version = String::from_utf8_lossy(&output.stdout);
            info!(
                "Download engine is available: {} {}",
                self.config.binary_path,
                version.trim()
            );
            Ok(())
        } else {
            Err(VidlError::MissingDependency(
                "Download engine version check failed".to_string(),
            ))
        }
    }
}
