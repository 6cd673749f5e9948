use std::path::Path;
use tokio::process::Command;
use tracing::debug;

use crate::error::{Result, VidlError};
use crate::request::{AudioRequest, BEST_AUDIO_SELECTOR, InfoRequest, VideoRequest};

/// Abstract engine invocation: a binary, its arguments, and a description
/// used in error messages.
#[derive(Debug, Clone)]
pub struct EngineCommand {
    pub binary_path: String,
    pub args: Vec<String>,
    pub description: String,
}

impl EngineCommand {
    pub fn new<S1: Into<String>, S2: Into<String>>(binary_path: S1, description: S2) -> Self {
        Self {
            binary_path: binary_path.into(),
            args: Vec::new(),
            description: description.into(),
        }
    }

    /// Add an argument
    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(|s| s.into()));
        self
    }

    /// Set the stream format selector
    pub fn format_selector<S: Into<String>>(self, selector: S) -> Self {
        self.arg("-f").arg(selector)
    }

    /// Set the output template
    pub fn output_template<P: AsRef<Path>>(self, template: P) -> Self {
        self.arg("-o")
            .arg(template.as_ref().to_string_lossy().to_string())
    }

    /// Set the merge/remux target container
    pub fn merge_output_format<S: Into<String>>(self, format: S) -> Self {
        self.arg("--merge-output-format").arg(format)
    }

    /// Extract audio and transcode to the given codec at best quality
    pub fn extract_audio<S: Into<String>>(self, codec: S) -> Self {
        self.arg("-x")
            .arg("--audio-format")
            .arg(codec)
            .arg("--audio-quality")
            .arg("0")
    }

    /// Process the URL as a playlist, or as a single item
    pub fn playlist_mode(self, is_playlist: bool) -> Self {
        if is_playlist {
            self.arg("--yes-playlist")
        } else {
            self.arg("--no-playlist")
        }
    }

    /// Fetch metadata only, written next to the output template
    pub fn metadata_only(self) -> Self {
        self.arg("--skip-download").arg("--write-info-json")
    }

    /// Set the target URL. Always the final argument.
    pub fn url<S: Into<String>>(self, url: S) -> Self {
        self.arg(url)
    }

    /// Execute the command, blocking until the engine finishes.
    pub async fn execute(&self) -> Result<()> {
        debug!(
            "Executing engine command: {} {:?}",
            self.binary_path, self.args
        );
        debug!("Description: {}", self.description);

        let output = Command::new(&self.binary_path)
            .args(&self.args)
            .output()
            .await
            .map_err(|e| VidlError::Engine(format!("Failed to execute download engine: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VidlError::Engine(format!(
                "{} failed: {}",
                self.description,
                stderr.trim()
            )));
        }

        Ok(())
    }
}

/// Builder translating download requests into engine commands.
pub struct EngineCommandBuilder {
    binary_path: String,
}

impl EngineCommandBuilder {
    pub fn new<S: Into<String>>(binary_path: S) -> Self {
        Self {
            binary_path: binary_path.into(),
        }
    }

    /// Build a video download command
    pub fn video_download(&self, request: &VideoRequest, extra_args: &[String]) -> EngineCommand {
        EngineCommand::new(&self.binary_path, "Video download")
            .format_selector(&request.selector)
            .output_template(&request.template)
            .merge_output_format(&request.merge_format)
            .playlist_mode(request.is_playlist)
            .args(extra_args.iter().cloned())
            .url(&request.url)
    }

    /// Build an audio download command
    pub fn audio_download(&self, request: &AudioRequest, extra_args: &[String]) -> EngineCommand {
        EngineCommand::new(&self.binary_path, "Audio download")
            .format_selector(BEST_AUDIO_SELECTOR)
            .extract_audio(&request.audio_format)
            .output_template(&request.template)
            .playlist_mode(request.is_playlist)
            .args(extra_args.iter().cloned())
            .url(&request.url)
    }

    /// Build a metadata fetch command
    pub fn info_fetch(&self, request: &InfoRequest, extra_args: &[String]) -> EngineCommand {
        EngineCommand::new(&self.binary_path, "Metadata fetch")
            .metadata_only()
            .output_template(&request.template)
            .playlist_mode(false)
            .args(extra_args.iter().cloned())
            .url(&request.url)
    }

    /// Build a version check command
    pub fn version_check(&self) -> EngineCommand {
        EngineCommand::new(&self.binary_path, "Version check").arg("--version")
    }
}
