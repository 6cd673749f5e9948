// Download engine abstraction
//
// The engine (yt-dlp) is a black box reached through its CLI:
// - Commands: argument building and subprocess execution
// - YtDlp: the concrete engine implementation

pub mod commands;
pub mod ytdlp;

use async_trait::async_trait;

pub use commands::*;
pub use ytdlp::*;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::request::{AudioRequest, InfoRequest, VideoRequest};

/// Main trait for the external download engine.
///
/// Implementations convert engine failures into [`crate::error::VidlError`]
/// values; raw subprocess errors never cross this boundary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DownloadEngine: Send + Sync {
    /// Download video per the request, blocking until complete
    async fn download_video(&self, request: &VideoRequest) -> Result<()>;

    /// Download and extract audio per the request
    async fn download_audio(&self, request: &AudioRequest) -> Result<()>;

    /// Fetch metadata only, writing an info document next to the template
    async fn fetch_info(&self, request: &InfoRequest) -> Result<()>;

    /// Check that the engine binary is present and runnable
    fn check_availability(&self) -> Result<()>;
}

/// Factory for creating download engine instances
pub struct DownloadEngineFactory;

impl DownloadEngineFactory {
    /// Create the default engine implementation (yt-dlp-based)
    pub fn create_engine(config: EngineConfig) -> Box<dyn DownloadEngine> {
        Box::new(ytdlp::YtDlpEngine::new(config))
    }
}
