use std::future::Future;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::Config;
use crate::engine::{DownloadEngine, DownloadEngineFactory};
use crate::error::{Result, VidlError};
use crate::format::{AudioFormat, Resolution, VideoFormat};
use crate::playlist;
use crate::request::{AudioRequest, InfoRequest, VideoRequest};
use crate::resolve::{self, ResolveOutcome, ResolvedOutput, ResolverDefaults};

#[derive(Debug, Clone)]
pub struct VideoOptions {
    pub path: PathBuf,
    pub format: VideoFormat,
    pub resolution: Resolution,
    pub best: bool,
}

#[derive(Debug, Clone)]
pub struct AudioOptions {
    pub path: PathBuf,
    pub format: AudioFormat,
}

#[derive(Debug, Clone)]
pub struct InfoOptions {
    pub path: PathBuf,
}

/// Per-URL orchestration: playlist detection, path/format resolution,
/// request assembly, engine invocation. URLs in a batch are processed
/// strictly sequentially; a failed URL is reported and the batch continues.
pub struct Workflow {
    engine: Box<dyn DownloadEngine>,
    defaults: ResolverDefaults,
}

impl Workflow {
    pub fn new(config: Config) -> Result<Self> {
        let engine = DownloadEngineFactory::create_engine(config.engine.clone());

        // Check dependencies before any download attempt
        engine.check_availability()?;

        Ok(Self {
            engine,
            defaults: ResolverDefaults::default(),
        })
    }

    pub fn with_engine(engine: Box<dyn DownloadEngine>) -> Self {
        Self {
            engine,
            defaults: ResolverDefaults::default(),
        }
    }

    /// Download each URL in turn. Returns the number of failed URLs.
    pub async fn download_videos(&self, urls: &[String], options: &VideoOptions) -> usize {
        self.run_batch(urls, |url| self.download_video(url, options))
            .await
    }

    /// Download and extract audio for each URL in turn. Returns the number
    /// of failed URLs.
    pub async fn download_audios(&self, urls: &[String], options: &AudioOptions) -> usize {
        self.run_batch(urls, |url| self.download_audio(url, options))
            .await
    }

    /// Fetch metadata for each URL in turn. Returns the number of failed
    /// URLs.
    pub async fn fetch_infos(&self, urls: &[String], options: &InfoOptions) -> usize {
        self.run_batch(urls, |url| self.fetch_info(url, options)).await
    }

    async fn run_batch<'a, F, Fut>(&'a self, urls: &'a [String], mut attempt: F) -> usize
    where
        F: FnMut(&'a str) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let mut failures = 0;
        for url in urls {
            match attempt(url.as_str()).await {
                Ok(()) => info!("Successfully processed: {}", url),
                Err(e) => {
                    warn!("Failed to process {}: {}", url, e);
                    failures += 1;
                }
            }
        }
        failures
    }

    async fn download_video(&self, url: &str, options: &VideoOptions) -> Result<()> {
        let (url, is_playlist) = normalize_url(url);

        let resolved = self.resolve(resolve::resolve_video(
            &options.path,
            options.format,
            is_playlist,
            self.defaults,
        ))?;

        let request = VideoRequest::new(url, options.resolution, resolved, options.best, is_playlist);
        self.engine.download_video(&request).await
    }

    async fn download_audio(&self, url: &str, options: &AudioOptions) -> Result<()> {
        let (url, is_playlist) = normalize_url(url);

        let resolved = self.resolve(resolve::resolve_audio(
            &options.path,
            options.format,
            is_playlist,
            self.defaults,
        ))?;

        let request = AudioRequest::new(url, resolved, is_playlist);
        self.engine.download_audio(&request).await
    }

    async fn fetch_info(&self, url: &str, options: &InfoOptions) -> Result<()> {
        let (url, _) = normalize_url(url);

        let resolved = self.resolve(resolve::resolve_info(&options.path))?;

        let request = InfoRequest::new(url, resolved);
        self.engine.fetch_info(&request).await
    }

    fn resolve(&self, outcome: ResolveOutcome) -> Result<ResolvedOutput> {
        outcome
            .into_resolved()
            .ok_or_else(|| VidlError::Resolve("output path could not be resolved".to_string()))
    }
}

/// Strip the playlist context from single-video URLs so that only the
/// target video is processed; playlist URLs pass through unchanged.
fn normalize_url(url: &str) -> (String, bool) {
    let is_playlist = playlist::is_playlist_url(url);
    let url = if is_playlist {
        url.to_string()
    } else {
        playlist::strip_playlist_context(url)
    };
    (url, is_playlist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MockDownloadEngine;

    fn video_options(path: &str) -> VideoOptions {
        VideoOptions {
            path: PathBuf::from(path),
            format: VideoFormat::Mp4,
            resolution: Resolution::P1080,
            best: false,
        }
    }

    #[tokio::test]
    async fn test_video_request_reaches_engine_with_resolved_output() {
        let mut engine = MockDownloadEngine::new();
        engine
            .expect_download_video()
            .withf(|request| {
                request.template == PathBuf::from("clip.webm")
                    && request.merge_format == "webm"
                    && !request.is_playlist
            })
            .times(1)
            .returning(|_| Ok(()));

        let workflow = Workflow::with_engine(Box::new(engine));
        let urls = vec!["https://www.youtube.com/watch?v=abc".to_string()];
        let failures = workflow
            .download_videos(&urls, &video_options("clip.webm"))
            .await;
        assert_eq!(failures, 0);
    }

    #[tokio::test]
    async fn test_playlist_context_is_stripped_for_single_videos() {
        let mut engine = MockDownloadEngine::new();
        engine
            .expect_download_video()
            .withf(|request| request.url == "https://www.youtube.com/watch?v=abc")
            .times(1)
            .returning(|_| Ok(()));

        let workflow = Workflow::with_engine(Box::new(engine));
        let urls = vec!["https://www.youtube.com/watch?v=abc&list=PLxyz&index=2".to_string()];
        let failures = workflow
            .download_videos(&urls, &video_options("downloads"))
            .await;
        assert_eq!(failures, 0);
    }

    #[tokio::test]
    async fn test_playlist_url_forces_playlist_resolution() {
        let mut engine = MockDownloadEngine::new();
        engine
            .expect_download_audio()
            .withf(|request| {
                request.template == PathBuf::from("music/%(title)s")
                    && request.audio_format == "mp3"
                    && request.is_playlist
            })
            .times(1)
            .returning(|_| Ok(()));

        let workflow = Workflow::with_engine(Box::new(engine));
        let urls = vec!["https://www.youtube.com/playlist?list=PLxyz".to_string()];
        let options = AudioOptions {
            path: PathBuf::from("music"),
            format: AudioFormat::Flac,
        };
        let failures = workflow.download_audios(&urls, &options).await;
        assert_eq!(failures, 0);
    }

    #[tokio::test]
    async fn test_engine_failure_does_not_abort_the_batch() {
        let mut engine = MockDownloadEngine::new();
        let mut calls = 0;
        engine
            .expect_download_video()
            .times(2)
            .returning(move |_| {
                calls += 1;
                if calls == 1 {
                    Err(VidlError::Engine("extraction failed".to_string()))
                } else {
                    Ok(())
                }
            });

        let workflow = Workflow::with_engine(Box::new(engine));
        let urls = vec![
            "https://www.youtube.com/watch?v=bad".to_string(),
            "https://www.youtube.com/watch?v=good".to_string(),
        ];
        let failures = workflow
            .download_videos(&urls, &video_options("downloads"))
            .await;
        assert_eq!(failures, 1);
    }

    #[tokio::test]
    async fn test_unresolvable_path_skips_the_engine() {
        let engine = MockDownloadEngine::new();

        let workflow = Workflow::with_engine(Box::new(engine));
        let urls = vec!["https://www.youtube.com/watch?v=abc".to_string()];
        let failures = workflow.download_videos(&urls, &video_options("")).await;
        assert_eq!(failures, 1);
    }
}
