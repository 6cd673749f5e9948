//! Download request assembly.
//!
//! Turns a resolved output plus media-kind options into the concrete
//! configuration handed to the download engine. The requests are plain
//! data; translating them into engine arguments lives in [`crate::engine`].

use std::path::PathBuf;

use crate::format::Resolution;
use crate::resolve::ResolvedOutput;

/// Selector for the best available video and audio streams, merged.
pub const BEST_VIDEO_SELECTOR: &str = "bestvideo+bestaudio";

/// Selector for the best available audio stream.
pub const BEST_AUDIO_SELECTOR: &str = "bestaudio/best";

/// Merge target when downloading best quality. mkv for its wide codec
/// support; the requested container is ignored in that case.
pub const BEST_MERGE_FORMAT: &str = "mkv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRequest {
    pub url: String,
    pub selector: String,
    pub template: PathBuf,
    pub merge_format: String,
    pub is_playlist: bool,
}

impl VideoRequest {
    pub fn new(
        url: String,
        resolution: Resolution,
        resolved: ResolvedOutput,
        best: bool,
        is_playlist: bool,
    ) -> Self {
        let (selector, merge_format) = if best {
            (BEST_VIDEO_SELECTOR.to_string(), BEST_MERGE_FORMAT.to_string())
        } else {
            (resolution.selector(), resolved.format)
        };

        Self {
            url,
            selector,
            template: resolved.template,
            merge_format,
            is_playlist,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioRequest {
    pub url: String,
    pub template: PathBuf,
    /// Target codec for the post-extraction transcode step.
    pub audio_format: String,
    pub is_playlist: bool,
}

impl AudioRequest {
    pub fn new(url: String, resolved: ResolvedOutput, is_playlist: bool) -> Self {
        Self {
            url,
            template: resolved.template,
            audio_format: resolved.format,
            is_playlist,
        }
    }
}

/// Metadata-only request; the engine writes `<template>.info.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRequest {
    pub url: String,
    pub template: PathBuf,
}

impl InfoRequest {
    pub fn new(url: String, resolved: ResolvedOutput) -> Self {
        Self {
            url,
            template: resolved.template,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(template: &str, format: &str) -> ResolvedOutput {
        ResolvedOutput {
            template: PathBuf::from(template),
            format: format.to_string(),
        }
    }

    #[test]
    fn test_best_overrides_selector_and_merge_format() {
        let request = VideoRequest::new(
            "https://example.com/watch?v=a".to_string(),
            Resolution::P720,
            resolved("clip.webm", "webm"),
            true,
            false,
        );
        assert_eq!(request.selector, "bestvideo+bestaudio");
        assert_eq!(request.merge_format, "mkv");
        assert_eq!(request.template, PathBuf::from("clip.webm"));
    }

    #[test]
    fn test_resolution_selector_and_resolved_format_without_best() {
        let request = VideoRequest::new(
            "https://example.com/watch?v=a".to_string(),
            Resolution::P720,
            resolved("clip.webm", "webm"),
            false,
            false,
        );
        assert_eq!(
            request.selector,
            "bestvideo[height<=720]+bestaudio/best[height<=720]"
        );
        assert_eq!(request.merge_format, "webm");
    }

    #[test]
    fn test_audio_request_carries_resolved_codec() {
        let request = AudioRequest::new(
            "https://example.com/watch?v=a".to_string(),
            resolved("music/%(title)s", "flac"),
            false,
        );
        assert_eq!(request.audio_format, "flac");
        assert_eq!(request.template, PathBuf::from("music/%(title)s"));
    }
}
