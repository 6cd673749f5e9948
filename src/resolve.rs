//! Output path and container format resolution.
//!
//! Pure functions mapping (requested path, requested format, playlist flag)
//! to the effective output template and container format handed to the
//! download engine. Output templates use the engine's placeholder syntax
//! (`%(title)s`, `%(ext)s`), resolved per downloaded item.
//!
//! The suffix-inspection policy here is deliberately ad-hoc and must stay
//! exactly as written: which suffixes are honored is user-visible behavior.

use std::path::{Path, PathBuf};

use crate::format::{AudioFormat, VideoFormat};

/// Per-item template for directory and playlist video targets.
pub const TITLE_EXT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Per-item template for audio targets. No extension: the engine's
/// post-processing step appends one after transcoding.
pub const TITLE_TEMPLATE: &str = "%(title)s";

/// Fallback container formats used when a requested suffix is not in the
/// supported set. Passed explicitly so the resolver stays pure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolverDefaults {
    pub video: VideoFormat,
    pub audio: AudioFormat,
}

/// A resolved output template plus the container format to request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutput {
    pub template: PathBuf,
    pub format: String,
}

/// Resolution result. `Unresolved` replaces the original tool's silent
/// `(None, None)` sentinel with a type-checkable failure path; the caller
/// aborts the download for that URL only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    Resolved(ResolvedOutput),
    Unresolved,
}

impl ResolveOutcome {
    fn resolved(template: PathBuf, format: impl Into<String>) -> Self {
        ResolveOutcome::Resolved(ResolvedOutput {
            template,
            format: format.into(),
        })
    }

    pub fn into_resolved(self) -> Option<ResolvedOutput> {
        match self {
            ResolveOutcome::Resolved(output) => Some(output),
            ResolveOutcome::Unresolved => None,
        }
    }
}

/// Raw path suffix without the dot. A zero-length suffix counts as none.
fn suffix_of(path: &Path) -> Option<&str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
}

/// Resolve the output template and container format for a video download.
///
/// Playlists ignore any suffix on the path and force the default container.
/// A suffixed path names a single file; an unsupported suffix falls back to
/// the default container but the path itself is kept unchanged. A bare path
/// is a directory target with a per-item template.
pub fn resolve_video(
    path: &Path,
    requested_format: VideoFormat,
    is_playlist: bool,
    defaults: ResolverDefaults,
) -> ResolveOutcome {
    if path.as_os_str().is_empty() {
        return ResolveOutcome::Unresolved;
    }

    if is_playlist {
        let template = path.with_extension("").join(TITLE_EXT_TEMPLATE);
        return ResolveOutcome::resolved(template, defaults.video.as_str());
    }

    match suffix_of(path) {
        Some(suffix) => {
            let format = if VideoFormat::is_supported(suffix) {
                suffix.to_string()
            } else {
                defaults.video.as_str().to_string()
            };
            ResolveOutcome::resolved(path.to_path_buf(), format)
        }
        None => {
            let template = path.join(TITLE_EXT_TEMPLATE);
            ResolveOutcome::resolved(template, requested_format.as_str())
        }
    }
}

/// Resolve the output template and container format for an audio download.
///
/// Mirrors [`resolve_video`] with the audio format set and defaults, except
/// that templates never carry an extension and a honored suffix is stripped
/// from the returned path: the post-processing step reattaches it.
pub fn resolve_audio(
    path: &Path,
    requested_format: AudioFormat,
    is_playlist: bool,
    defaults: ResolverDefaults,
) -> ResolveOutcome {
    if path.as_os_str().is_empty() {
        return ResolveOutcome::Unresolved;
    }

    if is_playlist {
        let template = path.with_extension("").join(TITLE_TEMPLATE);
        return ResolveOutcome::resolved(template, defaults.audio.as_str());
    }

    match suffix_of(path) {
        Some(suffix) => {
            let format = if AudioFormat::is_supported(suffix) {
                suffix.to_string()
            } else {
                defaults.audio.as_str().to_string()
            };
            ResolveOutcome::resolved(path.with_extension(""), format)
        }
        None => {
            let template = path.join(TITLE_TEMPLATE);
            ResolveOutcome::resolved(template, requested_format.as_str())
        }
    }
}

/// Resolve the output template for a metadata fetch. The engine appends its
/// own `.info.json` extension, so the template is always extension-free.
///
/// Unlike the media resolvers this consults the filesystem: an existing
/// directory becomes a per-title target, anything else is used as the base
/// name with any suffix stripped.
pub fn resolve_info(path: &Path) -> ResolveOutcome {
    if path.as_os_str().is_empty() {
        return ResolveOutcome::Unresolved;
    }

    if path.is_dir() {
        return ResolveOutcome::resolved(path.join(TITLE_TEMPLATE), "json");
    }

    match suffix_of(path) {
        Some(_) => ResolveOutcome::resolved(path.with_extension(""), "json"),
        None => ResolveOutcome::resolved(path.to_path_buf(), "json"),
    }
}
