use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Container formats the video command will honor when they appear as a
/// path suffix. The string form equals the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoFormat {
    #[default]
    Mp4,
    Mkv,
    Webm,
}

impl VideoFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoFormat::Mp4 => "mp4",
            VideoFormat::Mkv => "mkv",
            VideoFormat::Webm => "webm",
        }
    }

    /// Membership test for a raw path suffix (without the dot).
    /// Matching is case-sensitive; "MP4" is not a supported suffix.
    pub fn is_supported(suffix: &str) -> bool {
        matches!(suffix, "mp4" | "mkv" | "webm")
    }
}

impl fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audio container formats honored as a path suffix by the audio command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    #[default]
    Mp3,
    Flac,
    Wav,
    M4a,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Flac => "flac",
            AudioFormat::Wav => "wav",
            AudioFormat::M4a => "m4a",
        }
    }

    /// Membership test for a raw path suffix (without the dot).
    /// The video and audio sets are never cross-checked.
    pub fn is_supported(suffix: &str) -> bool {
        matches!(suffix, "mp3" | "flac" | "wav" | "m4a")
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nominal video resolutions, each mapping to an engine format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum Resolution {
    #[value(name = "480p")]
    #[serde(rename = "480p")]
    P480,
    #[value(name = "720p")]
    #[serde(rename = "720p")]
    P720,
    #[default]
    #[value(name = "1080p")]
    #[serde(rename = "1080p")]
    P1080,
    #[value(name = "1440p")]
    #[serde(rename = "1440p")]
    P1440,
    #[value(name = "2160p")]
    #[serde(rename = "2160p")]
    P2160,
}

impl Resolution {
    pub fn height(&self) -> u32 {
        match self {
            Resolution::P480 => 480,
            Resolution::P720 => 720,
            Resolution::P1080 => 1080,
            Resolution::P1440 => 1440,
            Resolution::P2160 => 2160,
        }
    }

    /// Engine format selector: best streams capped at this height.
    pub fn selector(&self) -> String {
        let height = self.height();
        format!("bestvideo[height<={height}]+bestaudio/best[height<={height}]")
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}p", self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_selector() {
        assert_eq!(
            Resolution::P1080.selector(),
            "bestvideo[height<=1080]+bestaudio/best[height<=1080]"
        );
        assert_eq!(
            Resolution::P480.selector(),
            "bestvideo[height<=480]+bestaudio/best[height<=480]"
        );
    }

    #[test]
    fn test_suffix_membership_is_case_sensitive() {
        assert!(VideoFormat::is_supported("mp4"));
        assert!(!VideoFormat::is_supported("MP4"));
        assert!(AudioFormat::is_supported("flac"));
        assert!(!AudioFormat::is_supported("FLAC"));
    }

    #[test]
    fn test_format_sets_are_disjoint() {
        assert!(!VideoFormat::is_supported("mp3"));
        assert!(!AudioFormat::is_supported("mp4"));
    }
}
