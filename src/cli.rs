use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::format::{AudioFormat, Resolution, VideoFormat};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download video from the given URLs
    Video {
        /// Video or playlist URLs
        #[arg(required = true)]
        urls: Vec<String>,

        /// Output path for the downloaded video or playlist; current working
        /// directory when not given
        #[arg(short = 'o', long)]
        path: Option<PathBuf>,

        /// Video resolution; the closest available is used when not offered
        #[arg(long, visible_alias = "res")]
        resolution: Option<Resolution>,

        /// Video container format, when available
        #[arg(long, visible_alias = "ext")]
        format: Option<VideoFormat>,

        /// Best audio and video quality available; overrides resolution and
        /// format
        #[arg(long)]
        best: bool,

        /// Do not open the file explorer for preview
        #[arg(long)]
        no_preview: bool,
    },

    /// Download only the audio track from the given URLs
    Audio {
        /// Video or playlist URLs
        #[arg(required = true)]
        urls: Vec<String>,

        /// Output path for the downloaded audio file or playlist; current
        /// working directory when not given
        #[arg(short = 'o', long)]
        path: Option<PathBuf>,

        /// Audio file format
        #[arg(long, visible_alias = "ext")]
        format: Option<AudioFormat>,

        /// Do not open the file explorer for preview
        #[arg(long)]
        no_preview: bool,
    },

    /// Fetch metadata for the given URLs without downloading media
    Info {
        /// Video URLs
        #[arg(required = true)]
        urls: Vec<String>,

        /// Output path for the metadata document; current working directory
        /// when not given
        #[arg(short = 'o', long)]
        path: Option<PathBuf>,

        /// Do not open the file explorer for preview
        #[arg(long)]
        no_preview: bool,
    },
}
