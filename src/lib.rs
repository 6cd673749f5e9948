//! vidl - Command-line media downloader front-end
//!
//! A thin front-end over the yt-dlp download engine: resolves output paths
//! and container formats from user arguments and delegates extraction,
//! stream selection, and transcoding to the engine.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod playlist;
pub mod preview;
pub mod request;
pub mod resolve;
pub mod workflow;
