//! vidl - Command-line media downloader front-end
//!
//! This is the main entry point for vidl, which downloads video and audio
//! media from web sources by delegating extraction, format negotiation, and
//! transcoding to the external yt-dlp engine.

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{Level, info, warn};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use vidl::cli::{Args, Commands};
use vidl::config::Config;
use vidl::preview;
use vidl::workflow::{AudioOptions, InfoOptions, VideoOptions, Workflow};

const BANNER_WIDTH: usize = 72;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Setup logging to both console and file
    setup_logging(args.verbose)?;

    // Load configuration
    let config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            // Try to load config.toml from current directory first
            if Path::new("config.toml").exists() {
                info!("Found config.toml in current directory, loading...");
                Config::from_file("config.toml")?
            } else {
                Config::default()
            }
        }
    };

    // Execute command
    match args.command {
        Commands::Video {
            urls,
            path,
            resolution,
            format,
            best,
            no_preview,
        } => {
            let Some(workflow) = create_workflow(&config) else {
                return Ok(());
            };

            let path = effective_path(path, &config)?;
            let options = VideoOptions {
                path: path.clone(),
                format: format.unwrap_or(config.output.video_format),
                resolution: resolution.unwrap_or(config.output.resolution),
                best,
            };

            info!(
                "Downloading video from {} URL(s) to {}",
                urls.len(),
                path.display()
            );
            let failures = workflow.download_videos(&urls, &options).await;
            finish_batch(&path, no_preview, failures, urls.len());
        }
        Commands::Audio {
            urls,
            path,
            format,
            no_preview,
        } => {
            let Some(workflow) = create_workflow(&config) else {
                return Ok(());
            };

            let path = effective_path(path, &config)?;
            let options = AudioOptions {
                path: path.clone(),
                format: format.unwrap_or(config.output.audio_format),
            };

            info!(
                "Downloading audio from {} URL(s) to {}",
                urls.len(),
                path.display()
            );
            let failures = workflow.download_audios(&urls, &options).await;
            finish_batch(&path, no_preview, failures, urls.len());
        }
        Commands::Info {
            urls,
            path,
            no_preview,
        } => {
            let Some(workflow) = create_workflow(&config) else {
                return Ok(());
            };

            let path = effective_path(path, &config)?;
            let options = InfoOptions { path: path.clone() };

            info!("Fetching metadata for {} URL(s)", urls.len());
            let failures = workflow.fetch_infos(&urls, &options).await;
            finish_batch(&path, no_preview, failures, urls.len());
        }
    }

    Ok(())
}

/// Create the workflow, which checks the engine dependency up front. When
/// the engine is missing the whole batch is skipped and the failure banner
/// is shown; per spec the process still exits successfully.
fn create_workflow(config: &Config) -> Option<Workflow> {
    match Workflow::new(config.clone()) {
        Ok(workflow) => Some(workflow),
        Err(e) => {
            warn!("Skipping downloads: {}", e);
            print_failure_banner();
            None
        }
    }
}

/// Requested path, falling back to the configured default directory, then
/// the current working directory.
fn effective_path(path: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    match path.or_else(|| config.output.default_dir.clone()) {
        Some(path) => Ok(path),
        None => Ok(std::env::current_dir()?),
    }
}

/// Report the batch outcome and optionally open the output location.
/// Individual failures are reported via console text only; the banner and
/// exit code stay successful once the batch ran.
fn finish_batch(path: &Path, no_preview: bool, failures: usize, total: usize) {
    if failures > 0 {
        warn!("{} of {} URL(s) failed", failures, total);
    }

    if !no_preview {
        if path.is_dir() {
            preview::open_in_file_explorer(path, false);
        } else {
            preview::open_in_file_explorer(path, true);
        }
    }

    print_success_banner();
}

fn print_success_banner() {
    println!("{:=^width$}", " Download completed ", width = BANNER_WIDTH);
}

fn print_failure_banner() {
    println!("{:=^width$}", " Download failed ", width = BANNER_WIDTH);
}

/// Setup logging to both console and file
fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let vidl_dir = std::env::current_dir()?.join(".vidl");
    let log_dir = vidl_dir.join("log");
    std::fs::create_dir_all(&log_dir)?;

    // Set up file appender with daily rotation
    let file_appender = rolling::daily(&log_dir, "vidl.log");
    let (non_blocking_file, _guard) = non_blocking(file_appender);
    // Keep the guard alive for the duration of the program
    std::mem::forget(_guard);

    // Determine log level
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    // Create console layer
    let console_layer = fmt::layer().with_target(false);

    // Create file layer
    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_ansi(false); // No ANSI colors in file

    // Setup layered subscriber
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer);

    // Initialize the subscriber
    subscriber
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
