//! skp-to-m3u — Turn a skip-list into a VLC playlist that jumps over scenes.
//!
//! Usage:
//!   skp-to-m3u <VIDEO_FILE> <SKP_FILE>   Write <video-stem>.m3u next to the video
//!   skp-to-m3u                           Prompt for both paths
//!
//! Exits with status 1 when an input file cannot be found.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use skpm3u_common::config::AppConfig;
use skpm3u_common::logging::{init_logging, LoggingGuard};

mod commands;

#[derive(Parser)]
#[command(
    name = "skp-to-m3u",
    about = "Convert a skip-list into an M3U playlist that skips the listed scenes",
    version,
    author
)]
struct Cli {
    /// Video file the playlist plays
    video_file: Option<PathBuf>,

    /// Skip-list file with `H:MM:SS.ss --> H:MM:SS.ss` ranges
    skp_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log file location (default: skp-to-m3u.log in the working directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = setup_logging(&cli);

    let (video, skp) = match (cli.video_file, cli.skp_file) {
        (Some(video), Some(skp)) => (video, skp),
        _ => match commands::prompt::prompt_stdin() {
            Ok(paths) => paths,
            Err(e) => {
                tracing::error!("Failed to read input paths: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    match commands::convert::run(video, skp) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(cli: &Cli) -> Option<LoggingGuard> {
    let mut config = AppConfig::load().logging;
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(path) = &cli.log_file {
        config.file = Some(path.clone());
    }

    match init_logging(&config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("{e}; logging to console only");
            config.file = None;
            init_logging(&config).ok()
        }
    }
}
