use anyhow::{Context, Result};
use chrono::Local;
use log::{info, warn};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::aggregator::Aggregator;
use crate::app_config::Config;
use crate::downloader::{DownloadRequest, Downloader};
use crate::errors::DownloadError;
use crate::file_utils::FileManager;

// @module: Application controller for the download-and-merge workflow

/// Main application controller driving download and aggregation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Run the full workflow: download subtitles for a video or channel,
    /// then merge them into one document when requested.
    pub async fn run(&self, url: &str, is_channel: bool, output_dir: Option<PathBuf>) -> Result<()> {
        let start_time = std::time::Instant::now();
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();

        if !Downloader::is_available().await {
            return Err(DownloadError::NotFound.into());
        }

        // Without ffmpeg the downloader cannot transcode, so subtitles stay
        // in their original format and the conversion flag is omitted.
        let skip_conversion = !Downloader::ffmpeg_available().await;
        if skip_conversion {
            warn!("ffmpeg not found, skipping subtitle format conversion");
            warn!("Subtitles will be downloaded in their original format (.vtt)");
        }

        let requested_dir = match output_dir {
            Some(dir) => dir,
            None => Self::default_output_dir(url, is_channel, &timestamp),
        };

        let output_dir = match FileManager::ensure_dir(&requested_dir) {
            Ok(()) => requested_dir,
            Err(e) => {
                // Retry once with a plain timestamped name before giving up
                warn!("Error creating directory {}: {}", requested_dir.display(), e);
                let fallback = PathBuf::from(format!("subtitles_{}", timestamp));
                warn!("Trying alternate directory: {}", absolute(&fallback).display());
                FileManager::ensure_dir(&fallback)?;
                fallback
            }
        };

        self.log_download_info(url, is_channel, &output_dir);

        let request = DownloadRequest {
            url: url.to_string(),
            language: self.config.language.clone(),
            format: self.config.format,
            include_auto: self.config.include_auto,
            skip_conversion,
            output_dir: output_dir.clone(),
        };

        Downloader::download(&request)
            .await
            .context("Download failed, skipping subtitle aggregation")?;

        info!("Download completed successfully");

        let subtitle_count = Aggregator::count_downloaded(&output_dir);
        info!("Downloaded subtitles for {} videos/files", subtitle_count);
        info!("Files saved to: {}", absolute(&output_dir).display());

        if self.config.merge && subtitle_count > 0 {
            let merged_file = output_dir.join(format!("all_subtitles_{}.txt", timestamp));
            info!("Merging subtitle files into a single document...");
            info!("Output file will be: {}", absolute(&merged_file).display());

            let merged_count = Aggregator::merge(&output_dir, &merged_file)?;

            if merged_count > 0 {
                info!("Summary:");
                info!("- Downloaded {} subtitle files", subtitle_count);
                info!("- Merged {} videos into one document", merged_count);
                info!("- Individual subtitle files location: {}", absolute(&output_dir).display());
                info!("- Merged file location: {}", absolute(&merged_file).display());
            }
        } else {
            info!("Summary:");
            info!("- Downloaded {} subtitle files", subtitle_count);
            info!("- Files location: {}", absolute(&output_dir).display());
        }

        info!("Completed in {}", Self::format_duration(start_time.elapsed()));

        Ok(())
    }

    /// Derive a unique run directory name when the user did not pick one.
    ///
    /// Channel runs encode the channel handle from the URL tail; single-video
    /// runs use a plain "video" base. The timestamp plus a short UUID keeps
    /// repeated runs from colliding.
    fn default_output_dir(url: &str, is_channel: bool, timestamp: &str) -> PathBuf {
        let base_dir_name = if is_channel {
            let channel_id = if url.contains('/') {
                url.rsplit('/').next().unwrap_or("channel")
            } else {
                "channel"
            };
            format!("channel_{}", channel_id.replace('@', ""))
        } else {
            "video".to_string()
        };

        let run_id = Uuid::new_v4().simple().to_string();
        PathBuf::from(format!("subtitles_{}_{}_{}", base_dir_name, timestamp, &run_id[..8]))
    }

    /// Log the settings a download run is about to use.
    fn log_download_info(&self, url: &str, is_channel: bool, output_dir: &Path) {
        info!("Source: {}", url);
        info!("Type: {}", if is_channel { "Channel" } else { "Single Video" });
        info!("Language: {}", self.config.language);
        info!("Format: {}", self.config.format.display_name());
        info!(
            "Include auto-generated subtitles: {}",
            if self.config.include_auto { "Yes" } else { "No" }
        );
        info!("Output location: {}", absolute(output_dir).display());
        info!("Starting download process...");
        info!("This may take a while depending on the number of videos...");
    }

    // Format duration in a human-readable format
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}

/// Best-effort absolute form of a path for display.
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
