use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;

use log::{debug, warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

use crate::app_config::SubtitleFormat;
use crate::errors::DownloadError;

// @module: External downloader (yt-dlp) invocation

// @const: Output filename template handed to yt-dlp
const OUTPUT_TEMPLATE: &str = "%(id)s.%(ext)s";

/// One subtitle download request for the external downloader.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    // @field: Video or channel URL
    pub url: String,

    // @field: Subtitle language selector
    pub language: String,

    // @field: Conversion target format
    pub format: SubtitleFormat,

    // @field: Request auto-generated subtitles too
    pub include_auto: bool,

    // @field: Leave subtitles in their original format (no ffmpeg available)
    pub skip_conversion: bool,

    // @field: Directory the downloader writes into
    pub output_dir: PathBuf,
}

// @struct: yt-dlp process wrapper
pub struct Downloader;

impl Downloader {
    /// Build the yt-dlp argument list for a request.
    ///
    /// The conversion flag is omitted when conversion is unavailable, and
    /// the URL always comes last.
    pub fn build_args(request: &DownloadRequest) -> Vec<String> {
        let mut args = vec!["--write-sub".to_string()];

        if request.include_auto {
            args.push("--write-auto-sub".to_string());
        }

        args.push(format!("--sub-lang={}", request.language));
        args.push("--skip-download".to_string());

        if !request.skip_conversion {
            args.push(format!("--convert-subs={}", request.format));
        }

        args.push("-o".to_string());
        args.push(format!("{}/{}", request.output_dir.display(), OUTPUT_TEMPLATE));
        args.push(request.url.clone());

        args
    }

    /// Run yt-dlp for a request, streaming its combined output to stdout.
    ///
    /// Both pipes are passed through line by line without transformation so
    /// a long-running download stays visible while it runs. A non-zero exit
    /// code is reported as a failed download.
    pub async fn download(request: &DownloadRequest) -> Result<(), DownloadError> {
        let args = Self::build_args(request);
        debug!("Running: yt-dlp {}", args.join(" "));

        let mut child = Command::new("yt-dlp")
            .args(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    DownloadError::NotFound
                } else {
                    DownloadError::Io(e)
                }
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| DownloadError::Io(std::io::Error::other("Failed to get stdout handle")))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| DownloadError::Io(std::io::Error::other("Failed to get stderr handle")))?;

        // Drain stderr concurrently so the child never blocks on a full pipe
        let stderr_handler = tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                println!("{}", line);
            }
        });

        let mut lines = BufReader::new(stdout).lines();
        while let Some(line) = lines.next_line().await? {
            println!("{}", line);
        }

        if let Err(e) = stderr_handler.await {
            warn!("Error in stderr pass-through: {}", e);
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(DownloadError::ExitStatus(status.code().unwrap_or(-1)));
        }

        Ok(())
    }

    /// Check that yt-dlp can be executed.
    pub async fn is_available() -> bool {
        probe("yt-dlp", "--version").await
    }

    /// Check that ffmpeg is available for subtitle format conversion.
    pub async fn ffmpeg_available() -> bool {
        probe("ffmpeg", "-version").await
    }
}

/// Run a version probe for an external tool, swallowing all output.
async fn probe(program: &str, arg: &str) -> bool {
    Command::new(program)
        .arg(arg)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .await
        .map(|output| output.status.success())
        .unwrap_or(false)
}
