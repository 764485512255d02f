/*!
 * # ytsubs - YouTube Subtitle Downloader
 *
 * A Rust tool that wraps yt-dlp and ffmpeg to fetch subtitle tracks for a
 * video or an entire channel, convert them to a chosen format, and merge
 * everything into one searchable plain-text document.
 *
 * ## Features
 *
 * - Download subtitles from single videos or entire channels
 * - Support for multiple languages and subtitle formats
 * - Optional auto-generated subtitle tracks
 * - Merge all downloaded subtitles into a single transcript document
 * - Per-file fault isolation: one broken file never aborts a merge
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_parser`: Timestamp-free transcript extraction
 * - `aggregator`: Subtitle discovery and merge with progress reporting
 * - `downloader`: yt-dlp process invocation and output streaming
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod aggregator;
pub mod app_config;
pub mod app_controller;
pub mod downloader;
pub mod errors;
pub mod file_utils;
pub mod subtitle_parser;

// Re-export main types for easier usage
pub use aggregator::Aggregator;
pub use app_config::{Config, SubtitleFormat};
pub use app_controller::Controller;
pub use downloader::{DownloadRequest, Downloader};
pub use errors::{AppError, DownloadError, MergeError};
