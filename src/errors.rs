/*!
 * Error types for the ytsubs application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 * The merge pipeline distinguishes two categories: per-file read and parse
 * problems are recoverable and handled inside the merge loop, while failures
 * on the shared output file are fatal and surface here.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a merge run.
///
/// A file that cannot be read or parsed is never represented here; it is
/// reported and skipped so the remaining files still get merged.
#[derive(Error, Debug)]
pub enum MergeError {
    /// The merged output file could not be created
    #[error("Failed to create merged output file {path}: {source}")]
    CreateOutput {
        /// Path the merge tried to write to
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing a section to the already-open output file failed
    #[error("Failed to write to merged output file: {0}")]
    WriteOutput(#[from] std::io::Error),
}

/// Errors from driving the external downloader.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// The downloader binary is missing from PATH
    #[error("yt-dlp is not installed or not found in PATH")]
    NotFound,

    /// The downloader ran but reported failure
    #[error("yt-dlp exited with code {0}")]
    ExitStatus(i32),

    /// Spawning or talking to the downloader process failed
    #[error("Failed to run yt-dlp: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
#[allow(dead_code)] // wrapper variants are for library consumers
pub enum AppError {
    /// Error from the external downloader
    #[error("Download error: {0}")]
    Download(#[from] DownloadError),

    /// Error from the merge pipeline
    #[error("Merge error: {0}")]
    Merge(#[from] MergeError),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
