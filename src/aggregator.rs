use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};

use crate::errors::MergeError;
use crate::file_utils::FileManager;
use crate::subtitle_parser;

// @module: Subtitle discovery and aggregation into one transcript document

/// Subtitle extensions recognized during merge discovery, in registry order.
///
/// Discovery groups results by this order: every file of one format comes
/// before any file of the next.
pub const MERGE_EXTENSIONS: [&str; 7] = ["srt", "vtt", "ass", "lrc", "ttml", "sbv", "json"];

/// Narrower extension set used when counting what the downloader wrote.
///
/// Timed-text and JSON caption files are intentionally excluded here; they
/// are still picked up by the merge scan above.
pub const DOWNLOAD_EXTENSIONS: [&str; 4] = ["srt", "vtt", "ass", "lrc"];

// @const: Width of the section divider in the merged document
const DIVIDER_WIDTH: usize = 80;

// @struct: Subtitle aggregation pipeline
pub struct Aggregator;

impl Aggregator {
    /// Recursively discover subtitle files under a directory.
    ///
    /// Returns paths grouped by format registry order and sorted within each
    /// format, so repeated scans over an unchanged directory yield the same
    /// sequence. The scan is read-only.
    pub fn discover<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
        let mut subtitle_files = Vec::new();

        for ext in MERGE_EXTENSIONS {
            let found = FileManager::find_files(&source_dir, ext);
            if !found.is_empty() {
                debug!("  Found {} .{} files", found.len(), ext);
            }
            subtitle_files.extend(found);
        }

        subtitle_files
    }

    /// Count subtitle files in the formats the downloader writes directly.
    pub fn count_downloaded<P: AsRef<Path>>(source_dir: P) -> usize {
        DOWNLOAD_EXTENSIONS
            .iter()
            .map(|ext| FileManager::find_files(&source_dir, ext).len())
            .sum()
    }

    /// Merge every discovered subtitle file into one text document.
    ///
    /// Each file contributes a titled section in discovery order, with its
    /// transcript extracted by the parser. A file that cannot be read is
    /// reported and skipped without a section; the merge moves on to the
    /// next file. Failures on the output file itself abort the merge.
    ///
    /// Returns the number of files that contributed a section. When no
    /// subtitle files are found the output file is not created and the
    /// count is 0.
    pub fn merge<P1: AsRef<Path>, P2: AsRef<Path>>(
        source_dir: P1,
        output_path: P2,
    ) -> Result<usize, MergeError> {
        let output_path = output_path.as_ref();

        info!("Scanning for subtitle files...");
        let subtitle_files = Self::discover(&source_dir);
        let total_files = subtitle_files.len();
        info!("Found {} total subtitle files to process", total_files);

        if subtitle_files.is_empty() {
            warn!("No subtitle files found!");
            return Ok(0);
        }

        let file = File::create(output_path).map_err(|e| MergeError::CreateOutput {
            path: output_path.to_path_buf(),
            source: e,
        })?;
        let mut output = BufWriter::new(file);

        let progress_bar = ProgressBar::new(total_files as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:30}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message("Merging");

        let mut count = 0;
        for subtitle_file in &subtitle_files {
            // Read before writing anything so a failed file never leaves a
            // partial section in the output.
            match FileManager::read_to_string_lossy(subtitle_file) {
                Ok(content) => {
                    let transcript = subtitle_parser::parse(&content);
                    Self::write_section(&mut output, subtitle_file, &transcript)?;
                    count += 1;
                }
                Err(e) => {
                    error!("Error processing {}: {}", subtitle_file.display(), e);
                }
            }
            progress_bar.inc(1);
        }

        output.flush()?;
        progress_bar.finish_and_clear();

        info!("Successfully merged {} subtitle files into single document", count);
        Ok(count)
    }

    /// Write one titled transcript section to the output stream.
    fn write_section<W: Write>(
        output: &mut W,
        source: &Path,
        transcript: &str,
    ) -> Result<(), MergeError> {
        let title = source
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        let divider = "=".repeat(DIVIDER_WIDTH);

        write!(output, "\n\n{}\n", divider)?;
        writeln!(output, "VIDEO: {}", title)?;
        writeln!(output, "FILE: {}", source.display())?;
        write!(output, "{}\n\n", divider)?;
        write!(output, "{}", transcript)?;

        Ok(())
    }
}
