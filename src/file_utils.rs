use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        }
        Ok(())
    }

    /// Find files with a specific extension in a directory, recursively.
    ///
    /// The extension match is case-insensitive. Results are sorted by path
    /// so a repeated scan over an unchanged directory is deterministic.
    /// Entries that cannot be read are skipped; the scan never mutates
    /// anything it visits.
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Vec<PathBuf> {
        let normalized_ext = extension.trim_start_matches('.');

        let mut result: Vec<PathBuf> = WalkDir::new(dir.as_ref())
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter(|e| {
                e.path()
                    .extension()
                    .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext))
                    .unwrap_or(false)
            })
            .map(|e| e.into_path())
            .collect();

        result.sort();
        result
    }

    /// Read a file to a string, replacing undecodable bytes with U+FFFD.
    pub fn read_to_string_lossy<P: AsRef<Path>>(path: P) -> Result<String> {
        let bytes = fs::read(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
