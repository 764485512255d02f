/*!
 * Tests for file utility functions
 */

use std::fs;

use anyhow::Result;
use ytsubs::file_utils::FileManager;

use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file =
        common::create_test_file(&temp_dir.path().to_path_buf(), "exists.tmp", "test content")?;

    assert!(FileManager::file_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that dir_exists distinguishes directories from files
#[test]
fn test_dir_exists_withFileAndDir_shouldDistinguish() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(&temp_dir.path().to_path_buf(), "plain.tmp", "x")?;

    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(&test_file));

    Ok(())
}

/// Test that ensure_dir creates directories as needed
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_subdir = temp_dir.path().join("nested").join("subdir");

    FileManager::ensure_dir(&test_subdir)?;

    assert!(test_subdir.is_dir());

    Ok(())
}

/// Test that find_files matches extensions recursively and sorted
#[test]
fn test_find_files_withNestedFiles_shouldReturnSortedMatches() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let nested = dir.join("inner");
    fs::create_dir_all(&nested)?;

    common::create_test_file(&dir, "z.srt", "")?;
    common::create_test_file(&nested, "a.srt", "")?;
    common::create_test_file(&dir, "skip.vtt", "")?;

    let found = FileManager::find_files(temp_dir.path(), "srt");

    assert_eq!(found, vec![nested.join("a.srt"), dir.join("z.srt")]);

    Ok(())
}

/// Test that the extension match ignores case and leading dots
#[test]
fn test_find_files_withUppercaseExtension_shouldStillMatch() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(&dir, "SHOUTING.SRT", "")?;

    assert_eq!(FileManager::find_files(temp_dir.path(), ".srt").len(), 1);

    Ok(())
}

/// Test that read_to_string_lossy returns valid content unchanged
#[test]
fn test_read_to_string_lossy_withValidFile_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file =
        common::create_test_file(&temp_dir.path().to_path_buf(), "valid.txt", "hello world")?;

    assert_eq!(FileManager::read_to_string_lossy(&test_file)?, "hello world");

    Ok(())
}

/// Test that read_to_string_lossy replaces undecodable bytes
#[test]
fn test_read_to_string_lossy_withInvalidUtf8_shouldReplaceBytes() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file_path = temp_dir.path().join("latin1.txt");
    fs::write(&file_path, b"ok \xFF end")?;

    assert_eq!(FileManager::read_to_string_lossy(&file_path)?, "ok \u{FFFD} end");

    Ok(())
}

/// Test that read_to_string_lossy propagates read failures
#[test]
fn test_read_to_string_lossy_withMissingFile_shouldReturnError() {
    assert!(FileManager::read_to_string_lossy("no/such/file.txt").is_err());
}
