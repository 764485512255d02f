use std::path::Path;

use crate::file_utils::FileManager;

// @module: Timestamp-free transcript extraction from subtitle content

// @const: Substring that marks a timestamp-range line in every supported format
const TIMESTAMP_MARKER: &str = "-->";

/// Returns true when a trimmed line is a bare subtitle-block index.
fn is_index_line(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

/// Convert raw subtitle content into plain transcript text.
///
/// Walks the content line by line with an explicit cursor. A line made up
/// entirely of ASCII digits starts a numbered block: the index is skipped,
/// the following line is skipped when it carries a timestamp range, and the
/// text lines after it are trimmed and joined with single spaces into one
/// output line. Content that does not follow the numbered-block layout falls
/// back to keeping any non-blank line that is not a timestamp range, so
/// corrupted or irregular files still yield their text instead of failing.
pub fn parse(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut transcript: Vec<String> = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let trimmed = lines[i].trim();

        // Blank lines only separate blocks
        if trimmed.is_empty() {
            i += 1;
            continue;
        }

        if is_index_line(trimmed) {
            i += 1;

            // The timestamp line is optional in damaged files
            if i < lines.len() && lines[i].contains(TIMESTAMP_MARKER) {
                i += 1;
            }

            // Collect the block text up to the next blank or index line
            let mut block: Vec<&str> = Vec::new();
            while i < lines.len() {
                let text = lines[i].trim();
                if text.is_empty() || is_index_line(text) {
                    break;
                }
                block.push(text);
                i += 1;
            }

            if !block.is_empty() {
                transcript.push(block.join(" "));
            }
        } else {
            if !lines[i].contains(TIMESTAMP_MARKER) {
                transcript.push(trimmed.to_string());
            }
            i += 1;
        }
    }

    transcript.join("\n")
}

/// Parse a subtitle file into transcript text.
///
/// The file is decoded leniently, replacing undecodable bytes rather than
/// rejecting the file. A file that cannot be read at all yields a placeholder
/// message in place of the transcript, so a caller embedding the result never
/// has to abort because of one bad file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> String {
    match FileManager::read_to_string_lossy(&path) {
        Ok(content) => parse(&content),
        Err(e) => format!("[Error parsing file: {}]", e),
    }
}
