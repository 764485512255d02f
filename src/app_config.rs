use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Subtitle language code passed to the downloader (ISO code, or "all")
    #[serde(default = "default_language")]
    pub language: String,

    /// Subtitle format the downloader converts to
    #[serde(default)]
    pub format: SubtitleFormat,

    /// Whether to also request auto-generated subtitles
    #[serde(default = "default_true")]
    pub include_auto: bool,

    /// Whether to merge all downloaded subtitles into a single document
    #[serde(default = "default_true")]
    pub merge: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Subtitle conversion format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    // @format: SubRip
    #[default]
    Srt,
    // @format: WebVTT
    Vtt,
    // @format: Advanced SubStation Alpha
    Ass,
    // @format: Lyric Text
    Lrc,
}

impl SubtitleFormat {
    // @returns: Human-readable format name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Srt => "SubRip",
            Self::Vtt => "WebVTT",
            Self::Ass => "Advanced SubStation Alpha",
            Self::Lrc => "Lyric Text",
        }
    }

    // @returns: Lowercase file extension
    pub fn extension(&self) -> &str {
        match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
            Self::Ass => "ass",
            Self::Lrc => "lrc",
        }
    }
}

// Implement Display trait for SubtitleFormat
impl std::fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

// Implement FromStr trait for SubtitleFormat
impl std::str::FromStr for SubtitleFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "srt" => Ok(Self::Srt),
            "vtt" => Ok(Self::Vtt),
            "ass" => Ok(Self::Ass),
            "lrc" => Ok(Self::Lrc),
            _ => Err(anyhow!("Invalid subtitle format: {}", s)),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(anyhow!("Subtitle language must not be empty"));
        }

        if self.language.contains(char::is_whitespace) {
            return Err(anyhow!(
                "Subtitle language must be a single language code, got: '{}'",
                self.language
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            language: default_language(),
            format: SubtitleFormat::default(),
            include_auto: true,
            merge: true,
            log_level: LogLevel::default(),
        }
    }
}
