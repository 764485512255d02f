/*!
 * Tests for application configuration
 */

use std::str::FromStr;

use anyhow::Result;
use ytsubs::app_config::{Config, LogLevel, SubtitleFormat};

/// Test the default configuration values
#[test]
fn test_default_config_withNoOverrides_shouldUseExpectedDefaults() {
    let config = Config::default();

    assert_eq!(config.language, "en");
    assert_eq!(config.format, SubtitleFormat::Srt);
    assert!(config.include_auto);
    assert!(config.merge);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test JSON serialization round trip
#[test]
fn test_config_serde_withRoundTrip_shouldPreserveValues() -> Result<()> {
    let mut config = Config::default();
    config.language = "ja".to_string();
    config.format = SubtitleFormat::Vtt;
    config.include_auto = false;

    let json = serde_json::to_string_pretty(&config)?;
    let parsed: Config = serde_json::from_str(&json)?;

    assert_eq!(parsed.language, "ja");
    assert_eq!(parsed.format, SubtitleFormat::Vtt);
    assert!(!parsed.include_auto);
    assert!(parsed.merge);

    Ok(())
}

/// Test that a partial config file fills missing fields with defaults
#[test]
fn test_config_serde_withPartialJson_shouldApplyDefaults() -> Result<()> {
    let parsed: Config = serde_json::from_str(r#"{"language": "de"}"#)?;

    assert_eq!(parsed.language, "de");
    assert_eq!(parsed.format, SubtitleFormat::Srt);
    assert!(parsed.include_auto);

    Ok(())
}

/// Test subtitle format parsing from strings
#[test]
fn test_subtitle_format_fromStr_withKnownNames_shouldParse() {
    assert_eq!(SubtitleFormat::from_str("srt").unwrap(), SubtitleFormat::Srt);
    assert_eq!(SubtitleFormat::from_str("VTT").unwrap(), SubtitleFormat::Vtt);
    assert_eq!(SubtitleFormat::from_str("ass").unwrap(), SubtitleFormat::Ass);
    assert_eq!(SubtitleFormat::from_str("lrc").unwrap(), SubtitleFormat::Lrc);
}

/// Test that unknown format names are rejected
#[test]
fn test_subtitle_format_fromStr_withUnknownName_shouldFail() {
    assert!(SubtitleFormat::from_str("sub").is_err());
    assert!(SubtitleFormat::from_str("").is_err());
}

/// Test the display and extension forms of formats
#[test]
fn test_subtitle_format_display_withAllVariants_shouldMatchExtension() {
    assert_eq!(SubtitleFormat::Srt.to_string(), "srt");
    assert_eq!(SubtitleFormat::Vtt.extension(), "vtt");
    assert_eq!(SubtitleFormat::Ass.display_name(), "Advanced SubStation Alpha");
    assert_eq!(SubtitleFormat::Lrc.display_name(), "Lyric Text");
}

/// Test configuration validation
#[test]
fn test_config_validate_withInvalidLanguage_shouldFail() {
    let mut config = Config::default();

    config.language = "".to_string();
    assert!(config.validate().is_err());

    config.language = "   ".to_string();
    assert!(config.validate().is_err());

    config.language = "en us".to_string();
    assert!(config.validate().is_err());

    config.language = "zh-CN".to_string();
    assert!(config.validate().is_ok());
}
