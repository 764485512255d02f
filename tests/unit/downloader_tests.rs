/*!
 * Tests for yt-dlp argument construction
 */

use std::path::PathBuf;

use ytsubs::app_config::SubtitleFormat;
use ytsubs::downloader::{DownloadRequest, Downloader};

fn request() -> DownloadRequest {
    DownloadRequest {
        url: "https://youtube.com/watch?v=abc123".to_string(),
        language: "en".to_string(),
        format: SubtitleFormat::Srt,
        include_auto: true,
        skip_conversion: false,
        output_dir: PathBuf::from("subs"),
    }
}

/// Test the full argument list for a default request
#[test]
fn test_build_args_withDefaultRequest_shouldIncludeAllFlags() {
    let args = Downloader::build_args(&request());

    assert_eq!(
        args,
        vec![
            "--write-sub",
            "--write-auto-sub",
            "--sub-lang=en",
            "--skip-download",
            "--convert-subs=srt",
            "-o",
            "subs/%(id)s.%(ext)s",
            "https://youtube.com/watch?v=abc123",
        ]
    );
}

/// Test that disabling auto subtitles drops the flag
#[test]
fn test_build_args_withoutAutoSubtitles_shouldOmitAutoFlag() {
    let mut req = request();
    req.include_auto = false;

    let args = Downloader::build_args(&req);

    assert!(!args.contains(&"--write-auto-sub".to_string()));
    assert!(args.contains(&"--write-sub".to_string()));
}

/// Test that skipping conversion drops the convert flag entirely
#[test]
fn test_build_args_withSkipConversion_shouldOmitConvertFlag() {
    let mut req = request();
    req.skip_conversion = true;

    let args = Downloader::build_args(&req);

    assert!(!args.iter().any(|a| a.starts_with("--convert-subs")));
}

/// Test that format and language selectors follow the request
#[test]
fn test_build_args_withVttAndSpanish_shouldUseRequestedSelectors() {
    let mut req = request();
    req.language = "es".to_string();
    req.format = SubtitleFormat::Vtt;

    let args = Downloader::build_args(&req);

    assert!(args.contains(&"--sub-lang=es".to_string()));
    assert!(args.contains(&"--convert-subs=vtt".to_string()));
}

/// Test that the URL is always the final argument
#[test]
fn test_build_args_withAnyRequest_shouldPutUrlLast() {
    let mut req = request();
    req.skip_conversion = true;
    req.include_auto = false;

    let args = Downloader::build_args(&req);

    assert_eq!(args.last(), Some(&req.url));
}

/// Test that the output template keeps the id/ext placeholders
#[test]
fn test_build_args_withOutputDir_shouldBuildIdExtTemplate() {
    let mut req = request();
    req.output_dir = PathBuf::from("subtitles_channel_foo");

    let args = Downloader::build_args(&req);
    let template_position = args.iter().position(|a| a == "-o").unwrap();

    assert_eq!(args[template_position + 1], "subtitles_channel_foo/%(id)s.%(ext)s");
}
