// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::app_config::{Config, SubtitleFormat};
use app_controller::Controller;

mod aggregator;
mod app_config;
mod app_controller;
mod downloader;
mod errors;
mod file_utils;
mod subtitle_parser;

/// CLI Wrapper for SubtitleFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliSubtitleFormat {
    Srt,
    Vtt,
    Ass,
    Lrc,
}

impl From<CliSubtitleFormat> for SubtitleFormat {
    fn from(cli_format: CliSubtitleFormat) -> Self {
        match cli_format {
            CliSubtitleFormat::Srt => SubtitleFormat::Srt,
            CliSubtitleFormat::Vtt => SubtitleFormat::Vtt,
            CliSubtitleFormat::Ass => SubtitleFormat::Ass,
            CliSubtitleFormat::Lrc => SubtitleFormat::Lrc,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download subtitles for a video or channel (default command)
    #[command(alias = "dl")]
    Download(DownloadArgs),

    /// Generate shell completions for ytsubs
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct DownloadArgs {
    /// Video or channel URL
    #[arg(value_name = "URL")]
    url: String,

    /// Treat the URL as a channel (download subtitles from all its videos)
    #[arg(short = 'C', long)]
    channel: bool,

    /// Subtitle language code (e.g. 'en', 'es', or 'all')
    #[arg(short, long)]
    language: Option<String>,

    /// Subtitle format to convert to
    #[arg(short = 'F', long, value_enum)]
    format: Option<CliSubtitleFormat>,

    /// Skip auto-generated subtitles (manual subtitles only)
    #[arg(long)]
    no_auto: bool,

    /// Do not merge downloaded subtitles into a single document
    #[arg(long)]
    no_merge: bool,

    /// Directory to save subtitles into (auto-named when omitted)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// ytsubs - YouTube Subtitle Downloader
///
/// Downloads subtitle tracks for a video or an entire channel through yt-dlp
/// and merges everything into a single searchable text document.
#[derive(Parser, Debug)]
#[command(name = "ytsubs")]
#[command(version = "0.1.0")]
#[command(about = "YouTube subtitle downloader and transcript merger")]
#[command(long_about = "ytsubs downloads subtitles through yt-dlp and merges them into one transcript.

EXAMPLES:
    ytsubs https://youtube.com/watch?v=abc123        # Download with default config
    ytsubs -C https://youtube.com/@somechannel       # All videos of a channel
    ytsubs -l es -F vtt https://youtube.com/...      # Spanish subtitles as WebVTT
    ytsubs --no-auto https://youtube.com/...         # Manual subtitles only
    ytsubs --no-merge -C https://youtube.com/@ch     # Keep individual files only
    ytsubs -o ./subs https://youtube.com/...         # Custom output directory
    ytsubs completions bash > ytsubs.bash            # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.

SUPPORTED FORMATS:
    srt - SubRip          vtt - WebVTT
    ass - SubStation      lrc - Lyric Text

DEPENDENCIES:
    yt-dlp must be installed and on PATH. ffmpeg is optional; without it
    subtitles are kept in their original format instead of being converted.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Video or channel URL
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Treat the URL as a channel (download subtitles from all its videos)
    #[arg(short = 'C', long)]
    channel: bool,

    /// Subtitle language code (e.g. 'en', 'es', or 'all')
    #[arg(short, long)]
    language: Option<String>,

    /// Subtitle format to convert to
    #[arg(short = 'F', long, value_enum)]
    format: Option<CliSubtitleFormat>,

    /// Skip auto-generated subtitles (manual subtitles only)
    #[arg(long)]
    no_auto: bool,

    /// Do not merge downloaded subtitles into a single document
    #[arg(long)]
    no_merge: bool,

    /// Directory to save subtitles into (auto-named when omitted)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color prefix for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::get_color_for_level(record.level());
            let emoji = Self::get_emoji_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "ytsubs", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Download(args)) => run_download(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let url = cli
                .url
                .ok_or_else(|| anyhow!("URL is required when no subcommand is specified"))?;

            let download_args = DownloadArgs {
                url,
                channel: cli.channel,
                language: cli.language,
                format: cli.format,
                no_auto: cli.no_auto,
                no_merge: cli.no_merge,
                output_dir: cli.output_dir,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_download(download_args).await
        }
    }
}

async fn run_download(options: DownloadArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(to_level_filter(cmd_log_level.clone().into()));
    }

    let config = load_config(&options)?;

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(to_level_filter(config.log_level.clone()));
    }

    let controller = Controller::with_config(config)?;
    controller
        .run(&options.url, options.channel, options.output_dir.clone())
        .await
}

/// Load the configuration file, creating a default one when missing, and
/// apply command line overrides on top.
fn load_config(options: &DownloadArgs) -> Result<Config> {
    let config_path = &options.config_path;

    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;
        let reader = BufReader::new(file);

        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(language) = &options.language {
        config.language = language.clone();
    }

    if let Some(format) = &options.format {
        config.format = format.clone().into();
    }

    if options.no_auto {
        config.include_auto = false;
    }

    if options.no_merge {
        config.merge = false;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    Ok(config)
}

fn to_level_filter(level: app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
