// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{error, warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::Path;
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use crate::app_controller::{Controller, DownloadRequest};

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod language_utils;
mod providers;
mod subtitle_processor;
mod track_resolver;
mod url_utils;

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

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for ytsubs
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// ytsubs - YouTube subtitle downloader
///
/// Downloads caption tracks from YouTube videos and saves them as plain
/// text or SRT files.
#[derive(Parser, Debug)]
#[command(name = "ytsubs")]
#[command(version = "1.0.0")]
#[command(about = "YouTube subtitle download tool")]
#[command(long_about = "ytsubs downloads caption tracks from YouTube videos and renders them as plain text or SRT files.

EXAMPLES:
    ytsubs https://www.youtube.com/watch?v=dQw4w9WgXcQ                 # Download with defaults from config
    ytsubs -l es -f txt https://youtu.be/dQw4w9WgXcQ                   # Spanish captions as plain text
    ytsubs --list-languages https://www.youtube.com/watch?v=dQw4w9WgXcQ # Show available caption languages
    ytsubs                                                             # Interactive prompt (URL, language, format)
    ytsubs completions bash > ytsubs.bash                              # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.

SUPPORTED LANGUAGES:
    en, es, fr, de, it, ja, ko, pt, ru, zh

OUTPUT FORMATS:
    txt - plain text, one caption per line
    srt - numbered timestamp blocks")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Video URL to download subtitles for
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Subtitle language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    lang: Option<String>,

    /// Output format ('txt' or 'srt')
    #[arg(short, long)]
    format: Option<String>,

    /// Directory to write subtitle files to
    #[arg(short, long)]
    output_dir: Option<String>,

    /// List available caption languages instead of downloading
    #[arg(long)]
    list_languages: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Exit with a failing status code when the download fails
    #[arg(long)]
    strict_exit: bool,
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

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
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
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
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

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "ytsubs", &mut std::io::stdout());
            Ok(())
        }
        None => run_download(cli).await,
    }
}

async fn run_download(options: CommandLineOptions) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        config
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();

        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Validate the configuration file before CLI overrides; bad values
    // passed on the command line surface as pipeline errors instead
    config.validate().context("Configuration validation failed")?;

    // Override config with CLI options if provided
    if let Some(lang) = &options.lang {
        config.language = lang.clone();
    }
    if let Some(format) = &options.format {
        // Keep the raw string; the pipeline validates it
        if let Ok(parsed) = format.parse() {
            config.format = parsed;
        }
    }
    if let Some(output_dir) = &options.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
    if options.strict_exit {
        config.strict_exit = true;
    }

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let strict_exit = config.strict_exit;

    // Collect the request, prompting interactively when no URL was given
    let (url, language, format) = match &options.url {
        Some(url) => (
            url.clone(),
            options.lang.clone().unwrap_or_else(|| config.language.clone()),
            options
                .format
                .clone()
                .unwrap_or_else(|| config.format.to_string()),
        ),
        None => {
            if options.list_languages {
                return Err(anyhow!("--list-languages requires a URL"));
            }
            prompt_for_request(&config)?
        }
    };

    let controller = Controller::with_config(config);

    if options.list_languages {
        match controller.list_languages(&url).await {
            Ok(languages) => {
                println!("Available caption languages:");
                for lang in languages {
                    println!("  {}", language_utils::describe_language(&lang));
                }
                return Ok(());
            }
            Err(e) => {
                error!("Could not list caption languages: {}", e);
                if strict_exit {
                    return Err(anyhow!("Listing languages failed: {}", e));
                }
                return Ok(());
            }
        }
    }

    let request = DownloadRequest::new(url, language, format);

    match controller.download_subtitles(&request).await {
        Ok(path) => {
            info!("Success: {:?}", path);
            println!("Subtitles saved to {}", path.display());
            Ok(())
        }
        Err(e) => {
            error!("Download failed: {}", e);
            println!("Error: {}", e);
            // Default behavior swallows the error after printing; --strict-exit
            // or the config flag makes it a failing exit status
            if strict_exit {
                Err(anyhow!("Download failed: {}", e))
            } else {
                Ok(())
            }
        }
    }
}

/// Prompt for URL, language and format on stdin
fn prompt_for_request(config: &Config) -> Result<(String, String, String)> {
    let url = prompt_line("Video URL: ")?;
    if url.is_empty() {
        return Err(anyhow!("A video URL is required"));
    }

    let language = {
        let input = prompt_line(&format!(
            "Language [{}]: ",
            language_utils::describe_language(&config.language)
        ))?;
        if input.is_empty() {
            config.language.clone()
        } else {
            input
        }
    };

    let format = {
        let input = prompt_line(&format!("Format (txt/srt) [{}]: ", config.format))?;
        if input.is_empty() {
            config.format.to_string()
        } else {
            input
        }
    };

    Ok((url, language, format))
}

/// Print a prompt and read one trimmed line from stdin
fn prompt_line(label: &str) -> Result<String> {
    print!("{}", label);
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;

    Ok(input.trim().to_string())
}
