// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use realign::app_config::{self, Config, SentenceServiceProvider};
use realign::app_controller::Controller;
use realign::SplitStrategy;

/// CLI Wrapper for SplitStrategy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliSplitStrategy {
    Word,
    Sentence,
}

impl From<CliSplitStrategy> for SplitStrategy {
    fn from(cli_strategy: CliSplitStrategy) -> Self {
        match cli_strategy {
            CliSplitStrategy::Word => SplitStrategy::WordBreak,
            CliSplitStrategy::Sentence => SplitStrategy::SentenceBreak,
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
    /// Spread translated text blocks over the original utterances
    Distribute(DistributeArgs),

    /// Generate shell completions for realign
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct DistributeArgs {
    /// JSON array of utterances ({"content": .., "lines": ..})
    #[arg(short, long, value_name = "UTTERANCES_JSON")]
    utterances: PathBuf,

    /// Translated text, one block per group, blocks separated by blank lines
    #[arg(short = 'x', long, value_name = "TRANSLATION_TXT")]
    translation: PathBuf,

    /// Output file (defaults to <utterances>.realigned.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,

    /// Language code of the translated text (e.g., 'de', 'zh-Hans')
    #[arg(short, long)]
    language: Option<String>,

    /// Splitting strategy
    #[arg(short, long, value_enum)]
    strategy: Option<CliSplitStrategy>,

    /// Use the offline rule-based sentence breaker
    #[arg(long)]
    offline: bool,

    /// Subscription key for the Microsoft sentence service
    #[arg(long, env = "TRANSLATOR_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// realign - spread translated text over timed segments
#[derive(Parser, Debug)]
#[command(name = "realign")]
#[command(version)]
#[command(about = "Re-align translated text to the original timed segments")]
#[command(long_about = "realign splits translated text blocks back over the utterances they were made from,
proportionally to the original lengths, cutting at word or sentence boundaries.

EXAMPLES:
    realign distribute -u cues.json -x cues.de.txt -l de --offline
    realign distribute -u cues.json -x cues.de.txt -s sentence -o out.json
    realign completions bash > realign.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
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

    // @returns: ANSI color for log level
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
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                color, now, record.level(), record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // The level is lowered or raised once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "realign", &mut std::io::stdout());
            Ok(())
        }
        Commands::Distribute(args) => run_distribute(args).await,
    }
}

async fn run_distribute(options: DistributeArgs) -> Result<()> {
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    let config_path = Path::new(&options.config_path);
    let mut config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", options.config_path);
        let config = Config::default();
        config.save(config_path)?;
        config
    };

    // Command line options override the config file
    if let Some(language) = &options.language {
        config.language = language.clone();
    }
    if let Some(strategy) = &options.strategy {
        config.strategy = strategy.clone().into();
    }
    if options.offline {
        config.sentence_service.provider = SentenceServiceProvider::RuleBased;
    }
    if let Some(api_key) = &options.api_key {
        config.sentence_service.api_key = api_key.clone();
    }
    match &options.log_level {
        Some(log_level) => config.log_level = log_level.clone().into(),
        None => log::set_max_level(config.log_level.to_level_filter()),
    }

    if !options.utterances.is_file() {
        return Err(anyhow!("Utterances file does not exist: {:?}", options.utterances));
    }
    if !options.translation.is_file() {
        return Err(anyhow!("Translation file does not exist: {:?}", options.translation));
    }

    let output_path = options.output.clone()
        .unwrap_or_else(|| options.utterances.with_extension("realigned.json"));

    let controller = Controller::with_config(config)?;
    controller.run(&options.utterances, &options.translation, &output_path, options.force_overwrite).await
}
