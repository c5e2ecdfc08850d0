// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info};
use std::io::Write;
use std::path::PathBuf;

use ianzimu::app_config::{self, Config};
use ianzimu::app_controller::{Controller, ExportFormat, PlayOptions};
use ianzimu::language_utils::InterfaceLanguage;

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

/// CLI Wrapper for InterfaceLanguage to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLanguage {
    Zh,
    Ko,
    En,
}

impl From<CliLanguage> for InterfaceLanguage {
    fn from(cli_language: CliLanguage) -> Self {
        match cli_language {
            CliLanguage::Zh => InterfaceLanguage::Zh,
            CliLanguage::Ko => InterfaceLanguage::Ko,
            CliLanguage::En => InterfaceLanguage::En,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum CliExportFormat {
    Srt,
    Txt,
    All,
}

impl From<CliExportFormat> for ExportFormat {
    fn from(cli_format: CliExportFormat) -> Self {
        match cli_format {
            CliExportFormat::Srt => ExportFormat::TimedCaptions,
            CliExportFormat::Txt => ExportFormat::PlainText,
            CliExportFormat::All => ExportFormat::All,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play the simulated live stream with highlighted subtitles
    Play {
        /// Live stream URL (accepted for display only, nothing is fetched)
        #[arg(short, long)]
        url: Option<String>,

        /// JSON file of subtitles ([{start, end, orig, trans}]) instead of the demo stream
        #[arg(short, long)]
        subtitles: Option<PathBuf>,

        /// Wall-clock delay between ticks in milliseconds
        #[arg(long)]
        tick_ms: Option<u64>,

        /// Start position in milliseconds
        #[arg(long, default_value_t = 0)]
        from: u64,

        /// Stop after this many ticks
        #[arg(long)]
        max_ticks: Option<u64>,

        /// Keep playing at the end of the timeline until Ctrl-C
        #[arg(long)]
        keep_playing: bool,
    },

    /// Show the subtitles at a position
    Show {
        /// Position in milliseconds
        #[arg(long)]
        at: u64,
    },

    /// Explain one or more words
    Explain {
        /// Words to explain
        #[arg(value_name = "WORD", required = true)]
        words: Vec<String>,

        /// Print the explanation records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Take the proficiency quiz
    Quiz {
        /// Comma-separated answers, e.g. B,C,C,B,B (interactive when omitted)
        #[arg(short, long, value_delimiter = ',')]
        answers: Option<Vec<String>>,
    },

    /// Export the subtitles to files
    Export {
        /// Output format
        #[arg(long, value_enum, default_value = "all")]
        format: CliExportFormat,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Force overwrite of existing output files
        #[arg(short, long)]
        force: bool,

        /// JSON file of subtitles instead of the demo stream
        #[arg(short, long)]
        subtitles: Option<PathBuf>,
    },

    /// Show idol language insight charts
    Insight {
        /// Number of top words to chart
        #[arg(long)]
        top: Option<usize>,
    },

    /// Interactive study session
    Study,

    /// Generate shell completions for ianzimu
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Ianzimu - live K-pop subtitles for Korean study
///
/// Plays a simulated live stream with Korean / Chinese subtitles, explains
/// study words and exports the captions.
#[derive(Parser, Debug)]
#[command(name = "ianzimu")]
#[command(version)]
#[command(about = "Live K-pop subtitles for Korean study")]
#[command(long_about = "Ianzimu plays a simulated live stream with bilingual subtitles and turns it into study material.

EXAMPLES:
    ianzimu play                                # Play the demo stream
    ianzimu play --keep-playing --tick-ms 100   # Faster playback until Ctrl-C
    ianzimu show --at 9000                      # Subtitles at 00:09
    ianzimu explain 발음 받침                    # Explain words
    ianzimu quiz --answers B,C,C,B,B            # Score the quiz
    ianzimu export --format srt -o out/         # Export timed captions
    ianzimu --lang en study                     # Interactive session in English
    ianzimu completions bash > ianzimu.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in ianzimu.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "ianzimu.json")]
    config: PathBuf,

    /// Interface language
    #[arg(long, global = true, value_enum)]
    lang: Option<CliLanguage>,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
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

    // @returns: Colour and emoji for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "❌"),
            Level::Warn => ("1;33", "🚧"),
            Level::Info => ("1;32", "🎤"),
            Level::Debug => ("1;36", "🔍"),
            Level::Trace => ("1;35", "📋"),
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
            let (colour, emoji) = Self::style_for_level(record.level());
            let _ = writeln!(std::io::stderr(), "\x1B[{}m{} {} {}\x1B[0m", colour, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Trace is the ceiling; the effective level is set after the config is read
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "ianzimu", &mut std::io::stdout());
        return Ok(());
    }

    // A command-line level applies before the config is read
    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&cli.config)?;
    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }
    if let Some(language) = cli.lang {
        config.interface_language = language.into();
    }
    if let Commands::Play { tick_ms: Some(tick_ms), .. } = &cli.command {
        config.playback.tick_interval_ms = *tick_ms;
    }
    if let Commands::Insight { top: Some(top) } = &cli.command {
        config.insight.top_words = *top;
    }
    log::set_max_level(config.log_level.to_level_filter());

    config.validate().context("Invalid configuration")?;
    debug!("Using config: {:?}", config);

    let mut controller = Controller::with_config(config)?;
    run_command(&mut controller, cli.command).await
}

async fn run_command(controller: &mut Controller, command: Commands) -> Result<()> {
    let mut stdout = std::io::stdout();

    match command {
        Commands::Play { url, subtitles, from, max_ticks, keep_playing, .. } => {
            controller.load(subtitles.as_deref(), url.as_deref())?;
            info!("{}", controller.session().t("start_sim"));

            let options = PlayOptions {
                from_ms: from,
                max_ticks,
                keep_playing,
                show_progress: true,
            };
            let report = controller.play(options, |frame| print!("{}", frame)).await?;
            info!("{} ticks, {:?}", report.ticks, report.outcome);
        }
        Commands::Show { at } => {
            print!("{}", controller.show_at(at));
        }
        Commands::Explain { words, json } => {
            if json {
                let records: Vec<_> = words.iter().map(|w| controller.session_mut().explain(w).clone()).collect();
                let output = serde_json::to_string_pretty(&records).context("Failed to serialize explanations")?;
                println!("{}", output);
            } else {
                for word in &words {
                    println!("{}", controller.explain(word));
                }
            }
        }
        Commands::Quiz { answers } => match answers {
            Some(answers) => print!("{}", controller.quiz(&answers)),
            None => {
                let stdin = std::io::stdin();
                controller.run_quiz_interactive(&mut stdin.lock(), &mut stdout)?;
            }
        },
        Commands::Export { format, output_dir, force, subtitles } => {
            if subtitles.is_some() {
                controller.load(subtitles.as_deref(), None)?;
            }
            let written = controller.export(format.into(), &output_dir, force)?;
            for path in written {
                println!("{}", path.display());
            }
        }
        Commands::Insight { .. } => {
            print!("{}", controller.render_insight());
        }
        Commands::Study => {
            let stdin = std::io::stdin();
            controller.run_study(&mut stdin.lock(), &mut stdout).await?;
        }
        Commands::Completions { .. } => {}
    }

    stdout.flush()?;
    Ok(())
}
