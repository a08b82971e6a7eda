// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};
use std::io::Write;
use std::path::PathBuf;

use docinject::app_config::{Config, LogLevel};
use docinject::injector::ContentInjector;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for docinject
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// docinject - copy documentation into demo pages
#[derive(Parser, Debug)]
#[command(name = "docinject")]
#[command(version)]
#[command(about = "Inject documentation files into the marker block of demo pages")]
#[command(long_about = "docinject copies every docs/<locale>/*.md file into the
<script type=\"text/plain\" id=\"mdContent\"> block of demos/<locale>/<name>.html.

EXAMPLES:
    docinject                          # Process docs/ and demos/ under the current directory
    docinject --root ../site           # Process another project
    docinject --dry-run                # Show what would be updated
    docinject completions bash > docinject.bash

CONFIGURATION:
    Settings are read from docinject.json when it exists. Every setting has a
    default, so the file is optional and is never created.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project root holding the docs and demos directories
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Configuration file path, relative to the root
    #[arg(short, long, default_value = "docinject.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Report what would be updated without writing any file
    #[arg(short = 'n', long)]
    dry_run: bool,
}

// @struct: Console logger writing to stderr
struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(ConsoleLogger { level }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Prefix and ANSI colour for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("✗ ", "1;31"),
            Level::Warn => ("⚠ ", "1;33"),
            Level::Info => ("", "1;32"),
            Level::Debug => ("· ", "1;36"),
            Level::Trace => ("… ", "1;35"),
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (prefix, colour) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {}{}\x1B[0m",
                colour, now, prefix, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    // Install the logger at the default level; config may lower or raise it below
    ConsoleLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "docinject", &mut std::io::stdout());
        return Ok(());
    }

    let cli_level: Option<LogLevel> = cli.log_level.map(Into::into);
    if let Some(level) = cli_level {
        log::set_max_level(level_filter(level));
    }

    let config = Config::resolve(&cli.root, &cli.config_path, cli_level, cli.dry_run)?;
    log::set_max_level(level_filter(config.log_level));

    let injector = ContentInjector::with_config(config)?;
    debug!(
        "Docs root {:?}, demos root {:?}",
        injector.config().docs_dir,
        injector.config().demos_dir
    );
    injector.run().context("Injection run failed")?;

    Ok(())
}
