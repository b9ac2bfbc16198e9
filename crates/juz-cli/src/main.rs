//! juz-tools: normalize and clean Qur'an quiz JSON files.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use juz_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use juz_cli::commands::{run_convert, run_stamp, run_strip, run_surahs, run_swap};
use juz_cli::logging::{LogConfig, LogFormat, init_logging};
use juz_cli::summary::print_summary;
use juz_cli::types::BatchResult;
use juz_normalize::{SurahCatalog, SurahLookup};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let catalog = SurahCatalog::canonical();
    let exit_code = match &cli.command {
        Command::Convert(args) => {
            let lookup = SurahLookup::new(&catalog);
            report(run_convert(args, &lookup))
        }
        Command::Stamp(args) => report(run_stamp(args)),
        Command::SwapBrackets(args) => report(run_swap(args)),
        Command::StripBrackets(args) => report(run_strip(args)),
        Command::Surahs => match run_surahs(&catalog) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn report(result: anyhow::Result<BatchResult>) -> i32 {
    match result {
        Ok(result) => {
            print_summary(&result);
            if result.has_errors() { 1 } else { 0 }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
