//! CLI argument definitions for juz-tools.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use juz_model::BatchOptions;
use juz_normalize::{DEFAULT_STRIP_CHARS, FieldPath};

#[derive(Parser)]
#[command(
    name = "juz-tools",
    version,
    about = "Juz quiz tools - normalize and clean Qur'an quiz JSON files",
    long_about = "Normalize and clean Qur'an quiz JSON files.\n\n\
                  Converts Arabic surah names and free-form verse references to\n\
                  numeric surah ids and verse lists, stamps default metadata keys,\n\
                  and swaps or strips bracket characters in item text fields."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert source-shape juz files to the normalized schema.
    Convert(ConvertArgs),

    /// Add empty default metadata keys to every quiz item.
    Stamp(StampArgs),

    /// Swap the ornate brackets ﴿ and ﴾ in one item field.
    SwapBrackets(SwapArgs),

    /// Delete bracket characters from one item field.
    StripBrackets(StripArgs),

    /// List the canonical surah catalog.
    Surahs,
}

/// Directory walking flags shared by every batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob matched against file names (default depends on the command).
    #[arg(long = "pattern", value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Descend into subdirectories.
    #[arg(long = "recursive", short = 'r')]
    pub recursive: bool,

    /// Report what would change without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl BatchArgs {
    pub fn to_options(&self, default_pattern: &str) -> BatchOptions {
        BatchOptions::new()
            .with_pattern(self.pattern.as_deref().unwrap_or(default_pattern))
            .with_recursive(self.recursive)
            .with_dry_run(self.dry_run)
    }
}

#[derive(Args)]
pub struct BackupArgs {
    /// Directory for copies of changed files (default: <DIR>_backup).
    #[arg(long = "backup-dir", value_name = "DIR")]
    pub backup_dir: Option<PathBuf>,

    /// Rewrite files without keeping a copy of the original.
    #[arg(long = "no-backup", conflicts_with = "backup_dir")]
    pub no_backup: bool,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Directory containing source-shape juz files.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Output directory for normalized files (default: <INPUT_DIR>_v2).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip files with unknown surah names instead of aborting the run.
    ///
    /// By default one unresolvable record stops the whole conversion and no
    /// output file is written. With this flag every convertible file is
    /// written, failures are reported, and the exit status is still non-zero.
    #[arg(long = "keep-going")]
    pub keep_going: bool,

    #[command(flatten)]
    pub batch: BatchArgs,
}

#[derive(Parser)]
pub struct StampArgs {
    /// Directory containing juz files to update in place.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Item key to add when missing (repeatable; default: difficulty, theme).
    #[arg(long = "key", value_name = "KEY")]
    pub keys: Vec<String>,

    #[command(flatten)]
    pub batch: BatchArgs,
}

#[derive(Parser)]
pub struct SwapArgs {
    /// Directory containing juz files to update in place.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Dotted path of the item field to edit.
    #[arg(long = "field", value_name = "PATH", default_value = "answer.commentary_en")]
    pub field: FieldPath,

    #[command(flatten)]
    pub batch: BatchArgs,

    #[command(flatten)]
    pub backup: BackupArgs,
}

#[derive(Parser)]
pub struct StripArgs {
    /// Directory containing juz files to update in place.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Dotted path of the item field to edit.
    #[arg(long = "field", value_name = "PATH", default_value = "answer.ayah_ar")]
    pub field: FieldPath,

    /// Characters to delete.
    #[arg(long = "chars", value_name = "CHARS", default_value = DEFAULT_STRIP_CHARS)]
    pub chars: String,

    #[command(flatten)]
    pub batch: BatchArgs,

    #[command(flatten)]
    pub backup: BackupArgs,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
