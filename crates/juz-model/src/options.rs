//! Configuration options for batch commands.

use std::path::PathBuf;

/// File name pattern for source juz files picked up by the converter.
pub const DEFAULT_JUZ_PATTERN: &str = "juz-*.json";

/// File name pattern used by the in-place transformers.
pub const DEFAULT_JSON_PATTERN: &str = "*.json";

/// Optional item keys added by the stamper when absent.
pub const DEFAULT_STAMP_KEYS: &[&str] = &["difficulty", "theme"];

/// What the converter does when a file contains an unresolvable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the whole run and write nothing.
    #[default]
    AbortBatch,
    /// Report the failing file and keep converting the rest.
    SkipFile,
}

/// Options shared by every command that walks a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Glob matched against file names.
    pub pattern: String,
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Report what would change without writing anything.
    pub dry_run: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_JSON_PATTERN.to_string(),
            recursive: false,
            dry_run: false,
        }
    }
}

impl BatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Options for the source-to-normalized conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub batch: BatchOptions,
    /// Directory receiving one output file per converted input.
    pub output_dir: PathBuf,
    pub failure_policy: FailurePolicy,
}

impl ConvertOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            batch: BatchOptions::new().with_pattern(DEFAULT_JUZ_PATTERN),
            output_dir: output_dir.into(),
            failure_policy: FailurePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_batch(mut self, batch: BatchOptions) -> Self {
        self.batch = batch;
        self
    }

    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

/// Options for the metadata stamper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampOptions {
    pub batch: BatchOptions,
    pub keys: Vec<String>,
}

impl Default for StampOptions {
    fn default() -> Self {
        Self {
            batch: BatchOptions::default(),
            keys: DEFAULT_STAMP_KEYS.iter().map(|key| (*key).to_string()).collect(),
        }
    }
}

impl StampOptions {
    #[must_use]
    pub fn with_batch(mut self, batch: BatchOptions) -> Self {
        self.batch = batch;
        self
    }

    /// Replace the default key list. An empty list keeps the defaults.
    #[must_use]
    pub fn with_keys(mut self, keys: Vec<String>) -> Self {
        if !keys.is_empty() {
            self.keys = keys;
        }
        self
    }
}

/// Options for the in-place character transformers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransformOptions {
    pub batch: BatchOptions,
    /// Where original file contents are copied before a rewrite.
    /// `None` disables backups.
    pub backup_dir: Option<PathBuf>,
}

impl TransformOptions {
    #[must_use]
    pub fn with_batch(mut self, batch: BatchOptions) -> Self {
        self.batch = batch;
        self
    }

    #[must_use]
    pub fn with_backup_dir(mut self, backup_dir: Option<PathBuf>) -> Self {
        self.backup_dir = backup_dir;
        self
    }
}
