use std::fmt;
use std::path::PathBuf;

use juz_ingest::SkipReason;

/// Outcome for one scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Rewritten in place (or would be, on a dry run).
    Updated,
    Unchanged,
    /// Normalized copy written (or would be, on a dry run).
    Converted { output: PathBuf },
    /// Converted in memory but discarded because the run aborted.
    NotWritten,
    Skipped(SkipReason),
    Failed(String),
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated => f.write_str("updated"),
            Self::Unchanged => f.write_str("no changes"),
            Self::Converted { output } => write!(f, "converted -> {}", output.display()),
            Self::NotWritten => f.write_str("not written (run aborted)"),
            Self::Skipped(reason) => write!(f, "skipped ({reason})"),
            Self::Failed(message) => write!(f, "failed ({message})"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
    /// Items in the file, when it loaded.
    pub items: usize,
    /// Command-specific change count (keys added, characters changed, items converted).
    pub changes: usize,
}

impl FileReport {
    pub fn new(path: PathBuf, status: FileStatus) -> Self {
        Self {
            path,
            status,
            items: 0,
            changes: 0,
        }
    }

    #[must_use]
    pub fn with_counts(mut self, items: usize, changes: usize) -> Self {
        self.items = items;
        self.changes = changes;
        self
    }
}

#[derive(Debug)]
pub struct BatchResult {
    /// Command name shown in the summary header.
    pub command: &'static str,
    pub dir: PathBuf,
    /// What `FileReport::changes` counts for this command.
    pub change_label: &'static str,
    pub files: Vec<FileReport>,
    pub output_dir: Option<PathBuf>,
    pub backup_dir: Option<PathBuf>,
    pub dry_run: bool,
    /// A fatal record error stopped the run before anything was written.
    pub aborted: bool,
}

impl BatchResult {
    pub fn new(command: &'static str, dir: PathBuf, change_label: &'static str) -> Self {
        Self {
            command,
            dir,
            change_label,
            files: Vec::new(),
            output_dir: None,
            backup_dir: None,
            dry_run: false,
            aborted: false,
        }
    }

    pub fn scanned(&self) -> usize {
        self.files.len()
    }

    pub fn changed(&self) -> usize {
        self.count(|status| {
            matches!(status, FileStatus::Updated | FileStatus::Converted { .. })
        })
    }

    pub fn skipped(&self) -> usize {
        self.count(|status| matches!(status, FileStatus::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|status| matches!(status, FileStatus::Failed(_)))
    }

    pub fn total_changes(&self) -> usize {
        self.files.iter().map(|file| file.changes).sum()
    }

    pub fn has_errors(&self) -> bool {
        self.aborted || self.failed() > 0
    }

    fn count(&self, predicate: impl Fn(&FileStatus) -> bool) -> usize {
        self.files.iter().filter(|file| predicate(&file.status)).count()
    }
}
