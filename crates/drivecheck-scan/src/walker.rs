//! Depth-first directory walker.

use std::cell::RefCell;
use std::path::{Component, Path, PathBuf};

use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

use drivecheck_core::{CheckConfig, CheckError, CheckResult, Violation, rules};

use crate::progress::{ProgressTracker, WalkProgress};
use crate::source::{DirSource, FsSource};

/// Walks a directory tree and applies the naming rules to every entry.
///
/// The walk is sequential and recursive: each directory builds its own
/// [`CheckResult`] and every subdirectory's result is merged into it as soon
/// as the recursive call returns. Within a directory, files are checked
/// before subdirectories and both are visited in name order, so repeated
/// walks over an unchanged tree give identical results.
pub struct TreeWalker<S = FsSource> {
    source: S,
    subscribers: RefCell<Vec<mpsc::UnboundedSender<WalkProgress>>>,
    tracker: ProgressTracker,
}

impl TreeWalker<FsSource> {
    /// Create a walker over the local filesystem.
    pub fn new() -> Self {
        Self::with_source(FsSource)
    }
}

impl<S: DirSource> TreeWalker<S> {
    /// Create a walker that lists directories through `source`.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            subscribers: RefCell::new(Vec::new()),
            tracker: ProgressTracker::new(),
        }
    }

    /// Subscribe to a progress event per directory entered.
    ///
    /// Every event is delivered: the channel is unbounded, so a slow reader
    /// never stalls the walk and never misses a directory. The channel closes
    /// when the walker is dropped.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<WalkProgress> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.borrow_mut().push(tx);
        rx
    }

    /// Validate the configured root and walk it.
    ///
    /// The root is made absolute and `.`/`..` components are resolved
    /// lexically before anything is checked. Only a missing or non-directory
    /// root is an error. Anything that goes wrong below the root is recorded
    /// in the result instead.
    pub fn check(&self, config: &CheckConfig) -> Result<CheckResult, CheckError> {
        let root = std::path::absolute(&config.root)
            .map(|path| normalize(&path))
            .map_err(|e| CheckError::io(&config.root, e))?;
        let metadata = std::fs::metadata(&root).map_err(|e| CheckError::io(&root, e))?;
        if !metadata.is_dir() {
            return Err(CheckError::NotADirectory { path: root });
        }

        self.tracker.reset();
        let result = self.walk(&root);

        let progress = self.tracker.snapshot(root);
        info!(
            root = %progress.current_path.display(),
            files = result.files_checked,
            dirs = result.dirs_checked,
            items = progress.total_items(),
            unreadable = progress.errors_count,
            violations = result.violation_count(),
            elapsed_ms = progress.elapsed.as_millis() as u64,
            "check finished"
        );

        Ok(result)
    }

    /// Walk `dir` and everything beneath it.
    ///
    /// Never fails: if `dir` cannot be enumerated, the error becomes a single
    /// violation on `dir` and none of its contents are visited.
    pub fn walk(&self, dir: &Path) -> CheckResult {
        let mut result = CheckResult::new();
        result.record_dir();
        self.tracker.record_dir();
        self.publish(dir);

        let listing = match self.source.list(dir) {
            Ok(listing) => listing,
            Err(err) => {
                warn!(path = %dir.display(), error = %err, "could not enumerate directory");
                self.tracker.record_error();
                result.add_violation(Violation::traversal(dir, &err));
                return result;
            }
        };

        if listing.is_empty() {
            debug!(path = %dir.display(), "empty directory");
            return result;
        }
        debug!(
            path = %dir.display(),
            files = listing.files.len(),
            dirs = listing.dirs.len(),
            "checking directory"
        );

        for file in &listing.files {
            result.record_file();
            self.tracker.record_file();
            record_violations(&mut result, rules::check_file(file));
        }

        for subdir in &listing.dirs {
            record_violations(&mut result, rules::check_dir(subdir));
            let child = self.walk(subdir);
            result.merge(child);
        }

        result
    }

    fn publish(&self, dir: &Path) {
        let mut subscribers = self.subscribers.borrow_mut();
        if subscribers.is_empty() {
            return;
        }
        let progress = self.tracker.snapshot(dir.to_path_buf());
        // A closed receiver is dropped; the rest keep receiving.
        subscribers.retain(|tx| tx.send(progress.clone()).is_ok());
    }
}

impl Default for TreeWalker<FsSource> {
    fn default() -> Self {
        Self::new()
    }
}

fn record_violations(result: &mut CheckResult, violations: impl IntoIterator<Item = Violation>) {
    result.extend(violations.into_iter().inspect(|violation| {
        if let Some(rule) = violation.rule {
            trace!(%rule, "{violation}");
        }
    }));
}

/// Resolve `.` and `..` without touching the filesystem.
///
/// `..` removes the previous component and stops at the root. Symbolic links
/// are not consulted, matching a walk that never follows them.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
