//! Walk progress reporting.

use std::cell::Cell;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Progress information published each time a directory is entered.
#[derive(Debug, Clone)]
pub struct WalkProgress {
    /// Directory being entered.
    pub current_path: PathBuf,
    /// Number of directories entered so far, including this one.
    pub dirs_checked: u64,
    /// Number of files checked so far.
    pub files_checked: u64,
    /// Number of directories that could not be enumerated.
    pub errors_count: u64,
    /// Time elapsed since the walk started.
    pub elapsed: Duration,
}

impl WalkProgress {
    /// Get total items checked (files + dirs).
    pub fn total_items(&self) -> u64 {
        self.files_checked + self.dirs_checked
    }
}

/// Running counters behind [`WalkProgress`].
///
/// The walk is single-threaded, so plain cells are enough.
#[derive(Debug)]
pub(crate) struct ProgressTracker {
    start_time: Cell<Instant>,
    dirs_checked: Cell<u64>,
    files_checked: Cell<u64>,
    errors_count: Cell<u64>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self {
            start_time: Cell::new(Instant::now()),
            dirs_checked: Cell::new(0),
            files_checked: Cell::new(0),
            errors_count: Cell::new(0),
        }
    }

    pub fn reset(&self) {
        self.start_time.set(Instant::now());
        self.dirs_checked.set(0);
        self.files_checked.set(0);
        self.errors_count.set(0);
    }

    pub fn record_dir(&self) {
        self.dirs_checked.set(self.dirs_checked.get() + 1);
    }

    pub fn record_file(&self) {
        self.files_checked.set(self.files_checked.get() + 1);
    }

    pub fn record_error(&self) {
        self.errors_count.set(self.errors_count.get() + 1);
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.get().elapsed()
    }

    pub fn snapshot(&self, current_path: PathBuf) -> WalkProgress {
        WalkProgress {
            current_path,
            dirs_checked: self.dirs_checked.get(),
            files_checked: self.files_checked.get(),
            errors_count: self.errors_count.get(),
            elapsed: self.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_snapshot_and_reset() {
        let tracker = ProgressTracker::new();
        tracker.record_dir();
        tracker.record_file();
        tracker.record_file();
        tracker.record_error();

        let progress = tracker.snapshot(PathBuf::from("/data"));
        assert_eq!(progress.dirs_checked, 1);
        assert_eq!(progress.files_checked, 2);
        assert_eq!(progress.errors_count, 1);
        assert_eq!(progress.total_items(), 3);

        tracker.reset();
        let progress = tracker.snapshot(PathBuf::from("/data"));
        assert_eq!(progress.total_items(), 0);
        assert_eq!(progress.errors_count, 0);
    }
}
