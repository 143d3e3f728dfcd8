//! Directory tree walker for drivecheck.
//!
//! `drivecheck-scan` visits a directory tree depth-first and applies the
//! naming rules from `drivecheck-core` to every entry:
//!
//! - **Files** are checked against every rule
//! - **Directories** are checked against the path-length rule, then walked
//! - **Unreadable directories** become a single violation; siblings are
//!   still walked
//!
//! # Example
//!
//! ```rust,no_run
//! use drivecheck_scan::{CheckConfig, TreeWalker};
//!
//! let config = CheckConfig::new("/path/to/check");
//! let walker = TreeWalker::new();
//! let result = walker.check(&config).unwrap();
//!
//! println!("{} files checked", result.files_checked);
//! println!("{} problems found", result.violation_count());
//! ```
//!
//! # Progress Monitoring
//!
//! Subscribe before walking to receive one event per directory entered. No
//! event is dropped, however far the reader falls behind:
//!
//! ```rust,no_run
//! use drivecheck_scan::TreeWalker;
//!
//! let walker = TreeWalker::new();
//! let mut progress_rx = walker.subscribe();
//!
//! std::thread::spawn(move || {
//!     while let Some(progress) = progress_rx.blocking_recv() {
//!         println!("Checking {}", progress.current_path.display());
//!     }
//! });
//! ```

mod progress;
mod source;
mod walker;

pub use progress::WalkProgress;
pub use source::{DirListing, DirSource, FsSource};
pub use walker::TreeWalker;

// Re-export core types for convenience
pub use drivecheck_core::{CheckConfig, CheckError, CheckResult, Rule, Violation};
