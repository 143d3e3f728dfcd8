//! Report rendering for drivecheck.
//!
//! Turns the violations of a finished check into a deterministic report:
//!
//! 1. Violations are partitioned by their exact reason string
//! 2. Groups are sorted by reason in ordinal order
//! 3. Members of a group keep the order the walk found them in
//!
//! The text form lists each reason on its own line followed by one
//! tab-indented line per violation. The same [`Report`] serializes with
//! serde for machine-readable output.
//!
//! ```rust,ignore
//! use drivecheck_report::Report;
//! use drivecheck_scan::{CheckConfig, TreeWalker};
//!
//! let result = TreeWalker::new().check(&CheckConfig::new("/data")).unwrap();
//! let report = Report::from_result(&result);
//! std::fs::write("results.txt", report.render_text()).unwrap();
//! ```

mod report;

pub use report::{Report, ReportGroup, Summary, group_by_reason};

// Re-export core types
pub use drivecheck_core::{CheckResult, Violation};
