//! Core types and naming rules for drivecheck.
//!
//! This crate provides the data model shared by the walker and the report
//! formatter: violations, the per-subtree result accumulator, the fixed rule
//! set applied to file names and paths, and configuration.

mod config;
mod error;
mod result;
pub mod rules;
mod violation;

pub use config::{CheckConfig, CheckConfigBuilder, DEFAULT_REPORT_FILE};
pub use error::CheckError;
pub use result::CheckResult;
pub use rules::{CONTROL_CHAR_LIMIT, FORBIDDEN_CHARS, MAX_PATH_CHARS, RESERVED_NAMES};
pub use violation::{Rule, Violation};
