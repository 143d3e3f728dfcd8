//! Check configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// File the text report is written to when no other name is given.
pub const DEFAULT_REPORT_FILE: &str = "results.txt";

/// Configuration for a check run.
///
/// Rule thresholds are fixed constants in [`crate::rules`] and are not part
/// of the configuration.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CheckConfig {
    /// Root directory to check.
    pub root: PathBuf,

    /// Where the text report is written, relative to the working directory.
    #[builder(default = "PathBuf::from(DEFAULT_REPORT_FILE)")]
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,

    /// Print a `Checking` line for every directory entered.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

fn default_true() -> bool {
    true
}

fn default_report_path() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_FILE)
}

impl CheckConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        if let Some(ref report) = self.report_path
            && report.as_os_str().is_empty()
        {
            return Err("Report path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl CheckConfig {
    /// Create a new check config builder.
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::default()
    }

    /// Create a simple config for checking a path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            report_path: default_report_path(),
            show_progress: true,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = CheckConfig::builder()
            .root("/home/user")
            .report_path("audit.txt")
            .show_progress(false)
            .build()
            .unwrap();

        assert_eq!(config.root, PathBuf::from("/home/user"));
        assert_eq!(config.report_path, PathBuf::from("audit.txt"));
        assert!(!config.show_progress);
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = CheckConfig::builder().root("/data").build().unwrap();
        assert_eq!(config.report_path, PathBuf::from(DEFAULT_REPORT_FILE));
        assert!(config.show_progress);
    }

    #[test]
    fn test_config_builder_rejects_missing_or_empty_root() {
        assert!(CheckConfig::builder().build().is_err());
        assert!(CheckConfig::builder().root("").build().is_err());
        assert!(
            CheckConfig::builder()
                .root("/data")
                .report_path("")
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_config_simple() {
        let config = CheckConfig::new("/home/user");
        assert_eq!(config.root, PathBuf::from("/home/user"));
        assert!(config.show_progress);
    }
}
