//! Violation records and the rules that produce them.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::Display;

/// One naming rule, listed in evaluation order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// A character with code point below 31.
    ControlCharacter,
    /// One of `< > : " / \ | ? *`.
    ForbiddenCharacter,
    /// `CON`, `PRN`, `AUX`, `NUL`, `COM1`-`COM9`, `LPT1`-`LPT9`.
    ReservedName,
    /// Name made only of periods.
    AllPeriods,
    /// Name begins with a space.
    LeadingSpace,
    /// Name ends with a space.
    TrailingSpace,
    /// Name ends with a period.
    TrailingPeriod,
    /// Full path longer than the path limit.
    PathLength,
}

/// One recorded problem with one path.
///
/// `reason` is the grouping key of the report; `detail` and `rule` are
/// informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Absolute path of the offending file or directory.
    pub path: PathBuf,
    /// Human-readable category.
    pub reason: String,
    /// Supplementary text, empty when there is none.
    #[serde(default)]
    pub detail: String,
    /// Rule that fired, `None` for a traversal failure.
    #[serde(default)]
    pub rule: Option<Rule>,
}

impl Violation {
    /// Create a violation produced by a naming rule.
    pub fn new(
        rule: Rule,
        path: impl Into<PathBuf>,
        reason: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
            detail: detail.into(),
            rule: Some(rule),
        }
    }

    /// Record a directory that could not be enumerated.
    pub fn traversal(path: impl Into<PathBuf>, error: &dyn std::error::Error) -> Self {
        Self {
            path: path.into(),
            reason: error.to_string(),
            detail: String::new(),
            rule: None,
        }
    }

    pub fn has_detail(&self) -> bool {
        !self.detail.is_empty()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_detail() {
            write!(f, "{}: {} ({})", self.reason, self.path.display(), self.detail)
        } else {
            write!(f, "{}: {}", self.reason, self.path.display())
        }
    }
}
