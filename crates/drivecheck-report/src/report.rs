//! Reason-grouped violation report.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use drivecheck_core::{CheckResult, Violation};

/// All violations sharing one reason, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportGroup {
    /// Reason shared by every entry.
    pub reason: String,
    /// Violations in the order the walk found them.
    pub entries: Vec<Violation>,
}

/// Totals for a finished check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Files checked, symlinks and special files included.
    pub files_checked: u64,
    /// Directories entered, the root included.
    pub dirs_checked: u64,
    /// Violations recorded, traversal failures included.
    pub problems: u64,
}

/// Final report: summary plus violations grouped by reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Totals for the whole walk.
    pub summary: Summary,
    /// Groups sorted by reason in ordinal order.
    pub groups: Vec<ReportGroup>,
}

impl Report {
    /// Build a report from a finished walk.
    pub fn from_result(result: &CheckResult) -> Self {
        Self {
            summary: Summary {
                files_checked: result.files_checked,
                dirs_checked: result.dirs_checked,
                problems: result.violation_count() as u64,
            },
            groups: group_by_reason(result.violations()),
        }
    }

    /// Check if any violations were reported.
    pub fn has_problems(&self) -> bool {
        !self.groups.is_empty()
    }

    /// Render the plain-text report.
    ///
    /// Each group is a reason line followed by one line per violation:
    /// `\t<detail>\t<path>`, or `\t<path>` when there is no detail.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            writeln!(f, "{}", group.reason)?;
            for entry in &group.entries {
                if entry.has_detail() {
                    write!(f, "\t{}", entry.detail)?;
                }
                writeln!(f, "\t{}", entry.path.display())?;
            }
        }
        Ok(())
    }
}

/// Partition violations by exact reason.
///
/// Groups come out sorted by reason; members keep their original order
/// because the sort is stable.
pub fn group_by_reason(violations: &[Violation]) -> Vec<ReportGroup> {
    let mut sorted: Vec<&Violation> = violations.iter().collect();
    sorted.sort_by(|a, b| a.reason.cmp(&b.reason));

    let mut groups = Vec::new();
    for (reason, members) in &sorted.into_iter().chunk_by(|&v| v.reason.as_str()) {
        groups.push(ReportGroup {
            reason: reason.to_string(),
            entries: members.cloned().collect(),
        });
    }
    groups
}
