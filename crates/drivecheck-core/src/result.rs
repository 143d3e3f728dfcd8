//! Per-subtree result accumulator.

use serde::{Deserialize, Serialize};

use crate::violation::Violation;

/// Counts and violations for one checked subtree.
///
/// Each directory visit owns one of these until it is merged into the
/// parent's. The violation count is always derived from the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Number of files visited.
    pub files_checked: u64,
    /// Number of directories visited, including the subtree root.
    pub dirs_checked: u64,
    violations: Vec<Violation>,
}

impl CheckResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visited file.
    pub fn record_file(&mut self) {
        self.files_checked += 1;
    }

    /// Record a visited directory.
    pub fn record_dir(&mut self) {
        self.dirs_checked += 1;
    }

    /// Append one violation.
    pub fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Append violations in iteration order.
    pub fn extend(&mut self, violations: impl IntoIterator<Item = Violation>) {
        self.violations.extend(violations);
    }

    /// Fold a child subtree's result into this one, consuming it.
    ///
    /// Counts add up and the child's violations follow this result's
    /// existing ones in their original order.
    pub fn merge(&mut self, child: CheckResult) {
        self.files_checked += child.files_checked;
        self.dirs_checked += child.dirs_checked;
        self.violations.extend(child.violations);
    }

    /// Violations in discovery order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Total number of violations found.
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    /// Check if anything was found.
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}
