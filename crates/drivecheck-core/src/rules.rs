//! Fixed naming rules for files and paths.
//!
//! Every function here is pure. Rules never short-circuit each other: a single
//! name can produce several violations, which are returned in evaluation order
//! (see [`Rule`]).
//!
//! Files are checked against every rule. Directories are only checked against
//! the path-length rule.

use std::path::Path;

use crate::violation::{Rule, Violation};

/// Longest full path, in characters, that is not reported.
pub const MAX_PATH_CHARS: usize = 180;

/// Characters with a code point below this are reported as unprintable.
pub const CONTROL_CHAR_LIMIT: u32 = 31;

/// Characters that may not appear in a file name.
pub const FORBIDDEN_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Device names that may not be used as a file name. Matched exactly.
pub const RESERVED_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

const REASON_CONTROL: &str = "Invalid unprintable in filename (char code <31)";
const REASON_ALL_PERIODS: &str = "File names can't be all periods";
const REASON_LEADING_SPACE: &str = "File names can't begin with space(s)";
const REASON_TRAILING_SPACE: &str = "File names can't end with space(s)";
const REASON_TRAILING_PERIOD: &str = "File names can't end with period(s)";
const REASON_PATH_LENGTH: &str = "Possibly long path name";

/// Check a file: name rules against its base name, then the path-length rule.
pub fn check_file(path: &Path) -> Vec<Violation> {
    let mut violations = match path.file_name() {
        Some(name) => check_name(path, &name.to_string_lossy()),
        None => Vec::new(),
    };
    violations.extend(check_path_length(path));
    violations
}

/// Check a directory. Only the path-length rule applies.
pub fn check_dir(path: &Path) -> Option<Violation> {
    check_path_length(path)
}

/// Run the name rules against `name`, attributing violations to `path`.
pub fn check_name(path: &Path, name: &str) -> Vec<Violation> {
    let mut violations = Vec::new();

    // Control and forbidden characters share one pass so hits stay in
    // character order.
    for (index, c) in name.chars().enumerate() {
        if (c as u32) < CONTROL_CHAR_LIMIT {
            violations.push(Violation::new(
                Rule::ControlCharacter,
                path,
                REASON_CONTROL,
                format!(
                    "char({}) at index {index} {}<--",
                    c as u32,
                    prefix(name, index)
                ),
            ));
        }
        if FORBIDDEN_CHARS.contains(&c) {
            violations.push(Violation::new(
                Rule::ForbiddenCharacter,
                path,
                format!("Invalid character in filename ({c})"),
                format!("{c} at index {index} {}<--", prefix(name, index)),
            ));
        }
    }

    if is_reserved_name(name) {
        violations.push(Violation::new(
            Rule::ReservedName,
            path,
            format!("Windows files can't be named {name}"),
            "",
        ));
    }
    if is_all_periods(name) {
        violations.push(Violation::new(
            Rule::AllPeriods,
            path,
            REASON_ALL_PERIODS,
            "",
        ));
    }
    if name.starts_with(' ') {
        violations.push(Violation::new(
            Rule::LeadingSpace,
            path,
            REASON_LEADING_SPACE,
            "",
        ));
    }
    if name.ends_with(' ') {
        violations.push(Violation::new(
            Rule::TrailingSpace,
            path,
            REASON_TRAILING_SPACE,
            "",
        ));
    }
    if name.ends_with('.') {
        violations.push(Violation::new(
            Rule::TrailingPeriod,
            path,
            REASON_TRAILING_PERIOD,
            "",
        ));
    }

    violations
}

/// Report `path` if it is longer than [`MAX_PATH_CHARS`] characters.
pub fn check_path_length(path: &Path) -> Option<Violation> {
    let len = path.to_string_lossy().chars().count();
    (len > MAX_PATH_CHARS).then(|| {
        Violation::new(
            Rule::PathLength,
            path,
            REASON_PATH_LENGTH,
            format!("{len} characters"),
        )
    })
}

/// Exact, case-sensitive match against [`RESERVED_NAMES`]. `con.txt` and
/// `Con` do not match.
pub fn is_reserved_name(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

fn is_all_periods(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c == '.')
}

/// First `index + 1` characters of `name`.
fn prefix(name: &str, index: usize) -> &str {
    match name.char_indices().nth(index + 1) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}
