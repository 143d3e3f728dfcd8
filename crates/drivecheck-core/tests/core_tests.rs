use drivecheck_core::rules::{check_dir, check_file, check_name, is_reserved_name};
use drivecheck_core::{CheckResult, MAX_PATH_CHARS, RESERVED_NAMES, Rule, Violation};
use std::path::{Path, PathBuf};

#[test]
fn test_every_reserved_name_is_flagged_once() {
    for name in RESERVED_NAMES {
        let path = PathBuf::from("/share").join(name);
        let violations = check_file(&path);
        assert_eq!(violations.len(), 1, "{name}");
        assert_eq!(
            violations[0].reason,
            format!("Windows files can't be named {name}")
        );
    }
}

#[test]
fn test_reserved_lookalikes_pass() {
    for name in ["con.txt", "Con", "nul", "LPT", "COM0", "AUX.log", "PRN "] {
        assert!(!is_reserved_name(name), "{name}");
    }
}

#[test]
fn test_single_period_vs_trailing_period() {
    let dot = check_name(Path::new("/x/."), ".");
    assert!(dot.iter().any(|v| v.rule == Some(Rule::AllPeriods)));

    let a_dot = check_name(Path::new("/x/a."), "a.");
    assert_eq!(a_dot.len(), 1);
    assert_eq!(a_dot[0].rule, Some(Rule::TrailingPeriod));
    assert_eq!(a_dot[0].reason, "File names can't end with period(s)");
}

#[test]
fn test_name_with_everything_wrong() {
    let name = " a<\u{1}:.";
    let path = PathBuf::from("/x").join(name);
    let rules: Vec<_> = check_file(&path).into_iter().filter_map(|v| v.rule).collect();
    assert_eq!(
        rules,
        [
            Rule::ForbiddenCharacter,
            Rule::ControlCharacter,
            Rule::ForbiddenCharacter,
            Rule::LeadingSpace,
            Rule::TrailingPeriod,
        ]
    );
}

#[test]
fn test_file_and_dir_length_boundary() {
    let dir = PathBuf::from("/");
    let exact = dir.join("f".repeat(MAX_PATH_CHARS - 1));
    let over = dir.join("f".repeat(MAX_PATH_CHARS));

    assert!(check_file(&exact).is_empty());
    assert!(check_dir(&exact).is_none());

    let file = check_file(&over);
    assert_eq!(file.len(), 1);
    assert_eq!(file[0].detail, "181 characters");
    assert_eq!(check_dir(&over).map(|v| v.detail), Some("181 characters".to_string()));
}

#[test]
fn test_violation_count_tracks_every_mutation() {
    let mut result = CheckResult::new();
    assert_eq!(result.violation_count(), result.violations().len());

    result.add_violation(Violation::new(
        Rule::LeadingSpace,
        "/a/ b",
        "File names can't begin with space(s)",
        "",
    ));
    assert_eq!(result.violation_count(), 1);

    result.extend(check_file(Path::new("/a/CON")));
    assert_eq!(result.violation_count(), result.violations().len());

    let mut child = CheckResult::new();
    child.extend(check_file(Path::new("/a/b/x.")));
    result.merge(child);
    assert_eq!(result.violation_count(), 3);
    assert_eq!(result.violation_count(), result.violations().len());
}

#[test]
fn test_merge_counts_are_order_independent() {
    let make = |files: u64, dirs: u64| {
        let mut r = CheckResult::new();
        (0..files).for_each(|_| r.record_file());
        (0..dirs).for_each(|_| r.record_dir());
        r
    };

    let mut left = make(1, 1);
    left.merge(make(2, 3));
    left.merge(make(4, 5));

    let mut right = make(4, 5);
    right.merge(make(2, 3));
    right.merge(make(1, 1));

    assert_eq!(left.files_checked, right.files_checked);
    assert_eq!(left.dirs_checked, right.dirs_checked);
    assert_eq!(left.files_checked, 7);
    assert_eq!(left.dirs_checked, 9);
}
