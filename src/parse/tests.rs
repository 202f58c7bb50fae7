//! Tests for diff tokenization.

use super::helpers::parse_hunk_header;
use super::{parse_diff, DiffInput, LineKind};

/// Test parsing a simple hunk with context, deletion, and addition.
#[test]
fn test_parse_simple_hunk() {
    let diff = r#"diff --git a/src/lib.rs b/src/lib.rs
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -10,3 +10,3 @@ fn existing_function() {
 let unchanged = true;
-let x = 1;
+let x = 2;
"#;

    let records = parse_diff(&DiffInput::from(diff));

    // Header noise produces no records
    assert_eq!(records.len(), 4);

    assert_eq!(records[0].kind, LineKind::Hunk);
    assert_eq!(records[0].text, "@@ -10,3 +10,3 @@ fn existing_function() {");
    assert_eq!(records[0].old_line_no, None);
    assert_eq!(records[0].new_line_no, None);

    assert_eq!(records[1].kind, LineKind::Ctx);
    assert_eq!(records[1].text, "let unchanged = true;");
    assert_eq!(records[1].old_line_no, Some(10));
    assert_eq!(records[1].new_line_no, Some(10));

    assert_eq!(records[2].kind, LineKind::Del);
    assert_eq!(records[2].text, "let x = 1;");
    assert_eq!(records[2].old_line_no, Some(11));
    assert_eq!(records[2].new_line_no, None);

    assert_eq!(records[3].kind, LineKind::Add);
    assert_eq!(records[3].text, "let x = 2;");
    assert_eq!(records[3].old_line_no, None);
    assert_eq!(records[3].new_line_no, Some(11));
}

/// Only `--- `, `+++ `, and `diff ` lines are file-header noise; other git
/// metadata lines (`index`, mode changes) become context records.
#[test]
fn test_metadata_lines_are_context_records() {
    let diff = r#"diff --git a/src/lib.rs b/src/lib.rs
index abc1234..def5678 100644
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -1,1 +1,1 @@
-old();
+new();
"#;

    let records = parse_diff(&DiffInput::from(diff));

    assert_eq!(records.len(), 4);
    assert_eq!(records[0].kind, LineKind::Ctx);
    assert_eq!(records[0].text, "index abc1234..def5678 100644");

    // The hunk header still resets the counters afterwards
    assert_eq!(records[1].kind, LineKind::Hunk);
    assert_eq!(records[2].old_line_no, Some(1));
    assert_eq!(records[3].new_line_no, Some(1));
}

/// Test that record indexes are stable positions in the parsed stream.
#[test]
fn test_record_indexes_are_stream_positions() {
    let diff = "@@ -1,2 +1,2 @@\n ctx\n-del\n+add";
    let records = parse_diff(&DiffInput::from(diff));

    for (position, record) in records.iter().enumerate() {
        assert_eq!(record.index, position);
    }
}

/// Test the consecutive flag across add/del runs.
#[test]
fn test_consecutive_flags() {
    let diff = "@@ -1,3 +1,3 @@\n-one\n-two\n+three\n+four\n ctx\n+five";
    let records = parse_diff(&DiffInput::from(diff));

    // First del of a run is not consecutive; followers are
    assert!(!records[1].consecutive);
    assert!(records[2].consecutive);

    // The add run restarts: the first add follows a del
    assert!(!records[3].consecutive);
    assert!(records[4].consecutive);

    // An add after a context line starts a fresh run
    assert!(!records[6].consecutive);
}

/// Test that line counters advance independently per side.
#[test]
fn test_counters_advance_per_side() {
    let diff = "@@ -5,4 +8,3 @@\n-gone one\n-gone two\n+new one\n kept";
    let records = parse_diff(&DiffInput::from(diff));

    assert_eq!(records[1].old_line_no, Some(5));
    assert_eq!(records[2].old_line_no, Some(6));
    assert_eq!(records[3].new_line_no, Some(8));
    // Context consumes both counters after the runs
    assert_eq!(records[4].old_line_no, Some(7));
    assert_eq!(records[4].new_line_no, Some(9));
}

/// Test that a second hunk header resets the counters.
#[test]
fn test_multiple_hunks_reset_counters() {
    let diff = "@@ -1,1 +1,1 @@\n ctx a\n@@ -50,1 +60,1 @@\n ctx b";
    let records = parse_diff(&DiffInput::from(diff));

    assert_eq!(records[1].old_line_no, Some(1));
    assert_eq!(records[1].new_line_no, Some(1));
    assert_eq!(records[3].old_line_no, Some(50));
    assert_eq!(records[3].new_line_no, Some(60));
}

/// Test that line numbers within a hunk are non-decreasing.
#[test]
fn test_line_numbers_non_decreasing_within_hunk() {
    let diff = r#"@@ -1,6 +1,7 @@
 fn main() {
-    let a = 1;
+    let a = 2;
+    let b = 3;
     println!("{}", a);
-    done();
 }
"#;
    let records = parse_diff(&DiffInput::from(diff));

    let mut last_old = 0;
    let mut last_new = 0;
    for record in &records {
        if let Some(old) = record.old_line_no {
            assert!(old >= last_old, "old line numbers must not decrease");
            last_old = old;
        }
        if let Some(new) = record.new_line_no {
            assert!(new >= last_new, "new line numbers must not decrease");
            last_new = new;
        }
    }
}

/// Test that a malformed hunk header emits a record but keeps the counters.
#[test]
fn test_malformed_hunk_header_is_tolerated() {
    let diff = "@@ -3,1 +3,1 @@\n ctx a\n@@ garbage @@\n ctx b";
    let records = parse_diff(&DiffInput::from(diff));

    assert_eq!(records[2].kind, LineKind::Hunk);
    assert_eq!(records[2].text, "@@ garbage @@");
    // Counters continue from their last known values
    assert_eq!(records[3].old_line_no, Some(4));
    assert_eq!(records[3].new_line_no, Some(4));
}

/// Test that pre-split lines parse identically to raw text.
#[test]
fn test_pre_split_lines_input() {
    let text = DiffInput::from("@@ -1,1 +1,1 @@\n-old\n+new");
    let lines = DiffInput::Lines(vec![
        "@@ -1,1 +1,1 @@".to_string(),
        "-old".to_string(),
        "+new".to_string(),
    ]);

    assert_eq!(parse_diff(&text), parse_diff(&lines));
}

/// Test that context lines keep their content when the space marker is absent.
#[test]
fn test_context_without_space_marker() {
    let diff = "@@ -1,1 +1,1 @@\nbare context";
    let records = parse_diff(&DiffInput::from(diff));

    assert_eq!(records[1].kind, LineKind::Ctx);
    assert_eq!(records[1].text, "bare context");
}

/// Test parsing an empty input.
#[test]
fn test_empty_input_has_no_records() {
    assert!(parse_diff(&DiffInput::from("")).is_empty());
    assert!(parse_diff(&DiffInput::Lines(Vec::new())).is_empty());
    assert!(DiffInput::from("").is_empty());
    assert!(!DiffInput::from("+x").is_empty());
}

/// Test hunk header parsing variants.
#[test]
fn test_parse_hunk_header_variants() {
    assert_eq!(parse_hunk_header("@@ -1,5 +2,6 @@"), Some((1, 2)));
    assert_eq!(parse_hunk_header("@@ -10 +20 @@"), Some((10, 20)));
    assert_eq!(parse_hunk_header("@@ -3,0 +4,1 @@ fn context()"), Some((3, 4)));
    assert_eq!(parse_hunk_header("@@ malformed"), None);
    assert_eq!(parse_hunk_header("not a header"), None);
}
