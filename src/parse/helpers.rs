//! Helper functions for hunk header parsing.

/// Parse a hunk header line.
///
/// Format: "@@ -old_start,old_len +new_start,new_len @@" or "@@ -old_start +new_start @@"
/// Also handles: "@@ -old_start,old_len +new_start,new_len @@ context info"
///
/// Returns (old_start, new_start) or None if parsing fails.
pub(super) fn parse_hunk_header(line: &str) -> Option<(usize, usize)> {
    let line = line.strip_prefix("@@ ")?;

    // Find the closing " @@" (trailing context after it is allowed)
    let end_marker = line.find(" @@")?;
    let range_part = &line[..end_marker];

    let parts: Vec<&str> = range_part.split_whitespace().collect();
    if parts.len() < 2 {
        return None;
    }

    let old_part = parts[0].strip_prefix('-')?;
    let new_part = parts[1].strip_prefix('+')?;

    let old_start = parse_range_start(old_part)?;
    let new_start = parse_range_start(new_part)?;

    Some((old_start, new_start))
}

/// Parse the start line from a range specification.
///
/// Format: "start" or "start,len"
fn parse_range_start(range: &str) -> Option<usize> {
    let start_str = if let Some(comma_pos) = range.find(',') {
        &range[..comma_pos]
    } else {
        range
    };

    start_str.parse().ok()
}
