//! Greedy block matching between deletions and additions.

use crate::config::Config;
use crate::parse::{DiffLine, LineKind};
use std::collections::HashMap;

/// Tag for one matched moved line pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveMatch {
    /// True when the raw line text is identical on both ends; false when the
    /// pair only corresponds after whitespace normalization (moved-and-edited).
    pub exact: bool,
}

/// Move tags keyed by each record's pre-filter stream index.
///
/// A line index appears in at most one match: matching is exclusive,
/// first-accepted-wins.
#[derive(Debug, Default)]
pub struct MoveMarks {
    /// Tags for deletion records.
    pub dels: HashMap<usize, MoveMatch>,
    /// Tags for addition records.
    pub adds: HashMap<usize, MoveMatch>,
}

impl MoveMarks {
    /// Look up the tag for a record, if any.
    pub fn for_record(&self, record: &DiffLine) -> Option<MoveMatch> {
        match record.kind {
            LineKind::Del => self.dels.get(&record.index).copied(),
            LineKind::Add => self.adds.get(&record.index).copied(),
            _ => None,
        }
    }

    /// Total number of tagged line pairs.
    pub fn len(&self) -> usize {
        self.dels.len()
    }

    /// Whether no moves were detected.
    pub fn is_empty(&self) -> bool {
        self.dels.is_empty()
    }
}

/// Collapse internal whitespace runs to a single space and trim the ends.
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Grow a contiguous block starting at `start` in a same-kind record list.
///
/// Follows the `consecutive` flags from the raw stream, stops at the first
/// already-matched record, and is capped at the configured window.
fn grow_block<'a>(
    records: &[&'a DiffLine],
    start: usize,
    matched: &HashMap<usize, MoveMatch>,
    window: usize,
) -> Vec<&'a DiffLine> {
    let mut block = vec![records[start]];
    let mut i = start + 1;

    while i < records.len()
        && block.len() < window
        && records[i].consecutive
        && !matched.contains_key(&records[i].index)
    {
        block.push(records[i]);
        i += 1;
    }

    block
}

/// Detect relocated blocks in a filtered record stream.
///
/// For each unmatched deletion, grows a candidate block and scans the
/// addition blocks in stream order; the first block where the count of
/// normalized-equal positions clears both `min_match_lines` and
/// `similarity_threshold * overlap` is accepted. On acceptance every
/// overlapping line pair is tagged, exact lines and edited lines alike.
///
/// The stream itself is never mutated; only the returned marks carry the
/// result.
pub fn detect_moves(records: &[DiffLine], config: &Config) -> MoveMarks {
    let dels: Vec<&DiffLine> = records.iter().filter(|r| r.kind == LineKind::Del).collect();
    let adds: Vec<&DiffLine> = records.iter().filter(|r| r.kind == LineKind::Add).collect();

    let mut marks = MoveMarks::default();

    let mut di = 0;
    while di < dels.len() {
        if marks.dels.contains_key(&dels[di].index) {
            di += 1;
            continue;
        }

        let del_block = grow_block(&dels, di, &marks.dels, config.match_window);
        di += 1;

        if del_block.len() < config.min_block_len {
            continue;
        }

        let del_norm: Vec<String> = del_block.iter().map(|r| normalize(&r.text)).collect();

        // No backtracking: the first addition block clearing the bar wins.
        let mut ai = 0;
        while ai < adds.len() {
            if marks.adds.contains_key(&adds[ai].index) {
                ai += 1;
                continue;
            }

            let add_block = grow_block(&adds, ai, &marks.adds, config.match_window);
            ai += add_block.len();

            if add_block.len() < config.min_block_len {
                continue;
            }

            let overlap = del_block.len().min(add_block.len());
            let match_count = (0..overlap)
                .filter(|&k| del_norm[k] == normalize(&add_block[k].text))
                .count();

            if match_count >= config.min_match_lines
                && match_count as f64 >= config.similarity_threshold * overlap as f64
            {
                for k in 0..overlap {
                    let exact = del_block[k].text == add_block[k].text;
                    marks.dels.insert(del_block[k].index, MoveMatch { exact });
                    marks.adds.insert(add_block[k].index, MoveMatch { exact });
                }
                break;
            }
        }
    }

    marks
}
