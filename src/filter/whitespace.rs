//! Whitespace-only change collapsing.

use crate::parse::{DiffLine, LineKind};

/// Remove every whitespace character from a line.
fn squash_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Collapse whitespace-only del/add run pairs into context records.
///
/// Scans for a maximal run of adjacent `Del` records immediately followed by
/// a maximal run of adjacent `Add` records of equal length. When every
/// aligned pair is identical after removing all whitespace, the entire run is
/// replaced by `Ctx` records carrying the add-side text (the "after" text is
/// what gets shown, marked as unchanged) with the del-side old line number
/// and the add-side new line number.
///
/// If the lengths differ or any pair is not whitespace-equivalent, the run is
/// left untouched for move detection and rendering to handle normally.
pub(super) fn collapse_whitespace_pairs(records: &[DiffLine]) -> Vec<DiffLine> {
    let mut out: Vec<DiffLine> = Vec::with_capacity(records.len());
    let mut i = 0;

    while i < records.len() {
        if records[i].kind != LineKind::Del {
            out.push(records[i].clone());
            i += 1;
            continue;
        }

        let del_start = i;
        while i < records.len() && records[i].kind == LineKind::Del {
            i += 1;
        }
        let dels = &records[del_start..i];

        let add_start = i;
        while i < records.len() && records[i].kind == LineKind::Add {
            i += 1;
        }
        let adds = &records[add_start..i];

        let collapsible = !adds.is_empty()
            && dels.len() == adds.len()
            && dels
                .iter()
                .zip(adds)
                .all(|(del, add)| squash_whitespace(&del.text) == squash_whitespace(&add.text));

        if collapsible {
            for (del, add) in dels.iter().zip(adds) {
                out.push(DiffLine {
                    kind: LineKind::Ctx,
                    text: add.text.clone(),
                    old_line_no: del.old_line_no,
                    new_line_no: add.new_line_no,
                    consecutive: false,
                    index: add.index,
                });
            }
        } else {
            out.extend(dels.iter().cloned());
            out.extend(adds.iter().cloned());
        }
    }

    out
}
