use std::collections::HashMap;

use crate::data::record::Field;

/// Detect the header row among the first `max_lines` rows.
/// Returns the 0-based row index of the header row, or `None` for no rows.
///
/// The row naming the most known game fields wins (earliest on ties). When no
/// row names any known field, fall back to the last all-text row whose width
/// matches the most common row width, then to row 0.
pub fn detect_header(rows: &[Vec<String>], max_lines: usize) -> Option<usize> {
    let scanned = &rows[..rows.len().min(max_lines)];
    if scanned.is_empty() {
        return None;
    }

    let mut best: Option<(usize, usize)> = None;
    for (i, row) in scanned.iter().enumerate() {
        let known = row.iter().filter(|c| Field::from_header(c).is_some()).count();
        if known > 0 && best.map_or(true, |(_, k)| known > k) {
            best = Some((i, known));
        }
    }
    if let Some((i, _)) = best {
        return Some(i);
    }

    // Find most common column count
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for row in scanned {
        *counts.entry(row.len()).or_insert(0) += 1;
    }
    let most_common = counts
        .into_iter()
        .max_by_key(|&(len, c)| (c, len))
        .map(|(len, _)| len)
        .unwrap_or(0);

    // Scan from bottom up for all-string row
    let fallback = (0..scanned.len()).rev().find(|&i| {
        let row = &scanned[i];
        row.len() == most_common && row.iter().all(|cell| is_label(cell))
    });

    Some(fallback.unwrap_or(0))
}

fn is_label(cell: &str) -> bool {
    let trimmed = cell.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_err()
}

/// Decode raw file bytes, falling back to Latin-1 when they are not UTF-8.
pub fn decode_text(content: Vec<u8>) -> String {
    String::from_utf8(content).unwrap_or_else(|e| {
        // Latin-1: each byte maps to the same Unicode code point
        e.into_bytes().into_iter().map(char::from).collect()
    })
}
