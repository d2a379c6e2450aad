use tracing::{debug, trace};

use crate::data::record::GameRecord;

/// A `(critic score, global sales)` point taken from one valid record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinatePair {
    pub x: f64,
    pub y: f64,
}

impl CoordinatePair {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for CoordinatePair {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<CoordinatePair> for (f64, f64) {
    fn from(p: CoordinatePair) -> Self {
        (p.x, p.y)
    }
}

/// Parse a plain decimal number. Surrounding whitespace is ignored; empty text,
/// grouping separators and non-finite spellings (`inf`, `NaN`) are rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    let value = text.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Map a record to its coordinate pair, or `None` when either the critic score
/// or the global sales field is missing or not numeric.
pub fn extract_pair(record: &GameRecord) -> Option<CoordinatePair> {
    let x = parse_number(record.critic_score())?;
    let y = parse_number(record.global_sales())?;
    Some(CoordinatePair { x, y })
}

/// Stable filter over the records: keeps source order, skips unusable rows.
pub fn extract_sample(records: &[GameRecord]) -> Vec<CoordinatePair> {
    let sample: Vec<CoordinatePair> = records
        .iter()
        .filter_map(|record| {
            let pair = extract_pair(record);
            if pair.is_none() {
                trace!(
                    critic_score = record.critic_score(),
                    global_sales = record.global_sales(),
                    "dropping record:\n{record}"
                );
            }
            pair
        })
        .collect();

    debug!(
        kept = sample.len(),
        dropped = records.len() - sample.len(),
        "extracted numeric sample"
    );
    sample
}
