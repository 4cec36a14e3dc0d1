//! Quantity aggregation per (Gender, Style, Color)

use crate::types::{AggregatedGroup, CorrectedRecord, GroupKey};
use std::collections::BTreeMap;

/// Sum Qty per exact (Gender, Style, Color) key.
///
/// Groups come back sorted by key. Records without a usable key are left out.
pub fn aggregate(records: &[CorrectedRecord]) -> Vec<AggregatedGroup> {
    let mut totals: BTreeMap<GroupKey, f64> = BTreeMap::new();

    for record in records {
        if let Some(key) = record.group_key() {
            *totals.entry(key).or_insert(0.0) += record.qty;
        }
    }

    totals
        .into_iter()
        .map(|(key, total)| AggregatedGroup::from_key(key, total))
        .collect()
}
