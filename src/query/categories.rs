//! Category suggestions, derived from the entries on demand.

use std::collections::HashSet;

use crate::ledger::{Kind, Ledger};

/// Distinct trimmed non-empty categories of one kind, in order of first
/// appearance. Never persisted; recomputed from the snapshot each call.
pub fn distinct_categories(ledger: &Ledger, kind: Kind) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    for entry in ledger.entries(kind) {
        let category = entry.category.trim();
        if category.is_empty() || !seen.insert(category) {
            continue;
        }
        ordered.push(category.to_string());
    }
    ordered
}
