use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

use super::{Entry, Kind};

/// The persisted record: two insertion-ordered entry sequences.
///
/// Entries are addressed by `(kind, position)` against the current state;
/// positions shift on removal and are never durable identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub income: Vec<Entry>,
    #[serde(default)]
    pub expenses: Vec<Entry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self, kind: Kind) -> &[Entry] {
        match kind {
            Kind::Income => &self.income,
            Kind::Expense => &self.expenses,
        }
    }

    fn entries_mut(&mut self, kind: Kind) -> &mut Vec<Entry> {
        match kind {
            Kind::Income => &mut self.income,
            Kind::Expense => &mut self.expenses,
        }
    }

    pub fn count(&self, kind: Kind) -> usize {
        self.entries(kind).len()
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }

    /// Appends a validated entry to the tail of the kind's sequence.
    pub fn append(&mut self, kind: Kind, entry: Entry) {
        self.entries_mut(kind).push(entry);
    }

    /// Replaces the entry at `position` wholesale, returning the displaced
    /// one. Out-of-range positions leave the ledger untouched.
    pub fn replace_at(&mut self, kind: Kind, position: usize, entry: Entry) -> Result<Entry> {
        let entries = self.entries_mut(kind);
        let len = entries.len();
        let slot = entries
            .get_mut(position)
            .ok_or(LedgerError::OutOfRange {
                kind,
                position,
                len,
            })?;
        Ok(std::mem::replace(slot, entry))
    }

    /// Removes and returns the entry at `position`; entries after it shift
    /// one slot left.
    pub fn remove_at(&mut self, kind: Kind, position: usize) -> Result<Entry> {
        let entries = self.entries_mut(kind);
        let len = entries.len();
        if position >= len {
            return Err(LedgerError::OutOfRange {
                kind,
                position,
                len,
            });
        }
        Ok(entries.remove(position))
    }

    /// Empties both sequences.
    pub fn clear(&mut self) {
        self.income.clear();
        self.expenses.clear();
    }
}
