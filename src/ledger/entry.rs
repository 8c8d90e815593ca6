use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::currency::Amount;
use crate::errors::{Field, LedgerError};

/// Which side of the ledger an entry lives in.
///
/// Entries never carry their kind: membership in the income or expense
/// sequence decides it, and query results tag it on transiently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Income, Kind::Expense];

    pub fn label(self) -> &'static str {
        match self {
            Kind::Income => "Income",
            Kind::Expense => "Expense",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single dated ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub amount: Amount,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Entry {
    pub fn new(amount: Amount, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            category: category.into().trim().to_string(),
            date,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.is_empty() { None } else { Some(note) };
        self
    }

    /// The note as rendered text; an absent note reads as empty.
    pub fn note_text(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }
}

/// Unvalidated form input for an entry.
///
/// Shells collect these from whatever widgets they use and call
/// [`EntryDraft::validate`] at the store boundary; nothing reaches a ledger
/// until the required fields hold.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub amount: Option<Amount>,
    pub category: String,
    pub date: Option<NaiveDate>,
    pub note: String,
}

impl EntryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Checks the required fields and produces a persistable entry.
    ///
    /// Amount and date must be present, the amount non-negative, and the
    /// category non-blank after trimming; the category is stored trimmed and
    /// an empty note becomes `None`.
    pub fn validate(self) -> Result<Entry, LedgerError> {
        let amount = self.amount.ok_or(LedgerError::MissingField(Field::Amount))?;
        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount(format!(
                "negative amount `{}`",
                amount
            )));
        }
        let category = self.category.trim().to_string();
        if category.is_empty() {
            return Err(LedgerError::MissingField(Field::Category));
        }
        let date = self.date.ok_or(LedgerError::MissingField(Field::Date))?;
        let note = if self.note.is_empty() {
            None
        } else {
            Some(self.note)
        };
        Ok(Entry {
            amount,
            category,
            date,
            note,
        })
    }
}

/// A query-result item: one entry plus the kind and position it currently
/// occupies.
///
/// Positions are only meaningful against the snapshot the view was taken
/// from; the borrow ties the two together, so a mutation forces callers to
/// re-query instead of acting on stale addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedEntry<'a> {
    pub kind: Kind,
    pub position: usize,
    pub entry: &'a Entry,
}
