//! Pure read-side queries over a ledger snapshot.
//!
//! Everything here borrows the snapshot and leaves it untouched; mutations
//! go through the store. Results carry `(kind, position)` tags that are
//! valid only against the snapshot they were taken from.

pub mod aggregate;
pub mod categories;

pub use aggregate::{daily_totals, totals, DayTotals, Totals};
pub use categories::distinct_categories;

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

use crate::ledger::{Entry, Kind, Ledger, TaggedEntry};

/// How many entries the recent-activity view shows.
pub const RECENT_LIMIT: usize = 5;

/// Merges both sequences into one tagged view, income first, each entry
/// carrying its position within its own kind.
pub fn merged(ledger: &Ledger) -> Vec<TaggedEntry<'_>> {
    let mut entries =
        Vec::with_capacity(ledger.count(Kind::Income) + ledger.count(Kind::Expense));
    for kind in Kind::ALL {
        entries.extend(of_kind(ledger, kind));
    }
    entries
}

/// One kind's entries in insertion order, tagged with their positions.
pub fn of_kind(ledger: &Ledger, kind: Kind) -> Vec<TaggedEntry<'_>> {
    ledger
        .entries(kind)
        .iter()
        .enumerate()
        .map(|(position, entry)| TaggedEntry {
            kind,
            position,
            entry,
        })
        .collect()
}

/// Sorts a tagged view into canonical display order: date descending, the
/// higher insertion position first on equal dates, and Income before
/// Expense when date and position both tie across kinds.
///
/// The comparator is a total order over the tags, so re-sorting a sorted
/// view reproduces it exactly.
pub fn canonical_sort(entries: &mut [TaggedEntry<'_>]) {
    entries.sort_by(canonical_cmp);
}

fn canonical_cmp(a: &TaggedEntry<'_>, b: &TaggedEntry<'_>) -> Ordering {
    b.entry
        .date
        .cmp(&a.entry.date)
        .then_with(|| kind_rank(a.kind).cmp(&kind_rank(b.kind)))
        .then_with(|| b.position.cmp(&a.position))
}

fn kind_rank(kind: Kind) -> u8 {
    match kind {
        Kind::Income => 0,
        Kind::Expense => 1,
    }
}

/// The recent-activity view: the canonical merge truncated to `limit`.
pub fn recent(ledger: &Ledger, limit: usize) -> Vec<TaggedEntry<'_>> {
    let mut entries = merged(ledger);
    canonical_sort(&mut entries);
    entries.truncate(limit);
    entries
}

/// Case-insensitive text filter over one kind's sequence.
///
/// An empty needle keeps everything; any other needle, whitespace included,
/// keeps an entry only when its category or note contains it. Input order
/// and position tags are preserved.
pub fn filter_text<'a>(ledger: &'a Ledger, kind: Kind, needle: &str) -> Vec<TaggedEntry<'a>> {
    let needle = needle.to_lowercase();
    let mut entries = of_kind(ledger, kind);
    entries.retain(|tagged| matches_needle(tagged.entry, &needle));
    entries
}

fn matches_needle(entry: &Entry, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    entry.category.to_lowercase().contains(needle)
        || entry.note_text().to_lowercase().contains(needle)
}

/// The per-kind list view: text-filtered, in canonical order.
pub fn search<'a>(ledger: &'a Ledger, kind: Kind, needle: &str) -> Vec<TaggedEntry<'a>> {
    let mut entries = filter_text(ledger, kind, needle);
    canonical_sort(&mut entries);
    entries
}

/// An inclusive date window; either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// True when `date` falls inside the window, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (Some(start), Some(end)) => write!(f, "{} to {}", start, end),
            (Some(start), None) => write!(f, "from {}", start),
            (None, Some(end)) => write!(f, "up to {}", end),
            (None, None) => f.write_str("all dates"),
        }
    }
}

/// Entries of both kinds falling inside `range`, canonically sorted. An
/// empty result is a valid statement.
pub fn statement<'a>(ledger: &'a Ledger, range: &DateRange) -> Vec<TaggedEntry<'a>> {
    let mut entries = merged(ledger);
    entries.retain(|tagged| range.contains(tagged.entry.date));
    canonical_sort(&mut entries);
    entries
}
