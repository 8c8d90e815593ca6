//! The literal line content of the rendered views and exported documents.
//!
//! Layout concerns (fonts, pagination, column offsets) belong to the
//! shells; this module pins down exactly what each line says.

use chrono::NaiveDate;

use crate::ledger::{Entry, Kind, Ledger, TaggedEntry};
use crate::query::{self, DateRange};

/// Placeholder body for a statement whose range matches nothing.
pub const NO_ENTRIES_IN_RANGE: &str = "No entries in this range.";

/// Per-kind list and report body line: `₹40.00 | Food | 2024-01-01 | note`.
/// The note column is always present and empty when the note is absent.
pub fn entry_line(entry: &Entry, symbol: &str) -> String {
    format!(
        "{} | {} | {} | {}",
        entry.amount.format_with(symbol),
        entry.category,
        entry.date,
        entry.note_text()
    )
}

/// Recent-activity line: `Income | Salary | ₹100.00 | 2024-01-01`, with
/// ` | note` appended only when the note has visible content.
pub fn recent_line(tagged: &TaggedEntry<'_>, symbol: &str) -> String {
    let entry = tagged.entry;
    let mut line = format!(
        "{} | {} | {} | {}",
        tagged.kind,
        entry.category,
        entry.amount.format_with(symbol),
        entry.date
    );
    push_note(&mut line, entry);
    line
}

/// Statement line: `Income | ₹100.00 | Salary | 2024-01-01`, with ` | note`
/// appended only when the note has visible content. The field order differs
/// from [`recent_line`] on purpose.
pub fn statement_line(tagged: &TaggedEntry<'_>, symbol: &str) -> String {
    let entry = tagged.entry;
    let mut line = format!(
        "{} | {} | {} | {}",
        tagged.kind,
        entry.amount.format_with(symbol),
        entry.category,
        entry.date
    );
    push_note(&mut line, entry);
    line
}

fn push_note(line: &mut String, entry: &Entry) {
    let note = entry.note_text();
    if !note.trim().is_empty() {
        line.push_str(" | ");
        line.push_str(note);
    }
}

/// The report document: title and date header, then both sequences in
/// insertion order under their section headings.
pub fn report_lines(ledger: &Ledger, report_date: NaiveDate, symbol: &str) -> Vec<String> {
    let mut lines = vec![
        "SpendTrail Report".to_string(),
        format!("Date: {}", report_date),
        "Income:".to_string(),
    ];
    lines.extend(
        ledger
            .entries(Kind::Income)
            .iter()
            .map(|entry| entry_line(entry, symbol)),
    );
    lines.push("Expense:".to_string());
    lines.extend(
        ledger
            .entries(Kind::Expense)
            .iter()
            .map(|entry| entry_line(entry, symbol)),
    );
    lines
}

/// The statement document: title and range header, then the canonical
/// lines of every entry inside the range, or [`NO_ENTRIES_IN_RANGE`]
/// when nothing falls inside it.
pub fn statement_lines(ledger: &Ledger, range: &DateRange, symbol: &str) -> Vec<String> {
    let mut lines = vec![
        "SpendTrail Statement".to_string(),
        format!("Date Range: {}", range),
    ];
    let matched = query::statement(ledger, range);
    if matched.is_empty() {
        lines.push(NO_ENTRIES_IN_RANGE.to_string());
    } else {
        lines.extend(matched.iter().map(|tagged| statement_line(tagged, symbol)));
    }
    lines
}
