//! Ledger domain model: entries, drafts, and the two-sided record.

pub mod entry;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use entry::{Entry, EntryDraft, Kind, TaggedEntry};
pub use ledger::Ledger;
