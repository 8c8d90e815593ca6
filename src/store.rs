//! The mutation facade: one ledger snapshot plus the backend it persists to.

use tracing::debug;

use crate::errors::Result;
use crate::ledger::{Entry, EntryDraft, Kind, Ledger};
use crate::storage::{JsonStore, MemoryStore, StorageBackend};

/// Owns the current ledger snapshot and coordinates every mutation.
///
/// Mutations validate first, apply to a copy, persist the copy, and only
/// then commit it; a failure at any step leaves both the snapshot and the
/// stored state exactly as they were. Reads go through [`LedgerStore::ledger`]
/// and the query functions.
pub struct LedgerStore {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
}

impl LedgerStore {
    /// Opens a store over `storage`, adopting the persisted state. Missing
    /// or unreadable state yields the empty ledger.
    pub fn open(storage: Box<dyn StorageBackend>) -> Result<Self> {
        let ledger = storage.load()?;
        Ok(Self { ledger, storage })
    }

    /// The store over the default on-disk location.
    pub fn open_default() -> Result<Self> {
        Self::open(Box::new(JsonStore::open_default()?))
    }

    /// A store with no disk behind it; useful for previews and tests.
    pub fn in_memory() -> Self {
        Self {
            ledger: Ledger::default(),
            storage: Box::new(MemoryStore::new()),
        }
    }

    /// The snapshot queries read from.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    /// Re-reads the persisted state. With several independent stores over
    /// the same location, the last full save wins and `reload` adopts it.
    pub fn reload(&mut self) -> Result<()> {
        self.ledger = self.storage.load()?;
        Ok(())
    }

    /// Persists the current snapshot wholesale.
    pub fn save(&self) -> Result<()> {
        self.storage.save(&self.ledger)
    }

    /// Validates `draft` and appends it to the tail of `kind`.
    pub fn append(&mut self, kind: Kind, draft: EntryDraft) -> Result<()> {
        let entry = draft.validate()?;
        let mut next = self.ledger.clone();
        next.append(kind, entry);
        self.commit(next)?;
        debug!(%kind, position = self.ledger.count(kind) - 1, "entry appended");
        Ok(())
    }

    /// Validates `draft` and swaps it in at `(kind, position)`, returning
    /// the displaced entry.
    pub fn replace_at(&mut self, kind: Kind, position: usize, draft: EntryDraft) -> Result<Entry> {
        let entry = draft.validate()?;
        let mut next = self.ledger.clone();
        let displaced = next.replace_at(kind, position, entry)?;
        self.commit(next)?;
        debug!(%kind, position, "entry replaced");
        Ok(displaced)
    }

    /// Removes the entry at `(kind, position)`; later positions shift left,
    /// so callers must re-resolve any addresses they held.
    pub fn remove_at(&mut self, kind: Kind, position: usize) -> Result<Entry> {
        let mut next = self.ledger.clone();
        let removed = next.remove_at(kind, position)?;
        self.commit(next)?;
        debug!(%kind, position, "entry removed");
        Ok(removed)
    }

    /// Empties the ledger and deletes the persisted state.
    pub fn clear(&mut self) -> Result<()> {
        self.storage.clear()?;
        self.ledger = Ledger::default();
        debug!("ledger cleared");
        Ok(())
    }

    fn commit(&mut self, next: Ledger) -> Result<()> {
        self.storage.save(&next)?;
        self.ledger = next;
        Ok(())
    }
}
