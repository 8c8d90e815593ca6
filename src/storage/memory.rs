use std::sync::{Mutex, MutexGuard};

use crate::ledger::Ledger;

use super::{parse_or_default, Result, StorageBackend};

/// Keeps the serialized payload in memory.
///
/// The payload passes through the same serde path as the file backend,
/// including the fail-soft parse on load, so tests can exercise persistence
/// behavior without touching disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    payload: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a raw payload, as if a previous run had written it.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Mutex::new(Some(payload.into())),
        }
    }

    /// The currently persisted payload, if any.
    pub fn payload(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.payload
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StorageBackend for MemoryStore {
    fn load(&self) -> Result<Ledger> {
        match self.lock().as_deref() {
            Some(data) => Ok(parse_or_default(data, "memory")),
            None => Ok(Ledger::default()),
        }
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let json = serde_json::to_string_pretty(ledger)?;
        *self.lock() = Some(json);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.lock() = None;
        Ok(())
    }
}
