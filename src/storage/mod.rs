pub mod json_backend;
pub mod memory;

use crate::errors::LedgerError;
use crate::ledger::Ledger;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends holding one ledger snapshot.
///
/// `load` is fail-soft: missing state and unparsable state both come back
/// as the empty ledger (the latter with a warning), so a damaged payload
/// can never block the caller. Only genuine I/O failure is an error.
pub trait StorageBackend: Send + Sync {
    fn load(&self) -> Result<Ledger>;
    /// Full overwrite of the persisted state.
    fn save(&self, ledger: &Ledger) -> Result<()>;
    /// Deletes the persisted state; absent state is not an error.
    fn clear(&self) -> Result<()>;
}

/// Parses a persisted payload, falling back to the empty ledger when it is
/// unreadable. The fallback is logged, never surfaced.
pub(crate) fn parse_or_default(data: &str, origin: &str) -> Ledger {
    match serde_json::from_str(data) {
        Ok(ledger) => ledger,
        Err(err) => {
            tracing::warn!(
                origin,
                error = %err,
                "stored ledger is unreadable, starting from an empty one"
            );
            Ledger::default()
        }
    }
}

pub use json_backend::JsonStore;
pub use memory::MemoryStore;
