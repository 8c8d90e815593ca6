use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use dirs::home_dir;

use crate::errors::Result;

const DATA_DIR_NAME: &str = ".spendtrail_core";
const LEDGER_FILE: &str = "ledger.json";
const CONFIG_FILE: &str = "config.json";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("spendtrail_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// The application data directory, `~/.spendtrail_core`.
pub fn app_data_dir() -> PathBuf {
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// Default path of the persisted ledger record.
pub fn ledger_file() -> PathBuf {
    app_data_dir().join(LEDGER_FILE)
}

/// Default path of the presentation preferences file.
pub fn config_file() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}

/// Creates `path` and any missing parents.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}
