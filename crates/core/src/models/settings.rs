use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File the dashboard has always written its PnL history to.
pub const DEFAULT_HISTORY_FILE: &str = "pnl_history.csv";

/// Ledger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Where the CSV history is written. `None` keeps the ledger in memory only.
    pub history_path: Option<PathBuf>,

    /// Resume from an existing history file on start instead of overwriting it.
    #[serde(default)]
    pub load_existing: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_path: Some(PathBuf::from(DEFAULT_HISTORY_FILE)),
            load_existing: false,
        }
    }
}

impl Settings {
    /// Settings for a ledger that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            history_path: None,
            load_existing: false,
        }
    }

    pub fn with_history_path(path: impl Into<PathBuf>) -> Self {
        Self {
            history_path: Some(path.into()),
            load_existing: false,
        }
    }
}
