use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only view of a ledger returned by every `reset`/`record`.
///
/// The core produces these, the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Session (strategy) this snapshot belongs to
    pub session_id: Uuid,

    /// When the session was started by a reset
    pub started_at: DateTime<Utc>,

    /// Running signed total
    pub pnl: f64,

    pub wins: u64,

    pub losses: u64,

    /// wins + losses
    pub total_trades: u64,

    /// Percentage of trades that were gains, 0 when there are none
    pub win_rate: f64,

    /// Full PnL series, zero baseline first
    pub history: Vec<f64>,

    /// Set when the history file could not be written for this update.
    /// The in-memory values above are still authoritative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistence_warning: Option<String>,
}

impl LedgerSnapshot {
    /// `"PnL: 42"` style label.
    #[must_use]
    pub fn pnl_text(&self) -> String {
        format!("PnL: {}", self.pnl)
    }

    /// Win rate with two decimals, e.g. `"Win Rate: 50.00%"`.
    #[must_use]
    pub fn win_rate_text(&self) -> String {
        format!("Win Rate: {:.2}%", self.win_rate)
    }

    /// `"Wins: 3 / Losses: 1"` style label.
    #[must_use]
    pub fn record_text(&self) -> String {
        format!("Wins: {} / Losses: {}", self.wins, self.losses)
    }

    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.persistence_warning.is_none()
    }
}
