use serde::{Deserialize, Serialize};

/// Running statistics of one session.
///
/// Only the three counters are stored; trade count and win rate are
/// always derived from them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Running signed total of gains minus losses
    pub pnl: f64,

    /// Accepted Gain trades
    pub wins: u64,

    /// Accepted Loss trades
    pub losses: u64,
}

impl LedgerState {
    #[must_use]
    pub fn total_trades(&self) -> u64 {
        self.wins + self.losses
    }

    /// Percentage of accepted trades that were gains.
    /// Exactly `0.0` when no trade has been recorded yet.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        let total = self.total_trades();
        if total == 0 {
            return 0.0;
        }
        self.wins as f64 / total as f64 * 100.0
    }
}

/// Chronological PnL values, one per accepted trade, anchored at a
/// leading zero so the chart starts at the origin.
///
/// Append-only within a session. The only way to shrink it is
/// [`PnlHistory::clear`], which goes back to `[0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlHistory {
    values: Vec<f64>,
}

impl Default for PnlHistory {
    fn default() -> Self {
        Self { values: vec![0.0] }
    }
}

impl PnlHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a history from persisted values. Returns `None` when the
    /// values do not start at the zero baseline.
    pub fn from_values(values: Vec<f64>) -> Option<Self> {
        match values.first() {
            Some(first) if *first == 0.0 => Some(Self { values }),
            _ => None,
        }
    }

    pub fn push(&mut self, pnl: f64) {
        self.values.push(pnl);
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.values.push(0.0);
    }

    /// Number of entries, baseline included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Never true: the baseline is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn latest(&self) -> f64 {
        self.values.last().copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}
