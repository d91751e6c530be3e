use crate::errors::CoreError;

/// Trait abstraction for where the PnL history is persisted.
///
/// The ledger is the only writer. Implementations only have to keep the
/// rows in order; they never see trades or counters.
pub trait HistoryStore: Send {
    /// Human-readable location of the history (for logs/warnings).
    fn location(&self) -> String;

    /// Discard any stored history and leave just the zero baseline.
    fn reset_history(&mut self) -> Result<(), CoreError>;

    /// Append one PnL value after the existing rows.
    fn append(&mut self, pnl: f64) -> Result<(), CoreError>;

    /// Read every stored value in chronological order, baseline included.
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<f64>>, CoreError>;
}
