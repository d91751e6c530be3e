use crate::errors::{CoreError, ValidationError};
use crate::models::ledger::{LedgerState, PnlHistory};
use crate::models::trade::Trade;

/// Validates trades and applies them to ledger state.
///
/// Pure business logic — no I/O. Easy to test.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Check a trade against the amount rules.
    ///
    /// Rules:
    /// - Gain amount must be > 0
    /// - Loss amount must be >= 0
    /// - Neither may be NaN or infinite
    pub fn validate(&self, trade: &Trade) -> Result<(), ValidationError> {
        let amount = trade.amount();
        let valid = amount.is_finite()
            && match trade {
                Trade::Gain(_) => amount > 0.0,
                Trade::Loss(_) => amount >= 0.0,
            };
        if valid {
            Ok(())
        } else {
            Err(trade.kind().rejection())
        }
    }

    /// Validate then apply a trade: move PnL, bump the matching counter and
    /// append the new PnL to the history. Nothing changes on rejection,
    /// including a trade that would push PnL past the range of `f64`.
    pub fn apply(
        &self,
        state: &mut LedgerState,
        history: &mut PnlHistory,
        trade: &Trade,
    ) -> Result<f64, ValidationError> {
        self.validate(trade)?;

        let next = state.pnl + trade.pnl_delta();
        if !next.is_finite() {
            return Err(trade.kind().rejection());
        }

        state.pnl = next;
        match trade {
            Trade::Gain(_) => state.wins += 1,
            Trade::Loss(_) => state.losses += 1,
        }
        history.push(state.pnl);

        debug_assert_eq!(
            history.len() as u64,
            state.total_trades() + 1,
            "history must hold one entry per trade plus the baseline"
        );
        Ok(state.pnl)
    }

    /// Reconstruct counters from a persisted PnL series.
    ///
    /// A step up is a gain. Any other step is a loss, since a zero-amount
    /// loss is the only trade that leaves PnL flat.
    ///
    /// Limit: a gain too small to change PnL at its magnitude (e.g. `1.0`
    /// on top of `1e17`) is stored as a flat step and comes back as a loss.
    /// The file holds PnL values only, so the trade kind cannot be recovered.
    pub fn rebuild(&self, values: Vec<f64>) -> Result<(LedgerState, PnlHistory), CoreError> {
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(CoreError::InvalidFileFormat(format!(
                "non-finite PnL value {bad}"
            )));
        }
        let history = PnlHistory::from_values(values).ok_or_else(|| {
            CoreError::InvalidFileFormat("history must start with a 0 baseline row".into())
        })?;

        let mut state = LedgerState::default();
        for pair in history.values().windows(2) {
            if pair[1] > pair[0] {
                state.wins += 1;
            } else {
                state.losses += 1;
            }
        }
        state.pnl = history.latest();

        Ok((state, history))
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
