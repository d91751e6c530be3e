use crate::models::chart::ChartPoint;
use crate::models::ledger::PnlHistory;

/// Turns the PnL history into chart-ready points.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// One point per history entry, baseline at index 0.
    pub fn pnl_series(&self, history: &PnlHistory) -> Vec<ChartPoint> {
        history
            .iter()
            .enumerate()
            .map(|(trade_index, pnl)| ChartPoint { trade_index, pnl })
            .collect()
    }

    /// Largest drop from a running peak, as a positive number (0 if PnL never fell).
    pub fn max_drawdown(&self, history: &PnlHistory) -> f64 {
        let mut peak = f64::MIN;
        let mut worst = 0.0_f64;
        for pnl in history.iter() {
            peak = peak.max(pnl);
            worst = worst.max(peak - pnl);
        }
        worst
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
