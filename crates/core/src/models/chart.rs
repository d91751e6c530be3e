use serde::{Deserialize, Serialize};

/// A single data point of the PnL trend chart.
///
/// Index 0 is the zero baseline; index `n` is the PnL after the n-th trade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub trade_index: usize,
    pub pnl: f64,
}
