use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Which button the user pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeKind {
    /// A winning trade; adds to PnL
    Gain,
    /// A losing trade; subtracts from PnL
    Loss,
}

impl std::fmt::Display for TradeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeKind::Gain => write!(f, "Gain"),
            TradeKind::Loss => write!(f, "Loss"),
        }
    }
}

impl TradeKind {
    /// The validation error reported when an amount of this kind is rejected.
    pub fn rejection(self) -> ValidationError {
        match self {
            TradeKind::Gain => ValidationError::InvalidGain,
            TradeKind::Loss => ValidationError::InvalidLoss,
        }
    }
}

/// A single trade intent. Transient: only its effect on the ledger is kept.
///
/// Amounts are magnitudes. A `Gain` must be strictly positive, a `Loss`
/// must be non-negative. Construction does not validate; the ledger does,
/// so an invalid trade can still be handed over and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Trade {
    Gain(f64),
    Loss(f64),
}

impl Trade {
    pub fn new(kind: TradeKind, amount: f64) -> Self {
        match kind {
            TradeKind::Gain => Trade::Gain(amount),
            TradeKind::Loss => Trade::Loss(amount),
        }
    }

    /// Build a trade from the raw contents of the amount input field.
    ///
    /// A missing, blank or non-numeric value is rejected with the error of
    /// the given kind, the same as an out-of-range number would be.
    pub fn from_input(kind: TradeKind, raw: Option<&str>) -> Result<Self, ValidationError> {
        let amount = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or_else(|| kind.rejection())?;
        Ok(Self::new(kind, amount))
    }

    #[must_use]
    pub fn kind(&self) -> TradeKind {
        match self {
            Trade::Gain(_) => TradeKind::Gain,
            Trade::Loss(_) => TradeKind::Loss,
        }
    }

    #[must_use]
    pub fn amount(&self) -> f64 {
        match self {
            Trade::Gain(amount) | Trade::Loss(amount) => *amount,
        }
    }

    /// Signed effect on the running PnL.
    #[must_use]
    pub fn pnl_delta(&self) -> f64 {
        match self {
            Trade::Gain(amount) => *amount,
            Trade::Loss(amount) => -*amount,
        }
    }
}
