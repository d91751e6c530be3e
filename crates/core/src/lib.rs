pub mod errors;
pub mod models;
pub mod services;
pub mod shared;
pub mod storage;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use models::{
    chart::ChartPoint,
    ledger::{LedgerState, PnlHistory},
    settings::Settings,
    snapshot::LedgerSnapshot,
    trade::Trade,
};
use services::{chart_service::ChartService, ledger_service::LedgerService};
use storage::{
    csv_store::CsvHistoryStore, memory_store::MemoryHistoryStore, traits::HistoryStore,
};
use uuid::Uuid;

use errors::{CoreError, ValidationError};

/// The active strategy's identity. Absent until the first reset.
#[derive(Debug, Clone, Copy)]
struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
}

impl Session {
    fn fresh() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
        }
    }
}

/// Main entry point for the trade ledger core library.
///
/// Owns the running statistics and the PnL history of one session and is
/// the only writer of the persisted history. Every mutation goes through
/// [`TradeLedger::reset`] or [`TradeLedger::record`].
#[must_use]
pub struct TradeLedger {
    state: LedgerState,
    history: PnlHistory,
    session: Option<Session>,
    store: Box<dyn HistoryStore>,
    /// Resume from the store instead of overwriting it when activated.
    load_existing: bool,
    /// Set after a failed write; the next write rewrites the whole history.
    out_of_sync: bool,
    ledger_service: LedgerService,
    chart_service: ChartService,
}

impl std::fmt::Debug for TradeLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradeLedger")
            .field("state", &self.state)
            .field("history_len", &self.history.len())
            .field("session", &self.session.map(|s| s.id))
            .field("store", &self.store.location())
            .field("out_of_sync", &self.out_of_sync)
            .finish()
    }
}

impl TradeLedger {
    /// Create a ledger backed by whatever `settings` describe.
    /// Nothing is written until the first reset or record.
    pub fn new(settings: &Settings) -> Self {
        let store: Box<dyn HistoryStore> = match &settings.history_path {
            Some(path) => Box::new(CsvHistoryStore::new(path)),
            None => Box::new(MemoryHistoryStore::new()),
        };
        let mut ledger = Self::with_store(store);
        ledger.load_existing = settings.load_existing;
        ledger
    }

    /// Create a ledger on top of a custom history store.
    pub fn with_store(store: Box<dyn HistoryStore>) -> Self {
        Self {
            state: LedgerState::default(),
            history: PnlHistory::new(),
            session: None,
            store,
            load_existing: false,
            out_of_sync: false,
            ledger_service: LedgerService::new(),
            chart_service: ChartService::new(),
        }
    }

    /// Create a ledger and bring it to the active state.
    ///
    /// With `load_existing` set and a history already on disk, the previous
    /// session is restored; otherwise a fresh session is started, which
    /// overwrites any existing file.
    pub fn start(settings: &Settings) -> Result<(Self, LedgerSnapshot), CoreError> {
        let mut ledger = Self::new(settings);
        if settings.load_existing && ledger.store.load()?.is_some() {
            let snapshot = ledger.restore()?;
            return Ok((ledger, snapshot));
        }
        let snapshot = ledger.reset();
        Ok((ledger, snapshot))
    }

    // ── Session ─────────────────────────────────────────────────────

    /// Start a new strategy: zero every counter, drop the history back to
    /// the baseline and overwrite the persisted history.
    pub fn reset(&mut self) -> LedgerSnapshot {
        self.state = LedgerState::default();
        self.history.clear();
        let session = Session::fresh();
        self.session = Some(session);
        info!("Started ledger session {} ({})", session.id, self.store.location());

        let warning = self.store.reset_history().err().map(|e| {
            warn!("Could not reset PnL history at {}: {e}", self.store.location());
            e.to_string()
        });
        self.out_of_sync = warning.is_some();
        self.build_snapshot(warning)
    }

    /// Rebuild the session from the persisted history.
    ///
    /// Counters are reconstructed from the PnL steps. A store with nothing
    /// in it is treated as a fresh session.
    pub fn restore(&mut self) -> Result<LedgerSnapshot, CoreError> {
        let Some(values) = self.store.load()? else {
            return Ok(self.reset());
        };
        let (state, history) = self.ledger_service.rebuild(values)?;
        self.state = state;
        self.history = history;
        self.out_of_sync = false;
        let session = Session::fresh();
        self.session = Some(session);
        info!(
            "Restored ledger session {} from {}: {} trades, PnL {}",
            session.id,
            self.store.location(),
            self.state.total_trades(),
            self.state.pnl
        );
        Ok(self.build_snapshot(None))
    }

    /// Whether a session has been started (by reset or restore).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    // ── Trades ──────────────────────────────────────────────────────

    /// Record one trade.
    ///
    /// Invalid amounts are rejected with no effect on the ledger. An accepted
    /// trade updates the counters, extends the history and appends one row
    /// to the persisted history. A failed write is reported through
    /// [`LedgerSnapshot::persistence_warning`] and does not undo the trade.
    pub fn record(&mut self, trade: Trade) -> Result<LedgerSnapshot, ValidationError> {
        if let Err(e) = self.ledger_service.validate(&trade) {
            warn!("Rejected {} of {}: {e}", trade.kind(), trade.amount());
            return Err(e);
        }

        if !self.is_active() {
            self.activate();
        }

        let pnl = match self
            .ledger_service
            .apply(&mut self.state, &mut self.history, &trade)
        {
            Ok(pnl) => pnl,
            Err(e) => {
                warn!(
                    "Rejected {} of {}: PnL {} would overflow",
                    trade.kind(),
                    trade.amount(),
                    self.state.pnl
                );
                return Err(e);
            }
        };
        debug!(
            "Recorded {} of {}: PnL {pnl}, {}W/{}L",
            trade.kind(),
            trade.amount(),
            self.state.wins,
            self.state.losses
        );

        let warning = self.persist(pnl);
        Ok(self.build_snapshot(warning))
    }

    // ── Read access ─────────────────────────────────────────────────

    /// Current state without touching anything.
    /// Carries a warning while the persisted history is behind memory.
    pub fn snapshot(&self) -> LedgerSnapshot {
        self.build_snapshot(None)
    }

    /// Whether the persisted history is missing rows that memory holds.
    #[must_use]
    pub fn is_out_of_sync(&self) -> bool {
        self.out_of_sync
    }

    #[must_use]
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    #[must_use]
    pub fn history(&self) -> &PnlHistory {
        &self.history
    }

    /// The history as chart points, baseline first.
    #[must_use]
    pub fn chart_series(&self) -> Vec<ChartPoint> {
        self.chart_service.pnl_series(&self.history)
    }

    /// Largest peak-to-trough drop of the PnL in this session.
    #[must_use]
    pub fn max_drawdown(&self) -> f64 {
        self.chart_service.max_drawdown(&self.history)
    }

    /// Where the history is persisted.
    #[must_use]
    pub fn history_location(&self) -> String {
        self.store.location()
    }

    /// Export the current snapshot as pretty JSON.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize snapshot: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    /// First use of a ledger built with `new`: resume the stored history
    /// when asked to and there is one, otherwise start a fresh session.
    fn activate(&mut self) {
        if self.load_existing {
            match self.store.load() {
                Ok(Some(_)) => match self.restore() {
                    Ok(_) => return,
                    Err(e) => warn!(
                        "Could not resume PnL history at {}: {e}; starting over",
                        self.store.location()
                    ),
                },
                Ok(None) => {}
                Err(e) => warn!(
                    "Could not read PnL history at {}: {e}; starting over",
                    self.store.location()
                ),
            }
        }
        self.reset();
    }

    /// Write the newest PnL. After an earlier failure the whole history is
    /// rewritten so the store never keeps a gap.
    fn persist(&mut self, pnl: f64) -> Option<String> {
        let result = if self.out_of_sync {
            self.rewrite_history()
        } else {
            self.store.append(pnl)
        };
        match result {
            Ok(()) => {
                if self.out_of_sync {
                    info!("PnL history at {} is back in sync", self.store.location());
                }
                self.out_of_sync = false;
                None
            }
            Err(e) => {
                warn!("Could not write PnL {pnl} to {}: {e}", self.store.location());
                self.out_of_sync = true;
                Some(e.to_string())
            }
        }
    }

    fn rewrite_history(&mut self) -> Result<(), CoreError> {
        self.store.reset_history()?;
        for pnl in self.history.iter().skip(1) {
            self.store.append(pnl)?;
        }
        Ok(())
    }

    fn build_snapshot(&self, persistence_warning: Option<String>) -> LedgerSnapshot {
        // Before the first reset there is no session; report a nil id.
        let session = self.session.unwrap_or(Session {
            id: Uuid::nil(),
            started_at: DateTime::<Utc>::default(),
        });
        LedgerSnapshot {
            session_id: session.id,
            started_at: session.started_at,
            pnl: self.state.pnl,
            wins: self.state.wins,
            losses: self.state.losses,
            total_trades: self.state.total_trades(),
            win_rate: self.state.win_rate(),
            history: self.history.values().to_vec(),
            persistence_warning: persistence_warning.or_else(|| {
                self.out_of_sync.then(|| {
                    format!("PnL history at {} is out of sync", self.store.location())
                })
            }),
        }
    }
}
