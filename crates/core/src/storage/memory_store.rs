use crate::errors::CoreError;

use super::traits::HistoryStore;

/// History kept only in memory, for sessions that should not leave a file behind.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStore {
    rows: Option<Vec<f64>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows stored so far, if the store was ever reset.
    #[must_use]
    pub fn rows(&self) -> Option<&[f64]> {
        self.rows.as_deref()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn location(&self) -> String {
        "memory".into()
    }

    fn reset_history(&mut self) -> Result<(), CoreError> {
        self.rows = Some(vec![0.0]);
        Ok(())
    }

    fn append(&mut self, pnl: f64) -> Result<(), CoreError> {
        self.rows.get_or_insert_with(|| vec![0.0]).push(pnl);
        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<f64>>, CoreError> {
        Ok(self.rows.clone())
    }
}
