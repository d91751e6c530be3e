pub mod chart;
pub mod ledger;
pub mod settings;
pub mod snapshot;
pub mod trade;
